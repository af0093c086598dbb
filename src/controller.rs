//! Page-level controller
//!
//! Owns the escalation state, the runaway button's position and the effect
//! timers. The browser binding forwards interaction events here and renders
//! whatever `view()` returns; nothing else mutates this state.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::copy;
use crate::gifs;
use crate::sim::{
    DismissTransition, EffectKind, EffectTimers, GameState, HostileControl, PlacementResult, Rect,
    Size, place_away_from,
};
use crate::tuning::{ConfettiBurst, Tuning};
use crate::view::{DismissControl, ViewModel};

/// One measurement of the card, in the runaway button's parent space
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Area the button may roam (the card)
    pub container: Rect,
    /// Current size of the button
    pub element: Size,
    /// Elements the button must keep clear of
    pub obstacles: Vec<Rect>,
}

/// Supplies the current layout on demand. `None` while anything is unmounted.
pub trait GeometryProvider {
    fn measure(&self) -> Option<Layout>;
}

/// A layout that never changes
#[derive(Debug, Clone, Default)]
pub struct FixedLayout(pub Option<Layout>);

impl GeometryProvider for FixedLayout {
    fn measure(&self) -> Option<Layout> {
        self.0.clone()
    }
}

/// Fire-and-forget celebration effect
pub trait Celebration {
    fn celebrate(&mut self, burst: &ConfettiBurst);
}

impl<F: FnMut(&ConfettiBurst)> Celebration for F {
    fn celebrate(&mut self, burst: &ConfettiBurst) {
        (*self)(burst)
    }
}

/// What a dismiss attempt did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DismissOutcome {
    /// Not counted; the dismiss button is gone
    Ignored,
    /// Counted, but the button stayed put
    Escalated,
    /// Counted and the button ran away
    Moved(PlacementResult),
}

/// The page's single owner of interaction state
pub struct Controller {
    state: GameState,
    tuning: Tuning,
    /// Runaway button position; `None` keeps it in normal flow
    position: Option<DVec2>,
    /// The button has run away at least once
    teased: bool,
    timers: EffectTimers,
    /// Bumped every time a shake is armed
    shake_generation: u32,
    rng: Pcg32,
}

impl Controller {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_ladder(tuning.ladder),
            tuning,
            position: None,
            teased: false,
            timers: EffectTimers::new(),
            shake_generation: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    pub fn timers(&self) -> &EffectTimers {
        &self.timers
    }

    /// Pointer-enter / touch-start on the dismiss button
    pub fn on_dismiss<G: GeometryProvider + ?Sized>(
        &mut self,
        geometry: &G,
        now_ms: f64,
    ) -> DismissOutcome {
        let transition = self.state.dismiss();
        let DismissTransition::Advanced { from, to } = transition else {
            return DismissOutcome::Ignored;
        };
        if from != to {
            log::info!("Escalated {:?} -> {:?}", from, to);
        }

        self.timers
            .schedule(EffectKind::Shake, now_ms, self.tuning.effects.shake_ms);
        self.shake_generation = self.shake_generation.wrapping_add(1);

        if transition.entered_hostile() {
            self.position = None;
            self.timers
                .schedule(EffectKind::Reveal, now_ms, self.tuning.effects.reveal_ms);
            return DismissOutcome::Escalated;
        }

        let Some(layout) = geometry.measure() else {
            log::debug!("Layout not measurable, button stays put");
            return DismissOutcome::Escalated;
        };

        let result = place_away_from(
            &layout.container,
            &layout.obstacles,
            layout.element,
            &self.tuning.placement,
            &mut self.rng,
        );
        self.position = Some(result.position);
        self.teased = true;
        DismissOutcome::Moved(result)
    }

    /// Click on "Yes"
    pub fn on_accept<C: Celebration + ?Sized>(&mut self, celebration: &mut C) -> bool {
        if !self.state.accept() {
            return false;
        }
        self.timers.cancel_all();
        log::info!(
            "Accepted after {} attempts ({} resets)",
            self.state.dismiss_attempts,
            self.state.reset_count
        );
        celebration.celebrate(&self.tuning.confetti);
        true
    }

    /// Click on the second-chance button
    pub fn on_reset(&mut self) -> bool {
        if !self.state.reset() {
            return false;
        }
        self.position = None;
        self.timers.cancel_all();
        log::info!("Second chance used");
        true
    }

    /// Advance the effect clock; returns the effects that just ended
    pub fn advance(&mut self, now_ms: f64) -> Vec<EffectKind> {
        self.timers.expire(now_ms)
    }

    pub fn view(&self) -> ViewModel {
        if self.state.accepted {
            return ViewModel::Celebration {
                gif: gifs::CELEBRATION,
                headline: copy::HEADLINE,
                message: copy::ACCEPTED_MESSAGE,
            };
        }

        let angry = self.state.is_angry();
        let gif = if angry {
            gifs::ANGRY
        } else if self.teased {
            gifs::TEASING
        } else {
            gifs::CUTE
        };

        let revealed = !self.timers.is_pending(EffectKind::Reveal);
        let dismiss = match self.state.hostile_control() {
            None => DismissControl::Button {
                label: self.state.label(),
                position: self.position,
            },
            Some(HostileControl::SecondChance) => DismissControl::SecondChance {
                label: copy::SECOND_CHANCE,
                visible: revealed,
            },
            Some(HostileControl::Refusal) => DismissControl::Refusal {
                message: copy::REFUSAL,
                visible: revealed,
            },
        };

        ViewModel::Proposal {
            gif,
            prompt: (!angry).then_some(copy::PROMPT),
            angry,
            yes_visible: self.state.hostile_control().is_none(),
            yes_scale: self.state.scale(),
            shake: self
                .timers
                .is_pending(EffectKind::Shake)
                .then_some(self.shake_generation),
            dismiss,
        }
    }
}
