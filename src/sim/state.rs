//! Escalation state machine
//!
//! Every dismiss attempt pushes the card one step further: the "No" label
//! wavers, the "Yes" button grows, and after enough attempts the "No" button
//! is taken away. The first time that happens a single second chance is
//! offered; the second time the refusal is final.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::copy;

/// Escalation tier derived from the attempt count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// "No"
    Calm,
    /// "sochle"
    Hesitant,
    /// "Mt maan"
    Insistent,
    /// Dismiss control replaced by a second chance or a refusal
    Hostile,
    /// Terminal
    Accepted,
}

/// What replaces the dismiss control once attempts are exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostileControl {
    /// One reset affordance (first exhaustion)
    SecondChance,
    /// No further interaction (second exhaustion)
    Refusal,
}

/// Result of a dismiss attempt on the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTransition {
    /// Attempt not counted (already hostile or accepted)
    Ignored,
    /// Attempt counted; `from`/`to` tiers
    Advanced { from: Tier, to: Tier },
}

impl DismissTransition {
    /// True when this attempt took the dismiss control away
    pub fn entered_hostile(&self) -> bool {
        matches!(self, DismissTransition::Advanced { from, to: Tier::Hostile } if *from != Tier::Hostile)
    }
}

/// Thresholds and growth curve for the escalation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ladder {
    pub hesitant_at: u32,
    pub insistent_at: u32,
    pub hostile_at: u32,
    pub scale_step: f64,
    pub scale_cap: f64,
}

impl Default for Ladder {
    fn default() -> Self {
        Self {
            hesitant_at: HESITANT_AT,
            insistent_at: INSISTENT_AT,
            hostile_at: HOSTILE_AT,
            scale_step: SCALE_STEP,
            scale_cap: SCALE_CAP,
        }
    }
}

impl Ladder {
    /// Thresholds strictly increase and the growth curve is sane
    pub fn is_valid(&self) -> bool {
        0 < self.hesitant_at
            && self.hesitant_at < self.insistent_at
            && self.insistent_at < self.hostile_at
            && self.scale_step > 0.0
            && self.scale_cap >= 1.0
    }

    /// Tier for a non-accepted attempt count
    pub fn tier_for(&self, attempts: u32) -> Tier {
        if attempts >= self.hostile_at {
            Tier::Hostile
        } else if attempts >= self.insistent_at {
            Tier::Insistent
        } else if attempts >= self.hesitant_at {
            Tier::Hesitant
        } else {
            Tier::Calm
        }
    }

    /// "Yes" button scale after `attempts` dismissals
    pub fn scale_for(&self, attempts: u32) -> f64 {
        (1.0 + self.scale_step * attempts as f64).min(self.scale_cap)
    }
}

/// Complete escalation state for one page visit
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub dismiss_attempts: u32,
    pub accepted: bool,
    pub reset_count: u32,
    ladder: Ladder,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_ladder(Ladder::default())
    }

    pub fn with_ladder(ladder: Ladder) -> Self {
        Self {
            dismiss_attempts: 0,
            accepted: false,
            reset_count: 0,
            ladder,
        }
    }

    pub fn tier(&self) -> Tier {
        if self.accepted {
            Tier::Accepted
        } else {
            self.ladder.tier_for(self.dismiss_attempts)
        }
    }

    /// Label of the dismiss button for the current attempt count
    pub fn label(&self) -> &'static str {
        let a = self.dismiss_attempts;
        if a >= self.ladder.insistent_at {
            copy::LABEL_INSISTENT
        } else if a >= self.ladder.hesitant_at {
            copy::LABEL_HESITANT
        } else {
            copy::LABEL_CALM
        }
    }

    /// Current "Yes" button scale, in [1.0, cap]
    pub fn scale(&self) -> f64 {
        self.ladder.scale_for(self.dismiss_attempts)
    }

    /// What stands in for the dismiss button, if it has been taken away
    pub fn hostile_control(&self) -> Option<HostileControl> {
        match self.tier() {
            Tier::Hostile if self.reset_count == 0 => Some(HostileControl::SecondChance),
            Tier::Hostile => Some(HostileControl::Refusal),
            _ => None,
        }
    }

    /// Angry imagery only appears once the second chance is used up
    pub fn is_angry(&self) -> bool {
        self.tier() == Tier::Hostile && self.reset_count > 0
    }

    /// Whether a dismiss attempt would be counted
    pub fn accepts_dismiss(&self) -> bool {
        !matches!(self.tier(), Tier::Hostile | Tier::Accepted)
    }

    /// Count one dismiss attempt
    pub fn dismiss(&mut self) -> DismissTransition {
        if !self.accepts_dismiss() {
            return DismissTransition::Ignored;
        }
        let from = self.tier();
        self.dismiss_attempts += 1;
        DismissTransition::Advanced {
            from,
            to: self.tier(),
        }
    }

    /// Use the single second chance. Ignored unless it is on offer.
    pub fn reset(&mut self) -> bool {
        if self.hostile_control() != Some(HostileControl::SecondChance) {
            return false;
        }
        self.dismiss_attempts = 0;
        self.reset_count += 1;
        true
    }

    /// Say yes. Ignored if already accepted.
    pub fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        true
    }
}
