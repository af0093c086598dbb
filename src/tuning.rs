//! Data-driven tuning
//!
//! Compiled-in defaults from `consts`, optionally overridden by a JSON
//! document. Every field may be omitted; invalid groups fall back to their
//! defaults with a warning instead of failing the page.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Ladder, PlacementParams};

/// Confetti burst handed to the celebration collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: f64,
    pub origin: ConfettiOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiOrigin {
    pub y: f64,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: CONFETTI_PARTICLES,
            spread: CONFETTI_SPREAD,
            origin: ConfettiOrigin {
                y: CONFETTI_ORIGIN_Y,
            },
        }
    }
}

/// Effect durations (ms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTiming {
    pub shake_ms: f64,
    pub reveal_ms: f64,
}

impl Default for EffectTiming {
    fn default() -> Self {
        Self {
            shake_ms: SHAKE_MS,
            reveal_ms: REVEAL_MS,
        }
    }
}

/// All tunable numbers of the card
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ladder: Ladder,
    pub placement: PlacementParams,
    pub effects: EffectTiming,
    pub confetti: ConfettiBurst,
}

impl Tuning {
    /// Parse overrides and sanitize them
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Parse overrides, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Replace any invalid group with its defaults
    pub fn sanitized(mut self) -> Self {
        if !self.ladder.is_valid() {
            log::warn!("Invalid escalation ladder {:?}, using defaults", self.ladder);
            self.ladder = Ladder::default();
        }

        let p = &self.placement;
        if p.attempts == 0 || p.buffer < 0.0 || p.margin < 0.0 {
            log::warn!("Invalid placement params {:?}, using defaults", p);
            self.placement = PlacementParams::default();
        }

        let e = &self.effects;
        if e.shake_ms < 0.0 || e.reveal_ms < 0.0 {
            log::warn!("Invalid effect timing {:?}, using defaults", e);
            self.effects = EffectTiming::default();
        }

        let c = &self.confetti;
        if c.spread < 0.0 || !(0.0..=1.0).contains(&c.origin.y) {
            log::warn!("Invalid confetti burst {:?}, using defaults", c);
            self.confetti = ConfettiBurst::default();
        }

        self
    }

    /// Load overrides from the page's `<script id="tuning">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json_or_default(&json),
            _ => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Load overrides from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Cannot read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_partial_override() {
        let tuning =
            Tuning::from_json(r#"{"placement": {"attempts": 10}, "effects": {"shakeMs": 1}}"#)
                .unwrap();
        assert_eq!(tuning.placement.attempts, 10);
        assert_eq!(tuning.placement.buffer, COLLISION_BUFFER);
        // Unknown keys are ignored
        assert_eq!(tuning.effects, EffectTiming::default());
    }

    #[test]
    fn test_invalid_ladder_falls_back() {
        let tuning =
            Tuning::from_json(r#"{"ladder": {"hesitant_at": 6, "insistent_at": 5}}"#).unwrap();
        assert_eq!(tuning.ladder, Ladder::default());
    }

    #[test]
    fn test_invalid_placement_falls_back() {
        let tuning = Tuning::from_json(r#"{"placement": {"attempts": 0}}"#).unwrap();
        assert_eq!(tuning.placement, PlacementParams::default());
        let tuning = Tuning::from_json(r#"{"placement": {"margin": -5.0}}"#).unwrap();
        assert_eq!(tuning.placement, PlacementParams::default());
    }

    #[test]
    fn test_confetti_uses_js_field_names() {
        let json = serde_json::to_value(ConfettiBurst::default()).unwrap();
        assert_eq!(json["particleCount"], 100);
        assert_eq!(json["spread"], 70.0);
        assert_eq!(json["origin"]["y"], 0.6);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ladder:").is_err());
        assert_eq!(Tuning::from_json_or_default("nope"), Tuning::default());
    }
}
