//! What the page should show right now
//!
//! The renderer consumes a `ViewModel` and nothing else; it never reads the
//! game state directly.

use glam::DVec2;
use serde::Serialize;

/// The slot where the "No" button normally sits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DismissControl {
    /// The runaway button. `position: None` means its static flow position.
    Button {
        label: &'static str,
        position: Option<DVec2>,
    },
    /// The single reset affordance
    SecondChance { label: &'static str, visible: bool },
    /// Permanent refusal
    Refusal { message: &'static str, visible: bool },
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewModel {
    Proposal {
        gif: &'static str,
        prompt: Option<&'static str>,
        angry: bool,
        /// The "Yes" button leaves together with the "No" button
        yes_visible: bool,
        yes_scale: f64,
        /// Generation of the running shake; a new value restarts the animation
        shake: Option<u32>,
        dismiss: DismissControl,
    },
    Celebration {
        gif: &'static str,
        headline: &'static str,
        message: &'static str,
    },
}

impl ViewModel {
    pub fn is_celebration(&self) -> bool {
        matches!(self, ViewModel::Celebration { .. })
    }

    pub fn gif(&self) -> &'static str {
        match self {
            ViewModel::Proposal { gif, .. } | ViewModel::Celebration { gif, .. } => *gif,
        }
    }

    /// Label of the dismiss button, if it is on screen
    pub fn dismiss_label(&self) -> Option<&'static str> {
        match self {
            ViewModel::Proposal {
                dismiss: DismissControl::Button { label, .. },
                ..
            } => Some(*label),
            _ => None,
        }
    }
}
