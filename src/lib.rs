//! Be Mine - a Valentine proposal card with a runaway "No" button
//!
//! Core modules:
//! - `sim`: Escalation state machine, evasive placement, effect timers
//! - `controller`: Page-level owner of all state, routes interaction events
//! - `view`: What the page should currently show
//! - `tuning`: Data-driven thresholds and effect constants

pub mod controller;
pub mod sim;
pub mod tuning;
pub mod view;

pub use controller::{Celebration, Controller, DismissOutcome, FixedLayout, GeometryProvider};
pub use tuning::Tuning;
pub use view::{DismissControl, ViewModel};

/// Game configuration constants
pub mod consts {
    /// Attempts at which the "No" label starts to waver
    pub const HESITANT_AT: u32 = 3;
    /// Attempts at which the "No" label turns insistent
    pub const INSISTENT_AT: u32 = 5;
    /// Attempts at which the "No" button is taken away
    pub const HOSTILE_AT: u32 = 8;

    /// "Yes" button growth per dismiss attempt
    pub const SCALE_STEP: f64 = 0.094;
    /// "Yes" button scale cap (reached after ~8 dismissals)
    pub const SCALE_CAP: f64 = 1.75;

    /// Samples drawn before settling for an unchecked spot
    pub const PLACEMENT_ATTEMPTS: u32 = 50;
    /// Extra clearance around each obstacle (px)
    pub const COLLISION_BUFFER: f64 = 10.0;
    /// Inset from the card edge (px)
    pub const EDGE_MARGIN: f64 = 20.0;

    /// Shake animation length (ms)
    pub const SHAKE_MS: f64 = 400.0;
    /// Delay before the hostile control appears (ms)
    pub const REVEAL_MS: f64 = 600.0;

    /// Confetti burst defaults
    pub const CONFETTI_PARTICLES: u32 = 100;
    pub const CONFETTI_SPREAD: f64 = 70.0;
    pub const CONFETTI_ORIGIN_Y: f64 = 0.6;
}

/// Copy shown on the card
pub mod copy {
    pub const LABEL_CALM: &str = "No";
    pub const LABEL_HESITANT: &str = "sochle";
    pub const LABEL_INSISTENT: &str = "Mt maan";

    pub const PROMPT: &str = "Will you be my Valentine? 💕";
    pub const SECOND_CHANCE: &str = "Chl second chance";
    pub const REFUSAL: &str = "Ja kisi aur se maan maine ni puchna ab";

    pub const HEADLINE: &str = "Yay!";
    pub const ACCEPTED_MESSAGE: &str = "You are my Valentine";
}

/// Imagery for each mood of the card
pub mod gifs {
    pub const CUTE: &str = "https://media.giphy.com/media/v1.Y2lkPTc5MGI3NjExaWZ6bWZxY2JwY2x2N3JrM2xwN3A5bG5mYjRmbHJ6b3h2d2Y5aSZlcD12MV9naWZzX3NlYXJjaCZjdD1n/3oriO0OEd9QIDdllqo/giphy.gif";
    pub const TEASING: &str = "https://media.giphy.com/media/g3y7Ojdct0aozW7M6x/giphy.gif";
    pub const ANGRY: &str = "https://media1.tenor.com/m/2Zhy-oXWJUwAAAAC/cat-angry-cat.gif";
    pub const CELEBRATION: &str =
        "https://media.tenor.com/gUiu1zyxfzYAAAAi/bear-kiss-bear-kisses.gif";
}
