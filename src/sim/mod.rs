//! Pure interaction logic
//!
//! Everything the page decides lives here. This module must stay free of
//! browser dependencies:
//! - Seeded RNG only (callers inject it)
//! - Timers are deadlines, advanced by the caller's clock
//! - No DOM access; positions are returned, never applied

pub mod effects;
pub mod geometry;
pub mod placement;
pub mod state;

pub use effects::{EffectKind, EffectTimers};
pub use geometry::{Rect, Size};
pub use placement::{PlacementParams, PlacementResult, place_away_from};
pub use state::{DismissTransition, GameState, HostileControl, Ladder, Tier};
