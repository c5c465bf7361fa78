//! Keepsake core - state machines and curve geometry for two small
//! interactive toys, kept free of any UI dependency so the whole sequence
//! logic is unit-testable.

pub mod bouquet;
pub mod envelope;
pub mod geometry;
pub mod utils;

pub use bouquet::{Bouquet, Tulip, WitherPhase};
pub use envelope::EnvelopeState;
pub use geometry::Point2;
pub use utils::config::Config;
pub use utils::error::{KeepsakeError, KeepsakeResult};
