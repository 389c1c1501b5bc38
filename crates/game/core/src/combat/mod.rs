//! Combat resolution primitives.
//!
//! Pure functions shared by every archetype. Archetype-specific behavior
//! (double damage, evasion, rage) lives in [`crate::fighter`] and calls into
//! these.
//!
//! # Core Functions
//!
//! - `mitigate`: converts incoming damage into health loss using armor

pub mod mitigation;

pub use mitigation::{GRAZE_DAMAGE, Mitigation, mitigate};
