//! Collaborators the duel rules consume but do not own.
//!
//! The only one today is the random source. Callers pass it explicitly into
//! every operation that rolls, which keeps duels reproducible under test.

mod rng;

pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
