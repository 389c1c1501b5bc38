//! Static arena content and loaders.
//!
//! This crate houses the canonical fighter roster and, behind the `loaders`
//! feature, a TOML loader that lets a deployment override template stats.
//!
//! Content is read-only: sessions clone templates out of the [`Roster`] and
//! never write back.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::Roster;

#[cfg(feature = "loaders")]
pub use loaders::{FighterSpec, RosterLoader, RosterSpec};
