//! Terminal frontend for the arena.
//!
//! A line-oriented menu: show the roster, pick two fighters, watch the duel
//! scroll by. All rules live in `arena-core`; this crate only reads input and
//! renders notifications.
pub mod app;
pub mod config;
pub mod presentation;

pub use app::App;
pub use config::CliConfig;
pub use presentation::{ConsoleRenderer, render_snapshot};
