//! Session orchestration for the arena.
//!
//! This crate wires the roster, the random source and the duel engine into a
//! [`Session`] that frontends drive. Consumers pick two roster entries, start
//! the duel, and receive a report; the fighting copies never outlive it.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the selection and duel lifecycle
//! - [`observer`] turns duel notifications into structured log records
//! - [`error`] defines what a frontend can get wrong
pub mod error;
pub mod observer;
pub mod session;

pub use error::{Result, RuntimeError, SelectionError};
pub use observer::TracingObserver;
pub use session::{Session, SessionConfig};
