//! # Standings Common
//!
//! Shared error taxonomy, logging setup and test fixtures for the
//! standings-race workspace.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, StandingsError};
pub use logging::{init_logging, LoggingConfig};
