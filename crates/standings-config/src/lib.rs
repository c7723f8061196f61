//! # Standings Config
//!
//! Type-safe configuration for standings-race.
//!
//! Configuration is layered: defaults, then an optional YAML file, then
//! `STANDINGS_*` environment variables, then command-line overrides. The
//! result is validated before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validation::*;
