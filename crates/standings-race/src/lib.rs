//! # Standings Race
//!
//! Renders a season's cumulative league points as an animated bar-chart
//! race, one frame per round.
//!
//! This is the binary crate that ties configuration, the season loader
//! and the renderer together and maps the result to an exit status.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod race;

pub use error::*;
pub use race::*;
