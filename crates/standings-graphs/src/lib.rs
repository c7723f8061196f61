//! # Standings Graphs
//!
//! Season loading, standings aggregation and bar-chart race rendering.
//!
//! Data flows one way: the season file is parsed into [`MatchRecord`]s,
//! unplayed fixtures are dropped, points are folded into a cumulative
//! [`StandingsTable`], and the table is drawn one [`Frame`] per round into
//! an animated GIF with plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod layout;
pub mod loader;
pub mod renderer;
pub mod table;
pub mod types;

pub use aggregator::*;
pub use layout::*;
pub use loader::*;
pub use renderer::*;
pub use table::*;
pub use types::*;
