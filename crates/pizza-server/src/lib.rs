//! Pizza server library.
//!
//! Wires the configuration, repository, service and REST crates into a
//! single process.

pub mod di;
pub mod startup;
