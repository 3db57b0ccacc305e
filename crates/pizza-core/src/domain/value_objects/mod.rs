//! Domain value objects.

mod tags;

pub use tags::*;
