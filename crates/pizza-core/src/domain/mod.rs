//! Domain model of the pizza backend.
//!
//! Entities are transient request/response representations; storage is the
//! only owner of persistent state.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
