//! # Pizza Core
//!
//! Core types, traits, and error definitions for the pizza ordering backend.
//! This crate provides the foundational abstractions used across all layers:
//! the error taxonomy, the domain entities and the tags codec.

pub mod domain;
pub mod error;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
