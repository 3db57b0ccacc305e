//! # Pizza Config
//!
//! Configuration management for the pizza service.
//! Supports layered configuration from files, environment variables,
//! and the container deployment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
