//! # Pizza Service
//!
//! Request handler logic for the pizza service: one storage call per
//! operation, plus the request and response shapes.

pub mod dish_service;
pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dish_service::*;
pub use dto::*;
pub use r#impl::*;
pub use user_service::*;
