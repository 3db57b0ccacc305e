//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

pub mod dish_service_impl;
pub mod user_service_impl;

pub use dish_service_impl::{DishServiceComponent, DishServiceImpl};
pub use user_service_impl::{UserServiceComponent, UserServiceImpl};
