//! REST API controllers.

pub mod auth_controller;
pub mod dish_controller;
pub mod health_controller;
pub mod user_controller;

pub use health_controller::*;
