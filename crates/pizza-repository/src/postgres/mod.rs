//! Postgres repository implementations.

mod dish_repository;
mod user_repository;

pub use dish_repository::*;
pub use user_repository::*;
