//! Data Transfer Objects (DTOs).

mod dish_dto;
mod user_dto;

pub use dish_dto::*;
pub use user_dto::*;
