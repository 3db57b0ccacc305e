//! Domain entities.

mod dish;
mod user;

pub use dish::*;
pub use user::*;
