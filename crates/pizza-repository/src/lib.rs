//! # Pizza Repository
//!
//! Storage adapter for the pizza service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository> / Arc<dyn DishRepository>
//! PgUserRepository / PgDishRepository   (one statement per method)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! DatabasePool                          (sqlx PgPool)
//!   ↓
//! Postgres (user_info, dish)
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
