//! Repository trait definitions.

use async_trait::async_trait;
use pizza_core::{Dish, Interface, NewUser, PizzaResult, ProfileUpdate, User};

/// User repository trait, backed by the `user_info` table.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts a new user. A duplicate login surfaces as a storage error.
    async fn insert(&self, user: &NewUser) -> PizzaResult<()>;

    /// Finds the user whose login and password both match exactly.
    async fn find_by_credentials(&self, login: &str, password: &str) -> PizzaResult<Option<User>>;

    /// Finds a user by login.
    async fn find_by_login(&self, login: &str) -> PizzaResult<Option<User>>;

    /// Overwrites email, phone and address of the user with this login.
    ///
    /// Returns the number of rows affected; zero when the login is unknown.
    async fn update_profile(&self, login: &str, profile: &ProfileUpdate) -> PizzaResult<u64>;
}

/// Dish repository trait, backed by the `dish` table.
#[async_trait]
pub trait DishRepository: Interface + Send + Sync {
    /// Returns every dish.
    async fn find_all(&self) -> PizzaResult<Vec<Dish>>;
}
