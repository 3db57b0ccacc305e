//! User service trait definition.

use crate::dto::{GetUserRequest, LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use pizza_core::{Interface, PizzaResult};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Registers a new user.
    async fn register(&self, request: RegisterRequest) -> PizzaResult<()>;

    /// Checks a login/password pair. Any failure is `InvalidCredentials`.
    async fn login(&self, request: LoginRequest) -> PizzaResult<()>;

    /// Gets a user by login. Any failure is `NotFound`.
    async fn get_user(&self, request: GetUserRequest) -> PizzaResult<UserResponse>;

    /// Overwrites the profile of the user with the given login.
    async fn update_user(&self, request: UpdateUserRequest) -> PizzaResult<()>;
}
