//! User-related DTOs.
//!
//! Request shapes decode absent fields to zero values (`""`, `0`) and ignore
//! unknown fields; a value of the wrong JSON type is a decode error.

use pizza_core::{NewUser, ProfileUpdate, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to register a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub email: String,
    pub phone: i64,
    pub address: String,
}

/// Request to check a login/password pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Request to read a user by login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GetUserRequest {
    pub login: String,
}

/// Request to overwrite a user's profile.
///
/// Omitted fields are written as empty/zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub login: String,
    pub email: String,
    pub phone: i64,
    pub address: String,
}

/// User response DTO. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub phone: i64,
    pub address: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            login: request.login,
            password: request.password,
            email: request.email,
            phone: request.phone,
            address: request.address,
        }
    }
}

impl UpdateUserRequest {
    /// Splits the request into the target login and the new profile.
    #[must_use]
    pub fn into_parts(self) -> (String, ProfileUpdate) {
        (
            self.login,
            ProfileUpdate {
                email: self.email,
                phone: self.phone,
                address: self.address,
            },
        )
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            email: user.email,
            phone: user.phone,
            address: user.address,
        }
    }
}
