//! User entity.

use serde::{Deserialize, Serialize};

/// A registered user as read back from storage.
///
/// There is no password field, so the read model can never leak it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: i64,

    /// Unique login, the external key of the user.
    pub login: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number.
    pub phone: i64,

    /// Delivery address.
    pub address: String,
}

/// A user about to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    /// Opaque password, compared by exact equality on login.
    pub password: String,
    pub email: String,
    pub phone: i64,
    pub address: String,
}

/// The mutable part of a user profile.
///
/// Every field is written as given; there are no "leave unchanged" markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email: String,
    pub phone: i64,
    pub address: String,
}
