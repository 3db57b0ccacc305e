//! Postgres user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use pizza_core::{NewUser, PizzaResult, ProfileUpdate, User};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Postgres user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct PgUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgUserRepository {
    /// Creates a new Postgres user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user. The password column is never selected.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    login: String,
    email: String,
    phone: i64,
    address: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            login: row.login,
            email: row.email,
            phone: row.phone,
            address: row.address,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: &NewUser) -> PizzaResult<()> {
        debug!("Inserting user: {}", user.login);

        sqlx::query(
            r"
            INSERT INTO user_info (login, password, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&user.login)
        .bind(&user.password)
        .bind(&user.email)
        .bind(user.phone)
        .bind(&user.address)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn find_by_credentials(&self, login: &str, password: &str) -> PizzaResult<Option<User>> {
        debug!("Finding user by credentials: {}", login);

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id::bigint AS id, login, email, phone::bigint AS phone, address
            FROM user_info
            WHERE login = $1 AND password = $2
            ",
        )
        .bind(login)
        .bind(password)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_login(&self, login: &str) -> PizzaResult<Option<User>> {
        debug!("Finding user by login: {}", login);

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id::bigint AS id, login, email, phone::bigint AS phone, address
            FROM user_info
            WHERE login = $1
            ",
        )
        .bind(login)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn update_profile(&self, login: &str, profile: &ProfileUpdate) -> PizzaResult<u64> {
        debug!("Updating profile of user: {}", login);

        let result = sqlx::query(
            r"
            UPDATE user_info
            SET email = $1, phone = $2, address = $3
            WHERE login = $4
            ",
        )
        .bind(&profile.email)
        .bind(profile.phone)
        .bind(&profile.address)
        .bind(login)
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected())
    }
}
