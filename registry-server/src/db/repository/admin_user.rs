//! Admin Account Repository
//!
//! Report-access accounts. Passwords are stored as argon2id PHC strings;
//! emails are stored lowercased and matched case-insensitively.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use sqlx::SqlitePool;

use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

/// Admin account row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

impl AdminUser {
    /// Verify a candidate password against the stored argon2 hash
    pub fn verify_password(&self, password: &str) -> RepoResult<bool> {
        let parsed = PasswordHash::new(&self.password_hash)
            .map_err(|e| RepoError::Database(format!("Corrupt password hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<AdminUser>> {
    let row = sqlx::query_as::<_, AdminUser>(
        "SELECT id, email, password_hash, created_at FROM admin_user WHERE email = ?",
    )
    .bind(email.trim().to_lowercase())
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, email: &str, password: &str) -> RepoResult<AdminUser> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?
        .to_string();

    sqlx::query("INSERT INTO admin_user (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)")
        .bind(snowflake_id())
        .bind(email.trim().to_lowercase())
        .bind(&hash)
        .bind(now_millis())
        .execute(pool)
        .await?;

    find_by_email(pool, email)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin user".into()))
}

/// Seed the first admin account when the table is empty.
///
/// Returns true when an account was created.
pub async fn seed_if_empty(pool: &SqlitePool, email: &str, password: &str) -> RepoResult<bool> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_user")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }
    create(pool, email, password).await?;
    Ok(true)
}
