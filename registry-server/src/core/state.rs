use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{Allowlist, JwtConfig, JwtService};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::admin_user;
use crate::utils::AppError;

/// Server state - shared handles for every request handler.
///
/// Cheap to clone: the pool and the JWT service are reference-counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | pool | SQLite connection pool |
/// | jwt_service | session token issue/validate |
/// | allowlist | admins permitted to view the report |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub allowlist: Allowlist,
}

impl ServerState {
    /// Initialize state: open the database and run migrations, build the
    /// JWT service, parse the allowlist. When bootstrap credentials are
    /// configured and the admin table is empty, seeds the first account.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        let jwt_service = Arc::new(JwtService::with_config(JwtConfig::new(
            config.jwt_secret.clone(),
            config.jwt_expiration_minutes,
        )));

        let allowlist = Allowlist::parse(&config.admin_allowlist);
        if allowlist.is_empty() {
            return Err(AppError::internal(
                "ADMIN_ALLOWLIST contains no usable entries",
            ));
        }

        if let Some((email, password)) = &config.bootstrap_admin {
            if admin_user::seed_if_empty(&db.pool, email, password).await? {
                tracing::info!(email = %email, "Seeded bootstrap admin account");
            }
        }

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            jwt_service,
            allowlist,
        })
    }
}
