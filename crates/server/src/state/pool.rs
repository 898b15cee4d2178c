use axum::extract::FromRef;
use deadpool_sqlite::{Config, Hook, Pool, Runtime};

use crate::{db, ApiError, AppState};

impl FromRef<AppState> for Pool {
    fn from_ref(state: &AppState) -> Self {
        // pool uses an Arc internally so clone is cheap
        state.pool.clone()
    }
}

/// Builds the connection pool over an already-migrated database. Each new
/// connection gets the pragma and tracing setup on checkout.
pub fn build_pool(connection_string: &str) -> Result<Pool, anyhow::Error> {
    let pool = Config::new(connection_string)
        .builder(Runtime::Tokio1)?
        .post_create(Hook::async_fn(|object, _| {
            Box::pin(async move {
                object
                    .interact(|conn| db::configure_new_connection(conn))
                    .await
                    .map_err(ApiError::from)?
                    .map_err(ApiError::from)?;
                Ok(())
            })
        }))
        .build()?;

    Ok(pool)
}
