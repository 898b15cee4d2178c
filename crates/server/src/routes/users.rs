use axum::Json;
use shared::api::{CreateUser, UserResponse, ValidateModel};
use tracing::instrument;

use crate::{db::model::User, db::DatabaseConnection, ApiError};

#[instrument(skip(conn))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    Json(payload): Json<CreateUser>,
) -> Result<Json<UserResponse>, ApiError> {
    // Rejected payloads never reach the store
    payload.validate()?;

    let user = conn
        .interact(move |conn| User::create(conn, payload.username))
        .await??;

    Ok(Json(UserResponse { username: user.username, id: user.id }))
}

#[instrument(skip(conn))]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;

    let users = users
        .into_iter()
        .map(|u| UserResponse { username: u.username, id: u.id })
        .collect();

    Ok(Json(users))
}
