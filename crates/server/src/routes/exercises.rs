use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::{format_log_date, AddExercise, ExerciseResponse, LogEntry, LogResponse, LogsQuery,
          ValidateModel},
    types::Uuid,
};
use tracing::instrument;

use crate::{
    db::model::{Exercise, User},
    db::DatabaseConnection,
    ApiError,
};

#[instrument(skip(conn))]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddExercise>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    payload.validate()?;
    let date = payload.date_or_today();

    let response = conn
        .interact(move |conn| {
            let user = User::fetch_by_id(conn, &id)?.ok_or(ApiError::UserNotFound)?;
            let exercise =
                Exercise::create(conn, user.id, payload.description, payload.duration, date)?;

            // The response carries the user's id, matching the log shape
            Ok::<_, ApiError>(ExerciseResponse {
                username: user.username,
                description: exercise.description,
                duration: exercise.duration,
                date: format_log_date(exercise.date),
                id: user.id,
            })
        })
        .await??;

    Ok(Json(response))
}

#[instrument(skip(conn))]
pub async fn get_logs(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<Uuid>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogResponse>, ApiError> {
    query.validate()?;

    let response = conn
        .interact(move |conn| {
            let user = User::fetch_by_id(conn, &id)?.ok_or(ApiError::UserNotFound)?;
            let exercises = Exercise::fetch_log(conn, &user.id, &query)?;

            Ok::<_, ApiError>(LogResponse {
                username: user.username,
                count: exercises.len(),
                id: user.id,
                log: exercises
                    .into_iter()
                    .map(|e| LogEntry {
                        description: e.description,
                        duration: e.duration,
                        date: format_log_date(e.date),
                    })
                    .collect(),
            })
        })
        .await??;

    Ok(Json(response))
}
