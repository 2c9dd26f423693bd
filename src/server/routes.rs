use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use crate::server::AppState;
use crate::storage::SqliteStore;
use crate::{Training, TrainingInput};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Errors surfaced to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body or path did not match the expected shape; never reaches storage
    #[error("{0}")]
    Validation(String),

    #[error("Training not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Training not found".to_string()),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Run a store operation on the blocking pool
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&SqliteStore) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| ApiError::Internal(format!("storage task failed: {}", e)))?
        .map_err(ApiError::from)
}

pub async fn create_training(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TrainingInput>, JsonRejection>,
) -> Result<Json<Training>, ApiError> {
    let Json(input) = payload?;
    let training = with_store(&state, move |store| store.create(&input)).await?;
    Ok(Json(training))
}

pub async fn list_trainings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Training>>, ApiError> {
    let trainings = with_store(&state, |store| store.list()).await?;
    Ok(Json(trainings))
}

pub async fn get_training(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Training>, ApiError> {
    let Path(id) = id?;
    let training = with_store(&state, move |store| store.get(id)).await?;
    Ok(Json(training))
}

pub async fn update_training(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TrainingInput>, JsonRejection>,
) -> Result<Json<Training>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let training = with_store(&state, move |store| store.update(id, &input)).await?;
    Ok(Json(training))
}

pub async fn delete_training(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    with_store(&state, move |store| store.delete(id)).await?;
    Ok(Json(MessageResponse { message: "Training deleted".to_string() }))
}
