use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::repository::{RepositoryError, WriterRepository};

/// Builds the API router around any repository implementation.
pub fn writers_router<R: WriterRepository>(repository: R) -> Router {
    let app = Router::new()
        .route("/api/writers", get(list_writers_handler::<R>))
        .route("/api/health", get(health_handler))
        .fallback(wi_axum::not_found)
        .with_state(Arc::new(repository));

    wi_axum::with_common_layers(app)
}

/// An unreachable store is reported as transient.
const fn status_for(error: &RepositoryError) -> StatusCode {
    match error {
        RepositoryError::StoreUnavailable(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        RepositoryError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Returns the whole writers collection in repository order.
///
/// Repository failures are passed straight through as a server error; no
/// retry and no partial result.
pub async fn list_writers_handler<R: WriterRepository>(
    State(repository): State<Arc<R>>,
) -> Response {
    tracing::info!("listing writers");

    match repository.get_list().await {
        Ok(writers) => {
            tracing::info!("successfully listed {0} writers", writers.len());

            (
                [(header::CONTENT_TYPE, "application/json")],
                Json(writers),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("failed to list writers: {e}");

            (
                status_for(&e),
                [(header::CONTENT_TYPE, "application/json")],
                Json(json!({
                    "message": "failed to list writers",
                })),
            )
                .into_response()
        }
    }
}

/// Liveness check; does not touch the repository.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "UP" }))
}
