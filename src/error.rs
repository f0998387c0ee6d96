//! Request errors and how they become HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request-path errors. Display strings are the exact wire messages, so the
/// body of every error response comes from `to_string`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Tâche non trouvée")]
    NotFound,
    #[error("Erreur serveur")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Db(e) => {
                // Driver detail stays in the server log; the body is generic.
                tracing::error!(error = %e, "storage fault");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation("Le titre est requis");
        assert_eq!(err.to_string(), "Le titre est requis");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound;
        assert_eq!(err.to_string(), "Tâche non trouvée");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_fault_maps_to_500_with_generic_message() {
        let err = AppError::Db(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Erreur serveur");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
