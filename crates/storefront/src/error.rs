//! Unified error handling.
//!
//! Provides a unified `AppError` type that logs server-side failures before
//! responding to the client. All route handlers return `Result<T, AppError>`.
//! Client-facing messages are the Spanish strings the storefront UI shows;
//! internal detail stays in the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::cart::CartError;
use crate::models::contact::ContactValidationError;
use crate::services::auth::AuthError;
use crate::sheets::SheetsError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog or contact sheet request failed.
    #[error("Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Contact form validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ContactValidationError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to the client.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log failures that are not the client's fault
        if matches!(self, Self::Sheets(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Sheets(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::NotAuthenticated => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::DuplicateEmail => StatusCode::CONFLICT,
                AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Cart(err) => match err {
                CartError::LineNotFound(_) => StatusCode::NOT_FOUND,
                CartError::OutOfStock(_) | CartError::Empty => StatusCode::BAD_REQUEST,
            },
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Sheets(_) => "Error al cargar datos. Intenta de nuevo.".to_string(),
            Self::Internal(_) => "Error interno del servidor".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Correo o contraseña incorrectos".to_string(),
                AuthError::DuplicateEmail => "Este correo ya está registrado".to_string(),
                AuthError::NotAuthenticated => "Debes iniciar sesión".to_string(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::InvalidEmail(_) => "Correo no válido".to_string(),
                AuthError::Hash(_) => "Error interno del servidor".to_string(),
            },
            Self::Cart(err) => match err {
                CartError::OutOfStock(_) => "Producto agotado".to_string(),
                CartError::Empty => "El carrito está vacío".to_string(),
                CartError::LineNotFound(_) => "El producto no está en el carrito".to_string(),
            },
            Self::Validation(err) => err.to_string(),
            Self::NotFound(_) | Self::BadRequest(_) => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::DuplicateEmail)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::NotAuthenticated)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Cart(CartError::Empty)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
