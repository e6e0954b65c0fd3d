//! Error types for the server half.
//!
//! [`StoreError`] is what a [`crate::repo::UserStore`] returns. [`ApiError`] is the
//! outcome of a handler that did not succeed; its `IntoResponse` impl produces the
//! exact status and `{"error": "..."}` body the client relies on. Storage detail
//! never reaches a response body, it is logged where the error is mapped.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use store::ErrorBody;

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A handler outcome other than success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Name is required")]
    NameRequired,
    #[error("ID and name are required")]
    IdAndNameRequired,
    #[error("ID is required")]
    IdRequired,
    #[error("Invalid ID")]
    InvalidId,
    #[error("User not found")]
    NotFound,
    #[error("Error creating table")]
    CreateTable,
    #[error("Error adding user")]
    AddUser,
    #[error("Error updating user")]
    UpdateUser,
    #[error("Error deleting user")]
    DeleteUser,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NameRequired
            | ApiError::IdAndNameRequired
            | ApiError::IdRequired
            | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::CreateTable
            | ApiError::AddUser
            | ApiError::UpdateUser
            | ApiError::DeleteUser => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
