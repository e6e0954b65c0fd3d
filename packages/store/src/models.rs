//! # Domain models for the user directory
//!
//! Defines the record stored in the `users` table and the JSON bodies exchanged
//! over `/api/users`. Everything here is `Serialize + Deserialize` so the same
//! types are used by the axum handlers, the HTTP client and the Dioxus views.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | One row of `users`: a server-assigned `id` and a `name`. Wire shape `{"id":1,"name":"Alice"}`. |
//! | [`CreateUserRequest`] | Body of `POST /api/users`. |
//! | [`UpdateUserRequest`] | Body of `PUT /api/users`. The `id` is kept as a loose JSON value so the handler can tell "missing" from "not a number". |
//! | [`ErrorBody`] | `{"error": "..."}` returned by every failing mutation. |
//! | [`MessageBody`] | `{"message": "..."}` returned by a successful delete. |
//!
//! Request bodies derive `Default`: a body that does not parse is treated as one
//! with every field missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user record as stored and as sent over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the storage layer, never reused.
    pub id: i32,
    pub name: String,
}

/// Request body for creating a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Request body for renaming a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateUserRequest {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(Value::from(id)),
            name: Some(name.into()),
        }
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// JSON acknowledgement body: `{"message": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
