//! # HTTP handlers for `/api/users`
//!
//! Each handler validates its input, issues at most two storage calls and maps
//! the outcome to a status code. Handlers are generic over [`UserStore`] so the
//! same router runs against Postgres in production and [`crate::memory`] in tests.
//!
//! Presence checks follow the request contract: an empty string or `null` counts
//! as missing. An `id` of `0` is accepted as present (it simply matches no row).

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use store::{CreateUserRequest, MessageBody, UpdateUserRequest, User};

use crate::error::{ApiError, StoreError};
use crate::repo::UserStore;
use crate::USERS_PATH;

/// Build the router serving `GET|POST|PUT|DELETE /api/users` over `store`.
///
/// The store is applied here, so the result merges into a router of any state
/// type `T` (the Dioxus server router uses its own fullstack state).
pub fn router<S, T>(store: S) -> Router<T>
where
    S: UserStore,
    T: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            USERS_PATH,
            get(list_users::<S>)
                .post(create_user::<S>)
                .put(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .with_state(store)
}

/// `GET /api/users`. Fails with a plain-text body, unlike the other three.
async fn list_users<S: UserStore>(State(store): State<S>) -> Response {
    match fetch_all(&store).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch users: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching users").into_response()
        }
    }
}

async fn fetch_all<S: UserStore>(store: &S) -> Result<Vec<User>, StoreError> {
    store.ensure_schema().await?;
    store.list().await
}

/// `POST /api/users` with `{"name": "..."}`.
async fn create_user<S: UserStore>(
    State(store): State<S>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let request: CreateUserRequest = serde_json::from_slice(&body).unwrap_or_default();

    let name = request
        .name
        .filter(|n| !n.is_empty())
        .ok_or(ApiError::NameRequired)?;

    store.ensure_schema().await.map_err(|e| {
        tracing::error!("Failed to create users table: {}", e);
        ApiError::CreateTable
    })?;

    let user = store.insert(&name).await.map_err(|e| {
        tracing::error!("Failed to add user: {}", e);
        ApiError::AddUser
    })?;

    tracing::info!(id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /api/users` with `{"id": 1, "name": "..."}`.
async fn update_user<S: UserStore>(
    State(store): State<S>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let request: UpdateUserRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (Some(id), Some(name)) = (
        request.id.filter(|v| !is_blank(v)),
        request.name.filter(|n| !n.is_empty()),
    ) else {
        return Err(ApiError::IdAndNameRequired);
    };
    let id = parse_id_value(&id)?;

    match store.update(id, &name).await {
        Ok(Some(user)) => {
            tracing::info!(id = user.id, "User renamed");
            Ok(Json(user))
        }
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            tracing::error!("Failed to update user {}: {}", id, e);
            Err(ApiError::UpdateUser)
        }
    }
}

/// `DELETE /api/users?id=N`.
async fn delete_user<S: UserStore>(
    State(store): State<S>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MessageBody>, ApiError> {
    let Some(raw) = params.get("id").filter(|id| !id.is_empty()) else {
        return Err(ApiError::IdRequired);
    };
    let id = parse_id(raw)?;

    match store.delete(id).await {
        Ok(Some(user)) => {
            tracing::info!(id = user.id, "User deleted");
            Ok(Json(MessageBody::new("User deleted")))
        }
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            tracing::error!("Failed to delete user {}: {}", id, e);
            Err(ApiError::DeleteUser)
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::InvalidId)
}

/// Accepts integral JSON numbers (`1` or `1.0`) and numeric strings within the
/// `SERIAL` range.
fn parse_id_value(value: &Value) -> Result<i32, ApiError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(ApiError::InvalidId),
        Value::String(s) => parse_id(s),
        _ => Err(ApiError::InvalidId),
    }
}
