//! # API crate: the `/api/users` contract for the user directory
//!
//! This crate owns both sides of the HTTP boundary. The client half compiles
//! everywhere (including `wasm32`); the server half is gated behind the `server`
//! feature so browser builds never pull in SQLx, axum or Tokio networking code.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | none | [`UsersClient`], a typed `reqwest` client for the four endpoints |
//! | [`settings`] | `server` | Layered configuration (defaults, `config.toml`, environment) |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`repo`] | `server` | The [`repo::UserStore`] trait and its Postgres implementation |
//! | [`memory`] | `server` | In-process `UserStore` for tests and database-less runs |
//! | [`error`] | `server` | Storage errors and the handler error → HTTP response mapping |
//! | [`routes`] | `server` | The axum handlers and [`routes::router`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `GET` | `/api/users` | 200 `[{id,name}]` | 500 plain text `Error fetching users` |
//! | `POST` | `/api/users` | 201 `{id,name}` | 400 / 500 `{error}` |
//! | `PUT` | `/api/users` | 200 `{id,name}` | 400 / 404 / 500 `{error}` |
//! | `DELETE` | `/api/users?id=N` | 200 `{message}` | 400 / 404 / 500 `{error}` |

pub mod client;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod memory;
#[cfg(feature = "server")]
pub mod repo;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod settings;

pub use client::{ClientError, UsersClient};
pub use store::User;

/// Path the user endpoints are mounted at.
pub const USERS_PATH: &str = "/api/users";
