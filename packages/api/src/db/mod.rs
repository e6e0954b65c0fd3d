//! # Connection pool for the `users` database
//!
//! The pool is a **lazy, process-wide singleton** backed by a [`tokio::sync::OnceCell`].
//! The first call to [`get_pool`] opens a pool sized by
//! [`DatabaseSettings::connections`](crate::settings::DatabaseSettings) and caches it
//! for every later caller; later settings are ignored.
//!
//! The `users` table itself is managed by [`crate::repo::PgUserStore`].

mod pool;

pub use pool::get_pool;
