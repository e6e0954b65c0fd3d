//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const USERS_CSS: Asset = asset!("/assets/users.css");

mod client;
pub use client::{api_base_url, use_users_client, UsersClientProvider};

pub mod notify;
pub use notify::notify;

mod list_element;
pub use list_element::ListElement;

mod users_list;
pub use users_list::UsersList;
