//! The single page: title and the user list.

use dioxus::prelude::*;
use ui::UsersList;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { class: "home-title", "User Management System" }
            UsersList {}
        }
    }
}
