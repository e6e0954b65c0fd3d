use std::rc::Rc;

use dioxus::prelude::*;
use store::{validate_new_name, ListStatus, User, UserList};

use crate::list_element::ListElement;
use crate::notify::{notify, ADD_FAILED, FETCH_FAILED};
use crate::use_users_client;

/// The user list: initial load, rows, the add form, and scroll-to-end.
///
/// The list is fetched once on mount. After that it only changes through the
/// responses of add, rename and delete; it is never re-fetched.
#[component]
pub fn UsersList() -> Element {
    let client = use_users_client();
    let mut users = use_signal(UserList::new);
    let mut status = use_signal(ListStatus::default);
    let mut input = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let mut list_end = use_signal(|| Option::<Rc<MountedData>>::None);

    // Load the list once on mount
    let _loader = use_resource(move || async move {
        let client = client.peek().clone();
        match client.list().await {
            Ok(loaded) => {
                tracing::debug!(count = loaded.len(), "Loaded users");
                status.set(if loaded.is_empty() {
                    ListStatus::Empty
                } else {
                    ListStatus::Loading
                });
                users.set(UserList::from_users(loaded));
            }
            Err(e) => {
                tracing::error!("Failed to fetch users: {}", e);
                status.set(ListStatus::LoadFailed);
                notify(FETCH_FAILED);
            }
        }
    });

    // Keep the last row in view whenever the list changes
    use_effect(move || {
        let count = users.read().len();
        if let Some(end) = list_end() {
            spawn(async move {
                if let Err(e) = end.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(count, "Scroll to end failed: {:?}", e);
                }
            });
        }
    });

    let mut handle_add = move || {
        if adding() {
            return;
        }
        let name = match validate_new_name(&input.read()) {
            Ok(name) => name,
            Err(e) => {
                notify(&e.to_string());
                return;
            }
        };

        adding.set(true);
        let client = client();
        spawn(async move {
            match client.create(&name).await {
                Ok(user) => {
                    tracing::info!(id = user.id, "User added");
                    users.write().insert(user);
                    input.set(String::new());
                }
                Err(e) => {
                    tracing::error!("Failed to add user: {}", e);
                    notify(ADD_FAILED);
                }
            }
            adding.set(false);
        });
    };

    let rows: Vec<User> = users.read().users().to_vec();

    rsx! {
        document::Stylesheet { href: crate::USERS_CSS }

        div {
            class: "users-panel",
            h1 { class: "users-title", "User List" }

            ol {
                class: "users-list",
                if rows.is_empty() {
                    p { class: "users-status", "{status().message()}" }
                } else {
                    for user in rows {
                        ListElement {
                            key: "{user.id}",
                            user: user.clone(),
                            users: users,
                            status: status,
                        }
                    }
                }
                // Scroll anchor after the last row
                li {
                    class: "users-list-end",
                    onmounted: move |evt: MountedEvent| list_end.set(Some(evt.data())),
                }
            }

            div {
                class: "users-add",
                input {
                    class: "users-add-input",
                    r#type: "text",
                    placeholder: "Enter User Name",
                    value: input(),
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            handle_add();
                        }
                    },
                }
                button {
                    class: "users-add-button",
                    disabled: adding(),
                    onclick: move |_| handle_add(),
                    "Add User"
                }
            }
        }
    }
}
