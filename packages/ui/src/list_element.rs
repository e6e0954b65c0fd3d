use dioxus::prelude::*;
use store::{ListStatus, RowEditor, SaveAction, User, UserList};

use crate::notify::{notify, DELETE_FAILED, NOTHING_TO_DELETE, UPDATE_FAILED};
use crate::use_users_client;

/// One row of the user list with inline rename and delete.
///
/// Mutations are applied to `users` only after the server confirms them. A
/// failed rename closes the editor and leaves the old name displayed.
#[component]
pub fn ListElement(user: User, users: Signal<UserList>, status: Signal<ListStatus>) -> Element {
    let client = use_users_client();
    let mut editor = use_signal(RowEditor::new);
    let id = user.id;

    let mut handle_save = move || {
        // Compare against the name currently in the list, not a stale prop
        let current = users
            .peek()
            .get(id)
            .map(|u| u.name.clone())
            .unwrap_or_default();
        let action = editor.write().submit(&current);

        match action {
            SaveAction::Cancel => {
                if !editor.peek().is_busy() {
                    editor.write().finish();
                }
            }
            SaveAction::Save(new_name) => {
                let client = client();
                spawn(async move {
                    match client.update(id, &new_name).await {
                        Ok(updated) => {
                            tracing::info!(id, "User renamed");
                            users.write().replace(updated);
                        }
                        Err(e) => {
                            tracing::error!("Failed to update user {}: {}", id, e);
                            notify(UPDATE_FAILED);
                        }
                    }
                    editor.write().finish();
                });
            }
        }
    };

    let handle_delete = move |_| {
        if users.peek().is_empty() {
            notify(NOTHING_TO_DELETE);
            return;
        }
        if !editor.write().start_request() {
            return;
        }
        let client = client();
        spawn(async move {
            match client.delete(id).await {
                Ok(_) => {
                    tracing::info!(id, "User deleted");
                    editor.write().finish();
                    users.write().remove(id);
                    let next = status.peek().after_change(&users.peek());
                    status.set(next);
                }
                Err(e) => {
                    tracing::error!("Failed to delete user {}: {}", id, e);
                    notify(DELETE_FAILED);
                    editor.write().finish();
                }
            }
        });
    };

    let editing = editor.read().is_editing();
    let busy = editor.read().is_busy();
    let buffer = editor.read().buffer().to_string();
    let name = user.name.clone();

    rsx! {
        li {
            class: "user-row",
            if editing {
                div {
                    class: "user-edit",
                    input {
                        class: "user-edit-input",
                        r#type: "text",
                        value: buffer,
                        oninput: move |evt: FormEvent| editor.write().set_buffer(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                handle_save();
                            }
                        },
                    }
                    button {
                        class: "user-save",
                        disabled: busy,
                        onclick: move |_| handle_save(),
                        "Save"
                    }
                    button {
                        class: "user-cancel",
                        disabled: busy,
                        onclick: move |_| editor.write().finish(),
                        "Cancel"
                    }
                }
            } else {
                span { class: "user-name", "{user.name}" }
                div {
                    class: "user-actions",
                    button {
                        class: "user-action",
                        disabled: busy,
                        onclick: move |_| editor.write().begin(&name),
                        "EDIT"
                    }
                    button {
                        class: "user-action",
                        disabled: busy,
                        onclick: handle_delete,
                        "DELETE"
                    }
                }
            }
        }
    }
}
