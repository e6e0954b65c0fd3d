//! Blocking user notifications.

pub const FETCH_FAILED: &str =
    "Something went wrong while fetching users. Please refresh the page.";
pub const ADD_FAILED: &str = "Something went wrong while adding the user. Please try again.";
pub const UPDATE_FAILED: &str = "Something went wrong while updating the user.";
pub const DELETE_FAILED: &str = "Something went wrong while deleting the user.";
pub const NOTHING_TO_DELETE: &str = "No users to delete.";

/// Show `message` in a blocking alert. Outside the browser it is only logged.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    tracing::warn!("{}", message);
}
