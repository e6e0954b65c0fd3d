//! Shared `UsersClient` context for the list components.

use api::UsersClient;
use dioxus::prelude::*;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Origin the `/api/users` requests go to.
///
/// In the browser this is the page's own origin. Native builds read
/// `USERDIR_API_URL`, falling back to the default server address.
pub fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    std::env::var("USERDIR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Consume the `Signal<UsersClient>` from context.
pub fn use_users_client() -> Signal<UsersClient> {
    use_context::<Signal<UsersClient>>()
}

/// Provides a [`UsersClient`] to every component below it.
#[component]
pub fn UsersClientProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(UsersClient::new(api_base_url())));

    rsx! {
        {children}
    }
}
