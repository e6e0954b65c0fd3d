use dioxus::prelude::*;

use ui::UsersClientProvider;
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();
        let result = tokio::runtime::Runtime::new()
            .map_err(anyhow::Error::from)
            .and_then(|runtime| runtime.block_on(launch_server()));
        if let Err(e) = result {
            tracing::error!("Server failed: {:#}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(feature = "server")]
async fn launch_server() -> anyhow::Result<()> {
    use anyhow::Context as _;
    use api::repo::{PgUserStore, UserStore};
    use api::settings::Settings;

    let settings = Settings::new().context("Failed to load settings")?;

    // Initialize database pool
    let pool = api::db::get_pool(&settings.database)
        .await
        .context("Failed to connect to database")?;

    // The handlers re-assert the table too; this just fails fast on a bad database
    let store = PgUserStore::new(pool.clone());
    store
        .ensure_schema()
        .await
        .context("Failed to create users table")?;

    let router = app_router(store);

    // Use the address from dx serve, or the configured one
    let addr = match (
        dioxus::cli_config::server_ip(),
        dioxus::cli_config::server_port(),
    ) {
        (Some(ip), Some(port)) => std::net::SocketAddr::new(ip, port).to_string(),
        _ => settings.server.address(),
    };
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

/// The `/api/users` endpoints in front of the server-rendered app.
#[cfg(feature = "server")]
fn app_router<S: api::repo::UserStore>(store: S) -> axum::Router {
    use dioxus::server::{DioxusRouterExt, FullstackState, ServeConfig};
    use tower_http::trace::TraceLayer;

    axum::Router::<FullstackState>::new()
        // REST endpoints first
        .merge(api::routes::router(store))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(TraceLayer::new_for_http())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        UsersClientProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use api::memory::MemoryUserStore;
    use api::repo::PgUserStore;

    // Building the router needs the bundled `public/` directory, so this only
    // pins down that both stores produce a servable router.
    #[test]
    fn test_app_router_accepts_stores() {
        let _: fn(PgUserStore) -> axum::Router = app_router::<PgUserStore>;
        let _: fn(MemoryUserStore) -> axum::Router = app_router::<MemoryUserStore>;
    }
}
