use dioxus::prelude::*;

use views::{Home, Login, Register};

#[cfg(feature = "server")]
mod settings;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start Tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    let settings = settings::Settings::new().unwrap_or_else(|e| {
        eprintln!("Invalid configuration, using defaults: {}", e);
        settings::Settings::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log.filter))
        .init();

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the configured address, or the one from dx serve, or localhost:8080
    let addr = settings
        .server_address()
        .unwrap_or_else(dioxus::cli_config::fullstack_address_or_localhost);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
