#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    /// Config file shipped at the workspace root.
    pub const DEFAULT_CONFIG_PATH: &str = "uicard.example.toml";

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "127.0.0.1".into(),
                port: 5173,
            }
        }
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig::default(),
            }
        }
    }

    impl Config {
        pub fn addr(&self) -> String {
            format!("{}:{}", self.server.bind, self.server.port)
        }
    }

    /// Path given after `--config`, or the shipped example file.
    pub fn config_path(args: &[String]) -> String {
        args.iter()
            .position(|a| a == "--config")
            .and_then(|idx| args.get(idx + 1))
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};
    use uicard_ui::{shell, App};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = config::config_path(&args);

    let appConfig = config::load(&configPath);
    let addr = appConfig.addr();
    tracing::info!("loaded config from {configPath}: bind={addr}");

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    let routes = generate_route_list(App);

    // The frame page is served at `/`; the API router is stateless and merged as-is.
    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(uicard_api::api_router())
        .layer(TraceLayer::new_for_http());

    tracing::info!("serving card frame on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
