use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use clickchess_core::{InteractionController, InterfaceConfig, ShakmatyEngine};

mod routes;
mod view;

use view::WebView;

/// Environment variable holding the listen address
const ADDR_ENV: &str = "CLICKCHESS_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

pub type WebGame = InteractionController<ShakmatyEngine, WebView>;

pub struct AppState {
    pub game: Mutex<WebGame>,
    pub config: InterfaceConfig,
}

impl AppState {
    pub fn new(config: InterfaceConfig) -> clickchess_core::Result<Self> {
        let game = InteractionController::from_config(WebView::new(), &config)?;
        Ok(Self {
            game: Mutex::new(game),
            config,
        })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/state", get(routes::state))
        .route("/click/:square", post(routes::click))
        .route("/promote/:letter", post(routes::promote))
        .route("/undo", post(routes::undo))
        .route("/resize", post(routes::resize))
        .route("/health", get(routes::health))
        .nest_service("/static", ServeDir::new("crates/web/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match InterfaceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(error = %e, "failed to start game");
            std::process::exit(1);
        }
    };

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!("Server running at http://{}", addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!(error = %e, "server stopped");
    }
}
