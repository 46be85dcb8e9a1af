mod config;
mod error;
mod gate;
mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use clap::Parser;
use shared::endpoints;
use std::{env, sync::Arc};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::GatewayConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "the404-gateway")]
#[command(about = "the-404 dashboard gateway")]
struct Args {
    /// Enable development mode (non-secure cookies for plain-HTTP setups)
    #[arg(long)]
    dev_mode: bool,

    /// Path to the built frontend bundle to serve
    #[arg(long, default_value = "frontend/dist")]
    frontend_dist: String,
}

pub struct AppState {
    pub config: GatewayConfig,
    pub http: reqwest::Client,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if args.dev_mode {
        tracing::warn!("dev mode enabled - session cookies are not marked Secure");
    }

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env(args.dev_mode)?;
    tracing::info!("proxying auth against {}", config.internal_api_base_url);

    let app_state = Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
    });

    // Setup CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Cookie-managing auth routes
    let mut app = Router::new()
        .route(endpoints::gateway::AUTH_LOGIN, post(handlers::auth::login))
        .route(
            endpoints::gateway::AUTH_LOGOUT,
            post(handlers::auth::logout),
        )
        .route(endpoints::gateway::AUTH_VERIFY, get(handlers::auth::verify))
        .with_state(app_state.clone());

    // Serve the frontend bundle if present; unknown page paths fall back
    // to index.html so the client-side router can take over.
    if std::path::Path::new(&args.frontend_dist).exists() {
        tracing::info!("serving frontend from: {}", args.frontend_dist);
        let index = std::path::Path::new(&args.frontend_dist).join("index.html");
        app = app.fallback_service(
            ServeDir::new(&args.frontend_dist).not_found_service(ServeFile::new(index)),
        );
    } else {
        tracing::warn!("frontend dist not found at: {}", args.frontend_dist);
    }

    // Gate page navigation, then layer cookies/tracing/CORS outside it
    let app = app
        .layer(middleware::from_fn(gate::require_session_cookie))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Run the server
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
