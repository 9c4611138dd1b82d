mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        api_base_url = %config.api_base_url,
        protected = ?config.gate.protected_prefixes,
        cookie_secure = config.cookie_secure,
        "configuration loaded"
    );

    let state = state::AppState::new(config).expect("backend client init failed");
    let app = routes::app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "notes server listening");
    axum::serve(listener, app).await.expect("server failed");
}
