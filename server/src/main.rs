use std::sync::Arc;

use roster_server::services::store::MemoryStore;
use roster_server::services::token::TokenCodec;
use roster_server::{routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let tokens = TokenCodec::from_env();
    let users = Arc::new(MemoryStore::new());
    let state = state::AppState::new(users, tokens);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "roster-server listening");
    axum::serve(listener, app).await.expect("server failed");
}
