//! Router assembly.
//!
//! The session-verify middleware is layered onto exactly the protected
//! routes; everything else is public. Handlers behind the layer receive the
//! verified identity as a request extension and never re-decode tokens.

pub mod users;
pub mod verify;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the full API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/users/auth", get(users::auth_status))
        .route("/users/edit", put(users::edit_user))
        .route("/users/{user_id}", delete(users::delete_user))
        .route_layer(from_fn_with_state(state.clone(), verify::verify_session));

    Router::new()
        .route("/users/login", post(users::login))
        .route("/users/register", post(users::register))
        .route("/users/get", get(users::get_user))
        .route("/users/getAll", get(users::get_all))
        .merge(protected)
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
