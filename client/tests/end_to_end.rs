//! Full-stack flows: the real client driving the real server router over
//! an in-memory store.

use std::sync::Arc;
use std::time::Duration;

use roster_client::net::Api;
use roster_client::{AuthCoordinator, AuthStateHandle, CredentialStore};
use roster_server::services::store::MemoryStore;
use roster_server::services::token::{DEFAULT_LIFETIME, TokenCodec};
use roster_server::state::AppState;
use roster_server::routes;

async fn spawn_server() -> (String, AppState) {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        TokenCodec::new("e2e_secret", DEFAULT_LIFETIME),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::app(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), state)
}

fn coordinator(base_url: &str) -> AuthCoordinator {
    AuthCoordinator::new(Api::new(base_url), CredentialStore::new(), AuthStateHandle::new())
}

#[tokio::test]
async fn register_login_check_logout_cycle() {
    let (base, _state) = spawn_server().await;
    let coord = coordinator(&base);

    // Register ends in an authenticated session.
    let resp = coord
        .register("astro@dummy.com", "1234567890", "1234567890", "astro")
        .await;
    assert!(resp.success, "register failed: {:?}", resp.message);
    assert!(coord.auth_state().snapshot().is_authenticated());
    assert!(coord.credentials().get().is_some());

    // The stored token validates against the server.
    let resp = coord.check_authentication().await;
    assert!(resp.success);
    assert_eq!(resp.user.unwrap().email, "astro@dummy.com");

    // Logout drops everything locally.
    coord.logout();
    assert!(coord.credentials().get().is_none());
    assert!(!coord.auth_state().snapshot().is_authenticated());

    // Fresh login with the registered credentials.
    let resp = coord.login("astro@dummy.com", "1234567890").await;
    assert!(resp.success);
    assert_eq!(
        coord.auth_state().snapshot().user().unwrap().name,
        "astro"
    );
}

#[tokio::test]
async fn second_registration_with_same_email_is_rejected_before_the_endpoint() {
    let (base, _state) = spawn_server().await;
    let coord = coordinator(&base);

    let first = coord
        .register("astro@dummy.com", "1234567890", "1234567890", "astro")
        .await;
    assert!(first.success);

    let second = coordinator(&base)
        .register("astro@dummy.com", "1234567890", "1234567890", "other")
        .await;
    assert!(!second.success);
    assert_eq!(second.error.as_deref(), Some("Duplicate User"));
}

#[tokio::test]
async fn expired_token_fails_the_auth_check_and_resets_state() {
    let (base, state) = spawn_server().await;
    let coord = coordinator(&base);

    let resp = coord
        .register("astro@dummy.com", "1234567890", "1234567890", "astro")
        .await;
    assert!(resp.success);
    let user = resp.user.unwrap();

    // Swap in an already-expired token for the same user.
    let stale = state
        .tokens
        .issue_with_lifetime(user.id, &user.email, Duration::ZERO)
        .unwrap();
    coord.credentials().set(&stale);

    let resp = coord.check_authentication().await;
    assert!(!resp.success);
    assert_eq!(resp.status, 401);
    assert!(!coord.auth_state().snapshot().is_authenticated());
}

#[tokio::test]
async fn moderation_edits_then_deletes_a_user() {
    let (base, _state) = spawn_server().await;
    let coord = coordinator(&base);

    let resp = coord
        .register("astro@dummy.com", "1234567890", "1234567890", "astro")
        .await;
    assert!(resp.success);
    let user = resp.user.unwrap();
    let token = coord.credentials().get().unwrap();
    let api = Api::new(&base);

    let update = roster_shared::types::UserUpdate {
        id: user.id,
        name: Some("cosmo".to_owned()),
        ..roster_shared::types::UserUpdate::default()
    };
    let edited = api.edit_user(&token, &update).await.unwrap();
    assert_eq!(edited.name, "cosmo");

    api.delete_user(&token, user.id).await.unwrap();

    // The session the deleted user still holds no longer checks out.
    let resp = coord.check_authentication().await;
    assert!(!resp.success);
    assert!(!coord.auth_state().snapshot().is_authenticated());
}

#[tokio::test]
async fn moderation_without_a_session_is_rejected() {
    let (base, _state) = spawn_server().await;
    let api = Api::new(&base);

    let update = roster_shared::types::UserUpdate { id: 1, ..roster_shared::types::UserUpdate::default() };
    let err = api.edit_user("", &update).await.unwrap_err();
    assert!(matches!(err, roster_shared::error::ApiError::Authentication(_)), "got {err:?}");
}

#[tokio::test]
async fn bad_password_login_leaves_a_logged_out_client_logged_out() {
    let (base, _state) = spawn_server().await;
    let coord = coordinator(&base);

    coord
        .register("astro@dummy.com", "1234567890", "1234567890", "astro")
        .await;
    coord.logout();

    let resp = coord.login("astro@dummy.com", "wrong-password").await;
    assert!(!resp.success);
    assert!(resp.message.unwrap().contains("Invalid email or password"));
    assert!(coord.credentials().get().is_none());
    assert!(!coord.auth_state().snapshot().is_authenticated());
}
