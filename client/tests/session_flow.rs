//! Session store flows against a stubbed EcoTrack API.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ecotrack_client::{ApiClient, RouteDecision, SessionStore};

const USER_ID: &str = "7b7f3f2e-0d65-4b34-9a70-3f5f6d1f6c01";

fn login_body() -> serde_json::Value {
    json!({
        "current_user": {
            "id": USER_ID,
            "email": "a@x.com",
            "created_at": "2024-01-01T00:00:00Z",
            "is_active": true,
            "name": "A",
            "location": "NYC",
            "eco_goals": [],
            "impact_score": 0,
            "achievements": [],
            "challenges": [],
            "reports": []
        },
        "auth_token": "test-token"
    })
}

fn invalid_credentials_body() -> serde_json::Value {
    json!({
        "success": false,
        "message": "Invalid email or password",
        "error_code": "INVALID_CREDENTIALS",
        "timestamp": "2024-01-01T00:00:00.000Z"
    })
}

async fn store_with_login_success(server: &MockServer) -> SessionStore {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(server)
        .await;

    SessionStore::new(ApiClient::new(server.uri()).unwrap())
}

#[tokio::test]
async fn login_success_populates_session() {
    let server = MockServer::start().await;
    let store = store_with_login_success(&server).await;

    store.login("a@x.com", "secret1").await.unwrap();

    let state = store.state();
    assert!(state.is_authenticated);
    assert_eq!(state.auth_token.as_deref(), Some("test-token"));
    assert_eq!(state.current_user.unwrap().email, "a@x.com");
    assert!(!state.is_loading);
    assert!(state.error_message.is_none());
}

#[tokio::test]
async fn login_failure_clears_identity_and_records_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(invalid_credentials_body()))
        .mount(&server)
        .await;

    let store = SessionStore::new(ApiClient::new(server.uri()).unwrap());
    let err = store.login("a@x.com", "wrong").await.unwrap_err();

    // The server message surfaces verbatim for display.
    assert_eq!(err.to_string(), "Invalid email or password");

    let state = store.state();
    assert!(!state.is_authenticated);
    assert!(state.current_user.is_none());
    assert!(state.auth_token.is_none());
    assert!(!state.is_loading);
    assert_eq!(
        state.error_message.as_deref(),
        Some("Invalid email or password")
    );
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    // Whatever the failure cause, the API contract returns one message;
    // the client must not be able to tell the cases apart.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(invalid_credentials_body()))
        .mount(&server)
        .await;

    let store = SessionStore::new(ApiClient::new(server.uri()).unwrap());

    let unknown_email = store.login("nobody@x.com", "secret1").await.unwrap_err();
    let wrong_password = store.login("a@x.com", "wrong").await.unwrap_err();

    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn check_session_confirms_persisted_token() {
    let server = MockServer::start().await;
    let store = store_with_login_success(&server).await;
    store.login("a@x.com", "secret1").await.unwrap();

    Mock::given(method("GET"))
        .and(path("/api/auth/verify"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "id": USER_ID,
                "email": "a@x.com",
                "created_at": "2024-01-01T00:00:00Z",
                "name": "A"
            }
        })))
        .mount(&server)
        .await;

    assert!(store.check_session().await);
    assert!(store.state().is_authenticated);
}

#[tokio::test]
async fn check_session_rejection_drops_identity() {
    let server = MockServer::start().await;
    let store = store_with_login_success(&server).await;
    store.login("a@x.com", "secret1").await.unwrap();

    Mock::given(method("GET"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid token - user not found",
            "error_code": "AUTH_USER_NOT_FOUND",
            "timestamp": "2024-01-01T00:00:00.000Z"
        })))
        .mount(&server)
        .await;

    assert!(!store.check_session().await);

    let state = store.state();
    assert!(!state.is_authenticated);
    assert!(state.current_user.is_none());
    assert!(state.auth_token.is_none());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn check_session_without_token_skips_network() {
    // No mock mounted: a request would fail the test via a 404 body.
    let server = MockServer::start().await;
    let store = SessionStore::new(ApiClient::new(server.uri()).unwrap());

    assert!(!store.check_session().await);
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn logout_is_synchronous_and_immediate() {
    let server = MockServer::start().await;
    let store = store_with_login_success(&server).await;
    store.login("a@x.com", "secret1").await.unwrap();
    assert!(store.state().is_authenticated);

    // No await: logout must not depend on any in-flight request.
    store.logout();

    let state = store.state();
    assert!(!state.is_authenticated);
    assert!(state.current_user.is_none());
    assert!(state.auth_token.is_none());

    // The guard reflects the cleared session on the very next decision.
    assert_eq!(
        ecotrack_client::decide(&state, "/dashboard"),
        RouteDecision::Redirect("/sign-up")
    );
}

#[tokio::test]
async fn last_completed_login_wins() {
    let server = MockServer::start().await;
    let store = store_with_login_success(&server).await;

    store.login("a@x.com", "secret1").await.unwrap();

    let second = json!({
        "current_user": {
            "id": "11111111-2222-3333-4444-555555555555",
            "email": "b@x.com",
            "created_at": "2024-02-01T00:00:00Z",
            "name": "B"
        },
        "auth_token": "second-token"
    });
    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(second))
        .mount(&server)
        .await;

    store.login("b@x.com", "secret2").await.unwrap();

    let state = store.state();
    assert_eq!(state.current_user.unwrap().email, "b@x.com");
    assert_eq!(state.auth_token.as_deref(), Some("second-token"));
}

#[tokio::test]
async fn persisted_session_rehydrates_unauthenticated() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("session.json");

    {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
            .mount(&server)
            .await;

        let store = SessionStore::with_persistence(
            ApiClient::new(server.uri()).unwrap(),
            snapshot.clone(),
        );
        store.login("a@x.com", "secret1").await.unwrap();
    }

    // A fresh process restores identity but must re-verify before
    // claiming an authenticated session.
    let store =
        SessionStore::with_persistence(ApiClient::new(server.uri()).unwrap(), snapshot.clone());
    let state = store.state();
    assert_eq!(state.current_user.unwrap().email, "a@x.com");
    assert_eq!(state.auth_token.as_deref(), Some("test-token"));
    assert!(!state.is_authenticated);
}

#[tokio::test]
async fn logout_clears_persisted_snapshot() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("session.json");

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(&server)
        .await;

    let store =
        SessionStore::with_persistence(ApiClient::new(server.uri()).unwrap(), snapshot.clone());
    store.login("a@x.com", "secret1").await.unwrap();
    store.logout();

    let store =
        SessionStore::with_persistence(ApiClient::new(server.uri()).unwrap(), snapshot);
    let state = store.state();
    assert!(state.current_user.is_none());
    assert!(state.auth_token.is_none());
}
