//! Integration tests for greenify-core
//!
//! The session controller runs against the real file store and, for
//! registration, against a real gateway server bound to a local port.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use greenify_core::adapters::{DuckDbUserRepository, FileSessionStore, HttpRegistrationGateway};
use greenify_core::domain::{Argon2Params, RegistrationRequest};
use greenify_core::ports::{RegistrationGateway, SessionStore, UserRepository, KEY_USER};
use greenify_core::server::{serve_with_listener, AppState};
use greenify_core::services::{RegistrationService, SessionController};
use greenify_core::{GreenifyContext, Language, Page, Theme, User};

// ============================================================================
// Test Helpers
// ============================================================================

/// A running gateway server on 127.0.0.1 with its own users database
struct TestServer {
    base_url: String,
    repo: Arc<DuckDbUserRepository>,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start(dir: &TempDir) -> Self {
        let repo = Arc::new(DuckDbUserRepository::new(&dir.path().join("users.duckdb")).unwrap());
        repo.ensure_schema().unwrap();
        let state = AppState::new(RegistrationService::with_params(
            repo.clone(),
            Argon2Params::fast(),
        ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve_with_listener(listener, state, async {
            let _ = rx.await;
        }));

        Self {
            base_url,
            repo,
            shutdown,
            handle,
        }
    }

    fn gateway(&self) -> Arc<HttpRegistrationGateway> {
        Arc::new(HttpRegistrationGateway::new(&self.base_url, Duration::from_secs(5)).unwrap())
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap().unwrap();
    }
}

fn file_store(dir: &TempDir) -> Arc<FileSessionStore> {
    Arc::new(FileSessionStore::new(&dir.path().join("profile")).unwrap())
}

/// Gateway pointing at a port nothing listens on
async fn dead_gateway() -> Arc<HttpRegistrationGateway> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Arc::new(HttpRegistrationGateway::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap())
}

// ============================================================================
// Session persistence
// ============================================================================

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    {
        let mut session = SessionController::load(store.clone(), dead_gateway().await).unwrap();
        session.login("leyla@eco.az", "pw").unwrap();
        session.award_points(30, 2).unwrap();
        session.toggle_theme().unwrap();
        session.set_language(Language::Ru).unwrap();
    }

    // A new process: fresh store instance over the same directory
    let store = file_store(&dir);
    let session = SessionController::load(store, dead_gateway().await).unwrap();

    let user = session.user().unwrap();
    assert_eq!(user.name, "leyla");
    assert_eq!(user.points, 30);
    assert_eq!(user.tasks_completed, 2);
    assert_eq!(session.theme(), Theme::Light);
    assert_eq!(session.language(), Language::Ru);
    assert_eq!(session.page(), Page::Home);
}

#[tokio::test]
async fn test_returning_user_gets_progress_back() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut session = SessionController::load(store.clone(), dead_gateway().await).unwrap();
    session.login("leyla@eco.az", "pw").unwrap();
    session.award_points(40, 2).unwrap();

    let mut next = SessionController::load(store.clone(), dead_gateway().await).unwrap();
    let user = next.login("leyla@eco.az", "other").unwrap();
    assert_eq!(
        user,
        User {
            name: "leyla".into(),
            email: "leyla@eco.az".into(),
            points: 40,
            tasks_completed: 2
        }
    );

    // A different email replaces the mirror
    next.login("kamran@eco.az", "pw").unwrap();
    let raw = store.load(KEY_USER).unwrap().unwrap();
    let stored: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, User::new("kamran", "kamran@eco.az"));
}

#[tokio::test]
async fn test_logout_then_restart_is_anonymous() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut session = SessionController::load(store.clone(), dead_gateway().await).unwrap();
    session.login("a@b.com", "x").unwrap();
    session.logout().unwrap();

    let session = SessionController::load(file_store(&dir), dead_gateway().await).unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn test_context_uses_greenify_dir() {
    let dir = TempDir::new().unwrap();

    {
        let mut ctx = GreenifyContext::new(dir.path()).unwrap();
        ctx.session.set_language(Language::En).unwrap();
    }

    let ctx = GreenifyContext::new(dir.path()).unwrap();
    assert_eq!(ctx.session.language(), Language::En);
    assert!(ctx.chat().welcome().starts_with("Hi!"));
    assert!(dir.path().join("storage.json").exists());
}

// ============================================================================
// Registration through the HTTP gateway
// ============================================================================

#[tokio::test]
async fn test_register_end_to_end() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::start(&dir).await;

    let store = file_store(&dir);
    let mut session = SessionController::load(store.clone(), server.gateway()).unwrap();

    let user = session.register("Kim", "k@x.com", "secret").await.unwrap();

    assert_eq!(user, User::new("Kim", "k@x.com"));
    assert_eq!(session.page(), Page::Welcome);
    assert!(store.load(KEY_USER).unwrap().is_some());

    let rows = server.repo.find_by_email("k@x.com").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Kim");
    assert!(rows[0].password_hash.starts_with("$argon2id$"));
    assert!(!rows[0].password_hash.contains("secret"));

    server.stop().await;
}

#[tokio::test]
async fn test_gateway_reports_missing_fields() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::start(&dir).await;
    let gateway = server.gateway();

    let request = RegistrationRequest {
        name: Some("Kim".into()),
        email: None,
        password: Some("secret".into()),
    };
    let response = gateway.register(&request).await.unwrap();
    assert!(!response.success);
    assert_eq!(response.message, "Missing fields");

    // Through the controller the gateway's message is surfaced as-is
    let mut session = SessionController::load(file_store(&dir), gateway).unwrap();
    let err = session.register("Kim", "", "secret").await.unwrap_err();
    assert_eq!(err.to_string(), "Missing fields");
    assert!(!session.is_authenticated());
    assert_eq!(server.repo.count_users().unwrap(), 0);

    server.stop().await;
}

#[tokio::test]
async fn test_unreachable_gateway_is_localized() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut session = SessionController::load(store.clone(), dead_gateway().await).unwrap();
    session.set_language(Language::Ru).unwrap();
    let active = session.login("a@b.com", "x").unwrap();

    let err = session.register("Kim", "k@x.com", "secret").await.unwrap_err();

    assert_eq!(err.to_string(), "Ошибка сервера");
    assert_eq!(session.user(), Some(&active));
}
