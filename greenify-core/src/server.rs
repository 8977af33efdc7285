//! Registration gateway HTTP server
//!
//! One route, `POST /api/register`, answering `{success, message}` with
//! 200, 400 or 500. CORS is open so the site can call it from any origin.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::adapters::DuckDbUserRepository;
use crate::config::Config;
use crate::domain::registration::{MSG_DB_ERROR, MSG_MISSING_FIELDS};
use crate::domain::{RegistrationRequest, RegistrationResponse};
use crate::services::RegistrationService;

pub const REGISTER_ROUTE: &str = "/api/register";

#[derive(Clone)]
pub struct AppState {
    registration: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(registration: RegistrationService) -> Self {
        Self {
            registration: Arc::new(registration),
        }
    }
}

/// Install the `tracing` subscriber, filtered by `RUST_LOG` (default `info`).
/// A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(REGISTER_ROUTE, post(register_handler))
        .layer(cors)
        .with_state(state)
}

/// A body that is not a JSON object gets the same answer as one with
/// missing fields.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> (StatusCode, Json<RegistrationResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected registration body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(RegistrationResponse::fail(MSG_MISSING_FIELDS)),
            );
        }
    };

    // Hashing and the DuckDB insert both block
    let service = Arc::clone(&state.registration);
    match tokio::task::spawn_blocking(move || service.register(&request)).await {
        Ok((status, response)) => {
            info!("POST {} -> {}", REGISTER_ROUTE, status.as_u16());
            (status, Json(response))
        }
        Err(e) => {
            warn!("Registration task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RegistrationResponse::fail(MSG_DB_ERROR)),
            )
        }
    }
}

/// Open the users database and serve on `0.0.0.0:{config.server_port}`
/// until Ctrl+C or SIGTERM.
pub async fn serve(greenify_dir: &Path, config: &Config) -> Result<()> {
    let db_path = config.database_path(greenify_dir);
    info!("Opening users database at {}", db_path.display());
    let repo = DuckDbUserRepository::new(&db_path)
        .with_context(|| format!("Failed to open {}", db_path.display()))?;
    repo.ensure_schema()?;

    let state = AppState::new(RegistrationService::new(Arc::new(repo)));

    let address = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    serve_with_listener(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_listener<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server running on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Argon2Params;
    use crate::ports::UserRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> (Arc<DuckDbUserRepository>, Router) {
        let repo = Arc::new(DuckDbUserRepository::open_in_memory().unwrap());
        repo.ensure_schema().unwrap();
        let service = RegistrationService::with_params(repo.clone(), Argon2Params::fast());
        (repo, router(AppState::new(service)))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(REGISTER_ROUTE)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, RegistrationResponse) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_register_ok() {
        let (repo, app) = app();

        let (status, body) = send(
            app,
            post_json(r#"{"name":"Kim","email":"k@x.com","password":"secret"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, RegistrationResponse::ok("User registered!"));
        assert_eq!(repo.count_users().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let (repo, app) = app();

        let (status, body) = send(app, post_json(r#"{"name":"Kim","email":"k@x.com"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, RegistrationResponse::fail("Missing fields"));
        assert_eq!(repo.count_users().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (_, app) = app();
        let (status, body) = send(app, post_json("{name: Kim")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing fields");
    }

    #[tokio::test]
    async fn test_non_string_field_is_400() {
        let (repo, app) = app();
        let body = r#"{"name":123,"email":"k@x.com","password":"secret"}"#;

        let (status, body) = send(app, post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing fields");
        assert_eq!(repo.count_users().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let (_, app) = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri(REGISTER_ROUTE)
            .body(Body::from(r#"{"name":"Kim","email":"k@x.com","password":"secret"}"#))
            .unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let (_, app) = app();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(REGISTER_ROUTE)
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
