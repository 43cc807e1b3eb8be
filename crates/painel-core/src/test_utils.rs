//! Test utilities for painel-core
//!
//! This module provides a mock HTTP server that speaks both the finance API
//! and the color API, for integration tests of the reqwest clients and the CLI.

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Credentials accepted by the mock finance API
pub const MOCK_EMAIL: &str = "ana@example.com";
pub const MOCK_PASSWORD: &str = "segredo";
/// Identifier returned on successful login
pub const MOCK_USER_ID: i64 = 7;
/// Color returned by the mock random endpoint
pub const MOCK_RANDOM_COLOR: &str = "#0047AB";

/// Mock finance + color API server for testing
pub struct MockApiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Clone, Copy)]
struct MockState {
    /// Every endpoint answers 500
    failing: bool,
}

impl MockApiServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        Self::start_with(MockState { failing: false }).await
    }

    /// Start a server whose every endpoint returns 500
    pub async fn start_failing() -> Self {
        Self::start_with(MockState { failing: true }).await
    }

    async fn start_with(state: MockState) -> Self {
        let app = Router::new()
            .route("/usuarios/autenticar", post(handle_authenticate))
            .route("/api/usuarios/login", get(handle_legacy_login))
            .route("/lancamentos", get(handle_entries))
            .route("/random", get(handle_random))
            .route("/scheme", get(handle_scheme))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockApiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Entries served for the mock user: Jan income 100, Jan expense 40, Feb income 50
pub fn mock_entries() -> Value {
    json!([
        {"id": 1, "mes": 1, "tipo": "RECEITA", "valor": 100, "descricao": "Salário"},
        {"id": 2, "mes": 1, "tipo": "DESPESA", "valor": 40, "descricao": "Mercado"},
        {"id": 3, "mes": 2, "tipo": "RECEITA", "valor": 50, "descricao": "Freela"}
    ])
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "mock failure"})),
    )
        .into_response()
}

#[derive(Deserialize)]
struct Credentials {
    email: String,
    senha: String,
}

fn login_response(state: MockState, creds: &Credentials) -> Response {
    if state.failing {
        return server_error();
    }
    if creds.email == MOCK_EMAIL && creds.senha == MOCK_PASSWORD {
        Json(json!({"id": MOCK_USER_ID, "email": MOCK_EMAIL})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Usuário ou senha inválidos"})),
        )
            .into_response()
    }
}

/// Finance API login (JSON body)
async fn handle_authenticate(
    State(state): State<MockState>,
    Json(creds): Json<Credentials>,
) -> Response {
    login_response(state, &creds)
}

/// Finance API legacy login (query string)
async fn handle_legacy_login(
    State(state): State<MockState>,
    Query(creds): Query<Credentials>,
) -> Response {
    login_response(state, &creds)
}

#[derive(Deserialize)]
struct EntriesQuery {
    usuario: String,
}

/// Finance API entry listing
async fn handle_entries(
    State(state): State<MockState>,
    Query(query): Query<EntriesQuery>,
) -> Response {
    if state.failing {
        return server_error();
    }
    if query.usuario == MOCK_USER_ID.to_string() {
        Json(mock_entries()).into_response()
    } else {
        Json(json!([])).into_response()
    }
}

/// Color API random color
async fn handle_random(State(state): State<MockState>) -> Response {
    if state.failing {
        return server_error();
    }
    Json(json!({
        "hex": {"value": MOCK_RANDOM_COLOR, "clean": MOCK_RANDOM_COLOR.trim_start_matches('#')},
        "name": {"value": "Cobalt"}
    }))
    .into_response()
}

#[derive(Deserialize)]
struct SchemeParams {
    hex: String,
    mode: String,
    count: u8,
}

/// Color API scheme: the base color followed by `count - 1` fixed neighbours
async fn handle_scheme(
    State(state): State<MockState>,
    Query(params): Query<SchemeParams>,
) -> Response {
    if state.failing {
        return server_error();
    }
    if params.mode != "analogic" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "unsupported mode"})),
        )
            .into_response();
    }

    let neighbours = ["#FF3357", "#FF4533", "#FF6933", "#FF7B33"];
    let mut colors = vec![json!({"hex": {"value": format!("#{}", params.hex.to_uppercase())}})];
    colors.extend(
        neighbours
            .iter()
            .cycle()
            .take(usize::from(params.count.saturating_sub(1)))
            .map(|c| json!({"hex": {"value": c}})),
    );

    Json(json!({
        "mode": params.mode,
        "count": params.count.to_string(),
        "colors": colors
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ColorApi, ColorClient, FinanceApi, FinanceClient};
    use crate::color::HexColor;
    use crate::error::Error;
    use crate::palette::build_scheme_query;
    use std::time::Duration;

    fn finance(server: &MockApiServer) -> FinanceClient {
        FinanceClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    fn color(server: &MockApiServer) -> ColorClient {
        ColorClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_mock_server_starts() {
        let server = MockApiServer::start().await;
        assert!(server.url().starts_with("http://127.0.0.1:"));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let server = MockApiServer::start().await;
        let id = finance(&server)
            .authenticate(MOCK_EMAIL, MOCK_PASSWORD)
            .await
            .unwrap();
        assert_eq!(id, "7");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let server = MockApiServer::start().await;
        let err = finance(&server)
            .authenticate(MOCK_EMAIL, "errada")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn test_authenticate_legacy() {
        let server = MockApiServer::start().await;
        let id = finance(&server)
            .authenticate_legacy(MOCK_EMAIL, MOCK_PASSWORD)
            .await
            .unwrap();
        assert_eq!(id, "7");
    }

    #[tokio::test]
    async fn test_authenticate_server_error() {
        let server = MockApiServer::start_failing().await;
        let err = finance(&server)
            .authenticate(MOCK_EMAIL, MOCK_PASSWORD)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_base_url_is_not_auth_error() {
        let server = MockApiServer::start().await;
        let client =
            FinanceClient::new(&format!("{}/wrong", server.url()), Duration::from_secs(5)).unwrap();
        let err = client
            .authenticate(MOCK_EMAIL, MOCK_PASSWORD)
            .await
            .unwrap_err();
        // 404 from a misconfigured base URL is an HTTP error, not bad credentials
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_entries() {
        let server = MockApiServer::start().await;
        let entries = finance(&server).fetch_entries("7").await.unwrap();
        assert_eq!(entries.len(), 3);

        let other = finance(&server).fetch_entries("8").await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_random_color() {
        let server = MockApiServer::start().await;
        let c = color(&server).random_color().await.unwrap();
        assert_eq!(c.as_str(), MOCK_RANDOM_COLOR);
    }

    #[tokio::test]
    async fn test_random_color_failure() {
        let server = MockApiServer::start_failing().await;
        assert!(color(&server).random_color().await.is_err());
    }

    #[tokio::test]
    async fn test_scheme_sends_query() {
        let server = MockApiServer::start().await;
        let base = HexColor::parse("#ff5733").unwrap();
        let colors = color(&server)
            .scheme(&build_scheme_query(&base))
            .await
            .unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0].as_str(), "#FF5733");
    }
}
