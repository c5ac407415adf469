//! HTTP surface — thin I/O wrapper over the decision engine.
//!
//! No decision logic lives here: handlers collect text (form field or
//! uploaded file), sanitize it, and hand it to the engine.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};
use uuid::Uuid;

use super::extract::extract_upload_text;
use crate::engine::DecisionEngine;
use crate::sanitize::sanitize_email_text;

/// Upload cap: generous for a 5000-char email, tight enough to bound PDFs.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Preview length surfaced back to the caller, in characters.
const PREVIEW_CHARS: usize = 200;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DecisionEngine>,
    pub static_dir: PathBuf,
}

/// Build the axum router.
pub fn app_routes(engine: Arc<DecisionEngine>, static_dir: &std::path::Path) -> Router {
    let state = AppState {
        engine,
        static_dir: static_dir.to_path_buf(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/classify", post(classify))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state);

    if static_dir.exists() {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    router.layer(cors)
}

// ── Liveness / readiness ────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness is engine lifecycle state: the engine is usable the moment it
/// is constructed, so this reports the active mode rather than gating.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let remote = state.engine.remote_available();
    let metodo_padrao = if remote { "remote" } else { "keyword-fallback" };
    Json(serde_json::json!({
        "status": "ready",
        "remote": remote,
        "metodo_padrao": metodo_padrao,
    }))
}

// ── Index ───────────────────────────────────────────────────────────

async fn index(State(state): State<AppState>) -> Response {
    let index_path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index_path).await {
        Ok(content) => Html(content).into_response(),
        Err(_) => Json(serde_json::json!({
            "message": "Classificador de emails online",
            "version": env!("CARGO_PKG_VERSION"),
        }))
        .into_response(),
    }
}

// ── Classification ──────────────────────────────────────────────────

async fn classify(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut email_text: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Malformed multipart request");
                return bad_request("Erro ao processar o formulário enviado.");
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("email_text") => match field.text().await {
                Ok(text) if !text.trim().is_empty() => email_text = Some(text),
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to read email_text field");
                    return bad_request("Erro ao ler o campo 'email_text'.");
                }
            },
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((filename, bytes.to_vec())),
                    Err(e) => {
                        warn!(error = %e, "Failed to read uploaded file");
                        return bad_request("Erro ao processar arquivo.");
                    }
                }
            }
            _ => {}
        }
    }

    let raw_text = match (email_text, file) {
        (Some(_), Some(_)) => {
            return bad_request("Envie apenas texto ou um arquivo, não ambos.");
        }
        (None, None) => {
            return bad_request("Envie texto ou um arquivo (.txt ou .pdf).");
        }
        (Some(text), None) => text,
        (None, Some((filename, bytes))) => match extract_upload_text(&filename, &bytes) {
            Ok(text) => text,
            Err(e) => return bad_request(&e.to_string()),
        },
    };

    let sanitized = sanitize_email_text(&raw_text);
    if sanitized.is_empty() {
        return bad_request("O email está vazio após processamento.");
    }

    let request_id = Uuid::new_v4();
    let result = match state.engine.classify(&sanitized).await {
        Ok(result) => result,
        Err(e) => {
            info!(id = %request_id, error = %e, "Classification input rejected");
            return bad_request(&e.to_string());
        }
    };

    let resposta = state.engine.response_for(result.categoria);

    info!(
        id = %request_id,
        categoria = %result.categoria,
        confianca = result.confianca,
        metodo = result.metodo.as_str(),
        "Classification complete"
    );

    Json(serde_json::json!({
        "sucesso": true,
        "categoria": result.categoria,
        "confianca": result.confianca,
        "labels": result.labels,
        "scores": result.scores,
        "metodo": result.metodo,
        "resposta_automatica": resposta,
        "email_preview": preview(&sanitized),
    }))
    .into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// First 200 characters of the sanitized text.
fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
