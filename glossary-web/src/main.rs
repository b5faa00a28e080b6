//! Servidor web Axum para anotar textos com o glossário

mod config;
mod error;
mod state;

use std::sync::{Arc, RwLockReadGuard};
use std::time::Instant;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use glossary_core::{corpus::demo_texts, CommittedAnnotation, Enricher, KeywordEntry};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::WebConfig;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
struct EnrichRequest {
    text: String,
}

#[derive(Serialize)]
struct EnrichResponse {
    text: String,
    annotations: Vec<CommittedAnnotation>,
    processing_ms: u64,
}

#[derive(Deserialize)]
struct BatchRequest {
    texts: Vec<String>,
}

#[derive(Serialize)]
struct BatchResponse {
    texts: Vec<String>,
    processing_ms: u64,
}

#[derive(Serialize)]
struct VocabularyResponse {
    vocabulary: String,
    source: String,
    /// Verbetes na ordem de processamento (mais longos primeiro)
    keywords: Vec<KeywordEntry>,
    /// Registros ignorados na construção do índice
    skipped: Vec<String>,
}

#[derive(Serialize)]
struct ReloadResponse {
    vocabulary: String,
    keywords: usize,
    skipped: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = WebConfig::load()?;
    let state = Arc::new(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("🚀 Servidor de glossário iniciado em http://{}", config.bind);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/enrich", post(enrich_handler))
        .route("/enrich/batch", post(batch_handler))
        .route("/vocabulary", get(vocabulary_handler))
        .route("/reload", post(reload_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state)
}

fn read_enricher(state: &AppState) -> Result<RwLockReadGuard<'_, Enricher>, ApiError> {
    state
        .enricher
        .read()
        .map_err(|_| ApiError::Internal("lock do motor envenenado".to_string()))
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Anota um texto e devolve as anotações aplicadas
async fn enrich_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnrichRequest>,
) -> Result<Json<EnrichResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Texto vazio".to_string()));
    }

    // O motor é síncrono: roda fora do runtime
    let (enrichment, elapsed) = tokio::task::spawn_blocking(move || -> Result<_, ApiError> {
        let started = Instant::now();
        let enricher = read_enricher(&state)?;
        let enrichment = enricher.enrich_detailed(&req.text);
        Ok((enrichment, started.elapsed()))
    })
    .await??;

    info!(
        annotations = enrichment.annotations.len(),
        ms = elapsed.as_millis() as u64,
        "texto anotado"
    );
    Ok(Json(EnrichResponse {
        text: enrichment.text,
        annotations: enrichment.annotations,
        processing_ms: elapsed.as_millis() as u64,
    }))
}

/// Anota vários textos de uma vez, preservando a ordem
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let response = tokio::task::spawn_blocking(move || -> Result<_, ApiError> {
        let started = Instant::now();
        let enricher = read_enricher(&state)?;
        let texts = enricher.enrich_batch(&req.texts);
        Ok(BatchResponse {
            texts,
            processing_ms: started.elapsed().as_millis() as u64,
        })
    })
    .await??;

    info!(texts = response.texts.len(), ms = response.processing_ms, "lote anotado");
    Ok(Json(response))
}

/// Lista os verbetes do índice atual
async fn vocabulary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VocabularyResponse>, ApiError> {
    let enricher = read_enricher(&state)?;
    Ok(Json(VocabularyResponse {
        vocabulary: enricher.config().vocabulary.clone(),
        source: state.source.describe(),
        keywords: enricher.index().entries().to_vec(),
        skipped: enricher.index().skipped().iter().map(ToString::to_string).collect(),
    }))
}

/// Reconstrói o índice a partir da fonte configurada
async fn reload_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let response = tokio::task::spawn_blocking(move || -> Result<ReloadResponse, ApiError> {
        let mut enricher = state
            .enricher
            .write()
            .map_err(|_| ApiError::Internal("lock do motor envenenado".to_string()))?;
        enricher.reload(&state.source)?;
        Ok(ReloadResponse {
            vocabulary: enricher.config().vocabulary.clone(),
            keywords: enricher.index().len(),
            skipped: enricher.index().skipped().len(),
        })
    })
    .await??;

    Ok(Json(response))
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| {
            serde_json::json!({
                "domain": domain,
                "text": text
            })
        })
        .collect();
    Json(texts)
}
