use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::{
    error::Error, processor::NotesResult, yt::TranscriptFetcher, NoteGenerator, NotesProcessor,
};

pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
}

/// Builds the app without binding to a port.
pub fn router<T, G>(processor: NotesProcessor<T, G>) -> Router
where
    T: TranscriptFetcher + Send + Sync + 'static,
    G: NoteGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(health))
        .route("/summarize", get(summarize::<T, G>))
        // mirrors the caller's origin, so credentials can be allowed
        .layer(CorsLayer::very_permissive())
        .with_state(Arc::new(processor))
}

pub async fn serve(app: Router, config: ServeConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "yt-notes HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

#[derive(Debug, Deserialize)]
struct SummarizeQuery {
    youtube_url: Option<String>,
}

async fn summarize<T, G>(
    State(processor): State<Arc<NotesProcessor<T, G>>>,
    query: Result<Query<SummarizeQuery>, QueryRejection>,
) -> Result<Json<NotesResult>, Error>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    G: NoteGenerator + Send + Sync + 'static,
{
    let Query(params) = query.map_err(|e| Error::InvalidInput(e.body_text()))?;
    let youtube_url = params.youtube_url.ok_or_else(|| {
        Error::InvalidInput("Missing required query parameter: youtube_url".into())
    })?;

    let result = processor.summarize(&youtube_url).await?;
    Ok(Json(result))
}
