//! HTTP API for Risou
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /analyze - Analyze a statement
//! - GET /last - Last analysis served by this process
//! - POST /delay - Delays and allocation for given scores

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::{allocate, compute_delays, normalize, Analyzer, RandomChooser};
use crate::error::RisouError;
use crate::types::{AnalysisResult, DelayAllocation, DelayLevel, DelaySet, DimensionScores, clamp_score};

/// App state
pub struct AppState {
    pub analyzer: Analyzer,
    pub last: RwLock<Option<AnalysisResult>>,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// "auto" or absent to infer
    pub category: Option<String>,
}

/// Delay request
#[derive(Debug, Deserialize)]
pub struct DelayRequest {
    pub scores: DimensionScores,
}

/// Delay response
#[derive(Debug, Serialize)]
pub struct DelayResponse {
    pub delays: DelaySet,
    pub allocation: DelayAllocation,
    pub level: DelayLevel,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the API router
pub fn create_router(analyzer: Analyzer) -> Router {
    let state = Arc::new(AppState {
        analyzer,
        last: RwLock::new(None),
    });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/last", get(last))
        .route("/delay", post(delay))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Analyze one statement; empty text is rejected
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, StatusCode> {
    if normalize(&req.text).is_empty() {
        tracing::info!(code = RisouError::EmptyInput.code(), "rejected analyze request");
        return Err(StatusCode::BAD_REQUEST);
    }

    let result = {
        let mut chooser = RandomChooser::new();
        state.analyzer.analyze(&req.text, req.category.as_deref(), &mut chooser)
    };
    tracing::info!(
        category = %result.category,
        delay = result.delays.overall,
        "analyzed"
    );

    *state.last.write().await = Some(result.clone());
    Ok(Json(result))
}

/// Last analysis
async fn last(State(state): State<Arc<AppState>>) -> Result<Json<AnalysisResult>, StatusCode> {
    let last = state.last.read().await;
    last.clone().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Convert caller-supplied scores; every value is clamped to [0,100] first
async fn delay(Json(req): Json<DelayRequest>) -> Json<DelayResponse> {
    let s = req.scores;
    let scores = DimensionScores {
        clarity: clamp_score(s.clarity as i32),
        execution: clamp_score(s.execution as i32),
        planning: clamp_score(s.planning as i32),
        resources: clamp_score(s.resources as i32),
        feedback: clamp_score(s.feedback as i32),
        overall: clamp_score(s.overall as i32),
    };
    let delays = compute_delays(&scores);
    let allocation = allocate(delays.overall, &scores);

    Json(DelayResponse {
        level: delays.level(),
        delays,
        allocation,
    })
}

/// Run the API server
pub async fn run_server(addr: &str, analyzer: Analyzer) -> Result<(), RisouError> {
    let router = create_router(analyzer);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "risou API listening");
    println!("Risou API running on {}", addr);
    println!("  GET  /health   - Health check");
    println!("  POST /analyze  - Analyze a statement");
    println!("  GET  /last     - Last analysis");
    println!("  POST /delay    - Delays for given scores");
    axum::serve(listener, router).await?;
    Ok(())
}
