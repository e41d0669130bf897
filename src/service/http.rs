//! HTTP API server for the tournament service
//!
//! This module exposes the public tournament endpoints together with the
//! health, stats, and Prometheus metrics surfaces on a single router.

use crate::config::AppConfig;
use crate::error::{Result, TournamentError};
use crate::matchmaker::pick_match;
use crate::rating::calculate_rating;
use crate::service::app::AppState;
use crate::service::health::HealthCheck;
use crate::types::{MatchPolicy, PlayerStats, SignupRequest};
use crate::utils::{current_timestamp, rating_difference, round2};
use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use rand::thread_rng;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Configuration for the HTTP API server
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl ApiServerConfig {
    /// Build the server config from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            port: config.service.http_port,
            host: config.service.http_host.clone(),
        }
    }
}

/// HTTP server exposing the tournament API
pub struct ApiServer {
    config: ApiServerConfig,
    state: AppState,
    shutdown_tx: broadcast::Sender<()>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiServerConfig, state: AppState) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            config,
            state,
            shutdown_tx,
        }
    }

    /// Start the API server, running until shutdown is signaled
    pub async fn start(&self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .context("Invalid API server address")?;

        let app = build_router(self.state.clone());

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind API server to {}", addr))?;

        info!("API server listening on http://{}", addr);

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API server shutting down");
            })
            .await
            .context("API server error")?;

        Ok(())
    }

    /// Signal the server to stop accepting requests and drain
    pub fn stop(&self) {
        if let Err(e) = self.shutdown_tx.send(()) {
            warn!("Failed to send shutdown signal to API server: {}", e);
        }
    }
}

/// Build the router with every tournament route attached
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/predict", post(predict_handler))
        .route("/signup", post(signup_handler))
        .route("/match", get(match_handler))
        .route("/tournament/start", get(tournament_handler))
        .route("/players", get(players_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Translate a tournament error into an HTTP response.
///
/// Validation failures map to 400 with a descriptive body, and only
/// internal failures surface as 500.
fn error_response(err: TournamentError) -> (StatusCode, Json<Value>) {
    match err {
        TournamentError::MissingFields { ref fields } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Missing required fields",
                "missing_fields": fields,
            })),
        ),
        TournamentError::NotEnoughPlayers { required, current } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Not enough players for matchmaking",
                "required_players": required,
                "current_players": current,
            })),
        ),
        TournamentError::InternalError { .. } => {
            error!("Internal error while handling request: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

async fn welcome_handler() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to 1v1 World!" }))
}

/// Rate a stat line without adding the player to the roster
async fn predict_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let stats = match PlayerStats::from_value(&body) {
        Ok(stats) => stats,
        Err(TournamentError::MissingFields { .. }) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required fields" })),
            );
        }
        Err(err) => return error_response(err),
    };

    let rating = calculate_rating(&stats);
    state.metrics().record_prediction(rating);
    debug!("Predicted rating {} for submitted stats", rating);

    (
        StatusCode::OK,
        Json(json!({
            "message": "Player stats received!",
            "player rating": rating,
        })),
    )
}

/// Register a player for the tournament
async fn signup_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let request = match SignupRequest::from_value(&body) {
        Ok(request) => request,
        Err(err) => {
            state.metrics().record_signup_rejected(err.kind());
            return error_response(err);
        }
    };

    match state.roster().register(&request.name, request.stats) {
        Ok(player) => {
            state.metrics().record_signup(player.rating);
            if let Ok(count) = state.roster().count() {
                state.metrics().set_roster_size(count);
            }
            info!(
                "Player '{}' signed up with rating {}",
                player.name, player.rating
            );

            (
                StatusCode::CREATED,
                Json(json!({
                    "message": format!("{} has signed up for the tournament!", player.name),
                    "player": player,
                })),
            )
        }
        Err(err) => {
            state.metrics().record_signup_rejected(err.kind());
            error_response(err)
        }
    }
}

/// Query parameters accepted by the match endpoint
#[derive(Debug, Deserialize)]
struct MatchQuery {
    policy: Option<String>,
}

/// Pair two players under the requested policy
async fn match_handler(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
) -> impl IntoResponse {
    let policy = match query.policy {
        Some(raw) => match raw.parse::<MatchPolicy>() {
            Ok(policy) => policy,
            Err(err) => return error_response(err),
        },
        None => state.config().matchmaking.default_policy,
    };

    let players = match state.roster().list() {
        Ok(players) => players,
        Err(err) => return error_response(err),
    };

    let timer = state.metrics().start_timer();
    let result = pick_match(&players, policy, &mut thread_rng());
    let duration = timer.stop();

    match result {
        Ok(pair) => {
            let difference = rating_difference(pair.player1.rating, pair.player2.rating);
            state.metrics().record_match(policy, difference, duration);
            info!(
                "Matched '{}' vs '{}' ({} policy, rating difference {})",
                pair.player1.name, pair.player2.name, policy, difference
            );

            (
                StatusCode::OK,
                Json(json!({
                    "message": "Match found!",
                    "match": {
                        "player1": pair.player1,
                        "player2": pair.player2,
                        "rating_difference": difference,
                    },
                })),
            )
        }
        Err(err) => {
            state.metrics().record_match_failure();
            error_response(err)
        }
    }
}

/// Announce a random matchup to open the tournament
async fn tournament_handler(State(state): State<AppState>) -> impl IntoResponse {
    let players = match state.roster().list() {
        Ok(players) => players,
        Err(err) => return error_response(err),
    };

    let timer = state.metrics().start_timer();
    let result = pick_match(&players, MatchPolicy::Random, &mut thread_rng());
    let duration = timer.stop();

    match result {
        Ok(pair) => {
            let difference = rating_difference(pair.player1.rating, pair.player2.rating);
            state
                .metrics()
                .record_match(MatchPolicy::Random, difference, duration);
            info!(
                "Tournament matchup: '{}' vs '{}'",
                pair.player1.name, pair.player2.name
            );

            (
                StatusCode::OK,
                Json(json!({
                    "message": format!("Matchup:{} vs {}", pair.player1.name, pair.player2.name),
                    "total_players": players.len(),
                })),
            )
        }
        Err(err) => {
            state.metrics().record_match_failure();
            error_response(err)
        }
    }
}

/// List the current roster in registration order
async fn players_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster().list() {
        Ok(players) => (
            StatusCode::OK,
            Json(json!({
                "players": players,
                "count": players.len(),
            })),
        ),
        Err(err) => error_response(err),
    }
}

/// Service health probe
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let check = HealthCheck::snapshot(&state);
    let status = if check.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(check))
}

/// Service and roster statistics
async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let players = match state.roster().list() {
        Ok(players) => players,
        Err(err) => return error_response(err),
    };

    let average_rating = if players.is_empty() {
        0.0
    } else {
        round2(players.iter().map(|p| p.rating).sum::<f64>() / players.len() as f64)
    };

    (
        StatusCode::OK,
        Json(json!({
            "service": {
                "name": state.config().service.name,
                "version": crate::VERSION,
                "uptime_seconds": state.uptime().as_secs(),
            },
            "roster": {
                "total_players": players.len(),
                "average_rating": average_rating,
            },
            "timestamp": current_timestamp(),
        })),
    )
}

/// Prometheus metrics in text exposition format
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics().registry().gather();

    match encoder.encode_to_string(&metric_families) {
        Ok(metrics_output) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", encoder.format_type())
            .body(metrics_output)
            .unwrap(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body("Failed to encode metrics".to_string())
                .unwrap()
        }
    }
}
