// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod live;

use axum::{
    Json, Router,
    extract::{FromRef, Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use envios_api::{
    ApiError, DeleteRecordResponse, FormOptionsResponse, HealthResponse, SaveRecordResponse,
    ViewQuery, ViewResponse, decode_record, delete_record, form_options, get_record, get_view,
    health, load_records, parse_view_criteria, save_record,
};
use envios_domain::{NaiveDateTime, Record, Tz, ViewCriteria, local_now};
use envios_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::{Args, DatabaseTarget, ServerConfig};
use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The record store. Every request holds the lock for one handler call.
    persistence: Arc<Mutex<Persistence>>,
    /// Business timezone for "today" and overdue checks.
    timezone: Tz,
    /// Branch catalog.
    branches: Arc<Vec<String>>,
    /// Change notifications for `/api/live`.
    live: Arc<LiveEventBroadcaster>,
}

impl AppState {
    fn new(persistence: Persistence, timezone: Tz, branches: Vec<String>) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            timezone,
            branches: Arc::new(branches),
            live: Arc::new(LiveEventBroadcaster::new()),
        }
    }

    fn now(&self) -> NaiveDateTime {
        local_now(self.timezone)
    }
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.live)
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } | ApiError::InvalidInput { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/api/envios`.
///
/// Lists every stored record. A store failure yields an empty list.
async fn handle_list_records(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Record>> {
    let mut persistence = app_state.persistence.lock().await;
    let records: Vec<Record> = load_records(&mut persistence);
    drop(persistence);

    info!(count = records.len(), "Handling list_records request");
    Json(records)
}

/// Handler for POST `/api/envios`.
///
/// Creates a record or replaces the one with the same id.
async fn handle_save_record(
    AxumState(app_state): AxumState<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SaveRecordResponse>, HttpError> {
    let record: Record = decode_record(payload)?;
    info!(id = record.id(), kind = %record.kind(), "Handling save_record request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SaveRecordResponse =
        save_record(&mut persistence, &record, &app_state.branches)?;
    drop(persistence);

    app_state.live.broadcast(&LiveEvent::RecordSaved {
        id: response.id.clone(),
        kind: record.kind(),
        created: response.created,
    });

    Ok(Json(response))
}

/// Handler for GET `/api/envios/{id}`.
async fn handle_get_record(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, HttpError> {
    info!(id = %id, "Handling get_record request");

    let mut persistence = app_state.persistence.lock().await;
    let record: Record = get_record(&mut persistence, &id)?;
    drop(persistence);

    Ok(Json(record))
}

/// Handler for DELETE `/api/envios/{id}`.
async fn handle_delete_record(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRecordResponse>, HttpError> {
    info!(id = %id, "Handling delete_record request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteRecordResponse = delete_record(&mut persistence, &id)?;
    drop(persistence);

    app_state.live.broadcast(&LiveEvent::RecordDeleted { id });

    Ok(Json(response))
}

/// Handler for GET `/api/view`.
///
/// Filters and orders records for the dashboard using the current business
/// time.
async fn handle_view(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<ViewResponse>, HttpError> {
    let criteria: ViewCriteria = parse_view_criteria(&query)?;
    let now: NaiveDateTime = app_state.now();
    info!(?criteria, %now, "Handling view request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ViewResponse = get_view(&mut persistence, &criteria, now);
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/form-options`.
async fn handle_form_options(
    AxumState(app_state): AxumState<AppState>,
) -> Json<FormOptionsResponse> {
    Json(form_options(&app_state.branches))
}

/// Handler for GET `/api/health`.
///
/// Responds 503 when the database does not answer.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let mut persistence = app_state.persistence.lock().await;
    let response: HealthResponse = health(&mut persistence);
    drop(persistence);

    let status: StatusCode = if response.database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/envios",
            get(handle_list_records).post(handle_save_record),
        )
        .route(
            "/api/envios/{id}",
            get(handle_get_record).delete(handle_delete_record),
        )
        .route("/api/view", get(handle_view))
        .route("/api/form-options", get(handle_form_options))
        .route("/api/health", get(handle_health))
        .route("/api/live", get(live_events_handler))
        .with_state(app_state)
}

fn open_persistence(target: &DatabaseTarget) -> Result<Persistence, PersistenceError> {
    match target {
        DatabaseTarget::Mysql(url) => {
            info!("Using MySQL/MariaDB database");
            Persistence::new_with_mysql(url)
        }
        DatabaseTarget::SqliteFile(path) => {
            info!("Using file-based database at: {}", path);
            Persistence::new_with_file(path)
        }
        DatabaseTarget::InMemory => {
            info!("Using in-memory database");
            Persistence::new_in_memory()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Envios Server");

    let config: ServerConfig = ServerConfig::from_args(args)?;
    info!(
        timezone = %config.timezone,
        branches = ?config.branches,
        "Loaded configuration"
    );

    let persistence: Persistence = open_persistence(&config.database)?;
    let app_state: AppState = AppState::new(persistence, config.timezone, config.branches);

    let app: Router = build_router(app_state);

    info!("Server listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
