use crate::config::Config;
use crate::language::Language;
use crate::prompts::{PromptBundle, PromptProvider};
use crate::schedule::{weekday_name, DayStatus, HoursRange, Schedule, ScheduleError, CLOSED};
use axum::{
    extract::{Query, Request, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Timelike, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    service_name: Arc<str>,
    provider: PromptProvider,
    prompts: Arc<PromptBundle>,
}

/// Read-only HTTP API over the schedule and prompt texts.
pub struct HoursServer {
    port: u16,
    state: AppState,
}

impl HoursServer {
    pub fn new(config: &Config, provider: PromptProvider, prompts: PromptBundle) -> Self {
        Self {
            port: config.port,
            state: AppState {
                service_name: config.service_name.as_str().into(),
                provider,
                prompts: Arc::new(prompts),
            },
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/api/hours", get(all_hours))
            .route("/api/hours/today", get(today_hours))
            .route("/api/hours/status", get(open_status))
            .route("/api/hours/week", get(weekly_hours))
            .route("/api/general/welcome", get(welcome))
            .route("/api/general/prompt", get(prompt))
            .fallback(not_found)
            .layer(middleware::from_fn(log_request))
            .with_state(self.state.clone())
    }

    /// Binds the listener and serves in the background, returning the bound address.
    pub async fn start(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;
        info!(%local_addr, "HTTP server listening");

        let app = self.router();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!(error = %e, "HTTP server stopped");
            }
        });

        Ok(local_addr)
    }
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

fn request_language(query: &LangQuery, headers: &HeaderMap) -> Language {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    Language::detect(query.lang.as_deref(), accept_language)
}

async fn load_schedule(state: &AppState) -> Result<Schedule, ScheduleError> {
    let content = tokio::fs::read_to_string(state.provider.schedule_path()).await?;
    Schedule::from_json(&content)
}

fn success(data: Value) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

fn failure(message: &'static str, err: ScheduleError) -> Response {
    error!(error = %err, "{}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

async fn log_request(request: Request, next: Next) -> Response {
    info!(method = %request.method(), path = %request.uri().path(), "request");
    next.run(request).await
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "service": state.service_name.as_ref(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn all_hours(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Response {
    let schedule = match load_schedule(&state).await {
        Ok(schedule) => schedule,
        Err(e) => return failure("Error fetching business hours", e),
    };
    let language = request_language(&query, &headers);

    success(json!({
        "business_hours": schedule.to_json(),
        "summary": schedule.summary(language),
    }))
}

async fn today_hours(State(state): State<AppState>) -> Response {
    let result = load_schedule(&state).await.and_then(|schedule| {
        let now = state.provider.clock().now();
        let status = schedule.day_status(&now)?;
        Ok((schedule.hours_for(now.weekday()).to_string(), status, now))
    });
    let (hours, status, now) = match result {
        Ok(today) => today,
        Err(e) => return failure("Error fetching today's hours", e),
    };

    success(json!({
        "day": weekday_name(now.weekday()),
        "hours": hours,
        "is_open": status != DayStatus::Closed,
        "status": status,
        "current_time": now.format("%H:%M").to_string(),
    }))
}

async fn open_status(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Response {
    let schedule = match load_schedule(&state).await {
        Ok(schedule) => schedule,
        Err(e) => return failure("Error checking business status", e),
    };
    let language = request_language(&query, &headers);
    let now = state.provider.clock().now();
    let today = now.weekday();

    let hours = match schedule.get(weekday_name(today)) {
        Some(hours) if hours != CLOSED => hours,
        _ => {
            return success(json!({
                "is_open": false,
                "message": language.closed_today(),
                "next_open": schedule.next_open_after(today),
            }))
        }
    };

    let range: HoursRange = match hours.parse() {
        Ok(range) => range,
        Err(e) => return failure("Error checking business status", e),
    };
    let is_open = range.contains(now.hour());
    let next_open = if is_open {
        None
    } else {
        schedule.next_open_after(today)
    };

    success(json!({
        "is_open": is_open,
        "today_hours": hours,
        "current_time": now.format("%H:%M").to_string(),
        "message": language.status_message(is_open),
        "next_open": next_open,
    }))
}

async fn weekly_hours(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Response {
    let schedule = match load_schedule(&state).await {
        Ok(schedule) => schedule,
        Err(e) => return failure("Error fetching weekly schedule", e),
    };
    let language = request_language(&query, &headers);

    success(json!({
        "weekly_schedule": schedule.weekly(),
        "summary": schedule.summary(language),
    }))
}

async fn welcome(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Response {
    let language = request_language(&query, &headers);
    success(json!(state.provider.welcome_card(language)))
}

async fn prompt(State(state): State<AppState>) -> Response {
    success(json!(state.prompts.as_ref()))
}

async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "message": format!("The endpoint {} does not exist", uri),
            "available_endpoints": [
                "/health",
                "/api/hours",
                "/api/hours/today",
                "/api/hours/status",
                "/api/hours/week",
                "/api/general/welcome",
                "/api/general/prompt",
            ],
        })),
    )
        .into_response()
}
