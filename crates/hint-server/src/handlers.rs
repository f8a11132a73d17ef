//! HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use hint_core::{
    HintError, HintLevel, HintRecord, RevealedHints, SessionId, SessionProgress,
    SessionSnapshot, ToolCall, ToolResult, ToolSchema,
};

use crate::state::AppState;

/// Default page size for session listings
const DEFAULT_SESSION_LIMIT: usize = 50;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub topics: usize,
    pub sessions: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct TopicsQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HintQuery {
    /// Signed so negative levels reach the level check instead of the parser
    #[serde(default)]
    pub level: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub topic_id: String,
    #[serde(flatten)]
    pub hint: HintLevel,
    /// Display form, e.g. "Hint 2/4: ..."
    pub formatted: String,
}

impl HintResponse {
    fn new(topic_id: impl Into<String>, hint: HintLevel) -> Self {
        Self {
            topic_id: topic_id.into(),
            formatted: hint.to_string(),
            hint,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RevealResponse {
    #[serde(flatten)]
    pub revealed: RevealedHints,
    pub formatted: String,
}

impl From<RevealedHints> for RevealResponse {
    fn from(revealed: RevealedHints) -> Self {
        Self {
            formatted: revealed.to_string(),
            revealed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub topic_id: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenSessionRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionsQuery {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub session: SessionSnapshot,
    pub progress: SessionProgress,
}

// ============================================================================
// Error Mapping
// ============================================================================

fn api_error(state: &AppState, err: &HintError) -> ApiError {
    let status = match err {
        HintError::NotFound(_) | HintError::SessionNotFound(_) | HintError::ToolNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        HintError::InvalidLevel { .. } | HintError::ToolValidation(_) => StatusCode::BAD_REQUEST,
        HintError::Exhausted { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Hint service error: {}", err);
    } else {
        tracing::debug!("Rejected hint request: {}", err);
    }

    let suggestion = match err {
        HintError::NotFound(topic) => state.registry.suggest(topic).map(str::to_string),
        _ => None,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: err.code().into(),
            suggestion,
        }),
    )
}

// ============================================================================
// Registry Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, sessions) = match state.sessions.len() {
        Ok(n) => ("healthy", n),
        Err(e) => {
            tracing::warn!("Session store unavailable: {}", e);
            ("degraded", 0)
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        topics: state.registry.len(),
        sessions,
    })
}

/// All topics, or those of one category
pub async fn list_topics(
    State(state): State<AppState>,
    Query(query): Query<TopicsQuery>,
) -> Json<TopicsResponse> {
    let topics = match query.category.as_deref() {
        Some(category) => state
            .registry
            .list_topics_by_category(category)
            .into_keys()
            .map(str::to_string)
            .collect(),
        None => state.registry.list_topics().into_iter().map(str::to_string).collect(),
    };

    Json(TopicsResponse {
        topics,
        category: query.category,
    })
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.categories().into_iter().map(str::to_string).collect())
}

pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> ApiResult<HintRecord> {
    state
        .registry
        .lookup(&topic)
        .map(|record| Json(record.clone()))
        .map_err(|e| api_error(&state, &e))
}

/// Single hint; no `level` means level 1
pub async fn get_hint(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Query(query): Query<HintQuery>,
) -> ApiResult<HintResponse> {
    // Below 1 reports as level 0
    let level = query.level.map(|l| usize::try_from(l).unwrap_or(0));
    let hint = state
        .registry
        .get_hint(&topic, level)
        .map_err(|e| api_error(&state, &e))?;

    Ok(Json(HintResponse::new(topic, hint)))
}

pub async fn reveal_topic(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> ApiResult<RevealResponse> {
    state
        .registry
        .reveal_all(&topic)
        .map(|revealed| Json(revealed.into()))
        .map_err(|e| api_error(&state, &e))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> ApiResult<SummaryResponse> {
    let summary = state
        .registry
        .get_summary(&topic)
        .map_err(|e| api_error(&state, &e))?;

    Ok(Json(SummaryResponse {
        summary: summary.to_string(),
        topic_id: topic,
    }))
}

// ============================================================================
// Session Handlers
// ============================================================================

pub async fn open_session(
    State(state): State<AppState>,
    Json(payload): Json<OpenSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session = state
        .registry
        .open_session(&payload.topic)
        .map_err(|e| api_error(&state, &e))?;

    let response = SessionResponse {
        session: session.snapshot(),
        progress: session.progress(),
    };

    state.sessions.save(session).map_err(|e| api_error(&state, &e))?;
    tracing::info!(session = %response.session.id, topic = %payload.topic, "hint session opened");

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<SessionsQuery>,
) -> ApiResult<Vec<SessionSnapshot>> {
    state
        .sessions
        .list(query.topic.as_deref(), query.limit.unwrap_or(DEFAULT_SESSION_LIMIT))
        .map(Json)
        .map_err(|e| api_error(&state, &e))
}

fn load_session(state: &AppState, id: &SessionId) -> ApiResult<SessionResponse> {
    let session = state
        .sessions
        .load(id)
        .and_then(|s| s.ok_or_else(|| HintError::SessionNotFound(id.to_string())))
        .map_err(|e| api_error(state, &e))?;

    Ok(Json(SessionResponse {
        session: session.snapshot(),
        progress: session.progress(),
    }))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SessionResponse> {
    load_session(&state, &SessionId::from_string(id))
}

/// Reveal the next hint of a session
pub async fn next_hint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<HintResponse> {
    let id = SessionId::from_string(id);
    let (topic, hint) = state.sessions.advance(&id).map_err(|e| api_error(&state, &e))?;

    Ok(Json(HintResponse::new(topic, hint)))
}

pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SessionResponse> {
    let id = SessionId::from_string(id);
    state.sessions.reset(&id).map_err(|e| api_error(&state, &e))?;
    load_session(&state, &id)
}

/// Everything for the session's topic; progress is left untouched
pub async fn reveal_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RevealResponse> {
    let id = SessionId::from_string(id);
    let session = state
        .sessions
        .load(&id)
        .and_then(|s| s.ok_or_else(|| HintError::SessionNotFound(id.to_string())))
        .map_err(|e| api_error(&state, &e))?;

    Ok(Json(session.reveal().into()))
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::from_string(id);
    match state.sessions.delete(&id) {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(api_error(&state, &HintError::SessionNotFound(id.to_string()))),
        Err(e) => Err(api_error(&state, &e)),
    }
}

// ============================================================================
// Tool Handlers
// ============================================================================

pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolSchema>> {
    Json(state.tools.schemas())
}

pub async fn execute_tool(
    State(state): State<AppState>,
    Json(call): Json<ToolCall>,
) -> ApiResult<ToolResult> {
    state
        .tools
        .execute(&call)
        .await
        .map(Json)
        .map_err(|e| api_error(&state, &e))
}
