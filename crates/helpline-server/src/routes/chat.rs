//! Chat Routes - reply resolution over HTTP

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::Instrument;
use uuid::Uuid;

use helpline::ChatRequest;

use crate::error::ApiError;
use crate::models::{ChatRequestBody, ChatResponse, ErrorResponse};
use crate::AppState;

/// Answer a user message
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequestBody,
    responses(
        (status = 200, description = "Reply resolved", body = ChatResponse),
        (status = 400, description = "Message is missing or blank", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequestBody>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Unreadable bodies are treated as a missing message
    let body = payload.map(|Json(body)| body).unwrap_or_else(|rejection| {
        tracing::debug!("Rejected chat body: {}", rejection);
        ChatRequestBody::default()
    });

    let request = ChatRequest::new(body.message.unwrap_or_default())?;

    let request_id = Uuid::new_v4();
    let responder = state.responder.clone();
    let resolution = async move {
        let reply = responder.resolve(&request).await;
        tracing::info!(source = %reply.source, "Chat reply resolved");
        reply
    }
    .instrument(tracing::info_span!("chat", %request_id));

    // Resolution runs in its own task so a panic surfaces as a 500
    let reply = tokio::spawn(resolution)
        .await
        .map_err(|e| ApiError::Internal(format!("request {request_id}: {e}")))?;

    Ok(Json(reply.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}
