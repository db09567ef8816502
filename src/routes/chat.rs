use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{Instrument, error, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatResponse, HealthResponse},
    services::validator::validate_request,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        // Body could not be read at all, e.g. over the size limit.
        Err(JsonRejection::BytesRejection(rejection)) => {
            return Err(AppError::Body {
                status: rejection.status(),
                message: rejection.body_text(),
            });
        }
        // Not JSON, or no JSON content type: no message either.
        Err(_) => Value::Null,
    };
    let message = validate_request(&body)?.message;

    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);

    // Resolve on its own task so a panic ends up as a demo reply, not a 500.
    let resolver = state.resolver.clone();
    let task_message = message.clone();
    let resolved = tokio::spawn(
        async move { resolver.resolve(&task_message).await }.instrument(span.clone()),
    )
    .await;

    let response = match resolved {
        Ok(response) => response,
        Err(join_err) => {
            span.in_scope(|| error!(error = %join_err, "chat handler crashed"));
            state.resolver.server_error_reply(&message)
        }
    };

    Ok(Json(response))
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        has_key: state.config.has_key(),
        demo_mode: state.config.demo_mode,
    })
}
