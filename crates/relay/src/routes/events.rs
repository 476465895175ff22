//! Slack Events API endpoint.
//!
//! Verifies the request signature, answers the `url_verification`
//! handshake, and acknowledges `event_callback` requests immediately while
//! the event itself is handled in a background task. Slack retries any
//! callback that is not acknowledged within three seconds.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{Instrument, debug, error, info, info_span, instrument};

use crate::error::AppError;
use crate::services::EventOutcome;
use crate::slack::{Event, EventEnvelope};
use crate::state::AppState;

/// Handle a Slack Events API request.
#[instrument(skip(state, headers, body))]
pub async fn slack_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let timestamp = header(&headers, "X-Slack-Request-Timestamp")?;
    let signature = header(&headers, "X-Slack-Signature")?;

    state
        .slack()
        .verify_signature(timestamp, &body, signature)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    let envelope: EventEnvelope = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid event payload: {e}")))?;

    match envelope {
        EventEnvelope::UrlVerification { challenge } => {
            info!("Answering Slack URL verification");
            Ok(Json(json!({ "challenge": challenge })).into_response())
        }
        EventEnvelope::EventCallback { event, event_id } => {
            spawn_event(state, event, event_id);
            Ok(StatusCode::OK.into_response())
        }
        EventEnvelope::Other => {
            debug!("Ignoring unsupported envelope type");
            Ok(StatusCode::OK.into_response())
        }
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AppError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(format!("Missing {name} header")))
}

/// Handle an event off the request path.
fn spawn_event(state: AppState, event: Event, event_id: Option<String>) {
    let span = info_span!("slack_event", event_id = event_id.as_deref().unwrap_or("-"));

    tokio::spawn(
        async move {
            match state.listeners().handle(event).await {
                Ok(EventOutcome::Ignored) => debug!("Event ignored"),
                Ok(outcome) => info!(?outcome, "Event handled"),
                Err(e) => {
                    let sentry_id = sentry::capture_error(&e);
                    error!(error = %e, sentry_event_id = %sentry_id, "Event handling failed");
                }
            }
        }
        .instrument(span),
    );
}
