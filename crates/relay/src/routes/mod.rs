//! HTTP route handlers for the relay.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /              - Uptime ping ("Bot is running!")
//! HEAD /              - Uptime ping, empty body
//! POST /upload        - Multipart spreadsheet upload (`file`, `channel_id`)
//! POST /slack/events  - Slack Events API callbacks
//! *                   - Anything else answers like `/`
//! ```

pub mod events;
pub mod health;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the relay router with its state applied.
///
/// Observability layers (tracing, Sentry) are added by the binary.
pub fn app(state: AppState) -> Router {
    let max_upload_bytes = state.config().max_upload_bytes;

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(health::index))
        .route(
            "/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/slack/events", post(events::slack_events))
        .fallback(health::index)
        .with_state(state)
}
