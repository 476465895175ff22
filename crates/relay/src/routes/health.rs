//! Liveness endpoints.

/// Body returned to uptime pings and unknown paths.
pub const RUNNING: &str = "Bot is running!";

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Slack.
pub async fn health() -> &'static str {
    "ok"
}

/// Root endpoint, also used as the fallback for unknown paths.
///
/// `HEAD` requests get the same status with an empty body.
pub async fn index() -> &'static str {
    RUNNING
}
