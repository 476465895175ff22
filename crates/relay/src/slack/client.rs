//! Slack Web API client.
//!
//! Provides methods for posting messages, describing files and
//! conversations, downloading shared files, and verifying Events API
//! request signatures.

use std::path::Path;

use hmac::{Hmac, Mac};
use payroll_relay_core::MessageHandle;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, instrument};

use super::error::SlackError;
use super::types::{
    ApiResponse, Conversation, ConversationInfoResponse, FileInfoResponse, PostMessageResponse,
    SlackFile, SlackMessage,
};
use crate::config::SlackConfig;

/// Maximum age of a signed request before it is treated as a replay.
const SIGNATURE_MAX_AGE_SECS: i64 = 300;

/// Slack API client.
#[derive(Clone)]
pub struct SlackClient {
    /// HTTP client.
    client: Client,
    /// Web API base URL (no trailing slash).
    api_base: String,
    /// Bot token for authentication.
    bot_token: SecretString,
    /// Signing secret for verifying webhooks.
    signing_secret: SecretString,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("api_base", &self.api_base)
            .field("bot_token", &"[REDACTED]")
            .field("signing_secret", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    /// Create a new Slack client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &SlackConfig) -> Result<Self, SlackError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SlackError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            bot_token: config.bot_token.clone(),
            signing_secret: config.signing_secret.clone(),
        })
    }

    /// Post a text message to a channel, DM or user ID.
    ///
    /// Returns the handle (`ts`) of the posted message.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails, Slack returns an error, or
    /// the response carries no message timestamp.
    #[instrument(skip(self, text), fields(channel = %channel))]
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
    ) -> Result<MessageHandle, SlackError> {
        let request = self
            .client
            .post(self.method_url("chat.postMessage"))
            .bearer_auth(self.bot_token.expose_secret())
            .json(&SlackMessage { channel, text });

        let result: PostMessageResponse = self.call("chat.postMessage", request).await?;
        let ts = result.ts.ok_or(SlackError::MissingField("ts"))?;

        debug!(ts = %ts, channel = ?result.channel, "Message posted to Slack");

        Ok(MessageHandle::new(ts))
    }

    /// Fetch metadata for a file.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self))]
    pub async fn file_info(&self, file_id: &str) -> Result<SlackFile, SlackError> {
        let request = self
            .client
            .post(self.method_url("files.info"))
            .bearer_auth(self.bot_token.expose_secret())
            .form(&[("file", file_id)]);

        let result: FileInfoResponse = self.call("files.info", request).await?;
        result.file.ok_or(SlackError::MissingField("file"))
    }

    /// Fetch metadata for a conversation.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self))]
    pub async fn conversation_info(&self, channel: &str) -> Result<Conversation, SlackError> {
        let request = self
            .client
            .post(self.method_url("conversations.info"))
            .bearer_auth(self.bot_token.expose_secret())
            .form(&[("channel", channel)]);

        let result: ConversationInfoResponse = self.call("conversations.info", request).await?;
        result.channel.ok_or(SlackError::MissingField("channel"))
    }

    /// Download a private file into `dest`, streaming the body to disk.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, Slack responds with a non-success
    /// status, or writing to `dest` fails.
    #[instrument(skip(self, url, dest))]
    pub async fn download_file(&self, url: &str, dest: &Path) -> Result<u64, SlackError> {
        let mut response = self
            .client
            .get(url)
            .bearer_auth(self.bot_token.expose_secret())
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SlackError::Response(format!(
                "File download returned {status}"
            )));
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| SlackError::Response(format!("Failed to create download file: {e}")))?;

        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SlackError::Response(e.to_string()))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| SlackError::Response(format!("Failed to write download: {e}")))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| SlackError::Response(format!("Failed to write download: {e}")))?;

        debug!(bytes = written, "File downloaded from Slack");

        Ok(written)
    }

    /// Verify a Slack webhook signature.
    ///
    /// This implements Slack's signature verification:
    /// <https://api.slack.com/authentication/verifying-requests-from-slack>
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The `X-Slack-Request-Timestamp` header value
    /// * `body` - The raw request body
    /// * `signature` - The `X-Slack-Signature` header value
    ///
    /// # Errors
    ///
    /// Returns error if signature verification fails.
    #[instrument(skip(self, body, signature))]
    pub fn verify_signature(
        &self,
        timestamp: &str,
        body: &[u8],
        signature: &str,
    ) -> Result<(), SlackError> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| SlackError::InvalidSignature("Invalid timestamp".to_string()))?;

        let now_secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| SlackError::InvalidSignature(e.to_string()))?
            .as_secs();

        let now = i64::try_from(now_secs)
            .map_err(|_| SlackError::InvalidSignature("System time overflow".to_string()))?;

        if now.abs_diff(ts) > SIGNATURE_MAX_AGE_SECS.unsigned_abs() {
            return Err(SlackError::InvalidSignature(
                "Request timestamp too old".to_string(),
            ));
        }

        let mut mac =
            Hmac::<Sha256>::new_from_slice(self.signing_secret.expose_secret().as_bytes())
                .map_err(|e| SlackError::InvalidSignature(e.to_string()))?;

        mac.update(b"v0:");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);

        let expected = format!("v0={}", hex::encode(mac.finalize().into_bytes()));

        if !constant_time_compare(&expected, signature) {
            return Err(SlackError::InvalidSignature(
                "Signature mismatch".to_string(),
            ));
        }

        debug!("Slack signature verified");

        Ok(())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }

    /// Send a Web API request and unwrap the `ok`/`error` envelope.
    async fn call<T>(&self, method: &str, request: RequestBuilder) -> Result<T, SlackError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let result: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| SlackError::Response(e.to_string()))?;

        if !result.ok {
            error!(method, error = ?result.error, "Slack API error");
            return Err(SlackError::Api(
                result.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        Ok(result.body)
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}

/// Compute the `X-Slack-Signature` value for a request.
///
/// Used by tests and local tooling that replay events against the relay.
#[must_use]
pub fn sign_request(signing_secret: &str, timestamp: &str, body: &[u8]) -> String {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes()) else {
        return String::new();
    };
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}
