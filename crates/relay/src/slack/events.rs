//! Slack Events API payloads.
//!
//! Only the event types the relay listens to are modelled; anything else
//! deserializes to an `Other` variant and is ignored.
//!
//! See: <https://api.slack.com/apis/events-api>

use serde::Deserialize;

/// Outer request body posted to the events endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    /// Endpoint ownership check sent when the request URL is configured.
    UrlVerification { challenge: String },
    /// A workspace event.
    EventCallback {
        event: Event,
        #[serde(default)]
        event_id: Option<String>,
    },
    /// Any other envelope type (e.g., `app_rate_limited`).
    #[serde(other)]
    Other,
}

/// Workspace events handled by the relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A reaction was added to a message.
    ReactionAdded(ReactionAddedEvent),
    /// A message was posted in a conversation the bot is in.
    Message(MessageEvent),
    /// A file was shared in a conversation the bot is in.
    FileShared(FileSharedEvent),
    /// Any other event type.
    #[serde(other)]
    Other,
}

/// `reaction_added` event.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionAddedEvent {
    /// Reaction name without colons (e.g., `white_check_mark`).
    pub reaction: String,
    /// User who reacted.
    #[serde(default)]
    pub user: Option<String>,
    /// Item the reaction was added to.
    pub item: ReactionItem,
}

/// Item targeted by a reaction.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionItem {
    /// Item type (`message`, `file`, ...).
    #[serde(rename = "type")]
    pub item_type: String,
    /// Channel containing the message.
    #[serde(default)]
    pub channel: Option<String>,
    /// Timestamp of the message.
    #[serde(default)]
    pub ts: Option<String>,
}

/// `message` event.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    /// Conversation the message was posted in.
    pub channel: String,
    /// Message text.
    #[serde(default)]
    pub text: Option<String>,
    /// Author.
    #[serde(default)]
    pub user: Option<String>,
    /// Set when a bot authored the message.
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Message subtype (`bot_message`, `message_changed`, ...).
    #[serde(default)]
    pub subtype: Option<String>,
}

impl MessageEvent {
    /// Whether this is a plain message written by a person.
    ///
    /// Bot messages (including the relay's own replies) and edit/delete
    /// notifications carry a `bot_id` or a subtype.
    #[must_use]
    pub fn is_from_user(&self) -> bool {
        self.bot_id.is_none() && self.subtype.is_none() && self.user.is_some()
    }
}

/// `file_shared` event.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSharedEvent {
    /// Shared file ID.
    pub file_id: String,
    /// Conversation the file was shared in.
    #[serde(default)]
    pub channel_id: Option<String>,
    /// User who shared the file.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_verification() {
        let json = r#"{"token":"t","challenge":"abc123","type":"url_verification"}"#;
        let envelope: EventEnvelope = serde_json::from_str(json).expect("should parse");
        assert!(matches!(envelope, EventEnvelope::UrlVerification { challenge } if challenge == "abc123"));
    }

    #[test]
    fn test_reaction_added() {
        let json = r#"{
            "type": "event_callback",
            "event_id": "Ev1",
            "event": {
                "type": "reaction_added",
                "user": "U1",
                "reaction": "white_check_mark",
                "item": {"type": "message", "channel": "D1", "ts": "1.0001"},
                "item_user": "UBOT",
                "event_ts": "2.0"
            }
        }"#;
        let envelope: EventEnvelope = serde_json::from_str(json).expect("should parse");

        let EventEnvelope::EventCallback {
            event: Event::ReactionAdded(reaction),
            event_id,
        } = envelope
        else {
            panic!("expected reaction_added callback");
        };
        assert_eq!(event_id.as_deref(), Some("Ev1"));
        assert_eq!(reaction.reaction, "white_check_mark");
        assert_eq!(reaction.item.ts.as_deref(), Some("1.0001"));
    }

    #[test]
    fn test_bot_message_is_not_from_user() {
        let json = r#"{"type":"message","subtype":"bot_message","channel":"D1","text":"hi","bot_id":"B1"}"#;
        let event: Event = serde_json::from_str(json).expect("should parse");
        let Event::Message(message) = event else {
            panic!("expected message");
        };
        assert!(!message.is_from_user());

        let json = r#"{"type":"message","channel":"D1","user":"U1","text":"hi"}"#;
        let Event::Message(message) = serde_json::from_str(json).expect("should parse") else {
            panic!("expected message");
        };
        assert!(message.is_from_user());
    }

    #[test]
    fn test_file_shared() {
        let json = r#"{"type":"file_shared","file_id":"F1","user_id":"U1","channel_id":"C1","file":{"id":"F1"}}"#;
        let Event::FileShared(shared) = serde_json::from_str(json).expect("should parse") else {
            panic!("expected file_shared");
        };
        assert_eq!(shared.file_id, "F1");
        assert_eq!(shared.channel_id.as_deref(), Some("C1"));
    }

    #[test]
    fn test_unknown_event_type() {
        let json = r#"{"type":"event_callback","event":{"type":"app_mention","text":"hi"}}"#;
        let envelope: EventEnvelope = serde_json::from_str(json).expect("should parse");
        assert!(matches!(
            envelope,
            EventEnvelope::EventCallback {
                event: Event::Other,
                ..
            }
        ));
    }
}
