//! Transport collaborator contract.
//!
//! The elicitation engine never talks to the wire itself. It hands a
//! message string and a compiled schema to an [`ElicitationTransport`]
//! and suspends until the transport delivers one [`ElicitResponse`]
//! carrying an action tag and, for accepts only, the raw content.
//!
//! # Sync vs Async
//!
//! By default, implement `request()` for synchronous transports (test
//! doubles, in-process prompts). For transports that genuinely suspend
//! (a wire exchange), override `request_async()` instead. The session
//! always calls `request_async()`, which defaults to running `request()`
//! in an async block.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ElicitResult;

/// A boxed future for async collaborator results.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The three actions a remote party can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElicitAction {
    /// The remote party submitted content.
    Accept,
    /// The remote party explicitly refused.
    Decline,
    /// The remote party dismissed without an explicit choice.
    Cancel,
}

impl std::fmt::Display for ElicitAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElicitAction::Accept => write!(f, "accept"),
            ElicitAction::Decline => write!(f, "decline"),
            ElicitAction::Cancel => write!(f, "cancel"),
        }
    }
}

/// One response event delivered by the transport.
///
/// `content` is present only when `action` is [`ElicitAction::Accept`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElicitResponse {
    /// The action the remote party chose.
    pub action: ElicitAction,
    /// Raw submitted content, unvalidated. Accept only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
}

impl ElicitResponse {
    /// Creates an accept response carrying raw content.
    #[must_use]
    pub fn accept(content: Map<String, Value>) -> Self {
        Self {
            action: ElicitAction::Accept,
            content: Some(content),
        }
    }

    /// Creates a decline response.
    #[must_use]
    pub fn decline() -> Self {
        Self {
            action: ElicitAction::Decline,
            content: None,
        }
    }

    /// Creates a cancel response.
    #[must_use]
    pub fn cancel() -> Self {
        Self {
            action: ElicitAction::Cancel,
            content: None,
        }
    }
}

/// Collaborator that performs one request/response exchange.
///
/// Implementations report their own failures typed: return
/// [`crate::ElicitError::Unsupported`] when the remote party cannot
/// perform elicitation at all, and [`crate::ElicitError::Transport`] for
/// any other exchange failure. The session propagates both unchanged and
/// never retries.
pub trait ElicitationTransport: Send + Sync {
    /// Performs the exchange synchronously.
    ///
    /// This is the default implementation point. Override this for
    /// transports that can answer without suspending.
    fn request(&self, message: &str, schema: &Value) -> ElicitResult<ElicitResponse>;

    /// Performs the exchange asynchronously.
    ///
    /// Override this for transports that suspend on a wire exchange.
    /// The default implementation delegates to the sync `request()`.
    fn request_async<'a>(
        &'a self,
        message: &'a str,
        schema: &'a Value,
    ) -> BoxFuture<'a, ElicitResult<ElicitResponse>> {
        Box::pin(async move { self.request(message, schema) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTransport;

    impl ElicitationTransport for EchoTransport {
        fn request(&self, _message: &str, _schema: &Value) -> ElicitResult<ElicitResponse> {
            let mut content = Map::new();
            content.insert("ok".to_string(), json!(true));
            Ok(ElicitResponse::accept(content))
        }
    }

    #[test]
    fn test_action_serialization() {
        assert_eq!(serde_json::to_value(ElicitAction::Accept).unwrap(), json!("accept"));
        assert_eq!(serde_json::to_value(ElicitAction::Decline).unwrap(), json!("decline"));
        assert_eq!(serde_json::to_value(ElicitAction::Cancel).unwrap(), json!("cancel"));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(ElicitAction::Accept.to_string(), "accept");
        assert_eq!(ElicitAction::Cancel.to_string(), "cancel");
    }

    #[test]
    fn test_response_constructors() {
        let decline = ElicitResponse::decline();
        assert_eq!(decline.action, ElicitAction::Decline);
        assert!(decline.content.is_none());

        let cancel = ElicitResponse::cancel();
        assert_eq!(cancel.action, ElicitAction::Cancel);
        assert!(cancel.content.is_none());

        let mut content = Map::new();
        content.insert("name".to_string(), json!("Alice"));
        let accept = ElicitResponse::accept(content);
        assert_eq!(accept.action, ElicitAction::Accept);
        assert_eq!(accept.content.unwrap()["name"], json!("Alice"));
    }

    #[test]
    fn test_response_content_omitted_when_absent() {
        let encoded = serde_json::to_value(ElicitResponse::decline()).unwrap();
        assert_eq!(encoded, json!({"action": "decline"}));
    }

    #[tokio::test]
    async fn test_async_default_delegates_to_sync() {
        let transport = EchoTransport;
        let schema = json!({"type": "object", "properties": {}});
        let response = transport.request_async("hello", &schema).await.unwrap();
        assert_eq!(response.action, ElicitAction::Accept);
        assert_eq!(response.content.unwrap()["ok"], json!(true));
    }
}
