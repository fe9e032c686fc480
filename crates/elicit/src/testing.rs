//! Testing utilities for elicitation flows.
//!
//! Provides [`ScriptedTransport`], an in-process stand-in for the
//! transport collaborator: it answers each request from a FIFO of
//! canned responses and records every `(message, schema)` pair it was
//! handed, so tests can assert on the exact wire shape a session
//! produced.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Map, Value};

use elicit_core::{ElicitError, ElicitResponse, ElicitResult, ElicitationTransport};

/// A scripted transport double.
///
/// Each call to `request` pops the next scripted reply. An exhausted
/// script reports [`ElicitError::Unsupported`], matching a remote party
/// with no elicitation handler registered.
///
/// # Example
///
/// ```ignore
/// let transport = ScriptedTransport::accepting(json!({"name": "Alice"}));
/// let result = session.elicit(&transport).await?;
/// assert!(result.accepted());
///
/// let requests = transport.requests();
/// assert_eq!(requests[0].0, "Please tell me your name");
/// ```
pub struct ScriptedTransport {
    script: Mutex<VecDeque<ElicitResult<ElicitResponse>>>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    /// Creates a transport that plays back the given replies in order.
    #[must_use]
    pub fn with_script(script: Vec<ElicitResult<ElicitResponse>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a transport that accepts once with the given content.
    ///
    /// `content` must be a JSON object.
    #[must_use]
    pub fn accepting(content: Value) -> Self {
        let map = content.as_object().cloned().unwrap_or_default();
        Self::with_script(vec![Ok(ElicitResponse::accept(map))])
    }

    /// Creates a transport that declines once.
    #[must_use]
    pub fn declining() -> Self {
        Self::with_script(vec![Ok(ElicitResponse::decline())])
    }

    /// Creates a transport that cancels once.
    #[must_use]
    pub fn cancelling() -> Self {
        Self::with_script(vec![Ok(ElicitResponse::cancel())])
    }

    /// Creates a transport with no script at all: every request reports
    /// that the remote party does not support elicitation.
    #[must_use]
    pub fn unsupported() -> Self {
        Self::with_script(Vec::new())
    }

    /// Creates a transport that fails once with a transport error.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_script(vec![Err(ElicitError::transport(message))])
    }

    /// Returns every `(message, schema)` pair handed to the transport,
    /// in request order.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Returns how many requests the transport has served.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Queues one more scripted reply.
    pub fn push(&self, reply: ElicitResult<ElicitResponse>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(reply);
        }
    }

    /// Queues an accept reply with the given content object.
    pub fn push_accept(&self, content: Value) {
        let map: Map<String, Value> = content.as_object().cloned().unwrap_or_default();
        self.push(Ok(ElicitResponse::accept(map)));
    }
}

impl ElicitationTransport for ScriptedTransport {
    fn request(&self, message: &str, schema: &Value) -> ElicitResult<ElicitResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((message.to_string(), schema.clone()));
        }
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or_else(|| {
            Err(ElicitError::unsupported(
                "no elicitation handler registered",
            ))
        })
    }
}
