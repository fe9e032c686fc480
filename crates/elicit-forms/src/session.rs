//! Elicitation sessions: one request/response cycle per form instance.
//!
//! A session compiles the schema from its field mapping, hands it to
//! the transport collaborator, interprets the returned action, runs
//! validation, dispatches the matching reaction hook, and returns a
//! normalized [`SessionResult`].
//!
//! The state machine is `Pending → {Accepted, Declined, Cancelled}`;
//! the transition happens exactly once per session, driven by the
//! single response event the transport delivers. `cleaned_data` is
//! populated if and only if the outcome is accepted and validation
//! succeeded — it never holds unvalidated raw input.

use serde_json::{Map, Value};

use elicit_core::logging::targets;
use elicit_core::{ElicitAction, ElicitError, ElicitResult, ElicitationTransport};

use crate::fields::Field;
use crate::form::Form;
use crate::registry::FieldSet;
use crate::schema;
use crate::validate;

/// Message used when neither the session nor the form provides one.
pub const DEFAULT_MESSAGE: &str = "Please fill out the form";

/// Outcome state of an elicitation session.
///
/// `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No response has arrived yet.
    Pending,
    /// The remote party accepted and validation succeeded.
    Accepted,
    /// The remote party explicitly declined.
    Declined,
    /// The remote party dismissed without an explicit choice.
    Cancelled,
}

impl SessionOutcome {
    /// Returns true once the session has left `Pending`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != SessionOutcome::Pending
    }
}

/// Normalized result of one elicitation cycle.
#[derive(Debug, Clone)]
pub struct SessionResult {
    action: ElicitAction,
    data: Option<Map<String, Value>>,
    hook_value: Option<Value>,
}

impl SessionResult {
    /// Returns the action the remote party chose.
    #[must_use]
    pub fn action(&self) -> ElicitAction {
        self.action
    }

    /// Returns the cleaned data. Present only on accept.
    #[must_use]
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    /// Returns the value produced by the reaction hook, if any.
    #[must_use]
    pub fn hook_value(&self) -> Option<&Value> {
        self.hook_value.as_ref()
    }

    /// Returns true if the remote party accepted with valid data.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.action == ElicitAction::Accept
    }

    /// Returns true if the remote party declined.
    #[must_use]
    pub fn declined(&self) -> bool {
        self.action == ElicitAction::Decline
    }

    /// Returns true if the remote party cancelled.
    #[must_use]
    pub fn cancelled(&self) -> bool {
        self.action == ElicitAction::Cancel
    }

    /// Returns true if the remote party declined or cancelled.
    #[must_use]
    pub fn declined_or_cancelled(&self) -> bool {
        self.declined() || self.cancelled()
    }
}

/// One instantiated request/response cycle against a form definition.
///
/// Created per use-site invocation, performs exactly one cycle, and is
/// discarded after the caller consumes the result. Each session owns
/// its own cleaned data and outcome state; the form's field set is
/// shared read-only.
pub struct ElicitationSession<F: Form> {
    form: F,
    message: Option<String>,
    fields: FieldSet,
    cleaned_data: Map<String, Value>,
    outcome: SessionOutcome,
}

impl<F: Form> ElicitationSession<F> {
    /// Creates a session over the given form.
    #[must_use]
    pub fn new(form: F) -> Self {
        let fields = form.fields().clone();
        Self {
            form,
            message: None,
            fields,
            cleaned_data: Map::new(),
            outcome: SessionOutcome::Pending,
        }
    }

    /// Sets a per-session message, overriding the form's.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces a declared field's definition for this session only.
    ///
    /// The form type's shared field set stays untouched. Overriding a
    /// name the form does not declare is ignored (with a warning), so a
    /// typo cannot smuggle an undeclared field into the schema.
    #[must_use]
    pub fn override_field(mut self, name: &str, field: impl Into<Field>) -> Self {
        if self.fields.contains(name) {
            self.fields = self.fields.with_field(name, field);
        } else {
            log::warn!(
                target: targets::SESSION,
                "ignoring override for undeclared field {name:?}"
            );
        }
        self
    }

    /// Returns the form driving this session.
    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Returns the effective field set (declarations plus overrides).
    #[must_use]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Returns the session's outcome state.
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        self.outcome
    }

    /// Returns the cleaned data mapping.
    ///
    /// Empty until the session accepted with valid data.
    #[must_use]
    pub fn cleaned_data(&self) -> &Map<String, Value> {
        &self.cleaned_data
    }

    /// Reads a declared field's value.
    ///
    /// Returns the cleaned value once populated, and the field's
    /// configured default (JSON `null` when none) before then. Reading
    /// an undeclared name is an error.
    pub fn get(&self, name: &str) -> ElicitResult<Value> {
        if let Some(value) = self.cleaned_data.get(name) {
            return Ok(value.clone());
        }
        match self.fields.get(name) {
            Some(field) => Ok(field.default_value().unwrap_or(Value::Null)),
            None => Err(ElicitError::unknown_field(name)),
        }
    }

    /// Writes a declared field's cleaned value directly.
    ///
    /// Writing an undeclared name is an error.
    pub fn set(&mut self, name: &str, value: Value) -> ElicitResult<()> {
        if !self.fields.contains(name) {
            return Err(ElicitError::unknown_field(name));
        }
        self.cleaned_data.insert(name.to_string(), value);
        Ok(())
    }

    /// Runs one request/response cycle through the transport.
    ///
    /// Compiles the schema, suspends on the transport exchange, then
    /// dispatches on the returned action:
    ///
    /// - **accept**: validates the raw content; on success stores the
    ///   cleaned data, transitions to `Accepted`, and awaits the
    ///   `on_accepted` hook. A validation failure surfaces as
    ///   [`ElicitError::Validation`] — never as a silently-empty accept —
    ///   and the session does not transition to `Accepted`.
    /// - **decline** / **cancel**: transitions and awaits the matching
    ///   hook; no data.
    ///
    /// Transport failures propagate unchanged — an
    /// [`ElicitError::Unsupported`] stays distinct from
    /// [`ElicitError::Transport`] so callers can offer a fallback
    /// instead of retrying. Hook failures propagate as session errors.
    pub async fn elicit(
        &mut self,
        transport: &dyn ElicitationTransport,
    ) -> ElicitResult<SessionResult> {
        if self.outcome.is_terminal() {
            return Err(ElicitError::transport("session already completed"));
        }

        let message = self.effective_message().to_string();
        let schema = schema::compile(&self.fields);
        log::debug!(
            target: targets::SESSION,
            "eliciting {} field(s): {message:?}",
            self.fields.len()
        );
        log::trace!(target: targets::SESSION, "requested schema: {schema}");

        let response = match transport.request_async(&message, &schema).await {
            Ok(response) => response,
            Err(err) => {
                log::error!(target: targets::SESSION, "elicitation failed: {err}");
                return Err(err);
            }
        };

        match response.action {
            ElicitAction::Accept => {
                let raw = response.content.unwrap_or_default();
                match validate::validate_all(&self.fields, &raw) {
                    Ok(cleaned) => {
                        self.cleaned_data = cleaned.clone();
                        self.outcome = SessionOutcome::Accepted;
                        let hook_value = self.form.on_accepted_async(&self.cleaned_data).await?;
                        Ok(SessionResult {
                            action: ElicitAction::Accept,
                            data: Some(cleaned),
                            hook_value,
                        })
                    }
                    Err(report) => {
                        log::error!(
                            target: targets::SESSION,
                            "form validation failed: {report}"
                        );
                        Err(report.into())
                    }
                }
            }
            ElicitAction::Decline => {
                self.outcome = SessionOutcome::Declined;
                let hook_value = self.form.on_declined_async().await?;
                Ok(SessionResult {
                    action: ElicitAction::Decline,
                    data: None,
                    hook_value,
                })
            }
            ElicitAction::Cancel => {
                self.outcome = SessionOutcome::Cancelled;
                let hook_value = self.form.on_canceled_async().await?;
                Ok(SessionResult {
                    action: ElicitAction::Cancel,
                    data: None,
                    hook_value,
                })
            }
        }
    }

    fn effective_message(&self) -> &str {
        if let Some(ref message) = self.message {
            if !message.is_empty() {
                return message;
            }
        }
        if !self.form.message().is_empty() {
            return self.form.message();
        }
        DEFAULT_MESSAGE
    }
}
