//! Error types for elicitation.
//!
//! The taxonomy distinguishes four failure kinds:
//!
//! - [`FieldError`]: one field failed a constraint
//! - [`ValidationReport`]: every field failure from one validation pass
//! - [`ElicitError::Unsupported`]: the remote party cannot elicit at all
//! - [`ElicitError::Transport`]: any other exchange failure
//!
//! Field errors always aggregate into a report before surfacing; the
//! report and the unsupported/transport kinds propagate to the session
//! caller unchanged.

use std::fmt;

/// Result alias used throughout the elicitation crates.
pub type ElicitResult<T> = Result<T, ElicitError>;

/// Error for a single field that failed validation.
///
/// Carries the field's display title and a human-readable reason, never
/// a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Display title of the failing field.
    pub title: String,
    /// Human-readable reason, phrased to follow the title
    /// (e.g. "must be at least 3 characters").
    pub reason: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.reason)
    }
}

impl std::error::Error for FieldError {}

/// Aggregate of every field failure from one validation pass.
///
/// Invariant: if the report is non-empty the overall outcome is a
/// rejection, and no individual failure is dropped — all entries surface
/// together, each keyed by the originating field's name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(String, FieldError)>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for the named field.
    pub fn push(&mut self, name: impl Into<String>, error: FieldError) {
        self.errors.push((name.into(), error));
    }

    /// Returns the recorded failures in field-declaration order.
    #[must_use]
    pub fn errors(&self) -> &[(String, FieldError)] {
        &self.errors
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if the named field has a recorded failure.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.errors.iter().any(|(n, _)| n == name)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, error) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{name}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Top-level error type for elicitation sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElicitError {
    /// One or more fields failed validation; carries every failure.
    Validation(ValidationReport),
    /// The remote party does not support elicitation at all.
    ///
    /// Distinct from [`ElicitError::Transport`] so callers can offer a
    /// fallback path instead of retrying.
    Unsupported(String),
    /// Any other failure while exchanging the request/response.
    Transport(String),
    /// A reaction hook failed; propagated as a session-level error.
    Hook(String),
    /// A value was read or written for a name no field declares.
    UnknownField(String),
}

impl ElicitError {
    /// Creates an unsupported-capability error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        ElicitError::Unsupported(message.into())
    }

    /// Creates a transport/session error.
    pub fn transport(message: impl Into<String>) -> Self {
        ElicitError::Transport(message.into())
    }

    /// Creates a hook-failure error.
    pub fn hook(message: impl Into<String>) -> Self {
        ElicitError::Hook(message.into())
    }

    /// Creates an unknown-field error for the given name.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        ElicitError::UnknownField(name.into())
    }

    /// Returns true if this is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, ElicitError::Validation(_))
    }

    /// Returns true if the remote party cannot elicit at all.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ElicitError::Unsupported(_))
    }
}

impl fmt::Display for ElicitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElicitError::Validation(report) => write!(f, "validation failed: {report}"),
            ElicitError::Unsupported(msg) => {
                write!(f, "client does not support elicitation: {msg}")
            }
            ElicitError::Transport(msg) => write!(f, "elicitation failed: {msg}"),
            ElicitError::Hook(msg) => write!(f, "reaction hook failed: {msg}"),
            ElicitError::UnknownField(name) => write!(f, "no such field: {name}"),
        }
    }
}

impl std::error::Error for ElicitError {}

impl From<ValidationReport> for ElicitError {
    fn from(report: ValidationReport) -> Self {
        ElicitError::Validation(report)
    }
}
