//! Form definitions: a field set plus optional reaction hooks.
//!
//! # Sync vs Async hooks
//!
//! By default, override the sync hooks (`on_accepted`, `on_declined`,
//! `on_canceled`) for reaction logic that does not suspend. For hooks
//! that perform further I/O, override the `_async` variants instead.
//! The session always awaits the async variants, which default to
//! delegating to the sync hooks. All hooks default to a no-op returning
//! `Ok(None)`.
//!
//! A hook's error propagates as the session error; a hook's
//! `Ok(Some(value))` becomes the hook value of the session result.

use serde_json::{Map, Value};

use elicit_core::{BoxFuture, ElicitResult};

use crate::registry::FieldSet;

/// A named, ordered collection of fields plus optional reaction hooks.
///
/// The field set is computed once per form type and read-only
/// thereafter; share it across sessions via a `LazyLock` static built
/// with [`FieldSet::builder`].
pub trait Form: Send + Sync {
    /// Returns the form's declared fields.
    fn fields(&self) -> &FieldSet;

    /// Returns the form-level message shown to the remote party.
    ///
    /// Sessions fall back to this when no per-session message is set.
    fn message(&self) -> &str {
        ""
    }

    /// Called when the remote party accepts and validation succeeds.
    ///
    /// Receives the cleaned data. The returned value becomes part of
    /// the session result.
    fn on_accepted(&self, data: &Map<String, Value>) -> ElicitResult<Option<Value>> {
        let _ = data;
        Ok(None)
    }

    /// Called when the remote party explicitly declines.
    fn on_declined(&self) -> ElicitResult<Option<Value>> {
        Ok(None)
    }

    /// Called when the remote party dismisses without choosing.
    fn on_canceled(&self) -> ElicitResult<Option<Value>> {
        Ok(None)
    }

    /// Async variant of [`Form::on_accepted`].
    ///
    /// Override for reaction logic that suspends. The default delegates
    /// to the sync hook.
    fn on_accepted_async<'a>(
        &'a self,
        data: &'a Map<String, Value>,
    ) -> BoxFuture<'a, ElicitResult<Option<Value>>> {
        Box::pin(async move { self.on_accepted(data) })
    }

    /// Async variant of [`Form::on_declined`].
    fn on_declined_async(&self) -> BoxFuture<'_, ElicitResult<Option<Value>>> {
        Box::pin(async move { self.on_declined() })
    }

    /// Async variant of [`Form::on_canceled`].
    fn on_canceled_async(&self) -> BoxFuture<'_, ElicitResult<Option<Value>>> {
        Box::pin(async move { self.on_canceled() })
    }
}
