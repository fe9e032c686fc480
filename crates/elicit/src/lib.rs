//! Declarative forms and request/response negotiation for elicitation.
//!
//! A server declares a small set of typed input fields, compiles them
//! into a JSON-Schema-shaped description, hands that description to a
//! transport collaborator as part of an interactive request, and
//! validates whatever structured answer comes back. The remote party
//! answers with exactly one of three actions — accept, decline, or
//! cancel — and the session dispatches the matching reaction hook
//! before reporting a normalized result.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::LazyLock;
//! use elicit::{
//!     ElicitationSession, FieldSet, Form, IntegerField, StringField,
//! };
//!
//! struct UserInfoForm;
//!
//! static USER_INFO_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
//!     FieldSet::builder()
//!         .field(
//!             "name",
//!             StringField::new("Your name").description("Please enter your full name"),
//!         )
//!         .field("age", IntegerField::new("Your age").minimum(0).maximum(150))
//!         .build()
//! });
//!
//! impl Form for UserInfoForm {
//!     fn fields(&self) -> &FieldSet {
//!         &USER_INFO_FIELDS
//!     }
//! }
//!
//! let mut session = ElicitationSession::new(UserInfoForm)
//!     .with_message("Please tell me your name");
//! let result = session.elicit(&transport).await?;
//!
//! if result.accepted() {
//!     let name = session.get("name")?;
//! }
//! ```
//!
//! # Crates
//!
//! - `elicit-core`: error taxonomy, transport contract, logging facade
//! - `elicit-forms`: field types, registry, schema compiler, validation
//!   pipeline, sessions
//! - `elicit` (this crate): re-exports plus [`testing`] utilities

#![forbid(unsafe_code)]
#![allow(dead_code)]

pub mod testing;

pub use elicit_core::{
    BoxFuture, ElicitAction, ElicitError, ElicitResponse, ElicitResult, ElicitationTransport,
    FieldError, ValidationReport, logging,
};
pub use elicit_forms::{
    BooleanField, DEFAULT_MESSAGE, ElicitationSession, EnumChoice, EnumField, Field, FieldSet,
    FieldSetBuilder, Form, IntegerField, NumberField, SessionOutcome, SessionResult, StringField,
    schema, validate,
};
