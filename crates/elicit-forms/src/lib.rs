//! Typed form fields and elicitation sessions.
//!
//! This crate provides the field-validation-and-negotiation engine:
//!
//! - **Fields**: five primitive field types ([`StringField`],
//!   [`IntegerField`], [`NumberField`], [`BooleanField`], [`EnumField`]),
//!   each owning its constraints and knowing how to describe itself as a
//!   schema fragment and validate a raw value
//! - **Registry**: [`FieldSet`], an ordered, immutable name→field mapping
//!   built once per form type
//! - **Schema compiler**: [`schema::compile`], producing one
//!   JSON-Schema-shaped object for a whole field set
//! - **Validation pipeline**: [`validate::validate_all`], which attempts
//!   every field and aggregates all failures into one report
//! - **Sessions**: [`ElicitationSession`], orchestrating one
//!   request/response cycle against a [`Form`] definition
//!
//! # Example
//!
//! ```ignore
//! struct SignupForm;
//!
//! static SIGNUP_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
//!     FieldSet::builder()
//!         .field("name", StringField::new("Your Name").min_length(1))
//!         .field("age", IntegerField::new("Your Age").minimum(0).maximum(150))
//!         .build()
//! });
//!
//! impl Form for SignupForm {
//!     fn fields(&self) -> &FieldSet {
//!         &SIGNUP_FIELDS
//!     }
//! }
//!
//! let mut session = ElicitationSession::new(SignupForm);
//! let result = session.elicit(&transport).await?;
//! if result.accepted() {
//!     let name = session.get("name")?;
//! }
//! ```

#![forbid(unsafe_code)]
#![allow(dead_code)]

mod fields;
mod form;
mod registry;
pub mod schema;
mod session;
pub mod validate;

pub use fields::{
    BooleanField, EnumChoice, EnumField, Field, IntegerField, NumberField, StringField,
};
pub use form::Form;
pub use registry::{FieldSet, FieldSetBuilder};
pub use session::{ElicitationSession, SessionOutcome, SessionResult, DEFAULT_MESSAGE};
