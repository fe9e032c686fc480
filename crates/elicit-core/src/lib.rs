//! Core types for the elicitation engine.
//!
//! This crate provides the fundamental building blocks:
//! - Error types for field validation and session failures
//! - The transport collaborator contract ([`ElicitationTransport`])
//! - Logging facade utilities
//!
//! # Design Principles
//!
//! - All types support `Send + Sync`
//! - No bundled async runtime: async seams use [`BoxFuture`] with
//!   default implementations delegating to the sync variants
//! - Transport failures are typed at the source, so callers can tell
//!   "the remote party cannot elicit at all" from any other failure

#![forbid(unsafe_code)]
#![allow(dead_code)]

mod error;
pub mod logging;
mod transport;

pub use error::{ElicitError, ElicitResult, FieldError, ValidationReport};
pub use transport::{BoxFuture, ElicitAction, ElicitResponse, ElicitationTransport};
