//! stache-util - Core Utilities and Foundation Types
//!
//! Shared types used by every stage of the stache template front end:
//!
//! - [`span`] - Byte ranges, opening lines and template identifiers
//! - [`error`] - Template and delimiter error types
//! - [`diagnostic`] - Reportable diagnostics and a collecting handler

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Handler};
pub use error::{DelimiterError, TemplateError, TemplateResult};
pub use span::{Span, TemplateId};
