//! Diagnostic system for SNEX compiler errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (why it's wrong)
//!
//! Internal compiler consistency errors use their own code range (E9xxx) so
//! callers can surface them separately from errors in user source.

mod diagnostic;
mod error_code;
pub mod span_utils;

pub use diagnostic::{
    ambiguous_identifier, internal_error, unresolved_identifier, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
