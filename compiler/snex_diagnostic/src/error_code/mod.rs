//! Error codes for all compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Namespace / resolution errors
/// - E2xxx: Template errors
/// - E3xxx: Semantic pass errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Resolution Errors (E1xxx)
    /// Identifier can't be resolved
    E1001,
    /// Identifier is ambiguous
    E1002,
    /// Namespace not found
    E1003,
    /// Symbol not found
    E1004,
    /// Symbol type mismatch
    E1005,
    /// No namespace available
    E1006,

    // Template Errors (E2xxx)
    /// Template class not found
    E2001,
    /// Template function not found
    E2002,
    /// Template construction failed
    E2003,

    // Semantic Errors (E3xxx)
    /// Type mismatch
    E3001,
    /// Invalid statement for the current pass
    E3002,

    // Internal Errors (E9xxx)
    /// Namespace table consistency violation
    E9001,
    /// Malformed template registration
    E9002,

    // Optimizer Warnings (W3xxx)
    /// Expression removed as dead code
    W3001,
}

impl ErrorCode {
    /// Every error code.
    pub const ALL: &[ErrorCode] = &[
        // Resolution
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        // Template
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        // Semantic
        ErrorCode::E3001,
        ErrorCode::E3002,
        // Internal
        ErrorCode::E9001,
        ErrorCode::E9002,
        // Warnings
        ErrorCode::W3001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Resolution
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            // Template
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            // Semantic
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            // Internal
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            // Warnings
            ErrorCode::W3001 => "W3001",
        }
    }

    /// Check if this is a resolution error (E1xxx range).
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    /// Check if this is a template error (E2xxx range).
    pub fn is_template_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }

    /// Check if this is a semantic pass error (E3xxx range).
    pub fn is_semantic_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002)
    }

    /// Check if this is an internal compiler error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"` or `"W3001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
