//! Errors reported by the namespace table.

use snex_diagnostic::{
    ambiguous_identifier, internal_error, unresolved_identifier, Diagnostic, ErrorCode,
};
use snex_ir::{Span, SymbolType};

/// A failed namespace table operation.
///
/// Identifiers are stored already rendered so the error can outlive the
/// handler and its interner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    #[error("no namespace available")]
    NoNamespace,

    #[error("{name} can't be resolved")]
    Unresolved { name: String },

    #[error("{name} is ambiguous")]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    #[error("Can't find namespace {id}")]
    NamespaceNotFound { id: String },

    #[error("Can't find symbol {id}")]
    SymbolNotFound { id: String },

    #[error("Symbol type mismatch: {id} is {actual}, expected {expected}")]
    SymbolTypeMismatch {
        id: String,
        expected: SymbolType,
        actual: SymbolType,
    },

    #[error("Can't find template class {id}")]
    TemplateClassNotFound { id: String },

    #[error("Can't instantiate template function {id}")]
    TemplateFunctionNotFound { id: String },

    #[error("Can't instantiate {id}: {reason}")]
    TemplateConstruction { id: String, reason: String },

    #[error("Can't pop namespace {id}: no parent namespace")]
    MissingParentLink { id: String },

    #[error("symbol {id} does not belong to the current namespace {current}")]
    ParentMismatch { id: String, current: String },

    #[error("invalid template argument list for {id}")]
    InvalidTemplateArguments { id: String },
}

impl NamespaceError {
    /// Consistency violations inside the compiler, as opposed to errors in
    /// the user's program.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            NamespaceError::MissingParentLink { .. }
                | NamespaceError::ParentMismatch { .. }
                | NamespaceError::InvalidTemplateArguments { .. }
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NamespaceError::Unresolved { .. } => ErrorCode::E1001,
            NamespaceError::Ambiguous { .. } => ErrorCode::E1002,
            NamespaceError::NamespaceNotFound { .. } => ErrorCode::E1003,
            NamespaceError::SymbolNotFound { .. } => ErrorCode::E1004,
            NamespaceError::SymbolTypeMismatch { .. } => ErrorCode::E1005,
            NamespaceError::NoNamespace => ErrorCode::E1006,
            NamespaceError::TemplateClassNotFound { .. } => ErrorCode::E2001,
            NamespaceError::TemplateFunctionNotFound { .. } => ErrorCode::E2002,
            NamespaceError::TemplateConstruction { .. } => ErrorCode::E2003,
            NamespaceError::MissingParentLink { .. } | NamespaceError::ParentMismatch { .. } => {
                ErrorCode::E9001
            }
            NamespaceError::InvalidTemplateArguments { .. } => ErrorCode::E9002,
        }
    }

    /// Convert into a diagnostic pointing at `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        match self {
            NamespaceError::Unresolved { name } => unresolved_identifier(span, name),
            NamespaceError::Ambiguous { name, candidates } => {
                let mut diag = ambiguous_identifier(span, name);
                for candidate in candidates {
                    diag = diag.with_note(format!("candidate: {candidate}"));
                }
                diag
            }
            _ if self.is_internal() => internal_error(self.code(), self.to_string()),
            _ => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(span, "here"),
        }
    }
}
