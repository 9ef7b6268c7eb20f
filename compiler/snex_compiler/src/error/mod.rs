//! Errors raised while processing statements.

use snex_diagnostic::{Diagnostic, ErrorCode};
use snex_ir::Span;
use snex_namespace::NamespaceError;

/// A fatal error; aborts the current pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("{source}")]
    Namespace { source: NamespaceError, span: Span },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("{message}")]
    InvalidStatement { message: String, span: Span },
}

impl CompileError {
    /// Attach a location to a namespace table error.
    pub fn namespace(source: NamespaceError, span: Span) -> Self {
        CompileError::Namespace { source, span }
    }

    pub fn span(&self) -> Span {
        match self {
            CompileError::Namespace { span, .. }
            | CompileError::TypeMismatch { span, .. }
            | CompileError::InvalidStatement { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Namespace { source, .. } => source.code(),
            CompileError::TypeMismatch { .. } => ErrorCode::E3001,
            CompileError::InvalidStatement { .. } => ErrorCode::E3002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Namespace { source, span } => source.to_diagnostic(*span),
            CompileError::TypeMismatch {
                expected,
                found,
                span,
            } => Diagnostic::error(ErrorCode::E3001)
                .with_message(self.to_string())
                .with_label(*span, format!("expected {expected}, found {found}")),
            CompileError::InvalidStatement { span, .. } => Diagnostic::error(ErrorCode::E3002)
                .with_message(self.to_string())
                .with_label(*span, "here"),
        }
    }
}

impl From<NamespaceError> for CompileError {
    fn from(source: NamespaceError) -> Self {
        CompileError::namespace(source, Span::DUMMY)
    }
}

/// Outcome of processing one statement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    /// The statement was removed as unreachable; recovered per statement.
    #[error("removed expression at {span}")]
    DeadCode { span: Span },

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl ProcessError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ProcessError::DeadCode { span } => Diagnostic::warning(ErrorCode::W3001)
                .with_message("expression removed as unreachable")
                .with_label(*span, "removed"),
            ProcessError::Compile(err) => err.to_diagnostic(),
        }
    }
}

impl From<NamespaceError> for ProcessError {
    fn from(source: NamespaceError) -> Self {
        ProcessError::Compile(source.into())
    }
}

#[cfg(test)]
mod tests;
