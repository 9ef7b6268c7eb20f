//! Pass scheduling compiler driver for SNEX.
//!
//! The frontend hands a `SyntaxTree` of `Statement`s to a `Compiler`, which
//! runs the compilation phases (`Pass`) over it: semantic phases process
//! each statement directly, optimization phases run the registered
//! `OptimizationPass`es. Symbols live in the compiler's
//! `snex_namespace::NamespaceHandler`.
//!
//! ```text
//! Compiler
//!     ├── NamespaceHandler (symbols, templates, complex types)
//!     ├── optimization passes (ConstantFolding, DeadCodeElimination, ...)
//!     └── pass state (current phase, current optimization)
//! ```

use std::sync::Once;

mod compiler;
mod config;
mod error;
pub mod optimizations;
mod pass;
mod process;
mod scope;
mod statement;
mod syntax_tree;

pub use compiler::Compiler;
pub use config::{CompilerConfig, OptimizationId, UnknownOptimization};
pub use error::{CompileError, ProcessError};
pub use optimizations::{ConstantFolding, DeadCodeElimination, OptimizationPass};
pub use pass::Pass;
pub use scope::Scope;
pub use statement::{BinaryOperator, Statement, StatementKind};
pub use syntax_tree::SyntaxTree;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Installs an indented, span-aware subscriber filtered by `RUST_LOG`
/// (e.g. `RUST_LOG=snex_namespace=trace`). Does nothing when `RUST_LOG` is
/// unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
