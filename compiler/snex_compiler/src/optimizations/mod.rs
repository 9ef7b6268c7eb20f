//! Optimization passes.
//!
//! Passes run during the optimization phases. The driver resets every pass
//! before each top-level statement, then lets each pass walk the statement
//! bottom-up, calling `process_statement` once per node.

use snex_namespace::NamespaceHandler;
use tracing::trace;

use crate::{OptimizationId, ProcessError, Scope, Statement, StatementKind};

/// A statement rewriting pass.
pub trait OptimizationPass {
    fn name(&self) -> &'static str;

    /// Clear per-statement state.
    fn reset(&mut self) {}

    /// Rewrite one node. Children have already been processed.
    ///
    /// Returning `ProcessError::DeadCode` removes the rest of the current
    /// top-level statement from this phase.
    fn process_statement(
        &mut self,
        statement: &mut Statement,
        handler: &NamespaceHandler,
        scope: &Scope,
    ) -> Result<(), ProcessError>;
}

/// Create the built-in pass for `id`.
pub fn create_optimization(id: OptimizationId) -> Box<dyn OptimizationPass> {
    match id {
        OptimizationId::ConstantFolding => Box::new(ConstantFolding::default()),
        OptimizationId::DeadCodeElimination => Box::new(DeadCodeElimination),
    }
}

/// Replaces operations on constants and references to constant symbols by
/// their value.
#[derive(Debug, Default)]
pub struct ConstantFolding {
    folded: usize,
}

impl ConstantFolding {
    /// Nodes folded since the last reset.
    pub fn folded(&self) -> usize {
        self.folded
    }
}

impl OptimizationPass for ConstantFolding {
    fn name(&self) -> &'static str {
        OptimizationId::ConstantFolding.as_str()
    }

    fn reset(&mut self) {
        self.folded = 0;
    }

    fn process_statement(
        &mut self,
        statement: &mut Statement,
        handler: &NamespaceHandler,
        scope: &Scope,
    ) -> Result<(), ProcessError> {
        let folded = match &statement.kind {
            StatementKind::BinaryOp { op, lhs, rhs } => match (lhs.constant_value(), rhs.constant_value()) {
                (Some(l), Some(r)) => op.evaluate(l, r),
                _ => None,
            },
            StatementKind::SymbolRef(id) => {
                // Only references that resolve from this scope; an inner
                // variable may shadow an outer constant.
                let mut resolved = id.clone();
                handler
                    .resolve_in(scope.id(), &mut resolved, false)
                    .ok()
                    .and_then(|()| handler.constant_value(&resolved))
            }
            _ => None,
        };

        if let Some(value) = folded {
            trace!(%value, span = %statement.span, "folded constant");
            statement.replace_kind(StatementKind::Immediate(value));
            self.folded += 1;
        }
        Ok(())
    }
}

/// Removes unreachable code and reports it.
///
/// An `if` whose condition is a false constant and that has no `else` is
/// replaced by a no-op and raises `ProcessError::DeadCode`, as do statements
/// dropped after a `return` in a block.
///
/// An `if` with a constant condition and a branch to run collapses to that
/// branch without raising: the untaken branch is dropped silently and no
/// "Skipping removed expression" message is logged for it.
#[derive(Debug, Default)]
pub struct DeadCodeElimination;

impl OptimizationPass for DeadCodeElimination {
    fn name(&self) -> &'static str {
        OptimizationId::DeadCodeElimination.as_str()
    }

    fn process_statement(
        &mut self,
        statement: &mut Statement,
        _handler: &NamespaceHandler,
        _scope: &Scope,
    ) -> Result<(), ProcessError> {
        let span = statement.span;
        match &mut statement.kind {
            StatementKind::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                let Some(taken) = condition.constant_value().map(|c| c.is_truthy()) else {
                    return Ok(());
                };
                match (taken, else_branch.take()) {
                    (true, _) => {
                        let branch = std::mem::replace(then_branch.as_mut(), Statement::noop(span));
                        *statement = branch;
                        Ok(())
                    }
                    (false, Some(otherwise)) => {
                        *statement = *otherwise;
                        Ok(())
                    }
                    (false, None) => {
                        statement.replace_kind(StatementKind::Noop);
                        Err(ProcessError::DeadCode { span })
                    }
                }
            }
            StatementKind::Block(statements) => {
                let Some(ret) = statements.iter().position(Statement::is_return) else {
                    return Ok(());
                };
                match statements.get(ret + 1).map(|s| s.span) {
                    Some(first_removed) => {
                        statements.truncate(ret + 1);
                        Err(ProcessError::DeadCode {
                            span: first_removed,
                        })
                    }
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}
