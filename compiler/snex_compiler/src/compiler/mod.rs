//! The compiler driver.
//!
//! A `Compiler` is one compilation session: it owns the namespace table,
//! the optimization passes and the pass state. Independent compilations use
//! independent `Compiler`s.

use std::fmt;

use snex_diagnostic::Diagnostic;
use snex_ir::SharedInterner;
use snex_namespace::{register_builtin_templates, NamespaceHandler};
use tracing::{debug, trace};

use crate::optimizations::create_optimization;
use crate::process::process_statement;
use crate::{
    CompileError, CompilerConfig, OptimizationPass, Pass, ProcessError, Scope, Statement,
    StatementKind, SyntaxTree,
};

pub struct Compiler {
    config: CompilerConfig,
    handler: NamespaceHandler,
    optimizations: Vec<Box<dyn OptimizationPass>>,
    current_pass: Option<Pass>,
    current_optimization: Option<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl Compiler {
    /// Create a session with the passes enabled in `config` and the
    /// built-in templates registered.
    pub fn new(interner: SharedInterner, config: CompilerConfig) -> Result<Self, CompileError> {
        let optimizations = config
            .optimizations
            .iter()
            .map(|&id| create_optimization(id))
            .collect();
        let mut compiler = Compiler {
            handler: NamespaceHandler::new(interner),
            optimizations,
            current_pass: None,
            current_optimization: None,
            diagnostics: Vec::new(),
            config,
        };
        compiler.register_builtins()?;
        Ok(compiler)
    }

    fn register_builtins(&mut self) -> Result<(), CompileError> {
        let previous = self.handler.internal_symbol_mode();
        self.handler
            .set_internal_symbol_mode(self.config.internal_symbols);
        let result = register_builtin_templates(&mut self.handler);
        self.handler.set_internal_symbol_mode(previous);
        result.map_err(CompileError::from)
    }

    /// Clear all symbols, types and diagnostics for a new compilation.
    pub fn reset(&mut self) -> Result<(), CompileError> {
        self.handler.reset();
        self.current_pass = None;
        self.current_optimization = None;
        self.diagnostics.clear();
        self.register_builtins()
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn handler(&self) -> &NamespaceHandler {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut NamespaceHandler {
        &mut self.handler
    }

    /// Append an optimization pass after the configured ones.
    pub fn add_optimization(&mut self, pass: Box<dyn OptimizationPass>) {
        self.optimizations.push(pass);
    }

    pub fn optimization_names(&self) -> Vec<&'static str> {
        self.optimizations.iter().map(|p| p.name()).collect()
    }

    /// The phase most recently started by `execute_pass`.
    pub fn current_pass(&self) -> Option<Pass> {
        self.current_pass
    }

    /// The optimization pass currently running, if any.
    pub fn current_optimization_name(&self) -> Option<&'static str> {
        self.current_optimization
            .and_then(|index| self.optimizations.get(index))
            .map(|p| p.name())
    }

    /// Warnings collected by recovered statements.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Run one phase over every top-level statement of `tree`.
    ///
    /// Removed code is recovered per statement: the statement gets a
    /// message and the phase continues with the next one. Any other error
    /// aborts the phase.
    #[tracing::instrument(level = "debug", skip_all, fields(pass = %pass, statements = tree.len()))]
    pub fn execute_pass(
        &mut self,
        pass: Pass,
        scope: &Scope,
        tree: &mut SyntaxTree,
    ) -> Result<(), CompileError> {
        if pass.is_optimization() && self.optimizations.is_empty() {
            trace!("no optimization passes registered");
            return Ok(());
        }

        self.current_pass = Some(pass);
        let result = self.process_tree(pass, scope, tree);
        self.current_optimization = None;
        result?;

        if pass == Pass::ResolvingSymbols && self.config.dump_namespaces {
            debug!("namespace table:\n{}", self.handler.dump());
        }
        Ok(())
    }

    fn process_tree(
        &mut self,
        pass: Pass,
        scope: &Scope,
        tree: &mut SyntaxTree,
    ) -> Result<(), CompileError> {
        let lines = tree.line_table();

        for statement in tree.statements_mut() {
            for optimization in &mut self.optimizations {
                optimization.reset();
            }

            match self.process_top_level(pass, scope, statement) {
                Ok(()) => {}
                Err(ProcessError::DeadCode { span }) => {
                    let line = lines.line_of(span);
                    debug!(line, "skipping removed expression");
                    statement.log_message(format!("Skipping removed expression at Line {line}"));
                    self.diagnostics
                        .push(ProcessError::DeadCode { span }.to_diagnostic());
                }
                Err(ProcessError::Compile(err)) => return Err(err),
            }
        }
        Ok(())
    }

    fn process_top_level(
        &mut self,
        pass: Pass,
        scope: &Scope,
        statement: &mut Statement,
    ) -> Result<(), ProcessError> {
        if !pass.is_optimization() {
            return self
                .handler
                .with_namespace(scope.id(), |handler| process_statement(handler, pass, statement))
                .map_err(ProcessError::from);
        }

        for index in 0..self.optimizations.len() {
            self.current_optimization = Some(index);
            self.optimize(statement, scope)?;
        }
        Ok(())
    }

    /// Children first, then the node itself.
    fn optimize(&mut self, statement: &mut Statement, scope: &Scope) -> Result<(), ProcessError> {
        let inner = match &statement.kind {
            StatementKind::NamespaceBlock { name, .. } => scope.child(*name),
            _ => scope.clone(),
        };
        for child in statement.children_mut() {
            self.optimize(child, &inner)?;
        }
        self.execute_optimization(statement, scope)
    }

    /// Apply only the current optimization pass to one statement; no-op
    /// outside an optimization pass.
    pub fn execute_optimization(
        &mut self,
        statement: &mut Statement,
        scope: &Scope,
    ) -> Result<(), ProcessError> {
        let Some(pass) = self
            .current_optimization
            .and_then(|index| self.optimizations.get_mut(index))
        else {
            return Ok(());
        };
        pass.process_statement(statement, &self.handler, scope)
    }

    /// Run every phase that does not need a code generation backend.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_frontend_passes(
        &mut self,
        scope: &Scope,
        tree: &mut SyntaxTree,
    ) -> Result<(), CompileError> {
        for &pass in Pass::ALL.iter().filter(|p| p.is_frontend()) {
            self.execute_pass(pass, scope, tree)?;
        }
        Ok(())
    }

    /// Make `name` the current optimization, as the driver does while a
    /// phase runs.
    #[cfg(test)]
    pub(crate) fn set_current_optimization(&mut self, name: &str) {
        self.current_optimization = self.optimizations.iter().position(|p| p.name() == name);
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("config", &self.config)
            .field("optimizations", &self.optimization_names())
            .field("current_pass", &self.current_pass)
            .field("current_optimization", &self.current_optimization_name())
            .finish_non_exhaustive()
    }
}
