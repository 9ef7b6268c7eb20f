//! Compiler configuration.

use std::fmt;
use std::str::FromStr;

/// Built-in optimization passes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OptimizationId {
    ConstantFolding,
    DeadCodeElimination,
}

impl OptimizationId {
    pub const ALL: &'static [OptimizationId] = &[
        OptimizationId::ConstantFolding,
        OptimizationId::DeadCodeElimination,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationId::ConstantFolding => "constant_folding",
            OptimizationId::DeadCodeElimination => "dead_code_elimination",
        }
    }
}

impl fmt::Display for OptimizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown optimization `{0}`")]
pub struct UnknownOptimization(pub String);

impl FromStr for OptimizationId {
    type Err = UnknownOptimization;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownOptimization(s.to_owned()))
    }
}

/// Settings for one `Compiler`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Optimization passes, in the order they run on each statement.
    pub optimizations: Vec<OptimizationId>,
    /// Log the namespace table after symbol resolution.
    pub dump_namespaces: bool,
    /// Register the built-in templates as internal symbols, hidden from the
    /// namespace dump.
    pub internal_symbols: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            optimizations: OptimizationId::ALL.to_vec(),
            dump_namespaces: false,
            internal_symbols: true,
        }
    }
}

impl CompilerConfig {
    /// No optimization passes; optimization phases become no-ops.
    pub fn unoptimized() -> Self {
        CompilerConfig {
            optimizations: Vec::new(),
            ..Self::default()
        }
    }

    /// Parse optimization names such as `"constant_folding"`.
    pub fn from_optimization_names<'a>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, UnknownOptimization> {
        let optimizations = names
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<OptimizationId>, _>>()?;
        Ok(Self::default().with_optimizations(optimizations))
    }

    #[must_use]
    pub fn with_optimizations(mut self, optimizations: impl IntoIterator<Item = OptimizationId>) -> Self {
        self.optimizations = optimizations.into_iter().collect();
        self
    }

    /// Append a pass unless it is already enabled.
    #[must_use]
    pub fn with_optimization(mut self, id: OptimizationId) -> Self {
        if !self.optimizations.contains(&id) {
            self.optimizations.push(id);
        }
        self
    }

    #[must_use]
    pub fn with_dump_namespaces(mut self, enabled: bool) -> Self {
        self.dump_namespaces = enabled;
        self
    }

    #[must_use]
    pub fn with_internal_symbols(mut self, enabled: bool) -> Self {
        self.internal_symbols = enabled;
        self
    }
}
