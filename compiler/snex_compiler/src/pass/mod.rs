//! Compiler phases.

use std::fmt;

/// One phase of the compilation pipeline, in execution order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Pass {
    Parsing,
    PreSymbolOptimization,
    ResolvingSymbols,
    TypeCheck,
    SyntaxSugarReplacements,
    PostSymbolOptimization,
    DataSizeCalculation,
    DataAllocation,
    DataInitialisation,
    PreCodeGenerationOptimization,
    RegisterAllocation,
    CodeGeneration,
}

impl Pass {
    /// Every phase, in execution order.
    pub const ALL: &'static [Pass] = &[
        Pass::Parsing,
        Pass::PreSymbolOptimization,
        Pass::ResolvingSymbols,
        Pass::TypeCheck,
        Pass::SyntaxSugarReplacements,
        Pass::PostSymbolOptimization,
        Pass::DataSizeCalculation,
        Pass::DataAllocation,
        Pass::DataInitialisation,
        Pass::PreCodeGenerationOptimization,
        Pass::RegisterAllocation,
        Pass::CodeGeneration,
    ];

    /// Phases that run the registered optimization passes instead of the
    /// statements' own processing.
    pub fn is_optimization(self) -> bool {
        matches!(
            self,
            Pass::PreSymbolOptimization
                | Pass::PostSymbolOptimization
                | Pass::PreCodeGenerationOptimization
        )
    }

    /// Phases that do not need a code generation backend.
    pub fn is_frontend(self) -> bool {
        !matches!(self, Pass::RegisterAllocation | Pass::CodeGeneration)
    }

    pub fn name(self) -> &'static str {
        match self {
            Pass::Parsing => "Parsing",
            Pass::PreSymbolOptimization => "PreSymbolOptimization",
            Pass::ResolvingSymbols => "ResolvingSymbols",
            Pass::TypeCheck => "TypeCheck",
            Pass::SyntaxSugarReplacements => "SyntaxSugarReplacements",
            Pass::PostSymbolOptimization => "PostSymbolOptimization",
            Pass::DataSizeCalculation => "DataSizeCalculation",
            Pass::DataAllocation => "DataAllocation",
            Pass::DataInitialisation => "DataInitialisation",
            Pass::PreCodeGenerationOptimization => "PreCodeGenerationOptimization",
            Pass::RegisterAllocation => "RegisterAllocation",
            Pass::CodeGeneration => "CodeGeneration",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
