//! Symbol classification.

use std::fmt;

/// The kind of symbol an alias binds.
///
/// Determines which namespace table operations are valid on the alias.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SymbolType {
    #[default]
    Unknown,
    Struct,
    Function,
    Variable,
    UsingAlias,
    Constant,
    StaticFunctionClass,
    TemplateType,
    TemplateConstant,
    TemplatedClass,
    TemplatedFunction,
    PreprocessorConstant,
    Enum,
    EnumValue,
}

impl SymbolType {
    /// Constant symbols carry a `ConstantValue`.
    #[inline]
    pub fn is_constant(self) -> bool {
        matches!(
            self,
            SymbolType::TemplateConstant
                | SymbolType::PreprocessorConstant
                | SymbolType::Constant
                | SymbolType::EnumValue
        )
    }

    /// Symbols that name a type.
    #[inline]
    pub fn is_type(self) -> bool {
        matches!(
            self,
            SymbolType::Struct
                | SymbolType::UsingAlias
                | SymbolType::TemplateType
                | SymbolType::TemplatedClass
                | SymbolType::Enum
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolType::Unknown => "unknown",
            SymbolType::Struct => "struct",
            SymbolType::Function => "function",
            SymbolType::Variable => "variable",
            SymbolType::UsingAlias => "using alias",
            SymbolType::Constant => "constant",
            SymbolType::StaticFunctionClass => "static function class",
            SymbolType::TemplateType => "template type",
            SymbolType::TemplateConstant => "template constant",
            SymbolType::TemplatedClass => "templated class",
            SymbolType::TemplatedFunction => "templated function",
            SymbolType::PreprocessorConstant => "preprocessor constant",
            SymbolType::Enum => "enum",
            SymbolType::EnumValue => "enum value",
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
