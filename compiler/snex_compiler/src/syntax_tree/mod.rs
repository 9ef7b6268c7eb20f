//! Top-level statement list plus the source it was parsed from.

use snex_diagnostic::span_utils::LineOffsetTable;

use crate::Statement;

#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    source: String,
    statements: Vec<Statement>,
}

impl SyntaxTree {
    pub fn new(source: impl Into<String>, statements: Vec<Statement>) -> Self {
        SyntaxTree {
            source: source.into(),
            statements,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn statements_mut(&mut self) -> &mut [Statement] {
        &mut self.statements
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub(crate) fn line_table(&self) -> LineOffsetTable {
        LineOffsetTable::build(&self.source)
    }
}
