//! Line numbers for spans.
//!
//! The pass driver reports removed code as "Skipping removed expression at
//! Line N"; [`LineOffsetTable`] maps the statement's span to that `N`.

use snex_ir::Span;

/// Start offsets of every line of one source text.
///
/// ```
/// use snex_diagnostic::span_utils::LineOffsetTable;
///
/// let table = LineOffsetTable::build("const int a = 1;\nif (0) {}");
/// assert_eq!(table.line_from_offset(17), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    line_starts: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                source
                    .bytes()
                    .enumerate()
                    .filter(|&(_, byte)| byte == b'\n')
                    .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
            )
            .collect();
        LineOffsetTable { line_starts }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        // Number of lines starting at or before `offset`.
        let lines = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(lines).unwrap_or(u32::MAX).max(1)
    }

    /// 1-based line where `span` starts.
    pub fn line_of(&self, span: Span) -> u32 {
        self.line_from_offset(span.start)
    }
}
