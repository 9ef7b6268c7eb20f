//! Shared fixtures for phase tests.

use snex_compiler::{Compiler, CompilerConfig};
use snex_ir::{Name, NamespacedIdentifier, SharedInterner, Span};

/// A compiler plus helpers for building identifiers.
pub struct Fixture {
    pub compiler: Compiler,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(CompilerConfig::default())
    }

    /// Logs go to stderr when `RUST_LOG` is set.
    pub fn with_config(config: CompilerConfig) -> Self {
        snex_compiler::init_tracing();
        Fixture {
            compiler: Compiler::new(SharedInterner::new(), config).unwrap(),
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.compiler.handler().interner().intern(s)
    }

    pub fn id(&self, s: &str) -> NamespacedIdentifier {
        NamespacedIdentifier::parse(s, self.compiler.handler().interner())
    }
}

/// Span of the first occurrence of `needle` in `source`.
pub fn span_of(source: &str, needle: &str) -> Span {
    let start = source.find(needle).unwrap();
    Span::new(
        u32::try_from(start).unwrap(),
        u32::try_from(start + needle.len()).unwrap(),
    )
}
