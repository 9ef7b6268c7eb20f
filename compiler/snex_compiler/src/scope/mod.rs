//! Lexical scopes handed to the pass driver.

use snex_ir::{Name, NamespacedIdentifier};

/// The namespace a tree of statements is compiled in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    id: NamespacedIdentifier,
}

impl Scope {
    /// The global scope.
    pub fn root() -> Self {
        Self::default()
    }

    /// Scope of the namespace with the absolute id `id`.
    pub fn new(id: NamespacedIdentifier) -> Self {
        Scope { id }
    }

    #[inline]
    pub fn id(&self) -> &NamespacedIdentifier {
        &self.id
    }

    #[must_use]
    pub fn child(&self, name: Name) -> Self {
        Scope {
            id: self.id.child(name),
        }
    }

    pub fn is_root(&self) -> bool {
        !self.id.is_valid()
    }
}
