//! Namespace arena records.

use snex_ir::{ConstantValue, NamespacedIdentifier, SymbolType, TypeInfo};

/// Index of a namespace in the handler's arena.
///
/// Ids are never reused within a compilation; `NamespaceHandler::reset`
/// invalidates all of them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct NamespaceId(u32);

impl NamespaceId {
    /// The root namespace is always the first record.
    pub const ROOT: NamespaceId = NamespaceId(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        NamespaceId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named symbol registered in a namespace.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias {
    pub id: NamespacedIdentifier,
    pub symbol_type: SymbolType,
    pub type_info: TypeInfo,
    /// Set by `add_constant` for constant kinds.
    pub constant_value: Option<ConstantValue>,
    /// Compiler-generated; hidden from `dump`.
    pub internal: bool,
}

impl Alias {
    pub fn new(id: NamespacedIdentifier, symbol_type: SymbolType, type_info: TypeInfo) -> Self {
        Alias {
            id,
            symbol_type,
            type_info,
            constant_value: None,
            internal: false,
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }
}

/// One namespace record.
#[derive(Clone, Debug)]
pub struct Namespace {
    pub(crate) id: NamespacedIdentifier,
    pub(crate) parent: Option<NamespaceId>,
    pub(crate) children: Vec<NamespaceId>,
    pub(crate) aliases: Vec<Alias>,
    pub(crate) used: Vec<NamespaceId>,
    pub(crate) internal: bool,
}

impl Namespace {
    pub(crate) fn new(id: NamespacedIdentifier, parent: Option<NamespaceId>, internal: bool) -> Self {
        Namespace {
            id,
            parent,
            children: Vec::new(),
            aliases: Vec::new(),
            used: Vec::new(),
            internal,
        }
    }

    #[inline]
    pub fn id(&self) -> &NamespacedIdentifier {
        &self.id
    }

    /// `None` only for the root.
    #[inline]
    pub fn parent(&self) -> Option<NamespaceId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NamespaceId] {
        &self.children
    }

    #[inline]
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Namespaces imported with `using namespace`.
    #[inline]
    pub fn used_namespaces(&self) -> &[NamespaceId] {
        &self.used
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// True if a symbol with exactly this id is registered here.
    pub fn contains(&self, symbol: &NamespacedIdentifier) -> bool {
        self.alias(symbol).is_some()
    }

    pub fn alias(&self, symbol: &NamespacedIdentifier) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.id == *symbol)
    }

    pub(crate) fn alias_mut(&mut self, symbol: &NamespacedIdentifier) -> Option<&mut Alias> {
        self.aliases.iter_mut().find(|a| a.id == *symbol)
    }

    /// Register an alias unless one with the same id already exists.
    ///
    /// Returns `true` if the alias was added.
    pub(crate) fn add_alias(&mut self, alias: Alias) -> bool {
        if self.contains(&alias.id) {
            return false;
        }
        self.aliases.push(alias);
        true
    }

    /// Record an import; returns `false` if it was already there.
    pub(crate) fn add_used(&mut self, target: NamespaceId) -> bool {
        if self.used.contains(&target) {
            return false;
        }
        self.used.push(target);
        true
    }
}
