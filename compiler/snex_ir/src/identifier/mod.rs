//! Namespaced identifiers.
//!
//! A `NamespacedIdentifier` is the full path of a symbol: `A::B::x` is the
//! segments `[A, B, x]`. The empty path is the root namespace id and is not a
//! valid symbol id.

use std::fmt;

use smallvec::SmallVec;

use crate::{Name, StringInterner};

/// Path separator used by `parse` and `display`.
const SEPARATOR: &str = "::";

/// A qualified identifier path.
///
/// Equality, hashing and the parent relation are structural over the whole
/// path, so two ids built independently from the same segments compare equal.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct NamespacedIdentifier {
    path: SmallVec<[Name; 4]>,
}

impl NamespacedIdentifier {
    /// The root id (empty path).
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a single-segment identifier.
    pub fn new(name: Name) -> Self {
        Self::root().child(name)
    }

    /// Create an identifier from its segments, outermost first.
    pub fn from_names(names: impl IntoIterator<Item = Name>) -> Self {
        NamespacedIdentifier {
            path: names.into_iter().filter(|n| !n.is_empty()).collect(),
        }
    }

    /// Parse a `::` separated path, interning each segment.
    ///
    /// Empty segments are skipped, so `""` and `"::"` both parse to the root.
    pub fn parse(s: &str, interner: &StringInterner) -> Self {
        Self::from_names(
            s.split(SEPARATOR)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| interner.intern(segment)),
        )
    }

    /// The root id is the only invalid identifier.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.path.is_empty()
    }

    /// The last segment (`x` in `A::B::x`), or `Name::EMPTY` for the root.
    #[inline]
    pub fn identifier(&self) -> Name {
        self.path.last().copied().unwrap_or(Name::EMPTY)
    }

    /// The enclosing path (`A::B` for `A::B::x`). The parent of a
    /// single-segment id, and of the root, is the root.
    pub fn parent(&self) -> Self {
        let len = self.path.len().saturating_sub(1);
        NamespacedIdentifier {
            path: self.path[..len].iter().copied().collect(),
        }
    }

    /// Append a segment.
    #[must_use]
    pub fn child(&self, name: Name) -> Self {
        let mut path = self.path.clone();
        if !name.is_empty() {
            path.push(name);
        }
        NamespacedIdentifier { path }
    }

    /// Append every segment of `other`.
    #[must_use]
    pub fn join(&self, other: &NamespacedIdentifier) -> Self {
        let mut path = self.path.clone();
        path.extend(other.path.iter().copied());
        NamespacedIdentifier { path }
    }

    /// True if this id has a valid (non-root) parent.
    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.path.len() > 1
    }

    /// True if `other` lives strictly inside this path.
    ///
    /// The root is a parent of every valid id.
    pub fn is_parent_of(&self, other: &NamespacedIdentifier) -> bool {
        other.path.len() > self.path.len() && other.path.starts_with(&self.path)
    }

    /// Replace the prefix `from` with `to`.
    ///
    /// Ids that do not start with `from` are returned unchanged. Relocating
    /// from the root prepends `to`.
    #[must_use]
    pub fn relocate(&self, from: &NamespacedIdentifier, to: &NamespacedIdentifier) -> Self {
        if !self.path.starts_with(&from.path) {
            return self.clone();
        }

        let mut path: SmallVec<[Name; 4]> = to.path.clone();
        path.extend(self.path[from.path.len()..].iter().copied());
        NamespacedIdentifier { path }
    }

    /// Number of segments.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The segments, outermost first.
    #[inline]
    pub fn names(&self) -> &[Name] {
        &self.path
    }

    /// Render the path with an interner.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> IdentifierDisplay<'a> {
        IdentifierDisplay { id: self, interner }
    }
}

impl fmt::Debug for NamespacedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Id(")?;
        for (i, name) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "#{}", name.raw())?;
        }
        f.write_str(")")
    }
}

/// `Display` adapter returned by [`NamespacedIdentifier::display`].
pub struct IdentifierDisplay<'a> {
    id: &'a NamespacedIdentifier,
    interner: &'a StringInterner,
}

impl fmt::Display for IdentifierDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.id.path.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(self.interner.lookup(*name))?;
        }
        Ok(())
    }
}
