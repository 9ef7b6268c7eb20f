//! Type descriptors.
//!
//! `TypeInfo` is what the namespace table stores per alias: a primitive, a
//! handle to a registered complex type, an open template type parameter, or
//! the `Dynamic` placeholder used before a type is known.

use std::fmt;

use bitflags::bitflags;

use crate::NamespacedIdentifier;

/// Primitive SNEX types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveType {
    Void,
    Integer,
    Float,
    Double,
    /// Audio buffer reference.
    Block,
    Pointer,
}

impl PrimitiveType {
    /// Every primitive type, in declaration order.
    pub const ALL: &'static [PrimitiveType] = &[
        PrimitiveType::Void,
        PrimitiveType::Integer,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Block,
        PrimitiveType::Pointer,
    ];

    /// Source-level spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::Integer => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Block => "block",
            PrimitiveType::Pointer => "pointer",
        }
    }

    /// Parse the source-level spelling.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }

    /// Numeric types take part in constant coercion.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveType::Integer | PrimitiveType::Float | PrimitiveType::Double
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a complex type registered in the namespace table.
///
/// Two handles are equal iff they refer to the same registered type, which
/// after deduplication means the types are structurally equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct ComplexTypeId(u32);

impl ComplexTypeId {
    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ComplexTypeId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the owning registry.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Qualifiers attached to a `TypeInfo`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// `const` qualified. On enum values this marks an `enum class`.
        const CONST = 1 << 0;
        /// Reference (`&`).
        const REF = 1 << 1;
        /// `static` member.
        const STATIC = 1 << 2;
    }
}

/// What a `TypeInfo` describes.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TypeKind {
    Primitive(PrimitiveType),
    Complex(ComplexTypeId),
    /// An open template type parameter (`T` inside `template <typename T>`).
    TemplateType(NamespacedIdentifier),
    /// Not yet known.
    #[default]
    Dynamic,
}

/// A type descriptor with qualifiers.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeInfo {
    kind: TypeKind,
    flags: TypeFlags,
}

impl TypeInfo {
    /// The unresolved placeholder.
    pub fn dynamic() -> Self {
        Self::default()
    }

    pub fn primitive(ty: PrimitiveType) -> Self {
        TypeInfo {
            kind: TypeKind::Primitive(ty),
            flags: TypeFlags::empty(),
        }
    }

    pub fn complex(id: ComplexTypeId) -> Self {
        TypeInfo {
            kind: TypeKind::Complex(id),
            flags: TypeFlags::empty(),
        }
    }

    pub fn template_type(id: NamespacedIdentifier) -> Self {
        TypeInfo {
            kind: TypeKind::TemplateType(id),
            flags: TypeFlags::empty(),
        }
    }

    /// Add qualifiers.
    #[must_use]
    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Shorthand for `with_flags(TypeFlags::CONST)`.
    #[must_use]
    pub fn with_const(self) -> Self {
        self.with_flags(TypeFlags::CONST)
    }

    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    #[inline]
    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self.kind, TypeKind::Dynamic)
    }

    /// True for open template type parameters.
    #[inline]
    pub fn is_template_type(&self) -> bool {
        matches!(self.kind, TypeKind::TemplateType(_))
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        self.flags.contains(TypeFlags::CONST)
    }

    #[inline]
    pub fn is_ref(&self) -> bool {
        self.flags.contains(TypeFlags::REF)
    }

    /// The primitive type, if this is one.
    #[inline]
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        match self.kind {
            TypeKind::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// The complex type handle, if this is one.
    #[inline]
    pub fn complex_type(&self) -> Option<ComplexTypeId> {
        match self.kind {
            TypeKind::Complex(id) => Some(id),
            _ => None,
        }
    }

    /// Compare ignoring qualifiers.
    pub fn same_kind(&self, other: &TypeInfo) -> bool {
        self.kind == other.kind
    }
}

impl From<PrimitiveType> for TypeInfo {
    fn from(ty: PrimitiveType) -> Self {
        TypeInfo::primitive(ty)
    }
}
