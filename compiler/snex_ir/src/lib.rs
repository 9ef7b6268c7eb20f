//! SNEX IR - Shared value types for the SNEX compiler core.
//!
//! This crate contains the data types every other compiler crate speaks:
//! - Names for interned identifier segments
//! - `NamespacedIdentifier` for qualified symbol paths
//! - `TypeInfo` for type descriptors used during symbol registration
//! - `ConstantValue` for compile-time constant storage
//! - `SymbolType` for classifying namespace aliases
//! - Spans for source locations
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier segments are `Name(u32)`, so path
//!   comparison is a slice comparison of integers.
//! - **Value Semantics**: identifiers and type descriptors are small, cloned
//!   freely and compared structurally.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod identifier;
mod interner;
mod name;
mod span;
mod symbol;
mod types;
mod value;

pub use identifier::{IdentifierDisplay, NamespacedIdentifier};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use symbol::SymbolType;
pub use types::{ComplexTypeId, PrimitiveType, TypeFlags, TypeInfo, TypeKind};
pub use value::ConstantValue;
