//! Namespace table, symbol resolution and template registry for SNEX.
//!
//! # Architecture
//!
//! ```text
//! NamespaceHandler (one per compilation)
//!     ├── namespace arena (Namespace records addressed by NamespaceId)
//!     │       └── aliases (one Alias per registered symbol)
//!     ├── complex type registry (deduplicated, addressed by ComplexTypeId)
//!     ├── variadic type registry
//!     └── template class / function registries
//! ```
//!
//! The frontend moves the handler's cursor with `push_namespace` /
//! `pop_namespace` while it walks the syntax tree, registers symbols in the
//! current namespace and resolves identifiers relative to it.
//!
//! # Design Decisions
//!
//! - Parent, child and "used" links are arena indices, never owning pointers
//! - All registries are owned by the handler; there is no global state
//! - Every failure is a `NamespaceError`; consistency bugs are flagged by
//!   `NamespaceError::is_internal`

mod builtins;
mod complex_type;
mod error;
mod handler;
mod namespace;
mod resolve;
mod template;

pub use builtins::register_builtin_templates;
pub use complex_type::{ComplexType, ComplexTypeKind, FunctionData, StructMember, VariadicSubType};
pub use error::NamespaceError;
pub use handler::NamespaceHandler;
pub use namespace::{Alias, Namespace, NamespaceId};
pub use template::{
    ClassConstructor, FunctionConstructor, TemplateConstructData, TemplateConstructor,
    TemplateObject, TemplateParameter,
};
