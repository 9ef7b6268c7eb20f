//! The namespace table: arena, cursor and symbol queries.
//!
//! Resolution lives in `resolve`, the template and complex type registries
//! in `template` and `complex_type`. They all extend `NamespaceHandler`.

use rustc_hash::FxHashMap;
use snex_ir::{ConstantValue, NamespacedIdentifier, SharedInterner, SymbolType, TypeInfo, TypeKind};
use tracing::{debug, trace};

use crate::complex_type::{ComplexType, VariadicSubType};
use crate::template::TemplateEntry;
use crate::{Alias, Namespace, NamespaceError, NamespaceId};

/// Symbol kinds whose `TypeInfo` describes a type.
const ALIAS_TYPE_KINDS: &[SymbolType] = &[
    SymbolType::Struct,
    SymbolType::UsingAlias,
    SymbolType::TemplateType,
];

/// Symbol kinds whose `TypeInfo` describes a value.
const VARIABLE_TYPE_KINDS: &[SymbolType] = &[
    SymbolType::TemplateConstant,
    SymbolType::Variable,
    SymbolType::Constant,
    SymbolType::Function,
    SymbolType::EnumValue,
];

/// Owns every namespace, symbol and template of one compilation.
///
/// The handler keeps a cursor (the current namespace) that the frontend
/// moves while walking nested scopes. The root namespace is created lazily
/// by the first mutating operation.
#[derive(Debug)]
pub struct NamespaceHandler {
    interner: SharedInterner,
    pub(crate) namespaces: Vec<Namespace>,
    pub(crate) index: FxHashMap<NamespacedIdentifier, NamespaceId>,
    pub(crate) current: Option<NamespaceId>,
    internal_symbol_mode: bool,
    pub(crate) complex_types: Vec<ComplexType>,
    pub(crate) variadic_types: Vec<VariadicSubType>,
    pub(crate) template_classes: Vec<TemplateEntry>,
    pub(crate) template_functions: Vec<TemplateEntry>,
}

impl NamespaceHandler {
    pub fn new(interner: SharedInterner) -> Self {
        NamespaceHandler {
            interner,
            namespaces: Vec::new(),
            index: FxHashMap::default(),
            current: None,
            internal_symbol_mode: false,
            complex_types: Vec::new(),
            variadic_types: Vec::new(),
            template_classes: Vec::new(),
            template_functions: Vec::new(),
        }
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Drop every namespace, type and template.
    pub fn reset(&mut self) {
        debug!(namespaces = self.namespaces.len(), "resetting namespace table");
        self.namespaces.clear();
        self.index.clear();
        self.current = None;
        self.internal_symbol_mode = false;
        self.complex_types.clear();
        self.variadic_types.clear();
        self.template_classes.clear();
        self.template_functions.clear();
    }

    /// Render an identifier as `A::B::x`.
    pub fn render(&self, id: &NamespacedIdentifier) -> String {
        id.display(&self.interner).to_string()
    }

    // Arena access

    pub fn namespace(&self, ns: NamespaceId) -> Option<&Namespace> {
        self.namespaces.get(ns.index())
    }

    pub(crate) fn namespace_mut(&mut self, ns: NamespaceId) -> Option<&mut Namespace> {
        self.namespaces.get_mut(ns.index())
    }

    /// Look up a namespace by its exact id.
    pub fn find_namespace(&self, id: &NamespacedIdentifier) -> Option<NamespaceId> {
        self.index.get(id).copied()
    }

    pub fn current_namespace(&self) -> Option<NamespaceId> {
        self.current
    }

    /// Id of the current namespace; the root id when the table is empty.
    pub fn current_namespace_id(&self) -> NamespacedIdentifier {
        self.current
            .and_then(|ns| self.namespace(ns))
            .map_or_else(NamespacedIdentifier::root, |ns| ns.id.clone())
    }

    pub fn root_id(&self) -> NamespacedIdentifier {
        self.namespace(NamespaceId::ROOT)
            .map_or_else(NamespacedIdentifier::root, |ns| ns.id.clone())
    }

    /// Create the root if needed and return the cursor.
    pub(crate) fn ensure_current(&mut self) -> NamespaceId {
        if self.namespaces.is_empty() {
            self.namespaces.push(Namespace::new(
                NamespacedIdentifier::root(),
                None,
                self.internal_symbol_mode,
            ));
            self.index
                .insert(NamespacedIdentifier::root(), NamespaceId::ROOT);
            trace!("created root namespace");
        }
        *self.current.get_or_insert(NamespaceId::ROOT)
    }

    fn create_namespace(&mut self, id: NamespacedIdentifier, parent: NamespaceId) -> NamespaceId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "namespace count is bounded by the source size"
        )]
        let handle = NamespaceId::from_raw(self.namespaces.len() as u32);

        self.namespaces
            .push(Namespace::new(id.clone(), Some(parent), self.internal_symbol_mode));
        if let Some(parent) = self.namespace_mut(parent) {
            parent.children.push(handle);
        }
        debug!(namespace = %self.render(&id), "created namespace");
        self.index.insert(id, handle);
        handle
    }

    /// Find or create the namespace with exactly this id, creating missing
    /// ancestors. The cursor does not move.
    pub(crate) fn ensure_namespace(&mut self, id: &NamespacedIdentifier) -> NamespaceId {
        self.ensure_current();
        if let Some(existing) = self.find_namespace(id) {
            return existing;
        }
        let parent = self.ensure_namespace(&id.parent());
        self.create_namespace(id.clone(), parent)
    }

    // Cursor

    /// Enter a namespace, creating it if necessary.
    ///
    /// An existing namespace with exactly `id` is reused. Otherwise a
    /// single-segment id becomes a child of the current namespace and a
    /// qualified id enters its parent first.
    pub fn push_namespace(&mut self, id: &NamespacedIdentifier) -> NamespaceId {
        self.ensure_current();
        if let Some(existing) = self.find_namespace(id) {
            self.current = Some(existing);
            return existing;
        }

        if id.is_qualified() {
            self.push_namespace(&id.parent());
        }

        let parent = self.ensure_current();
        let child_id = self
            .namespace(parent)
            .map_or_else(|| id.clone(), |ns| ns.id.child(id.identifier()));
        let handle = match self.find_namespace(&child_id) {
            Some(existing) => existing,
            None => self.create_namespace(child_id, parent),
        };
        self.current = Some(handle);
        handle
    }

    /// Move the cursor to the parent namespace. Popping the root is a no-op.
    pub fn pop_namespace(&mut self) -> Result<(), NamespaceError> {
        let Some(current) = self.current else {
            return Ok(());
        };
        if current == NamespaceId::ROOT {
            return Ok(());
        }

        let ns = self.namespace(current).ok_or(NamespaceError::NoNamespace)?;
        match ns.parent {
            Some(parent) => {
                self.current = Some(parent);
                Ok(())
            }
            None => Err(NamespaceError::MissingParentLink {
                id: self.render(&ns.id),
            }),
        }
    }

    /// Run `f` with the cursor in the namespace with exactly the absolute
    /// id `id` (created if missing), then restore the previous cursor.
    pub fn with_namespace<R>(
        &mut self,
        id: &NamespacedIdentifier,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.current;
        self.current = Some(self.ensure_namespace(id));
        let result = f(self);
        self.current = if self.namespaces.is_empty() {
            None
        } else {
            saved
                .filter(|ns| ns.index() < self.namespaces.len())
                .or(Some(NamespaceId::ROOT))
        };
        result
    }

    /// New namespaces and symbols are marked internal while this is on.
    pub fn set_internal_symbol_mode(&mut self, enabled: bool) {
        self.internal_symbol_mode = enabled;
    }

    pub fn internal_symbol_mode(&self) -> bool {
        self.internal_symbol_mode
    }

    // Registration

    /// Register a symbol in the current namespace.
    ///
    /// `id` must be a direct child of the current namespace. Registering an
    /// id twice keeps the first alias.
    pub fn add_symbol(
        &mut self,
        id: &NamespacedIdentifier,
        type_info: TypeInfo,
        symbol_type: SymbolType,
    ) -> Result<(), NamespaceError> {
        let current = self.ensure_current();
        let current_id = self.current_namespace_id();
        if id.parent() != current_id {
            return Err(NamespaceError::ParentMismatch {
                id: self.render(id),
                current: self.render(&current_id),
            });
        }

        let alias = Alias::new(id.clone(), symbol_type, type_info)
            .with_internal(self.internal_symbol_mode);
        let added = self
            .namespace_mut(current)
            .ok_or(NamespaceError::NoNamespace)?
            .add_alias(alias);
        if added {
            debug!(symbol = %self.render(id), kind = %symbol_type, "added symbol");
        }
        Ok(())
    }

    /// Attach a value to a constant symbol of the current namespace.
    ///
    /// Numeric values are coerced to the symbol's primitive type.
    pub fn add_constant(
        &mut self,
        id: &NamespacedIdentifier,
        value: ConstantValue,
    ) -> Result<(), NamespaceError> {
        let current = self.current.ok_or(NamespaceError::NoNamespace)?;
        let rendered = self.render(id);

        let alias = self
            .namespace_mut(current)
            .and_then(|ns| ns.alias_mut(id))
            .ok_or_else(|| NamespaceError::SymbolNotFound {
                id: rendered.clone(),
            })?;
        if !alias.symbol_type.is_constant() {
            return Err(NamespaceError::SymbolTypeMismatch {
                id: rendered,
                expected: SymbolType::Constant,
                actual: alias.symbol_type,
            });
        }

        let value = match alias.type_info.primitive_type() {
            Some(target) if target.is_numeric() && target != value.primitive_type() => {
                value.coerce_to(target)
            }
            _ => value,
        };
        alias.constant_value = Some(value);
        trace!(symbol = %rendered, %value, "stored constant");
        Ok(())
    }

    /// Import the namespace `id` into the current namespace.
    pub fn add_used_namespace(&mut self, id: &NamespacedIdentifier) -> Result<(), NamespaceError> {
        let current = self.ensure_current();
        let target = self
            .find_namespace(id)
            .ok_or_else(|| NamespaceError::NamespaceNotFound {
                id: self.render(id),
            })?;
        if target == current {
            return Ok(());
        }

        let added = self
            .namespace_mut(current)
            .is_some_and(|ns| ns.add_used(target));
        if added {
            debug!(
                namespace = %self.render(&self.current_namespace_id()),
                used = %self.render(id),
                "added used namespace"
            );
        }
        Ok(())
    }

    // Queries

    /// The alias registered under exactly this id.
    pub fn alias(&self, id: &NamespacedIdentifier) -> Option<&Alias> {
        let ns = self.find_namespace(&id.parent())?;
        self.namespace(ns)?.alias(id)
    }

    pub(crate) fn alias_mut(&mut self, id: &NamespacedIdentifier) -> Option<&mut Alias> {
        let ns = self.find_namespace(&id.parent())?;
        self.namespace_mut(ns)?.alias_mut(id)
    }

    /// `SymbolType::Unknown` if there is no such symbol.
    pub fn symbol_type(&self, id: &NamespacedIdentifier) -> SymbolType {
        self.alias(id).map_or(SymbolType::Unknown, |a| a.symbol_type)
    }

    fn type_info_of(&self, id: &NamespacedIdentifier, kinds: &[SymbolType]) -> TypeInfo {
        self.alias(id)
            .filter(|a| kinds.contains(&a.symbol_type))
            .map_or_else(TypeInfo::dynamic, |a| a.type_info.clone())
    }

    /// Type of a struct, using alias or template type symbol.
    pub fn alias_type(&self, id: &NamespacedIdentifier) -> TypeInfo {
        self.type_info_of(id, ALIAS_TYPE_KINDS)
    }

    /// Type of a variable, constant, function or enum value symbol.
    pub fn variable_type(&self, id: &NamespacedIdentifier) -> TypeInfo {
        self.type_info_of(id, VARIABLE_TYPE_KINDS)
    }

    /// Value of a constant symbol, if one was stored.
    pub fn constant_value(&self, id: &NamespacedIdentifier) -> Option<ConstantValue> {
        self.alias(id)
            .filter(|a| a.symbol_type.is_constant())
            .and_then(|a| a.constant_value)
    }

    /// Replace the type of a symbol whose kind must be `expected`.
    pub fn set_type_info(
        &mut self,
        id: &NamespacedIdentifier,
        expected: SymbolType,
        type_info: TypeInfo,
    ) -> Result<(), NamespaceError> {
        let parent = id.parent();
        if self.find_namespace(&parent).is_none() {
            return Err(NamespaceError::NamespaceNotFound {
                id: self.render(&parent),
            });
        }

        let rendered = self.render(id);
        let alias = self
            .alias_mut(id)
            .ok_or_else(|| NamespaceError::SymbolNotFound {
                id: rendered.clone(),
            })?;
        if alias.symbol_type != expected {
            return Err(NamespaceError::SymbolTypeMismatch {
                id: rendered,
                expected,
                actual: alias.symbol_type,
            });
        }
        alias.type_info = type_info;
        Ok(())
    }

    /// Change the kind of a symbol after resolving `id`. Returns `false` if
    /// the symbol does not exist.
    pub fn change_symbol_type(&mut self, id: &NamespacedIdentifier, symbol_type: SymbolType) -> bool {
        let resolved = self.resolve_or_keep(id);
        match self.alias_mut(&resolved) {
            Some(alias) => {
                alias.symbol_type = symbol_type;
                true
            }
            None => false,
        }
    }

    pub fn is_namespace(&self, id: &NamespacedIdentifier) -> bool {
        self.index.contains_key(id)
    }

    pub fn is_static_function_class(&self, id: &NamespacedIdentifier) -> bool {
        self.symbol_type(id) == SymbolType::StaticFunctionClass
    }

    /// An `enum class` value: an enum value whose type is const.
    pub fn is_class_enum_value(&self, id: &NamespacedIdentifier) -> bool {
        self.alias(id)
            .is_some_and(|a| a.symbol_type == SymbolType::EnumValue && a.type_info.is_const())
    }

    pub fn is_template_type_argument(&self, id: &NamespacedIdentifier) -> bool {
        self.symbol_type(&self.resolve_or_keep(id)) == SymbolType::TemplateType
    }

    pub fn is_template_constant_argument(&self, id: &NamespacedIdentifier) -> bool {
        self.symbol_type(&self.resolve_or_keep(id)) == SymbolType::TemplateConstant
    }

    /// Whether `id` can name a namespace: unknown ids, and structs that own
    /// a namespace.
    pub fn root_has_namespace(&self, id: &NamespacedIdentifier) -> bool {
        let symbol_type = self.symbol_type(id);
        symbol_type == SymbolType::Unknown
            || (symbol_type == SymbolType::Struct && self.is_namespace(id))
    }

    // Rendering

    /// Human-readable type name (`const float&`, `span<int, 4>`).
    pub fn type_name(&self, type_info: &TypeInfo) -> String {
        let base = match type_info.kind() {
            TypeKind::Primitive(p) => p.as_str().to_owned(),
            TypeKind::Complex(handle) => self
                .complex_type_by_id(*handle)
                .map_or_else(|| format!("complex#{}", handle.raw()), |ty| self.complex_type_name(ty)),
            TypeKind::TemplateType(id) => self.render(id),
            TypeKind::Dynamic => "auto".to_owned(),
        };

        let mut name = String::new();
        if type_info.is_const() {
            name.push_str("const ");
        }
        name.push_str(&base);
        if type_info.is_ref() {
            name.push('&');
        }
        name
    }

    fn describe_alias(&self, alias: &Alias) -> String {
        let id = self.render(&alias.id);
        let ty = self.type_name(&alias.type_info);
        let value = alias.constant_value.unwrap_or_default();

        match alias.symbol_type {
            SymbolType::Struct => format!("struct {id}"),
            SymbolType::Function => format!("function {id}"),
            SymbolType::Variable => format!("{ty} {id}"),
            SymbolType::UsingAlias => format!("using {id} = {ty}"),
            SymbolType::Constant => format!("static {ty} {id} = {}", value.cpp_value_string()),
            SymbolType::StaticFunctionClass => format!("function class {id}"),
            SymbolType::TemplateType if alias.type_info.is_dynamic() => format!("typename {id}"),
            SymbolType::TemplateType => format!("typename {id} = {ty}"),
            SymbolType::TemplateConstant => format!("template int {id}"),
            SymbolType::TemplatedClass => format!("template struct {id}"),
            SymbolType::TemplatedFunction => format!("template function {id}"),
            SymbolType::PreprocessorConstant => format!("#define {id}={}", value.cpp_value_string()),
            SymbolType::Enum => format!("enum {id}"),
            SymbolType::EnumValue => format!("{id} = {value}"),
            SymbolType::Unknown => format!("unknown {id}"),
        }
    }

    /// Indented listing of every non-internal namespace and symbol.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if !self.namespaces.is_empty() {
            self.dump_namespace(NamespaceId::ROOT, 0, &mut out);
        }
        out
    }

    fn dump_namespace(&self, handle: NamespaceId, depth: usize, out: &mut String) {
        let Some(ns) = self.namespace(handle) else {
            return;
        };
        if ns.internal {
            return;
        }

        let indent = "  ".repeat(depth);
        let name = if ns.id.is_valid() {
            self.render(&ns.id)
        } else {
            "root".to_owned()
        };
        out.push_str(&format!("{indent}namespace {name}\n"));

        for used in ns.used.iter().filter_map(|&u| self.namespace(u)) {
            out.push_str(&format!("{indent}  using {}\n", self.render(&used.id)));
        }
        for alias in ns.aliases.iter().filter(|a| !a.internal) {
            out.push_str(&format!("{indent}  {}\n", self.describe_alias(alias)));
        }
        for &child in &ns.children {
            self.dump_namespace(child, depth + 1, out);
        }
    }
}
