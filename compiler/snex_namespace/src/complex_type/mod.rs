//! Complex type and variadic type registries.

use snex_ir::{ComplexTypeId, Name, NamespacedIdentifier, SymbolType, TypeInfo};
use tracing::debug;

use crate::template::TemplateConstructData;
use crate::{Alias, NamespaceHandler, TemplateParameter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructMember {
    pub name: Name,
    pub type_info: TypeInfo,
}

impl StructMember {
    pub fn new(name: Name, type_info: TypeInfo) -> Self {
        StructMember { name, type_info }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComplexTypeKind {
    Struct { members: Vec<StructMember> },
    /// Fixed-size array of `element`.
    Span { element: TypeInfo, size: u32 },
    /// Instantiation deferred until its open parameters are known.
    Templated { template_id: NamespacedIdentifier },
}

/// A struct, span or deferred template instance.
///
/// Two complex types match iff id, kind and instance parameters are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexType {
    pub id: NamespacedIdentifier,
    pub kind: ComplexTypeKind,
    pub template_parameters: Vec<TemplateParameter>,
}

impl ComplexType {
    pub fn structure(id: NamespacedIdentifier, members: Vec<StructMember>) -> Self {
        ComplexType {
            id,
            kind: ComplexTypeKind::Struct { members },
            template_parameters: Vec::new(),
        }
    }

    pub fn span(id: NamespacedIdentifier, element: TypeInfo, size: u32) -> Self {
        ComplexType {
            id,
            kind: ComplexTypeKind::Span { element, size },
            template_parameters: Vec::new(),
        }
    }

    /// Wrapper for an instantiation with open template parameters.
    pub fn templated(data: &TemplateConstructData) -> Self {
        ComplexType {
            id: data.id.clone(),
            kind: ComplexTypeKind::Templated {
                template_id: data.id.clone(),
            },
            template_parameters: data.parameters.clone(),
        }
    }

    /// Record the instance parameters unless the constructor already did.
    #[must_use]
    pub fn with_template_parameters(mut self, parameters: &[TemplateParameter]) -> Self {
        if self.template_parameters.is_empty() {
            self.template_parameters = parameters.to_vec();
        }
        self
    }

    pub fn matches_other_type(&self, other: &ComplexType) -> bool {
        self == other
    }

    pub fn is_templated(&self) -> bool {
        matches!(self.kind, ComplexTypeKind::Templated { .. })
    }

    pub fn members(&self) -> &[StructMember] {
        match &self.kind {
            ComplexTypeKind::Struct { members } => members,
            _ => &[],
        }
    }

    pub fn member(&self, name: Name) -> Option<&StructMember> {
        self.members().iter().find(|m| m.name == name)
    }
}

/// A function signature provided by a variadic template type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionData {
    pub id: NamespacedIdentifier,
    pub return_type: TypeInfo,
    pub args: Vec<TypeInfo>,
}

/// A variadic template type and the methods it provides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariadicSubType {
    pub variadic_id: NamespacedIdentifier,
    pub functions: Vec<FunctionData>,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "type count is bounded by the source size"
)]
fn handle_for(index: usize) -> ComplexTypeId {
    ComplexTypeId::from_raw(index as u32)
}

impl NamespaceHandler {
    /// Register `ty`, or return the id of an already registered type that
    /// matches it.
    ///
    /// Plain structs also get a `Struct` alias and their own namespace.
    pub fn register_complex_type_or_return_existing(&mut self, ty: ComplexType) -> ComplexTypeId {
        if let Some(index) = self
            .complex_types
            .iter()
            .position(|existing| existing.matches_other_type(&ty))
        {
            return handle_for(index);
        }

        let handle = handle_for(self.complex_types.len());

        if ty.template_parameters.is_empty()
            && matches!(ty.kind, ComplexTypeKind::Struct { .. })
            && ty.id.is_valid()
        {
            let parent = self.ensure_namespace(&ty.id.parent());
            self.ensure_namespace(&ty.id);
            let alias = Alias::new(ty.id.clone(), SymbolType::Struct, TypeInfo::complex(handle))
                .with_internal(self.internal_symbol_mode());
            if let Some(ns) = self.namespace_mut(parent) {
                ns.add_alias(alias);
            }
        }

        debug!(ty = %self.complex_type_name(&ty), handle = handle.raw(), "registered complex type");
        self.complex_types.push(ty);
        handle
    }

    /// First registered type with this id, after resolving it.
    pub fn complex_type(&self, id: &NamespacedIdentifier) -> Option<ComplexTypeId> {
        let resolved = self.resolve_or_keep(id);
        self.complex_types
            .iter()
            .position(|t| t.id == resolved)
            .map(handle_for)
    }

    pub fn complex_type_by_id(&self, handle: ComplexTypeId) -> Option<&ComplexType> {
        self.complex_types.get(handle.index())
    }

    /// `span<float, 4>` style name of a registered or candidate type.
    pub fn complex_type_name(&self, ty: &ComplexType) -> String {
        let mut name = self.render(&ty.id);
        if ty.template_parameters.is_empty() {
            return name;
        }

        let parameters: Vec<String> = ty
            .template_parameters
            .iter()
            .map(|p| match p {
                TemplateParameter::Type(t) => self.type_name(t),
                TemplateParameter::Constant(c) => c.to_string(),
                TemplateParameter::TypeArgument { id, .. }
                | TemplateParameter::ConstantArgument { id, .. } => self.render(id),
            })
            .collect();
        name.push('<');
        name.push_str(&parameters.join(", "));
        name.push('>');
        name
    }

    /// Register a variadic type; an id already registered is kept.
    pub fn register_variadic_type(&mut self, variadic: VariadicSubType) {
        if self
            .variadic_types
            .iter()
            .any(|v| v.variadic_id == variadic.variadic_id)
        {
            return;
        }
        debug!(
            variadic = %self.render(&variadic.variadic_id),
            functions = variadic.functions.len(),
            "registered variadic type"
        );
        self.variadic_types.push(variadic);
    }

    pub fn variadic_type_for_id(&self, id: &NamespacedIdentifier) -> Option<&VariadicSubType> {
        let resolved = self.resolve_or_keep(id);
        self.variadic_types
            .iter()
            .find(|v| v.variadic_id == resolved)
    }

    /// True if `function_id` is a method provided by a variadic type.
    pub fn is_templated_method(&self, function_id: &NamespacedIdentifier) -> bool {
        let resolved = self.resolve_or_keep(function_id);
        self.variadic_types
            .iter()
            .flat_map(|v| &v.functions)
            .any(|f| f.id == resolved)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
