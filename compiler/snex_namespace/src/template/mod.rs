//! Template class and function registry.
//!
//! A template is registered with its declared argument list and a
//! construction callback. Instantiation checks and completes the concrete
//! parameters, runs the callback and deduplicates the resulting type.

use std::fmt;
use std::rc::Rc;

use snex_ir::{ComplexTypeId, NamespacedIdentifier, SymbolType, TypeInfo};
use tracing::{debug, trace};

use crate::{Alias, ComplexType, NamespaceError, NamespaceHandler};

/// A declared template argument or a concrete template parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateParameter {
    /// `typename T` slot, optionally with a default type.
    TypeArgument {
        id: NamespacedIdentifier,
        default: Option<TypeInfo>,
    },
    /// `int N` slot, optionally with a default value.
    ConstantArgument {
        id: NamespacedIdentifier,
        default: Option<i32>,
    },
    /// Concrete type for a `TypeArgument`.
    Type(TypeInfo),
    /// Concrete value for a `ConstantArgument`.
    Constant(i32),
}

impl TemplateParameter {
    pub fn type_argument(id: NamespacedIdentifier) -> Self {
        TemplateParameter::TypeArgument { id, default: None }
    }

    pub fn constant_argument(id: NamespacedIdentifier) -> Self {
        TemplateParameter::ConstantArgument { id, default: None }
    }

    /// A declared slot.
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            TemplateParameter::TypeArgument { .. } | TemplateParameter::ConstantArgument { .. }
        )
    }

    /// A concrete value.
    pub fn is_parameter(&self) -> bool {
        !self.is_argument()
    }

    /// A concrete type that is itself still an open template type.
    pub fn is_open_template_type(&self) -> bool {
        matches!(self, TemplateParameter::Type(t) if t.is_template_type())
    }

    pub fn argument_id(&self) -> Option<&NamespacedIdentifier> {
        match self {
            TemplateParameter::TypeArgument { id, .. }
            | TemplateParameter::ConstantArgument { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_argument_list(list: &[TemplateParameter]) -> bool {
        list.iter().all(TemplateParameter::is_argument)
    }

    pub fn is_parameter_list(list: &[TemplateParameter]) -> bool {
        list.iter().all(TemplateParameter::is_parameter)
    }

    fn default_parameter(&self) -> Option<TemplateParameter> {
        match self {
            TemplateParameter::TypeArgument { default, .. } => {
                default.clone().map(TemplateParameter::Type)
            }
            TemplateParameter::ConstantArgument { default, .. } => {
                default.map(TemplateParameter::Constant)
            }
            _ => None,
        }
    }

    fn accepts(&self, parameter: &TemplateParameter) -> bool {
        matches!(
            (self, parameter),
            (TemplateParameter::TypeArgument { .. }, TemplateParameter::Type(_))
                | (TemplateParameter::ConstantArgument { .. }, TemplateParameter::Constant(_))
        )
    }
}

/// What a construction callback receives.
#[derive(Clone, Debug)]
pub struct TemplateConstructData {
    pub id: NamespacedIdentifier,
    /// Effective declared arguments, enclosing templates first.
    pub arguments: Vec<TemplateParameter>,
    /// One concrete parameter per argument, defaults filled in.
    pub parameters: Vec<TemplateParameter>,
}

impl TemplateConstructData {
    pub fn type_parameter(&self, index: usize) -> Option<&TypeInfo> {
        match self.parameters.get(index)? {
            TemplateParameter::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn constant_parameter(&self, index: usize) -> Option<i32> {
        match self.parameters.get(index)? {
            TemplateParameter::Constant(c) => Some(*c),
            _ => None,
        }
    }

    /// The parameter bound to the argument named `id`.
    pub fn parameter_for(&self, id: &NamespacedIdentifier) -> Option<&TemplateParameter> {
        let index = self
            .arguments
            .iter()
            .position(|a| a.argument_id() == Some(id))?;
        self.parameters.get(index)
    }
}

pub type ClassConstructor =
    Rc<dyn Fn(&mut NamespaceHandler, &TemplateConstructData) -> Result<ComplexType, NamespaceError>>;
pub type FunctionConstructor =
    Rc<dyn Fn(&mut NamespaceHandler, &TemplateConstructData) -> Result<(), NamespaceError>>;

#[derive(Clone)]
pub enum TemplateConstructor {
    Class(ClassConstructor),
    Function(FunctionConstructor),
}

/// A registered template.
#[derive(Clone)]
pub struct TemplateObject {
    pub id: NamespacedIdentifier,
    pub arguments: Vec<TemplateParameter>,
    pub constructor: TemplateConstructor,
}

impl TemplateObject {
    pub fn class(
        id: NamespacedIdentifier,
        arguments: Vec<TemplateParameter>,
        construct: impl Fn(&mut NamespaceHandler, &TemplateConstructData) -> Result<ComplexType, NamespaceError>
            + 'static,
    ) -> Self {
        TemplateObject {
            id,
            arguments,
            constructor: TemplateConstructor::Class(Rc::new(construct)),
        }
    }

    pub fn function(
        id: NamespacedIdentifier,
        arguments: Vec<TemplateParameter>,
        construct: impl Fn(&mut NamespaceHandler, &TemplateConstructData) -> Result<(), NamespaceError>
            + 'static,
    ) -> Self {
        TemplateObject {
            id,
            arguments,
            constructor: TemplateConstructor::Function(Rc::new(construct)),
        }
    }
}

impl fmt::Debug for TemplateObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.constructor {
            TemplateConstructor::Class(_) => "class",
            TemplateConstructor::Function(_) => "function",
        };
        f.debug_struct("TemplateObject")
            .field("id", &self.id)
            .field("arguments", &self.arguments)
            .field("kind", &kind)
            .finish()
    }
}

/// Registry slot: the template with its effective arguments plus the
/// arguments it declared itself.
#[derive(Clone, Debug)]
pub(crate) struct TemplateEntry {
    pub(crate) object: TemplateObject,
    declared: Vec<TemplateParameter>,
}

/// Recompute every effective argument list: the declared arguments of all
/// enclosing templates, outermost first, followed by the template's own.
fn inherit_enclosing_arguments(entries: &mut [TemplateEntry]) {
    let declared: Vec<(NamespacedIdentifier, Vec<TemplateParameter>)> = entries
        .iter()
        .map(|e| (e.object.id.clone(), e.declared.clone()))
        .collect();

    for entry in entries.iter_mut() {
        let mut enclosing: Vec<&(NamespacedIdentifier, Vec<TemplateParameter>)> = declared
            .iter()
            .filter(|(id, _)| id.is_parent_of(&entry.object.id))
            .collect();
        enclosing.sort_by_key(|(id, _)| id.depth());

        let mut arguments: Vec<TemplateParameter> = enclosing
            .into_iter()
            .flat_map(|(_, args)| args.iter().cloned())
            .collect();
        arguments.extend(entry.declared.iter().cloned());
        entry.object.arguments = arguments;
    }
}

impl NamespaceHandler {
    /// Register a class template.
    ///
    /// Templates nested in other class templates inherit their arguments,
    /// regardless of registration order. Registering an id twice is a no-op.
    #[tracing::instrument(level = "debug", skip_all, fields(template = %self.render(&template.id)))]
    pub fn add_template_class(&mut self, template: TemplateObject) -> Result<(), NamespaceError> {
        if !matches!(template.constructor, TemplateConstructor::Class(_))
            || !TemplateParameter::is_argument_list(&template.arguments)
        {
            return Err(NamespaceError::InvalidTemplateArguments {
                id: self.render(&template.id),
            });
        }
        if self.template_classes.iter().any(|e| e.object.id == template.id) {
            trace!("template class already registered");
            return Ok(());
        }

        self.add_template_alias(&template.id, SymbolType::TemplatedClass);
        let declared = template.arguments.clone();
        self.template_classes.push(TemplateEntry {
            object: template,
            declared,
        });
        inherit_enclosing_arguments(&mut self.template_classes);
        debug!(count = self.template_classes.len(), "registered template class");
        Ok(())
    }

    /// Register a function template.
    #[tracing::instrument(level = "debug", skip_all, fields(template = %self.render(&template.id)))]
    pub fn add_template_function(&mut self, template: TemplateObject) -> Result<(), NamespaceError> {
        if !matches!(template.constructor, TemplateConstructor::Function(_))
            || !TemplateParameter::is_argument_list(&template.arguments)
        {
            return Err(NamespaceError::InvalidTemplateArguments {
                id: self.render(&template.id),
            });
        }
        if self.template_functions.iter().any(|e| e.object.id == template.id) {
            trace!("template function already registered");
            return Ok(());
        }

        self.add_template_alias(&template.id, SymbolType::TemplatedFunction);
        let declared = template.arguments.clone();
        self.template_functions.push(TemplateEntry {
            object: template,
            declared,
        });
        debug!(count = self.template_functions.len(), "registered template function");
        Ok(())
    }

    fn add_template_alias(&mut self, id: &NamespacedIdentifier, symbol_type: SymbolType) {
        let parent = self.ensure_namespace(&id.parent());
        let alias =
            Alias::new(id.clone(), symbol_type, TypeInfo::dynamic()).with_internal(self.internal_symbol_mode());
        if let Some(ns) = self.namespace_mut(parent) {
            ns.add_alias(alias);
        }
    }

    /// The registered class or function template with exactly this id.
    pub fn template_object(&self, id: &NamespacedIdentifier) -> Option<&TemplateObject> {
        self.template_classes
            .iter()
            .chain(&self.template_functions)
            .map(|e| &e.object)
            .find(|t| t.id == *id)
    }

    pub fn is_template_class(&self, id: &NamespacedIdentifier) -> bool {
        let resolved = self.resolve_or_keep(id);
        self.template_classes.iter().any(|e| e.object.id == resolved)
    }

    pub fn is_template_function(&self, id: &NamespacedIdentifier) -> bool {
        let resolved = self.resolve_or_keep(id);
        self.template_functions
            .iter()
            .any(|e| e.object.id == resolved)
    }

    /// Match concrete parameters against the declared arguments, filling in
    /// trailing defaults.
    fn complete_parameters(
        &self,
        template: &TemplateObject,
        parameters: &[TemplateParameter],
    ) -> Result<Vec<TemplateParameter>, NamespaceError> {
        let id = || self.render(&template.id);
        if !TemplateParameter::is_parameter_list(parameters) {
            return Err(NamespaceError::InvalidTemplateArguments { id: id() });
        }
        if parameters.len() > template.arguments.len() {
            return Err(NamespaceError::TemplateConstruction {
                id: id(),
                reason: format!(
                    "expected {} template parameters, got {}",
                    template.arguments.len(),
                    parameters.len()
                ),
            });
        }

        let mut completed = Vec::with_capacity(template.arguments.len());
        for (index, argument) in template.arguments.iter().enumerate() {
            let argument_name = || {
                argument
                    .argument_id()
                    .map_or_else(String::new, |a| self.render(a))
            };
            let parameter = parameters
                .get(index)
                .cloned()
                .or_else(|| argument.default_parameter())
                .ok_or_else(|| NamespaceError::TemplateConstruction {
                    id: id(),
                    reason: format!("missing template parameter {}", argument_name()),
                })?;
            if !argument.accepts(&parameter) {
                return Err(NamespaceError::TemplateConstruction {
                    id: id(),
                    reason: format!("template parameter mismatch for {}", argument_name()),
                });
            }
            completed.push(parameter);
        }
        Ok(completed)
    }

    /// Instantiate a class template and return the registered type.
    ///
    /// If a parameter is still an open template type the instantiation is
    /// deferred: a `Templated` wrapper is registered instead of running the
    /// constructor. Equal instantiations share one `ComplexTypeId`.
    #[tracing::instrument(level = "debug", skip_all, fields(template = %self.render(id)))]
    pub fn create_template_instantiation(
        &mut self,
        id: &NamespacedIdentifier,
        parameters: &[TemplateParameter],
    ) -> Result<ComplexTypeId, NamespaceError> {
        let template = self
            .template_classes
            .iter()
            .find(|e| e.object.id == *id)
            .map(|e| e.object.clone())
            .ok_or_else(|| NamespaceError::TemplateClassNotFound {
                id: self.render(id),
            })?;
        let TemplateConstructor::Class(construct) = &template.constructor else {
            return Err(NamespaceError::InvalidTemplateArguments {
                id: self.render(id),
            });
        };

        let data = TemplateConstructData {
            id: template.id.clone(),
            arguments: template.arguments.clone(),
            parameters: self.complete_parameters(&template, parameters)?,
        };

        let instance = if data
            .parameters
            .iter()
            .any(TemplateParameter::is_open_template_type)
        {
            debug!("deferring instantiation with open template parameters");
            ComplexType::templated(&data)
        } else {
            construct(self, &data)?.with_template_parameters(&data.parameters)
        };
        Ok(self.register_complex_type_or_return_existing(instance))
    }

    /// Instantiate a function template; the callback registers the function.
    #[tracing::instrument(level = "debug", skip_all, fields(template = %self.render(id)))]
    pub fn create_template_function(
        &mut self,
        id: &NamespacedIdentifier,
        parameters: &[TemplateParameter],
    ) -> Result<(), NamespaceError> {
        let template = self
            .template_functions
            .iter()
            .find(|e| e.object.id == *id)
            .map(|e| e.object.clone())
            .ok_or_else(|| NamespaceError::TemplateFunctionNotFound {
                id: self.render(id),
            })?;
        let TemplateConstructor::Function(construct) = &template.constructor else {
            return Err(NamespaceError::InvalidTemplateArguments {
                id: self.render(id),
            });
        };

        let data = TemplateConstructData {
            id: template.id.clone(),
            arguments: template.arguments.clone(),
            parameters: self.complete_parameters(&template, parameters)?,
        };
        construct(self, &data)
    }
}
