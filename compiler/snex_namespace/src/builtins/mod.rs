//! Templates every SNEX program can use.

use snex_ir::{NamespacedIdentifier, StringInterner};

use crate::{ComplexType, NamespaceError, NamespaceHandler, TemplateObject, TemplateParameter};

/// Register the built-in class templates (`span<T, NumElements>`).
pub fn register_builtin_templates(handler: &mut NamespaceHandler) -> Result<(), NamespaceError> {
    let interner = handler.interner().clone();
    handler.add_template_class(span_template(&interner))
}

fn span_template(interner: &StringInterner) -> TemplateObject {
    let id = NamespacedIdentifier::parse("span", interner);
    let element = id.child(interner.intern("DataType"));
    let size = id.child(interner.intern("NumElements"));

    TemplateObject::class(
        id,
        vec![
            TemplateParameter::type_argument(element),
            TemplateParameter::constant_argument(size),
        ],
        |handler, data| {
            let invalid = |reason: &str| NamespaceError::TemplateConstruction {
                id: handler.render(&data.id),
                reason: reason.to_owned(),
            };
            let element = data
                .type_parameter(0)
                .cloned()
                .ok_or_else(|| invalid("span needs an element type"))?;
            let size = data
                .constant_parameter(1)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|&n| n > 0)
                .ok_or_else(|| invalid("span size must be a positive constant"))?;
            Ok(ComplexType::span(data.id.clone(), element, size))
        },
    )
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
