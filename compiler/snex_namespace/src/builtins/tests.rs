use snex_ir::{PrimitiveType, SymbolType, TypeInfo};

use super::*;
use crate::ComplexTypeKind;

#[test]
fn span_template_is_registered_at_root() {
    let mut h = NamespaceHandler::new(snex_ir::SharedInterner::new());
    register_builtin_templates(&mut h).unwrap();
    let span = NamespacedIdentifier::parse("span", h.interner());

    assert_eq!(h.symbol_type(&span), SymbolType::TemplatedClass);
    assert!(h.is_template_class(&span));
    assert_eq!(h.template_object(&span).unwrap().arguments.len(), 2);
}

#[test]
fn span_instances_carry_element_and_size() {
    let mut h = NamespaceHandler::new(snex_ir::SharedInterner::new());
    register_builtin_templates(&mut h).unwrap();
    let span = NamespacedIdentifier::parse("span", h.interner());

    let handle = h
        .create_template_instantiation(
            &span,
            &[
                TemplateParameter::Type(PrimitiveType::Integer.into()),
                TemplateParameter::Constant(3),
            ],
        )
        .unwrap();
    let ty = h.complex_type_by_id(handle).unwrap();

    assert_eq!(
        ty.kind,
        ComplexTypeKind::Span {
            element: TypeInfo::primitive(PrimitiveType::Integer),
            size: 3,
        }
    );
}

#[test]
fn span_size_must_be_positive() {
    let mut h = NamespaceHandler::new(snex_ir::SharedInterner::new());
    register_builtin_templates(&mut h).unwrap();
    let span = NamespacedIdentifier::parse("span", h.interner());

    let err = h
        .create_template_instantiation(
            &span,
            &[
                TemplateParameter::Type(PrimitiveType::Float.into()),
                TemplateParameter::Constant(0),
            ],
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Can't instantiate span: span size must be a positive constant"
    );
}
