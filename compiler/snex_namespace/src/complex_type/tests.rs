use pretty_assertions::assert_eq;
use snex_ir::{PrimitiveType, SharedInterner};

use super::*;

fn setup() -> NamespaceHandler {
    NamespaceHandler::new(SharedInterner::new())
}

fn id(handler: &NamespaceHandler, s: &str) -> NamespacedIdentifier {
    NamespacedIdentifier::parse(s, handler.interner())
}

fn point(h: &NamespaceHandler) -> ComplexType {
    let float: TypeInfo = PrimitiveType::Float.into();
    ComplexType::structure(
        id(h, "geo::Point"),
        vec![
            StructMember::new(h.interner().intern("x"), float.clone()),
            StructMember::new(h.interner().intern("y"), float),
        ],
    )
}

#[test]
fn structurally_equal_types_are_registered_once() {
    let mut h = setup();
    let first = h.register_complex_type_or_return_existing(point(&h));
    let second = h.register_complex_type_or_return_existing(point(&h));

    assert_eq!(first, second);
    assert_eq!(h.complex_types.len(), 1);
}

#[test]
fn plain_struct_gets_alias_and_namespace() {
    let mut h = setup();
    let handle = h.register_complex_type_or_return_existing(point(&h));
    let point_id = id(&h, "geo::Point");

    assert_eq!(h.symbol_type(&point_id), SymbolType::Struct);
    assert_eq!(h.alias_type(&point_id), TypeInfo::complex(handle));
    assert!(h.is_namespace(&point_id));
    assert!(h.root_has_namespace(&point_id));
    assert_eq!(h.complex_type(&point_id), Some(handle));
}

#[test]
fn struct_members_are_looked_up_by_name() {
    let mut h = setup();
    let handle = h.register_complex_type_or_return_existing(point(&h));
    let ty = h.complex_type_by_id(handle).unwrap();

    assert_eq!(ty.members().len(), 2);
    let y = h.interner().intern("y");
    assert_eq!(ty.member(y).map(|m| m.name), Some(y));
    assert!(ty.member(h.interner().intern("z")).is_none());
}

#[test]
fn complex_type_resolves_relative_ids() {
    let mut h = setup();
    let handle = h.register_complex_type_or_return_existing(point(&h));
    h.push_namespace(&id(&h, "geo"));

    assert_eq!(h.complex_type(&id(&h, "Point")), Some(handle));
    assert_eq!(h.complex_type(&id(&h, "Line")), None);
}

#[test]
fn template_instance_names_list_parameters() {
    let mut h = setup();
    let ty = ComplexType::span(id(&h, "span"), PrimitiveType::Float.into(), 4).with_template_parameters(&[
        TemplateParameter::Type(PrimitiveType::Float.into()),
        TemplateParameter::Constant(4),
    ]);
    let handle = h.register_complex_type_or_return_existing(ty);

    assert_eq!(h.type_name(&TypeInfo::complex(handle)), "span<float, 4>");
    assert_eq!(h.symbol_type(&id(&h, "span")), SymbolType::Unknown);
}

#[test]
fn variadic_types_expose_their_methods() {
    let mut h = setup();
    h.push_namespace(&id(&h, "container"));
    h.pop_namespace().unwrap();
    let process = id(&h, "container::chain::process");
    h.register_variadic_type(VariadicSubType {
        variadic_id: id(&h, "container::chain"),
        functions: vec![FunctionData {
            id: process.clone(),
            return_type: PrimitiveType::Void.into(),
            args: vec![PrimitiveType::Float.into()],
        }],
    });
    h.register_variadic_type(VariadicSubType {
        variadic_id: id(&h, "container::chain"),
        functions: Vec::new(),
    });

    let chain = h.variadic_type_for_id(&id(&h, "container::chain")).unwrap();
    assert_eq!(chain.functions.len(), 1);
    assert!(h.is_templated_method(&process));
    assert!(!h.is_templated_method(&id(&h, "container::chain::reset")));
}
