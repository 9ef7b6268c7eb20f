//! Whole frontend runs.

use pretty_assertions::assert_eq;
use snex_compiler::{CompilerConfig, Pass, Scope, Statement, StatementKind, SyntaxTree};
use snex_ir::{ConstantValue, PrimitiveType, Span, SymbolType, TypeInfo};
use snex_namespace::{ComplexTypeKind, TemplateParameter};

use crate::common::Fixture;

#[test]
fn auto_variable_gets_its_type_from_the_initializer() {
    let mut f = Fixture::new();
    let mut tree = SyntaxTree::new(
        "",
        vec![Statement::variable(
            f.name("x"),
            TypeInfo::dynamic(),
            Some(Statement::immediate(ConstantValue::Float(1.5), Span::DUMMY)),
            Span::DUMMY,
        )],
    );

    f.compiler.run_frontend_passes(&Scope::root(), &mut tree).unwrap();

    assert_eq!(
        f.compiler.handler().variable_type(&f.id("x")),
        TypeInfo::primitive(PrimitiveType::Float)
    );
    assert_eq!(f.compiler.current_pass(), Some(Pass::PreCodeGenerationOptimization));
}

#[test]
fn sessions_do_not_share_namespace_state() {
    let mut first = Fixture::new();
    let mut second = Fixture::new();

    let mut tree = SyntaxTree::new(
        "",
        vec![Statement::namespace_block(
            first.name("A"),
            vec![Statement::variable(
                first.name("x"),
                PrimitiveType::Integer.into(),
                None,
                Span::DUMMY,
            )],
            Span::DUMMY,
        )],
    );
    first
        .compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut tree)
        .unwrap();

    assert_eq!(first.compiler.handler().symbol_type(&first.id("A::x")), SymbolType::Variable);
    assert_eq!(second.compiler.handler().symbol_type(&second.id("A::x")), SymbolType::Unknown);

    let mut lookup = SyntaxTree::new("x", vec![Statement::symbol(second.id("A::x"), Span::new(0, 1))]);
    let err = second
        .compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut lookup)
        .unwrap_err();
    assert_eq!(err.to_string(), "A::x can't be resolved");
}

#[test]
fn span_instances_are_shared_between_declarations() {
    let mut f = Fixture::new();
    let span = f.id("span");
    let parameters = [
        TemplateParameter::Type(PrimitiveType::Float.into()),
        TemplateParameter::Constant(4),
    ];

    let handler = f.compiler.handler_mut();
    let first = handler.create_template_instantiation(&span, &parameters).unwrap();
    let second = handler.create_template_instantiation(&span, &parameters).unwrap();
    assert_eq!(first, second);

    let ty = f.compiler.handler().complex_type_by_id(first).unwrap();
    assert!(matches!(ty.kind, ComplexTypeKind::Span { size: 4, .. }));
    assert_eq!(f.compiler.handler().complex_type_name(ty), "span<float, 4>");

    let mut tree = SyntaxTree::new(
        "",
        vec![Statement::variable(f.name("v"), TypeInfo::complex(first), None, Span::DUMMY)],
    );
    f.compiler.run_frontend_passes(&Scope::root(), &mut tree).unwrap();
    assert_eq!(f.compiler.handler().variable_type(&f.id("v")), TypeInfo::complex(first));
}

#[test]
fn reset_forgets_user_symbols() {
    let mut f = Fixture::with_config(CompilerConfig::default().with_dump_namespaces(true));
    let mut tree = SyntaxTree::new(
        "",
        vec![Statement::variable(
            f.name("x"),
            PrimitiveType::Integer.into(),
            None,
            Span::DUMMY,
        )],
    );
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut tree)
        .unwrap();
    assert!(matches!(
        tree.statements()[0].kind,
        StatementKind::VariableDefinition { .. }
    ));

    f.compiler.reset().unwrap();

    assert_eq!(f.compiler.handler().symbol_type(&f.id("x")), SymbolType::Unknown);
    assert!(f.compiler.handler().is_template_class(&f.id("span")));
    assert_eq!(f.compiler.current_pass(), None);
}
