//! Symbol resolution through the pass driver.

use pretty_assertions::assert_eq;
use snex_compiler::{Pass, Scope, Statement, StatementKind, SyntaxTree};
use snex_ir::{ConstantValue, PrimitiveType, Span, SymbolType};
use snex_namespace::{NamespaceError, NamespaceId};

use crate::common::Fixture;

fn int_var(f: &Fixture, name: &str, value: i32) -> Statement {
    Statement::variable(
        f.name(name),
        PrimitiveType::Integer.into(),
        Some(Statement::immediate(ConstantValue::Integer(value), Span::DUMMY)),
        Span::DUMMY,
    )
}

/// The `SymbolRef` at `path` (indices into nested namespace bodies).
fn symbol_at<'a>(statements: &'a [Statement], path: &[usize]) -> &'a StatementKind {
    let (first, rest) = path.split_first().unwrap();
    let statement = &statements[*first];
    match (&statement.kind, rest.is_empty()) {
        (kind, true) => kind,
        (StatementKind::NamespaceBlock { body, .. }, false) => symbol_at(body, rest),
        _ => panic!("path leaves the namespace blocks"),
    }
}

#[test]
fn innermost_definition_shadows_outer_ones() {
    let mut f = Fixture::new();
    // namespace A { int x = 1; namespace B { int x = 2; namespace C { x; } x; } }
    let inner_c = Statement::namespace_block(
        f.name("C"),
        vec![Statement::symbol(f.id("x"), Span::DUMMY)],
        Span::DUMMY,
    );
    let block_b = Statement::namespace_block(
        f.name("B"),
        vec![int_var(&f, "x", 2), inner_c, Statement::symbol(f.id("x"), Span::DUMMY)],
        Span::DUMMY,
    );
    let block_a = Statement::namespace_block(f.name("A"), vec![int_var(&f, "x", 1), block_b], Span::DUMMY);
    let mut tree = SyntaxTree::new("", vec![block_a]);

    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut tree)
        .unwrap();

    let expected = StatementKind::SymbolRef(f.id("A::B::x"));
    assert_eq!(symbol_at(tree.statements(), &[0, 1, 1, 0]), &expected);
    assert_eq!(symbol_at(tree.statements(), &[0, 1, 2]), &expected);
}

#[test]
fn imports_with_the_same_name_are_ambiguous() {
    let mut f = Fixture::new();
    let mut setup = SyntaxTree::new(
        "",
        vec![
            Statement::namespace_block(f.name("B"), vec![int_var(&f, "x", 1)], Span::DUMMY),
            Statement::namespace_block(f.name("C"), vec![int_var(&f, "x", 2)], Span::DUMMY),
        ],
    );
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut setup)
        .unwrap();

    let (a, b, c) = (f.id("A"), f.id("B"), f.id("C"));
    let handler = f.compiler.handler_mut();
    handler.with_namespace(&a, |h| {
        h.add_used_namespace(&b).unwrap();
        h.add_used_namespace(&c).unwrap();
    });

    let mut tree = SyntaxTree::new("x", vec![Statement::symbol(f.id("x"), Span::new(0, 1))]);
    let err = f
        .compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::new(a), &mut tree)
        .unwrap_err();

    assert_eq!(err.to_string(), "x is ambiguous");
    assert_eq!(err.span(), Span::new(0, 1));
    assert!(matches!(
        err,
        snex_compiler::CompileError::Namespace {
            source: NamespaceError::Ambiguous { .. },
            ..
        }
    ));
}

#[test]
fn nested_namespace_is_found_relative_to_the_scope() {
    let mut f = Fixture::new();
    let mut setup = SyntaxTree::new(
        "",
        vec![Statement::namespace_block(
            f.name("A"),
            vec![Statement::namespace_block(f.name("B"), vec![int_var(&f, "x", 1)], Span::DUMMY)],
            Span::DUMMY,
        )],
    );
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut setup)
        .unwrap();

    let mut tree = SyntaxTree::new("B::x", vec![Statement::symbol(f.id("B::x"), Span::new(0, 4))]);
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::new(f.id("A")), &mut tree)
        .unwrap();

    assert_eq!(tree.statements()[0].kind, StatementKind::SymbolRef(f.id("A::B::x")));
    assert_eq!(f.compiler.handler().symbol_type(&f.id("A::B::x")), SymbolType::Variable);
}

#[test]
fn redefinition_keeps_the_first_symbol() {
    let mut f = Fixture::new();
    let mut tree = SyntaxTree::new("", vec![int_var(&f, "x", 1), int_var(&f, "x", 2)]);

    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut tree)
        .unwrap();

    let aliases = f.compiler.handler().namespace(NamespaceId::ROOT).unwrap().aliases();
    assert_eq!(aliases.iter().filter(|a| a.id == f.id("x")).count(), 1);
}

#[test]
fn root_import_reaches_nested_scopes() {
    let mut f = Fixture::new();
    let mut setup = SyntaxTree::new(
        "",
        vec![Statement::namespace_block(f.name("B"), vec![int_var(&f, "x", 1)], Span::DUMMY)],
    );
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut setup)
        .unwrap();
    let (root, b) = (f.id(""), f.id("B"));
    f.compiler
        .handler_mut()
        .with_namespace(&root, |h| h.add_used_namespace(&b))
        .unwrap();

    let mut tree = SyntaxTree::new("x", vec![Statement::symbol(f.id("x"), Span::new(0, 1))]);
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::new(f.id("A")), &mut tree)
        .unwrap();

    assert_eq!(tree.statements()[0].kind, StatementKind::SymbolRef(f.id("B::x")));
}
