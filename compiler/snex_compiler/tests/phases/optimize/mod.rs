//! Optimization phases over whole syntax trees.

use pretty_assertions::assert_eq;
use snex_compiler::{BinaryOperator, CompilerConfig, Pass, Scope, Statement, StatementKind, SyntaxTree};
use snex_ir::{ConstantValue, PrimitiveType, Span, SymbolType};

use crate::common::{span_of, Fixture};

const SOURCE: &str = "const int a = 1 + 2;\nif (0) { a = 2; }\nint b = 4 * 2;\n";

fn int(value: i32, span: Span) -> Statement {
    Statement::immediate(ConstantValue::Integer(value), span)
}

fn last_char(span: Span) -> Span {
    Span::new(span.end - 1, span.end)
}

/// The three statements of `SOURCE`.
fn program(f: &Fixture) -> SyntaxTree {
    let a = Statement::constant(
        f.name("a"),
        PrimitiveType::Integer.into(),
        Statement::binary(
            BinaryOperator::Add,
            int(1, span_of(SOURCE, "1")),
            int(2, span_of(SOURCE, "2;")),
            span_of(SOURCE, "1 + 2"),
        ),
        span_of(SOURCE, "const int a = 1 + 2;"),
    );
    let dead = Statement::if_then(
        int(0, span_of(SOURCE, "0")),
        Statement::block(
            vec![Statement::assign(
                f.id("a"),
                int(2, span_of(SOURCE, "2; }")),
                span_of(SOURCE, "a = 2;"),
            )],
            span_of(SOURCE, "{ a = 2; }"),
        ),
        span_of(SOURCE, "if (0) { a = 2; }"),
    );
    let b = Statement::variable(
        f.name("b"),
        PrimitiveType::Integer.into(),
        Some(Statement::binary(
            BinaryOperator::Mul,
            int(4, span_of(SOURCE, "4")),
            int(2, last_char(span_of(SOURCE, "4 * 2"))),
            span_of(SOURCE, "4 * 2"),
        )),
        span_of(SOURCE, "int b = 4 * 2;"),
    );
    SyntaxTree::new(SOURCE, vec![a, dead, b])
}

fn init_value(statement: &Statement) -> Option<ConstantValue> {
    match &statement.kind {
        StatementKind::VariableDefinition { init: Some(init), .. } => init.constant_value(),
        _ => None,
    }
}

#[test]
fn removed_code_does_not_stop_the_phase() {
    let mut f = Fixture::new();
    let mut tree = program(&f);

    f.compiler
        .execute_pass(Pass::PreSymbolOptimization, &Scope::root(), &mut tree)
        .unwrap();

    let statements = tree.statements();
    assert_eq!(init_value(&statements[0]), Some(ConstantValue::Integer(3)));
    assert!(statements[1].is_noop());
    assert_eq!(
        statements[1].messages(),
        ["Skipping removed expression at Line 2".to_string()]
    );
    assert_eq!(init_value(&statements[2]), Some(ConstantValue::Integer(8)));
    assert_eq!(f.compiler.diagnostics().len(), 1);
    assert!(!f.compiler.diagnostics()[0].is_error());
}

#[test]
fn folded_constants_reach_the_namespace_table() {
    let mut f = Fixture::new();
    let mut tree = program(&f);

    f.compiler.run_frontend_passes(&Scope::root(), &mut tree).unwrap();

    let a = f.id("a");
    assert_eq!(f.compiler.handler().symbol_type(&a), SymbolType::Constant);
    assert_eq!(
        f.compiler.handler().constant_value(&a),
        Some(ConstantValue::Integer(3))
    );
    assert_eq!(f.compiler.handler().symbol_type(&f.id("b")), SymbolType::Variable);
}

#[test]
fn without_optimizations_the_assignment_to_a_folded_constant_survives() {
    let mut f = Fixture::with_config(CompilerConfig::unoptimized());
    let mut tree = program(&f);

    f.compiler
        .execute_pass(Pass::PreSymbolOptimization, &Scope::root(), &mut tree)
        .unwrap();
    f.compiler
        .execute_pass(Pass::ResolvingSymbols, &Scope::root(), &mut tree)
        .unwrap();

    // Nothing was folded, so `a` stays a plain variable and the dead branch
    // is still there.
    assert_eq!(f.compiler.handler().symbol_type(&f.id("a")), SymbolType::Variable);
    assert!(matches!(tree.statements()[1].kind, StatementKind::IfStatement { .. }));
    assert!(f.compiler.diagnostics().is_empty());
}

/// `const int x = 5; namespace A { int x; }`
fn shadowed_constant(f: &mut Fixture) {
    let mut tree = SyntaxTree::new(
        "",
        vec![
            Statement::constant(f.name("x"), PrimitiveType::Integer.into(), int(5, Span::DUMMY), Span::DUMMY),
            Statement::namespace_block(
                f.name("A"),
                vec![Statement::variable(f.name("x"), PrimitiveType::Integer.into(), None, Span::DUMMY)],
                Span::DUMMY,
            ),
        ],
    );
    f.compiler.run_frontend_passes(&Scope::root(), &mut tree).unwrap();
}

#[test]
fn folding_respects_shadowing_in_the_statement_scope() {
    let mut f = Fixture::new();
    shadowed_constant(&mut f);

    let mut tree = SyntaxTree::new("x", vec![Statement::symbol(f.id("x"), Span::new(0, 1))]);
    let scope = Scope::new(f.id("A"));
    f.compiler
        .execute_pass(Pass::PreSymbolOptimization, &scope, &mut tree)
        .unwrap();
    assert_eq!(tree.statements()[0].kind, StatementKind::SymbolRef(f.id("x")));

    f.compiler.run_frontend_passes(&scope, &mut tree).unwrap();
    assert_eq!(tree.statements()[0].kind, StatementKind::SymbolRef(f.id("A::x")));
}

#[test]
fn namespace_blocks_fold_in_their_own_scope() {
    let mut f = Fixture::new();
    shadowed_constant(&mut f);

    let mut tree = SyntaxTree::new(
        "",
        vec![
            Statement::namespace_block(
                f.name("A"),
                vec![Statement::symbol(f.id("x"), Span::DUMMY)],
                Span::DUMMY,
            ),
            Statement::symbol(f.id("x"), Span::DUMMY),
        ],
    );
    f.compiler
        .execute_pass(Pass::PreSymbolOptimization, &Scope::root(), &mut tree)
        .unwrap();

    let StatementKind::NamespaceBlock { body, .. } = &tree.statements()[0].kind else {
        panic!("namespace block must stay");
    };
    assert_eq!(body[0].kind, StatementKind::SymbolRef(f.id("x")));
    assert_eq!(tree.statements()[1].constant_value(), Some(ConstantValue::Integer(5)));
}
