use super::*;

#[test]
fn namespace_errors_keep_their_message_and_code() {
    let err = CompileError::namespace(
        NamespaceError::Unresolved { name: "x".into() },
        Span::new(4, 5),
    );

    assert_eq!(err.to_string(), "x can't be resolved");
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.to_diagnostic().primary_span(), Some(Span::new(4, 5)));
}

#[test]
fn type_mismatch_is_a_semantic_error() {
    let err = CompileError::TypeMismatch {
        expected: "int".into(),
        found: "float".into(),
        span: Span::new(0, 3),
    };

    assert!(err.code().is_semantic_error());
    assert_eq!(err.to_string(), "type mismatch: expected int, found float");
    assert_eq!(err.span(), Span::new(0, 3));
}

#[test]
fn dead_code_becomes_a_warning() {
    let diag = ProcessError::DeadCode {
        span: Span::new(10, 20),
    }
    .to_diagnostic();

    assert!(!diag.is_error());
    assert_eq!(diag.code, ErrorCode::W3001);
}

#[test]
fn internal_namespace_errors_stay_internal() {
    let err: ProcessError = NamespaceError::ParentMismatch {
        id: "B::x".into(),
        current: "A".into(),
    }
    .into();

    let ProcessError::Compile(compile) = &err else {
        panic!("expected a compile error");
    };
    assert!(compile.to_diagnostic().is_internal());
}
