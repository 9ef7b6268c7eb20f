use pretty_assertions::assert_eq;

use super::*;

fn int(v: i32) -> Statement {
    Statement::immediate(ConstantValue::Integer(v), Span::DUMMY)
}

#[test]
fn integer_arithmetic_folds() {
    let add = BinaryOperator::Add.evaluate(ConstantValue::Integer(2), ConstantValue::Integer(3));
    let div = BinaryOperator::Div.evaluate(ConstantValue::Integer(7), ConstantValue::Integer(2));

    assert_eq!(add, Some(ConstantValue::Integer(5)));
    assert_eq!(div, Some(ConstantValue::Integer(3)));
}

#[test]
fn unsafe_arithmetic_is_not_folded() {
    assert_eq!(
        BinaryOperator::Div.evaluate(ConstantValue::Integer(1), ConstantValue::Integer(0)),
        None
    );
    assert_eq!(
        BinaryOperator::Add.evaluate(ConstantValue::Integer(i32::MAX), ConstantValue::Integer(1)),
        None
    );
    assert_eq!(
        BinaryOperator::Add.evaluate(ConstantValue::Integer(1), ConstantValue::Float(1.0)),
        None
    );
}

#[test]
fn comparisons_produce_integers() {
    assert_eq!(
        BinaryOperator::Less.evaluate(ConstantValue::Float(1.0), ConstantValue::Float(2.0)),
        Some(ConstantValue::Integer(1))
    );
    assert_eq!(
        BinaryOperator::Equal.evaluate(ConstantValue::Integer(1), ConstantValue::Integer(2)),
        Some(ConstantValue::Integer(0))
    );
}

#[test]
fn float_arithmetic_stays_float() {
    assert_eq!(
        BinaryOperator::Mul.evaluate(ConstantValue::Float(1.5), ConstantValue::Float(2.0)),
        Some(ConstantValue::Float(3.0))
    );
    assert_eq!(
        BinaryOperator::Sub.evaluate(ConstantValue::Double(1.0), ConstantValue::Double(0.25)),
        Some(ConstantValue::Double(0.75))
    );
}

#[test]
fn children_are_listed_in_evaluation_order() {
    let mut statement = Statement::if_else(int(1), int(2), int(3), Span::DUMMY);
    let values: Vec<_> = statement
        .children_mut()
        .into_iter()
        .map(|c| c.constant_value().unwrap())
        .collect();

    assert_eq!(
        values,
        vec![
            ConstantValue::Integer(1),
            ConstantValue::Integer(2),
            ConstantValue::Integer(3),
        ]
    );
    assert!(Statement::noop(Span::DUMMY).children_mut().is_empty());
}

#[test]
fn messages_are_recorded() {
    let mut statement = Statement::ret(None, Span::new(0, 6));
    statement.log_message("first");
    statement.log_message(String::from("second"));

    assert!(statement.is_return());
    assert_eq!(statement.messages(), &["first".to_owned(), "second".to_owned()]);
    assert!(statement.type_info.is_dynamic());
    assert_eq!(
        Statement::variable(
            Name::EMPTY,
            PrimitiveType::Integer.into(),
            None,
            Span::DUMMY
        )
        .children_mut()
        .len(),
        0
    );
}
