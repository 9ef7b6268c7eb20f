use super::*;

#[test]
fn coerce_same_type_is_identity() {
    let v = ConstantValue::Float(0.5);
    assert_eq!(v.coerce_to(PrimitiveType::Float), v);
}

#[test]
fn coerce_narrows_to_integer() {
    assert_eq!(
        ConstantValue::Double(2.9).coerce_to(PrimitiveType::Integer),
        ConstantValue::Integer(2)
    );
    assert_eq!(
        ConstantValue::Float(-1.5).coerce_to(PrimitiveType::Integer),
        ConstantValue::Integer(-1)
    );
}

#[test]
fn coerce_widens_integer() {
    assert_eq!(
        ConstantValue::Integer(3).coerce_to(PrimitiveType::Double),
        ConstantValue::Double(3.0)
    );
    assert_eq!(
        ConstantValue::Integer(3).coerce_to(PrimitiveType::Float),
        ConstantValue::Float(3.0)
    );
}

#[test]
fn coerce_to_non_numeric_keeps_value() {
    let v = ConstantValue::Integer(7);
    assert_eq!(v.coerce_to(PrimitiveType::Block), v);
}

#[test]
fn cpp_value_strings() {
    assert_eq!(ConstantValue::Integer(2).cpp_value_string(), "2");
    assert_eq!(ConstantValue::Float(2.0).cpp_value_string(), "2.0f");
    assert_eq!(ConstantValue::Double(0.25).cpp_value_string(), "0.25");
    assert_eq!(ConstantValue::Double(4.0).to_string(), "4.0");
}

#[test]
fn truthiness() {
    assert!(ConstantValue::Integer(1).is_truthy());
    assert!(!ConstantValue::Double(0.0).is_truthy());
    assert!(!ConstantValue::Void.is_truthy());
    assert!(ConstantValue::Void.is_void());
    assert_eq!(ConstantValue::Integer(4).to_f64(), 4.0);
}
