//! Compile-time constant storage.

use std::fmt;

use crate::PrimitiveType;

/// The value carried by a constant-kind alias.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum ConstantValue {
    #[default]
    Void,
    Integer(i32),
    Float(f32),
    Double(f64),
}

impl ConstantValue {
    /// The primitive type of the stored value.
    pub fn primitive_type(self) -> PrimitiveType {
        match self {
            ConstantValue::Void => PrimitiveType::Void,
            ConstantValue::Integer(_) => PrimitiveType::Integer,
            ConstantValue::Float(_) => PrimitiveType::Float,
            ConstantValue::Double(_) => PrimitiveType::Double,
        }
    }

    /// Widen to `f64`. `Void` is zero.
    pub fn to_f64(self) -> f64 {
        match self {
            ConstantValue::Void => 0.0,
            ConstantValue::Integer(v) => f64::from(v),
            ConstantValue::Float(v) => f64::from(v),
            ConstantValue::Double(v) => v,
        }
    }

    /// True for `Void`.
    pub fn is_void(self) -> bool {
        matches!(self, ConstantValue::Void)
    }

    /// Truthiness used by constant conditions.
    pub fn is_truthy(self) -> bool {
        self.to_f64() != 0.0
    }

    /// Convert to `target`, truncating toward zero for integers.
    ///
    /// Non-numeric targets keep the value unchanged.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "constant coercion narrows on purpose"
    )]
    pub fn coerce_to(self, target: PrimitiveType) -> Self {
        if self.primitive_type() == target {
            return self;
        }

        let v = self.to_f64();
        match target {
            PrimitiveType::Integer => ConstantValue::Integer(v as i32),
            PrimitiveType::Float => ConstantValue::Float(v as f32),
            PrimitiveType::Double => ConstantValue::Double(v),
            PrimitiveType::Void | PrimitiveType::Block | PrimitiveType::Pointer => self,
        }
    }

    /// C++ literal spelling: `2`, `2.0f`, `2.0`.
    pub fn cpp_value_string(self) -> String {
        match self {
            ConstantValue::Void => "void".to_owned(),
            ConstantValue::Integer(v) => v.to_string(),
            ConstantValue::Float(v) => format!("{}f", float_literal(f64::from(v))),
            ConstantValue::Double(v) => float_literal(v),
        }
    }
}

/// Render with at least one decimal digit.
fn float_literal(v: f64) -> String {
    let s = v.to_string();
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cpp_value_string())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "exact values are representable")]
mod tests;
