//! Statement nodes.
//!
//! The frontend builds these; the passes annotate and rewrite them in place.

use std::fmt;

use snex_ir::{ConstantValue, Name, NamespacedIdentifier, PrimitiveType, Span, TypeInfo};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Less,
    Greater,
    Equal,
    NotEqual,
    And,
    Or,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }

    /// Operators whose result is a boolean (`int` 0 or 1).
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::Less
                | BinaryOperator::Greater
                | BinaryOperator::Equal
                | BinaryOperator::NotEqual
                | BinaryOperator::And
                | BinaryOperator::Or
        )
    }

    /// Evaluate on two constants of the same type.
    ///
    /// Returns `None` for mixed types, division by zero and integer
    /// overflow, which are left for the runtime to handle.
    pub fn evaluate(self, lhs: ConstantValue, rhs: ConstantValue) -> Option<ConstantValue> {
        use ConstantValue::{Double, Float, Integer};

        if self.is_comparison() {
            let (l, r) = (lhs.to_f64(), rhs.to_f64());
            if lhs.primitive_type() != rhs.primitive_type() || lhs.is_void() {
                return None;
            }
            let truth = match self {
                BinaryOperator::Less => l < r,
                BinaryOperator::Greater => l > r,
                BinaryOperator::Equal => (l - r).abs() < f64::EPSILON,
                BinaryOperator::NotEqual => (l - r).abs() >= f64::EPSILON,
                BinaryOperator::And => lhs.is_truthy() && rhs.is_truthy(),
                _ => lhs.is_truthy() || rhs.is_truthy(),
            };
            return Some(Integer(i32::from(truth)));
        }

        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match self {
                BinaryOperator::Add => l.checked_add(r),
                BinaryOperator::Sub => l.checked_sub(r),
                BinaryOperator::Mul => l.checked_mul(r),
                BinaryOperator::Div => l.checked_div(r),
                _ => l.checked_rem(r),
            }
            .map(Integer),
            (Float(l), Float(r)) => float_op(self, f64::from(l), f64::from(r))
                .map(|v| Double(v).coerce_to(PrimitiveType::Float)),
            (Double(l), Double(r)) => float_op(self, l, r).map(Double),
            _ => None,
        }
    }
}

fn float_op(op: BinaryOperator, l: f64, r: f64) -> Option<f64> {
    match op {
        BinaryOperator::Add => Some(l + r),
        BinaryOperator::Sub => Some(l - r),
        BinaryOperator::Mul => Some(l * r),
        BinaryOperator::Div if r != 0.0 => Some(l / r),
        BinaryOperator::Mod if r != 0.0 => Some(l % r),
        _ => None,
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatementKind {
    Immediate(ConstantValue),
    /// Reference to a symbol; rewritten to the resolved id.
    SymbolRef(NamespacedIdentifier),
    VariableDefinition {
        /// Local name until symbols are resolved, then the full id.
        id: NamespacedIdentifier,
        declared: TypeInfo,
        is_const: bool,
        init: Option<Box<Statement>>,
    },
    Assignment {
        target: NamespacedIdentifier,
        value: Box<Statement>,
    },
    BinaryOp {
        op: BinaryOperator,
        lhs: Box<Statement>,
        rhs: Box<Statement>,
    },
    IfStatement {
        condition: Box<Statement>,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    Block(Vec<Statement>),
    Return(Option<Box<Statement>>),
    /// `namespace name { body }`
    NamespaceBlock {
        name: Name,
        body: Vec<Statement>,
    },
    /// Placeholder for removed code.
    Noop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: Span,
    /// Inferred by the type check phase.
    pub type_info: TypeInfo,
    messages: Vec<String>,
}

impl Statement {
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Statement {
            kind,
            span,
            type_info: TypeInfo::dynamic(),
            messages: Vec::new(),
        }
    }

    pub fn immediate(value: ConstantValue, span: Span) -> Self {
        Self::new(StatementKind::Immediate(value), span)
    }

    pub fn symbol(id: NamespacedIdentifier, span: Span) -> Self {
        Self::new(StatementKind::SymbolRef(id), span)
    }

    pub fn variable(name: Name, declared: TypeInfo, init: Option<Statement>, span: Span) -> Self {
        Self::new(
            StatementKind::VariableDefinition {
                id: NamespacedIdentifier::new(name),
                declared,
                is_const: false,
                init: init.map(Box::new),
            },
            span,
        )
    }

    pub fn constant(name: Name, declared: TypeInfo, init: Statement, span: Span) -> Self {
        Self::new(
            StatementKind::VariableDefinition {
                id: NamespacedIdentifier::new(name),
                declared,
                is_const: true,
                init: Some(Box::new(init)),
            },
            span,
        )
    }

    pub fn assign(target: NamespacedIdentifier, value: Statement, span: Span) -> Self {
        Self::new(
            StatementKind::Assignment {
                target,
                value: Box::new(value),
            },
            span,
        )
    }

    pub fn binary(op: BinaryOperator, lhs: Statement, rhs: Statement, span: Span) -> Self {
        Self::new(
            StatementKind::BinaryOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        )
    }

    pub fn if_then(condition: Statement, then_branch: Statement, span: Span) -> Self {
        Self::new(
            StatementKind::IfStatement {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: None,
            },
            span,
        )
    }

    pub fn if_else(
        condition: Statement,
        then_branch: Statement,
        else_branch: Statement,
        span: Span,
    ) -> Self {
        Self::new(
            StatementKind::IfStatement {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Some(Box::new(else_branch)),
            },
            span,
        )
    }

    pub fn block(statements: Vec<Statement>, span: Span) -> Self {
        Self::new(StatementKind::Block(statements), span)
    }

    pub fn ret(value: Option<Statement>, span: Span) -> Self {
        Self::new(StatementKind::Return(value.map(Box::new)), span)
    }

    pub fn namespace_block(name: Name, body: Vec<Statement>, span: Span) -> Self {
        Self::new(StatementKind::NamespaceBlock { name, body }, span)
    }

    pub fn noop(span: Span) -> Self {
        Self::new(StatementKind::Noop, span)
    }

    /// Messages recorded by the passes (e.g. removed code).
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn log_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// The value of an `Immediate`.
    pub fn constant_value(&self) -> Option<ConstantValue> {
        match self.kind {
            StatementKind::Immediate(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self.kind, StatementKind::Noop)
    }

    pub fn is_return(&self) -> bool {
        matches!(self.kind, StatementKind::Return(_))
    }

    /// Replace this node, keeping span and messages.
    pub fn replace_kind(&mut self, kind: StatementKind) {
        self.kind = kind;
    }

    /// Direct children in evaluation order.
    pub fn children_mut(&mut self) -> Vec<&mut Statement> {
        match &mut self.kind {
            StatementKind::Immediate(_) | StatementKind::SymbolRef(_) | StatementKind::Noop => {
                Vec::new()
            }
            StatementKind::VariableDefinition { init, .. } => {
                init.as_deref_mut().into_iter().collect()
            }
            StatementKind::Return(value) => value.as_deref_mut().into_iter().collect(),
            StatementKind::Assignment { value, .. } => vec![value.as_mut()],
            StatementKind::BinaryOp { lhs, rhs, .. } => vec![lhs.as_mut(), rhs.as_mut()],
            StatementKind::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut children = vec![condition.as_mut(), then_branch.as_mut()];
                if let Some(else_branch) = else_branch {
                    children.push(else_branch.as_mut());
                }
                children
            }
            StatementKind::Block(statements)
            | StatementKind::NamespaceBlock {
                body: statements, ..
            } => statements.iter_mut().collect(),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
