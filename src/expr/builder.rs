//! Ergonomic constructors for composing expression trees.

use std::sync::Arc;

use super::{BinaryOp, Expr, PureFn, UnaryOp};
use crate::scalar::ScalarValue;

impl Expr {
    /// A literal constant node.
    #[must_use]
    pub fn constant<V>(value: V) -> Self
    where
        V: Into<ScalarValue>,
    {
        Expr::Constant(value.into())
    }

    /// The predicate's free parameter.
    #[must_use]
    pub fn parameter() -> Self {
        Expr::Parameter
    }

    /// Member access on the predicate's parameter, e.g. the key field.
    #[must_use]
    pub fn key<N>(name: N) -> Self
    where
        N: Into<Arc<str>>,
    {
        Expr::Member {
            object: Some(Box::new(Expr::Parameter)),
            name: name.into(),
        }
    }

    /// Member access on an arbitrary object expression.
    #[must_use]
    pub fn member<N>(object: Expr, name: N) -> Self
    where
        N: Into<Arc<str>>,
    {
        Expr::Member {
            object: Some(Box::new(object)),
            name: name.into(),
        }
    }

    /// Static member access with no object expression.
    #[must_use]
    pub fn static_member<N>(name: N) -> Self
    where
        N: Into<Arc<str>>,
    {
        Expr::Member {
            object: None,
            name: name.into(),
        }
    }

    /// A unary node.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// A binary node.
    #[must_use]
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Short-circuit conjunction with `other`.
    #[must_use]
    pub fn and(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::And, self, other)
    }

    /// Short-circuit disjunction with `other`.
    #[must_use]
    pub fn or(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::Or, self, other)
    }

    /// Logical negation.
    #[must_use]
    pub fn not(self) -> Self {
        Expr::unary(UnaryOp::Not, self)
    }

    /// Arithmetic negation.
    #[must_use]
    pub fn neg(self) -> Self {
        Expr::unary(UnaryOp::Neg, self)
    }

    /// `self = other`.
    #[must_use]
    pub fn equals(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::Equal, self, other)
    }

    /// `self != other`.
    #[must_use]
    pub fn not_equals(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::NotEqual, self, other)
    }

    /// `self < other`.
    #[must_use]
    pub fn less_than(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::LessThan, self, other)
    }

    /// `self <= other`.
    #[must_use]
    pub fn less_than_or_equal(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::LessThanOrEqual, self, other)
    }

    /// `self > other`.
    #[must_use]
    pub fn greater_than(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::GreaterThan, self, other)
    }

    /// `self >= other`.
    #[must_use]
    pub fn greater_than_or_equal(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::GreaterThanOrEqual, self, other)
    }

    /// `self + other`.
    #[must_use]
    pub fn add(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::Add, self, other)
    }

    /// `self - other`.
    #[must_use]
    pub fn subtract(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::Subtract, self, other)
    }

    /// `self * other`.
    #[must_use]
    pub fn multiply(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::Multiply, self, other)
    }

    /// `self / other`.
    #[must_use]
    pub fn divide(self, other: Expr) -> Self {
        Expr::binary(BinaryOp::Divide, self, other)
    }

    /// A ternary conditional node.
    #[must_use]
    pub fn conditional(test: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Conditional {
            test: Box::new(test),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// Application of a named caller-supplied function.
    #[must_use]
    pub fn call(function: PureFn, args: Vec<Expr>) -> Self {
        Expr::Call { function, args }
    }

    /// Application of an anonymous function value.
    #[must_use]
    pub fn invoke(callee: PureFn, args: Vec<Expr>) -> Self {
        Expr::Invoke { callee, args }
    }

    /// Array construction from element expressions.
    #[must_use]
    pub fn array(items: Vec<Expr>) -> Self {
        Expr::Array(items)
    }
}
