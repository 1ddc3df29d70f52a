//! Expression-tree node kinds.
//!
//! Trees are immutable once built and shared by reference; the translator
//! and folder only ever read them. The node set is a closed sum type so the
//! conservative-default arms in consumers are checked for exhaustiveness by
//! the compiler, with `Opaque` standing in for every construct the tree
//! builder could not classify.

use std::{fmt, sync::Arc};

use crate::scalar::ScalarValue;

/// Operator of a unary expression node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation (`!`).
    Not,
    /// Arithmetic negation (`-`).
    Neg,
}

/// Operator of a binary expression node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Short-circuit conjunction (`&&`).
    And,
    /// Short-circuit disjunction (`||`).
    Or,
    /// Equals (`=`).
    Equal,
    /// Not equals (`!=`).
    NotEqual,
    /// Less than (`<`).
    LessThan,
    /// Less than or equal to (`<=`).
    LessThanOrEqual,
    /// Greater than (`>`).
    GreaterThan,
    /// Greater than or equal to (`>=`).
    GreaterThanOrEqual,
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// Division (`/`).
    Divide,
    /// Remainder (`%`).
    Remainder,
}

impl BinaryOp {
    /// Returns the operator that swaps the left/right side of a comparison,
    /// so `3 < key` reads as `key > 3`. Every non-directional operator is
    /// returned unchanged.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            BinaryOp::LessThan => BinaryOp::GreaterThan,
            BinaryOp::LessThanOrEqual => BinaryOp::GreaterThanOrEqual,
            BinaryOp::GreaterThan => BinaryOp::LessThan,
            BinaryOp::GreaterThanOrEqual => BinaryOp::LessThanOrEqual,
            other => other,
        }
    }

    /// Whether this operator compares its operands.
    #[must_use]
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::LessThan
                | BinaryOp::LessThanOrEqual
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterThanOrEqual
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equal => "=",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Remainder => "%",
        })
    }
}

/// A caller-supplied function usable inside expression trees.
///
/// The wrapped function is *assumed* pure and deterministic; the crate never
/// verifies this. It may be run zero or one time per translation (see
/// [`CallFolding`](crate::CallFolding) to forbid running it at all).
/// Returning `None` marks the call unevaluable, which callers treat the same
/// as a non-constant operand.
#[derive(Clone)]
pub struct PureFn {
    name: Option<Arc<str>>,
    f: Arc<dyn Fn(&[ScalarValue]) -> Option<ScalarValue> + Send + Sync>,
}

impl PureFn {
    /// Wrap an anonymous pure function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[ScalarValue]) -> Option<ScalarValue> + Send + Sync + 'static,
    {
        Self {
            name: None,
            f: Arc::new(f),
        }
    }

    /// Wrap a pure function with a display name for diagnostics.
    pub fn named<N, F>(name: N, f: F) -> Self
    where
        N: Into<Arc<str>>,
        F: Fn(&[ScalarValue]) -> Option<ScalarValue> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            f: Arc::new(f),
        }
    }

    /// Display name, when one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn apply(&self, args: &[ScalarValue]) -> Option<ScalarValue> {
        (self.f)(args)
    }
}

impl fmt::Debug for PureFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "PureFn({name})"),
            None => f.write_str("PureFn(<fn>)"),
        }
    }
}

impl PartialEq for PureFn {
    fn eq(&self, other: &Self) -> bool {
        // Function identity, not extensional equality.
        Arc::ptr_eq(&self.f, &other.f)
    }
}

/// Immutable predicate/expression tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal value.
    Constant(ScalarValue),
    /// The predicate's free parameter: the record under test.
    Parameter,
    /// Unary operation.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// Binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Ternary conditional.
    Conditional {
        /// Condition.
        test: Box<Expr>,
        /// Value when the condition holds.
        if_true: Box<Expr>,
        /// Value when the condition does not hold.
        if_false: Box<Expr>,
    },
    /// Application of a named caller-supplied function.
    Call {
        /// The function applied.
        function: PureFn,
        /// Argument expressions.
        args: Vec<Expr>,
    },
    /// Application of an anonymous function value.
    Invoke {
        /// The function value applied.
        callee: PureFn,
        /// Argument expressions.
        args: Vec<Expr>,
    },
    /// One-level member access; `object == None` models a static member.
    Member {
        /// Expression the member is read from, absent for static members.
        object: Option<Box<Expr>>,
        /// Member name.
        name: Arc<str>,
    },
    /// Array construction from element expressions.
    Array(Vec<Expr>),
    /// A construct the tree builder could not classify. Never folded, never
    /// bounded; the required safe-default arm of every consumer.
    Opaque,
}
