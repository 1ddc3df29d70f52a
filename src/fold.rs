//! Conservative constant folding over expression sub-trees.
//!
//! Folding is two-staged: a purely structural classification decides whether
//! a sub-tree is free of the predicate's parameter, and only then a small
//! tree-walking evaluator reduces it to a concrete value. The evaluator is
//! deliberately scoped to arithmetic, comparison, logical, conditional,
//! array, and caller-supplied pure-function nodes; anything outside that
//! scope stays unfolded, which downstream consumers treat as "no bound".

use std::cmp::Ordering;

use crate::{
    config::{CallFolding, TranslateConfig},
    expr::{BinaryOp, Expr, PureFn, UnaryOp},
    scalar::ScalarValue,
};

/// Whether `expr` is free of references to the predicate's parameter.
///
/// The classification is structural and conservative: a parameter reference
/// is never free, and an opaque node is never free. `Call`/`Invoke` nodes
/// check their arguments only; the callee is assumed pure.
#[must_use]
pub fn is_free(expr: &Expr) -> bool {
    match expr {
        Expr::Constant(_) => true,
        Expr::Parameter => false,
        Expr::Unary { operand, .. } => is_free(operand),
        Expr::Binary { left, right, .. } => is_free(left) && is_free(right),
        Expr::Conditional {
            test,
            if_true,
            if_false,
        } => is_free(test) && is_free(if_true) && is_free(if_false),
        Expr::Call { args, .. } | Expr::Invoke { args, .. } => args.iter().all(is_free),
        Expr::Member { object, .. } => object.as_deref().map_or(true, is_free),
        Expr::Array(items) => items.iter().all(is_free),
        Expr::Opaque => false,
    }
}

/// Fold `expr` to a concrete value when it is free of the parameter and
/// within the evaluator's scope.
///
/// Returns `None` both for parameter-dependent sub-trees and for free
/// sub-trees the evaluator cannot reduce (a member read, mixed-kind
/// arithmetic, integer overflow, a callee declining). Both degrade the same
/// way downstream, to the unbounded range; this function never errors.
#[must_use]
pub fn try_fold(expr: &Expr, config: &TranslateConfig) -> Option<ScalarValue> {
    if !is_free(expr) {
        return None;
    }
    eval(expr, config)
}

// Evaluate one free sub-tree. Evaluation order follows the source tree and
// short-circuits, so a callee is run at most once per fold.
fn eval(expr: &Expr, config: &TranslateConfig) -> Option<ScalarValue> {
    match expr {
        Expr::Constant(value) => Some(value.clone()),
        Expr::Unary { op, operand } => eval_unary(*op, eval(operand, config)?),
        Expr::Binary { op, left, right } => eval_binary(*op, left, right, config),
        Expr::Conditional {
            test,
            if_true,
            if_false,
        } => {
            if eval(test, config)?.as_bool()? {
                eval(if_true, config)
            } else {
                eval(if_false, config)
            }
        }
        Expr::Call { function, args } => apply(function, args, config),
        Expr::Invoke { callee, args } => apply(callee, args, config),
        Expr::Array(items) => items
            .iter()
            .map(|item| eval(item, config))
            .collect::<Option<Vec<_>>>()
            .map(ScalarValue::List),
        // Member reads need reflection this crate does not have; a free
        // member access stays unfolded.
        Expr::Member { .. } => None,
        Expr::Parameter | Expr::Opaque => None,
    }
}

fn apply(function: &PureFn, args: &[Expr], config: &TranslateConfig) -> Option<ScalarValue> {
    if config.call_folding == CallFolding::Skip {
        return None;
    }
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(eval(arg, config)?);
    }
    function.apply(&values)
}

fn eval_unary(op: UnaryOp, value: ScalarValue) -> Option<ScalarValue> {
    match (op, value) {
        (UnaryOp::Not, ScalarValue::Bool(v)) => Some(ScalarValue::Bool(!v)),
        (UnaryOp::Neg, ScalarValue::I64(v)) => v.checked_neg().map(ScalarValue::I64),
        (UnaryOp::Neg, ScalarValue::F64(v)) => Some(ScalarValue::F64(-v)),
        _ => None,
    }
}

fn eval_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    config: &TranslateConfig,
) -> Option<ScalarValue> {
    match op {
        BinaryOp::And => match eval(left, config)?.as_bool()? {
            false => Some(ScalarValue::Bool(false)),
            true => eval(right, config)?.as_bool().map(ScalarValue::Bool),
        },
        BinaryOp::Or => match eval(left, config)?.as_bool()? {
            true => Some(ScalarValue::Bool(true)),
            false => eval(right, config)?.as_bool().map(ScalarValue::Bool),
        },
        op if op.is_comparison() => {
            let ord = eval(left, config)?.compare(&eval(right, config)?)?;
            let holds = match op {
                BinaryOp::Equal => ord == Ordering::Equal,
                BinaryOp::NotEqual => ord != Ordering::Equal,
                BinaryOp::LessThan => ord == Ordering::Less,
                BinaryOp::LessThanOrEqual => ord != Ordering::Greater,
                BinaryOp::GreaterThan => ord == Ordering::Greater,
                BinaryOp::GreaterThanOrEqual => ord != Ordering::Less,
                _ => unreachable!("guard admits the comparison subset only"),
            };
            Some(ScalarValue::Bool(holds))
        }
        op => eval_arith(op, eval(left, config)?, eval(right, config)?),
    }
}

// Same-kind arithmetic only; integer overflow and division by zero stay
// unfolded rather than wrapping or panicking.
fn eval_arith(op: BinaryOp, left: ScalarValue, right: ScalarValue) -> Option<ScalarValue> {
    match (left, right) {
        (ScalarValue::I64(a), ScalarValue::I64(b)) => {
            let v = match op {
                BinaryOp::Add => a.checked_add(b),
                BinaryOp::Subtract => a.checked_sub(b),
                BinaryOp::Multiply => a.checked_mul(b),
                BinaryOp::Divide => a.checked_div(b),
                BinaryOp::Remainder => a.checked_rem(b),
                _ => None,
            };
            v.map(ScalarValue::I64)
        }
        (ScalarValue::U64(a), ScalarValue::U64(b)) => {
            let v = match op {
                BinaryOp::Add => a.checked_add(b),
                BinaryOp::Subtract => a.checked_sub(b),
                BinaryOp::Multiply => a.checked_mul(b),
                BinaryOp::Divide => a.checked_div(b),
                BinaryOp::Remainder => a.checked_rem(b),
                _ => None,
            };
            v.map(ScalarValue::U64)
        }
        (ScalarValue::F64(a), ScalarValue::F64(b)) => {
            let v = match op {
                BinaryOp::Add => a + b,
                BinaryOp::Subtract => a - b,
                BinaryOp::Multiply => a * b,
                BinaryOp::Divide => a / b,
                BinaryOp::Remainder => a % b,
                _ => return None,
            };
            Some(ScalarValue::F64(v))
        }
        _ => None,
    }
}
