//! Predicate-to-range translation.
//!
//! Walks a boolean predicate tree, recognizes comparisons between the key
//! member and foldable constants, and combines the per-subtree candidate
//! ranges into one contiguous range the scan layer can seek. The result is
//! always a conservative superset of the true match set; the caller
//! re-applies the full predicate to every row the scan yields.

use crate::{
    config::TranslateConfig,
    error::TranslateError,
    expr::{BinaryOp, Expr, UnaryOp},
    fold,
    key::KeyLiteral,
    logging::keyseek_log,
    range::KeyRange,
};

/// Derive a key range containing every record matched by `predicate`.
///
/// `key_member` names the parameter member designated as the ordered key.
/// When no bound can be determined the result is [`KeyRange::all`], meaning
/// a full ordered scan.
///
/// # Errors
///
/// Returns [`TranslateError`] for caller contract violations only: an empty
/// `key_member`, or a comparison whose folded constant cannot represent the
/// key's domain.
pub fn translate<K: KeyLiteral>(
    predicate: &Expr,
    key_member: &str,
) -> Result<KeyRange<K>, TranslateError> {
    translate_with(predicate, key_member, &TranslateConfig::default())
}

/// [`translate`] with an explicit configuration.
///
/// # Errors
///
/// Same contract as [`translate`].
pub fn translate_with<K: KeyLiteral>(
    predicate: &Expr,
    key_member: &str,
    config: &TranslateConfig,
) -> Result<KeyRange<K>, TranslateError> {
    if key_member.is_empty() {
        return Err(TranslateError::EmptyKeyMember);
    }

    // Precision is deliberately lost exactly once, in this top-level union.
    let range = union_all(ranges_of_subtree(predicate, key_member, config)?);
    keyseek_log!(
        log::Level::Debug,
        "translate",
        "key_member={} empty={} full_scan={}",
        key_member,
        range.is_empty(),
        range.is_all(),
    );

    Ok(range)
}

// Candidate ranges for one sub-tree; the returned list is never empty.
fn ranges_of_subtree<K: KeyLiteral>(
    expr: &Expr,
    key_member: &str,
    config: &TranslateConfig,
) -> Result<Vec<KeyRange<K>>, TranslateError> {
    match expr {
        Expr::Binary {
            op: BinaryOp::And,
            left,
            right,
        } => {
            // Narrowing is safe to do eagerly: intersect the union of each side.
            let left = union_all(ranges_of_subtree(left, key_member, config)?);
            let right = union_all(ranges_of_subtree(right, key_member, config)?);
            Ok(vec![left.intersect(right)])
        }
        Expr::Binary {
            op: BinaryOp::Or,
            left,
            right,
        } => {
            // Keep both sides' candidates; merging is deferred to the top.
            let mut ranges = ranges_of_subtree(left, key_member, config)?;
            ranges.extend(ranges_of_subtree(right, key_member, config)?);
            Ok(ranges)
        }
        Expr::Unary {
            op: UnaryOp::Not,
            operand,
        } => {
            // De Morgan over the operand's candidate list: invert every
            // range individually, then intersect the inversions. Exact for
            // a disjunction of simple comparisons; conservative whenever a
            // complement falls back to the open range.
            let inverted = ranges_of_subtree(operand, key_member, config)?
                .into_iter()
                .map(KeyRange::complement);
            Ok(vec![intersect_all(inverted)])
        }
        Expr::Binary {
            op:
                op @ (BinaryOp::Equal
                | BinaryOp::LessThan
                | BinaryOp::LessThanOrEqual
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterThanOrEqual),
            left,
            right,
        } => comparison_ranges(*op, left, right, key_member, config),
        // Everything else (opaque nodes, calls, NotEqual, bare booleans)
        // cannot bound the key: assume everything matches.
        _ => Ok(vec![KeyRange::all()]),
    }
}

// One comparison node. Qualifies only when exactly one side is a direct
// member access of the key on the parameter and the other side folds to a
// constant; the key sitting on the right reverses the operator.
fn comparison_ranges<K: KeyLiteral>(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    key_member: &str,
    config: &TranslateConfig,
) -> Result<Vec<KeyRange<K>>, TranslateError> {
    let resolved = if is_key_access(left, key_member) {
        fold_key_operand::<K>(right, key_member, config)?.map(|value| (op, value))
    } else if is_key_access(right, key_member) {
        fold_key_operand::<K>(left, key_member, config)?.map(|value| (op.reversed(), value))
    } else {
        None
    };

    let Some((op, value)) = resolved else {
        return Ok(vec![KeyRange::all()]);
    };

    let range = match op {
        BinaryOp::Equal => KeyRange::point(value),
        BinaryOp::LessThan => KeyRange::less_than(value),
        BinaryOp::LessThanOrEqual => KeyRange::at_most(value),
        BinaryOp::GreaterThan => KeyRange::greater_than(value),
        BinaryOp::GreaterThanOrEqual => KeyRange::at_least(value),
        _ => unreachable!("caller admits range-mappable comparisons only"),
    };
    Ok(vec![range])
}

// Fold the non-key side of a comparison down to a key value. A non-constant
// operand is not an error (the comparison just contributes no bound); a
// constant that cannot inhabit the key's domain is.
fn fold_key_operand<K: KeyLiteral>(
    expr: &Expr,
    key_member: &str,
    config: &TranslateConfig,
) -> Result<Option<K>, TranslateError> {
    let Some(value) = fold::try_fold(expr, config) else {
        return Ok(None);
    };
    if value.is_null() {
        return Err(TranslateError::NullComparison {
            member: key_member.to_owned(),
        });
    }
    match K::from_scalar(&value) {
        Some(key) => Ok(Some(key)),
        None => Err(TranslateError::KeyTypeMismatch {
            member: key_member.to_owned(),
            expected: K::TYPE_NAME,
            got: value.kind(),
        }),
    }
}

// Direct, one-level member access of the key on the predicate's parameter.
fn is_key_access(expr: &Expr, key_member: &str) -> bool {
    match expr {
        Expr::Member {
            object: Some(object),
            name,
        } => matches!(object.as_ref(), Expr::Parameter) && name.as_ref() == key_member,
        _ => false,
    }
}

fn union_all<K: Ord>(ranges: Vec<KeyRange<K>>) -> KeyRange<K> {
    ranges.into_iter().fold(KeyRange::Empty, KeyRange::union)
}

fn intersect_all<K, I>(ranges: I) -> KeyRange<K>
where
    K: Ord,
    I: Iterator<Item = KeyRange<K>>,
{
    ranges.fold(KeyRange::all(), KeyRange::intersect)
}
