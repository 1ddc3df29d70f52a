//! End-to-end translation properties.

use std::ops::Bound;

use keyseek::{
    translate, translate_with, CallFolding, Expr, KeyRange, PureFn, ScalarValue,
    TranslateConfig, TranslateError,
};

fn span(low: Bound<i64>, high: Bound<i64>) -> KeyRange<i64> {
    KeyRange::Span { low, high }
}

#[test]
fn simple_comparisons_map_to_ranges() {
    let cases = [
        (
            Expr::key("id").equals(Expr::constant(7i64)),
            span(Bound::Included(7), Bound::Included(7)),
        ),
        (
            Expr::key("id").less_than(Expr::constant(7i64)),
            span(Bound::Unbounded, Bound::Excluded(7)),
        ),
        (
            Expr::key("id").less_than_or_equal(Expr::constant(7i64)),
            span(Bound::Unbounded, Bound::Included(7)),
        ),
        (
            Expr::key("id").greater_than(Expr::constant(7i64)),
            span(Bound::Excluded(7), Bound::Unbounded),
        ),
        (
            Expr::key("id").greater_than_or_equal(Expr::constant(7i64)),
            span(Bound::Included(7), Bound::Unbounded),
        ),
    ];
    for (predicate, expected) in cases {
        assert_eq!(
            translate::<i64>(&predicate, "id").expect("valid predicate"),
            expected,
        );
    }
}

#[test]
fn constant_on_the_left_reverses_the_operator() {
    let reversed = Expr::constant(7i64).greater_than(Expr::key("id"));
    let direct = Expr::key("id").less_than(Expr::constant(7i64));
    assert_eq!(
        translate::<i64>(&reversed, "id").expect("valid predicate"),
        translate::<i64>(&direct, "id").expect("valid predicate"),
    );

    let reversed = Expr::constant(7i64).less_than_or_equal(Expr::key("id"));
    assert_eq!(
        translate::<i64>(&reversed, "id").expect("valid predicate"),
        span(Bound::Included(7), Bound::Unbounded),
    );

    let reversed = Expr::constant(7i64).equals(Expr::key("id"));
    assert_eq!(
        translate::<i64>(&reversed, "id").expect("valid predicate"),
        KeyRange::point(7),
    );
}

#[test]
fn conjunction_intersects_bounds() {
    let predicate = Expr::key("id")
        .greater_than(Expr::constant(1i64))
        .and(Expr::key("id").less_than(Expr::constant(10i64)));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Excluded(1), Bound::Excluded(10)),
    );
}

#[test]
fn contradictory_conjunction_is_empty() {
    let predicate = Expr::key("id")
        .less_than(Expr::constant(1i64))
        .and(Expr::key("id").greater_than(Expr::constant(10i64)));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        KeyRange::Empty,
    );
}

#[test]
fn disjoint_disjunction_loses_precision_to_the_hull() {
    // (-inf, 1) or (10, +inf): the convex hull spans the whole domain.
    // This is the documented precision loss, not a bug.
    let predicate = Expr::key("id")
        .less_than(Expr::constant(1i64))
        .or(Expr::key("id").greater_than(Expr::constant(10i64)));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        KeyRange::all(),
    );
}

#[test]
fn overlapping_disjunction_keeps_its_bounds() {
    let predicate = Expr::key("id")
        .less_than(Expr::constant(10i64))
        .or(Expr::key("id").less_than(Expr::constant(3i64)));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Unbounded, Bound::Excluded(10)),
    );
}

#[test]
fn negated_point_range_falls_back_to_a_full_scan() {
    // The complement of [5, 5] is not one contiguous range; the translator
    // must widen to the whole domain rather than guess.
    let predicate = Expr::key("id").equals(Expr::constant(5i64)).not();
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        KeyRange::all(),
    );
}

#[test]
fn negated_one_sided_comparison_is_exact() {
    let predicate = Expr::key("id").less_than(Expr::constant(5i64)).not();
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Included(5), Bound::Unbounded),
    );

    let predicate = Expr::key("id")
        .greater_than_or_equal(Expr::constant(5i64))
        .not();
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Unbounded, Bound::Excluded(5)),
    );
}

#[test]
fn negated_disjunction_applies_de_morgan() {
    // !(id < 1 || id > 10) == [1, 10]: inverting each disjunct and
    // intersecting is exact here.
    let predicate = Expr::key("id")
        .less_than(Expr::constant(1i64))
        .or(Expr::key("id").greater_than(Expr::constant(10i64)))
        .not();
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Included(1), Bound::Included(10)),
    );
}

#[test]
fn folded_arithmetic_operands_bound_the_key() {
    let predicate = Expr::key("id").less_than(Expr::constant(2i64).add(Expr::constant(3i64)));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Unbounded, Bound::Excluded(5)),
    );
}

#[test]
fn non_constant_operands_contribute_no_bound() {
    // id < id + 3 cannot be folded; the conjunct with a real constant still
    // narrows the other side.
    let predicate = Expr::key("id")
        .less_than(Expr::key("id").add(Expr::constant(3i64)))
        .and(Expr::key("id").greater_than(Expr::constant(0i64)));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Excluded(0), Bound::Unbounded),
    );
}

#[test]
fn opaque_predicates_scan_everything() {
    assert_eq!(
        translate::<i64>(&Expr::Opaque, "id").expect("valid predicate"),
        KeyRange::all(),
    );

    let predicate = Expr::key("id").not_equals(Expr::constant(5i64));
    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        KeyRange::all(),
    );
}

#[test]
fn call_bounded_comparisons_respect_the_folding_policy() {
    let low_water = PureFn::named("low_water", |_: &[ScalarValue]| {
        Some(ScalarValue::I64(100))
    });
    let predicate =
        Expr::key("id").greater_than_or_equal(Expr::call(low_water, Vec::new()));

    assert_eq!(
        translate::<i64>(&predicate, "id").expect("valid predicate"),
        span(Bound::Included(100), Bound::Unbounded),
    );

    let config = TranslateConfig {
        call_folding: CallFolding::Skip,
    };
    assert_eq!(
        translate_with::<i64>(&predicate, "id", &config).expect("valid predicate"),
        KeyRange::all(),
    );
}

#[test]
fn string_keys_translate() {
    let predicate = Expr::key("name")
        .greater_than_or_equal(Expr::constant("alpha"))
        .and(Expr::key("name").less_than(Expr::constant("omega")));
    assert_eq!(
        translate::<String>(&predicate, "name").expect("valid predicate"),
        KeyRange::Span {
            low: Bound::Included("alpha".to_owned()),
            high: Bound::Excluded("omega".to_owned()),
        },
    );
}

#[test]
fn unsigned_keys_accept_signed_literals() {
    let predicate = Expr::key("seq").greater_than(Expr::constant(3i64));
    assert_eq!(
        translate::<u64>(&predicate, "seq").expect("valid predicate"),
        KeyRange::Span {
            low: Bound::Excluded(3u64),
            high: Bound::Unbounded,
        },
    );
}

#[test]
fn translation_is_idempotent() {
    let predicate = Expr::key("id")
        .greater_than(Expr::constant(1i64))
        .and(
            Expr::key("id")
                .less_than(Expr::constant(10i64))
                .or(Expr::key("id").equals(Expr::constant(42i64))),
        );
    let first = translate::<i64>(&predicate, "id").expect("valid predicate");
    let second = translate::<i64>(&predicate, "id").expect("valid predicate");
    assert_eq!(first, second);
}

#[test]
fn precondition_violations_error_loudly() {
    let predicate = Expr::key("id").equals(Expr::constant(5i64));
    assert_eq!(
        translate::<i64>(&predicate, ""),
        Err(TranslateError::EmptyKeyMember),
    );

    let mistyped = Expr::key("id").equals(Expr::constant("five"));
    assert!(matches!(
        translate::<i64>(&mistyped, "id"),
        Err(TranslateError::KeyTypeMismatch { .. }),
    ));

    let out_of_domain = Expr::key("id").equals(Expr::constant(u64::MAX));
    assert!(matches!(
        translate::<i64>(&out_of_domain, "id"),
        Err(TranslateError::KeyTypeMismatch { .. }),
    ));

    let null = Expr::key("id").equals(Expr::Constant(ScalarValue::Null));
    assert_eq!(
        translate::<i64>(&null, "id"),
        Err(TranslateError::NullComparison {
            member: "id".to_owned(),
        }),
    );
}

#[test]
fn derived_ranges_never_exclude_matching_keys() {
    // Spot-check the superset guarantee: every key satisfying the predicate
    // is inside the derived range.
    let predicate = Expr::key("id")
        .greater_than(Expr::constant(2i64))
        .and(Expr::key("id").less_than_or_equal(Expr::constant(8i64)))
        .or(Expr::key("id").equals(Expr::constant(20i64)));
    let range = translate::<i64>(&predicate, "id").expect("valid predicate");

    let matches = |id: i64| (id > 2 && id <= 8) || id == 20;
    for id in -5..30 {
        if matches(id) {
            assert!(range.contains(&id), "range {range} must contain {id}");
        }
    }
}
