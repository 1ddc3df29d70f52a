#![deny(missing_docs)]
//! Derive bounded key-scan ranges from boolean filter predicates.
//!
//! Given a predicate expression tree over a single record type and the name
//! of its ordered key member, [`translate`] produces a [`KeyRange`] that is
//! guaranteed to contain every key the predicate could match. An ordered
//! storage engine can then seek/scan that range instead of scanning
//! everything, re-applying the predicate to each yielded row to drop the
//! false positives a conservative range admits.
//!
//! When no bound can be determined (an unrecognized construct, a
//! non-constant operand, a negated bounded interval) the result degrades to
//! [`KeyRange::all`], never to a missed match.
//!
//! ```
//! use std::ops::Bound;
//!
//! use keyseek::{translate, Expr, KeyRange};
//!
//! let predicate = Expr::key("id")
//!     .greater_than(Expr::constant(1i64))
//!     .and(Expr::key("id").less_than(Expr::constant(10i64)));
//!
//! let range: KeyRange<i64> = translate(&predicate, "id").unwrap();
//! assert_eq!(
//!     range,
//!     KeyRange::Span {
//!         low: Bound::Excluded(1),
//!         high: Bound::Excluded(10),
//!     }
//! );
//! ```

mod config;
mod error;
mod key;
mod logging;
mod range;
mod scalar;
mod translate;

/// Minimal key-focused expression tree and helpers.
pub mod expr;

/// Conservative constant folding over expression sub-trees.
pub mod fold;

pub use crate::{
    config::{CallFolding, TranslateConfig},
    error::TranslateError,
    expr::{BinaryOp, Expr, PureFn, UnaryOp},
    key::KeyLiteral,
    range::KeyRange,
    scalar::ScalarValue,
    translate::{translate, translate_with},
};
