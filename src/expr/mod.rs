//! Minimal key-focused expression tree and helpers.

mod builder;
mod node;

pub use node::{BinaryOp, Expr, PureFn, UnaryOp};
