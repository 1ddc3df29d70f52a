//! Translation errors.

use thiserror::Error;

/// Precondition violations raised by translation.
///
/// Everything data-dependent (an opaque node, a non-constant operand, a
/// complement with no exact encoding) resolves to the unbounded range
/// instead of an error; these variants cover caller contract violations
/// only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The key member name was empty.
    #[error("key member name must not be empty")]
    EmptyKeyMember,
    /// A comparison folded to a constant whose kind cannot represent the
    /// key's domain.
    #[error("constant compared against key member '{member}' has type {got}, expected {expected}")]
    KeyTypeMismatch {
        /// Name of the key member being compared.
        member: String,
        /// The key domain's type name.
        expected: &'static str,
        /// Kind of the folded constant.
        got: &'static str,
    },
    /// A comparison folded to `NULL`, which bounds nothing.
    #[error("comparison against NULL cannot bound key member '{member}'")]
    NullComparison {
        /// Name of the key member being compared.
        member: String,
    },
}
