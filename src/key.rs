//! Key types derivable from folded scalar literals.

use crate::scalar::ScalarValue;

/// Trait describing key types that can be derived from folded scalar
/// literals.
///
/// Integer keys accept both signed and unsigned literals; a literal whose
/// value does not fit the key's domain yields `None`, which the translator
/// reports as a contract violation. Floating-point keys are not supported:
/// the range algebra requires a total order.
pub trait KeyLiteral: Ord + Clone {
    /// Human-readable name of the key's domain, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Convert a folded scalar literal into the key type.
    fn from_scalar(value: &ScalarValue) -> Option<Self>;
}

impl KeyLiteral for i32 {
    const TYPE_NAME: &'static str = "i32";

    fn from_scalar(value: &ScalarValue) -> Option<Self> {
        if let Some(v) = value.as_int_i128() {
            return i32::try_from(v).ok();
        }
        if let Some(v) = value.as_uint_u128() {
            return i32::try_from(v).ok();
        }
        None
    }
}

impl KeyLiteral for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn from_scalar(value: &ScalarValue) -> Option<Self> {
        if let Some(v) = value.as_int_i128() {
            return i64::try_from(v).ok();
        }
        if let Some(v) = value.as_uint_u128() {
            return i64::try_from(v).ok();
        }
        None
    }
}

impl KeyLiteral for u32 {
    const TYPE_NAME: &'static str = "u32";

    fn from_scalar(value: &ScalarValue) -> Option<Self> {
        if let Some(v) = value.as_uint_u128() {
            return u32::try_from(v).ok();
        }
        if let Some(v) = value.as_int_i128() {
            return u32::try_from(v).ok();
        }
        None
    }
}

impl KeyLiteral for u64 {
    const TYPE_NAME: &'static str = "u64";

    fn from_scalar(value: &ScalarValue) -> Option<Self> {
        if let Some(v) = value.as_uint_u128() {
            return u64::try_from(v).ok();
        }
        if let Some(v) = value.as_int_i128() {
            return u64::try_from(v).ok();
        }
        None
    }
}

impl KeyLiteral for String {
    const TYPE_NAME: &'static str = "string";

    fn from_scalar(value: &ScalarValue) -> Option<Self> {
        value.as_utf8().map(str::to_owned)
    }
}

impl KeyLiteral for Vec<u8> {
    const TYPE_NAME: &'static str = "bytes";

    fn from_scalar(value: &ScalarValue) -> Option<Self> {
        value.as_binary().map(<[u8]>::to_vec)
    }
}
