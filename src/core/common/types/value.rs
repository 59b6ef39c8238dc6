use super::data_type::DataType;
use crate::core::common::hash_code::{
    bool_hash_code, bytes_hash_code, canonical_bits, double_hash_code, integer_hash_code,
    string_hash_code,
};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single field of a [`Row`](super::Row).
///
/// Serialized untagged, so JSON `3`, `3.5`, `"a"`, `true`, `null` and `[1, 2]`
/// map onto `Integer`, `Float`, `Text`, `Boolean`, `Null` and `Blob`. JSON has
/// no literal for non-finite numbers, so those floats are written as
/// `{"Float": "NaN"}`, `{"Float": "Infinity"}` or `{"Float": "-Infinity"}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(#[serde(with = "float_repr")] f64),
    Text(String),
    Boolean(bool),
    Blob(Vec<u8>),
    Null,
}

mod float_repr {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    enum NonFinite {
        NaN,
        Infinity,
        #[serde(rename = "-Infinity")]
        NegInfinity,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum FloatRepr {
        Finite(f64),
        Special {
            #[serde(rename = "Float")]
            float: NonFinite,
        },
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = if value.is_nan() {
            FloatRepr::Special { float: NonFinite::NaN }
        } else if value.is_infinite() {
            let float = if value.is_sign_positive() {
                NonFinite::Infinity
            } else {
                NonFinite::NegInfinity
            };
            FloatRepr::Special { float }
        } else {
            FloatRepr::Finite(*value)
        };
        repr.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(match FloatRepr::deserialize(deserializer)? {
            FloatRepr::Finite(v) => v,
            FloatRepr::Special { float: NonFinite::NaN } => f64::NAN,
            FloatRepr::Special { float: NonFinite::Infinity } => f64::INFINITY,
            FloatRepr::Special { float: NonFinite::NegInfinity } => f64::NEG_INFINITY,
        })
    }
}

impl Value {
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Integer,
            Self::Float(_) => DataType::Float,
            Self::Text(_) => DataType::Text,
            Self::Boolean(_) => DataType::Boolean,
            Self::Blob(_) => DataType::Blob,
            Self::Null => DataType::Null,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// JVM-compatible element hash, the building block of [`Row::hash_code`](super::Row::hash_code).
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        match self {
            Self::Integer(v) => integer_hash_code(*v),
            Self::Float(v) => double_hash_code(*v),
            Self::Text(s) => string_hash_code(s),
            Self::Boolean(b) => bool_hash_code(*b),
            Self::Blob(bytes) => bytes_hash_code(bytes),
            Self::Null => 0,
        }
    }
}

// Floats compare by canonical bits so that equality stays reflexive (NaN == NaN)
// and agrees with `Hash`. As a consequence 0.0 != -0.0.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(v) => v.hash(state),
            Self::Float(v) => canonical_bits(*v).hash(state),
            Self::Text(s) => s.hash(state),
            Self::Boolean(b) => b.hash(state),
            Self::Blob(bytes) => bytes.hash(state),
            Self::Null => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => f.write_str("NaN"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if v.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            // Debug keeps the trailing ".0" on integral floats
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Blob(bytes) => f.debug_list().entries(bytes).finish(),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
