use super::value::Value;
use crate::core::common::hash_code::{combine, list_hash_code, string_hash_code};
use crate::core::common::OxirowError;
use std::cmp::Ordering;
use std::fmt;

/// One record of a logical table: a string key and an ordered, immutable
/// sequence of field values.
///
/// The fields are owned by the row and only ever handed out as `&[Value]`, so
/// nothing outside the row can add, remove or replace an element once it has
/// been built.
///
/// Ordering via [`Row::compare_to`] looks at the key alone while equality
/// looks at key and fields. Two rows sharing a key but holding different
/// fields compare `Equal` yet are not `==`; for that reason `Row` does not
/// implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RowRepr")]
pub struct Row {
    key: String,
    fields: Box<[Value]>,
}

/// Wire shape used while deserializing; `fields` may be absent or `null`.
#[derive(serde::Deserialize)]
struct RowRepr {
    key: String,
    #[serde(default)]
    fields: Option<Vec<Value>>,
}

impl TryFrom<RowRepr> for Row {
    type Error = OxirowError;

    fn try_from(repr: RowRepr) -> Result<Self, Self::Error> {
        let fields = repr.fields.ok_or_else(|| absent_fields(&repr.key))?;
        Ok(Self::new(repr.key, fields))
    }
}

fn absent_fields(key: &str) -> OxirowError {
    tracing::debug!(key, "rejected row construction: fields absent");
    OxirowError::invalid_argument("Fields cannot be null.")
}

impl Row {
    /// Checked factory: copies `fields` into a new read-only sequence.
    ///
    /// # Errors
    ///
    /// Returns `OxirowError::InvalidArgument` if `fields` is `None`.
    pub fn create(key: impl Into<String>, fields: Option<&[Value]>) -> crate::Result<Self> {
        let key = key.into();
        match fields {
            Some(fields) => Ok(Self::from_slice(key, fields)),
            None => Err(absent_fields(&key)),
        }
    }

    /// Create a new Row, taking ownership of the given values
    pub fn new(key: impl Into<String>, fields: Vec<Value>) -> Self {
        Self { key: key.into(), fields: fields.into_boxed_slice() }
    }

    /// Create a new Row from a slice of values
    pub fn from_slice(key: impl Into<String>, fields: &[Value]) -> Self {
        Self { key: key.into(), fields: fields.into() }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Get a field by position
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    /// Iterate over fields in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.fields.iter()
    }

    /// Number of fields in the row
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the row, handing back its key and fields.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.key, self.fields.into_vec())
    }

    /// `31 * hash(key) + hash(fields)` in wrapping 32-bit arithmetic, matching
    /// JVM `hashCode` for the same key and list of fields.
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        combine(
            string_hash_code(&self.key),
            list_hash_code(self.fields.iter().map(Value::hash_code)),
        )
    }

    /// Orders rows by key only. Fields never take part.
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Renders a field sequence as `[a, b, c]`.
pub(crate) struct FieldList<'a>(pub(crate) &'a [Value]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, FieldList(&self.fields))
    }
}
