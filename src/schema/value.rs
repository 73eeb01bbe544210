//! The dynamic value type checked by validators.
//!
//! `Value` is the already-decoded input handed to a validator. It keeps map
//! insertion order via `IndexMap` so that reports stay deterministic, and it
//! can be produced from any `serde` data format through its `Deserialize`
//! implementation.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::{self, MapAccess, SeqAccess, Visitor};

/// A decoded value of arbitrary shape.
///
/// [`Value::Null`] doubles as the *absent* value: a key missing from a
/// mapping is looked up as `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value (`null`, `None`, or a missing key).
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A signed 64-bit integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Self>),
    /// An ordered mapping of string keys to values.
    Map(IndexMap<String, Self>),
}

/// The closed set of runtime kinds a [`Value`] can have.
///
/// Type-mismatch messages are formatted from these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Absent,
    /// [`Value::Bool`].
    Boolean,
    /// [`Value::Integer`] or [`Value::Float`].
    Number,
    /// [`Value::String`].
    String,
    /// [`Value::Array`].
    Array,
    /// [`Value::Map`].
    Map,
}

impl ValueKind {
    /// Returns the lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared absent value handed to field validators for missing keys.
pub(crate) static ABSENT: Value = Value::Null;

impl Value {
    /// Returns the runtime kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Absent,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Integer(_) | Self::Float(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up `key` when this value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(v: IndexMap<String, Self>) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, val)| (key.into(), val.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Visitor implementation for deserializing arbitrary self-describing data
/// into [`Value`].
struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(
            "any value (null, bool, integer, float, string, \
             sequence, or mapping with string keys)",
        )
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(Value::Integer)
            .map_err(|_| de::Error::custom(format!("integer {v} is out of range for i64")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, val)) = map.next_entry()? {
            entries.insert(key, val);
        }
        Ok(Value::Map(entries))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::null(Value::Null, ValueKind::Absent)]
    #[case::boolean(Value::Bool(false), ValueKind::Boolean)]
    #[case::integer(Value::Integer(3), ValueKind::Number)]
    #[case::float(Value::Float(0.5), ValueKind::Number)]
    #[case::string(Value::from("x"), ValueKind::String)]
    #[case::array(Value::Array(Vec::new()), ValueKind::Array)]
    #[case::map(Value::Map(IndexMap::new()), ValueKind::Map)]
    fn kind_tags_cover_every_variant(#[case] value: Value, #[case] expected: ValueKind) {
        assert_eq!(value.kind(), expected);
    }

    #[test]
    fn none_converts_to_absent() {
        let value = Value::from(None::<i64>);
        assert!(value.is_absent());
    }

    #[test]
    fn collected_pairs_keep_insertion_order() {
        let value: Value = [("b", 1), ("a", 2)].into_iter().collect();
        let Value::Map(entries) = value else {
            panic!("expected a map");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn yaml_decodes_in_document_order() {
        let Ok(value) = serde_saphyr::from_str::<Value>("b: 1\na: [true, ~, 2.5, text]\n") else {
            panic!("mapping should decode");
        };
        let expected: Value = [
            ("b", Value::Integer(1)),
            (
                "a",
                Value::Array(vec![
                    Value::Bool(true),
                    Value::Null,
                    Value::Float(2.5),
                    Value::from("text"),
                ]),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(value, expected);
    }

    #[test]
    fn oversized_unsigned_integer_is_rejected() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, U64Deserializer};

        let deserializer: U64Deserializer<Error> = u64::MAX.into_deserializer();
        let result = Value::deserialize(deserializer);
        assert!(result.is_err_and(|e| e.to_string().contains("out of range")));
    }

    #[test]
    fn get_returns_none_for_non_maps() {
        assert!(Value::from("x").get("x").is_none());
    }
}
