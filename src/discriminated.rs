//! Decoding of polymorphic objects, which are told apart by their `type` field.
//!
//! Each base type owns its own discriminator table, so unrelated hierarchies never collide.
//! Unknown discriminators decode into the base type's fallback, which keeps the common fields and
//! stashes the rest into `extra`.
//!
//! Variant structs deserialize themselves directly and never look at the table, so a record that
//! has been resolved into a concrete variant is never dispatched again.

use std::any::type_name;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned, de::Error as _};
use serde_json::{Map, Value};

/// Wire name of the discriminator field.
pub const DISCRIMINATOR: &str = "type";

/// Decodes the record fields, without the discriminator, into the base type.
pub type DecodeFn<T> = fn(Map<String, Value>) -> serde_json::Result<T>;

/// Concrete variant of a polymorphic base type.
pub trait Variant {
    /// Fixed discriminator value, unique within the base type.
    const KIND: &'static str;
}

/// Polymorphic base type.
pub trait Discriminated: Sized + 'static {
    /// Discriminator value → variant decoder.
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)];

    /// Generic decoding for an unrecognized or missing discriminator.
    ///
    /// `kind` is empty when the discriminator is missing or is not a string.
    fn fallback(kind: String, fields: Map<String, Value>) -> serde_json::Result<Self>;
}

/// Decode the variant `V` and wrap it into the base type `T`.
pub fn variant<V, T>(fields: Map<String, Value>) -> serde_json::Result<T>
where
    V: Variant + DeserializeOwned + Into<T>,
{
    serde_json::from_value::<V>(Value::Object(fields)).map(Into::into)
}

/// Decode the record into the most specific known variant of `T`.
///
/// Returns `None` for an empty record.
pub fn dispatch<T: Discriminated>(mut record: Map<String, Value>) -> serde_json::Result<Option<T>> {
    if record.is_empty() {
        return Ok(None);
    }
    let kind = match record.get(DISCRIMINATOR) {
        Some(Value::String(kind)) => kind.clone(),
        _ => String::new(),
    };
    let decode = T::VARIANTS
        .iter()
        .find_map(|(variant_kind, decode)| (*variant_kind == kind).then_some(*decode));
    if !kind.is_empty() {
        record.remove(DISCRIMINATOR);
    }
    match decode {
        Some(decode) => decode(record).map(Some),
        None => {
            tracing::debug!(
                kind = kind.as_str(),
                base = type_name::<T>(),
                "Unknown discriminator, decoding generically",
            );
            T::fallback(kind, record).map(Some)
        }
    }
}

/// `Deserialize` implementation body for the base types.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    let record = Map::<String, Value>::deserialize(deserializer)?;
    dispatch(record)
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom(format!("empty record for `{}`", type_name::<T>())))
}

/// Use with `#[serde(default, deserialize_with = "…")]` on optional polymorphic fields:
/// `null` and `{}` both decode into `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    Option::<Map<String, Value>>::deserialize(deserializer)?
        .map_or(Ok(None), |record| dispatch(record).map_err(D::Error::custom))
}

/// Use with `#[serde(default, deserialize_with = "…")]` on lists of polymorphic objects:
/// empty records are skipped, and `null` means an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    Ok(optional_list(deserializer)?.unwrap_or_default())
}

/// Same as [`list`], but keeps an absent or `null` list apart from an empty one.
pub fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    Option::<Vec<Map<String, Value>>>::deserialize(deserializer)?
        .map(|records| {
            records
                .into_iter()
                .filter_map(|record| dispatch(record).transpose())
                .collect::<serde_json::Result<Vec<T>>>()
        })
        .transpose()
        .map_err(D::Error::custom)
}

/// Serializes the inner variant with the discriminator in front of its fields.
#[derive(Serialize)]
pub struct Tagged<'a, V> {
    #[serde(rename = "type", skip_serializing_if = "is_empty")]
    kind: &'a str,

    #[serde(flatten)]
    inner: &'a V,
}

impl<'a, V: Serialize> Tagged<'a, V> {
    pub const fn new(kind: &'a str, inner: &'a V) -> Self {
        Self { kind, inner }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires &T -> bool
fn is_empty(kind: &&str) -> bool {
    kind.is_empty()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Circle {
        radius: u32,
    }

    impl Variant for Circle {
        const KIND: &'static str = "circle";
    }

    #[derive(Debug, PartialEq)]
    enum Shape {
        Circle(Circle),
        Unknown { kind: String, extra: BTreeMap<String, Value> },
    }

    impl From<Circle> for Shape {
        fn from(circle: Circle) -> Self {
            Self::Circle(circle)
        }
    }

    impl Discriminated for Shape {
        const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] =
            &[(Circle::KIND, variant::<Circle, Self>)];

        fn fallback(kind: String, fields: Map<String, Value>) -> serde_json::Result<Self> {
            Ok(Self::Unknown { kind, extra: fields.into_iter().collect() })
        }
    }

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(record) => record,
            _ => unreachable!(),
        }
    }

    #[test]
    fn dispatch_known_ok() -> Result {
        let shape = dispatch::<Shape>(record(json!({"type": "circle", "radius": 3})))?;
        assert_eq!(shape, Some(Shape::Circle(Circle { radius: 3 })));
        Ok(())
    }

    #[test]
    fn dispatch_empty_ok() -> Result {
        assert_eq!(dispatch::<Shape>(Map::new())?, None);
        Ok(())
    }

    #[test]
    fn dispatch_unknown_ok() -> Result {
        let shape = dispatch::<Shape>(record(json!({"type": "square", "side": 2})))?;
        let Some(Shape::Unknown { kind, extra }) = shape else { unreachable!() };
        assert_eq!(kind, "square");
        assert_eq!(extra.get("side"), Some(&json!(2)));
        assert!(!extra.contains_key(DISCRIMINATOR));
        Ok(())
    }

    #[test]
    fn dispatch_missing_discriminator_ok() -> Result {
        let shape = dispatch::<Shape>(record(json!({"type": 42})))?;
        let Some(Shape::Unknown { kind, extra }) = shape else { unreachable!() };
        assert!(kind.is_empty());
        assert_eq!(extra.get(DISCRIMINATOR), Some(&json!(42)));
        Ok(())
    }

    #[test]
    fn dispatch_malformed_variant_fails() {
        assert!(dispatch::<Shape>(record(json!({"type": "circle"}))).is_err());
    }

    #[test]
    fn tagged_ok() -> Result {
        let circle = Circle { radius: 1 };
        let value = serde_json::to_value(Tagged::new(Circle::KIND, &circle))?;
        assert_eq!(value, json!({"type": "circle", "radius": 1}));
        Ok(())
    }
}
