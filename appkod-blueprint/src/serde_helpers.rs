//! Serde helpers for loosely typed blueprint scalars.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Deserialize an optional scalar (string or number) into a string.
///
/// YAML reads `version: 1.0` as a float; the blueprint treats it as the
/// string `"1.0"`.
pub fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<Scalar>::deserialize(deserializer)?;
    Ok(scalar.map(|s| match s {
        Scalar::String(s) => s,
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => format!("{:?}", f),
    }))
}

/// Deserialize a possibly null value, treating null as `T::default()`.
///
/// `tables:` with nothing after it is YAML null. Loading it as an empty list
/// leaves the section to be reported by validation.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
