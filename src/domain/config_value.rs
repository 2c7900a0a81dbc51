// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! `ConfigValue` is the node type of a configuration document. Values go in
//! through `From` impls and come out through the [`FromConfigValue`] trait,
//! which reports a conversion failure instead of panicking.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A nested document: an ordered map from segment name to value.
pub type Table = BTreeMap<String, ConfigValue>;

/// A single node of a configuration document.
///
/// # Examples
///
/// ```
/// use jsoncfg::domain::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.convert::<i64>("test.key").unwrap(), 42);
/// assert_eq!(value.convert::<f64>("test.key").unwrap(), 42.0);
/// assert!(value.convert::<String>("test.key").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit null.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer above `i64::MAX`. Smaller values are `Integer`.
    Unsigned(u64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<ConfigValue>),
    /// A nested document.
    Document(Table),
}

impl ConfigValue {
    /// Returns a short name for the variant, used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) | ConfigValue::Unsigned(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Document(_) => "document",
        }
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer if it is non-negative and fits in a `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ConfigValue::Integer(n) => u64::try_from(*n).ok(),
            ConfigValue::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as `f64` for every numeric variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Integer(n) => Some(*n as f64),
            ConfigValue::Unsigned(n) => Some(*n as f64),
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Sequence`.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested table if this is a `Document`.
    pub fn as_document(&self) -> Option<&Table> {
        match self {
            ConfigValue::Document(table) => Some(table),
            _ => None,
        }
    }

    /// Returns the nested table mutably if this is a `Document`.
    pub fn as_document_mut(&mut self) -> Option<&mut Table> {
        match self {
            ConfigValue::Document(table) => Some(table),
            _ => None,
        }
    }

    /// Converts the value into `T`.
    ///
    /// `key` is only used to label the error.
    pub fn convert<T: FromConfigValue>(&self, key: &str) -> Result<T> {
        T::from_config_value(self, key)
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(ConfigValue::from)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ConfigValue::Null,
            serde_json::Value::Bool(b) => ConfigValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    ConfigValue::Unsigned(u)
                } else {
                    ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => ConfigValue::String(s),
            serde_json::Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Document(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ConfigValue> for serde_json::Value {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Null => serde_json::Value::Null,
            ConfigValue::Bool(b) => serde_json::Value::Bool(b),
            ConfigValue::Integer(n) => serde_json::Value::from(n),
            ConfigValue::Unsigned(n) => serde_json::Value::from(n),
            // non-finite floats have no JSON form
            ConfigValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ConfigValue::String(s) => serde_json::Value::String(s),
            ConfigValue::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            ConfigValue::Document(table) => serde_json::Value::Object(
                table.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", serde_json::Value::from(other.clone())),
        }
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident: $($ty:ty),*) => {
        $(impl From<$ty> for ConfigValue {
            fn from(v: $ty) -> Self {
                ConfigValue::$variant(v.into())
            }
        })*
    };
}

impl_from_lossless!(Integer: i8, i16, i32, i64, u8, u16, u32);
impl_from_lossless!(Float: f32, f64);
impl_from_lossless!(Bool: bool);
impl_from_lossless!(String: String, &str, &String);

impl From<u64> for ConfigValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(n) => ConfigValue::Integer(n),
            Err(_) => ConfigValue::Unsigned(v),
        }
    }
}

impl From<usize> for ConfigValue {
    fn from(v: usize) -> Self {
        ConfigValue::from(v as u64)
    }
}

impl From<isize> for ConfigValue {
    fn from(v: isize) -> Self {
        ConfigValue::Integer(v as i64)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ConfigValue::Null)
    }
}

impl<T: Into<ConfigValue>> From<BTreeMap<String, T>> for ConfigValue {
    fn from(map: BTreeMap<String, T>) -> Self {
        ConfigValue::Document(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<ConfigValue>> From<HashMap<String, T>> for ConfigValue {
    fn from(map: HashMap<String, T>) -> Self {
        ConfigValue::Document(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Extraction of a typed value out of a [`ConfigValue`].
///
/// Implementations follow JSON's native coercion rules: numbers convert between
/// integer and float targets (floats truncate toward zero, out-of-range values
/// fail), while booleans and strings only convert to themselves.
///
/// Float-to-integer checks use an exclusive upper bound of `2^(BITS - 1)` for
/// signed and `2^BITS` for unsigned targets. `MAX as f64` is not usable here
/// because it rounds up for 64-bit types.
pub trait FromConfigValue: Sized {
    /// Converts `value`, using `key` to label a failure.
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self>;
}

fn mismatch<T>(value: &ConfigValue, key: &str) -> ConfigError {
    ConfigError::conversion::<T>(key, format!("found {}", value.kind()))
}

fn float_upper_bound(bits: u32, signed: bool) -> f64 {
    2f64.powi((bits - u32::from(signed)) as i32)
}

macro_rules! impl_from_config_int {
    ($($ty:ty),*) => {
        $(impl FromConfigValue for $ty {
            fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
                match value {
                    ConfigValue::Integer(n) => <$ty>::try_from(*n).map_err(|_| {
                        ConfigError::conversion::<$ty>(key, format!("{} is out of range", n))
                    }),
                    ConfigValue::Unsigned(n) => <$ty>::try_from(*n).map_err(|_| {
                        ConfigError::conversion::<$ty>(key, format!("{} is out of range", n))
                    }),
                    ConfigValue::Float(f)
                        if f.is_finite()
                            && f.trunc() >= <$ty>::MIN as f64
                            && f.trunc() < float_upper_bound(<$ty>::BITS, <$ty>::MIN != 0) =>
                    {
                        Ok(f.trunc() as $ty)
                    }
                    ConfigValue::Float(f) => Err(ConfigError::conversion::<$ty>(
                        key,
                        format!("{} is out of range", f),
                    )),
                    other => Err(mismatch::<$ty>(other, key)),
                }
            }
        })*
    };
}

impl_from_config_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromConfigValue for f64 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch::<f64>(value, key))
    }
}

impl FromConfigValue for f32 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        value
            .as_f64()
            .map(|f| f as f32)
            .ok_or_else(|| mismatch::<f32>(value, key))
    }
}

impl FromConfigValue for bool {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch::<bool>(value, key))
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch::<String>(value, key))
    }
}

impl FromConfigValue for ConfigValue {
    fn from_config_value(value: &ConfigValue, _key: &str) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: FromConfigValue> FromConfigValue for Option<T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        match value {
            ConfigValue::Null => Ok(None),
            other => T::from_config_value(other, key).map(Some),
        }
    }
}

impl<T: FromConfigValue> FromConfigValue for Vec<T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        match value {
            ConfigValue::Sequence(items) => items
                .iter()
                .map(|item| T::from_config_value(item, key))
                .collect(),
            other => Err(mismatch::<Vec<T>>(other, key)),
        }
    }
}

impl<T: FromConfigValue> FromConfigValue for BTreeMap<String, T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        match value {
            ConfigValue::Document(table) => table
                .iter()
                .map(|(k, v)| Ok((k.clone(), T::from_config_value(v, key)?)))
                .collect(),
            other => Err(mismatch::<BTreeMap<String, T>>(other, key)),
        }
    }
}

impl<T: FromConfigValue> FromConfigValue for HashMap<String, T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self> {
        match value {
            ConfigValue::Document(table) => table
                .iter()
                .map(|(k, v)| Ok((k.clone(), T::from_config_value(v, key)?)))
                .collect(),
            other => Err(mismatch::<HashMap<String, T>>(other, key)),
        }
    }
}
