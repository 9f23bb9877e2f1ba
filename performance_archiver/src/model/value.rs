//!
//! The configuration value.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

///
/// The configuration value.
///
/// Integers and strings are distinct even if textually equal, so `4` and `"4"`
/// never describe the same configuration.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The integer value.
    Integer(i64),
    /// The string value.
    String(String),
}

impl Value {
    ///
    /// Parses a command line value, preferring integers.
    ///
    pub fn parse(string: &str) -> Self {
        match string.parse::<i64>() {
            Ok(integer) => Self::Integer(integer),
            Err(_) => Self::String(string.to_owned()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(value as i64)
    }
}

impl TryFrom<usize> for Value {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        i64::try_from(value).map(Self::Integer).map_err(|_| {
            Error::Configuration(format!("Integer {value} does not fit a configuration value"))
        })
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::String(string) => write!(f, "{string:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn integer_and_string_differ() {
        assert_ne!(Value::from(4), Value::from("4"));
    }

    #[test]
    fn usize_out_of_range_is_rejected() {
        assert_eq!(Value::try_from(64_usize).expect("In range"), Value::Integer(64));
        assert!(Value::try_from(usize::MAX).is_err());
    }

    #[test]
    fn parse_prefers_integers() {
        assert_eq!(Value::parse("16"), Value::Integer(16));
        assert_eq!(Value::parse("-3"), Value::Integer(-3));
        assert_eq!(Value::parse("somefilename"), Value::String("somefilename".to_owned()));
    }

    #[test]
    fn yaml_keeps_type() {
        let integer: Value = serde_yaml::from_str("4").expect("Always valid");
        let string: Value = serde_yaml::from_str("'4'").expect("Always valid");
        assert_eq!(integer, Value::Integer(4));
        assert_eq!(string, Value::String("4".to_owned()));

        let serialized = serde_yaml::to_string(&Value::from("4")).expect("Always valid");
        let deserialized: Value = serde_yaml::from_str(serialized.as_str()).expect("Always valid");
        assert_eq!(deserialized, Value::from("4"));
    }
}
