//!
//! The configuration set.
//!

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::model::value::Value;

///
/// The configuration set.
///
/// Describes either the execution environment or the setup of a single run.
/// The entries are kept sorted by name, so equality does not depend on the
/// insertion order.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    /// The named settings.
    entries: BTreeMap<String, Value>,
}

impl Configuration {
    ///
    /// Inserts a setting, replacing the previous value with the same name.
    ///
    pub fn insert<N, V>(&mut self, name: N, value: V) -> Option<Value>
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.entries.insert(name.into(), value.into())
    }

    ///
    /// Returns the setting value.
    ///
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    ///
    /// Returns the stable textual form, e.g. `Ranks=4,Filename="a.mtx"`.
    ///
    pub fn canonical_key(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<String>>()
            .join(",")
    }

    ///
    /// Checks that every setting is named.
    ///
    pub fn validate(&self, kind: &str) -> Result<(), Error> {
        if self.entries.keys().any(|name| name.is_empty()) {
            return Err(Error::Configuration(format!(
                "{kind} configuration contains an empty name"
            )));
        }
        Ok(())
    }
}

impl<N, V> FromIterator<(N, V)> for Configuration
where
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut configuration = Self::default();
        for (name, value) in iter {
            configuration.insert(name, value);
        }
        configuration
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.canonical_key())
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;

    #[test]
    fn equality_ignores_order() {
        let mut first = Configuration::default();
        first.insert("Ranks", 4);
        first.insert("Filename", "matrix.mtx");

        let mut second = Configuration::default();
        second.insert("Filename", "matrix.mtx");
        second.insert("Ranks", 4);

        assert_eq!(first, second);
        assert_eq!(first.canonical_key(), second.canonical_key());
    }

    #[test]
    fn equality_is_type_exact() {
        let first: Configuration = [("Threads", 1)].into_iter().collect();
        let second: Configuration = [("Threads", "1")].into_iter().collect();

        assert_ne!(first, second);
    }

    #[test]
    fn subset_is_not_equal() {
        let first: Configuration = [("Threads", 1)].into_iter().collect();
        let second: Configuration = [("Threads", 1), ("Teams", 1)].into_iter().collect();

        assert_ne!(first, second);
    }

    #[test]
    fn canonical_key_quotes_strings() {
        let mut configuration = Configuration::default();
        configuration.insert("Ranks", 4);
        configuration.insert("Node", "gpu");

        assert_eq!(configuration.canonical_key(), "Node=\"gpu\",Ranks=4");
    }

    #[test]
    fn validate_rejects_empty_name() {
        let configuration: Configuration = [("", 1)].into_iter().collect();

        assert!(configuration.validate("Test").is_err());
    }
}
