//!
//! The benchmark result values.
//!

pub mod comparison;
pub mod tolerance;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

use self::comparison::Comparison;
use self::comparison::Mismatch;
use self::tolerance::Tolerance;

///
/// A single named measurement.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultValue {
    /// The measured value.
    pub value: f64,
    /// The comparison policy.
    #[serde(default)]
    pub tolerance: Tolerance,
}

impl ResultValue {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(value: f64, tolerance: Tolerance) -> Self {
        Self { value, tolerance }
    }

    ///
    /// Creates a value that must be reproduced exactly.
    ///
    pub fn exact(value: f64) -> Self {
        Self::new(value, Tolerance::Exact)
    }

    ///
    /// Creates a value that may deviate by the `tolerance` fraction.
    ///
    pub fn relative(value: f64, tolerance: f64) -> Self {
        Self::new(value, Tolerance::Relative(tolerance))
    }

    ///
    /// Whether the `fresh` measurement reproduces this stored one.
    ///
    /// The policy of the stored value is authoritative.
    ///
    pub fn matches(&self, fresh: &Self) -> bool {
        self.tolerance.accepts(self.value, fresh.value)
    }
}

///
/// The named measurements of one run.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    /// The measurements.
    values: BTreeMap<String, ResultValue>,
}

impl ResultSet {
    ///
    /// Inserts a measurement, replacing the previous one with the same name.
    ///
    pub fn insert<N>(&mut self, name: N, value: ResultValue) -> Option<ResultValue>
    where
        N: Into<String>,
    {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&ResultValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResultValue)> {
        self.values.iter()
    }

    ///
    /// Checks that the set is non-empty, named, and has valid tolerances.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.values.is_empty() {
            return Err(Error::Configuration("No results provided".to_owned()));
        }
        for (name, value) in self.values.iter() {
            if name.is_empty() {
                return Err(Error::Configuration(
                    "Result set contains an empty name".to_owned(),
                ));
            }
            if !value.value.is_finite() {
                return Err(Error::Configuration(format!(
                    "Result `{name}` has a non-finite value {}",
                    value.value
                )));
            }
            if !value.tolerance.is_valid() {
                return Err(Error::Configuration(format!(
                    "Result `{name}` has an invalid tolerance {}",
                    value.tolerance
                )));
            }
        }
        Ok(())
    }

    ///
    /// Compares this stored set with the `fresh` one.
    ///
    /// Stored names missing from `fresh` are failures. Fresh names missing here
    /// only extend the set, unless some stored value mismatches.
    ///
    pub fn compare(&self, fresh: &Self) -> Comparison {
        let mut mismatches = Vec::new();
        for (name, stored) in self.values.iter() {
            match fresh.values.get(name) {
                Some(value) if stored.matches(value) => continue,
                value => mismatches.push(Mismatch {
                    name: name.to_owned(),
                    stored: stored.clone(),
                    fresh: value.cloned(),
                }),
            }
        }
        if !mismatches.is_empty() {
            return Comparison::Mismatched { mismatches };
        }

        let added: Vec<String> = fresh
            .values
            .keys()
            .filter(|name| !self.values.contains_key(name.as_str()))
            .cloned()
            .collect();
        if added.is_empty() {
            Comparison::Matched
        } else {
            Comparison::Extended { added }
        }
    }
}

impl<N> FromIterator<(N, ResultValue)> for ResultSet
where
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, ResultValue)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::Comparison;
    use super::ResultSet;
    use super::ResultValue;

    fn baseline() -> ResultSet {
        [
            ("Time", ResultValue::relative(10.0, 0.1)),
            ("Counter", ResultValue::exact(22.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn matched() {
        let fresh: ResultSet = [
            ("Time", ResultValue::relative(10.9, 0.1)),
            ("Counter", ResultValue::exact(22.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(baseline().compare(&fresh), Comparison::Matched);
    }

    #[test]
    fn extended() {
        let fresh: ResultSet = [
            ("Time", ResultValue::relative(10.0, 0.1)),
            ("Counter", ResultValue::exact(22.0)),
            ("Residual", ResultValue::exact(0.001)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            baseline().compare(&fresh),
            Comparison::Extended {
                added: vec!["Residual".to_owned()]
            }
        );
    }

    #[test]
    fn mismatch_dominates_extension() {
        let fresh: ResultSet = [
            ("Time", ResultValue::relative(10.0, 0.1)),
            ("Counter", ResultValue::exact(23.0)),
            ("Residual", ResultValue::exact(0.001)),
        ]
        .into_iter()
        .collect();

        match baseline().compare(&fresh) {
            Comparison::Mismatched { mismatches } => {
                assert_eq!(mismatches.len(), 1);
                assert_eq!(mismatches[0].name, "Counter");
                assert_eq!(mismatches[0].fresh, Some(ResultValue::exact(23.0)));
            }
            comparison => panic!("Unexpected comparison {comparison:?}"),
        }
    }

    #[test]
    fn missing_stored_name_mismatches() {
        let fresh: ResultSet = [("Time", ResultValue::relative(10.0, 0.1))]
            .into_iter()
            .collect();

        match baseline().compare(&fresh) {
            Comparison::Mismatched { mismatches } => {
                assert_eq!(mismatches[0].name, "Counter");
                assert_eq!(mismatches[0].fresh, None);
            }
            comparison => panic!("Unexpected comparison {comparison:?}"),
        }
    }

    #[test]
    fn stored_tolerance_is_authoritative() {
        let fresh: ResultSet = [
            ("Time", ResultValue::exact(10.5)),
            ("Counter", ResultValue::relative(22.0, 0.5)),
        ]
        .into_iter()
        .collect();

        assert_eq!(baseline().compare(&fresh), Comparison::Matched);
    }

    #[test]
    fn validate() {
        assert!(ResultSet::default().validate().is_err());
        assert!(baseline().validate().is_ok());

        let negative: ResultSet = [("Time", ResultValue::relative(1.0, -0.1))]
            .into_iter()
            .collect();
        assert!(negative.validate().is_err());

        let unnamed: ResultSet = [("", ResultValue::exact(1.0))].into_iter().collect();
        assert!(unnamed.validate().is_err());

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let non_finite: ResultSet = [("Time", ResultValue::relative(value, 0.1))]
                .into_iter()
                .collect();
            assert!(non_finite.validate().is_err(), "value {value}");
        }
    }
}
