//!
//! The machine configuration.
//!

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::model::configuration::Configuration as ConfigurationSet;
use crate::model::test::Test;

///
/// The machine configuration.
///
/// A machine may be reconfigured over time, and each hardware or software
/// setup keeps its own tests.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// The human-readable label.
    #[serde(rename = "Name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// The environment description.
    #[serde(rename = "Configuration")]
    pub configuration: ConfigurationSet,
    /// The tests run under this configuration.
    #[serde(rename = "Tests", default)]
    pub tests: BTreeMap<String, Test>,
}

impl Configuration {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, configuration: ConfigurationSet) -> Self {
        Self {
            name,
            configuration,
            tests: BTreeMap::new(),
        }
    }
}
