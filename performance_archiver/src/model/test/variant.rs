//!
//! The test configuration variant.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::configuration::Configuration;
use crate::model::result::ResultSet;

///
/// The results observed for one configuration of a test.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// The run configuration.
    #[serde(rename = "Configuration")]
    pub configuration: Configuration,
    /// The baseline results.
    #[serde(rename = "Results")]
    pub results: ResultSet,
}

impl Variant {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(configuration: Configuration, results: ResultSet) -> Self {
        Self {
            configuration,
            results,
        }
    }
}
