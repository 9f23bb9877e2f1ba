//!
//! The fresh run submitted for classification.
//!

use crate::error::Error;
use crate::model::configuration::Configuration;
use crate::model::result::ResultSet;

///
/// The fresh run submitted for classification.
///
#[derive(Debug, Clone)]
pub struct Submission {
    /// The machine name, usually the hostname.
    pub machine: String,
    /// The execution environment.
    pub machine_configuration: Configuration,
    /// The test name.
    pub test: String,
    /// The run setup.
    pub test_configuration: Configuration,
    /// The measurements.
    pub results: ResultSet,
}

impl Submission {
    ///
    /// Rejects incomplete runs before the archive is touched.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.machine.is_empty() {
            return Err(Error::Configuration("The machine name is empty".to_owned()));
        }
        if self.test.is_empty() {
            return Err(Error::Configuration("The test name is empty".to_owned()));
        }
        self.machine_configuration.validate("Machine")?;
        self.test_configuration.validate("Test")?;
        self.results.validate()?;
        Ok(())
    }
}
