//!
//! The performance archiver.
//!

use std::path::Path;

use crate::archive::Archive;
use crate::classifier::outcome::Outcome;
use crate::classifier::submission::Submission;
use crate::error::Error;
use crate::model::configuration::Configuration;
use crate::model::result::ResultSet;
use crate::model::result::ResultValue;
use crate::model::value::Value;

///
/// The performance archiver.
///
/// Accumulates the description of a benchmark run, then checks it against the
/// archive with [`Archiver::run`].
///
#[derive(Debug, Default, Clone)]
pub struct Archiver {
    /// The execution environment description.
    machine_configuration: Configuration,
    /// The run setup.
    configuration: Configuration,
    /// The measurements.
    results: ResultSet,
}

impl Archiver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Adds a machine description entry.
    ///
    pub fn set_machine_config<N, V>(&mut self, label: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.machine_configuration.insert(label, value);
        self
    }

    ///
    /// Adds a run configuration entry.
    ///
    pub fn set_config<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.configuration.insert(name, value);
        self
    }

    ///
    /// Adds a result that must be reproduced exactly.
    ///
    pub fn set_result<N>(&mut self, name: N, value: f64) -> &mut Self
    where
        N: Into<String>,
    {
        self.results.insert(name, ResultValue::exact(value));
        self
    }

    ///
    /// Adds a result that may deviate by the `tolerance` fraction of the baseline.
    ///
    pub fn set_result_with_tolerance<N>(
        &mut self,
        name: N,
        value: f64,
        tolerance: f64,
    ) -> &mut Self
    where
        N: Into<String>,
    {
        self.results.insert(name, ResultValue::relative(value, tolerance));
        self
    }

    ///
    /// Checks the accumulated run against the archive at `archive_path`,
    /// saving the archive if the outcome changes it.
    ///
    /// The caller must be the only writer of `archive_path` for the duration of
    /// the call. In a parallel job, designate a single process; concurrent
    /// writers must be serialized externally.
    ///
    pub fn run<P>(
        &self,
        archive_path: P,
        test_name: &str,
        host_name: &str,
    ) -> Result<Outcome, Error>
    where
        P: AsRef<Path>,
    {
        let submission = Submission {
            machine: host_name.to_owned(),
            machine_configuration: self.machine_configuration.clone(),
            test: test_name.to_owned(),
            test_configuration: self.configuration.clone(),
            results: self.results.clone(),
        };
        submission.validate()?;

        let mut archive = Archive::load(archive_path)?;
        let outcome = archive.classify(&submission);
        if outcome.is_mutating() {
            archive.save()?;
        }
        Ok(outcome)
    }
}
