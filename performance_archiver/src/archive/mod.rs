//!
//! The performance archive.
//!

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::classifier::outcome::Outcome;
use crate::classifier::submission::Submission;
use crate::error::Error;
use crate::model::machine::Machine;
use crate::output_format::OutputFormat;

///
/// The performance archive.
///
/// The archive file is the unit of consistency: it is loaded, mutated in
/// memory, and replaced as a whole. Concurrent writers are not coordinated.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Archive {
    /// The file the archive was loaded from.
    pub path: PathBuf,
    /// The machines by name.
    pub machines: BTreeMap<String, Machine>,
}

impl Archive {
    ///
    /// Creates an empty archive bound to `path`.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            machines: BTreeMap::new(),
        }
    }

    ///
    /// Loads the archive at `path`.
    ///
    /// A missing or blank file is an empty archive.
    ///
    pub fn load<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        let text = match std::fs::read_to_string(path.as_path()) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Archive file not found, starting empty");
                return Ok(Self::new(path));
            }
            Err(error) => return Err(Error::Io { error, path }),
        };
        if text.trim().is_empty() {
            return Ok(Self::new(path));
        }

        let machines: BTreeMap<String, Machine> = match serde_yaml::from_str(text.as_str()) {
            Ok(machines) => machines,
            Err(error) => return Err(Error::Format { error, path }),
        };
        tracing::debug!(path = %path.display(), machines = machines.len(), "Archive loaded");
        Ok(Self { path, machines })
    }

    ///
    /// Replaces the archive file with the current contents.
    ///
    /// The contents are written to a temporary file next to the destination
    /// and renamed over it, so readers never observe a partial archive.
    ///
    pub fn save(&self) -> Result<(), Error> {
        let text = self.render(OutputFormat::Yaml)?;

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let io_error = |error: std::io::Error| Error::Io {
            error,
            path: self.path.clone(),
        };
        std::fs::create_dir_all(directory.as_path()).map_err(io_error)?;

        let mut file = tempfile::NamedTempFile::new_in(directory.as_path()).map_err(io_error)?;
        file.write_all(text.as_bytes()).map_err(io_error)?;
        if let Ok(metadata) = std::fs::metadata(self.path.as_path()) {
            file.as_file()
                .set_permissions(metadata.permissions())
                .map_err(io_error)?;
        }
        file.as_file().sync_all().map_err(io_error)?;
        file.persist(self.path.as_path()).map_err(|error| io_error(error.error))?;

        tracing::debug!(
            path = %self.path.display(),
            machines = self.machines.len(),
            "Archive saved"
        );
        Ok(())
    }

    ///
    /// Renders the archive contents in the given format.
    ///
    pub fn render(&self, format: OutputFormat) -> Result<String, Error> {
        match format {
            OutputFormat::Yaml => serde_yaml::to_string(&self.machines)
                .map_err(|error| Error::Serialization(error.to_string())),
            OutputFormat::Json => serde_json::to_string_pretty(&self.machines)
                .map_err(|error| Error::Serialization(error.to_string())),
        }
    }

    ///
    /// Classifies the `submission`, applying the implied change in memory.
    ///
    pub fn classify(&mut self, submission: &Submission) -> Outcome {
        let outcome = crate::classifier::classify(&mut self.machines, submission);
        tracing::info!(
            machine = %submission.machine,
            machine_configuration = %submission.machine_configuration,
            test = %submission.test,
            test_configuration = %submission.test_configuration,
            ?outcome,
            "Run classified"
        );
        outcome
    }
}

///
/// Loads the archive at `path` and renders it for inspection.
///
pub fn print_archive<P>(path: P, format: OutputFormat) -> Result<String, Error>
where
    P: AsRef<Path>,
{
    Archive::load(path)?.render(format)
}
