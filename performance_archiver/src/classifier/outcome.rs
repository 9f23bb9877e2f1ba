//!
//! The archiver run outcome.
//!

use colored::Colorize;

///
/// The archiver run outcome.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The results reproduce the archived baseline.
    Passed,
    /// At least one result deviates from the archived baseline.
    Failed,
    /// The machine was seen for the first time.
    NewMachine,
    /// The machine was seen with a new configuration.
    NewConfiguration,
    /// The test was run on this machine configuration for the first time.
    NewTest,
    /// The test was run with a new configuration.
    NewTestConfiguration,
    /// The results reproduce the baseline and add new measurements.
    UpdatedTest,
}

impl Outcome {
    ///
    /// Whether the archive was changed and must be saved.
    ///
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Passed | Self::Failed)
    }

    ///
    /// Whether the run is not a regression.
    ///
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed)
    }

    ///
    /// Returns the verdict highlighted for the terminal.
    ///
    pub fn print(&self) -> String {
        let verdict = match self {
            Self::Passed => return "Archiver Passed".green().to_string(),
            Self::Failed => return "Archiver Failed".bright_red().to_string(),
            _ => "Archiver Passed.".green(),
        };
        format!("{verdict} {}", self.details())
    }

    ///
    /// Returns the description of the archive change.
    ///
    fn details(&self) -> &'static str {
        match self {
            Self::Passed | Self::Failed => "",
            Self::NewMachine => "Adding new machine entry.",
            Self::NewConfiguration => "Adding new machine configuration.",
            Self::NewTest => "Adding new test entry.",
            Self::NewTestConfiguration => "Adding new test entry configuration.",
            Self::UpdatedTest => "Updating test entry.",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "Archiver Passed"),
            Self::Failed => write!(f, "Archiver Failed"),
            _ => write!(f, "Archiver Passed. {}", self.details()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn mutation_and_success() {
        assert!(!Outcome::Passed.is_mutating());
        assert!(!Outcome::Failed.is_mutating());
        assert!(Outcome::NewMachine.is_mutating());
        assert!(Outcome::UpdatedTest.is_mutating());

        assert!(Outcome::NewTestConfiguration.is_success());
        assert!(!Outcome::Failed.is_success());
    }

    #[test]
    fn message() {
        assert_eq!(
            Outcome::NewMachine.to_string(),
            "Archiver Passed. Adding new machine entry."
        );
        assert_eq!(Outcome::Failed.to_string(), "Archiver Failed");
        assert!(Outcome::UpdatedTest.print().ends_with("Updating test entry."));
    }
}
