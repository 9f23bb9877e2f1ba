//!
//! The performance regression archiver library.
//!

pub mod archive;
pub mod archiver;
pub mod classifier;
pub mod error;
pub mod model;
pub mod output_format;


pub use crate::archive::print_archive;
pub use crate::archive::Archive;
pub use crate::archiver::Archiver;
pub use crate::classifier::classify;
pub use crate::classifier::outcome::Outcome;
pub use crate::classifier::submission::Submission;
pub use crate::error::Error;
pub use crate::model::configuration::Configuration;
pub use crate::model::machine::configuration::Configuration as MachineConfiguration;
pub use crate::model::machine::Machine;
pub use crate::model::result::comparison::Comparison;
pub use crate::model::result::comparison::Mismatch;
pub use crate::model::result::tolerance::Tolerance;
pub use crate::model::result::ResultSet;
pub use crate::model::result::ResultValue;
pub use crate::model::test::variant::Variant as TestVariant;
pub use crate::model::test::Test;
pub use crate::model::value::Value;
pub use crate::output_format::OutputFormat;
