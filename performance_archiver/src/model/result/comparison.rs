//!
//! The result set comparison outcome.
//!

use crate::model::result::ResultValue;

///
/// The result set comparison outcome.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// Every stored value is reproduced and nothing new was measured.
    Matched,
    /// Every stored value is reproduced and new names were measured.
    Extended {
        /// The names absent from the stored set.
        added: Vec<String>,
    },
    /// At least one stored value is not reproduced.
    Mismatched {
        /// The failed values.
        mismatches: Vec<Mismatch>,
    },
}

///
/// A stored value not reproduced by a fresh run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// The result name.
    pub name: String,
    /// The stored baseline.
    pub stored: ResultValue,
    /// The fresh measurement, `None` if it was not measured.
    pub fresh: Option<ResultValue>,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fresh {
            Some(ref fresh) => write!(
                f,
                "{}: expected {} ({}), found {}",
                self.name, self.stored.value, self.stored.tolerance, fresh.value
            ),
            None => write!(
                f,
                "{}: expected {} ({}), found nothing",
                self.name, self.stored.value, self.stored.tolerance
            ),
        }
    }
}
