//!
//! The result comparison tolerance.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The result comparison tolerance.
///
/// Serialized as the string `exact` or as the relative tolerance number.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Representation", into = "Representation")]
pub enum Tolerance {
    /// The values must be equal.
    #[default]
    Exact,
    /// The fresh value may differ from the stored one by the given fraction.
    Relative(f64),
}

impl Tolerance {
    /// The serialized keyword of the exact mode.
    pub const EXACT_KEYWORD: &'static str = "exact";

    ///
    /// Whether the tolerance is a non-negative number.
    ///
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Exact => true,
            Self::Relative(tolerance) => *tolerance >= 0.0,
        }
    }

    ///
    /// Checks whether the `fresh` value is acceptable against the `stored` one.
    ///
    pub fn accepts(&self, stored: f64, fresh: f64) -> bool {
        match self {
            Self::Exact => stored == fresh,
            Self::Relative(tolerance) if stored == 0.0 => fresh.abs() <= *tolerance,
            Self::Relative(tolerance) => (stored - fresh).abs() <= tolerance * stored.abs(),
        }
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "{}", Self::EXACT_KEYWORD),
            Self::Relative(tolerance) => write!(f, "±{tolerance}"),
        }
    }
}

///
/// The on-disk form of the tolerance.
///
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Representation {
    /// The relative tolerance.
    Relative(f64),
    /// The keyword, only `exact` is allowed.
    Keyword(String),
}

impl TryFrom<Representation> for Tolerance {
    type Error = String;

    fn try_from(value: Representation) -> Result<Self, Self::Error> {
        match value {
            Representation::Keyword(keyword) if keyword == Self::EXACT_KEYWORD => Ok(Self::Exact),
            Representation::Keyword(keyword) => Err(format!(
                "unknown tolerance `{keyword}`, expected a number or `{}`",
                Self::EXACT_KEYWORD
            )),
            Representation::Relative(tolerance) if tolerance >= 0.0 => {
                Ok(Self::Relative(tolerance))
            }
            Representation::Relative(tolerance) => {
                Err(format!("tolerance {tolerance} must not be negative"))
            }
        }
    }
}

impl From<Tolerance> for Representation {
    fn from(value: Tolerance) -> Self {
        match value {
            Tolerance::Exact => Self::Keyword(Tolerance::EXACT_KEYWORD.to_owned()),
            Tolerance::Relative(tolerance) => Self::Relative(tolerance),
        }
    }
}
