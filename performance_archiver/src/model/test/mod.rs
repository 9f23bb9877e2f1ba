//!
//! The archived test entry.
//!

pub mod variant;

use serde::Deserialize;
use serde::Serialize;

use crate::model::configuration::Configuration;

use self::variant::Variant;

///
/// The archived test entry.
///
/// Each variant has a distinct configuration.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Test {
    /// The configuration variants in the order of observation.
    pub variants: Vec<Variant>,
}

impl Test {
    ///
    /// Creates a test with its first observed variant.
    ///
    pub fn new(variant: Variant) -> Self {
        Self {
            variants: vec![variant],
        }
    }

    ///
    /// Returns the variant run with `configuration`.
    ///
    pub fn variant_mut(&mut self, configuration: &Configuration) -> Option<&mut Variant> {
        self.variants
            .iter_mut()
            .find(|variant| &variant.configuration == configuration)
    }

    ///
    /// Appends a variant with a configuration not seen before.
    ///
    pub fn push(&mut self, variant: Variant) {
        debug_assert!(
            self.variants
                .iter()
                .all(|existing| existing.configuration != variant.configuration),
            "Duplicate test configuration"
        );
        self.variants.push(variant);
    }
}
