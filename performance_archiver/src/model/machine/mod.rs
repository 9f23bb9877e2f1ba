//!
//! The archived machine entry.
//!

pub mod configuration;

use serde::Deserialize;
use serde::Serialize;

use crate::model::configuration::Configuration as ConfigurationSet;

use self::configuration::Configuration;

///
/// The archived machine entry.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// The configurations the machine was seen with.
    #[serde(rename = "MachineConfigurations", default)]
    pub configurations: Vec<Configuration>,
}

impl Machine {
    ///
    /// Returns the configuration described by `configuration`.
    ///
    pub fn configuration_mut(
        &mut self,
        configuration: &ConfigurationSet,
    ) -> Option<&mut Configuration> {
        self.configurations
            .iter_mut()
            .find(|existing| &existing.configuration == configuration)
    }

    ///
    /// Appends a new configuration, labelling it by its position.
    ///
    pub fn push(&mut self, configuration: ConfigurationSet) -> &mut Configuration {
        let name = format!("Configuration {}", self.configurations.len() + 1);
        self.configurations.push(Configuration::new(name, configuration));
        self.configurations.last_mut().expect("Always exists")
    }
}
