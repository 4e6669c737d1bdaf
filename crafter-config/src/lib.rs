use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path, sync::LazyLock};

pub mod logging;

pub use crafting::CraftingConfig;

mod crafting;

pub static ADVANCED_CONFIG: LazyLock<AdvancedConfiguration> =
    LazyLock::new(AdvancedConfiguration::load);

pub static BASIC_CONFIG: LazyLock<BasicConfiguration> = LazyLock::new(BasicConfiguration::load);

/// Optional features that don't change what gets crafted.
#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct BasicConfiguration {
    /// Directory holding the recipe files.
    pub catalog_path: String,
    pub crafting: CraftingConfig,
}

impl Default for BasicConfiguration {
    fn default() -> Self {
        Self {
            catalog_path: "assets/recipes".to_string(),
            crafting: CraftingConfig::default(),
        }
    }
}

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update, just delete the old config and start again",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!(
                            "Couldn't write default config to {:?}. Reason: {}",
                            path, err
                        );
                    }
                }
                Err(err) => warn!("Couldn't serialize default config for {:?}: {}", path, err),
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) {}
}

impl LoadTomlConfiguration for BasicConfiguration {
    fn get_path() -> &'static Path {
        Path::new("configuration.toml")
    }

    fn validate(&self) {
        assert!(
            !self.catalog_path.is_empty(),
            "The catalog path must not be empty"
        );
        self.crafting.validate();
    }
}

#[cfg(test)]
mod test {
    use super::{AdvancedConfiguration, BasicConfiguration, LoadTomlConfiguration};
    use crate::logging::LevelFilter;

    #[test]
    fn defaults_are_valid() {
        let basic = BasicConfiguration::default();
        basic.validate();
        let settings = basic.crafting.catalog_settings();
        assert_eq!((settings.width, settings.height), (3, 3));
        assert_eq!(settings.layers, ["bottom", "middle", "top"]);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let basic: BasicConfiguration = toml::from_str(
            r#"
            catalog_path = "data/recipes"

            [crafting]
            layers = ["floor"]
            "#,
        )
        .unwrap();
        assert_eq!(basic.catalog_path, "data/recipes");
        assert_eq!(basic.crafting.width, 3);
        assert_eq!(basic.crafting.layers, ["floor"]);

        let advanced: AdvancedConfiguration = toml::from_str(
            r#"
            [logging]
            level = "Debug"
            "#,
        )
        .unwrap();
        assert_eq!(advanced.logging.level, LevelFilter::Debug);
        assert!(advanced.logging.enabled);
    }

    #[test]
    fn default_file_parses_back() {
        let written = toml::to_string(&BasicConfiguration::default()).unwrap();
        let read: BasicConfiguration = toml::from_str(&written).unwrap();
        assert_eq!(read, BasicConfiguration::default());
    }

    #[test]
    #[should_panic(expected = "Crafting layer names must be unique")]
    fn duplicate_layers_are_rejected() {
        let mut basic = BasicConfiguration::default();
        basic.crafting.layers = vec!["middle".into(), "middle".into()];
        basic.validate();
    }

    #[test]
    #[should_panic(expected = "Crafting grid must be at least 1x1")]
    fn empty_footprint_is_rejected() {
        let mut basic = BasicConfiguration::default();
        basic.crafting.width = 0;
        basic.validate();
    }
}
