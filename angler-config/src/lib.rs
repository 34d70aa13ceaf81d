use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path, sync::LazyLock};

pub mod enchantments;
pub mod logging;

pub use enchantments::EnchantmentsConfig;
pub use logging::LoggingConfig;

pub static ANGLER_CONFIG: LazyLock<AnglerConfiguration> = LazyLock::new(AnglerConfiguration::load);

/// Feature gates for the module. Every gameplay addition can be switched
/// off individually so the host behaves like vanilla by default.
#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AnglerConfiguration {
    pub enchantments: EnchantmentsConfig,
    pub logging: LoggingConfig,
}

pub trait LoadTomlConfiguration {
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
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update. Just delete the old config and restart.",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(path, toml::to_string(&content).unwrap()) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}. This is probably caused by a config update. Just delete the old config and restart.",
                    path, err
                );
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for AnglerConfiguration {
    fn get_path() -> &'static Path {
        Path::new("angler.toml")
    }

    fn validate(&self) {}
}
