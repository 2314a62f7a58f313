use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(alias = "ScreenWidth")]
    pub screen_width: u32,

    #[serde(alias = "ScreenHeight")]
    pub screen_height: u32,

    /// Frames (and thus generations) per second. Zero leaves the frame rate uncapped.
    #[serde(alias = "TargetFps")]
    pub target_fps: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
            target_fps: 120,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "resources/config.json";

    /// Reads the config at `path`, falling back to the defaults when it is missing or malformed.
    pub fn load<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        Self::read(path).unwrap_or_else(|e| {
            log::warn!("Using default config, {}: {e:#}", path.display());
            Self::default()
        })
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        Self::from_slice(&config_serialized)
    }

    pub fn from_slice(config_serialized: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(config_serialized).context("Couldn't deserialize config")
    }
}
