//! Game settings
//!
//! Read from the JSON file named by `FURIOUS_BIRDS_SETTINGS`. Every field is
//! optional; anything missing falls back to the defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::SceneOptions;
use crate::sim::Layout;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "FURIOUS_BIRDS_SETTINGS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the angle / red y text lines
    pub debug_overlay: bool,
    /// Fixed layout seed (random when unset)
    pub seed: Option<u64>,
    pub target_count: usize,
    pub min_target_distance: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_overlay: true,
            seed: None,
            target_count: PIG_COUNT,
            min_target_distance: MIN_DISTANCE_BETWEEN_PIGS,
        }
    }
}

impl Settings {
    /// Parse and validate
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Self = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values placement cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_target_distance < 0 {
            anyhow::bail!(
                "min_target_distance must not be negative, got {}",
                self.min_target_distance
            );
        }
        if self
            .min_target_distance
            .checked_mul(self.min_target_distance)
            .is_none()
        {
            anyhow::bail!(
                "min_target_distance {} is too large",
                self.min_target_distance
            );
        }
        Ok(())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Load from `FURIOUS_BIRDS_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings ({:#}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Seed to use for this session
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn layout(&self) -> Layout {
        Layout {
            target_count: self.target_count,
            min_target_distance: self.min_target_distance,
            ..Layout::default()
        }
    }

    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            debug_overlay: self.debug_overlay,
        }
    }
}
