//! Preset file format and operations.

use griesinger_reverb::params::{DAMPING, DECAY, MIX, WIDTH};
use griesinger_reverb::{ReverbNetwork, ReverbParam, ReverbSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;

/// A named set of reverb parameters.
///
/// Parameter fields missing from the TOML take the network's defaults.
/// Values outside the parameter ranges are kept as written and clamped when
/// applied; see [`validate_preset`](crate::validate_preset) for a warning
/// list. Non-finite values are rejected on load.
///
/// # TOML Format
///
/// ```toml
/// name = "Daisy Seed"
/// description = "Tuning used on the Daisy Seed board"
/// sample_rate = 48000
/// decay = 0.84
/// damping = 4500.0
/// mix = 0.35
/// width = 1.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReverbPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Comb feedback gain.
    #[serde(default = "default_decay")]
    pub decay: f32,

    /// Damping cutoff in Hz.
    #[serde(default = "default_damping")]
    pub damping: f32,

    /// Dry/wet blend.
    #[serde(default = "default_mix")]
    pub mix: f32,

    /// Stereo width of the wet signal.
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_decay() -> f32 {
    DECAY.default
}

fn default_damping() -> f32 {
    DAMPING.default
}

fn default_mix() -> f32 {
    MIX.default
}

fn default_width() -> f32 {
    WIDTH.default
}

impl ReverbPreset {
    /// Create a preset with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_settings(name, ReverbSettings::default())
    }

    /// Create a preset from a settings snapshot.
    pub fn from_settings(name: impl Into<String>, settings: ReverbSettings) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            decay: settings.decay,
            damping: settings.damping,
            mix: settings.mix,
            width: settings.width,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let preset: ReverbPreset = toml::from_str(toml_str)?;
        preset.check_finite()?;
        Ok(preset)
    }

    /// Resolve a factory preset name or a path to a preset file.
    ///
    /// Factory names win over relative paths with the same spelling.
    pub fn resolve(name_or_path: &str) -> Result<Self, ConfigError> {
        if let Some(preset) = get_factory_preset(name_or_path) {
            return Ok(preset);
        }
        let path = Path::new(name_or_path);
        if path.is_file() {
            return Self::load(path);
        }
        Err(ConfigError::PresetNotFound(name_or_path.to_string()))
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parameter snapshot, unclamped.
    pub fn settings(&self) -> ReverbSettings {
        ReverbSettings {
            decay: self.decay,
            damping: self.damping,
            mix: self.mix,
            width: self.width,
        }
    }

    /// Apply the parameters to a running network (clamped by its setters).
    pub fn apply_to(&self, network: &mut ReverbNetwork) {
        network.apply(&self.settings());
    }

    /// Build a network at the preset's sample rate.
    pub fn build(&self) -> ReverbNetwork {
        ReverbNetwork::with_settings(self.sample_rate as f32, self.settings())
    }

    fn check_finite(&self) -> Result<(), ConfigError> {
        for param in ReverbParam::ALL {
            if !self.settings().get(param).is_finite() {
                return Err(ConfigError::invalid_parameter(
                    param.descriptor().string_id,
                    "value must be finite",
                ));
            }
        }
        Ok(())
    }
}

impl Default for ReverbPreset {
    fn default() -> Self {
        Self::new("Default")
    }
}
