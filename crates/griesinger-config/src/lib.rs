//! Presets and validation for the Griesinger reverb.
//!
//! # Features
//!
//! - **Preset files**: load and save [`ReverbPreset`]s as TOML
//! - **Factory presets**: built-in presets, always available
//! - **Validation**: warn about values the network will clamp
//!
//! # Example
//!
//! ```rust,no_run
//! use griesinger_config::{ReverbPreset, get_factory_preset};
//!
//! let hall = get_factory_preset("large-hall").unwrap();
//! let mut network = hall.build();
//!
//! let custom = ReverbPreset::new("Plate").with_description("Bright and short");
//! custom.save("plate.toml").unwrap();
//! custom.apply_to(&mut network);
//! ```

mod error;
mod preset;

/// Parameter and preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, factory_presets_with_keys,
    get_factory_preset, is_factory_preset,
};
pub use preset::ReverbPreset;
pub use validation::{
    TUNED_SAMPLE_RATE, ValidationError, ValidationResult, check_value, validate_param,
    validate_preset, validate_sample_rate, validate_settings,
};
