//! Parameter and preset validation.
//!
//! The network clamps every parameter, so out-of-range values are not
//! fatal. Validation reports them so a host can warn before they are
//! silently clamped. Non-finite values are the one hard error.
//!
//! # Example
//!
//! ```rust
//! use griesinger_config::{ReverbPreset, validate_preset};
//!
//! let mut preset = ReverbPreset::new("Hot");
//! preset.decay = 1.2;
//! let warnings = validate_preset(&preset);
//! assert_eq!(warnings.len(), 1);
//! ```

use griesinger_core::ParamDescriptor;
use griesinger_reverb::{ReverbParam, ReverbSettings};
use thiserror::Error;

use crate::ReverbPreset;

/// Sample rate the delay lengths are tuned for.
pub const TUNED_SAMPLE_RATE: u32 = 48000;

/// Validation findings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// No parameter with this name.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Value outside the parameter range; it will be clamped.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}], will be clamped")]
    OutOfRange {
        /// Name of the parameter.
        param: &'static str,
        /// The value as given.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// NaN or infinite value.
    #[error("parameter '{param}' must be finite, got {value}")]
    NotFinite {
        /// Name of the parameter.
        param: &'static str,
        /// The value as given.
        value: f32,
    },

    /// Zero sample rate.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// Delay lengths are fixed sample counts; other rates resize the room.
    #[error(
        "sample rate {0} Hz differs from the {tuned} Hz the delays are tuned for",
        tuned = TUNED_SAMPLE_RATE
    )]
    UntunedSampleRate(u32),
}

impl ValidationError {
    /// Whether the finding prevents the value from being used at all.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ValidationError::UnknownParameter(_)
                | ValidationError::NotFinite { .. }
                | ValidationError::ZeroSampleRate
        )
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check `value` against a descriptor.
pub fn check_value(desc: &ParamDescriptor, value: f32) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            param: desc.string_id,
            value,
        });
    }
    if value < desc.min || value > desc.max {
        return Err(ValidationError::OutOfRange {
            param: desc.string_id,
            value,
            min: desc.min,
            max: desc.max,
        });
    }
    Ok(())
}

/// Check a value for a parameter given by name.
pub fn validate_param(name: &str, value: f32) -> ValidationResult<ReverbParam> {
    let param = ReverbParam::from_name(name)
        .ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
    check_value(&param.descriptor(), value)?;
    Ok(param)
}

/// All findings for a settings snapshot, in parameter order.
pub fn validate_settings(settings: &ReverbSettings) -> Vec<ValidationError> {
    ReverbParam::ALL
        .into_iter()
        .filter_map(|p| check_value(&p.descriptor(), settings.get(p)).err())
        .collect()
}

/// Check a sample rate.
pub fn validate_sample_rate(sample_rate: u32) -> ValidationResult<()> {
    match sample_rate {
        0 => Err(ValidationError::ZeroSampleRate),
        TUNED_SAMPLE_RATE => Ok(()),
        other => Err(ValidationError::UntunedSampleRate(other)),
    }
}

/// All findings for a preset: parameters first, then the sample rate.
pub fn validate_preset(preset: &ReverbPreset) -> Vec<ValidationError> {
    let mut findings = validate_settings(&preset.settings());
    if let Err(e) = validate_sample_rate(preset.sample_rate) {
        findings.push(e);
    }
    findings
}
