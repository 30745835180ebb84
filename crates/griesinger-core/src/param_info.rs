//! Parameter introspection for host-facing controls.
//!
//! The [`ParameterInfo`] trait exposes an effect's parameters by index, each
//! described by a [`ParamDescriptor`]. Hosts use it to map encoders or MIDI
//! controls onto parameters, to list them in a CLI, and to save and restore
//! presets without knowing the concrete effect type.
//!
//! Each descriptor carries a stable [`ParamId`] and a `string_id`; both
//! survive reordering and are what presets should key on.
//!
//! # Example
//!
//! ```rust
//! use griesinger_core::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo};
//!
//! struct Level {
//!     level: f32,
//! }
//!
//! const LEVEL: ParamDescriptor =
//!     ParamDescriptor::new("Level", "Level", ParamUnit::None, 0.0, 1.0, 0.5)
//!         .with_id(ParamId(1), "level");
//!
//! impl ParameterInfo for Level {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         (index == 0).then_some(LEVEL)
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         if index == 0 { self.level } else { 0.0 }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.level = LEVEL.clamp(value);
//!         }
//!     }
//! }
//!
//! let mut level = Level { level: 0.5 };
//! level.set_param(0, 3.0);
//! assert_eq!(level.get_param(0), 1.0);
//! ```

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` never changes for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz, for cutoff frequencies.
    Hertz,
    /// Dimensionless gain or blend factor.
    None,
}

impl ParamUnit {
    /// Unit suffix for display.
    ///
    /// ```rust
    /// use griesinger_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}

/// Metadata for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full name for display (e.g. "Damping").
    pub name: &'static str,
    /// Short name for small displays, at most 8 characters.
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Minimum accepted value.
    pub min: f32,
    /// Maximum accepted value.
    pub max: f32,
    /// Value applied at construction.
    pub default: f32,
    /// Recommended encoder increment.
    pub step: f32,
    /// Stable numeric ID. `ParamId(0)` means unassigned.
    pub id: ParamId,
    /// Stable string ID, e.g. `"decay"`. Empty means unassigned.
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Descriptor with a step of 1% of the range and no ID.
    pub const fn new(
        name: &'static str,
        short_name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit,
            min,
            max,
            default,
            step: (max - min) / 100.0,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Sets the stable numeric and string IDs.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the encoder step.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Clamps a value to `[min, max]`. NaN maps to `min`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }
}

/// Index-based parameter access.
///
/// Valid indices are `0..param_count()`. Out-of-range indices return
/// `None`/`0.0` on read and are ignored on write.
pub trait ParameterInfo {
    /// Number of exposed parameters.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Set the parameter at `index`. Implementations clamp to the
    /// descriptor range.
    fn set_param(&mut self, index: usize, value: f32);
}
