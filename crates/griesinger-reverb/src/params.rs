//! Parameter descriptors and the all-at-once settings snapshot.
//!
//! The descriptor ranges are the clamp ranges the network's setters apply.
//! Indices follow [`ReverbParam`].

use griesinger_core::{ParamDescriptor, ParamId, ParamUnit};

/// Decay: comb feedback gain.
pub const DECAY: ParamDescriptor =
    ParamDescriptor::new("Decay", "Decay", ParamUnit::None, 0.10, 0.98, 0.82)
        .with_id(ParamId(100), "decay")
        .with_step(0.01);

/// Damping: comb feedback lowpass cutoff in Hz.
pub const DAMPING: ParamDescriptor =
    ParamDescriptor::new("Damping", "Damp", ParamUnit::Hertz, 800.0, 12000.0, 4800.0)
        .with_id(ParamId(101), "damping")
        .with_step(100.0);

/// Mix: 0 = dry only, 1 = wet only.
pub const MIX: ParamDescriptor = ParamDescriptor::new("Mix", "Mix", ParamUnit::None, 0.0, 1.0, 0.35)
    .with_id(ParamId(102), "mix");

/// Width: 0 = mono wet, 1 = full stereo wet.
pub const WIDTH: ParamDescriptor =
    ParamDescriptor::new("Width", "Width", ParamUnit::None, 0.0, 1.0, 1.0)
        .with_id(ParamId(103), "width");

/// Parameter indices for [`ParameterInfo`](griesinger_core::ParameterInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReverbParam {
    /// Index 0.
    Decay,
    /// Index 1.
    Damping,
    /// Index 2.
    Mix,
    /// Index 3.
    Width,
}

impl ReverbParam {
    /// All parameters in index order.
    pub const ALL: [ReverbParam; 4] = [
        ReverbParam::Decay,
        ReverbParam::Damping,
        ReverbParam::Mix,
        ReverbParam::Width,
    ];

    /// Parameter for a `ParameterInfo` index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ReverbParam::Decay),
            1 => Some(ReverbParam::Damping),
            2 => Some(ReverbParam::Mix),
            3 => Some(ReverbParam::Width),
            _ => None,
        }
    }

    /// Look up a parameter by name, short name or string ID (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| {
            let desc = p.descriptor();
            desc.name.eq_ignore_ascii_case(name)
                || desc.short_name.eq_ignore_ascii_case(name)
                || desc.string_id.eq_ignore_ascii_case(name)
        })
    }

    /// Descriptor carrying this parameter's range and default.
    pub const fn descriptor(self) -> ParamDescriptor {
        match self {
            ReverbParam::Decay => DECAY,
            ReverbParam::Damping => DAMPING,
            ReverbParam::Mix => MIX,
            ReverbParam::Width => WIDTH,
        }
    }
}

/// Snapshot of the four user parameters.
///
/// `Default` matches the values the network starts with. Values are not
/// clamped here; [`ReverbNetwork::apply`](crate::ReverbNetwork::apply)
/// clamps them on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbSettings {
    /// Comb feedback gain.
    pub decay: f32,
    /// Damping cutoff in Hz.
    pub damping: f32,
    /// Dry/wet blend.
    pub mix: f32,
    /// Stereo width of the wet signal.
    pub width: f32,
}

impl ReverbSettings {
    /// Copy with every field clamped to its parameter range.
    pub fn clamped(self) -> Self {
        Self {
            decay: DECAY.clamp(self.decay),
            damping: DAMPING.clamp(self.damping),
            mix: MIX.clamp(self.mix),
            width: WIDTH.clamp(self.width),
        }
    }

    /// Value of a single parameter.
    pub fn get(&self, param: ReverbParam) -> f32 {
        match param {
            ReverbParam::Decay => self.decay,
            ReverbParam::Damping => self.damping,
            ReverbParam::Mix => self.mix,
            ReverbParam::Width => self.width,
        }
    }

    /// Overwrite a single parameter (unclamped).
    pub fn set(&mut self, param: ReverbParam, value: f32) {
        match param {
            ReverbParam::Decay => self.decay = value,
            ReverbParam::Damping => self.damping = value,
            ReverbParam::Mix => self.mix = value,
            ReverbParam::Width => self.width = value,
        }
    }
}

impl Default for ReverbSettings {
    fn default() -> Self {
        Self {
            decay: DECAY.default,
            damping: DAMPING.default,
            mix: MIX.default,
            width: WIDTH.default,
        }
    }
}
