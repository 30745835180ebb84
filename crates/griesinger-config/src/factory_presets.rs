//! Factory presets bundled with the library.
//!
//! Always available without external files. Lookup is case-insensitive and
//! matches either the key (`"large-hall"`) or the display name
//! (`"Large Hall"`).

use crate::ReverbPreset;

/// Factory preset keys, in listing order.
pub static FACTORY_PRESET_NAMES: &[&str] =
    &["default", "daisy", "small-room", "large-hall", "mono-wash"];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("default", DEFAULT_PRESET),
    ("daisy", DAISY_PRESET),
    ("small-room", SMALL_ROOM_PRESET),
    ("large-hall", LARGE_HALL_PRESET),
    ("mono-wash", MONO_WASH_PRESET),
];

const DEFAULT_PRESET: &str = r#"
name = "Default"
description = "Network defaults"
sample_rate = 48000
decay = 0.82
damping = 4800.0
mix = 0.35
width = 1.0
"#;

const DAISY_PRESET: &str = r#"
name = "Daisy Seed"
description = "Tuning used on the Daisy Seed board"
sample_rate = 48000
decay = 0.84
damping = 4500.0
mix = 0.35
width = 1.0
"#;

const SMALL_ROOM_PRESET: &str = r#"
name = "Small Room"
description = "Short, bright and slightly narrow"
sample_rate = 48000
decay = 0.6
damping = 7000.0
mix = 0.25
width = 0.8
"#;

const LARGE_HALL_PRESET: &str = r#"
name = "Large Hall"
description = "Long tail with gentle high-frequency loss"
sample_rate = 48000
decay = 0.92
damping = 5500.0
mix = 0.45
width = 1.0
"#;

const MONO_WASH_PRESET: &str = r#"
name = "Mono Wash"
description = "Dark, dense, centered tail"
sample_rate = 48000
decay = 0.9
damping = 2500.0
mix = 0.6
width = 0.0
"#;

/// All factory presets, parsed.
pub fn factory_presets() -> Vec<ReverbPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| ReverbPreset::from_toml(toml).ok())
        .collect()
}

/// Factory presets paired with their keys.
pub fn factory_presets_with_keys() -> Vec<(&'static str, ReverbPreset)> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|&(key, toml)| ReverbPreset::from_toml(toml).ok().map(|p| (key, p)))
        .collect()
}

/// Look up a factory preset by key or display name (case-insensitive).
pub fn get_factory_preset(name: &str) -> Option<ReverbPreset> {
    let name_lower = name.to_lowercase();

    for (key, toml) in FACTORY_PRESETS_TOML {
        if key.to_lowercase() == name_lower {
            return ReverbPreset::from_toml(toml).ok();
        }
    }

    for (_, toml) in FACTORY_PRESETS_TOML {
        if let Ok(preset) = ReverbPreset::from_toml(toml)
            && preset.name.to_lowercase() == name_lower
        {
            return Some(preset);
        }
    }

    None
}

/// Keys of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Whether `name` resolves to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
