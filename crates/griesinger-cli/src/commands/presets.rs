//! Factory preset listing.

use clap::Args;
use griesinger_config::{ReverbPreset, factory_presets_with_keys};

#[derive(Args)]
pub struct PresetsArgs {
    /// Show one preset (factory name or TOML file) instead of listing
    name: Option<String>,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.name {
        Some(name) => show(&name),
        None => {
            list();
            Ok(())
        }
    }
}

fn list() {
    println!("Factory Presets:\n");
    println!(
        "  {:<12} {:<12} {:>6} {:>9} {:>5} {:>6}",
        "KEY", "NAME", "DECAY", "DAMPING", "MIX", "WIDTH"
    );
    for (key, preset) in factory_presets_with_keys() {
        println!(
            "  {:<12} {:<12} {:>6.2} {:>9.0} {:>5.2} {:>6.2}",
            key, preset.name, preset.decay, preset.damping, preset.mix, preset.width
        );
    }
    println!("\nUse --preset <KEY> with `process` or `impulse`.");
}

fn show(name: &str) -> anyhow::Result<()> {
    let preset = ReverbPreset::resolve(name)?;
    print!("{}", preset.to_toml()?);
    Ok(())
}
