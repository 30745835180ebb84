//! Parameter listing.

use griesinger_reverb::ReverbParam;

pub fn run() -> anyhow::Result<()> {
    println!("Reverb Parameters:\n");
    println!(
        "  {:<4} {:<10} {:<8} {:>9} {:>9} {:>9} {:>6}",
        "ID", "NAME", "KEY", "MIN", "MAX", "DEFAULT", "STEP"
    );
    for param in ReverbParam::ALL {
        let desc = param.descriptor();
        let suffix = desc.unit.suffix();
        println!(
            "  {:<4} {:<10} {:<8} {:>9} {:>9} {:>9} {:>6}",
            desc.id.0,
            desc.name,
            desc.string_id,
            format!("{}{suffix}", desc.min),
            format!("{}{suffix}", desc.max),
            format!("{}{suffix}", desc.default),
            desc.step,
        );
    }
    println!("\nOut-of-range values are clamped; NaN maps to the minimum.");
    Ok(())
}
