//! Arguments and helpers shared by the rendering commands.

use anyhow::bail;
use clap::Args;
use griesinger_config::{ReverbPreset, validate_sample_rate, validate_settings};
use griesinger_reverb::{ReverbNetwork, ReverbParam, ReverbSettings};
use indicatif::{ProgressBar, ProgressStyle};

/// Reverb parameter selection: a preset plus explicit overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ReverbArgs {
    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Decay, 0.10 to 0.98
    #[arg(long)]
    pub decay: Option<f32>,

    /// Damping cutoff in Hz, 800 to 12000
    #[arg(long)]
    pub damping: Option<f32>,

    /// Dry/wet mix, 0 to 1
    #[arg(long)]
    pub mix: Option<f32>,

    /// Stereo width, 0 to 1
    #[arg(long)]
    pub width: Option<f32>,
}

impl ReverbArgs {
    /// Explicitly given parameters, in index order.
    fn overrides(&self) -> impl Iterator<Item = (ReverbParam, f32)> + '_ {
        [
            (ReverbParam::Decay, self.decay),
            (ReverbParam::Damping, self.damping),
            (ReverbParam::Mix, self.mix),
            (ReverbParam::Width, self.width),
        ]
        .into_iter()
        .filter_map(|(param, value)| value.map(|v| (param, v)))
    }

    /// Preset values (or defaults) with the explicit overrides applied.
    pub fn settings(&self) -> anyhow::Result<ReverbSettings> {
        let mut settings = match &self.preset {
            Some(name) => {
                let preset = ReverbPreset::resolve(name)?;
                tracing::info!(preset = %preset.name, "loaded preset");
                preset.settings()
            }
            None => ReverbSettings::default(),
        };
        for (param, value) in self.overrides() {
            settings.set(param, value);
        }
        Ok(settings)
    }
}

/// Build a network, rejecting non-finite values and warning about clamps.
pub fn build_network(sample_rate: u32, requested: ReverbSettings) -> anyhow::Result<ReverbNetwork> {
    for finding in validate_settings(&requested) {
        if finding.is_fatal() {
            bail!("{finding}");
        }
        tracing::warn!("{finding}");
    }
    if let Err(finding) = validate_sample_rate(sample_rate) {
        if finding.is_fatal() {
            bail!("{finding}");
        }
        tracing::warn!("{finding}");
    }

    let network = ReverbNetwork::with_settings(sample_rate as f32, requested);
    let applied = network.settings();
    tracing::info!(
        sample_rate,
        decay = applied.decay,
        damping = applied.damping,
        mix = applied.mix,
        width = applied.width,
        "reverb configured"
    );
    Ok(network)
}

/// Progress bar over `len` frames.
pub fn progress_bar(len: usize) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    Ok(pb)
}

/// Seconds to whole frames at `sample_rate`.
pub fn seconds_to_frames(seconds: f32, sample_rate: u32) -> anyhow::Result<usize> {
    if !seconds.is_finite() || seconds < 0.0 {
        bail!("duration must be a non-negative number of seconds, got {seconds}");
    }
    Ok((seconds * sample_rate as f32).round() as usize)
}
