//! Impulse response rendering command.

use super::common::{ReverbArgs, build_network, seconds_to_frames};
use crate::stats::{db_to_linear, last_frame_above, linear_to_db, stereo_peak};
use crate::wav::{StereoSamples, write_wav_stereo};
use anyhow::bail;
use clap::Args;
use std::path::PathBuf;

/// Level below the peak used for the reported decay time.
const DECAY_THRESHOLD_DB: f32 = -40.0;

#[derive(Args)]
pub struct ImpulseArgs {
    /// Output WAV file (stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// Length of the rendered response in seconds
    #[arg(long, default_value_t = 5.0)]
    seconds: f32,

    // Mix defaults to 1.0 (wet only) unless given.
    #[command(flatten)]
    reverb: ReverbArgs,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value_t = 32)]
    bit_depth: u16,
}

pub fn run(args: ImpulseArgs) -> anyhow::Result<()> {
    let mut settings = args.reverb.settings()?;
    if args.reverb.mix.is_none() {
        settings.mix = 1.0;
    }
    let mut network = build_network(args.sample_rate, settings)?;

    let frames = seconds_to_frames(args.seconds, args.sample_rate)?;
    if frames == 0 {
        bail!("impulse response length must be at least one frame");
    }

    let mut response = StereoSamples::silent(frames);
    for i in 0..frames {
        let x = if i == 0 { 1.0 } else { 0.0 };
        let (l, r) = network.process_stereo(x, x);
        response.left[i] = l;
        response.right[i] = r;
    }

    let response_peak = stereo_peak(&response.left, &response.right);
    println!("Impulse response ({} frames at {} Hz):", frames, args.sample_rate);
    println!("  Peak: {:.4} ({:.1} dB)", response_peak, linear_to_db(response_peak));

    let threshold = response_peak * db_to_linear(DECAY_THRESHOLD_DB);
    match last_frame_above(&response.left, &response.right, threshold) {
        Some(last) if last + 1 < frames => {
            let seconds = (last + 1) as f32 / args.sample_rate as f32;
            println!("  Decay to {DECAY_THRESHOLD_DB} dB: {seconds:.3} s");
        }
        Some(_) => {
            println!(
                "  Decay to {DECAY_THRESHOLD_DB} dB: longer than {:.3} s",
                args.seconds
            );
        }
        None => println!("  Decay to {DECAY_THRESHOLD_DB} dB: silent response"),
    }

    write_wav_stereo(&args.output, &response, args.sample_rate, args.bit_depth)?;
    tracing::info!(path = %args.output.display(), frames, "wrote impulse response");
    Ok(())
}
