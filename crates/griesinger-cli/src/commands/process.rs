//! File-based reverb processing command.

use super::common::{ReverbArgs, build_network, progress_bar, seconds_to_frames};
use crate::stats::{linear_to_db, stereo_peak, stereo_rms};
use crate::wav::{StereoSamples, read_wav_stereo, write_wav_stereo};
use anyhow::bail;
use clap::Args;
use griesinger_core::Effect;
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (always stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    reverb: ReverbArgs,

    /// Processing block size in frames
    #[arg(long, default_value_t = 48, value_parser = clap::value_parser!(u32).range(1..))]
    block_size: u32,

    /// Seconds of silence appended so the tail can ring out
    #[arg(long, default_value_t = 0.0)]
    tail: f32,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value_t = 32)]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)?;
    if samples.is_empty() {
        bail!("{} contains no audio", args.input.display());
    }
    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        samples.len(),
        spec.channels,
        spec.sample_rate,
        samples.len() as f32 / spec.sample_rate as f32
    );

    let settings = args.reverb.settings()?;
    let mut network = build_network(spec.sample_rate, settings)?;

    let tail_frames = seconds_to_frames(args.tail, spec.sample_rate)?;
    let input_frames = samples.len();
    samples.pad(tail_frames);
    if tail_frames > 0 {
        tracing::info!(tail_frames, "appending silent tail");
    }

    let frames = samples.len();
    let block_size = args.block_size as usize;
    let mut output = StereoSamples::silent(frames);

    let pb = progress_bar(frames)?;
    for start in (0..frames).step_by(block_size) {
        let end = (start + block_size).min(frames);
        network.process_block_stereo(
            &samples.left[start..end],
            &samples.right[start..end],
            &mut output.left[start..end],
            &mut output.right[start..end],
        );
        pb.set_position(end as u64);
    }
    pb.finish_with_message("done");

    let (input_l, input_r) = (&samples.left[..input_frames], &samples.right[..input_frames]);
    let input_peak = stereo_peak(input_l, input_r);
    let output_peak = stereo_peak(&output.left, &output.right);
    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(stereo_rms(input_l, input_r)),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(stereo_rms(&output.left, &output.right)),
        linear_to_db(output_peak)
    );
    if output_peak > 1.0 && args.bit_depth != 32 {
        tracing::warn!(peak = output_peak, "output exceeds full scale and will clip");
    }

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, spec.sample_rate, args.bit_depth)?;
    tracing::info!(path = %args.output.display(), frames, "wrote output");
    println!("Done!");

    Ok(())
}
