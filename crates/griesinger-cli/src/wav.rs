//! Stereo WAV reading and writing.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use thiserror::Error;

/// Errors from the WAV layer.
#[derive(Debug, Error)]
pub enum WavError {
    /// Error from the WAV codec
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Bit depth other than 16, 24 or 32
    #[error("unsupported bit depth {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),
}

/// Result type for WAV operations.
pub type Result<T> = std::result::Result<T, WavError>;

/// Planar stereo samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoSamples {
    /// Left channel.
    pub left: Vec<f32>,
    /// Right channel.
    pub right: Vec<f32>,
}

impl StereoSamples {
    /// `frames` frames of silence.
    pub fn silent(frames: usize) -> Self {
        Self {
            left: vec![0.0; frames],
            right: vec![0.0; frames],
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Append `frames` frames of silence.
    pub fn pad(&mut self, frames: usize) {
        let len = self.len() + frames;
        self.left.resize(len, 0.0);
        self.right.resize(len, 0.0);
    }
}

/// Header fields carried from input to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Channel count of the source file.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

fn check_bit_depth(bits: u16) -> Result<()> {
    match bits {
        16 | 24 | 32 => Ok(()),
        other => Err(WavError::UnsupportedBitDepth(other)),
    }
}

/// Read a WAV file as stereo.
///
/// Mono files are duplicated to both channels. Files with more than two
/// channels keep the first two.
pub fn read_wav_stereo(path: impl AsRef<Path>) -> Result<(StereoSamples, WavSpec)> {
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec {
        channels: hound_spec.channels,
        sample_rate: hound_spec.sample_rate,
        bits_per_sample: hound_spec.bits_per_sample,
    };
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channels;
    let mut samples = StereoSamples {
        left: Vec::with_capacity(frames),
        right: Vec::with_capacity(frames),
    };
    for frame in interleaved.chunks_exact(channels) {
        samples.left.push(frame[0]);
        samples.right.push(frame.get(1).copied().unwrap_or(frame[0]));
    }

    Ok((samples, spec))
}

/// Write planar stereo samples. 32-bit output is IEEE float, 16 and 24 are PCM.
pub fn write_wav_stereo(
    path: impl AsRef<Path>,
    samples: &StereoSamples,
    sample_rate: u32,
    bits_per_sample: u16,
) -> Result<()> {
    check_bit_depth(bits_per_sample)?;

    let hound_spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample,
        sample_format: if bits_per_sample == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };
    let mut writer = WavWriter::create(path, hound_spec)?;

    if bits_per_sample == 32 {
        for (&l, &r) in samples.left.iter().zip(&samples.right) {
            writer.write_sample(l)?;
            writer.write_sample(r)?;
        }
    } else {
        let max_val = (1i32 << (bits_per_sample - 1)) as f32;
        for (&l, &r) in samples.left.iter().zip(&samples.right) {
            writer.write_sample((l * max_val).clamp(-max_val, max_val - 1.0) as i32)?;
            writer.write_sample((r * max_val).clamp(-max_val, max_val - 1.0) as i32)?;
        }
    }

    writer.finalize()?;
    Ok(())
}
