//! Level statistics for command reports.

/// Largest absolute sample.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

/// Largest absolute sample across both channels.
pub fn stereo_peak(left: &[f32], right: &[f32]) -> f32 {
    peak(left).max(peak(right))
}

/// RMS level over both channels together.
pub fn stereo_rms(left: &[f32], right: &[f32]) -> f32 {
    let count = left.len() + right.len();
    if count == 0 {
        return 0.0;
    }
    let sum: f32 = left.iter().chain(right).map(|s| s * s).sum();
    (sum / count as f32).sqrt()
}

/// Linear gain to dBFS, floored at -120 dB.
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}

/// dB to linear gain.
pub fn db_to_linear(db: f32) -> f32 {
    10.0f32.powf(db / 20.0)
}

/// Index of the last frame where either channel reaches `threshold`.
pub fn last_frame_above(left: &[f32], right: &[f32], threshold: f32) -> Option<usize> {
    left.iter()
        .zip(right)
        .rposition(|(l, r)| l.abs() >= threshold || r.abs() >= threshold)
}
