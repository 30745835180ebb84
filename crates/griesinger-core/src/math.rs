//! Small stereo and numeric helpers shared by the reverb network.
//!
//! All functions are allocation-free, branch-light and `no_std`.

/// Flush values below 1e-20 to zero.
///
/// Recursive filters that decay towards silence would otherwise settle on
/// IEEE 754 subnormals, which are very slow on most FPUs (and on the
/// Cortex-M7 when flush-to-zero is not enabled).
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Crossfade between dry and wet signals.
///
/// Computed as `(1 - mix) * dry + mix * wet` so that both endpoints are
/// exact: `mix == 0` returns `dry` and `mix == 1` returns `wet` bit for bit.
///
/// # Arguments
///
/// * `dry` - Unprocessed signal
/// * `wet` - Processed signal
/// * `mix` - Blend factor in \[0.0, 1.0\]: 0.0 = all dry, 1.0 = all wet
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    (1.0 - mix) * dry + mix * wet
}

/// Sum stereo to mono (arithmetic mean).
#[inline]
pub fn mono_sum(left: f32, right: f32) -> f32 {
    0.5 * (left + right)
}

/// Mid/side stereo width.
///
/// ```text
/// mid  = 0.5 * (l + r)
/// side = 0.5 * (l - r) * width
/// (l', r') = (mid + side, mid - side)
/// ```
///
/// `width == 0` collapses both channels to `mid`; `width == 1` rebuilds the
/// original pair (up to one rounding step per channel).
#[inline]
pub fn mid_side_width(left: f32, right: f32, width: f32) -> (f32, f32) {
    let mid = 0.5 * (left + right);
    let side = 0.5 * (left - right) * width;
    (mid + side, mid - side)
}
