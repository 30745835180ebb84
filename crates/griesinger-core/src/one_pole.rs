//! One-pole lowpass filter for high-frequency damping in feedback loops.
//!
//! A single-pole IIR lowpass with the difference equation:
//!
//! ```text
//! y[n] = b * x[n] + a * y[n-1]
//! ```
//!
//! where `a = exp(-2π * cutoff / sample_rate)` and `b = 1 - a`.
//!
//! This is the exponential moving average: 6 dB/octave rolloff, unity gain
//! at DC, one multiply-add per sample. Inside a comb filter it darkens what
//! feeds back, so high frequencies die away faster than lows over successive
//! trips around the loop.
//!
//! # Usage
//!
//! ```rust
//! use griesinger_core::OnePole;
//!
//! let mut lp = OnePole::new(48000.0);
//! lp.set_cutoff(4800.0);
//! let filtered = lp.process(1.0);
//! assert!(filtered < 1.0);
//! ```
//!
//! # Reference
//!
//! Julius O. Smith III, "Introduction to Digital Filters with Audio Applications",
//! Section: One-Pole Filter.

use crate::flush_denormal;
use libm::expf;

/// One-pole (6 dB/oct) lowpass filter.
///
/// # Invariants
///
/// - `a` is in [0, 1) for any positive cutoff and sample rate
/// - `b == 1 - a`, so the DC gain is exactly one
/// - `state` is flushed to zero when below 1e-20 (denormal protection)
///
/// No validation happens in [`set_cutoff`](Self::set_cutoff). A cutoff at or
/// above Nyquist drives `a` towards zero: the filter stays stable but stops
/// filtering.
#[derive(Debug, Clone)]
pub struct OnePole {
    state: f32,
    a: f32,
    b: f32,
    sample_rate: f32,
    cutoff: f32,
}

impl OnePole {
    /// Cutoff applied by [`new`](Self::new) before any explicit setting.
    pub const DEFAULT_CUTOFF_HZ: f32 = 6000.0;

    /// Create a silent filter at `sample_rate` with the default 6 kHz cutoff.
    pub fn new(sample_rate: f32) -> Self {
        let mut filter = Self {
            state: 0.0,
            a: 0.0,
            b: 1.0,
            sample_rate,
            cutoff: Self::DEFAULT_CUTOFF_HZ,
        };
        filter.recalculate_coeffs();
        filter
    }

    /// Set the cutoff frequency and recalculate the coefficients.
    ///
    /// Callers should keep `hz` below `sample_rate / 2`.
    pub fn set_cutoff(&mut self, hz: f32) {
        self.cutoff = hz;
        self.recalculate_coeffs();
    }

    /// Current cutoff frequency in Hz.
    #[inline]
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Feedback coefficient `a` (the pole position).
    #[inline]
    pub fn coefficient(&self) -> f32 {
        self.a
    }

    /// Update sample rate and recalculate the coefficients.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_coeffs();
    }

    /// Process one sample through the lowpass filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state = flush_denormal(self.b * input + self.a * self.state);
        self.state
    }

    /// Reset filter state to zero.
    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    fn recalculate_coeffs(&mut self) {
        let x = expf(-core::f32::consts::TAU * self.cutoff / self.sample_rate);
        self.a = x;
        self.b = 1.0 - x;
    }
}
