//! Allpass filter for reverb diffusion.
//!
//! A Schroeder allpass section: flat magnitude response, frequency-dependent
//! group delay. In the reverb it smears transients without coloring the
//! spectrum, both ahead of the comb banks (input diffusion) and after them
//! (tail decorrelation).
//!
//! ```text
//! d   = delay.read()
//! out = -g * x + d
//! delay.write(x + g * out)
//! ```

use crate::DelayLine;

/// Schroeder allpass filter with capacity `N`.
///
/// Stable for `|gain| < 1`. The gain is stored as given.
///
/// # Example
///
/// ```rust
/// use griesinger_core::AllpassFilter;
///
/// let mut ap: AllpassFilter<1024> = AllpassFilter::new();
/// ap.set_delay(113);
/// ap.set_gain(0.65);
///
/// // The direct path is the negated, scaled input.
/// assert!((ap.process(1.0) + 0.65).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct AllpassFilter<const N: usize> {
    delay: DelayLine<N>,
    gain: f32,
}

impl<const N: usize> AllpassFilter<N> {
    /// Gain applied by [`new`](Self::new).
    pub const DEFAULT_GAIN: f32 = 0.7;

    /// Create an allpass with a fresh delay line and the default gain.
    pub fn new() -> Self {
        Self {
            delay: DelayLine::new(),
            gain: Self::DEFAULT_GAIN,
        }
    }

    /// Set the delay in samples (clamped by the delay line).
    #[inline]
    pub fn set_delay(&mut self, delay_samples: usize) {
        self.delay.set_delay(delay_samples);
    }

    /// Current delay in samples.
    #[inline]
    pub fn delay(&self) -> usize {
        self.delay.delay()
    }

    /// Set the allpass coefficient.
    #[inline]
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Current allpass coefficient.
    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Process a single sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let delayed = self.delay.read();
        let output = -self.gain * input + delayed;
        self.delay.write(input + self.gain * output);
        output
    }

    /// Clear the delay line.
    pub fn clear(&mut self) {
        self.delay.clear();
    }
}

impl<const N: usize> Default for AllpassFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}
