//! Comb filter with damping for reverb algorithms.
//!
//! A feedback comb with a one-pole lowpass in the feedback path (the
//! Schroeder/Moorer damped comb). Parallel banks of these build the dense,
//! exponentially decaying resonances of the reverb tail.
//!
//! ## DSP Structure
//!
//! ```text
//! input ─→ (+) ─→ [delay line] ─┬─→ output
//!            ↑                  │
//!            └─ feedback × [OnePole LP] ←┘
//! ```
//!
//! The output is the undamped delayed sample. Damping only shapes what is
//! fed back, so the high-frequency rolloff builds up over successive trips
//! around the loop instead of being applied to the first echo.

use crate::{DelayLine, OnePole};

/// Damped feedback comb filter with capacity `N`.
///
/// The feedback gain is stored exactly as given. Stability requires
/// `|feedback| < 1`; keeping it there is the owner's job (the reverb network
/// clamps its decay parameter before fanning it out), so the filter can be
/// reused in contexts with different valid ranges.
///
/// # Example
///
/// ```rust
/// use griesinger_core::CombFilter;
///
/// let mut comb: CombFilter<256> = CombFilter::new(48000.0);
/// comb.set_delay(100);
/// comb.set_feedback(0.8);
/// comb.set_damping(4800.0);
///
/// assert_eq!(comb.process(1.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CombFilter<const N: usize> {
    delay: DelayLine<N>,
    damping: OnePole,
    feedback: f32,
}

impl<const N: usize> CombFilter<N> {
    /// Feedback gain applied by [`new`](Self::new).
    pub const DEFAULT_FEEDBACK: f32 = 0.75;

    /// Create a comb with a fresh delay line and a damping filter at `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            delay: DelayLine::new(),
            damping: OnePole::new(sample_rate),
            feedback: Self::DEFAULT_FEEDBACK,
        }
    }

    /// Set the loop delay in samples (clamped by the delay line).
    #[inline]
    pub fn set_delay(&mut self, delay_samples: usize) {
        self.delay.set_delay(delay_samples);
    }

    /// Current loop delay in samples.
    #[inline]
    pub fn delay(&self) -> usize {
        self.delay.delay()
    }

    /// Set the feedback gain. Not clamped.
    #[inline]
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback;
    }

    /// Current feedback gain.
    #[inline]
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Set the damping lowpass cutoff in Hz.
    #[inline]
    pub fn set_damping(&mut self, hz: f32) {
        self.damping.set_cutoff(hz);
    }

    /// Current damping cutoff in Hz.
    #[inline]
    pub fn damping_hz(&self) -> f32 {
        self.damping.cutoff()
    }

    /// Update the damping filter's sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.damping.set_sample_rate(sample_rate);
    }

    /// Process a single sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let delayed = self.delay.read();
        let filtered = self.damping.process(delayed);
        self.delay.write(input + filtered * self.feedback);
        delayed
    }

    /// Clear the delay line and the damping state.
    pub fn clear(&mut self) {
        self.delay.clear();
        self.damping.reset();
    }
}
