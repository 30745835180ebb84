//! Core stereo Effect trait.
//!
//! The [`Effect`] trait is the seam between a DSP network and whatever host
//! drives it: an audio callback on hardware, or an offline renderer walking
//! a WAV file. Hosts call it once per sample frame, in order.
//!
//! ## Design Decisions
//!
//! - **Stereo first**: the required method is
//!   [`process_stereo`](Effect::process_stereo). Mono hosts get a default
//!   [`process`](Effect::process) that feeds the same sample to both
//!   channels and averages the result.
//!
//! - **Object-safe**: `dyn Effect` works, but generic dispatch is what the
//!   hot path uses.
//!
//! - **No allocations**: every method is safe to call from a real-time
//!   audio context.

use crate::math::mono_sum;

/// Core trait for stereo audio effects.
///
/// # Example
///
/// ```rust
/// use griesinger_core::Effect;
///
/// struct Swap;
///
/// impl Effect for Swap {
///     fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
///         (right, left)
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut swap = Swap;
/// assert_eq!(swap.process_stereo(1.0, 0.0), (0.0, 1.0));
/// assert_eq!(swap.process(0.5), 0.5);
/// ```
pub trait Effect {
    /// Process one stereo frame, advancing internal state by one sample.
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32);

    /// Process one mono sample.
    ///
    /// Default: dual-mono through [`process_stereo`](Self::process_stereo),
    /// summed back to mono.
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let (l, r) = self.process_stereo(input, input);
        mono_sum(l, r)
    }

    /// Process planar stereo buffers.
    ///
    /// Frames are processed up to the shortest of the four slices.
    fn process_block_stereo(
        &mut self,
        left_in: &[f32],
        right_in: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) {
        debug_assert_eq!(left_in.len(), right_in.len(), "input channels differ in length");
        debug_assert_eq!(left_in.len(), left_out.len(), "input and output differ in length");
        debug_assert_eq!(left_out.len(), right_out.len(), "output channels differ in length");

        let frames = left_in
            .iter()
            .zip(right_in)
            .zip(left_out.iter_mut().zip(right_out.iter_mut()));
        for ((&l, &r), (out_l, out_r)) in frames {
            (*out_l, *out_r) = self.process_stereo(l, r);
        }
    }

    /// Process an interleaved `L R L R ...` buffer in place.
    ///
    /// A trailing odd sample is left untouched.
    fn process_interleaved(&mut self, buffer: &mut [f32]) {
        debug_assert!(buffer.len() % 2 == 0, "interleaved stereo buffer has odd length");
        for frame in buffer.chunks_exact_mut(2) {
            let (l, r) = self.process_stereo(frame[0], frame[1]);
            frame[0] = l;
            frame[1] = r;
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate every sample-rate-dependent coefficient.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Clear internal state (delay lines, filter history) without changing
    /// parameters.
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scales left, delays right by one frame.
    struct GainDelay {
        gain: f32,
        last_right: f32,
    }

    impl Effect for GainDelay {
        fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
            let out_r = self.last_right;
            self.last_right = right;
            (left * self.gain, out_r)
        }
        fn set_sample_rate(&mut self, _: f32) {}
        fn reset(&mut self) {
            self.last_right = 0.0;
        }
    }

    fn gain_delay() -> GainDelay {
        GainDelay {
            gain: 2.0,
            last_right: 0.0,
        }
    }

    #[test]
    fn mono_process_averages_dual_mono() {
        let mut p = gain_delay();
        // (2.0 * 1.0, 0.0) averaged
        assert_eq!(p.process(1.0), 1.0);
        // (2.0 * 0.0, 1.0) averaged
        assert_eq!(p.process(0.0), 0.5);
    }

    #[test]
    fn block_matches_per_frame() {
        let left_in = [1.0, 2.0, 3.0];
        let right_in = [4.0, 5.0, 6.0];
        let mut left_out = [0.0; 3];
        let mut right_out = [0.0; 3];

        let mut p = gain_delay();
        p.process_block_stereo(&left_in, &right_in, &mut left_out, &mut right_out);

        assert_eq!(left_out, [2.0, 4.0, 6.0]);
        assert_eq!(right_out, [0.0, 4.0, 5.0]);
    }

    #[test]
    fn interleaved_matches_planar() {
        let mut buffer = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let mut p = gain_delay();
        p.process_interleaved(&mut buffer);
        assert_eq!(buffer, [2.0, 0.0, 4.0, 4.0, 6.0, 5.0]);
    }

    #[test]
    fn object_safe() {
        let mut p = gain_delay();
        let effect: &mut dyn Effect = &mut p;
        assert_eq!(effect.process_stereo(1.0, 1.0), (2.0, 0.0));
        effect.reset();
        assert_eq!(effect.process_stereo(0.0, 0.0), (0.0, 0.0));
    }
}
