//! The Griesinger stereo reverb network.
//!
//! ## Signal flow
//!
//! ```text
//!            ┌──── c × prev_wet_r ───┐
//! in_l ┐     ↓                       │
//!      ├─ mono ─(+)→ diffuser_l → 4 combs_l → avg → tank_l[0] → tank_l[1] ─┐
//! in_r ┘     ↓                                                          width → mix → out
//!          (+)→ diffuser_r → 4 combs_r → avg → tank_r[0] → tank_r[1] ──────┘
//!            ↑                       │
//!            └──── c × prev_wet_l ───┘
//! ```
//!
//! Each channel's diffuser is fed the mono input plus the *other* channel's
//! previous post-width wet sample, which is what couples the two halves of
//! the tail.
//!
//! ## Cross-feed gain
//!
//! The nominal cross-feed gain is 0.2. A comb bank averages four combs with
//! DC gain `1 / (1 - decay)` each, so the DC gain around the two-hop cross
//! loop is `(c / (1 - decay))²`. At `c = 0.2` this exceeds one for any
//! decay above 0.8 and the tail grows without bound. The gain is therefore
//! `min(0.2, (2/3)(1 - decay))`: unchanged up to decay 0.7, and from there
//! each hop's DC gain is held at 2/3.
//!
//! ## Tuning
//!
//! Delay lengths are raw sample counts tuned for 48 kHz. They do not scale
//! with the sample rate; at other rates the room simply sounds smaller or
//! larger.

use griesinger_core::{AllpassFilter, CombFilter, Effect, ParamDescriptor, ParameterInfo};
use griesinger_core::{mid_side_width, mono_sum, wet_dry_mix};

use crate::params::{DAMPING, DECAY, MIX, ReverbParam, ReverbSettings, WIDTH};

/// Input diffuser buffer capacity in samples.
pub const DIFFUSER_CAPACITY: usize = 1024;
/// Comb buffer capacity in samples.
pub const COMB_CAPACITY: usize = 8192;
/// Tank allpass buffer capacity in samples.
pub const TANK_CAPACITY: usize = 2048;

/// Input diffuser delays, left then right.
pub const DIFFUSER_DELAYS: [usize; 2] = [113, 149];
/// Input diffuser allpass gain.
pub const DIFFUSER_GAIN: f32 = 0.65;

/// Left comb bank delays.
pub const COMB_DELAYS_L: [usize; 4] = [1557, 1617, 1491, 1422];
/// Right comb bank delays.
pub const COMB_DELAYS_R: [usize; 4] = [1277, 1356, 1188, 1116];

/// Left tank allpass delays, in processing order.
pub const TANK_DELAYS_L: [usize; 2] = [225, 556];
/// Right tank allpass delays, in processing order.
pub const TANK_DELAYS_R: [usize; 2] = [341, 441];
/// Tank allpass gain.
pub const TANK_GAIN: f32 = 0.7;

/// Nominal cross-channel feedback gain.
pub const CROSS_FEED: f32 = 0.2;
/// Per-hop DC gain ceiling for the cross-channel loop.
const CROSS_FEED_HOP_GAIN: f32 = 2.0 / 3.0;

/// Cross-channel feedback gain for a (clamped) decay value.
#[inline]
pub fn cross_feed_gain(decay: f32) -> f32 {
    CROSS_FEED.min(CROSS_FEED_HOP_GAIN * (1.0 - decay))
}

type Comb = CombFilter<COMB_CAPACITY>;
type Tank = AllpassFilter<TANK_CAPACITY>;
type Diffuser = AllpassFilter<DIFFUSER_CAPACITY>;

fn comb_bank(sample_rate: f32, delays: [usize; 4]) -> [Comb; 4] {
    delays.map(|delay| {
        let mut comb = Comb::new(sample_rate);
        comb.set_delay(delay);
        comb
    })
}

fn tank_chain(delays: [usize; 2]) -> [Tank; 2] {
    delays.map(|delay| {
        let mut ap = Tank::new();
        ap.set_delay(delay);
        ap.set_gain(TANK_GAIN);
        ap
    })
}

fn diffuser(delay: usize) -> Diffuser {
    let mut ap = Diffuser::new();
    ap.set_delay(delay);
    ap.set_gain(DIFFUSER_GAIN);
    ap
}

/// Fixed-topology stereo reverb.
///
/// Two input diffusers, two banks of four damped combs, two chains of two
/// tank allpasses, mid/side width and a dry/wet mix. All buffers are
/// allocated in [`new`](Self::new); nothing allocates afterwards.
///
/// # Parameters
///
/// | Setter | Range | Default |
/// |---|---|---|
/// | [`set_decay`](Self::set_decay) | 0.10 – 0.98 | 0.82 |
/// | [`set_damping`](Self::set_damping) | 800 – 12000 Hz | 4800 Hz |
/// | [`set_mix`](Self::set_mix) | 0 – 1 | 0.35 |
/// | [`set_width`](Self::set_width) | 0 – 1 | 1.0 |
///
/// Out-of-range values are clamped silently. NaN maps to the lower bound.
///
/// # Example
///
/// ```rust
/// use griesinger_reverb::ReverbNetwork;
///
/// let mut reverb = ReverbNetwork::new(48000.0);
/// reverb.set_decay(0.84);
/// reverb.set_damping(4500.0);
///
/// let (l, r) = reverb.process_stereo(0.5, -0.5);
/// assert!(l.is_finite() && r.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct ReverbNetwork {
    diffuser_l: Diffuser,
    diffuser_r: Diffuser,
    combs_l: [Comb; 4],
    combs_r: [Comb; 4],
    tank_l: [Tank; 2],
    tank_r: [Tank; 2],

    prev_wet_l: f32,
    prev_wet_r: f32,
    cross_feed: f32,

    decay: f32,
    damping: f32,
    mix: f32,
    width: f32,
    sample_rate: f32,
}

impl ReverbNetwork {
    /// Build the network at `sample_rate` with default parameters.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_settings(sample_rate, ReverbSettings::default())
    }

    /// Build the network at `sample_rate` and apply `settings` (clamped).
    pub fn with_settings(sample_rate: f32, settings: ReverbSettings) -> Self {
        let mut network = Self {
            diffuser_l: diffuser(DIFFUSER_DELAYS[0]),
            diffuser_r: diffuser(DIFFUSER_DELAYS[1]),
            combs_l: comb_bank(sample_rate, COMB_DELAYS_L),
            combs_r: comb_bank(sample_rate, COMB_DELAYS_R),
            tank_l: tank_chain(TANK_DELAYS_L),
            tank_r: tank_chain(TANK_DELAYS_R),
            prev_wet_l: 0.0,
            prev_wet_r: 0.0,
            cross_feed: CROSS_FEED,
            decay: DECAY.default,
            damping: DAMPING.default,
            mix: MIX.default,
            width: WIDTH.default,
            sample_rate,
        };
        network.apply(&settings);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            decay = network.decay,
            damping = network.damping,
            mix = network.mix,
            width = network.width,
            "reverb network initialized"
        );

        network
    }

    /// Set the comb feedback gain, clamped to [0.10, 0.98].
    ///
    /// Also recomputes the cross-channel feedback gain.
    pub fn set_decay(&mut self, decay: f32) {
        self.decay = DECAY.clamp(decay);
        self.cross_feed = cross_feed_gain(self.decay);
        for comb in self.combs_l.iter_mut().chain(self.combs_r.iter_mut()) {
            comb.set_feedback(self.decay);
        }
    }

    /// Set the damping cutoff in Hz, clamped to [800, 12000].
    pub fn set_damping(&mut self, hz: f32) {
        self.damping = DAMPING.clamp(hz);
        for comb in self.combs_l.iter_mut().chain(self.combs_r.iter_mut()) {
            comb.set_damping(self.damping);
        }
    }

    /// Set the dry/wet blend, clamped to [0, 1].
    #[inline]
    pub fn set_mix(&mut self, mix: f32) {
        self.mix = MIX.clamp(mix);
    }

    /// Set the wet stereo width, clamped to [0, 1].
    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.width = WIDTH.clamp(width);
    }

    /// Current decay (post-clamp).
    #[inline]
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Current damping cutoff in Hz (post-clamp).
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Current mix (post-clamp).
    #[inline]
    pub fn mix(&self) -> f32 {
        self.mix
    }

    /// Current width (post-clamp).
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sample rate the damping filters are tuned for.
    #[inline]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Cross-channel feedback gain derived from the current decay.
    #[inline]
    pub fn cross_feed(&self) -> f32 {
        self.cross_feed
    }

    /// Apply all four parameters at once (each clamped).
    pub fn apply(&mut self, settings: &ReverbSettings) {
        self.set_decay(settings.decay);
        self.set_damping(settings.damping);
        self.set_mix(settings.mix);
        self.set_width(settings.width);
    }

    /// Snapshot of the current parameters.
    pub fn settings(&self) -> ReverbSettings {
        ReverbSettings {
            decay: self.decay,
            damping: self.damping,
            mix: self.mix,
            width: self.width,
        }
    }

    /// Process one stereo frame.
    #[inline]
    pub fn process_stereo(&mut self, in_l: f32, in_r: f32) -> (f32, f32) {
        let mono = mono_sum(in_l, in_r);

        let diff_l = self.diffuser_l.process(mono + self.cross_feed * self.prev_wet_r);
        let diff_r = self.diffuser_r.process(mono + self.cross_feed * self.prev_wet_l);

        let mut sum_l = 0.0;
        for comb in &mut self.combs_l {
            sum_l += comb.process(diff_l);
        }
        let mut sum_r = 0.0;
        for comb in &mut self.combs_r {
            sum_r += comb.process(diff_r);
        }

        let mut wet_l = sum_l * 0.25;
        for ap in &mut self.tank_l {
            wet_l = ap.process(wet_l);
        }
        let mut wet_r = sum_r * 0.25;
        for ap in &mut self.tank_r {
            wet_r = ap.process(wet_r);
        }

        let (wet_l, wet_r) = mid_side_width(wet_l, wet_r, self.width);

        let out_l = wet_dry_mix(in_l, wet_l, self.mix);
        let out_r = wet_dry_mix(in_r, wet_r, self.mix);

        self.prev_wet_l = wet_l;
        self.prev_wet_r = wet_r;

        (out_l, out_r)
    }

    /// Re-initialize at a new sample rate, keeping the current parameters.
    ///
    /// All delay lines and filter states are cleared and the damping
    /// coefficients recomputed. Delay lengths are unchanged.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for comb in self.combs_l.iter_mut().chain(self.combs_r.iter_mut()) {
            comb.set_sample_rate(sample_rate);
        }
        self.clear_state();

        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, "reverb network re-initialized");
    }

    /// Clear every delay line, damping state and the cross-feed memory.
    /// Parameters are kept.
    pub fn reset(&mut self) {
        self.clear_state();

        #[cfg(feature = "tracing")]
        tracing::debug!("reverb network reset");
    }

    fn clear_state(&mut self) {
        self.diffuser_l.clear();
        self.diffuser_r.clear();
        for comb in self.combs_l.iter_mut().chain(self.combs_r.iter_mut()) {
            comb.clear();
        }
        for ap in self.tank_l.iter_mut().chain(self.tank_r.iter_mut()) {
            ap.clear();
        }
        self.prev_wet_l = 0.0;
        self.prev_wet_r = 0.0;
    }
}

impl Effect for ReverbNetwork {
    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        ReverbNetwork::process_stereo(self, left, right)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        ReverbNetwork::set_sample_rate(self, sample_rate);
    }

    fn reset(&mut self) {
        ReverbNetwork::reset(self);
    }
}

impl ParameterInfo for ReverbNetwork {
    fn param_count(&self) -> usize {
        ReverbParam::ALL.len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        ReverbParam::from_index(index).map(ReverbParam::descriptor)
    }

    fn get_param(&self, index: usize) -> f32 {
        ReverbParam::from_index(index).map_or(0.0, |p| self.settings().get(p))
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match ReverbParam::from_index(index) {
            Some(ReverbParam::Decay) => self.set_decay(value),
            Some(ReverbParam::Damping) => self.set_damping(value),
            Some(ReverbParam::Mix) => self.set_mix(value),
            Some(ReverbParam::Width) => self.set_width(value),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_wires_topology() {
        let r = ReverbNetwork::new(48000.0);
        assert_eq!(r.diffuser_l.delay(), 113);
        assert_eq!(r.diffuser_r.delay(), 149);
        assert_eq!(r.diffuser_l.gain(), 0.65);
        for (comb, &d) in r.combs_l.iter().zip(&COMB_DELAYS_L) {
            assert_eq!(comb.delay(), d);
            assert_eq!(comb.feedback(), 0.82);
            assert_eq!(comb.damping_hz(), 4800.0);
        }
        for (comb, &d) in r.combs_r.iter().zip(&COMB_DELAYS_R) {
            assert_eq!(comb.delay(), d);
        }
        assert_eq!(r.tank_l[0].delay(), 225);
        assert_eq!(r.tank_l[1].delay(), 556);
        assert_eq!(r.tank_r[0].delay(), 341);
        assert_eq!(r.tank_r[1].delay(), 441);
        assert_eq!(r.tank_r[1].gain(), 0.7);
    }

    #[test]
    fn defaults() {
        let r = ReverbNetwork::new(48000.0);
        assert_eq!(r.decay(), 0.82);
        assert_eq!(r.damping(), 4800.0);
        assert_eq!(r.mix(), 0.35);
        assert_eq!(r.width(), 1.0);
        assert_eq!(r.sample_rate(), 48000.0);
    }

    #[test]
    fn setters_clamp() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_decay(5.0);
        assert_eq!(r.decay(), 0.98);
        r.set_decay(-1.0);
        assert_eq!(r.decay(), 0.10);
        r.set_damping(20.0);
        assert_eq!(r.damping(), 800.0);
        r.set_damping(96000.0);
        assert_eq!(r.damping(), 12000.0);
        r.set_mix(1.5);
        assert_eq!(r.mix(), 1.0);
        r.set_width(-0.5);
        assert_eq!(r.width(), 0.0);
    }

    #[test]
    fn nan_parameters_clamp_to_lower_bound() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_decay(f32::NAN);
        r.set_damping(f32::NAN);
        r.set_mix(f32::NAN);
        r.set_width(f32::NAN);
        assert_eq!(r.decay(), 0.10);
        assert_eq!(r.damping(), 800.0);
        assert_eq!(r.mix(), 0.0);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.cross_feed(), 0.2);
        for comb in r.combs_l.iter().chain(r.combs_r.iter()) {
            assert_eq!(comb.feedback(), 0.10);
        }
    }

    #[test]
    fn nan_parameters_leave_state_recoverable() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_mix(1.0);
        r.set_decay(f32::NAN);
        r.set_width(f32::NAN);
        for i in 0..4000 {
            let x = if i == 0 { 1.0 } else { 0.0 };
            let (l, rr) = r.process_stereo(x, x);
            assert!(l.is_finite() && rr.is_finite());
        }

        r.set_decay(0.5);
        r.set_width(1.0);
        for _ in 0..48000 {
            let (l, rr) = r.process_stereo(0.0, 0.0);
            assert!(l.is_finite() && rr.is_finite());
        }
        let (l, rr) = r.process_stereo(0.0, 0.0);
        assert!(l.abs() < 1e-6 && rr.abs() < 1e-6);
    }

    #[test]
    fn decay_fans_out_to_all_combs() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_decay(0.5);
        r.set_damping(2000.0);
        for comb in r.combs_l.iter().chain(r.combs_r.iter()) {
            assert_eq!(comb.feedback(), 0.5);
            assert_eq!(comb.damping_hz(), 2000.0);
        }
    }

    #[test]
    fn cross_feed_is_nominal_for_moderate_decay() {
        assert_eq!(cross_feed_gain(0.1), 0.2);
        assert_eq!(cross_feed_gain(0.5), 0.2);
        assert!((cross_feed_gain(0.7) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn cross_feed_shrinks_for_long_decay() {
        for &decay in &[0.75f32, 0.82, 0.9, 0.98] {
            let c = cross_feed_gain(decay);
            assert!(c < 0.2);
            // DC gain of one hop stays at or below 2/3.
            assert!(c / (1.0 - decay) <= 2.0 / 3.0 + 1e-5);
        }
    }

    #[test]
    fn set_decay_updates_cross_feed() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_decay(0.5);
        assert_eq!(r.cross_feed(), 0.2);
        r.set_decay(0.9);
        assert_eq!(r.cross_feed(), cross_feed_gain(0.9));
    }

    #[test]
    fn first_frame_wet_is_silent() {
        // Combs return their delayed sample, so nothing reaches the tank yet.
        let mut r = ReverbNetwork::new(48000.0);
        r.set_mix(1.0);
        assert_eq!(r.process_stereo(1.0, 1.0), (0.0, 0.0));
    }

    #[test]
    fn reset_keeps_parameters_and_silences() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_decay(0.9);
        r.set_mix(1.0);
        for _ in 0..5000 {
            r.process_stereo(0.5, -0.3);
        }
        r.reset();
        assert_eq!(r.decay(), 0.9);
        assert_eq!(r.mix(), 1.0);
        for _ in 0..5000 {
            assert_eq!(r.process_stereo(0.0, 0.0), (0.0, 0.0));
        }
    }

    #[test]
    fn sample_rate_change_keeps_parameters() {
        let mut r = ReverbNetwork::new(48000.0);
        r.set_damping(3000.0);
        r.set_width(0.25);
        for _ in 0..1000 {
            r.process_stereo(1.0, 1.0);
        }
        r.set_sample_rate(96000.0);
        assert_eq!(r.sample_rate(), 96000.0);
        assert_eq!(r.damping(), 3000.0);
        assert_eq!(r.width(), 0.25);
        assert_eq!(r.combs_l[0].delay(), 1557);
        assert_eq!(r.process_stereo(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn sample_rate_change_matches_fresh_network() {
        let settings = ReverbSettings {
            decay: 0.7,
            damping: 6000.0,
            mix: 0.5,
            width: 0.8,
        };
        let mut moved = ReverbNetwork::with_settings(48000.0, settings);
        for _ in 0..300 {
            moved.process_stereo(0.2, 0.1);
        }
        moved.set_sample_rate(44100.0);
        let mut fresh = ReverbNetwork::with_settings(44100.0, settings);

        for i in 0..4000 {
            let x = if i % 97 == 0 { 1.0 } else { 0.0 };
            assert_eq!(moved.process_stereo(x, -x), fresh.process_stereo(x, -x));
        }
    }

    #[test]
    fn apply_and_settings_roundtrip() {
        let mut r = ReverbNetwork::new(48000.0);
        let s = ReverbSettings {
            decay: 0.6,
            damping: 9000.0,
            mix: 0.2,
            width: 0.5,
        };
        r.apply(&s);
        assert_eq!(r.settings(), s);

        r.apply(&ReverbSettings {
            decay: 9.0,
            ..s
        });
        assert_eq!(r.decay(), 0.98);
    }

    #[test]
    fn parameter_info_routes_through_setters() {
        let mut r = ReverbNetwork::new(48000.0);
        assert_eq!(r.param_count(), 4);
        assert_eq!(r.param_info(1).map(|d| d.name), Some("Damping"));
        assert!(r.param_info(4).is_none());

        r.set_param(0, 3.0);
        assert_eq!(r.get_param(0), 0.98);
        r.set_param(2, 0.75);
        assert_eq!(r.mix(), 0.75);
        r.set_param(9, 1.0);
        assert_eq!(r.get_param(9), 0.0);

        assert_eq!(r.param_info(3).map(|d| d.string_id), Some("width"));
    }

    #[test]
    fn effect_mono_process_is_dual_mono_sum() {
        let mut a = ReverbNetwork::new(48000.0);
        let mut b = ReverbNetwork::new(48000.0);
        for i in 0..2000 {
            let x = if i == 0 { 1.0 } else { 0.0 };
            let mono = Effect::process(&mut a, x);
            let (l, r) = b.process_stereo(x, x);
            assert_eq!(mono, 0.5 * (l + r));
        }
    }
}
