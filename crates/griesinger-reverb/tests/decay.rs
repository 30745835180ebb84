//! Time-domain behavior of the full network: impulse stability, decay to
//! silence and stereo width.

use griesinger_core::{AllpassFilter, CombFilter};
use griesinger_reverb::network::{
    COMB_CAPACITY, COMB_DELAYS_L, COMB_DELAYS_R, DIFFUSER_CAPACITY, DIFFUSER_DELAYS,
    DIFFUSER_GAIN, TANK_CAPACITY, TANK_DELAYS_L, TANK_DELAYS_R, TANK_GAIN, cross_feed_gain,
};
use griesinger_reverb::{ReverbNetwork, ReverbSettings};

const SAMPLE_RATE: f32 = 48000.0;

/// Deterministic white noise in [-1, 1].
struct Lcg(u32);

impl Lcg {
    fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.0 >> 8) as f32 / (1u32 << 23) as f32 - 1.0
    }
}

fn full_wet(decay: f32, damping: f32, width: f32) -> ReverbNetwork {
    ReverbNetwork::with_settings(
        SAMPLE_RATE,
        ReverbSettings {
            decay,
            damping,
            mix: 1.0,
            width,
        },
    )
}

fn peak(l: f32, r: f32) -> f32 {
    l.abs().max(r.abs())
}

#[test]
fn impulse_response_is_bounded_and_decays() {
    let mut reverb = full_wet(0.82, 4800.0, 1.0);
    let total = 5 * SAMPLE_RATE as usize;

    let mut outputs = Vec::with_capacity(total);
    for i in 0..total {
        let x = if i == 0 { 1.0 } else { 0.0 };
        let (l, r) = reverb.process_stereo(x, x);
        assert!(l.is_finite() && r.is_finite(), "non-finite output at {i}");
        outputs.push(peak(l, r));
    }

    let max = outputs.iter().copied().fold(0.0f32, f32::max);
    assert!(max > 0.0, "impulse produced no wet signal");
    assert!(max < 2.0, "impulse response peak {max} exceeds 2.0");

    // Everything in the last second sits below 1% of the peak.
    let tail = &outputs[4 * SAMPLE_RATE as usize..];
    let tail_max = tail.iter().copied().fold(0.0f32, f32::max);
    assert!(
        tail_max < 0.01 * max,
        "tail max {tail_max} not below 1% of peak {max}"
    );

    // Envelope: 100 ms window maxima never rise once the early echoes settle.
    let window = SAMPLE_RATE as usize / 10;
    let envelope: Vec<f32> = outputs[SAMPLE_RATE as usize / 2..]
        .chunks(window)
        .map(|w| w.iter().copied().fold(0.0f32, f32::max))
        .collect();
    for (i, pair) in envelope.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0] * 1.05,
            "envelope rose from {} to {} at window {}",
            pair[0],
            pair[1],
            i + 1
        );
    }
}

#[test]
fn transient_decays_to_silence() {
    let mut reverb = full_wet(0.82, 4800.0, 1.0);
    let mut noise = Lcg(1);

    for _ in 0..12000 {
        reverb.process_stereo(noise.next(), noise.next());
    }

    for _ in 0..7 * SAMPLE_RATE as usize {
        reverb.process_stereo(0.0, 0.0);
    }

    let mut tail_max = 0.0f32;
    for _ in 0..SAMPLE_RATE as usize {
        let (l, r) = reverb.process_stereo(0.0, 0.0);
        tail_max = tail_max.max(peak(l, r));
    }
    assert!(tail_max < 1e-4, "tail still at {tail_max} after 8 seconds");
}

#[test]
fn longest_decay_still_decays() {
    let mut reverb = full_wet(0.98, 12000.0, 1.0);

    let mut first_second = 0.0f32;
    let mut later_second = 0.0f32;
    for i in 0..6 * SAMPLE_RATE as usize {
        let x = if i == 0 { 1.0 } else { 0.0 };
        let (l, r) = reverb.process_stereo(x, x);
        assert!(l.is_finite() && r.is_finite());
        if i < SAMPLE_RATE as usize {
            first_second = first_second.max(peak(l, r));
        } else if i >= 5 * SAMPLE_RATE as usize {
            later_second = later_second.max(peak(l, r));
        }
    }
    assert!(
        later_second < 0.1 * first_second,
        "max-decay tail not falling: first={first_second}, sixth={later_second}"
    );
}

#[test]
fn sustained_input_at_max_decay_stays_bounded() {
    let mut reverb = full_wet(0.98, 12000.0, 1.0);
    for i in 0..3 * SAMPLE_RATE as usize {
        let (l, r) = reverb.process_stereo(1.0, 1.0);
        assert!(
            l.abs() < 150.0 && r.abs() < 150.0,
            "DC response ran away at {i}: ({l}, {r})"
        );
    }
}

#[test]
fn zero_width_gives_identical_channels() {
    let mut reverb = full_wet(0.82, 4800.0, 0.0);
    let mut noise = Lcg(7);
    for _ in 0..20000 {
        let (l, r) = reverb.process_stereo(noise.next(), noise.next());
        assert_eq!(l, r);
    }
}

#[test]
fn full_width_keeps_channels_distinct() {
    let mut reverb = full_wet(0.82, 4800.0, 1.0);
    let mut differs = false;
    for i in 0..4000 {
        let x = if i == 0 { 1.0 } else { 0.0 };
        let (l, r) = reverb.process_stereo(x, x);
        if (l - r).abs() > 1e-6 {
            differs = true;
            break;
        }
    }
    assert!(differs, "width 1.0 should leave the asymmetric tanks audible");
}

/// The network's wet path rebuilt from the primitives, with no width stage.
struct Unwidened {
    diffusers: [AllpassFilter<DIFFUSER_CAPACITY>; 2],
    combs: [[CombFilter<COMB_CAPACITY>; 4]; 2],
    tanks: [[AllpassFilter<TANK_CAPACITY>; 2]; 2],
    cross_feed: f32,
    prev: [f32; 2],
}

impl Unwidened {
    fn new(decay: f32, damping: f32) -> Self {
        let comb = |delay: usize| {
            let mut c = CombFilter::<COMB_CAPACITY>::new(SAMPLE_RATE);
            c.set_delay(delay);
            c.set_feedback(decay);
            c.set_damping(damping);
            c
        };
        fn allpass<const N: usize>(delay: usize, gain: f32) -> AllpassFilter<N> {
            let mut ap = AllpassFilter::new();
            ap.set_delay(delay);
            ap.set_gain(gain);
            ap
        }
        Self {
            diffusers: DIFFUSER_DELAYS.map(|d| allpass(d, DIFFUSER_GAIN)),
            combs: [COMB_DELAYS_L.map(comb), COMB_DELAYS_R.map(comb)],
            tanks: [
                TANK_DELAYS_L.map(|d| allpass(d, TANK_GAIN)),
                TANK_DELAYS_R.map(|d| allpass(d, TANK_GAIN)),
            ],
            cross_feed: cross_feed_gain(decay),
            prev: [0.0; 2],
        }
    }

    fn process(&mut self, left: f32, right: f32) -> [f32; 2] {
        let mono = 0.5 * (left + right);
        let mut wet = [0.0; 2];
        for ch in 0..2 {
            let fed = mono + self.cross_feed * self.prev[1 - ch];
            let diffused = self.diffusers[ch].process(fed);
            let sum: f32 = self.combs[ch].iter_mut().map(|c| c.process(diffused)).sum();
            wet[ch] = self.tanks[ch]
                .iter_mut()
                .fold(sum * 0.25, |x, ap| ap.process(x));
        }
        self.prev = wet;
        wet
    }
}

#[test]
fn full_width_matches_unwidened_wet_path() {
    let mut reverb = full_wet(0.82, 4800.0, 1.0);
    let mut reference = Unwidened::new(0.82, 4800.0);
    let mut noise = Lcg(5);

    for i in 0..9600 {
        let x = if i < 480 { noise.next() } else { 0.0 };
        let y = if i < 480 { noise.next() } else { 0.0 };
        let (l, r) = reverb.process_stereo(x, y);
        let [ref_l, ref_r] = reference.process(x, y);
        assert!(
            (l - ref_l).abs() < 1e-5 && (r - ref_r).abs() < 1e-5,
            "width 1.0 altered the wet pair at {i}: ({l}, {r}) vs ({ref_l}, {ref_r})"
        );
    }
}

#[test]
fn dry_only_mix_passes_input_exactly() {
    let mut reverb = ReverbNetwork::with_settings(
        SAMPLE_RATE,
        ReverbSettings {
            mix: 0.0,
            ..ReverbSettings::default()
        },
    );
    let mut noise = Lcg(3);
    for _ in 0..20000 {
        let (a, b) = (noise.next(), noise.next());
        assert_eq!(reverb.process_stereo(a, b), (a, b));
    }
}

#[test]
fn wet_only_mix_ignores_channel_order() {
    // The wet path only sees the mono sum, so swapping the input channels
    // leaves a wet-only output untouched.
    let mut a = full_wet(0.82, 4800.0, 1.0);
    let mut b = full_wet(0.82, 4800.0, 1.0);
    let mut noise = Lcg(11);
    for _ in 0..20000 {
        let (x, y) = (noise.next(), noise.next());
        assert_eq!(a.process_stereo(x, y), b.process_stereo(y, x));
    }
}
