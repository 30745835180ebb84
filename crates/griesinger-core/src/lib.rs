//! Griesinger Core - fixed-capacity DSP primitives for reverb networks
//!
//! This crate provides the leaf building blocks of the Griesinger stereo
//! reverb, designed for hard real-time audio callbacks: every buffer is
//! allocated once at construction and nothing allocates, logs or fails on
//! the per-sample path.
//!
//! # Primitives
//!
//! - [`OnePole`] - One-pole lowpass used as the damping element in comb feedback
//! - [`DelayLine`] - Fixed-capacity circular buffer with a clamped integer delay
//! - [`CombFilter`] - Feedback comb with one-pole damping in the loop
//! - [`AllpassFilter`] - Schroeder allpass for diffusion
//!
//! # Host-facing traits
//!
//! - [`Effect`] - Stereo per-sample processing with block helpers
//! - [`ParameterInfo`] - Indexed parameter discovery with [`ParamDescriptor`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets. Delay buffers
//! still need `alloc`; on bare metal that means installing a global
//! allocator before constructing any filter.
//!
//! ```toml
//! [dependencies]
//! griesinger-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use griesinger_core::{AllpassFilter, CombFilter};
//!
//! let mut comb: CombFilter<2048> = CombFilter::new(48000.0);
//! comb.set_delay(1557);
//! comb.set_feedback(0.82);
//! comb.set_damping(4800.0);
//!
//! let mut diffuser: AllpassFilter<1024> = AllpassFilter::new();
//! diffuser.set_delay(113);
//! diffuser.set_gain(0.65);
//!
//! let out = comb.process(diffuser.process(1.0));
//! assert_eq!(out, 0.0); // nothing has come out of the delay line yet
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allpass;
pub mod comb;
pub mod delay;
pub mod effect;
pub mod math;
pub mod one_pole;
pub mod param_info;

pub use allpass::AllpassFilter;
pub use comb::CombFilter;
pub use delay::DelayLine;
pub use effect::Effect;
pub use math::{flush_denormal, mid_side_width, mono_sum, wet_dry_mix};
pub use one_pole::OnePole;
pub use param_info::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo};
