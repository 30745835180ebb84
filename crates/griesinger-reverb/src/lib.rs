//! Griesinger Reverb - fixed-topology stereo reverb network
//!
//! A stereo reverberator for hard real-time audio loops: two input
//! diffusers with cross-channel feedback, two banks of four damped comb
//! filters, two allpass tank chains, mid/side width and a dry/wet mix.
//!
//! The host calls [`ReverbNetwork::process_stereo`] once per sample frame,
//! in order. Parameter setters may be called between frames from the same
//! context; they clamp silently (NaN to the lower bound) and never allocate.
//!
//! # Example
//!
//! ```rust
//! use griesinger_reverb::{ReverbNetwork, ReverbSettings};
//! use griesinger_core::Effect;
//!
//! let mut reverb = ReverbNetwork::with_settings(
//!     48000.0,
//!     ReverbSettings { decay: 0.84, damping: 4500.0, ..ReverbSettings::default() },
//! );
//!
//! // One 48-frame interleaved block, as an audio callback would hand it over.
//! let mut block = [0.0f32; 96];
//! block[0] = 1.0;
//! block[1] = 1.0;
//! reverb.process_interleaved(&mut block);
//! ```
//!
//! # Features
//!
//! - `std` (default): disable for `no_std` targets (a global allocator is
//!   still required for the delay buffers).
//! - `tracing`: emit `tracing::debug!` events on construction, sample-rate
//!   change and reset. The per-sample path never logs.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod network;
pub mod params;

pub use network::{ReverbNetwork, cross_feed_gain};
pub use params::{ReverbParam, ReverbSettings};
