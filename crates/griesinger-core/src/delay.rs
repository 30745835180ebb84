//! Fixed-capacity delay line for comb and allpass filters.
//!
//! A circular buffer whose capacity is a const generic and whose delay is an
//! integer sample count. The buffer is allocated once in [`DelayLine::new`]
//! and never resized, so reads and writes are allocation-free and
//! constant-time.
//!
//! # Read/write timing
//!
//! [`DelayLine::read`] returns the sample written exactly `delay` calls to
//! [`DelayLine::write`] before the *next* write. Filters built on top always
//! read before writing the value derived from this tick, which keeps at least
//! one sample of delay inside every feedback loop.
//!
//! ```text
//! write(x0) write(x1) ... write(x{d-1}) read() == x0  (delay = d)
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::boxed::Box;
use alloc::vec;

/// Fixed-capacity circular delay line.
///
/// `N` is the buffer capacity. The delay length is always kept in
/// `[1, N - 1]`; every [`set_delay`](Self::set_delay) call clamps, which is
/// what keeps the read index in bounds.
///
/// # Memory
///
/// The `N`-sample buffer lives on the heap so that large lines (the reverb
/// uses 8192-sample combs) do not land on the audio thread's stack. The
/// allocation happens once, at construction.
///
/// # Example
///
/// ```rust
/// use griesinger_core::DelayLine;
///
/// let mut line: DelayLine<16> = DelayLine::new();
/// line.set_delay(3);
///
/// line.write(1.0);
/// line.write(0.0);
/// line.write(0.0);
/// assert_eq!(line.read(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DelayLine<const N: usize> {
    buffer: Box<[f32]>,
    write_pos: usize,
    delay: usize,
}

impl<const N: usize> DelayLine<N> {
    /// Create a zeroed delay line with the minimum delay of one sample.
    pub fn new() -> Self {
        const { assert!(N >= 2, "DelayLine capacity must be at least 2") };
        Self {
            buffer: vec![0.0; N].into_boxed_slice(),
            write_pos: 0,
            delay: 1,
        }
    }

    /// Set the delay length in samples, clamped to `[1, N - 1]`.
    #[inline]
    pub fn set_delay(&mut self, delay_samples: usize) {
        self.delay = delay_samples.clamp(1, N - 1);
    }

    /// Current delay length in samples.
    #[inline]
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Buffer capacity in samples.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Read the delayed sample without advancing.
    #[inline]
    pub fn read(&self) -> f32 {
        self.buffer[(self.write_pos + N - self.delay) % N]
    }

    /// Write a sample at the cursor and advance it.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % N;
    }

    /// Zero the buffer and rewind the cursor. The delay length is kept.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

impl<const N: usize> Default for DelayLine<N> {
    fn default() -> Self {
        Self::new()
    }
}
