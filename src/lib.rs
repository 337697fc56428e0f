//! A rust implementation of the MPM (McLeod Pitch Method) [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29)
//! detection algorithm, described in the paper
//! [A smarter way to find pitch](http://www.cs.otago.ac.nz/tartini/papers/A_Smarter_Way_to_Find_Pitch.pdf)
//! by Philip McLeod and Geoff Wyvill. The algorithm estimates the fundamental
//! frequency of monophonic, primarily musical, sounds. It cannot be used to
//! detect multiple pitches at once, like in a musical chord.
//!
//! Features
//! * Autocorrelation is normalized by the local signal energy (the NSDF),
//!   which makes the method far less prone to octave errors than plain
//!   autocorrelation tracking.
//! * Sub-sample period accuracy through parabolic interpolation of NSDF maxima.
//! * No allocations after construction. Scratch buffers are reused between
//!   calls, making the estimator suitable for real time audio use.
//! * `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use mpm_pitch::{PitchEstimator, NO_PITCH};
//!
//! // Generate a window containing a pure tone at 440 Hz.
//! let sample_rate = 44100.0;
//! let window_size = 1024;
//! let mut window = vec![0.0; window_size];
//! for (i, sample) in window.iter_mut().enumerate() {
//!     *sample = (2.0 * std::f32::consts::PI * 440.0 * (i as f32) / sample_rate).sin();
//! }
//!
//! let mut estimator = PitchEstimator::with_sample_rate(sample_rate, window_size);
//! let pitch = estimator.get_pitch(&window);
//! assert!(pitch != NO_PITCH);
//! assert!((pitch - 440.0).abs() / 440.0 <= 0.01);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod f32_array_ext;
mod key_maximum;
mod midi;
mod nsdf;
mod peak_picking;
mod pitch_estimator;

pub use f32_array_ext::F32ArrayExt;
pub use key_maximum::KeyMaximum;
pub use midi::freq_to_midi_note;
pub use pitch_estimator::{PitchEstimator, NO_PITCH};
