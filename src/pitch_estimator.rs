use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::f32_array_ext::F32ArrayExt;
use crate::key_maximum::KeyMaximum;
use crate::nsdf::nsdf_time_domain;
use crate::peak_picking::pick_peaks;

/// Returned by [`PitchEstimator::get_pitch`] when no reliable pitch
/// was detected.
pub const NO_PITCH: f32 = -1.0;

/// Key maxima whose raw NSDF value does not exceed this floor are
/// never refined or considered pitch candidates.
const SMALL_CUTOFF: f32 = 0.5;
/// The fraction of the highest candidate amplitude a key maximum must
/// reach to be selected as the fundamental.
const CUTOFF: f32 = 0.93;
/// Estimates at or below this frequency, in Hz, are rejected.
const LOWER_PITCH_CUTOFF: f32 = 80.0;
/// The sample rate, in Hz, used by [`PitchEstimator::new`].
const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

/// Estimates the fundamental frequency of a single window of audio
/// samples using the McLeod Pitch Method.
///
/// The estimator owns the scratch buffers used during a call (the NSDF
/// and the candidate lists), which are cleared and refilled on every
/// call. A single instance must not be shared between threads without
/// external synchronization.
pub struct PitchEstimator {
    /// The audio sample rate in Hz.
    sample_rate: f32,
    /// The fixed size of the windows to analyze.
    window_size: usize,
    /// The normalized square difference function, recomputed per call.
    nsdf: Box<[f32]>,
    /// Candidate period lags collected by peak picking.
    max_positions: Vec<usize>,
    /// Parabolically refined estimates, one per candidate above the
    /// small amplitude floor.
    key_maxima: Vec<KeyMaximum>,
}

impl PitchEstimator {
    /// Creates an estimator for windows of `window_size` samples, using
    /// a default sample rate of 44100 Hz.
    pub fn new(window_size: usize) -> Self {
        PitchEstimator::with_sample_rate(DEFAULT_SAMPLE_RATE, window_size)
    }

    /// Creates an estimator for windows of `window_size` samples at
    /// `sample_rate` Hz.
    pub fn with_sample_rate(sample_rate: f32, window_size: usize) -> Self {
        if window_size <= 2 {
            panic!("Window size must be greater than 2")
        }
        if sample_rate <= 0.0 {
            panic!("Sample rate must be greater than 0")
        }

        PitchEstimator {
            sample_rate,
            window_size,
            nsdf: vec![0.0; window_size].into_boxed_slice(),
            max_positions: Vec::with_capacity(window_size / 2),
            key_maxima: Vec::with_capacity(window_size / 2),
        }
    }

    /// Estimates the fundamental frequency of `window`, returning a
    /// frequency in Hz or [`NO_PITCH`]. `window` must have exactly the
    /// configured window size.
    ///
    /// A result of [`NO_PITCH`] means the window was silent, no NSDF
    /// maximum exceeded the small amplitude floor, or the estimate fell
    /// at or below the lower pitch cutoff of 80 Hz. Any returned
    /// frequency is above that cutoff.
    pub fn get_pitch(&mut self, window: &[f32]) -> f32 {
        if window.len() != self.window_size {
            panic!("Window must have exactly the configured window size");
        }

        self.max_positions.clear();
        self.key_maxima.clear();

        // An all-zero window has no pitch. Bail out before every NSDF
        // divisor collapses to zero.
        if window.peak_level() == 0.0 {
            return NO_PITCH;
        }

        nsdf_time_domain(window, &mut self.nsdf);
        pick_peaks(&self.nsdf, &mut self.max_positions);

        let mut highest_amplitude = f32::MIN;
        for &tau in self.max_positions.iter() {
            highest_amplitude = highest_amplitude.max(self.nsdf[tau]);
            if self.nsdf[tau] > SMALL_CUTOFF {
                let key_max = KeyMaximum::from_nsdf(&self.nsdf, tau);
                highest_amplitude = highest_amplitude.max(key_max.value);
                self.key_maxima.push(key_max);
            }
        }

        if self.key_maxima.is_empty() {
            return NO_PITCH;
        }

        let period = select_fundamental(&self.key_maxima, highest_amplitude).lag;
        let pitch_estimate = self.sample_rate / period;
        if pitch_estimate > LOWER_PITCH_CUTOFF {
            pitch_estimate
        } else {
            NO_PITCH
        }
    }

    /// Returns the current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Sets the sample rate in Hz, taking effect on the next call to
    /// [`PitchEstimator::get_pitch`].
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if sample_rate <= 0.0 {
            panic!("Sample rate must be greater than 0")
        }
        self.sample_rate = sample_rate;
    }

    /// Returns the fixed number of samples in a window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the NSDF computed by the most recent call to
    /// [`PitchEstimator::get_pitch`].
    pub fn nsdf(&self) -> &[f32] {
        &self.nsdf
    }

    /// Returns the refined key maxima collected by the most recent call
    /// to [`PitchEstimator::get_pitch`], in increasing lag order.
    pub fn key_maxima(&self) -> &[KeyMaximum] {
        &self.key_maxima
    }
}

/// Selects the key maximum assumed to correspond to the fundamental
/// period: the first one, in increasing lag order, whose refined value
/// reaches `CUTOFF` times the highest amplitude seen across all
/// candidates. Falls back to the first maximum if none qualifies.
/// `key_maxima` must not be empty.
fn select_fundamental(key_maxima: &[KeyMaximum], highest_amplitude: f32) -> &KeyMaximum {
    let actual_cutoff = CUTOFF * highest_amplitude;
    key_maxima
        .iter()
        .find(|key_max| key_max.value >= actual_cutoff)
        .unwrap_or(&key_maxima[0])
}
