//! Level measurement extensions for `[f32]`.

use micromath::F32Ext;

/// Level measurements over a slice of samples.
pub trait F32ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f32;
    /// Returns the maximum absolute value in dB relative to 1,
    /// i.e 0 dB corresponds to a level of 1.
    fn peak_level_db(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level in dB relative to 1, i.e 0 dB corresponds to a level of 1.
    fn rms_level_db(&self) -> f32;
}

impl F32ArrayExt for [f32] {
    fn peak_level(&self) -> f32 {
        let mut peak: f32 = 0.0;
        for sample in self.iter() {
            let level = F32Ext::abs(*sample);
            if level > peak {
                peak = level
            }
        }
        peak
    }

    fn peak_level_db(&self) -> f32 {
        20. * F32Ext::log10(self.peak_level())
    }

    fn rms_level(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let mut sum: f32 = 0.;
        for sample in self.iter() {
            sum += sample * sample
        }
        F32Ext::sqrt(sum / (self.len() as f32))
    }

    fn rms_level_db(&self) -> f32 {
        20. * F32Ext::log10(self.rms_level())
    }
}

#[cfg(test)]
mod tests {
    use super::F32ArrayExt;

    #[test]
    fn test_empty_window() {
        let window: [f32; 0] = [];
        assert!(window.rms_level() == 0.0);
        assert!(window.peak_level() == 0.0);
    }

    #[test]
    fn test_peak_level() {
        let window: [f32; 4] = [0.25, -0.5, 0.1, 0.0];
        assert_eq!(window.peak_level(), 0.5);
    }

    #[test]
    fn test_rms_level() {
        // The square root goes through micromath's approximation, so
        // compare with a loose tolerance.
        let window: [f32; 8] = [0.5; 8];
        assert!((window.rms_level() - 0.5).abs() <= 0.005);
        let full_scale: [f32; 8] = [1.0; 8];
        assert!(full_scale.rms_level_db().abs() <= 0.1);
    }
}
