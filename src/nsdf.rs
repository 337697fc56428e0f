//! Time-domain computation of the normalized square difference function.

/// Computes the NSDF of `window` into `nsdf` for all lags τ from 0 up to the
/// window size,
///
/// `nsdf[τ] = 2 * Σ window[i] * window[i + τ] / Σ (window[i]² + window[i + τ]²)`,
///
/// summing i over the `window_size - τ` overlapping samples. The divisor is
/// the combined energy of the two overlapping windows, which bounds the
/// function to (-∞, 1] and gives `nsdf[0] == 1.0` for any non-silent window.
/// Lags where the divisor is exactly zero (both overlapping windows silent)
/// produce an NSDF value of 0.0.
pub(crate) fn nsdf_time_domain(window: &[f32], nsdf: &mut [f32]) {
    if nsdf.len() != window.len() {
        panic!("NSDF buffer and window must have the same size");
    }

    let window_size = window.len();
    for tau in 0..window_size {
        let mut acf = 0.0;
        let mut divisor = 0.0;
        for i in 0..window_size - tau {
            acf += window[i] * window[i + tau];
            divisor += window[i] * window[i] + window[i + tau] * window[i + tau];
        }
        nsdf[tau] = if divisor == 0.0 { 0.0 } else { 2.0 * acf / divisor };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::RngCore;
    use rand_pcg::Pcg64;

    #[test]
    fn test_unity_at_lag_zero() {
        // The lag zero value must be exactly 1 for any non-silent window.
        let mut rng: Pcg64 = rand_seeder::Seeder::from("nsdf lag zero").make_rng();
        for _ in 0..20 {
            let mut window: Vec<f32> = vec![0.0; 256];
            for sample in window.iter_mut() {
                *sample = (rng.next_u32() as f32) / (u32::MAX as f32) - 0.5;
            }
            let mut nsdf = vec![0.0; window.len()];
            nsdf_time_domain(&window, &mut nsdf);
            assert_eq!(nsdf[0], 1.0);
        }
    }

    #[test]
    fn test_silent_window() {
        let window: Vec<f32> = vec![0.0; 64];
        let mut nsdf = vec![1.0; window.len()];
        nsdf_time_domain(&window, &mut nsdf);
        for value in nsdf.iter() {
            assert_eq!(*value, 0.0);
        }
    }

    #[test]
    fn test_known_values() {
        let window: [f32; 3] = [1.0, 2.0, 3.0];
        let mut nsdf = [0.0; 3];
        nsdf_time_domain(&window, &mut nsdf);
        assert_eq!(nsdf[0], 1.0);
        assert!((nsdf[1] - 16.0 / 18.0).abs() <= f32::EPSILON);
        assert!((nsdf[2] - 6.0 / 10.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn test_values_do_not_exceed_unity() {
        let sample_rate = 44100.0;
        let frequency = 330.0;
        let mut window: Vec<f32> = vec![0.0; 512];
        for (i, sample) in window.iter_mut().enumerate() {
            *sample = (2.0 * std::f32::consts::PI * frequency * (i as f32) / sample_rate).sin();
        }
        let mut nsdf = vec![0.0; window.len()];
        nsdf_time_domain(&window, &mut nsdf);
        for value in nsdf.iter() {
            assert!(*value <= 1.0 + 1e-4);
        }
    }

    #[test]
    #[should_panic]
    fn test_mismatched_buffer_sizes() {
        let window = [0.0; 8];
        let mut nsdf = [0.0; 7];
        nsdf_time_domain(&window, &mut nsdf);
    }
}
