#[derive(Copy, Clone)]
/// A key maximum, i.e an NSDF maximum that may or may not correspond
/// to the pitch period.
pub struct KeyMaximum {
    /// The index into the NSDF array corresponding to this maximum
    pub lag_index: usize,
    /// The NSDF value at `lag_index` for this maximum
    pub value_at_lag_index: f32,
    /// The NSDF value for this maximum, approximated using parabolic interpolation.
    pub value: f32,
    /// The lag, in samples, for this maximum, approximated using parabolic interpolation.
    pub lag: f32,
}

impl KeyMaximum {
    /// Refines the maximum at `lag_index` by fitting a parabola through it
    /// and its two neighbors and taking the vertex. `lag_index` must have a
    /// valid neighbor on each side.
    pub(crate) fn from_nsdf(nsdf: &[f32], lag_index: usize) -> Self {
        let left = nsdf[lag_index - 1];
        let middle = nsdf[lag_index];
        let right = nsdf[lag_index + 1];

        let bottom = right + left - 2.0 * middle;
        let (lag, value) = if bottom == 0.0 {
            // The three points are collinear, so there is no vertex to find.
            (lag_index as f32, middle)
        } else {
            let delta = left - right;
            (
                (lag_index as f32) + delta / (2.0 * bottom),
                middle - delta * delta / (8.0 * bottom),
            )
        };

        KeyMaximum {
            lag_index,
            value_at_lag_index: middle,
            value,
            lag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_maximum() {
        // Equal neighbors put the vertex on the sample itself.
        let nsdf: [f32; 4] = [0.0, 0.0, 3.0, 0.0];
        let key_max = KeyMaximum::from_nsdf(&nsdf, 2);
        assert!((key_max.lag - 2.0).abs() <= f32::EPSILON);
        assert!((key_max.value - 3.0).abs() <= f32::EPSILON);
        assert_eq!(key_max.lag_index, 2);
        assert_eq!(key_max.value_at_lag_index, 3.0);
    }

    #[test]
    fn test_skewed_maximum() {
        let nsdf: [f32; 3] = [-2.0, 0.0, -1.0];
        let key_max = KeyMaximum::from_nsdf(&nsdf, 1);
        // bottom = -3, delta = -1, vertex at 1 + 1/6 with value 1/24.
        assert!((key_max.lag - 1.1666666_f32).abs() <= f32::EPSILON);
        assert!((key_max.value - 1.0 / 24.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn test_collinear_points() {
        // A degenerate fit falls back to the raw sample.
        let nsdf: [f32; 3] = [1.0, 2.0, 3.0];
        let key_max = KeyMaximum::from_nsdf(&nsdf, 1);
        assert_eq!(key_max.lag, 1.0);
        assert_eq!(key_max.value, 2.0);
    }
}
