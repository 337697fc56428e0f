//! Peak picking over the NSDF curve.

use alloc::vec::Vec;

/// Scans `nsdf` for candidate period lags and collects them into
/// `max_positions` in increasing order, one per positive lobe of the curve.
/// A candidate is the largest position within its lobe that is a strict
/// local maximum relative to its left neighbor and a non-strict local
/// maximum relative to its right neighbor. The positive lobe around lag
/// zero is skipped, bounded by a third of the curve length, so every
/// collected position has a valid neighbor on each side.
pub(crate) fn pick_peaks(nsdf: &[f32], max_positions: &mut Vec<usize>) {
    max_positions.clear();

    let size = nsdf.len();
    let mut pos = 0;
    let mut cur_max_pos: Option<usize> = None;

    // Skip the positive lobe around lag zero. It never corresponds
    // to a pitch period.
    while pos < (size - 1) / 3 && nsdf[pos] > 0.0 {
        pos += 1;
    }

    // Cross into the first genuine positive lobe.
    while pos < size - 1 && nsdf[pos] <= 0.0 {
        pos += 1;
    }

    // The parabolic refinement step needs a left neighbor.
    if pos == 0 {
        pos = 1;
    }

    while pos < size - 1 {
        if nsdf[pos] > nsdf[pos - 1] && nsdf[pos] >= nsdf[pos + 1] {
            match cur_max_pos {
                None => cur_max_pos = Some(pos),
                Some(max_pos) => {
                    if nsdf[pos] > nsdf[max_pos] {
                        cur_max_pos = Some(pos);
                    }
                }
            }
        }
        pos += 1;
        if pos < size - 1 && nsdf[pos] <= 0.0 {
            // Left the current lobe. Close it out and skip ahead through
            // the non-positive run to the next one.
            if let Some(max_pos) = cur_max_pos.take() {
                max_positions.push(max_pos);
            }
            while pos < size - 1 && nsdf[pos] <= 0.0 {
                pos += 1;
            }
        }
    }

    // The curve may end while a lobe is still open.
    if let Some(max_pos) = cur_max_pos {
        max_positions.push(max_pos);
    }
}
