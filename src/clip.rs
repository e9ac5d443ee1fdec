/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
/// Upper bound for whole-count redistribution passes before the residual is
/// spread directly into bins that still have room.
pub const MAX_REDISTRIBUTION_PASSES: u32 = 8;

/// Converts a user clip limit into a per-bin count for a tile.
///
/// Returns `None` when clipping is disabled. The limit is never below one, and
/// never below `ceil(area / bins)` so the clipped mass always fits back.
pub fn effective_clip_limit(clip_limit: f64, area: usize, bins: usize) -> Option<u32> {
    if clip_limit <= 0f64 {
        return None;
    }
    let requested = clip_limit.min(u32::MAX as f64) as u32;
    let fit = area.div_ceil(bins).min(u32::MAX as usize) as u32;
    Some(requested.max(1).max(fit))
}

#[inline]
fn clip_excess(hist: &mut [u32], limit: u32) -> u32 {
    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }
    excess
}

/// Clips bins at `limit` and redistributes the excess over all bins.
///
/// Total count is preserved and no bin ends above `limit`, provided
/// `limit * hist.len()` is at least the total count. Returns the number of
/// whole-count passes performed.
pub fn clip_histogram(hist: &mut [u32], limit: u32) -> u32 {
    let bins = hist.len();
    let mut excess = clip_excess(hist, limit);

    let mut passes = 0u32;
    while excess as usize >= bins && passes < MAX_REDISTRIBUTION_PASSES {
        let increment = excess / bins as u32;
        for bin in hist.iter_mut() {
            *bin += increment;
        }
        excess = excess - increment * bins as u32 + clip_excess(hist, limit);
        passes += 1;
    }

    if excess > 0 {
        let step = (bins / excess as usize).max(1);
        let mut index = 0usize;
        while index < bins && excess > 0 {
            if hist[index] < limit {
                hist[index] += 1;
                excess -= 1;
            }
            index += step;
        }
        for bin in hist.iter_mut() {
            if excess == 0 {
                break;
            }
            let add = (limit - *bin).min(excess);
            *bin += add;
            excess -= add;
        }
    }

    passes
}

/// Integrates a histogram into an equalization mapping onto `[0, bins - 1]`.
///
/// Levels below the first populated bin map to 0. A histogram with every count
/// in a single bin (or no counts at all) yields the identity mapping.
pub fn build_mapping(hist: &[u32], lut: &mut [u16]) {
    let bins = hist.len();
    let total: u64 = hist.iter().map(|&v| v as u64).sum();
    let cdf_min = hist.iter().copied().find(|&v| v > 0).unwrap_or(0) as u64;

    if total == cdf_min {
        for (i, dst) in lut.iter_mut().take(bins).enumerate() {
            *dst = i as u16;
        }
        return;
    }

    let scale = (bins - 1) as u64;
    let denominator = total - cdf_min;
    let mut cdf = 0u64;
    for (&count, dst) in hist.iter().zip(lut.iter_mut()) {
        cdf += count as u64;
        let numerator = cdf.saturating_sub(cdf_min) * scale;
        *dst = ((numerator + denominator / 2) / denominator) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_clipping() {
        assert_eq!(effective_clip_limit(0f64, 64, 256), None);
    }

    #[test]
    fn limit_is_raised_to_fit() {
        assert_eq!(effective_clip_limit(40f64, 16, 256), Some(40));
        assert_eq!(effective_clip_limit(0.25f64, 16, 256), Some(1));
        // 4096 pixels over 32 bins cannot stay under 10 per bin.
        assert_eq!(effective_clip_limit(10f64, 4096, 32), Some(128));
    }

    #[test]
    fn clip_preserves_mass_and_limit() {
        let mut hist = [0u32; 256];
        hist[0] = 1000;
        hist[1] = 500;
        clip_histogram(&mut hist, 100);
        assert!(hist.iter().all(|&v| v <= 100));
        assert_eq!(hist.iter().sum::<u32>(), 1500);
    }

    #[test]
    fn clip_below_limit_is_untouched() {
        let mut hist = [3u32; 16];
        hist[4] = 9;
        let before = hist;
        assert_eq!(clip_histogram(&mut hist, 9), 0);
        assert_eq!(hist, before);
    }

    #[test]
    fn tight_limit_flattens_histogram() {
        // All mass in one bin with a limit equal to the mean count.
        let mut hist = [0u32; 32];
        hist[7] = 32 * 6;
        clip_histogram(&mut hist, 6);
        assert!(hist.iter().all(|&v| v == 6));
    }

    #[test]
    fn passes_are_capped() {
        let mut hist = vec![0u32; 4];
        hist[0] = 4000;
        let passes = clip_histogram(&mut hist, 1000);
        assert!(passes <= MAX_REDISTRIBUTION_PASSES);
        assert_eq!(hist, vec![1000, 1000, 1000, 1000]);
    }

    #[test]
    fn mapping_is_monotonic_and_spans_range() {
        let hist: Vec<u32> = (0..64u32).map(|i| (i * 7) % 13).collect();
        let mut lut = vec![0u16; 64];
        build_mapping(&hist, &mut lut);
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lut[63], 63);
        assert_eq!(lut[0], 0);
    }

    #[test]
    fn single_level_maps_to_itself() {
        let mut hist = vec![0u32; 256];
        hist[100] = 16;
        let mut lut = vec![0u16; 256];
        build_mapping(&hist, &mut lut);
        assert_eq!(lut[100], 100);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
    }

    #[test]
    fn flat_histogram_is_identity() {
        let hist = vec![4u32; 256];
        let mut lut = vec![0u16; 256];
        build_mapping(&hist, &mut lut);
        for (i, &v) in lut.iter().enumerate() {
            assert_eq!(v as usize, i);
        }
    }

    #[test]
    fn two_levels_stretch_to_extremes() {
        let mut hist = vec![0u32; 256];
        hist[50] = 8;
        hist[60] = 8;
        let mut lut = vec![0u16; 256];
        build_mapping(&hist, &mut lut);
        assert_eq!(lut[50], 0);
        assert_eq!(lut[55], 0);
        assert_eq!(lut[60], 255);
    }
}
