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
use crate::partition::AxisSplit;
use crate::ClaheSample;

/// Neighboring tile indices and blend weight for one coordinate
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct AxisTap {
    pub(crate) t0: usize,
    pub(crate) t1: usize,
    /// Weight of `t1`, `t0` receives `1 - weight`
    pub(crate) weight: f32,
}

/// Precomputes taps for every coordinate along one axis.
///
/// Coordinates before the first tile center or after the last one are clamped
/// to that tile.
pub(crate) fn axis_taps(split: &AxisSplit, length: usize) -> Vec<AxisTap> {
    let centers: Vec<f32> = (0..split.count)
        .map(|i| split.start(i) as f32 + (split.len(i) - 1) as f32 * 0.5f32)
        .collect();
    let last = split.count - 1;
    let mut taps = Vec::with_capacity(length);
    let mut t = 0usize;
    for p in 0..length {
        let pf = p as f32;
        if pf <= centers[0] {
            taps.push(AxisTap {
                t0: 0,
                t1: 0,
                weight: 0f32,
            });
        } else if pf >= centers[last] {
            taps.push(AxisTap {
                t0: last,
                t1: last,
                weight: 0f32,
            });
        } else {
            while centers[t + 1] <= pf {
                t += 1;
            }
            let span = centers[t + 1] - centers[t];
            taps.push(AxisTap {
                t0: t,
                t1: t + 1,
                weight: (pf - centers[t]) / span,
            });
        }
    }
    taps
}

/// Per-tile mappings laid out row-major, `bins` entries per tile
pub(crate) struct TileMappings<'a> {
    pub(crate) luts: &'a [u16],
    pub(crate) columns: usize,
    pub(crate) bins: usize,
}

impl TileMappings<'_> {
    #[inline(always)]
    fn lookup(&self, tx: usize, ty: usize, level: usize) -> f32 {
        self.luts[(ty * self.columns + tx) * self.bins + level] as f32
    }
}

/// Remaps one image row by blending the four surrounding tile mappings
pub(crate) fn map_row<T: ClaheSample>(
    src: &[T],
    dst: &mut [T],
    vertical: AxisTap,
    horizontal: &[AxisTap],
    mappings: &TileMappings<'_>,
    bit_shift: u32,
) {
    let max_level = (mappings.bins - 1) as f32;
    let ay = vertical.weight;
    for ((&v, dst), tap) in src.iter().zip(dst.iter_mut()).zip(horizontal.iter()) {
        let level: usize = v.as_();
        let level = level >> bit_shift;
        let ax = tap.weight;

        let l00 = mappings.lookup(tap.t0, vertical.t0, level);
        let l10 = mappings.lookup(tap.t1, vertical.t0, level);
        let l01 = mappings.lookup(tap.t0, vertical.t1, level);
        let l11 = mappings.lookup(tap.t1, vertical.t1, level);

        let top = l00 * (1f32 - ax) + l10 * ax;
        let bottom = l01 * (1f32 - ax) + l11 * ax;
        let blended = top * (1f32 - ay) + bottom * ay;

        let rounded = (blended + 0.5f32).min(max_level).max(0f32) as u32;
        *dst = T::from_level(rounded << bit_shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::TileGrid;
    use crate::TileGridSize;

    #[test]
    fn single_tile_never_blends() {
        let grid = TileGrid::new(9, 3, TileGridSize::new(1, 1)).unwrap();
        let taps = axis_taps(&grid.horizontal, 9);
        assert!(taps.iter().all(|t| t.t0 == 0 && t.t1 == 0 && t.weight == 0f32));
    }

    #[test]
    fn borders_clamp_and_interior_blends() {
        let grid = TileGrid::new(16, 1, TileGridSize::new(2, 1)).unwrap();
        let taps = axis_taps(&grid.horizontal, 16);
        // Tile centers sit at 3.5 and 11.5.
        assert_eq!((taps[0].t0, taps[0].t1), (0, 0));
        assert_eq!((taps[3].t0, taps[3].t1), (0, 0));
        assert_eq!((taps[4].t0, taps[4].t1), (0, 1));
        assert_eq!(taps[4].weight, 0.0625f32);
        assert_eq!(taps[11].weight, 0.9375f32);
        assert_eq!((taps[12].t0, taps[12].t1), (1, 1));
        assert_eq!((taps[15].t0, taps[15].t1), (1, 1));
    }

    #[test]
    fn weights_are_continuous_across_seams() {
        let grid = TileGrid::new(17, 17, TileGridSize::new(4, 4)).unwrap();
        let taps = axis_taps(&grid.horizontal, 17);
        let position = |t: &AxisTap| t.t0 as f32 + t.weight;
        for pair in taps.windows(2) {
            let (a, b) = (position(&pair[0]), position(&pair[1]));
            assert!(b >= a, "{pair:?}");
            assert!(b - a <= 0.34f32, "{pair:?}");
        }
    }

    #[test]
    fn row_ramps_between_tile_mappings() {
        // Left tile maps every level to 0, right tile to 255.
        let mut luts = vec![0u16; 2 * 256];
        luts[256..].fill(255);
        let mappings = TileMappings {
            luts: &luts,
            columns: 2,
            bins: 256,
        };
        let grid = TileGrid::new(16, 1, TileGridSize::new(2, 1)).unwrap();
        let taps = axis_taps(&grid.horizontal, 16);
        let vertical = AxisTap {
            t0: 0,
            t1: 0,
            weight: 0f32,
        };
        let src = vec![128u8; 16];
        let mut dst = vec![0u8; 16];
        map_row(&src, &mut dst, vertical, &taps, &mappings, 0);
        assert_eq!(dst[0], 0);
        assert_eq!(dst[15], 255);
        assert!(dst.windows(2).all(|w| w[0] <= w[1]));
        assert!(dst[7] > 0 && dst[8] < 255, "{dst:?}");
    }

    #[test]
    fn shift_restores_scale() {
        let luts: Vec<u16> = (0..32u16).collect();
        let mappings = TileMappings {
            luts: &luts,
            columns: 1,
            bins: 32,
        };
        let tap = AxisTap {
            t0: 0,
            t1: 0,
            weight: 0f32,
        };
        let src = vec![0u8, 8, 255];
        let mut dst = vec![0u8; 3];
        map_row(&src, &mut dst, tap, &[tap; 3], &mappings, 3);
        assert_eq!(dst, vec![0, 8, 248]);
    }
}
