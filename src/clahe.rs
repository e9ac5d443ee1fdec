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
use crate::clip::{build_mapping, clip_histogram, effective_clip_limit};
use crate::histogram::{bin_count, build_histogram};
use crate::mapper::{axis_taps, map_row, TileMappings};
use crate::partition::TileGrid;
use crate::{ClaheConfig, ClaheError, ClaheSample, GrayImage, GrayImageMut, TileGridSize};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Per-tile histograms and mappings kept between calls
#[derive(Debug, Default)]
struct TileScratch {
    histograms: Vec<u32>,
    mappings: Vec<u16>,
}

impl TileScratch {
    fn prepare(&mut self, tiles: usize, bins: usize) {
        let len = tiles * bins;
        self.histograms.resize(len, 0);
        self.mappings.resize(len, 0);
    }

    fn retained_bytes(&self) -> usize {
        self.histograms.capacity() * size_of::<u32>() + self.mappings.capacity() * size_of::<u16>()
    }
}

/// Contrast Limited Adaptive Histogram Equalization engine.
///
/// Holds the configuration and the scratch buffers reused across calls.
/// Mutators take `&mut self` and cannot run while an `apply` is in flight;
/// sharing one engine between threads requires external synchronization,
/// e.g. a `Mutex<Clahe>`.
///
/// # Example
///
/// ```
/// use claheforge::{Clahe, ClaheConfig, GrayImage, TileGridSize};
///
/// let pixels: Vec<u8> = (0..64 * 64).map(|i| (i % 97) as u8).collect();
/// let src = GrayImage::borrow(&pixels, 64, 64);
/// let mut clahe = Clahe::new(ClaheConfig::new(8f64, TileGridSize::new(4, 4), 0));
/// let dst = clahe.apply(&src).unwrap();
/// assert_eq!((dst.width, dst.height), (64, 64));
/// ```
#[derive(Debug, Default)]
pub struct Clahe {
    config: ClaheConfig,
    scratch: TileScratch,
}

impl Clahe {
    pub fn new(config: ClaheConfig) -> Self {
        Self {
            config,
            scratch: TileScratch::default(),
        }
    }

    pub fn config(&self) -> ClaheConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ClaheConfig) {
        self.config = config;
    }

    /// Sets threshold for contrast limiting, `0` disables clipping.
    ///
    /// Validated on the next `apply`.
    pub fn set_clip_limit(&mut self, clip_limit: f64) {
        self.config.clip_limit = clip_limit;
    }

    pub fn clip_limit(&self) -> f64 {
        self.config.clip_limit
    }

    /// Sets number of tiles in a row and in a column
    pub fn set_tile_grid_size(&mut self, columns: usize, rows: usize) {
        self.config.tile_grid = TileGridSize::new(columns, rows);
    }

    pub fn tile_grid_size(&self) -> TileGridSize {
        self.config.tile_grid
    }

    /// Sets how many low bits are dropped before histogramming
    pub fn set_bit_shift(&mut self, bit_shift: u32) {
        self.config.bit_shift = bit_shift;
    }

    pub fn bit_shift(&self) -> u32 {
        self.config.bit_shift
    }

    /// Frees histogram and mapping buffers retained from previous calls
    pub fn release_scratch_buffers(&mut self) {
        let released = self.scratch.retained_bytes();
        self.scratch = TileScratch::default();
        if released > 0 {
            debug!(released, "clahe scratch buffers released");
        }
    }

    /// Bytes currently held by scratch buffers
    pub fn retained_scratch_bytes(&self) -> usize {
        self.scratch.retained_bytes()
    }

    /// Equalizes `src` into a newly allocated image of the same size and depth
    pub fn apply<T: ClaheSample>(
        &mut self,
        src: &GrayImage<'_, T>,
    ) -> Result<GrayImageMut<'static, T>, ClaheError> {
        src.check_layout()?;
        let tiles = self.validate::<T>(src.width, src.height)?;
        let mut dst = GrayImageMut::alloc(src.width, src.height);
        self.equalize(src, &mut dst, &tiles);
        Ok(dst)
    }

    /// Equalizes `src` into `dst`, which must have the same dimensions
    pub fn apply_into<T: ClaheSample>(
        &mut self,
        src: &GrayImage<'_, T>,
        dst: &mut GrayImageMut<'_, T>,
    ) -> Result<(), ClaheError> {
        src.check_layout()?;
        dst.check_layout()?;
        src.size_matches_mut(dst)?;
        let tiles = self.validate::<T>(src.width, src.height)?;
        self.equalize(src, dst, &tiles);
        Ok(())
    }

    fn validate<T: ClaheSample>(&self, width: usize, height: usize) -> Result<TileGrid, ClaheError> {
        self.config.validate_bit_shift(T::BIT_DEPTH)?;
        self.config.validate()?;
        TileGrid::new(width, height, self.config.tile_grid)
    }

    fn equalize<T: ClaheSample>(
        &mut self,
        src: &GrayImage<'_, T>,
        dst: &mut GrayImageMut<'_, T>,
        tiles: &TileGrid,
    ) {
        let bit_shift = self.config.bit_shift;
        let clip_limit = self.config.clip_limit;
        let bins = bin_count(T::BIT_DEPTH, bit_shift);

        debug!(
            width = src.width,
            height = src.height,
            columns = tiles.columns(),
            rows = tiles.rows(),
            bins,
            clip_limit,
            "clahe apply"
        );

        self.scratch.prepare(tiles.len(), bins);
        let TileScratch {
            histograms,
            mappings,
        } = &mut self.scratch;

        histograms
            .par_chunks_mut(bins)
            .zip(mappings.par_chunks_mut(bins))
            .enumerate()
            .for_each(|(index, (hist, lut))| {
                let rect = tiles.tile_at(index);
                build_histogram(src, rect, bit_shift, hist);
                if let Some(limit) = effective_clip_limit(clip_limit, rect.area(), bins) {
                    if limit as f64 > clip_limit.max(1f64) {
                        trace!(tile = index, limit, "clip limit raised to fit tile area");
                    }
                    clip_histogram(hist, limit);
                }
                build_mapping(hist, lut);
            });

        let horizontal = axis_taps(&tiles.horizontal, src.width);
        let vertical = axis_taps(&tiles.vertical, src.height);
        let mappings = TileMappings {
            luts: mappings,
            columns: tiles.columns(),
            bins,
        };

        let width = src.width;
        let src_stride = src.row_stride();
        let src_data = src.data.as_ref();
        let dst_stride = dst.row_stride();

        dst.data
            .borrow_mut()
            .par_chunks_mut(dst_stride)
            .take(src.height)
            .enumerate()
            .for_each(|(y, dst_row)| {
                let src_row = &src_data[y * src_stride..y * src_stride + width];
                map_row(
                    src_row,
                    &mut dst_row[..width],
                    vertical[y],
                    &horizontal,
                    &mappings,
                    bit_shift,
                );
            });
    }
}
