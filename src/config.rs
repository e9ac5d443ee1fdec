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
use crate::ClaheError;

/// Number of tiles along each image axis
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGridSize {
    pub columns: usize,
    pub rows: usize,
}

impl TileGridSize {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

impl Default for TileGridSize {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

/// CLAHE parameters.
///
/// `clip_limit` is an absolute pixel count: the most a single histogram bin
/// may hold before its excess is spread over the other bins, `0` disables
/// clipping. Per tile it is raised to at least `ceil(tile_area / bins)`.
/// This is not OpenCV's `clipLimit`, which multiplies `tile_area / bins`;
/// an OpenCV-style value such as `2.0` is raised to the floor here and
/// flattens every tile, leaving the output close to the input. Multiply
/// by `tile_area / bins` to convert.
/// `bit_shift` drops low bits of every sample before histogramming, so a
/// tile histogram has `2^depth >> bit_shift` bins.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClaheConfig {
    pub clip_limit: f64,
    pub tile_grid: TileGridSize,
    pub bit_shift: u32,
}

impl Default for ClaheConfig {
    fn default() -> Self {
        Self {
            clip_limit: 40f64,
            tile_grid: TileGridSize::default(),
            bit_shift: 0,
        }
    }
}

impl ClaheConfig {
    pub fn new(clip_limit: f64, tile_grid: TileGridSize, bit_shift: u32) -> Self {
        Self {
            clip_limit,
            tile_grid,
            bit_shift,
        }
    }

    /// Validates the parameters that do not depend on the image
    pub fn validate(&self) -> Result<(), ClaheError> {
        if !self.clip_limit.is_finite() || self.clip_limit < 0f64 {
            return Err(ClaheError::InvalidClipLimit(self.clip_limit));
        }
        if self.tile_grid.columns == 0 || self.tile_grid.rows == 0 {
            return Err(ClaheError::InvalidTileGrid {
                columns: self.tile_grid.columns,
                rows: self.tile_grid.rows,
            });
        }
        Ok(())
    }

    /// Validates bit shift against sample depth, at least two bins must remain
    pub fn validate_bit_shift(&self, bit_depth: usize) -> Result<(), ClaheError> {
        if self.bit_shift as usize >= bit_depth {
            return Err(ClaheError::BitShiftTooLarge {
                bit_shift: self.bit_shift,
                bit_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClaheConfig::default();
        assert_eq!(config.clip_limit, 40f64);
        assert_eq!(config.tile_grid, TileGridSize::new(8, 8));
        assert_eq!(config.bit_shift, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn clip_limit_is_a_count_not_a_multiplier() {
        // 32x32 tile over 256 bins, OpenCV's 2.0 would mean 8 per bin
        let config = ClaheConfig::new(2f64, TileGridSize::new(1, 1), 0);
        assert_eq!(
            crate::effective_clip_limit(config.clip_limit, 32 * 32, 256),
            Some(4)
        );
        let opencv_equivalent = 2f64 * (32 * 32) as f64 / 256f64;
        assert_eq!(
            crate::effective_clip_limit(opencv_equivalent, 32 * 32, 256),
            Some(8)
        );
    }

    #[test]
    fn rejects_bad_clip_limit() {
        for clip_limit in [-1f64, f64::NAN, f64::INFINITY] {
            let config = ClaheConfig {
                clip_limit,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ClaheError::InvalidClipLimit(_))
            ));
        }
    }

    #[test]
    fn rejects_empty_grid() {
        let config = ClaheConfig::new(2f64, TileGridSize::new(0, 4), 0);
        assert_eq!(
            config.validate(),
            Err(ClaheError::InvalidTileGrid {
                columns: 0,
                rows: 4
            })
        );
    }

    #[test]
    fn bit_shift_bounded_by_depth() {
        let config = ClaheConfig::new(0f64, TileGridSize::new(1, 1), 7);
        assert!(config.validate_bit_shift(8).is_ok());
        let config = ClaheConfig { bit_shift: 8, ..config };
        assert_eq!(
            config.validate_bit_shift(8),
            Err(ClaheError::BitShiftTooLarge {
                bit_shift: 8,
                bit_depth: 8
            })
        );
        assert!(config.validate_bit_shift(16).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let config: ClaheConfig = serde_json::from_str(r#"{ "clip_limit": 2.5 }"#).unwrap();
        assert_eq!(config.clip_limit, 2.5);
        assert_eq!(config.tile_grid, TileGridSize::default());
    }
}
