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
use crate::{ClaheError, TileGridSize};

/// Rectangle of the image covered by one tile
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct TileRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl TileRect {
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Horizontal center in pixel-center coordinates
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x as f32 + (self.width - 1) as f32 * 0.5f32
    }

    /// Vertical center in pixel-center coordinates
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y as f32 + (self.height - 1) as f32 * 0.5f32
    }
}

/// One axis split into `count` spans. The last `length % count` spans are one
/// pixel longer than the others.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct AxisSplit {
    pub(crate) count: usize,
    base: usize,
    first_long: usize,
}

impl AxisSplit {
    fn new(length: usize, count: usize) -> Self {
        let base = length / count;
        let remainder = length % count;
        Self {
            count,
            base,
            first_long: count - remainder,
        }
    }

    #[inline]
    pub(crate) fn start(&self, index: usize) -> usize {
        index * self.base + index.saturating_sub(self.first_long)
    }

    #[inline]
    pub(crate) fn len(&self, index: usize) -> usize {
        if index >= self.first_long {
            self.base + 1
        } else {
            self.base
        }
    }
}

/// Regular partition of an image into `columns x rows` tiles
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TileGrid {
    pub(crate) horizontal: AxisSplit,
    pub(crate) vertical: AxisSplit,
}

impl TileGrid {
    pub fn new(width: usize, height: usize, grid: TileGridSize) -> Result<TileGrid, ClaheError> {
        if grid.columns == 0 || grid.rows == 0 {
            return Err(ClaheError::InvalidTileGrid {
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        if grid.columns > width || grid.rows > height {
            return Err(ClaheError::TileGridExceedsImage {
                columns: grid.columns,
                rows: grid.rows,
                width,
                height,
            });
        }
        Ok(TileGrid {
            horizontal: AxisSplit::new(width, grid.columns),
            vertical: AxisSplit::new(height, grid.rows),
        })
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.horizontal.count
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.vertical.count
    }

    /// Total number of tiles
    #[inline]
    pub fn len(&self) -> usize {
        self.columns() * self.rows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tile(&self, tx: usize, ty: usize) -> TileRect {
        TileRect {
            x: self.horizontal.start(tx),
            y: self.vertical.start(ty),
            width: self.horizontal.len(tx),
            height: self.vertical.len(ty),
        }
    }

    /// Tile by row-major index
    #[inline]
    pub fn tile_at(&self, index: usize) -> TileRect {
        self.tile(index % self.columns(), index / self.columns())
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = TileRect> + '_ {
        (0..self.len()).map(move |index| self.tile_at(index))
    }
}
