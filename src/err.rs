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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Coarse classification of [ClaheError]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Image buffer, layout or channel count is not acceptable
    InvalidInput,
    /// Tile grid, clip limit or bit shift cannot be applied
    InvalidConfiguration,
    /// Sample depth is not 8 or 16 bit
    UnsupportedDepth,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClaheError {
    ZeroBaseSize,
    ImageSizeMismatch,
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
    UnsupportedChannels(usize),
    UnsupportedDepth(usize),
    InvalidTileGrid {
        columns: usize,
        rows: usize,
    },
    TileGridExceedsImage {
        columns: usize,
        rows: usize,
        width: usize,
        height: usize,
    },
    InvalidClipLimit(f64),
    BitShiftTooLarge {
        bit_shift: u32,
        bit_depth: usize,
    },
}

impl ClaheError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClaheError::ZeroBaseSize
            | ClaheError::ImageSizeMismatch
            | ClaheError::MinimumSliceSizeMismatch(_)
            | ClaheError::MinimumStrideSizeMismatch(_)
            | ClaheError::UnsupportedChannels(_) => ErrorKind::InvalidInput,
            ClaheError::UnsupportedDepth(_) => ErrorKind::UnsupportedDepth,
            ClaheError::InvalidTileGrid { .. }
            | ClaheError::TileGridExceedsImage { .. }
            | ClaheError::InvalidClipLimit(_)
            | ClaheError::BitShiftTooLarge { .. } => ErrorKind::InvalidConfiguration,
        }
    }
}

impl Display for ClaheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaheError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            ClaheError::ImageSizeMismatch => f.write_str("Image size does not match"),
            ClaheError::MinimumSliceSizeMismatch(size) => write!(
                f,
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            ),
            ClaheError::MinimumStrideSizeMismatch(size) => write!(
                f,
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            ),
            ClaheError::UnsupportedChannels(cn) => {
                write!(f, "Only single channel images are supported, got {} channels", cn)
            }
            ClaheError::UnsupportedDepth(depth) => {
                write!(f, "Unsupported sample depth {}, expected 8 or 16 bit", depth)
            }
            ClaheError::InvalidTileGrid { columns, rows } => {
                write!(f, "Tile grid must be at least 1x1 but it is {}x{}", columns, rows)
            }
            ClaheError::TileGridExceedsImage {
                columns,
                rows,
                width,
                height,
            } => write!(
                f,
                "Tile grid {}x{} exceeds image size {}x{}",
                columns, rows, width, height
            ),
            ClaheError::InvalidClipLimit(value) => {
                write!(f, "Clip limit must be finite and non-negative, got {}", value)
            }
            ClaheError::BitShiftTooLarge {
                bit_shift,
                bit_depth,
            } => write!(
                f,
                "Bit shift {} must be less than sample bit depth {}",
                bit_shift, bit_depth
            ),
        }
    }
}

impl Error for ClaheError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_variants() {
        assert_eq!(ClaheError::ZeroBaseSize.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            ClaheError::UnsupportedChannels(3).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            ClaheError::UnsupportedDepth(32).kind(),
            ErrorKind::UnsupportedDepth
        );
        assert_eq!(
            ClaheError::TileGridExceedsImage {
                columns: 9,
                rows: 1,
                width: 8,
                height: 8
            }
            .kind(),
            ErrorKind::InvalidConfiguration
        );
        assert_eq!(
            ClaheError::InvalidClipLimit(-1.0).kind(),
            ErrorKind::InvalidConfiguration
        );
    }

    #[test]
    fn display_mentions_values() {
        let msg = ClaheError::BitShiftTooLarge {
            bit_shift: 9,
            bit_depth: 8,
        }
        .to_string();
        assert!(msg.contains('9') && msg.contains('8'), "{msg}");
        let msg = ClaheError::TileGridExceedsImage {
            columns: 20,
            rows: 2,
            width: 17,
            height: 17,
        }
        .to_string();
        assert!(msg.contains("20x2") && msg.contains("17x17"), "{msg}");
        let msg = ClaheError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: 16,
            received: 15,
        })
        .to_string();
        assert_eq!(
            msg,
            "Minimum image slice size mismatch: expected=16, received=15"
        );
        let msg = ClaheError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: 8,
            received: 6,
        })
        .to_string();
        assert_eq!(msg, "Minimum stride must have size at least 8 but it is 6");
    }
}
