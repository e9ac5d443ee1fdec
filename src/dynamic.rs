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
use crate::{Clahe, ClaheError, GrayImage};
use image::{DynamicImage, ImageBuffer, Luma};

fn unsupported_layout(image: &DynamicImage) -> ClaheError {
    let color = image.color();
    let channels = color.channel_count() as usize;
    let depth = color.bits_per_pixel() as usize / channels.max(1);
    if depth != 8 && depth != 16 {
        ClaheError::UnsupportedDepth(depth)
    } else {
        ClaheError::UnsupportedChannels(channels)
    }
}

impl Clahe {
    /// Equalizes a `Luma8` or `Luma16` image.
    ///
    /// Other colour types are rejected, convert them with
    /// [DynamicImage::to_luma8] or [DynamicImage::to_luma16] first.
    pub fn apply_dynamic(&mut self, image: &DynamicImage) -> Result<DynamicImage, ClaheError> {
        match image {
            DynamicImage::ImageLuma8(gray) => {
                let (width, height) = gray.dimensions();
                let src = GrayImage::borrow(gray.as_raw(), width as usize, height as usize);
                let dst = self.apply(&src)?;
                ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(width, height, dst.into_packed_vec())
                    .map(DynamicImage::ImageLuma8)
                    .ok_or(ClaheError::ImageSizeMismatch)
            }
            DynamicImage::ImageLuma16(gray) => {
                let (width, height) = gray.dimensions();
                let src = GrayImage::borrow(gray.as_raw(), width as usize, height as usize);
                let dst = self.apply(&src)?;
                ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(width, height, dst.into_packed_vec())
                    .map(DynamicImage::ImageLuma16)
                    .ok_or(ClaheError::ImageSizeMismatch)
            }
            other => Err(unsupported_layout(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClaheConfig, ErrorKind, TileGridSize};

    fn engine() -> Clahe {
        Clahe::new(ClaheConfig::new(2f64, TileGridSize::new(2, 2), 0))
    }

    #[test]
    fn luma_images_keep_variant_and_size() {
        let out = engine()
            .apply_dynamic(&DynamicImage::new_luma8(16, 12))
            .unwrap();
        assert!(matches!(out, DynamicImage::ImageLuma8(_)));
        assert_eq!((out.width(), out.height()), (16, 12));

        let out = engine()
            .apply_dynamic(&DynamicImage::new_luma16(9, 9))
            .unwrap();
        assert!(matches!(out, DynamicImage::ImageLuma16(_)));
    }

    #[test]
    fn colour_images_are_rejected() {
        let err = engine()
            .apply_dynamic(&DynamicImage::new_rgb8(8, 8))
            .unwrap_err();
        assert_eq!(err, ClaheError::UnsupportedChannels(3));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = engine()
            .apply_dynamic(&DynamicImage::new_luma_a16(8, 8))
            .unwrap_err();
        assert_eq!(err, ClaheError::UnsupportedChannels(2));
    }

    #[test]
    fn float_images_are_unsupported_depth() {
        let err = engine()
            .apply_dynamic(&DynamicImage::new_rgb32f(8, 8))
            .unwrap_err();
        assert_eq!(err, ClaheError::UnsupportedDepth(32));
        assert_eq!(err.kind(), ErrorKind::UnsupportedDepth);
    }

    #[test]
    fn empty_image_is_invalid_input() {
        let err = engine()
            .apply_dynamic(&DynamicImage::new_luma8(0, 4))
            .unwrap_err();
        assert_eq!(err, ClaheError::ZeroBaseSize);
    }
}
