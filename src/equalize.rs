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
use crate::clip::build_mapping;
use crate::histogram::{bin_count, build_histogram};
use crate::partition::TileRect;
use crate::{ClaheError, ClaheSample, GrayImage, GrayImageMut};

/// Global histogram equalization.
///
/// One histogram over the whole image, no clipping, no interpolation. Produces
/// the same result as [crate::Clahe] with a 1x1 grid and clip limit 0.
pub fn equalize_histogram<T: ClaheSample>(
    src: &GrayImage<'_, T>,
    bit_shift: u32,
) -> Result<GrayImageMut<'static, T>, ClaheError> {
    src.check_layout()?;
    if bit_shift as usize >= T::BIT_DEPTH {
        return Err(ClaheError::BitShiftTooLarge {
            bit_shift,
            bit_depth: T::BIT_DEPTH,
        });
    }

    let bins = bin_count(T::BIT_DEPTH, bit_shift);
    let whole = TileRect {
        x: 0,
        y: 0,
        width: src.width,
        height: src.height,
    };
    let mut hist = vec![0u32; bins];
    build_histogram(src, whole, bit_shift, &mut hist);
    let mut lut = vec![0u16; bins];
    build_mapping(&hist, &mut lut);

    let mut dst = GrayImageMut::<T>::alloc(src.width, src.height);
    let dst_stride = dst.row_stride();
    for (y, dst_row) in dst
        .data
        .borrow_mut()
        .chunks_exact_mut(dst_stride)
        .enumerate()
    {
        for (&v, dst) in src.row(y).iter().zip(dst_row.iter_mut()) {
            let level: usize = v.as_();
            *dst = T::from_level((lut[level >> bit_shift] as u32) << bit_shift);
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_fixed_point() {
        let data: Vec<u8> = (0..256 * 2).map(|i| (i % 256) as u8).collect();
        let src = GrayImage::borrow(&data, 256, 2);
        let dst = equalize_histogram(&src, 0).unwrap();
        assert_eq!(dst.into_packed_vec(), data);
    }

    #[test]
    fn low_contrast_is_stretched() {
        let data: Vec<u16> = (0..110).map(|x| 30000 + (x % 11) as u16).collect();
        let src = GrayImage::borrow(&data, 110, 1);
        let dst = equalize_histogram(&src, 0).unwrap().into_packed_vec();
        let lo = *dst.iter().min().unwrap();
        let hi = *dst.iter().max().unwrap();
        assert_eq!(lo, 0);
        assert_eq!(hi, 65535);
    }

    #[test]
    fn preserves_ordering() {
        let data = vec![10u8, 50, 100, 150, 200];
        let src = GrayImage::borrow(&data, 5, 1);
        let dst = equalize_histogram(&src, 0).unwrap().into_packed_vec();
        assert!(dst.windows(2).all(|w| w[0] <= w[1]), "{dst:?}");
    }

    #[test]
    fn rejects_bad_shift_and_empty_image() {
        let data = vec![0u8; 4];
        assert!(matches!(
            equalize_histogram(&GrayImage::borrow(&data, 2, 2), 8),
            Err(ClaheError::BitShiftTooLarge { .. })
        ));
        assert!(matches!(
            equalize_histogram(&GrayImage::borrow(&data, 0, 2), 0),
            Err(ClaheError::ZeroBaseSize)
        ));
    }
}
