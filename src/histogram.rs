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
use crate::partition::TileRect;
use crate::{ClaheSample, GrayImage};

/// Number of histogram bins for `bit_depth` samples reduced by `bit_shift`
#[inline]
pub fn bin_count(bit_depth: usize, bit_shift: u32) -> usize {
    (1usize << bit_depth) >> bit_shift
}

/// Counts `sample >> bit_shift` over `rect`.
///
/// `hist` is zeroed first and must hold at least `bin_count` entries.
pub fn build_histogram<T: ClaheSample>(
    image: &GrayImage<'_, T>,
    rect: TileRect,
    bit_shift: u32,
    hist: &mut [u32],
) {
    hist.fill(0);
    let stride = image.row_stride();
    let data = image.data.as_ref();
    for y in rect.y..rect.y + rect.height {
        let start = y * stride + rect.x;
        for &v in &data[start..start + rect.width] {
            let level: usize = v.as_();
            hist[level >> bit_shift] += 1;
        }
    }
}
