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
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Sample type CLAHE can equalize.
///
/// Implemented for `u8` (8 bit) and `u16` (16 bit) single channel images.
pub trait ClaheSample:
    Copy + Clone + Default + Debug + Send + Sync + AsPrimitive<usize> + 'static
{
    /// Number of significant bits in a sample
    const BIT_DEPTH: usize;

    /// Converts an already range checked level back to a sample
    fn from_level(level: u32) -> Self;
}

impl ClaheSample for u8 {
    const BIT_DEPTH: usize = 8;

    #[inline(always)]
    fn from_level(level: u32) -> Self {
        level.as_()
    }
}

impl ClaheSample for u16 {
    const BIT_DEPTH: usize = 16;

    #[inline(always)]
    fn from_level(level: u32) -> Self {
        level.as_()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depths() {
        assert_eq!(u8::BIT_DEPTH, 8);
        assert_eq!(u16::BIT_DEPTH, 16);
        assert_eq!(u8::from_level(255), 255u8);
        assert_eq!(u16::from_level(65535), 65535u16);
        assert_eq!(AsPrimitive::<usize>::as_(200u8), 200usize);
    }
}
