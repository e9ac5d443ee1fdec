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
use crate::err::MismatchedSize;
use crate::ClaheError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[inline]
fn check_plane_layout(
    data_len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), ClaheError> {
    if width == 0 || height == 0 {
        return Err(ClaheError::ZeroBaseSize);
    }
    if stride < width {
        return Err(ClaheError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width,
            received: stride,
        }));
    }
    if data_len < stride * (height - 1) + width {
        return Err(ClaheError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * (height - 1) + width,
            received: data_len,
        }));
    }
    Ok(())
}

/// Immutable single channel image store
#[derive(Debug)]
pub struct GrayImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: usize,
    pub height: usize,
    /// Image stride, items per row, might be 0
    pub stride: usize,
}

/// Mutable single channel image store
#[derive(Debug)]
pub struct GrayImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: usize,
    pub height: usize,
    /// Image stride, items per row, might be 0
    pub stride: usize,
}

impl<'a, T: Clone + Copy + Default + Debug> GrayImage<'a, T> {
    /// Allocates default image layout
    pub fn alloc(width: usize, height: usize) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![T::default(); width * height]),
            width,
            height,
            stride: width,
        }
    }

    /// Borrows existing data
    /// Stride will be default `width`
    pub fn borrow(arr: &'a [T], width: usize, height: usize) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> usize {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements
    #[inline]
    pub fn check_layout(&self) -> Result<(), ClaheError> {
        check_plane_layout(self.data.len(), self.width, self.height, self.row_stride())
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches_mut(&self, other: &GrayImageMut<'_, T>) -> Result<(), ClaheError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(ClaheError::ImageSizeMismatch)
    }

    /// Visible samples of row `y`, stride padding excluded
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.row_stride();
        &self.data[start..start + self.width]
    }
}

impl<'a, T: Clone + Copy + Default + Debug> GrayImageMut<'a, T> {
    /// Allocates default image layout
    pub fn alloc(width: usize, height: usize) -> Self {
        Self {
            data: BufferStore::Owned(vec![T::default(); width * height]),
            width,
            height,
            stride: width,
        }
    }

    /// Mutable borrows existing data
    /// Stride will be default `width`
    pub fn borrow(arr: &'a mut [T], width: usize, height: usize) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> usize {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements
    #[inline]
    pub fn check_layout(&self) -> Result<(), ClaheError> {
        check_plane_layout(
            self.data.borrow().len(),
            self.width,
            self.height,
            self.row_stride(),
        )
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data.borrow()[y * self.row_stride() + x]
    }

    /// Consumes the store and returns `width * height` densely packed samples
    pub fn into_packed_vec(self) -> Vec<T> {
        let stride = self.row_stride();
        let (width, height) = (self.width, self.height);
        match self.data {
            BufferStore::Owned(mut vec) if stride == width => {
                vec.truncate(width * height);
                vec
            }
            data => {
                let src = data.borrow();
                let mut packed = Vec::with_capacity(width * height);
                for y in 0..height {
                    packed.extend_from_slice(&src[y * stride..y * stride + width]);
                }
                packed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        let image = GrayImage::<u8>::alloc(0, 4);
        assert_eq!(image.check_layout(), Err(ClaheError::ZeroBaseSize));
    }

    #[test]
    fn short_slice_is_rejected() {
        let data = vec![0u8; 15];
        let image = GrayImage::borrow(&data, 4, 4);
        assert_eq!(
            image.check_layout(),
            Err(ClaheError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 16,
                received: 15
            }))
        );
    }

    #[test]
    fn narrow_stride_is_rejected() {
        let data = vec![0u16; 64];
        let mut image = GrayImage::borrow(&data, 8, 4);
        image.stride = 6;
        assert_eq!(
            image.check_layout(),
            Err(ClaheError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: 8,
                received: 6
            }))
        );
    }

    #[test]
    fn last_row_may_omit_padding() {
        // 3 rows of width 4 on a stride of 6: the final row needs only 4 items.
        let data = vec![1u8; 6 * 2 + 4];
        let mut image = GrayImage::borrow(&data, 4, 3);
        image.stride = 6;
        assert!(image.check_layout().is_ok());
        assert_eq!(image.row(2).len(), 4);
    }

    #[test]
    fn packs_strided_rows() {
        let mut data = vec![0u8; 12];
        for (i, v) in data.iter_mut().enumerate() {
            *v = i as u8;
        }
        let mut image = GrayImageMut::borrow(&mut data, 2, 3);
        image.stride = 4;
        assert_eq!(image.get(1, 2), 9);
        assert_eq!(image.into_packed_vec(), vec![0, 1, 4, 5, 8, 9]);
    }

    #[test]
    fn matching_destination_is_accepted() {
        let data = vec![0u16; 12];
        let image = GrayImage::borrow(&data, 4, 3);
        let mut out = vec![0u16; 5 * 3];
        let mut dst = GrayImageMut::borrow(&mut out, 4, 3);
        dst.stride = 5;
        assert!(dst.check_layout().is_ok());
        assert!(image.size_matches_mut(&dst).is_ok());
    }

    #[test]
    fn zero_stride_falls_back_to_width() {
        let data = vec![7u8; 20];
        let mut image = GrayImage::borrow(&data, 5, 4);
        image.stride = 0;
        assert_eq!(image.row_stride(), 5);
        assert!(image.check_layout().is_ok());
        let other = GrayImageMut::<u8>::alloc(5, 3);
        assert_eq!(
            image.size_matches_mut(&other),
            Err(ClaheError::ImageSizeMismatch)
        );
    }
}
