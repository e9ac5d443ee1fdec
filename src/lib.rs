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
#![allow(clippy::manual_clamp)]
//! Contrast Limited Adaptive Histogram Equalization for single channel
//! 8 and 16 bit images.
//!
//! The image is split into a grid of tiles, each tile gets its own clipped
//! histogram equalization mapping, and every output pixel blends the mappings
//! of the nearest tile centers bilinearly.
mod clahe;
mod clip;
mod config;
#[cfg(feature = "image")]
mod dynamic;
mod equalize;
mod err;
mod gray_image;
mod histogram;
mod mapper;
mod partition;
mod sample;

pub use clahe::Clahe;
pub use clip::{build_mapping, clip_histogram, effective_clip_limit, MAX_REDISTRIBUTION_PASSES};
pub use config::{ClaheConfig, TileGridSize};
pub use equalize::equalize_histogram;
pub use err::{ClaheError, ErrorKind, MismatchedSize};
pub use gray_image::{BufferStore, GrayImage, GrayImageMut};
pub use histogram::{bin_count, build_histogram};
pub use partition::{TileGrid, TileRect};
pub use sample::ClaheSample;
