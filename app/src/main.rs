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
mod args;

use crate::args::Args;
use anyhow::{Context, Result};
use clap::Parser;
use claheforge::Clahe;
use image::DynamicImage;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn to_single_channel(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => image,
        other => {
            let color = other.color();
            let depth = color.bits_per_pixel() / color.channel_count().max(1) as u16;
            warn!(?color, "converting to single channel luma");
            if depth > 8 {
                DynamicImage::ImageLuma16(other.to_luma16())
            } else {
                DynamicImage::ImageLuma8(other.to_luma8())
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let image = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let image = to_single_channel(image);
    info!(
        width = image.width(),
        height = image.height(),
        clip_limit = config.clip_limit,
        columns = config.tile_grid.columns,
        rows = config.tile_grid.rows,
        bit_shift = config.bit_shift,
        "equalizing {}",
        args.input.display()
    );

    let mut clahe = Clahe::new(config);
    let instant = std::time::Instant::now();
    let equalized = clahe
        .apply_dynamic(&image)
        .with_context(|| format!("failed to equalize {}", args.input.display()))?;
    info!(elapsed = ?instant.elapsed(), "equalized");

    equalized
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("saved {}", args.output.display());
    Ok(())
}
