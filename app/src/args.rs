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
use anyhow::{bail, Context, Result};
use claheforge::{ClaheConfig, TileGridSize};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Contrast Limited Adaptive Histogram Equalization on grayscale images
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Image to equalize, colour input is converted to luma
    pub(crate) input: PathBuf,

    /// Where to write the equalized image, format follows the extension
    pub(crate) output: PathBuf,

    /// Maximum pixel count per histogram bin, 0 disables clipping
    ///
    /// An absolute count, raised per tile to at least tile_area / bins. Unlike
    /// OpenCV's multiplier of tile_area / bins, small values such as 2 leave
    /// the image nearly unchanged.
    #[arg(long)]
    pub(crate) clip_limit: Option<f64>,

    /// Tile grid as COLUMNSxROWS, e.g. 8x8
    #[arg(long, value_parser = parse_grid)]
    pub(crate) grid: Option<TileGridSize>,

    /// Low bits dropped before histogramming
    #[arg(long)]
    pub(crate) bit_shift: Option<u32>,

    /// JSON file with `clip_limit`, `tile_grid` and `bit_shift`
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Worker threads, defaults to one per core
    #[arg(long)]
    pub(crate) threads: Option<usize>,
}

fn parse_grid(value: &str) -> Result<TileGridSize> {
    let Some((columns, rows)) = value.split_once(['x', 'X']) else {
        bail!("expected COLUMNSxROWS, got `{value}`");
    };
    let columns = columns
        .trim()
        .parse()
        .with_context(|| format!("invalid column count in `{value}`"))?;
    let rows = rows
        .trim()
        .parse()
        .with_context(|| format!("invalid row count in `{value}`"))?;
    Ok(TileGridSize::new(columns, rows))
}

fn load_config(path: &Path) -> Result<ClaheConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

impl Args {
    /// Defaults, then the config file, then explicit flags
    pub(crate) fn resolve_config(&self) -> Result<ClaheConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ClaheConfig::default(),
        };
        if let Some(clip_limit) = self.clip_limit {
            config.clip_limit = clip_limit;
        }
        if let Some(grid) = self.grid {
            config.tile_grid = grid;
        }
        if let Some(bit_shift) = self.bit_shift {
            config.bit_shift = bit_shift;
        }
        Ok(config)
    }
}
