/**
 * MIT License
 *
 * mpegscan - Copyright (c) 2021 Larry Hao
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "mpegscan", author, version, about, long_about=None)] // Read from `Cargo.toml`
pub struct Args {
    /// The mp3 file to scan.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Number of frame headers to print, default is 16.
    #[arg(short = 'n', long = "frames", value_name = "N")]
    pub max_frames: Option<usize>,
    /// Also print frame headers with reserved or forbidden values.
    #[arg(short, long)]
    pub invalid: bool,
    /// Not printing ID3v1 and ID3v2 tags. default is printing.
    #[arg(short = 't', long)]
    pub no_tags: bool,
    /// Write the options of this run to `~/.config/mpegscan/config.toml`.
    #[arg(long)]
    pub save_config: bool,
}
