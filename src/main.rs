/*
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
#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use clap::Parser;
use mpegscanlib::cli::Args;
use mpegscanlib::config::Settings;
use mpegscanlib::Decoder;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<()> {
    lovely_env_logger::init_default();

    let args = Args::parse();
    let config = get_config(&args)?;

    let file = File::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let mut decoder = Decoder::new(BufReader::new(file))
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    if config.show_tags() {
        print_tags(&decoder);
    }

    let mut printed = 0;
    let mut skipped = 0;
    while printed < config.max_frames() {
        let Some(header) = decoder.decode_frame()? else {
            break;
        };

        if !header.is_valid() && !config.show_invalid_frames() {
            skipped += 1;
            continue;
        }

        printed += 1;
        println!("--- Frame {printed} (ends at byte {}) ---", decoder.reader().position());
        println!("{header}");
    }

    if printed == 0 {
        println!("No frames found");
    }
    if skipped > 0 {
        info!("skipped {skipped} invalid frame headers");
    }

    Ok(())
}

fn get_config(args: &Args) -> Result<Settings> {
    let mut config = Settings::default();
    config.load()?;

    config.max_frames_from_cli = args.max_frames;
    config.show_invalid_frames_from_cli = args.invalid;
    config.hide_tags_from_cli = args.no_tags;

    if args.save_config {
        let saved = Settings {
            max_frames: config.max_frames(),
            show_invalid_frames: config.show_invalid_frames(),
            show_tags: config.show_tags(),
            ..Settings::default()
        };
        saved.save()?;
    }

    Ok(config)
}

fn print_tags<R>(decoder: &Decoder<R>)
where
    R: std::io::Read + std::io::Seek,
{
    println!("=== ID3v1 ===");
    match decoder.tag_v1() {
        Some(tag) => println!("{tag}"),
        None => println!("No ID3v1 tag"),
    }

    println!("=== ID3v2 ===");
    match decoder.tag_v2() {
        Some(tag) => print!("{tag}"),
        None => println!("No ID3v2 tag"),
    }
}
