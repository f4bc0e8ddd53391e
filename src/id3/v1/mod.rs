//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! See also: [Id3v1Tag]
//!
//! The tag occupies the last 128 bytes of the stream:
//! `"TAG"`, title (30), artist (30), album (30), year (4), comment (30) and a
//! single genre byte.
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte. The [`GENRES`] table covers
//! indices 0 to 125, anything else reads as "Unknown".
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
pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;

pub use crate::id3::v1::constants::GENRES;
pub use crate::id3::v1::read::{read_id3v1, ID3V1_TAG_SIZE};
pub use crate::id3::v1::tag::Id3v1Tag;
