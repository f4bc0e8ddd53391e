//! ID3v2 items
//!
//! # ID3v2 notes
//!
//! See also: [`Id3v2Tag`]
//!
//! Frames are read with the ID3v2.3 layout: a 4 byte ID, a plain big endian
//! size and 2 flag bytes, followed by a text encoding byte and the text.
//! Only frame text is kept, keyed by the frame IDs in [`FRAME_IDS`].
//!
//! ## Unsupported features
//!
//! * The extended header is flagged but never read
//! * Compressed and encrypted frames end frame parsing, the rest of the tag is skipped
//! * Unsynchronisation is flagged but not reversed
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
pub(crate) mod flags;
pub(crate) mod frame_ids;
pub(crate) mod read;
pub(crate) mod tag;
pub(crate) mod text_utils;

pub use flags::{FrameFlags, Id3v2TagFlags};
pub use frame_ids::FRAME_IDS;
pub use read::{read_id3v2, ID3V2_HEADER_SIZE};
pub use tag::{description, Id3v2Tag};
pub use text_utils::{TextEncoding, UNKNOWN_CHARSET};
