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
use super::constants::GENRES;
use crate::id3::UNKNOWN;

use std::fmt;

#[derive(Default, Debug, PartialEq, Eq, Clone)]
/// An ID3v1 tag
///
/// Every text field is read from a fixed width slot. Zero bytes inside a
/// slot are dropped rather than treated as terminators, so a field padded
/// with zeros and a field with a stray zero in the middle both read cleanly.
pub struct Id3v1Tag {
    /// Track title, 30 bytes max
    pub title: String,
    /// Track artist, 30 bytes max
    pub artist: String,
    /// Album title, 30 bytes max
    pub album: String,
    /// Release year, 4 bytes max
    pub year: String,
    /// A short comment, 30 bytes max
    pub comment: String,
    /// Index into [`GENRES`]
    pub genre_index: u8,
}

impl Id3v1Tag {
    /// The genre name, "Unknown" if the index is outside of [`GENRES`]
    pub fn genre(&self) -> &'static str {
        GENRES
            .get(usize::from(self.genre_index))
            .copied()
            .unwrap_or(UNKNOWN)
    }

    /// Returns `true` if the tag contains no text
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.artist.is_empty()
            && self.album.is_empty()
            && self.year.is_empty()
            && self.comment.is_empty()
    }
}

fn or_unknown(field: &str) -> &str {
    if field.is_empty() {
        UNKNOWN
    } else {
        field
    }
}

impl fmt::Display for Id3v1Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", or_unknown(&self.title))?;
        writeln!(f, "Artist: {}", or_unknown(&self.artist))?;
        writeln!(f, "Album: {}", or_unknown(&self.album))?;
        writeln!(f, "Year: {}", or_unknown(&self.year))?;
        writeln!(f, "Comment: {}", or_unknown(&self.comment))?;
        write!(f, "Genre: {}", self.genre())
    }
}
