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
use super::tag::Id3v1Tag;
use crate::bitstream::BitReader;
use crate::error::Result;

use std::io::{Read, Seek};

/// Size of the ID3v1 trailer, marker included
pub const ID3V1_TAG_SIZE: usize = 128;

/// Read the ID3v1 trailer from the last 128 bytes of the stream.
///
/// The cursor is left where it was. `None` if the stream is too short or
/// the trailer doesn't start with "TAG".
pub fn read_id3v1<R>(reader: &mut BitReader<R>) -> Result<Option<Id3v1Tag>>
where
    R: Read + Seek,
{
    if reader.length() < ID3V1_TAG_SIZE as u64 {
        debug!("stream too short for an ID3v1 tag");
        return Ok(None);
    }

    let data = reader.sandbox(|r| -> Result<Vec<u8>> {
        r.seek(-(ID3V1_TAG_SIZE as i64))?;
        r.read_bytes(ID3V1_TAG_SIZE)
    })?;

    let Ok(data) = <[u8; ID3V1_TAG_SIZE]>::try_from(data) else {
        return Ok(None);
    };

    let tag = parse_id3v1(&data);
    debug!("ID3v1 tag {}", if tag.is_some() { "found" } else { "absent" });

    Ok(tag)
}

pub(crate) fn parse_id3v1(reader: &[u8; ID3V1_TAG_SIZE]) -> Option<Id3v1Tag> {
    if &reader[..3] != b"TAG" {
        return None;
    }

    let reader = &reader[3..];

    Some(Id3v1Tag {
        title: decode_text(&reader[..30]),
        artist: decode_text(&reader[30..60]),
        album: decode_text(&reader[60..90]),
        year: decode_text(&reader[90..94]),
        comment: decode_text(&reader[94..124]),
        genre_index: reader[124],
    })
}

fn decode_text(data: &[u8]) -> String {
    data.iter()
        .filter(|c| **c != 0)
        .map(|c| char::from(*c))
        .collect()
}
