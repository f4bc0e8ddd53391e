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
/// Decoded in place of frame text whose encoding byte isn't recognised
pub const UNKNOWN_CHARSET: &str = "Unknown Charset";

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
    /// ISO-8859-1
    Latin1 = 0,
    /// UTF-16 with a byte order mark
    UTF16 = 1,
    /// UTF-16 big endian
    UTF16BE = 2,
    /// UTF-8
    UTF8 = 3,
}

impl TextEncoding {
    /// Get a `TextEncoding` from a u8, must be 0-3 inclusive
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Latin1),
            1 => Some(Self::UTF16),
            2 => Some(Self::UTF16BE),
            3 => Some(Self::UTF8),
            _ => None,
        }
    }
}

/// Decode a frame payload.
///
/// Malformed input is decoded lossily and terminators are kept as they are.
pub(crate) fn decode_text(raw_bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 => raw_bytes.iter().map(|c| char::from(*c)).collect(),
        TextEncoding::UTF16 => match raw_bytes {
            [0xFE, 0xFF, rest @ ..] => utf16_decode(rest, u16::from_be_bytes),
            [0xFF, 0xFE, rest @ ..] => utf16_decode(rest, u16::from_le_bytes),
            _ => utf16_decode(raw_bytes, u16::from_be_bytes),
        },
        TextEncoding::UTF16BE => utf16_decode(raw_bytes, u16::from_be_bytes),
        TextEncoding::UTF8 => String::from_utf8_lossy(raw_bytes).into_owned(),
    }
}

pub(crate) fn utf16_decode(reader: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
    let mut units: Vec<u16> = reader
        .chunks_exact(2)
        .map(|c| endianness([c[0], c[1]]))
        .collect();

    // A dangling odd byte can't form a code unit
    if reader.len() % 2 != 0 {
        units.push(0xFFFD);
    }

    String::from_utf16_lossy(&units)
}
