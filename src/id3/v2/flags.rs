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
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
/// Flags that apply to the entire tag
pub struct Id3v2TagFlags {
    /// Whether or not all frames are unsynchronised
    pub unsynchronisation: bool,
    /// Whether an extended header follows the tag header
    ///
    /// The extended header is never read, frame parsing starts straight after
    /// the 10 byte tag header regardless.
    pub extended_header: bool,
    /// Indicates if the tag is in an experimental stage
    pub experimental: bool,
}

impl Id3v2TagFlags {
    pub(crate) fn from_u8(flags: u8) -> Self {
        Self {
            unsynchronisation: flags & 0x80 == 0x80,
            extended_header: flags & 0x40 == 0x40,
            experimental: flags & 0x20 == 0x20,
        }
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
/// Various flags describing an ID3v2.3 frame
pub struct FrameFlags {
    /// Preserve the frame on tag edit
    pub tag_alter_preservation: bool,
    /// Preserve the frame on file edit
    pub file_alter_preservation: bool,
    /// Item cannot be written to
    pub read_only: bool,
    /// The frame is zlib compressed, a 4 byte decompressed size follows the header
    pub compression: bool,
    /// The frame is encrypted
    pub encryption: bool,
    /// The frame belongs to a group
    pub grouping_identity: bool,
}

pub(crate) fn parse_flags(flags: u16) -> FrameFlags {
    FrameFlags {
        tag_alter_preservation: flags & 0x8000 == 0x8000,
        file_alter_preservation: flags & 0x4000 == 0x4000,
        read_only: flags & 0x2000 == 0x2000,
        compression: flags & 0x0080 == 0x0080,
        encryption: flags & 0x0040 == 0x0040,
        grouping_identity: flags & 0x0020 == 0x0020,
    }
}
