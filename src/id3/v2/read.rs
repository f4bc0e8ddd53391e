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
use super::flags::{parse_flags, Id3v2TagFlags};
use super::tag::Id3v2Tag;
use super::text_utils::{decode_text, TextEncoding, UNKNOWN_CHARSET};
use crate::bitstream::{BitReader, MAX_READ_BYTES};
use crate::error::Result;

use std::io::{Read, Seek};

use byteorder::{BigEndian, ByteOrder};

/// Size of the tag header and of every frame header
pub const ID3V2_HEADER_SIZE: u64 = 10;

// https://id3.org/id3v2.3.0#ID3v2_header
pub(crate) fn unsynch_u32(n: u32) -> u32 {
    n & 0x7F | (n & 0x7F00) >> 1 | (n & 0x7F_0000) >> 2 | (n & 0x7F00_0000) >> 3
}

/// Read an ID3v2 tag starting at the current position.
///
/// The cursor is left where it was. `None` if the stream doesn't start with
/// "ID3" here or ends inside the tag header.
pub fn read_id3v2<R>(reader: &mut BitReader<R>) -> Result<Option<Id3v2Tag>>
where
    R: Read + Seek,
{
    let mut reader = reader.excursion();
    let tag_start = reader.position();

    let header = reader.read_bytes(ID3V2_HEADER_SIZE as usize)?;
    if header.len() < ID3V2_HEADER_SIZE as usize || &header[..3] != b"ID3" {
        debug!("ID3v2 tag absent");
        return Ok(None);
    }

    let mut tag = Id3v2Tag::new(
        header[3],
        header[4],
        Id3v2TagFlags::from_u8(header[5]),
        unsynch_u32(BigEndian::read_u32(&header[6..])),
    );

    debug!(
        "ID3v2.{}.{} tag, {} bytes, flags {:?}",
        tag.major_version, tag.revision, tag.size, tag.flags
    );

    if tag.major_version != 3 {
        warn!(
            "ID3v2.{} tag will be read with the ID3v2.3 frame layout",
            tag.major_version
        );
    }

    if tag.flags.extended_header {
        warn!("ID3v2 extended header is not supported, frames may be misaligned");
    }

    let frames_start = tag_start + ID3V2_HEADER_SIZE;
    while reader.position() - frames_start < u64::from(tag.size) {
        match read_frame(&mut reader, &mut tag)? {
            FrameOutcome::Read => {}
            FrameOutcome::Padding => break,
            FrameOutcome::Abandoned => {
                tag.frames_abandoned = true;
                break;
            }
        }
    }

    Ok(Some(tag))
}

enum FrameOutcome {
    Read,
    Padding,
    Abandoned,
}

fn read_frame<R>(reader: &mut BitReader<R>, tag: &mut Id3v2Tag) -> Result<FrameOutcome>
where
    R: Read + Seek,
{
    let header = reader.read_bytes(ID3V2_HEADER_SIZE as usize)?;
    if header.len() < ID3V2_HEADER_SIZE as usize {
        debug!("stream ends inside an ID3v2 frame header");
        return Ok(FrameOutcome::Abandoned);
    }

    if header[0] == 0 {
        trace!("reached ID3v2 padding at {}", reader.position() - ID3V2_HEADER_SIZE);
        return Ok(FrameOutcome::Padding);
    }

    let id = String::from_utf8_lossy(&header[..4]).into_owned();
    // Frame sizes are plain big endian in 2.3, unlike the tag size
    let size = BigEndian::read_u32(&header[4..8]);
    let flags = parse_flags(BigEndian::read_u16(&header[8..]));

    trace!("ID3v2 frame {id}, {size} bytes, flags {flags:?}");

    if flags.compression {
        let _decompressed_size = reader.read_bytes(4)?;
        warn!("ID3v2 frame {id} is compressed, skipping the remaining frames");
        return Ok(FrameOutcome::Abandoned);
    }

    if flags.encryption {
        warn!("ID3v2 frame {id} is encrypted, skipping the remaining frames");
        return Ok(FrameOutcome::Abandoned);
    }

    let Some(encoding) = reader.read_u8()? else {
        debug!("stream ends inside ID3v2 frame {id}");
        return Ok(FrameOutcome::Abandoned);
    };

    // An unknown encoding leaves the payload in place, the next frame
    // header is read from right after the encoding byte
    let text = match TextEncoding::from_u8(encoding) {
        Some(encoding) => {
            let len = size.saturating_sub(1) as usize;
            let content = reader.read_bytes(len)?;
            if content.len() < len.min(MAX_READ_BYTES) {
                debug!("stream ends inside ID3v2 frame {id}");
                return Ok(FrameOutcome::Abandoned);
            }

            // Reading carries on from the end of the clamped payload
            if len > MAX_READ_BYTES {
                debug!("ID3v2 frame {id} truncated to {MAX_READ_BYTES} bytes");
            }

            decode_text(&content, encoding)
        }
        None => {
            debug!("ID3v2 frame {id} has unknown text encoding {encoding}");
            String::from(UNKNOWN_CHARSET)
        }
    };

    if !tag.insert(&id, text) {
        trace!("dropping unsupported ID3v2 frame {id}");
    }

    Ok(FrameOutcome::Read)
}

#[cfg(test)]
mod tests {
    use super::{read_id3v2, unsynch_u32};
    use crate::bitstream::BitReader;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn frame(id: &[u8; 4], flags: u16, encoding: u8, text: &[u8]) -> Vec<u8> {
        let mut data = id.to_vec();
        data.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
        data.extend_from_slice(&flags.to_be_bytes());
        data.push(encoding);
        data.extend_from_slice(text);
        data
    }

    fn synchsafe(n: u32) -> [u8; 4] {
        [
            (n >> 21) as u8 & 0x7F,
            (n >> 14) as u8 & 0x7F,
            (n >> 7) as u8 & 0x7F,
            n as u8 & 0x7F,
        ]
    }

    fn tag(frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
        let body: Vec<u8> = frames.concat();
        let mut data = b"ID3\x03\x00\x00".to_vec();
        data.extend_from_slice(&synchsafe((body.len() + padding) as u32));
        data.extend(body);
        data.extend(std::iter::repeat(0).take(padding));
        data
    }

    fn read(data: Vec<u8>) -> Option<super::Id3v2Tag> {
        let mut reader = BitReader::new(Cursor::new(data)).unwrap();
        let tag = read_id3v2(&mut reader).unwrap();
        assert_eq!(reader.cursor(), (0, 0));
        tag
    }

    #[test]
    fn test_unsynch_u32() {
        assert_eq!(unsynch_u32(0x0000_0201), 257);
        assert_eq!(unsynch_u32(0x7F7F_7F7F), 0x0FFF_FFFF);
        assert_eq!(unsynch_u32(u32::from_be_bytes(synchsafe(123_456))), 123_456);
    }

    #[test]
    fn test_single_utf8_frame() {
        let tag = read(tag(&[frame(b"TIT2", 0, 3, b"Song")], 0)).unwrap();

        assert_eq!(tag.major_version, 3);
        assert_eq!(tag.size, 15);
        assert_eq!(tag.get("TIT2"), Some("Song"));
        assert!(!tag.frames_abandoned);
    }

    #[test]
    fn test_unknown_frame_is_dropped() {
        let tag = read(tag(
            &[
                frame(b"ZZZZ", 0, 3, b"Noise"),
                frame(b"TIT2", 0, 3, b"Song"),
            ],
            0,
        ))
        .unwrap();

        assert_eq!(tag.get("TIT2"), Some("Song"));
        assert_eq!(tag.get("ZZZZ"), None);
        assert_eq!(tag.populated().count(), 1);
    }

    #[test]
    fn test_compressed_frame_abandons_the_rest() {
        // Decompressed size sits between the frame header and the content
        let mut compressed = frame(b"TIT2", 0x0080, 3, b"Song");
        let content = compressed.split_off(10);
        compressed.extend_from_slice(&[0, 0, 0, 4]);
        compressed.extend(content);

        let tag = read(tag(&[compressed, frame(b"TALB", 0, 3, b"Album")], 0)).unwrap();

        assert_eq!(tag.get("TIT2"), Some("Unknown"));
        assert_eq!(tag.get("TALB"), Some("Unknown"));
        assert!(tag.frames_abandoned);
    }

    #[test]
    fn test_encrypted_frame_abandons_the_rest() {
        let tag = read(tag(
            &[
                frame(b"TPE1", 0, 0, b"Artist"),
                frame(b"TIT2", 0x0040, 3, b"Song"),
                frame(b"TALB", 0, 3, b"Album"),
            ],
            0,
        ))
        .unwrap();

        assert_eq!(tag.get("TPE1"), Some("Artist"));
        assert_eq!(tag.get("TALB"), Some("Unknown"));
        assert!(tag.frames_abandoned);
    }

    #[test]
    fn test_encodings() {
        let tag = read(tag(
            &[
                frame(b"TALB", 0, 0, &[b'C', 0xE9]),
                frame(b"TPE1", 0, 1, &[0xFF, 0xFE, b'h', 0, b'i', 0]),
                frame(b"TCOM", 0, 2, &[0, b'o', 0, b'k']),
                frame(b"TIT2", 0, 3, "s\u{f6}ng\0".as_bytes()),
                frame(b"TYER", 0, 9, b""),
            ],
            0,
        ))
        .unwrap();

        assert_eq!(tag.get("TALB"), Some("C\u{e9}"));
        assert_eq!(tag.get("TPE1"), Some("hi"));
        assert_eq!(tag.get("TCOM"), Some("ok"));
        assert_eq!(tag.get("TIT2"), Some("s\u{f6}ng\0"));
        assert_eq!(tag.get("TYER"), Some("Unknown Charset"));
        assert!(!tag.frames_abandoned);
    }

    #[test]
    fn test_unknown_encoding_leaves_payload_unread() {
        // The payload of a frame with an unknown encoding is read as the next frame
        let inner = frame(b"TALB", 0, 3, b"Inner");
        let tag = read(tag(
            &[frame(b"TYER", 0, 9, &inner), frame(b"TIT2", 0, 3, b"Song")],
            0,
        ))
        .unwrap();

        assert_eq!(tag.get("TYER"), Some("Unknown Charset"));
        assert_eq!(tag.get("TALB"), Some("Inner"));
        assert_eq!(tag.get("TIT2"), Some("Song"));
        assert!(!tag.frames_abandoned);
    }

    #[test]
    fn test_padding_ends_frames() {
        let tag = read(tag(&[frame(b"TIT2", 0, 3, b"Song")], 64)).unwrap();

        assert_eq!(tag.size, 79);
        assert_eq!(tag.get("TIT2"), Some("Song"));
        assert!(!tag.frames_abandoned);
    }

    #[test]
    fn test_truncated_frame() {
        let mut data = tag(&[frame(b"TIT2", 0, 3, b"Song"), frame(b"TALB", 0, 3, b"Album")], 0);
        data.truncate(data.len() - 2);

        let tag = read(data).unwrap();
        assert_eq!(tag.get("TIT2"), Some("Song"));
        assert_eq!(tag.get("TALB"), Some("Unknown"));
        assert!(tag.frames_abandoned);
    }

    #[test]
    fn test_oversized_frame_continues_after_clamp() {
        // Only the first 4096 payload bytes are read, the rest is parsed as frames
        let mut long = vec![b'a'; 4096];
        long.extend(frame(b"TALB", 0, 3, b"Inner"));
        long.extend(vec![0; 500]);

        let tag = read(tag(&[frame(b"COMM", 0, 0, &long)], 0)).unwrap();

        assert_eq!(tag.get("COMM").map(str::len), Some(4096));
        assert!(tag.get("COMM").unwrap().chars().all(|c| c == 'a'));
        assert_eq!(tag.get("TALB"), Some("Inner"));
        assert!(!tag.frames_abandoned);
    }

    #[test]
    fn test_absent_tag() {
        assert_eq!(read(b"TAG not an ID3v2 tag".to_vec()), None);
        assert_eq!(read(b"ID3\x03".to_vec()), None);
    }

    #[test]
    fn test_header_flags_and_version() {
        let mut data = tag(&[frame(b"TIT2", 0, 3, b"Song")], 0);
        data[3] = 4;
        data[5] = 0b1110_0000;

        let tag = read(data).unwrap();
        assert_eq!(tag.major_version, 4);
        assert!(tag.flags.unsynchronisation);
        assert!(tag.flags.extended_header);
        assert!(tag.flags.experimental);
        assert_eq!(tag.get("TIT2"), Some("Song"));
    }
}
