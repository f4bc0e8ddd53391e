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
use mpegscanlib::bitstream::BitReader;
use mpegscanlib::mpeg::{sync_frame, FrameHeader, Layer, MpegVersion};
use mpegscanlib::{Decoder, MpegError};
use pretty_assertions::assert_eq;
use std::io::Cursor;

// MPEG 1 Layer III, 128 kbps, 44.1 kHz, joint stereo
const HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

fn frame() -> Vec<u8> {
    let mut data = HEADER.to_vec();
    data.resize(417, 0x55);
    data
}

fn id3v2(frames: &[(&[u8; 4], u16, u8, &str)], padding: u32) -> Vec<u8> {
    let mut body = Vec::new();
    for (id, flags, encoding, text) in frames {
        body.extend_from_slice(*id);
        body.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
        body.extend_from_slice(&flags.to_be_bytes());
        body.push(*encoding);
        body.extend_from_slice(text.as_bytes());
    }

    let size = body.len() as u32 + padding;
    let mut data = b"ID3\x03\x00\x00".to_vec();
    data.extend_from_slice(&[
        (size >> 21) as u8 & 0x7F,
        (size >> 14) as u8 & 0x7F,
        (size >> 7) as u8 & 0x7F,
        size as u8 & 0x7F,
    ]);
    data.extend(body);
    data.resize(data.len() + padding as usize, 0);
    data
}

fn id3v1(title: &[u8], genre: u8) -> Vec<u8> {
    let mut tag = vec![0; 128];
    tag[..3].copy_from_slice(b"TAG");
    tag[3..3 + title.len()].copy_from_slice(title);
    tag[127] = genre;
    tag
}

#[test]
fn test_fully_tagged_stream() {
    let mut data = id3v2(
        &[
            (b"TIT2", 0, 3, "Song"),
            (b"TPE1", 0, 0, "Artist"),
            (b"ZZZZ", 0, 3, "ignored"),
        ],
        32,
    );
    let tag_end = data.len() as u64;
    for _ in 0..3 {
        data.extend(frame());
    }
    data.extend(id3v1(b"Te\0st", 13));

    let mut decoder = Decoder::new(Cursor::new(data)).unwrap();

    let v1 = decoder.tag_v1().unwrap();
    assert_eq!(v1.title, "Test");
    assert_eq!(v1.genre(), "Pop");

    let v2 = decoder.tag_v2().unwrap();
    assert_eq!(v2.get("TIT2"), Some("Song"));
    assert_eq!(v2.get("TPE1"), Some("Artist"));
    assert_eq!(v2.get("TALB"), Some("Unknown"));
    assert_eq!(v2.populated().count(), 2);

    // The skip covers the declared tag size, counted from the stream start
    assert_eq!(decoder.reader().position(), tag_end - 10);

    let headers = decoder.frames().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(headers.len(), 3);
    for header in &headers {
        assert!(header.is_valid());
        assert_eq!(header.version(), Some(MpegVersion::V1));
        assert_eq!(header.layer(), Some(Layer::Layer3));
        assert_eq!(header.bitrate_kbps(), Some(128));
        assert_eq!(header.frame_len, 417);
    }
}

#[test]
fn test_compressed_frame_abandons_tag() {
    let mut data = id3v2(&[(b"TIT2", 0x0080, 3, "Song"), (b"TALB", 0, 3, "Album")], 0);
    data.extend(frame());

    let decoder = Decoder::new(Cursor::new(data)).unwrap();
    let v2 = decoder.tag_v2().unwrap();

    assert_eq!(v2.get("TALB"), Some("Unknown"));
    assert!(v2.frames_abandoned);
    assert!(decoder.tag_v1().is_none());
}

#[test]
fn test_zero_length_source() {
    assert!(matches!(
        Decoder::new(Cursor::new(Vec::<u8>::new())),
        Err(MpegError::EmptySource)
    ));
}

#[test]
fn test_no_sync_word() {
    let mut decoder = Decoder::new(Cursor::new(vec![0x12; 4096])).unwrap();
    assert_eq!(decoder.decode_frame().unwrap(), None);
    assert_eq!(decoder.frames().count(), 0);
}

#[test]
fn test_invalid_header_is_reported() {
    // Reserved version id
    let data = vec![0xFF, 0xEB, 0x90, 0x64];
    let mut decoder = Decoder::new(Cursor::new(data)).unwrap();

    let header = decoder.decode_frame().unwrap().unwrap();
    assert!(!header.is_valid());
    assert_eq!(header.frame_len, 0);
    assert_eq!(header.to_string(), "This frame is invalid");
}

#[test]
fn test_borrowed_source() {
    let mut source = Cursor::new(frame());
    {
        let mut decoder = Decoder::new(&mut source).unwrap();
        assert!(decoder.decode_frame().unwrap().is_some());
    }
    assert_eq!(source.get_ref().len(), 417);
}

#[test]
fn test_sync_then_header_on_reader() {
    let mut data = vec![0xFF, 0x00, 0x7F];
    data.extend_from_slice(&HEADER);

    let mut reader = BitReader::new(Cursor::new(data)).unwrap();
    assert_eq!(sync_frame(&mut reader).unwrap(), Some(5));

    let header = FrameHeader::read(&mut reader).unwrap().unwrap();
    assert_eq!(header, FrameHeader::from_u32(u32::from_be_bytes(HEADER)));
    assert_eq!(reader.cursor(), (7, 0));
}
