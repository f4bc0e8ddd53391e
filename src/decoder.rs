//! Pull based frame header decoding over a tagged MPEG audio stream.
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
use crate::bitstream::BitReader;
use crate::error::{MpegError, Result};
use crate::id3::v1::{read_id3v1, Id3v1Tag};
use crate::id3::v2::{read_id3v2, Id3v2Tag};
use crate::mpeg::{sync_frame, FrameHeader};

use std::io::{Read, Seek};
use std::iter::FusedIterator;

pub struct Decoder<R>
where
    R: Read + Seek,
{
    reader: BitReader<R>,
    tag_v1: Option<Id3v1Tag>,
    tag_v2: Option<Id3v2Tag>,
    current: Option<FrameHeader>,
}

impl<R> Decoder<R>
where
    R: Read + Seek,
{
    /// Read both tags and move past the ID3v2 tag, ready for the first frame.
    ///
    /// The skip uses the size the ID3v2 header declares, however many frames
    /// of the tag could actually be read.
    pub fn new(source: R) -> Result<Self> {
        let mut reader = BitReader::new(source)?;
        if reader.length() == 0 {
            return Err(MpegError::EmptySource);
        }

        let tag_v1 = read_id3v1(&mut reader)?;
        let tag_v2 = read_id3v2(&mut reader)?;

        let skip = tag_v2.as_ref().map_or(0, |tag| tag.size);
        reader.skip(i64::from(skip))?;
        debug!("audio data expected from byte {}", reader.position());

        Ok(Self {
            reader,
            tag_v1,
            tag_v2,
            current: None,
        })
    }

    /// Find the next sync word and decode the header behind it.
    ///
    /// `None` once no sync word is found within reach or the stream ends
    /// inside a header. The header may still be invalid, check
    /// [`FrameHeader::is_valid`].
    pub fn decode_frame(&mut self) -> Result<Option<FrameHeader>> {
        self.current = match sync_frame(&mut self.reader)? {
            Some(_) => FrameHeader::read(&mut self.reader)?,
            None => None,
        };

        Ok(self.current)
    }

    /// The header returned by the last [`decode_frame`](Self::decode_frame) call
    pub fn current_frame_header(&self) -> Option<&FrameHeader> {
        self.current.as_ref()
    }

    pub fn tag_v1(&self) -> Option<&Id3v1Tag> {
        self.tag_v1.as_ref()
    }

    pub fn tag_v2(&self) -> Option<&Id3v2Tag> {
        self.tag_v2.as_ref()
    }

    pub fn reader(&self) -> &BitReader<R> {
        &self.reader
    }

    /// Iterate over decoded headers until [`decode_frame`](Self::decode_frame)
    /// runs out or fails.
    ///
    /// An error is yielded once, after which the iterator is exhausted.
    pub fn frames(&mut self) -> Frames<'_, R> {
        Frames {
            decoder: self,
            done: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

pub struct Frames<'a, R>
where
    R: Read + Seek,
{
    decoder: &'a mut Decoder<R>,
    done: bool,
}

impl<R> Iterator for Frames<'_, R>
where
    R: Read + Seek,
{
    type Item = Result<FrameHeader>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.decoder.decode_frame().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }

        item
    }
}

impl<R> FusedIterator for Frames<'_, R> where R: Read + Seek {}
