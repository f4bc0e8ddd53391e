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
use crate::error::Result;

use std::io::{Read, Seek};

/// Top 11 bits of a 16 bit window, all set in a frame sync word.
pub const SYNC_MASK: u16 = 0xFFE0;

/// How far past its starting point a single scan may look, in bytes.
pub const MAX_SYNC_DISTANCE: u64 = 1024 * 1024;

pub fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
    frame_sync[0] != 0 && u16::from_be_bytes(frame_sync) & SYNC_MASK == SYNC_MASK
}

/// Slide a two byte window over the stream until it holds a frame sync word.
///
/// Returns the position right after the matched bytes, where the header
/// fields start. `None` if the scan runs more than [`MAX_SYNC_DISTANCE`]
/// bytes or reaches the end of the stream first.
pub fn sync_frame<R>(reader: &mut BitReader<R>) -> Result<Option<u64>>
where
    R: Read + Seek,
{
    let (Some(mut first), Some(mut second)) = (reader.read_u8()?, reader.read_u8()?) else {
        return Ok(None);
    };

    let start = reader.position();

    while !verify_frame_sync([first, second]) {
        if reader.position() - start > MAX_SYNC_DISTANCE {
            debug!("no frame sync within {MAX_SYNC_DISTANCE} bytes of {start}");
            return Ok(None);
        }

        first = second;
        second = match reader.read_u8()? {
            Some(byte) => byte,
            None => {
                debug!("reached end of stream while looking for a frame sync");
                return Ok(None);
            }
        };
    }

    let position = reader.position();
    trace!("frame sync at {}", position - 2);

    Ok(Some(position))
}
