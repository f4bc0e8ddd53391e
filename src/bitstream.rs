//! Byte and bit level access to a seekable source.
//!
//! [`BitReader`] keeps a cursor made of a byte position and a bit offset.
//! When the bit offset is non-zero, the byte right before the position has
//! been partially consumed (MSB first) and the next bit read starts inside it.
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
use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};
use std::ops::{Deref, DerefMut};

/// Largest number of bytes a single [`BitReader::read_bytes`] call returns.
pub const MAX_READ_BYTES: usize = 4 * 1024;
/// Largest number of bits a single [`BitReader::read_bits`] call returns.
pub const MAX_READ_BITS: usize = 8 * MAX_READ_BYTES;

/// Byte position plus bit offset inside the previous byte.
pub type BitPosition = (u64, u8);

pub struct BitReader<R> {
    inner: R,
    len: u64,
    pos: u64,
    bit_offset: u8,
    // Single slot, a second backup() overwrites the first.
    saved: BitPosition,
}

impl<R> BitReader<R>
where
    R: Read + Seek,
{
    /// Wrap a source, rewinding it to the start.
    ///
    /// Pass `&mut source` to keep ownership on the caller side.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;

        Ok(Self {
            inner,
            len,
            pos: 0,
            bit_offset: 0,
            saved: (0, 0),
        })
    }

    /// Total length of the source in bytes.
    pub fn length(&self) -> u64 {
        self.len
    }

    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    pub fn cursor(&self) -> BitPosition {
        (self.pos, self.bit_offset)
    }

    pub fn set_cursor(&mut self, (pos, bit_offset): BitPosition) -> Result<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        self.bit_offset = bit_offset % 8;
        Ok(())
    }

    /// Move to a byte boundary.
    ///
    /// A negative `pos` counts back from the end of the source, so `seek(-128)`
    /// lands on a 128 byte trailer. Targets before the start clamp to 0.
    pub fn seek(&mut self, pos: i64) -> Result<()> {
        let target = if pos >= 0 {
            pos.unsigned_abs()
        } else {
            self.len.saturating_sub(pos.unsigned_abs())
        };

        self.set_cursor((target, 0))
    }

    pub fn skip(&mut self, num: i64) -> Result<()> {
        let target = self.pos.saturating_add_signed(num);
        self.set_cursor((target, 0))
    }

    /// Read up to `num` bytes, at most [`MAX_READ_BYTES`].
    ///
    /// The read is byte aligned: any partially consumed byte is abandoned.
    /// Near the end of the source fewer bytes than requested are returned.
    pub fn read_bytes(&mut self, num: usize) -> Result<Vec<u8>> {
        let count = num.min(MAX_READ_BYTES);
        self.bit_offset = 0;

        let mut buf = Vec::with_capacity(count);
        self.inner.by_ref().take(count as u64).read_to_end(&mut buf)?;
        self.pos += buf.len() as u64;

        Ok(buf)
    }

    /// Single byte, `None` at the end of the source.
    pub fn read_u8(&mut self) -> Result<Option<u8>> {
        Ok(self.read_bytes(1)?.first().copied())
    }

    /// Read up to `num` bits (at most [`MAX_READ_BITS`]), one `0`/`1` byte per bit.
    ///
    /// Bits are taken MSB first. The partially consumed byte, if any, is read
    /// again so the sequence continues exactly where the last call stopped.
    pub fn read_bits(&mut self, num: usize) -> Result<Vec<u8>> {
        let count = num.min(MAX_READ_BITS);
        let offset = usize::from(self.bit_offset);
        let start = if offset != 0 && self.pos > 0 {
            self.pos - 1
        } else {
            self.pos
        };

        let byte_count = (offset + count + 7) / 8;
        if byte_count == 0 {
            return Ok(Vec::new());
        }

        if start != self.pos {
            self.inner.seek(SeekFrom::Start(start))?;
        }

        let mut raw = Vec::with_capacity(byte_count);
        self.inner
            .by_ref()
            .take(byte_count as u64)
            .read_to_end(&mut raw)?;

        if raw.is_empty() {
            self.inner.seek(SeekFrom::Start(self.pos))?;
            return Ok(Vec::new());
        }

        let count = count.min((raw.len() * 8).saturating_sub(offset));
        let bits = (offset..offset + count)
            .map(|bit| (raw[bit / 8] >> (7 - bit % 8)) & 1)
            .collect();

        self.pos = start + raw.len() as u64;
        self.bit_offset = ((offset + count) % 8) as u8;

        Ok(bits)
    }

    /// Read `num` bits (at most 32) as an unsigned big endian integer.
    ///
    /// `None` if the source ends before all bits could be read.
    pub fn read_bits_u32(&mut self, num: usize) -> Result<Option<u32>> {
        let bits = self.read_bits(num.min(32))?;

        if bits.len() < num.min(32) {
            return Ok(None);
        }

        Ok(Some(bits_to_u32(&bits)))
    }

    /// Remember the current cursor in the single backup slot.
    ///
    /// Calling this again before [`restore`](Self::restore) silently replaces
    /// the saved cursor, excursions can't be nested.
    pub fn backup(&mut self) {
        self.saved = self.cursor();
    }

    pub fn restore(&mut self) -> Result<()> {
        self.set_cursor(self.saved)
    }

    /// Start an excursion, the cursor is restored when the guard drops.
    pub fn excursion(&mut self) -> RestoreGuard<'_, R> {
        self.backup();
        RestoreGuard { reader: self }
    }

    /// Run `op` and put the cursor back where it was, whatever `op` returned.
    pub fn sandbox<T, F>(&mut self, op: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        let mut guard = self.excursion();
        op(&mut guard)
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Restores the [`BitReader`] cursor saved by [`BitReader::excursion`] on drop.
pub struct RestoreGuard<'a, R>
where
    R: Read + Seek,
{
    reader: &'a mut BitReader<R>,
}

impl<R> Deref for RestoreGuard<'_, R>
where
    R: Read + Seek,
{
    type Target = BitReader<R>;

    fn deref(&self) -> &Self::Target {
        &*self.reader
    }
}

impl<R> DerefMut for RestoreGuard<'_, R>
where
    R: Read + Seek,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.reader
    }
}

impl<R> Drop for RestoreGuard<'_, R>
where
    R: Read + Seek,
{
    fn drop(&mut self) {
        if let Err(e) = self.reader.restore() {
            warn!("failed to restore stream position: {e}");
        }
    }
}

/// Fold `0`/`1` bytes into an unsigned big endian integer.
pub fn bits_to_u32(bits: &[u8]) -> u32 {
    bits.iter().fold(0, |acc, bit| (acc << 1) | u32::from(bit & 1))
}

#[cfg(test)]
mod tests {
    use super::{bits_to_u32, BitReader, MAX_READ_BITS, MAX_READ_BYTES};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = seed;
        (0..len)
            .map(|_| {
                rng = rng
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                (rng >> 56) as u8
            })
            .collect()
    }

    fn reader(data: Vec<u8>) -> BitReader<Cursor<Vec<u8>>> {
        BitReader::new(Cursor::new(data)).unwrap()
    }

    #[test]
    fn test_read_bits_msb_first() {
        let mut r = reader(vec![0b1010_0000, 0b1111_0000, 0x00]);

        assert_eq!(r.read_bits(3).unwrap(), vec![1, 0, 1]);
        assert_eq!(r.cursor(), (1, 3));

        assert_eq!(r.read_bits(7).unwrap(), vec![0, 0, 0, 0, 0, 1, 1]);
        assert_eq!(r.cursor(), (2, 2));

        assert_eq!(r.read_bits_u32(6).unwrap(), Some(0b11_0000));
        assert_eq!(r.cursor(), (2, 0));
    }

    #[test]
    fn test_read_bits_reproducible_after_seek() {
        let data = pseudo_random_bytes(MAX_READ_BYTES + 64, 0xDEAD_BEEF);
        let mut r = reader(data);

        let lengths = (0..=MAX_READ_BITS)
            .step_by(97)
            .chain([1, 7, 8, 9, 15, 16, 17, MAX_READ_BITS - 1, MAX_READ_BITS]);

        for n in lengths {
            r.seek(5).unwrap();
            let first = r.read_bits(n).unwrap();
            r.seek(5).unwrap();
            let second = r.read_bits(n).unwrap();

            assert_eq!(first.len(), n);
            assert_eq!(first, second, "n = {n}");
        }
    }

    #[test]
    fn test_read_bits_reproducible_from_unaligned_cursor() {
        let data = pseudo_random_bytes(MAX_READ_BYTES + 64, 42);
        let mut r = reader(data);
        r.read_bits(13).unwrap();
        let start = r.cursor();

        for n in [0, 1, 3, 8, 21, 64, 1000, MAX_READ_BITS - 13] {
            r.set_cursor(start).unwrap();
            let first = r.read_bits(n).unwrap();
            r.set_cursor(start).unwrap();
            let second = r.read_bits(n).unwrap();

            assert_eq!(first, second, "n = {n}");
        }
    }

    #[test]
    fn test_read_bits_is_clamped() {
        let mut r = reader(vec![0xAA; MAX_READ_BYTES * 2]);
        assert_eq!(r.read_bits(MAX_READ_BITS + 100).unwrap().len(), MAX_READ_BITS);
        assert_eq!(r.position(), MAX_READ_BYTES as u64);
    }

    #[test]
    fn test_read_bytes_is_clamped_and_resets_bits() {
        let mut r = reader(vec![0x11; MAX_READ_BYTES + 10]);
        r.read_bits(4).unwrap();

        assert_eq!(r.read_bytes(MAX_READ_BYTES + 10).unwrap().len(), MAX_READ_BYTES);
        assert_eq!(r.bit_offset(), 0);
        assert_eq!(r.position(), MAX_READ_BYTES as u64 + 1);
    }

    #[test]
    fn test_short_reads_at_end() {
        let mut r = reader(vec![1, 2, 3]);
        r.seek(1).unwrap();
        assert_eq!(r.read_bytes(10).unwrap(), vec![2, 3]);
        assert_eq!(r.read_bytes(1).unwrap(), Vec::<u8>::new());
        assert_eq!(r.read_u8().unwrap(), None);

        r.seek(2).unwrap();
        assert_eq!(r.read_bits(20).unwrap(), vec![0, 0, 0, 0, 0, 0, 1, 1]);
        assert_eq!(r.read_bits_u32(1).unwrap(), None);
    }

    #[test]
    fn test_negative_seek_counts_from_end() {
        let mut r = reader((0..=255).collect());
        r.seek(-128).unwrap();
        assert_eq!(r.position(), 128);
        assert_eq!(r.read_u8().unwrap(), Some(128));

        r.seek(-1000).unwrap();
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_skip() {
        let mut r = reader(vec![0; 32]);
        r.skip(10).unwrap();
        assert_eq!(r.position(), 10);
        r.skip(-4).unwrap();
        assert_eq!(r.position(), 6);
        r.skip(-100).unwrap();
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_backup_restore() {
        let data = pseudo_random_bytes(256, 7);
        let mut r = reader(data);
        r.skip(3).unwrap();
        r.read_bits(5).unwrap();

        let before = r.cursor();
        let expected = {
            r.backup();
            let bits = r.read_bits(40).unwrap();
            r.restore().unwrap();
            bits
        };
        assert_eq!(r.cursor(), before);

        r.backup();
        r.read_bytes(100).unwrap();
        r.read_bits(3).unwrap();
        r.seek(-2).unwrap();
        r.restore().unwrap();

        assert_eq!(r.cursor(), before);
        assert_eq!(r.read_bits(40).unwrap(), expected);
    }

    #[test]
    fn test_nested_backup_overwrites_slot() {
        let mut r = reader(vec![0; 64]);
        r.backup();
        r.skip(8).unwrap();
        r.backup();
        r.skip(8).unwrap();
        r.restore().unwrap();

        assert_eq!(r.position(), 8);
    }

    #[test]
    fn test_sandbox_restores_on_early_return() {
        let mut r = reader(vec![0xFF; 16]);
        r.skip(2).unwrap();

        let result: Result<(), &str> = r.sandbox(|r| {
            r.read_bytes(8).unwrap();
            Err("gave up")
        });

        assert!(result.is_err());
        assert_eq!(r.cursor(), (2, 0));

        {
            let mut guard = r.excursion();
            guard.read_bits(3).unwrap();
        }
        assert_eq!(r.cursor(), (2, 0));
    }

    #[test]
    fn test_bits_to_u32() {
        assert_eq!(bits_to_u32(&[]), 0);
        assert_eq!(bits_to_u32(&[1, 0, 1, 1]), 0b1011);
        assert_eq!(bits_to_u32(&[1; 32]), u32::MAX);
    }
}
