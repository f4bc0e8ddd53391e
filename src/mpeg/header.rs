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
use super::constants::{
    BITRATES, CHANNEL_MODE_DESCRIPTIONS, COPYRIGHT_DESCRIPTIONS, EMPHASIS_DESCRIPTIONS,
    LAYER_DESCRIPTIONS, MODE_EXTENSION_DESCRIPTIONS, ORIGINAL_DESCRIPTIONS, PADDING_DESCRIPTIONS,
    PRIVATE_DESCRIPTION, PROTECTION_DESCRIPTIONS, SAMPLE_RATES, VERSION_DESCRIPTIONS,
};
use crate::bitstream::BitReader;
use crate::error::Result;

use std::fmt;
use std::io::{Read, Seek};

/// Bits of the sync word that spill into the second sync byte.
pub const SYNC_TAIL_BITS: u8 = 3;

/// Widths of the header fields following the sync word, in read order.
const FIELD_WIDTHS: [usize; 12] = [2, 2, 1, 4, 2, 1, 1, 2, 2, 1, 1, 2];

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
/// MPEG Audio version
pub enum MpegVersion {
    V1,
    V2,
    V2_5,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
/// MPEG layer
pub enum Layer {
    Layer1 = 1,
    Layer2 = 2,
    Layer3 = 3,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
/// Channel mode
pub enum ChannelMode {
    Stereo = 0,
    JointStereo = 1,
    DualChannel = 2,
    SingleChannel = 3,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
/// De-emphasis to apply on playback
pub enum Emphasis {
    None,
    Ms5015,
    Reserved,
    CcitJ17,
}

/// The 21 bit fields following an MPEG audio sync word.
///
/// Every field holds the raw value found in the stream. Use the accessors to
/// resolve them through the bitrate and sampling rate tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameHeader {
    pub version_id: u8,
    pub layer_id: u8,
    pub protection_bit: u8,
    pub bitrate_index: u8,
    pub sampling_rate_index: u8,
    pub padding_bit: u8,
    pub private_bit: u8,
    pub channel_mode_id: u8,
    pub mode_extension: u8,
    pub copyright_bit: u8,
    pub original_bit: u8,
    pub emphasis_id: u8,
    /// Length of the whole frame in bytes, header included
    pub frame_len: u32,
}

impl FrameHeader {
    /// Decode the header fields of the frame whose sync word was just matched.
    ///
    /// The reader must sit right after the two sync bytes, as left by
    /// [`sync_frame`](super::sync_frame). Returns `None` if the stream ends
    /// inside the header.
    pub fn read<R>(reader: &mut BitReader<R>) -> Result<Option<Self>>
    where
        R: Read + Seek,
    {
        reader.set_cursor((reader.position(), SYNC_TAIL_BITS))?;

        let mut fields = [0; 12];
        for (field, width) in fields.iter_mut().zip(FIELD_WIDTHS) {
            match reader.read_bits_u32(width)? {
                Some(value) => *field = value as u8,
                None => return Ok(None),
            }
        }

        let header = Self::from_fields(fields);
        trace!(
            "frame header: version {} layer {} bitrate {} rate {} len {}",
            header.version_id,
            header.layer_id,
            header.bitrate_index,
            header.sampling_rate_index,
            header.frame_len
        );

        Ok(Some(header))
    }

    /// Decode a complete 32 bit frame preamble, sync word included.
    pub fn from_u32(header: u32) -> Self {
        let field = |shift: u32, mask: u32| ((header >> shift) & mask) as u8;

        Self::from_fields([
            field(19, 0b11),
            field(17, 0b11),
            field(16, 0b1),
            field(12, 0b1111),
            field(10, 0b11),
            field(9, 0b1),
            field(8, 0b1),
            field(6, 0b11),
            field(4, 0b11),
            field(3, 0b1),
            field(2, 0b1),
            field(0, 0b11),
        ])
    }

    fn from_fields(fields: [u8; 12]) -> Self {
        let [
            version_id,
            layer_id,
            protection_bit,
            bitrate_index,
            sampling_rate_index,
            padding_bit,
            private_bit,
            channel_mode_id,
            mode_extension,
            copyright_bit,
            original_bit,
            emphasis_id,
        ] = fields;

        let mut header = Self {
            version_id,
            layer_id,
            protection_bit,
            bitrate_index,
            sampling_rate_index,
            padding_bit,
            private_bit,
            channel_mode_id,
            mode_extension,
            copyright_bit,
            original_bit,
            emphasis_id,
            frame_len: 0,
        };
        header.frame_len = header.derive_frame_len();

        header
    }

    /// A header is usable unless it hits a reserved or forbidden value.
    pub fn is_valid(&self) -> bool {
        !(self.version_id == 1
            || self.layer_id == 0
            || self.bitrate_index == 0
            || self.bitrate_index == 0xF
            || self.sampling_rate_index == 3)
    }

    pub fn version(&self) -> Option<MpegVersion> {
        match self.version_id {
            0 => Some(MpegVersion::V2_5),
            2 => Some(MpegVersion::V2),
            3 => Some(MpegVersion::V1),
            _ => None,
        }
    }

    pub fn layer(&self) -> Option<Layer> {
        match self.layer_id {
            1 => Some(Layer::Layer3),
            2 => Some(Layer::Layer2),
            3 => Some(Layer::Layer1),
            _ => None,
        }
    }

    pub fn channel_mode(&self) -> ChannelMode {
        match self.channel_mode_id & 0b11 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::SingleChannel,
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self.emphasis_id & 0b11 {
            0 => Emphasis::None,
            1 => Emphasis::Ms5015,
            2 => Emphasis::Reserved,
            _ => Emphasis::CcitJ17,
        }
    }

    pub fn channels(&self) -> u8 {
        if self.channel_mode() == ChannelMode::SingleChannel {
            1
        } else {
            2
        }
    }

    fn bitrate_row(&self) -> Option<usize> {
        let row = match (self.version()?, self.layer()?) {
            (MpegVersion::V1, Layer::Layer1) => 0,
            (MpegVersion::V1, Layer::Layer2) => 1,
            (MpegVersion::V1, Layer::Layer3) => 2,
            (MpegVersion::V2 | MpegVersion::V2_5, Layer::Layer1) => 3,
            (MpegVersion::V2 | MpegVersion::V2_5, Layer::Layer2 | Layer::Layer3) => 4,
        };

        Some(row)
    }

    /// Bitrate in kbps, `None` for "free", "bad" or a reserved version/layer.
    pub fn bitrate_kbps(&self) -> Option<u32> {
        let row = self.bitrate_row()?;
        BITRATES[row]
            .get(usize::from(self.bitrate_index))
            .copied()
            .filter(|kbps| *kbps != 0)
    }

    /// Sampling rate in Hz, `None` for a reserved index or version.
    pub fn sampling_rate_hz(&self) -> Option<u32> {
        let row = match self.version()? {
            MpegVersion::V1 => 0,
            MpegVersion::V2 => 1,
            MpegVersion::V2_5 => 2,
        };

        SAMPLE_RATES[row]
            .get(usize::from(self.sampling_rate_index))
            .copied()
            .filter(|hz| *hz != 0)
    }

    /// Bitrate as text: "free", "bad", "N kbps", or "Unknown" when the version
    /// or layer is reserved.
    ///
    /// The raw index is described even on a header that fails validation.
    pub fn bitrate_description(&self) -> String {
        match (self.bitrate_index, self.bitrate_kbps()) {
            (0, _) => String::from("free"),
            (15, _) => String::from("bad"),
            (_, Some(kbps)) => format!("{kbps} kbps"),
            (_, None) => String::from("Unknown"),
        }
    }

    /// Sampling rate as text: "reserv.", "N Hz", or "Unknown" for a reserved version.
    pub fn sampling_rate_description(&self) -> String {
        match (self.sampling_rate_index, self.sampling_rate_hz()) {
            (3, _) => String::from("reserv."),
            (_, Some(hz)) => format!("{hz} Hz"),
            (_, None) => String::from("Unknown"),
        }
    }

    fn derive_frame_len(&self) -> u32 {
        let bitrate = self.bitrate_kbps().unwrap_or(0) * 1000;
        let Some(sample_rate) = self.sampling_rate_hz() else {
            return 0;
        };
        let padding = u32::from(self.padding_bit);

        match self.layer() {
            Some(Layer::Layer1 | Layer::Layer2) => (12 * bitrate / sample_rate + padding) * 4,
            Some(Layer::Layer3) => 144 * bitrate / sample_rate + padding,
            None => 0,
        }
    }
}

fn describe<const N: usize>(table: &[&'static str; N], index: u8) -> &'static str {
    table.get(usize::from(index)).copied().unwrap_or("Unknown")
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "This frame is invalid");
        }

        let mode_extension = match self.layer() {
            Some(Layer::Layer1 | Layer::Layer2) => {
                describe(&MODE_EXTENSION_DESCRIPTIONS[0], self.mode_extension)
            }
            Some(Layer::Layer3) => describe(&MODE_EXTENSION_DESCRIPTIONS[1], self.mode_extension),
            None => "Unknown",
        };

        writeln!(f, "MPEG Audio version ID: {}", describe(&VERSION_DESCRIPTIONS, self.version_id))?;
        writeln!(f, "Layer description: {}", describe(&LAYER_DESCRIPTIONS, self.layer_id))?;
        writeln!(f, "Protection bit: {}", describe(&PROTECTION_DESCRIPTIONS, self.protection_bit))?;
        writeln!(f, "Bitrate: {}", self.bitrate_description())?;
        writeln!(f, "Sampling rate: {}", self.sampling_rate_description())?;
        writeln!(f, "Padding bit: {}", describe(&PADDING_DESCRIPTIONS, self.padding_bit))?;
        writeln!(f, "Private bit: {PRIVATE_DESCRIPTION}")?;
        writeln!(f, "Channel Mode: {}", describe(&CHANNEL_MODE_DESCRIPTIONS, self.channel_mode_id))?;
        writeln!(f, "Mode extension: {mode_extension}")?;
        writeln!(f, "Copyright: {}", describe(&COPYRIGHT_DESCRIPTIONS, self.copyright_bit))?;
        writeln!(f, "Original: {}", describe(&ORIGINAL_DESCRIPTIONS, self.original_bit))?;
        writeln!(f, "Emphasis: {}", describe(&EMPHASIS_DESCRIPTIONS, self.emphasis_id))?;
        write!(f, "Frame length: {} bytes", self.frame_len)
    }
}
