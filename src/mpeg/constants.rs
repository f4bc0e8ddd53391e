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
// Bitrates in kbps, indexed by [row][bitrate_index].
// Index 0 is "free" and index 15 is "bad", both stored as 0.
//
// Rows:
// 0: MPEG 1, Layer I
// 1: MPEG 1, Layer II
// 2: MPEG 1, Layer III
// 3: MPEG 2 & 2.5, Layer I
// 4: MPEG 2 & 2.5, Layer II & III
pub const BITRATES: [[u32; 16]; 5] = [
    [
        0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
    ],
    [
        0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
    ],
    [
        0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
    ],
    [
        0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
    ],
    [
        0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
    ],
];

// Sampling rates in Hz, indexed by [row][sampling_rate_index], index 3 is reserved.
//
// Rows: MPEG 1, MPEG 2, MPEG 2.5
pub const SAMPLE_RATES: [[u32; 4]; 3] = [
    [44100, 48000, 32000, 0],
    [22050, 24000, 16000, 0],
    [11025, 12000, 8000, 0],
];

pub const VERSION_DESCRIPTIONS: [&str; 4] = [
    "MPEG Version 2.5",
    "reserved",
    "MPEG Version 2 (ISO/IEC 13818-3)",
    "MPEG Version 1 (ISO/IEC 11172-3)",
];

pub const LAYER_DESCRIPTIONS: [&str; 4] = ["reserved", "Layer III", "Layer II", "Layer I"];

pub const PROTECTION_DESCRIPTIONS: [&str; 2] = [
    "Protected by CRC (16bit crc follows header)",
    "Not protected",
];

// A slot is 32 bits for Layer I and 8 bits for Layer II & III
pub const PADDING_DESCRIPTIONS: [&str; 2] = [
    "frame is not padded",
    "frame is padded with one extra slot",
];

pub const PRIVATE_DESCRIPTION: &str = "unspecified meaning";

pub const CHANNEL_MODE_DESCRIPTIONS: [&str; 4] = [
    "Stereo",
    "Joint stereo (Stereo)",
    "Dual channel (Stereo)",
    "Single channel (Mono)",
];

// Row 0: Layer I & II, the subbands intensity stereo applies to.
// Row 1: Layer III, which kind of joint stereo is in use.
pub const MODE_EXTENSION_DESCRIPTIONS: [[&str; 4]; 2] = [
    [
        "bands 4 to 31",
        "bands 8 to 31",
        "bands 12 to 31",
        "bands 16 to 31",
    ],
    [
        "Intensity stereo is off and MS stereo is off too",
        "Intensity stereo is on and MS stereo is off",
        "Intensity stereo is off and MS stereo is on",
        "Intensity stereo is on and MS stereo is on too",
    ],
];

pub const COPYRIGHT_DESCRIPTIONS: [&str; 2] = ["Audio is not copyrighted", "Audio is copyrighted"];

pub const ORIGINAL_DESCRIPTIONS: [&str; 2] = ["Copy of original media", "Original media"];

pub const EMPHASIS_DESCRIPTIONS: [&str; 4] = ["none", "50/15 ms", "reserved", "CCIT J.17"];
