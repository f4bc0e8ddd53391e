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
use super::flags::Id3v2TagFlags;
use super::frame_ids::FRAME_IDS;
use crate::id3::UNKNOWN;

use std::fmt;

fn frame_index(id: &str) -> Option<usize> {
    FRAME_IDS.binary_search_by(|(known, _)| known.cmp(&id)).ok()
}

/// The description of a known frame ID
pub fn description(id: &str) -> Option<&'static str> {
    frame_index(id).map(|idx| FRAME_IDS[idx].1)
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// An ID3v2 tag
///
/// Only text is kept. Every known frame ID reads as "Unknown" until a frame
/// with that ID is found in the tag.
pub struct Id3v2Tag {
    /// Major version, 3 for ID3v2.3
    pub major_version: u8,
    pub revision: u8,
    pub flags: Id3v2TagFlags,
    /// Size of the tag excluding the 10 byte header, decoded from a synchsafe integer
    pub size: u32,
    /// Set if frame parsing stopped early, on a compressed or encrypted frame or
    /// a frame running past the end of the stream
    pub frames_abandoned: bool,
    values: Vec<Option<String>>,
}

impl Default for Id3v2Tag {
    fn default() -> Self {
        Self::new(3, 0, Id3v2TagFlags::default(), 0)
    }
}

impl Id3v2Tag {
    /// A tag with no frames read yet
    pub(crate) fn new(major_version: u8, revision: u8, flags: Id3v2TagFlags, size: u32) -> Self {
        Self {
            major_version,
            revision,
            flags,
            size,
            frames_abandoned: false,
            values: vec![None; FRAME_IDS.len()],
        }
    }

    /// Get the text of a frame
    ///
    /// Returns "Unknown" for a known ID that wasn't in the tag, and `None` for
    /// an ID outside of the supported frame list.
    pub fn get(&self, id: &str) -> Option<&str> {
        let idx = frame_index(id)?;
        Some(self.values[idx].as_deref().unwrap_or(UNKNOWN))
    }

    pub fn is_populated(&self, id: &str) -> bool {
        frame_index(id).is_some_and(|idx| self.values[idx].is_some())
    }

    /// All frames found in the tag as `(id, text)`, in frame ID order
    pub fn populated(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FRAME_IDS
            .iter()
            .zip(&self.values)
            .filter_map(|((id, _), value)| value.as_deref().map(|v| (*id, v)))
    }

    /// Store the text of a frame, returning `false` if the ID isn't supported.
    ///
    /// A later frame with the same ID replaces the earlier one.
    pub(crate) fn insert(&mut self, id: &str, text: String) -> bool {
        match frame_index(id) {
            Some(idx) => {
                self.values[idx] = Some(text);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

impl fmt::Display for Id3v2Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID3v2.{}.{}, {} bytes", self.major_version, self.revision, self.size)?;

        for (id, text) in self.populated() {
            let desc = description(id).unwrap_or(UNKNOWN);
            writeln!(f, "{desc}: {}", text.trim_end_matches('\0'))?;
        }

        if self.frames_abandoned {
            writeln!(f, "(remaining frames skipped)")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{description, Id3v2Tag};
    use crate::id3::v2::flags::Id3v2TagFlags;
    use crate::id3::v2::frame_ids::FRAME_IDS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frame_ids_sorted() {
        assert!(FRAME_IDS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(FRAME_IDS.iter().all(|(id, _)| id.len() == 4));
    }

    #[test]
    fn test_defaults() {
        let tag = Id3v2Tag::default();

        assert_eq!(tag.get("TIT2"), Some("Unknown"));
        assert_eq!(tag.get("PRIV"), Some("Unknown"));
        assert_eq!(tag.get("ZZZZ"), None);
        assert!(!tag.is_populated("TIT2"));
        assert!(tag.is_empty());
        assert_eq!(tag.populated().count(), 0);
    }

    #[test]
    fn test_new_starts_empty() {
        let flags = Id3v2TagFlags {
            experimental: true,
            ..Id3v2TagFlags::default()
        };
        let tag = Id3v2Tag::new(4, 1, flags, 1024);

        assert_eq!(tag.major_version, 4);
        assert_eq!(tag.revision, 1);
        assert_eq!(tag.flags, flags);
        assert_eq!(tag.size, 1024);
        assert!(!tag.frames_abandoned);
        assert!(tag.is_empty());
        assert_eq!(tag.get("TALB"), Some("Unknown"));
    }

    #[test]
    fn test_insert() {
        let mut tag = Id3v2Tag::default();

        assert!(tag.insert("TPE1", String::from("Artist")));
        assert!(tag.insert("TALB", String::from("Album")));
        assert!(!tag.insert("ZZZZ", String::from("dropped")));

        assert_eq!(tag.get("TPE1"), Some("Artist"));
        assert!(tag.is_populated("TALB"));
        assert_eq!(
            tag.populated().collect::<Vec<_>>(),
            vec![("TALB", "Album"), ("TPE1", "Artist")]
        );
    }

    #[test]
    fn test_description() {
        assert_eq!(description("TIT2"), Some("Title/songname/content description"));
        assert_eq!(description("WXXX"), Some("User defined URL link frame"));
        assert_eq!(description("XXXX"), None);
    }

    #[test]
    fn test_display() {
        let mut tag = Id3v2Tag::default();
        tag.insert("TIT2", String::from("Song\0"));

        assert_eq!(
            tag.to_string(),
            "ID3v2.3.0, 0 bytes\nTitle/songname/content description: Song\n"
        );
    }
}
