use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};

/// How the book file is cut into displayable segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    /// One segment per non-empty, trimmed line of the file.
    Lines,
    /// Newlines removed, then fixed-width runs of characters.
    Fixed,
}

impl Default for SegmentMode {
    fn default() -> Self {
        SegmentMode::Fixed
    }
}

/// The full book, split into reading order segments. Immutable after load.
#[derive(Debug, Clone)]
pub struct Document {
    segments: Vec<String>,
}

impl Document {
    /// Read `path` and segment it. Fails when the file is unreadable or when
    /// segmentation leaves nothing to display.
    pub fn load(path: &str, mode: SegmentMode, width: usize) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read book file '{path}'"))?;
        let doc = Self::from_text(&content, mode, width)?;
        if doc.is_empty() {
            bail!("book file '{path}' contains no displayable text");
        }
        Ok(doc)
    }

    /// Segment raw text. Empty input yields an empty document; callers that
    /// need something to display must check for that.
    pub fn from_text(text: &str, mode: SegmentMode, width: usize) -> anyhow::Result<Self> {
        let segments = match mode {
            SegmentMode::Lines => split_lines(text),
            SegmentMode::Fixed => {
                ensure!(width >= 1, "segment width must be at least 1");
                split_fixed(text, width)
            }
        };
        Ok(Self { segments })
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Concatenate the text into one stream (newlines dropped) and cut it into
/// runs of `width` characters. Counts Unicode scalar values, not bytes, so
/// multi-byte text never splits mid-character.
fn split_fixed(text: &str, width: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            continue;
        }
        current.push(ch);
        count += 1;
        if count == width {
            segments.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::{Document, SegmentMode};

    #[test]
    fn fixed_width_chunks_evenly_with_short_tail() {
        let doc = Document::from_text("abcdefgh", SegmentMode::Fixed, 3).unwrap();
        assert_eq!(doc.segments(), ["abc", "def", "gh"]);
    }

    #[test]
    fn fixed_width_exact_multiple_has_full_last_chunk() {
        let doc = Document::from_text("abcdef", SegmentMode::Fixed, 3).unwrap();
        assert_eq!(doc.segments(), ["abc", "def"]);
    }

    #[test]
    fn fixed_width_counts_characters_not_bytes() {
        let doc = Document::from_text("你好世界再见", SegmentMode::Fixed, 2).unwrap();
        assert_eq!(doc.segments(), ["你好", "世界", "再见"]);
    }

    #[test]
    fn fixed_width_drops_newlines_before_chunking() {
        let doc = Document::from_text("ab\ncd\r\nef", SegmentMode::Fixed, 4).unwrap();
        assert_eq!(doc.segments(), ["abcd", "ef"]);
    }

    #[test]
    fn fixed_width_empty_input_is_empty_document() {
        let doc = Document::from_text("", SegmentMode::Fixed, 30).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn fixed_width_rejects_zero_width() {
        assert!(Document::from_text("abc", SegmentMode::Fixed, 0).is_err());
    }

    #[test]
    fn line_mode_trims_and_drops_blank_lines() {
        let doc =
            Document::from_text("  first \n\n   \nsecond\n\tthird\t\n", SegmentMode::Lines, 30)
                .unwrap();
        assert_eq!(doc.segments(), ["first", "second", "third"]);
    }

    #[test]
    fn line_mode_segments_match_their_trimmed_form() {
        let doc = Document::from_text(" a \n b\nc ", SegmentMode::Lines, 30).unwrap();
        for seg in doc.segments() {
            assert!(!seg.is_empty());
            assert_eq!(seg, seg.trim());
        }
    }

    #[test]
    fn fixed_width_segment_count_is_ceil_of_length() {
        let text = "x".repeat(100);
        for width in 1..=12 {
            let doc = Document::from_text(&text, SegmentMode::Fixed, width).unwrap();
            assert_eq!(doc.len(), (100 + width - 1) / width, "width {width}");
            for seg in &doc.segments()[..doc.len() - 1] {
                assert_eq!(seg.chars().count(), width);
            }
        }
    }
}
