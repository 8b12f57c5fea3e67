//! Text frame and paragraph models.

use serde::{Deserialize, Serialize};

/// A paragraph of text inside a placeholder.
///
/// An embedded `\n` is a soft line break within the paragraph, not a
/// paragraph boundary. A vertical tab (`\u{000B}`) is also a soft break;
/// both are written as `a:br`, which always reads back as `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Outline level (0 = top level)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub level: u8,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a top-level paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 0,
        }
    }

    /// Set the paragraph text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the outline level.
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split the text into its soft-broken lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(['\n', '\u{000B}'])
    }
}

/// The text body of a placeholder: an ordered list of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFrame {
    /// Paragraphs in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all content with a single paragraph holding `text`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::with_text(text));
    }

    /// Append a new empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Paragraph texts joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the frame has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_replaces_paragraphs() {
        let mut frame = TextFrame::new();
        frame.add_paragraph().set_text("one");
        frame.add_paragraph().set_text("two");
        assert_eq!(frame.len(), 2);

        frame.set_text("only");
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.text(), "only");
    }

    #[test]
    fn test_add_paragraph_preserves_order() {
        let mut frame = TextFrame::new();
        frame.set_text("first");
        frame.add_paragraph().set_text("second");
        frame.add_paragraph().set_text("third");

        let texts: Vec<&str> = frame.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert!(frame.paragraphs.iter().all(|p| p.level == 0));
    }

    #[test]
    fn test_paragraph_lines() {
        let para = Paragraph::with_text("Team Presentation\nModernizing tracking");
        let lines: Vec<&str> = para.lines().collect();
        assert_eq!(lines, vec!["Team Presentation", "Modernizing tracking"]);
    }

    #[test]
    fn test_level_skipped_in_json() {
        let json = serde_json::to_string(&Paragraph::with_text("x")).unwrap();
        assert_eq!(json, r#"{"text":"x"}"#);
    }
}
