//! Presentation, slide and placeholder models.

use super::{LayoutKind, PlaceholderKind, SlideLayout, Template, TextFrame};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// First slide id PowerPoint assigns in `p:sldIdLst`.
pub const FIRST_SLIDE_ID: u32 = 256;

/// Default slide width in EMUs (10 inches, 4:3).
pub const DEFAULT_SLIDE_WIDTH: i64 = 9144000;

/// Default slide height in EMUs (7.5 inches, 4:3).
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6858000;

/// Document metadata stored in docProps/core.xml and docProps/app.xml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Document description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Keywords/tags
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<String>,

    /// Creation date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// Last modified by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,

    /// Application that created the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

/// A placeholder shape on a slide, holding text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Placeholder role
    pub kind: PlaceholderKind,
    /// Placeholder index (`p:ph/@idx`)
    pub idx: u32,
    /// Shape id, unique within the slide
    pub shape_id: u32,
    /// Shape name (e.g., "Title 1")
    pub name: String,
    /// Text content
    pub text_frame: TextFrame,
}

impl Placeholder {
    /// Create an empty placeholder.
    pub fn new(kind: PlaceholderKind, idx: u32, shape_id: u32) -> Self {
        Self {
            kind,
            idx,
            shape_id,
            name: format!("{} {}", kind.base_name(), shape_id.saturating_sub(1)),
            text_frame: TextFrame::new(),
        }
    }

    /// Text of the placeholder, paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.text_frame.text()
    }
}

/// A slide created from one of the template's layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide id (`p:sldId/@id`)
    pub id: u32,
    /// Layout the slide was created from
    pub layout: LayoutKind,
    /// Index of that layout in the template
    pub layout_index: usize,
    /// Placeholders in z-order
    pub placeholders: Vec<Placeholder>,
}

impl Slide {
    /// Create a slide with copies of the layout's slide-level placeholders.
    pub fn from_layout(id: u32, layout_index: usize, layout: &SlideLayout) -> Self {
        // Shape id 1 is the slide's group shape.
        let placeholders = layout
            .placeholders
            .iter()
            .filter(|def| def.kind.is_copied_to_slide())
            .enumerate()
            .map(|(i, def)| Placeholder::new(def.kind, def.idx, i as u32 + 2))
            .collect();

        Self {
            id,
            layout: layout.kind,
            layout_index,
            placeholders,
        }
    }

    /// The title placeholder, if any.
    pub fn title(&self) -> Option<&Placeholder> {
        self.placeholders.iter().find(|p| p.kind.is_title())
    }

    /// Mutable access to the title placeholder.
    pub fn title_mut(&mut self) -> Result<&mut Placeholder> {
        let layout = self.layout;
        self.placeholders
            .iter_mut()
            .find(|p| p.kind.is_title())
            .ok_or_else(|| Error::placeholder_missing(layout.name(), "title"))
    }

    /// Find a placeholder by its `idx`.
    pub fn placeholder(&self, idx: u32) -> Option<&Placeholder> {
        self.placeholders
            .iter()
            .find(|p| p.idx == idx && !p.kind.is_title())
    }

    /// Mutable access to a placeholder by its `idx`.
    pub fn placeholder_mut(&mut self, idx: u32) -> Result<&mut Placeholder> {
        let layout = self.layout;
        self.placeholders
            .iter_mut()
            .find(|p| p.idx == idx && !p.kind.is_title())
            .ok_or_else(|| Error::placeholder_missing(layout.name(), format!("idx {}", idx)))
    }

    /// Title text, if the slide has a title placeholder.
    pub fn title_text(&self) -> Option<String> {
        self.title().map(|p| p.text())
    }

    /// Text of the first subtitle placeholder, if it has content.
    pub fn subtitle_text(&self) -> Option<String> {
        self.placeholders
            .iter()
            .find(|p| p.kind == PlaceholderKind::Subtitle && !p.text_frame.is_empty())
            .map(|p| p.text())
    }

    /// Paragraph texts of the first body placeholder that has content.
    pub fn body_paragraphs(&self) -> Vec<&str> {
        self.placeholders
            .iter()
            .find(|p| p.kind.accepts_body_text() && !p.text_frame.is_empty())
            .map(|p| {
                p.text_frame
                    .paragraphs
                    .iter()
                    .map(|para| para.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// An in-progress presentation: metadata, a layout template and slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Document properties
    pub metadata: Metadata,

    /// Slide width in EMUs
    pub slide_width: i64,

    /// Slide height in EMUs
    pub slide_height: i64,

    #[serde(skip)]
    template: Template,

    slides: Vec<Slide>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create an empty presentation using the default Office template.
    pub fn new() -> Self {
        Self::with_template(Template::office())
    }

    /// Create an empty presentation using a custom template.
    pub fn with_template(template: Template) -> Self {
        Self {
            metadata: Metadata::default(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            template,
            slides: Vec::new(),
        }
    }

    /// The layout template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Resolve a layout by kind, returning its template index.
    pub fn layout(&self, kind: LayoutKind) -> Result<(usize, &SlideLayout)> {
        self.template
            .find(kind)
            .ok_or(Error::LayoutUnavailable(kind))
    }

    /// Append a new slide created from the layout of the given kind.
    pub fn add_slide(&mut self, kind: LayoutKind) -> Result<&mut Slide> {
        let id = self.next_slide_id();
        let (index, layout) = self.layout(kind)?;
        let slide = Slide::from_layout(id, index, layout);
        self.slides.push(slide);
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    /// Append an already-populated slide (used when reading a package).
    pub(crate) fn push_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    fn next_slide_id(&self) -> u32 {
        self.slides
            .iter()
            .map(|s| s.id + 1)
            .max()
            .unwrap_or(FIRST_SLIDE_ID)
            .max(FIRST_SLIDE_ID)
    }

    /// Slides in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get a slide by position (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check if the presentation has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Titles of all slides, in order. Slides without a title yield an empty string.
    pub fn titles(&self) -> Vec<String> {
        self.slides
            .iter()
            .map(|s| s.title_text().unwrap_or_default())
            .collect()
    }
}
