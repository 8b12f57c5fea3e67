//! Output rendering for presentations.
//!
//! This module provides renderers for outlining a [`Presentation`] as
//! Markdown, plain text, or JSON.
//!
//! # Example
//!
//! ```
//! use mkdeck::render::*;
//!
//! let deck = mkdeck::deck::build_student_tracker()?;
//!
//! // Render to Markdown
//! let md = to_markdown(&deck, &RenderOptions::default())?;
//! assert!(md.starts_with("## 1. Student Assessment"));
//!
//! // Render to plain text
//! let text = to_text(&deck, &RenderOptions::default())?;
//!
//! // Render to JSON
//! let json = to_json(&deck, JsonFormat::Pretty)?;
//! # Ok::<(), mkdeck::Error>(())
//! ```

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, to_json_default, JsonFormat};
pub use markdown::to_markdown;
pub use options::RenderOptions;
pub use text::to_text;

use crate::model::{Paragraph, PlaceholderKind, Presentation, Slide};

/// Text content of one slide, as the renderers see it.
struct SlideOutline<'a> {
    number: usize,
    slide: &'a Slide,
    title: String,
    /// Subtitle paragraphs
    subtitle: Vec<&'a Paragraph>,
    /// Body paragraphs (bullets)
    body: Vec<&'a Paragraph>,
}

fn outline(presentation: &Presentation) -> impl Iterator<Item = SlideOutline<'_>> {
    presentation
        .slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let mut subtitle = Vec::new();
            let mut body = Vec::new();
            for placeholder in &slide.placeholders {
                let target = match placeholder.kind {
                    PlaceholderKind::Subtitle => &mut subtitle,
                    kind if kind.accepts_body_text() => &mut body,
                    _ => continue,
                };
                target.extend(placeholder.text_frame.paragraphs.iter());
            }

            SlideOutline {
                number: i + 1,
                slide,
                title: slide.title_text().unwrap_or_default(),
                subtitle,
                body,
            }
        })
}
