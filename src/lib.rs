//! # mkdeck
//!
//! Build PowerPoint presentations from titled slide specifications.
//!
//! A [`Presentation`] starts from the default Office template (eleven slide
//! layouts on a 4:3 slide). Slides are added with [`builder::add_slide`],
//! written with [`PptxWriter`] and read back with [`PptxParser`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use mkdeck::{add_slide, Presentation, SlideContent};
//!
//! let mut pres = Presentation::new();
//! add_slide(
//!     &mut pres,
//!     "Quarterly Review",
//!     &SlideContent::Subtitle("Finance team\nApril 2026".to_string()),
//! )?;
//! add_slide(
//!     &mut pres,
//!     "Highlights",
//!     &SlideContent::bullets(["Revenue up 12%", "Two new regions"]),
//! )?;
//! pres.save("review.pptx")?;
//!
//! // Read it back
//! let parsed = Presentation::open("review.pptx")?;
//! assert_eq!(parsed.titles(), vec!["Quarterly Review", "Highlights"]);
//! # Ok::<(), mkdeck::Error>(())
//! ```
//!
//! ## The Student Assessment Tracker deck
//!
//! ```no_run
//! use mkdeck::{deck, WriteOptions};
//!
//! let pres = mkdeck::generate(deck::OUTPUT_FILENAME, &WriteOptions::default())?;
//! assert_eq!(pres.slide_count(), 8);
//! # Ok::<(), mkdeck::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: [`Presentation::save_async`] with Tokio

pub mod builder;
pub mod container;
pub mod deck;
pub mod error;
pub mod model;
pub mod pptx;
pub mod render;

// Re-exports
pub use builder::{add_slide, SlideContent, SlideSpec};
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use error::{Error, Result};
pub use model::{
    LayoutKind, Metadata, Paragraph, Placeholder, PlaceholderKind, Presentation, Slide,
    SlideLayout, Template, TextFrame,
};
pub use pptx::{Compression, PptxParser, PptxWriter, WriteOptions};

use log::info;
use std::path::Path;

/// Build the Student Assessment Tracker deck and save it to `path`.
///
/// Any existing file at `path` is replaced. Returns the saved presentation.
pub fn generate(path: impl AsRef<Path>, options: &WriteOptions) -> Result<Presentation> {
    let path = path.as_ref();
    let presentation = deck::build_student_tracker()?;
    presentation.save_with(path, options)?;
    info!("generated {}", path.display());
    Ok(presentation)
}

/// Read a presentation file.
///
/// # Example
///
/// ```no_run
/// let pres = mkdeck::parse_file("slides.pptx")?;
/// println!("Slides: {}", pres.slide_count());
/// # Ok::<(), mkdeck::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Presentation> {
    PptxParser::open(path)?.parse()
}

/// Convert a presentation file to a Markdown outline.
///
/// # Example
///
/// ```no_run
/// let markdown = mkdeck::to_markdown("slides.pptx")?;
/// std::fs::write("outline.md", markdown)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_markdown(path: impl AsRef<Path>) -> Result<String> {
    let presentation = parse_file(path)?;
    render::to_markdown(&presentation, &render::RenderOptions::default())
}
