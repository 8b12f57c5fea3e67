//! In-memory presentation model.
//!
//! A [`Presentation`] owns a [`Template`] of slide layouts and an ordered list
//! of [`Slide`]s. Slides are created from a layout and carry copies of its
//! placeholders, each holding a [`TextFrame`] of paragraphs. The writer turns
//! this model into a PPTX package and the parser reads one back into it.

mod layout;
mod presentation;
mod text;

pub use layout::*;
pub use presentation::*;
pub use text::*;
