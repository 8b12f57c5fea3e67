//! PPTX (PowerPoint) presentation packages.
//!
//! [`PptxWriter`] serializes a [`Presentation`](crate::Presentation) into an
//! Office Open XML (.pptx) package; [`PptxParser`] reads one back.

mod options;
mod parser;
mod parts;
mod shapes;
mod writer;

pub use options::{Compression, ThemeOptions, WriteOptions};
pub use parser::PptxParser;
pub use writer::PptxWriter;

/// Main presentation part.
pub const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Content types of the parts in a presentation package.
pub mod content_types {
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}
