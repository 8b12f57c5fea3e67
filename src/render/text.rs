//! Plain text renderer implementation.

use crate::error::Result;
use crate::model::Presentation;

use super::options::RenderOptions;
use super::outline;

/// Convert a presentation to a plain text outline.
///
/// ```text
/// Slide 1: Title
///   Subtitle line
///   • Bullet
/// ```
pub fn to_text(presentation: &Presentation, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for slide in outline(presentation) {
        if slide.number > 1 {
            output.push('\n');
        }

        output.push_str(&format!("Slide {}: {}", slide.number, slide.title));
        if options.include_layout {
            output.push_str(&format!(" [{}]", slide.slide.layout));
        }
        output.push('\n');

        for para in slide.subtitle.iter().filter(|p| !p.is_empty()) {
            for line in para.lines() {
                output.push_str(&format!("  {}\n", line));
            }
        }

        for para in slide.body.iter().filter(|p| !p.is_empty()) {
            let indent = "  ".repeat(para.level as usize + 1);
            output.push_str(&format!("{}• {}\n", indent, para.lines().collect::<Vec<_>>().join(" ")));
        }
    }

    Ok(output)
}
