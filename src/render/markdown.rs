//! Markdown renderer implementation.

use crate::error::Result;
use crate::model::{Paragraph, Presentation};

use super::options::RenderOptions;
use super::{outline, SlideOutline};

/// Convert a presentation to a Markdown outline.
///
/// Each slide becomes a `## n. Title` heading, followed by its subtitle as a
/// paragraph and its body paragraphs as a list nested by outline level.
pub fn to_markdown(presentation: &Presentation, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if options.include_frontmatter {
        output.push_str(&render_frontmatter(presentation));
    }

    for slide in outline(presentation) {
        if slide.number > 1 && options.slide_separators {
            output.push_str("---\n\n");
        }
        render_slide(&mut output, &slide, options);
    }

    Ok(output)
}

fn render_slide(output: &mut String, slide: &SlideOutline<'_>, options: &RenderOptions) {
    let title = inline_text(&slide.title, options);
    if title.is_empty() {
        output.push_str(&format!("## {}.\n\n", slide.number));
    } else {
        output.push_str(&format!("## {}. {}\n\n", slide.number, title));
    }

    if options.include_layout {
        output.push_str(&format!("*Layout: {}*\n\n", slide.slide.layout));
    }

    for para in slide.subtitle.iter().filter(|p| !p.is_empty()) {
        // Soft line breaks become Markdown hard breaks.
        let lines: Vec<String> = para.lines().map(|l| inline_text(l, options)).collect();
        output.push_str(&lines.join("  \n"));
        output.push_str("\n\n");
    }

    let bullets: Vec<&&Paragraph> = slide.body.iter().filter(|p| !p.is_empty()).collect();
    if !bullets.is_empty() {
        for para in bullets {
            let indent = "  ".repeat(para.level as usize);
            let lines: Vec<String> = para.lines().map(|l| inline_text(l, options)).collect();
            output.push_str(&format!(
                "{}{} {}\n",
                indent,
                options.list_marker,
                lines.join(" ")
            ));
        }
        output.push('\n');
    }
}

fn inline_text(text: &str, options: &RenderOptions) -> String {
    if options.escape_special_chars {
        escape_markdown(text)
    } else {
        text.to_string()
    }
}

/// Escape characters with inline meaning in Markdown.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '#' | '<' | '>' | '|') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Render YAML frontmatter from presentation metadata.
fn render_frontmatter(presentation: &Presentation) -> String {
    let mut fm = String::from("---\n");
    let meta = &presentation.metadata;

    if let Some(ref title) = meta.title {
        fm.push_str(&format!("title: \"{}\"\n", escape_yaml(title)));
    }
    if let Some(ref author) = meta.author {
        fm.push_str(&format!("author: \"{}\"\n", escape_yaml(author)));
    }
    if let Some(ref subject) = meta.subject {
        fm.push_str(&format!("subject: \"{}\"\n", escape_yaml(subject)));
    }
    if let Some(ref created) = meta.created {
        fm.push_str(&format!("created: \"{}\"\n", created));
    }
    if let Some(ref modified) = meta.modified {
        fm.push_str(&format!("modified: \"{}\"\n", modified));
    }
    fm.push_str(&format!("slides: {}\n", presentation.slide_count()));

    fm.push_str("---\n\n");
    fm
}

fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
