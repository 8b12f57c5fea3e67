//! Slide construction from a title and typed content.
//!
//! The builder picks a layout for the content, creates the slide and fills
//! its title and secondary placeholder.

use crate::error::{Error, Result};
use crate::model::{LayoutKind, PlaceholderKind, Presentation};
use log::debug;
use serde::{Deserialize, Serialize};

/// Index of the secondary placeholder (subtitle or body) on the built-in layouts.
const SECONDARY_IDX: u32 = 1;

/// What a slide shows besides its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideContent {
    /// Title only
    TitleOnly,
    /// Title with a subtitle; `\n` in the text is kept as a soft line break
    Subtitle(String),
    /// Title with one body paragraph per bullet, in order
    Bullets(Vec<String>),
}

impl SlideContent {
    /// Build bullet content from any list of strings.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SlideContent::Bullets(items.into_iter().map(Into::into).collect())
    }

    /// Layout used for this content.
    ///
    /// Non-empty bullets get "Title and Content"; everything else, including
    /// an empty bullet list, gets "Title Slide".
    pub fn layout_kind(&self) -> LayoutKind {
        match self {
            SlideContent::Bullets(items) if !items.is_empty() => LayoutKind::TitleAndContent,
            _ => LayoutKind::TitleSlide,
        }
    }
}

/// A single slide's intended content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Slide title, used verbatim
    pub title: String,
    /// Content besides the title
    pub content: SlideContent,
}

impl SlideSpec {
    /// Create a spec from a title and content.
    pub fn new(title: impl Into<String>, content: SlideContent) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Title slide with a subtitle.
    pub fn with_subtitle(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::new(title, SlideContent::Subtitle(subtitle.into()))
    }

    /// Bullet slide.
    pub fn with_bullets<I, S>(title: impl Into<String>, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, SlideContent::bullets(bullets))
    }

    /// Append this slide to `presentation`.
    pub fn apply(&self, presentation: &mut Presentation) -> Result<()> {
        add_slide(presentation, &self.title, &self.content)
    }
}

/// Append a slide with `title` and `content` to `presentation`.
///
/// Fails with [`Error::LayoutUnavailable`] if the template lacks the chosen
/// layout and with [`Error::PlaceholderMissing`] if that layout lacks a title
/// or the secondary placeholder the content needs. Both checks run before the
/// slide is created, so on error the presentation is unchanged.
pub fn add_slide(presentation: &mut Presentation, title: &str, content: &SlideContent) -> Result<()> {
    let kind = content.layout_kind();
    check_layout(presentation, kind, content)?;

    let slide = presentation.add_slide(kind)?;
    slide.title_mut()?.text_frame.set_text(title);

    match content {
        SlideContent::Bullets(items) if !items.is_empty() => {
            let frame = &mut slide.placeholder_mut(SECONDARY_IDX)?.text_frame;
            frame.set_text(items[0].as_str());
            for item in &items[1..] {
                let para = frame.add_paragraph();
                para.set_text(item.as_str());
                para.set_level(0);
            }
        }
        SlideContent::Subtitle(text) => {
            slide
                .placeholder_mut(SECONDARY_IDX)?
                .text_frame
                .set_text(text.as_str());
        }
        _ => {}
    }

    debug!(
        "added slide {} ({}): {:?}",
        presentation.slide_count(),
        kind,
        title
    );
    Ok(())
}

fn check_layout(presentation: &Presentation, kind: LayoutKind, content: &SlideContent) -> Result<()> {
    let (_, layout) = presentation.layout(kind)?;

    if layout.title_placeholder().is_none() {
        return Err(Error::placeholder_missing(layout.name(), "title"));
    }

    let secondary = layout.placeholder(SECONDARY_IDX).map(|p| p.kind);
    match content {
        SlideContent::Bullets(items) if !items.is_empty() => {
            if !secondary.is_some_and(|k| k.accepts_body_text()) {
                return Err(Error::placeholder_missing(
                    layout.name(),
                    PlaceholderKind::Body.to_string(),
                ));
            }
        }
        SlideContent::Subtitle(_) => {
            if secondary != Some(PlaceholderKind::Subtitle) {
                return Err(Error::placeholder_missing(
                    layout.name(),
                    PlaceholderKind::Subtitle.to_string(),
                ));
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlaceholderDef, Rect, SlideLayout, Template};

    #[test]
    fn test_bullets_use_title_and_content() {
        let mut pres = Presentation::new();
        add_slide(
            &mut pres,
            "Key Modules",
            &SlideContent::bullets([
                "Admin: ...",
                "Faculty: ...",
                "Student Dashboard: ...",
            ]),
        )
        .unwrap();

        let slide = pres.slide(0).unwrap();
        assert_eq!(slide.layout, LayoutKind::TitleAndContent);
        assert_eq!(slide.title_text().as_deref(), Some("Key Modules"));
        assert_eq!(
            slide.body_paragraphs(),
            vec!["Admin: ...", "Faculty: ...", "Student Dashboard: ..."]
        );
        assert!(slide.subtitle_text().is_none());
        let body = slide.placeholder(1).unwrap();
        assert!(body.text_frame.paragraphs.iter().all(|p| p.level == 0));
    }

    #[test]
    fn test_subtitle_preserves_newline() {
        let subtitle = "Team Presentation - January 31, 2026\nModernizing academic performance tracking through automation and analytics.";
        let mut pres = Presentation::new();
        add_slide(
            &mut pres,
            "Student Assessment & Performance Tracker",
            &SlideContent::Subtitle(subtitle.to_string()),
        )
        .unwrap();

        let slide = pres.slide(0).unwrap();
        assert_eq!(slide.layout, LayoutKind::TitleSlide);
        assert_eq!(
            slide.title_text().as_deref(),
            Some("Student Assessment & Performance Tracker")
        );
        assert_eq!(slide.subtitle_text().as_deref(), Some(subtitle));
        assert!(slide.body_paragraphs().is_empty());
    }

    #[test]
    fn test_title_only_and_empty_bullets() {
        let mut pres = Presentation::new();
        add_slide(&mut pres, "", &SlideContent::TitleOnly).unwrap();
        add_slide(&mut pres, "Nothing", &SlideContent::Bullets(Vec::new())).unwrap();

        for slide in pres.slides() {
            assert_eq!(slide.layout, LayoutKind::TitleSlide);
            assert!(slide.subtitle_text().is_none());
            assert!(slide.body_paragraphs().is_empty());
        }
        assert_eq!(pres.slide(0).unwrap().title_text().as_deref(), Some(""));
    }

    #[test]
    fn test_title_is_verbatim() {
        let title = "  Results & Impact <2026>  ";
        let mut pres = Presentation::new();
        add_slide(&mut pres, title, &SlideContent::bullets(["x"])).unwrap();
        assert_eq!(pres.slide(0).unwrap().title_text().as_deref(), Some(title));
    }

    #[test]
    fn test_layout_unavailable_leaves_presentation_unchanged() {
        let template = Template::with_layouts(vec![SlideLayout::new(
            LayoutKind::TitleSlide,
            vec![PlaceholderDef::new(PlaceholderKind::CenteredTitle, 0, Rect::default())],
        )]);
        let mut pres = Presentation::with_template(template);

        let err = add_slide(&mut pres, "Bullets", &SlideContent::bullets(["a"])).unwrap_err();
        assert!(matches!(
            err,
            Error::LayoutUnavailable(LayoutKind::TitleAndContent)
        ));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_placeholder_missing_leaves_presentation_unchanged() {
        let template = Template::with_layouts(vec![SlideLayout::new(
            LayoutKind::TitleSlide,
            vec![PlaceholderDef::new(PlaceholderKind::CenteredTitle, 0, Rect::default())],
        )]);
        let mut pres = Presentation::with_template(template);

        let err = add_slide(
            &mut pres,
            "Title",
            &SlideContent::Subtitle("sub".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::PlaceholderMissing { .. }));
        assert_eq!(pres.slide_count(), 0);

        // A bare title still fits the layout.
        add_slide(&mut pres, "Title", &SlideContent::TitleOnly).unwrap();
        assert_eq!(pres.slide_count(), 1);
    }

    #[test]
    fn test_spec_apply() {
        let mut pres = Presentation::new();
        SlideSpec::with_bullets("Conclusion", ["one", "two"])
            .apply(&mut pres)
            .unwrap();
        SlideSpec::with_subtitle("Intro", "sub").apply(&mut pres).unwrap();
        assert_eq!(pres.titles(), vec!["Conclusion", "Intro"]);
    }
}
