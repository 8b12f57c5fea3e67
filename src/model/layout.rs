//! Slide layouts, placeholder definitions and the default template.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layouts of the default Office template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    TitleSlide,
    TitleAndContent,
    SectionHeader,
    TwoContent,
    Comparison,
    TitleOnly,
    Blank,
    ContentWithCaption,
    PictureWithCaption,
    TitleAndVerticalText,
    VerticalTitleAndText,
}

impl LayoutKind {
    /// All layout kinds in template order.
    pub const ALL: [LayoutKind; 11] = [
        LayoutKind::TitleSlide,
        LayoutKind::TitleAndContent,
        LayoutKind::SectionHeader,
        LayoutKind::TwoContent,
        LayoutKind::Comparison,
        LayoutKind::TitleOnly,
        LayoutKind::Blank,
        LayoutKind::ContentWithCaption,
        LayoutKind::PictureWithCaption,
        LayoutKind::TitleAndVerticalText,
        LayoutKind::VerticalTitleAndText,
    ];

    /// Display name, as stored in the layout's `p:cSld/@name`.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutKind::TitleSlide => "Title Slide",
            LayoutKind::TitleAndContent => "Title and Content",
            LayoutKind::SectionHeader => "Section Header",
            LayoutKind::TwoContent => "Two Content",
            LayoutKind::Comparison => "Comparison",
            LayoutKind::TitleOnly => "Title Only",
            LayoutKind::Blank => "Blank",
            LayoutKind::ContentWithCaption => "Content with Caption",
            LayoutKind::PictureWithCaption => "Picture with Caption",
            LayoutKind::TitleAndVerticalText => "Title and Vertical Text",
            LayoutKind::VerticalTitleAndText => "Vertical Title and Text",
        }
    }

    /// Value of the `p:sldLayout/@type` attribute.
    pub fn ooxml_type(&self) -> &'static str {
        match self {
            LayoutKind::TitleSlide => "title",
            LayoutKind::TitleAndContent => "obj",
            LayoutKind::SectionHeader => "secHead",
            LayoutKind::TwoContent => "twoObj",
            LayoutKind::Comparison => "twoTxTwoObj",
            LayoutKind::TitleOnly => "titleOnly",
            LayoutKind::Blank => "blank",
            LayoutKind::ContentWithCaption => "objTx",
            LayoutKind::PictureWithCaption => "picTx",
            LayoutKind::TitleAndVerticalText => "vertTx",
            LayoutKind::VerticalTitleAndText => "vertTitleAndTx",
        }
    }

    /// Look up a layout kind by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Look up a layout kind by its `p:sldLayout/@type` value.
    pub fn from_ooxml_type(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.ooxml_type() == value)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Role of a placeholder within a layout or slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    Title,
    CenteredTitle,
    Subtitle,
    Body,
    /// Generic content placeholder (text, table, chart, picture)
    Object,
    Picture,
    Date,
    Footer,
    SlideNumber,
}

impl PlaceholderKind {
    /// Value of the `p:ph/@type` attribute. `None` for the implicit `obj` type.
    pub fn ph_type(&self) -> Option<&'static str> {
        match self {
            PlaceholderKind::Title => Some("title"),
            PlaceholderKind::CenteredTitle => Some("ctrTitle"),
            PlaceholderKind::Subtitle => Some("subTitle"),
            PlaceholderKind::Body => Some("body"),
            PlaceholderKind::Object => None,
            PlaceholderKind::Picture => Some("pic"),
            PlaceholderKind::Date => Some("dt"),
            PlaceholderKind::Footer => Some("ftr"),
            PlaceholderKind::SlideNumber => Some("sldNum"),
        }
    }

    /// Parse a `p:ph/@type` value; a missing attribute means `obj`.
    pub fn from_ph_type(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("obj") => Some(PlaceholderKind::Object),
            Some("title") => Some(PlaceholderKind::Title),
            Some("ctrTitle") => Some(PlaceholderKind::CenteredTitle),
            Some("subTitle") => Some(PlaceholderKind::Subtitle),
            Some("body") => Some(PlaceholderKind::Body),
            Some("pic") => Some(PlaceholderKind::Picture),
            Some("dt") => Some(PlaceholderKind::Date),
            Some("ftr") => Some(PlaceholderKind::Footer),
            Some("sldNum") => Some(PlaceholderKind::SlideNumber),
            Some(_) => None,
        }
    }

    /// Base of the shape name PowerPoint gives this placeholder.
    pub fn base_name(&self) -> &'static str {
        match self {
            PlaceholderKind::Title | PlaceholderKind::CenteredTitle => "Title",
            PlaceholderKind::Subtitle => "Subtitle",
            PlaceholderKind::Body => "Text Placeholder",
            PlaceholderKind::Object => "Content Placeholder",
            PlaceholderKind::Picture => "Picture Placeholder",
            PlaceholderKind::Date => "Date Placeholder",
            PlaceholderKind::Footer => "Footer Placeholder",
            PlaceholderKind::SlideNumber => "Slide Number Placeholder",
        }
    }

    /// Check if this placeholder holds a slide title.
    pub fn is_title(&self) -> bool {
        matches!(self, PlaceholderKind::Title | PlaceholderKind::CenteredTitle)
    }

    /// Check if this placeholder accepts bulleted body text.
    pub fn accepts_body_text(&self) -> bool {
        matches!(self, PlaceholderKind::Body | PlaceholderKind::Object)
    }

    /// Check if slides created from a layout receive a copy of this placeholder.
    ///
    /// Date, footer and slide-number placeholders stay on the layout.
    pub fn is_copied_to_slide(&self) -> bool {
        !matches!(
            self,
            PlaceholderKind::Date | PlaceholderKind::Footer | PlaceholderKind::SlideNumber
        )
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaceholderKind::Title => "title",
            PlaceholderKind::CenteredTitle => "centered title",
            PlaceholderKind::Subtitle => "subtitle",
            PlaceholderKind::Body => "body",
            PlaceholderKind::Object => "content",
            PlaceholderKind::Picture => "picture",
            PlaceholderKind::Date => "date",
            PlaceholderKind::Footer => "footer",
            PlaceholderKind::SlideNumber => "slide number",
        };
        f.write_str(name)
    }
}

/// Position and size in EMUs (914400 per inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }
}

/// A placeholder as defined by a layout or the slide master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderDef {
    /// Placeholder role
    pub kind: PlaceholderKind,
    /// Placeholder index (`p:ph/@idx`); 0 for titles
    pub idx: u32,
    /// Frame geometry
    pub frame: Rect,
    /// Vertical text orientation
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub vertical: bool,
}

impl PlaceholderDef {
    pub const fn new(kind: PlaceholderKind, idx: u32, frame: Rect) -> Self {
        Self {
            kind,
            idx,
            frame,
            vertical: false,
        }
    }

    pub const fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }
}

/// A slide layout: a named set of placeholders slides are created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideLayout {
    /// Layout kind
    pub kind: LayoutKind,
    /// Placeholders in z-order
    pub placeholders: Vec<PlaceholderDef>,
}

impl SlideLayout {
    /// Create a layout with the given placeholders.
    pub fn new(kind: LayoutKind, placeholders: Vec<PlaceholderDef>) -> Self {
        Self { kind, placeholders }
    }

    /// Display name of the layout.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The title placeholder, if the layout has one.
    pub fn title_placeholder(&self) -> Option<&PlaceholderDef> {
        self.placeholders.iter().find(|p| p.kind.is_title())
    }

    /// Find a placeholder by its `idx`.
    pub fn placeholder(&self, idx: u32) -> Option<&PlaceholderDef> {
        self.placeholders.iter().find(|p| p.idx == idx)
    }
}

// Frames of the default 4:3 Office template.
const MASTER_TITLE: Rect = Rect::new(457200, 274638, 8229600, 1143000);
const MASTER_BODY: Rect = Rect::new(457200, 1600200, 8229600, 4525963);
const MASTER_DATE: Rect = Rect::new(457200, 6356350, 2133600, 365125);
const MASTER_FOOTER: Rect = Rect::new(3124200, 6356350, 2895600, 365125);
const MASTER_SLIDE_NUMBER: Rect = Rect::new(6553200, 6356350, 2133600, 365125);

/// Placeholder index of the date placeholder on layouts.
pub const DATE_IDX: u32 = 10;
/// Placeholder index of the footer placeholder on layouts.
pub const FOOTER_IDX: u32 = 11;
/// Placeholder index of the slide number placeholder on layouts.
pub const SLIDE_NUMBER_IDX: u32 = 12;

/// An ordered collection of slide layouts sharing one slide master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    layouts: Vec<SlideLayout>,
}

impl Default for Template {
    fn default() -> Self {
        Self::office()
    }
}

impl Template {
    /// Create a template from an explicit list of layouts.
    pub fn with_layouts(layouts: Vec<SlideLayout>) -> Self {
        Self { layouts }
    }

    /// The default 4:3 Office template with its eleven layouts.
    pub fn office() -> Self {
        use PlaceholderKind::*;

        let layouts = LayoutKind::ALL
            .into_iter()
            .map(|kind| {
                let mut placeholders = match kind {
                    LayoutKind::TitleSlide => vec![
                        PlaceholderDef::new(
                            CenteredTitle,
                            0,
                            Rect::new(685800, 2130425, 7772400, 1470025),
                        ),
                        PlaceholderDef::new(
                            Subtitle,
                            1,
                            Rect::new(1371600, 3886200, 6400800, 1752600),
                        ),
                    ],
                    LayoutKind::TitleAndContent => vec![
                        PlaceholderDef::new(Title, 0, MASTER_TITLE),
                        PlaceholderDef::new(Object, 1, MASTER_BODY),
                    ],
                    LayoutKind::SectionHeader => vec![
                        PlaceholderDef::new(Title, 0, Rect::new(722313, 4406900, 7772400, 1362075)),
                        PlaceholderDef::new(Body, 1, Rect::new(722313, 2906713, 7772400, 1500187)),
                    ],
                    LayoutKind::TwoContent => vec![
                        PlaceholderDef::new(Title, 0, MASTER_TITLE),
                        PlaceholderDef::new(Object, 1, Rect::new(457200, 1600200, 4038600, 4525963)),
                        PlaceholderDef::new(
                            Object,
                            2,
                            Rect::new(4648200, 1600200, 4038600, 4525963),
                        ),
                    ],
                    LayoutKind::Comparison => vec![
                        PlaceholderDef::new(Title, 0, MASTER_TITLE),
                        PlaceholderDef::new(Body, 1, Rect::new(457200, 1535113, 4040188, 639762)),
                        PlaceholderDef::new(Object, 2, Rect::new(457200, 2174875, 4040188, 3951288)),
                        PlaceholderDef::new(Body, 3, Rect::new(4645025, 1535113, 4041775, 639762)),
                        PlaceholderDef::new(
                            Object,
                            4,
                            Rect::new(4645025, 2174875, 4041775, 3951288),
                        ),
                    ],
                    LayoutKind::TitleOnly => vec![PlaceholderDef::new(Title, 0, MASTER_TITLE)],
                    LayoutKind::Blank => Vec::new(),
                    LayoutKind::ContentWithCaption => vec![
                        PlaceholderDef::new(Title, 0, Rect::new(457200, 273050, 3008313, 1162050)),
                        PlaceholderDef::new(Object, 1, Rect::new(3575050, 273050, 5111750, 5853113)),
                        PlaceholderDef::new(Body, 2, Rect::new(457200, 1435100, 3008313, 4691063)),
                    ],
                    LayoutKind::PictureWithCaption => vec![
                        PlaceholderDef::new(Title, 0, Rect::new(1792288, 4800600, 5486400, 566738)),
                        PlaceholderDef::new(Picture, 1, Rect::new(1792288, 612775, 5486400, 4114800)),
                        PlaceholderDef::new(Body, 2, Rect::new(1792288, 5367338, 5486400, 804862)),
                    ],
                    LayoutKind::TitleAndVerticalText => vec![
                        PlaceholderDef::new(Title, 0, MASTER_TITLE),
                        PlaceholderDef::new(Body, 1, MASTER_BODY).vertical(),
                    ],
                    LayoutKind::VerticalTitleAndText => vec![
                        PlaceholderDef::new(Title, 0, Rect::new(6629400, 274638, 2057400, 5851525))
                            .vertical(),
                        PlaceholderDef::new(Body, 1, Rect::new(457200, 274638, 6019800, 5851525))
                            .vertical(),
                    ],
                };
                placeholders.extend(footer_placeholders());
                SlideLayout::new(kind, placeholders)
            })
            .collect();

        Self { layouts }
    }

    /// Placeholders of the slide master every layout inherits from.
    pub fn master_placeholders() -> Vec<PlaceholderDef> {
        let mut placeholders = vec![
            PlaceholderDef::new(PlaceholderKind::Title, 0, MASTER_TITLE),
            PlaceholderDef::new(PlaceholderKind::Body, 1, MASTER_BODY),
        ];
        placeholders.extend(footer_placeholders());
        placeholders
    }

    /// Layouts in template order.
    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    /// Find a layout by kind, returning its template index.
    pub fn find(&self, kind: LayoutKind) -> Option<(usize, &SlideLayout)> {
        self.layouts.iter().enumerate().find(|(_, l)| l.kind == kind)
    }

    /// Get a layout by template index.
    pub fn get(&self, index: usize) -> Option<&SlideLayout> {
        self.layouts.get(index)
    }

    /// Number of layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Check if the template has no layouts.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

fn footer_placeholders() -> [PlaceholderDef; 3] {
    [
        PlaceholderDef::new(PlaceholderKind::Date, DATE_IDX, MASTER_DATE),
        PlaceholderDef::new(PlaceholderKind::Footer, FOOTER_IDX, MASTER_FOOTER),
        PlaceholderDef::new(PlaceholderKind::SlideNumber, SLIDE_NUMBER_IDX, MASTER_SLIDE_NUMBER),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_template_order() {
        let template = Template::office();
        assert_eq!(template.len(), 11);
        assert_eq!(template.get(0).unwrap().kind, LayoutKind::TitleSlide);
        assert_eq!(template.get(1).unwrap().kind, LayoutKind::TitleAndContent);
        assert_eq!(template.get(6).unwrap().kind, LayoutKind::Blank);
    }

    #[test]
    fn test_title_slide_placeholders() {
        let template = Template::office();
        let (_, layout) = template.find(LayoutKind::TitleSlide).unwrap();
        assert_eq!(
            layout.title_placeholder().unwrap().kind,
            PlaceholderKind::CenteredTitle
        );
        assert_eq!(layout.placeholder(1).unwrap().kind, PlaceholderKind::Subtitle);
    }

    #[test]
    fn test_blank_layout_has_no_title() {
        let template = Template::office();
        let (_, layout) = template.find(LayoutKind::Blank).unwrap();
        assert!(layout.title_placeholder().is_none());
    }

    #[test]
    fn test_ph_type_roundtrip() {
        for kind in [
            PlaceholderKind::Title,
            PlaceholderKind::CenteredTitle,
            PlaceholderKind::Subtitle,
            PlaceholderKind::Body,
            PlaceholderKind::Object,
            PlaceholderKind::Picture,
            PlaceholderKind::SlideNumber,
        ] {
            assert_eq!(PlaceholderKind::from_ph_type(kind.ph_type()), Some(kind));
        }
        assert_eq!(PlaceholderKind::from_ph_type(Some("chart")), None);
    }

    #[test]
    fn test_layout_lookup_by_name() {
        assert_eq!(
            LayoutKind::from_name("Title and Content"),
            Some(LayoutKind::TitleAndContent)
        );
        assert_eq!(
            LayoutKind::from_ooxml_type("vertTitleAndTx"),
            Some(LayoutKind::VerticalTitleAndText)
        );
        assert_eq!(LayoutKind::from_name("Custom"), None);
    }
}
