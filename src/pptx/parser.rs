//! PPTX parser implementation.

use super::PRESENTATION_PART;
use crate::container::{rel_types, OoxmlContainer, Relationships};
use crate::error::{Error, Result};
use crate::model::{
    LayoutKind, Paragraph, Placeholder, PlaceholderKind, Presentation, Slide, TextFrame,
};
use log::debug;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Slide reference from `p:sldIdLst`.
#[derive(Debug, Clone)]
struct SlideRef {
    id: u32,
    rel_id: String,
}

/// Parser for PPTX (PowerPoint) presentations.
///
/// Reads a package back into a [`Presentation`] built on the default
/// template: slides, their layouts and the text of their placeholders.
#[derive(Debug)]
pub struct PptxParser {
    container: OoxmlContainer,
    presentation_path: String,
    relationships: Relationships,
    slides: Vec<SlideRef>,
    slide_size: Option<(i64, i64)>,
}

impl PptxParser {
    /// Open a PPTX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    fn from_container(container: OoxmlContainer) -> Result<Self> {
        let presentation_path = container
            .read_package_relationships()?
            .get_by_type(rel_types::OFFICE_DOCUMENT)
            .first()
            .map(|rel| rel.target.trim_start_matches('/').to_string())
            .unwrap_or_else(|| PRESENTATION_PART.to_string());

        let content_types = container.read_content_types()?;
        match content_types.content_type_of(&format!("/{}", presentation_path)) {
            Some(ct) if is_presentation_content_type(ct) => {}
            Some(ct) => {
                return Err(Error::UnsupportedFormat(format!(
                    "{} has content type {}",
                    presentation_path, ct
                )))
            }
            None => return Err(Error::MissingComponent(presentation_path)),
        }

        let relationships = container.read_relationships(&presentation_path)?;
        let xml = container.read_xml(&presentation_path)?;
        let (slides, slide_size) = parse_presentation(&xml)?;

        Ok(Self {
            container,
            presentation_path,
            relationships,
            slides,
            slide_size,
        })
    }

    /// Parse the package into a presentation.
    pub fn parse(&self) -> Result<Presentation> {
        let mut presentation = Presentation::new();
        presentation.metadata = self.container.parse_metadata()?;
        if let Some((cx, cy)) = self.slide_size {
            presentation.slide_width = cx;
            presentation.slide_height = cy;
        }

        for slide_ref in &self.slides {
            let rel = self.relationships.get(&slide_ref.rel_id).ok_or_else(|| {
                Error::MissingComponent(format!("slide relationship {}", slide_ref.rel_id))
            })?;
            let slide_path = OoxmlContainer::resolve_path(&self.presentation_path, &rel.target);
            let (layout, layout_index) = self.slide_layout(&presentation, &slide_path)?;

            let xml = self.container.read_xml(&slide_path)?;
            let placeholders = parse_placeholders(&xml)?;
            debug!(
                "read {} ({}, {} placeholders)",
                slide_path,
                layout,
                placeholders.len()
            );

            presentation.push_slide(Slide {
                id: slide_ref.id,
                layout,
                layout_index,
                placeholders,
            });
        }

        Ok(presentation)
    }

    /// Number of slides listed in `p:sldIdLst`.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Resolve a slide's layout relationship to a layout of the template.
    ///
    /// The layout is matched by its `cSld` name, then by its `type`, then by
    /// the number in its part name.
    fn slide_layout(&self, presentation: &Presentation, slide_path: &str) -> Result<(LayoutKind, usize)> {
        let rels = self.container.read_relationships(slide_path)?;
        let layout_rel = rels
            .get_by_type(rel_types::SLIDE_LAYOUT)
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingComponent(format!("layout of {}", slide_path)))?;
        let layout_path = OoxmlContainer::resolve_path(slide_path, &layout_rel.target);

        let xml = self.container.read_xml(&layout_path)?;
        let (name, layout_type) = parse_layout_identity(&xml)?;

        let template = presentation.template();
        let by_identity = name
            .as_deref()
            .and_then(LayoutKind::from_name)
            .or_else(|| layout_type.as_deref().and_then(LayoutKind::from_ooxml_type))
            .and_then(|kind| template.find(kind));
        let found = by_identity.or_else(|| {
            layout_number(&layout_path)
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| template.get(index).map(|layout| (index, layout)))
        });

        found
            .map(|(index, layout)| (layout.kind, index))
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "{} does not match any known slide layout",
                    layout_path
                ))
            })
    }
}

fn is_presentation_content_type(ct: &str) -> bool {
    ct.starts_with("application/vnd.openxmlformats-officedocument.presentationml.")
        && ct.ends_with(".main+xml")
}

/// `n` of a `.../slideLayoutN.xml` part name.
fn layout_number(path: &str) -> Option<usize> {
    path.rsplit('/')
        .next()?
        .strip_prefix("slideLayout")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    match e
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
    {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn attr_number<T: std::str::FromStr>(e: &BytesStart, name: &[u8]) -> Result<Option<T>> {
    Ok(attr_value(e, name)?.and_then(|v| v.parse().ok()))
}

/// Read slide references and the slide size from presentation.xml.
fn parse_presentation(xml: &str) -> Result<(Vec<SlideRef>, Option<(i64, i64)>)> {
    let mut slides = Vec::new();
    let mut slide_size = None;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                match e.name().local_name().as_ref() {
                    b"sldId" => {
                        let mut id = None;
                        let mut rel_id = None;
                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"id" => id = attr.unescape_value()?.parse::<u32>().ok(),
                                // r:id
                                key if key.ends_with(b":id") => {
                                    rel_id = Some(attr.unescape_value()?.into_owned())
                                }
                                _ => {}
                            }
                        }
                        match (id, rel_id) {
                            (Some(id), Some(rel_id)) => slides.push(SlideRef { id, rel_id }),
                            _ => {
                                return Err(Error::InvalidData(
                                    "p:sldId without id or r:id".to_string(),
                                ))
                            }
                        }
                    }
                    b"sldSz" => {
                        let cx = attr_number(e, b"cx")?;
                        let cy = attr_number(e, b"cy")?;
                        if let (Some(cx), Some(cy)) = (cx, cy) {
                            slide_size = Some((cx, cy));
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok((slides, slide_size))
}

/// Read the `cSld` name and the `type` attribute of a slide layout.
fn parse_layout_identity(xml: &str) -> Result<(Option<String>, Option<String>)> {
    let mut name = None;
    let mut layout_type = None;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                match e.name().local_name().as_ref() {
                    b"sldLayout" => layout_type = attr_value(e, b"type")?,
                    b"cSld" => {
                        name = attr_value(e, b"name")?;
                        break;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok((name, layout_type))
}

/// Placeholder shape being read.
#[derive(Default)]
struct ShapeState {
    shape_id: u32,
    name: String,
    ph: Option<(Option<PlaceholderKind>, u32)>,
    paragraphs: Vec<Paragraph>,
    /// Paragraphs written as a bare `<a:p/>`.
    bare_paragraphs: usize,
}

impl ShapeState {
    fn read_ph(&mut self, e: &BytesStart) -> Result<()> {
        let ph_type = attr_value(e, b"type")?;
        let idx = attr_number(e, b"idx")?.unwrap_or(0);
        self.ph = Some((PlaceholderKind::from_ph_type(ph_type.as_deref()), idx));
        Ok(())
    }

    fn into_placeholder(self) -> Option<Placeholder> {
        let (kind, idx) = self.ph?;
        let kind = kind?;

        // A lone bare <a:p/> is the filler of an empty text body. An empty
        // paragraph that carries a:endParaRPr or a:pPr is real content.
        let mut text_frame = TextFrame::new();
        let filler_only = self.paragraphs.len() == 1 && self.bare_paragraphs == 1;
        if !filler_only {
            text_frame.paragraphs = self.paragraphs;
        }

        Some(Placeholder {
            kind,
            idx,
            shape_id: self.shape_id,
            name: self.name,
            text_frame,
        })
    }
}

/// Read the placeholder shapes of a slide, in document order.
///
/// Text is found in p:sp/p:txBody/a:p/a:r/a:t; `a:br` becomes `\n`, so a
/// vertical tab written as `a:br` reads back as `\n`.
/// Shapes that are not placeholders, or whose placeholder type has no
/// counterpart in the model, are skipped.
fn parse_placeholders(xml: &str) -> Result<Vec<Placeholder>> {
    let mut placeholders = Vec::new();

    let mut reader = quick_xml::Reader::from_str(xml);
    // Keep whitespace inside a:t
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut shape: Option<ShapeState> = None;
    let mut in_txbody = false;
    let mut paragraph: Option<Paragraph> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().local_name().as_ref() {
                b"sp" => shape = Some(ShapeState::default()),
                b"cNvPr" => read_shape_identity(shape.as_mut(), e)?,
                b"ph" => {
                    if let Some(state) = shape.as_mut() {
                        state.read_ph(e)?;
                    }
                }
                b"txBody" if shape.is_some() => in_txbody = true,
                b"p" if in_txbody => paragraph = Some(Paragraph::new()),
                b"pPr" => read_paragraph_level(paragraph.as_mut(), e)?,
                b"br" => push_line_break(paragraph.as_mut()),
                b"t" if paragraph.is_some() => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().local_name().as_ref() {
                b"cNvPr" => read_shape_identity(shape.as_mut(), e)?,
                b"ph" => {
                    if let Some(state) = shape.as_mut() {
                        state.read_ph(e)?;
                    }
                }
                b"p" if in_txbody => {
                    if let Some(state) = shape.as_mut() {
                        state.paragraphs.push(Paragraph::new());
                        state.bare_paragraphs += 1;
                    }
                }
                b"pPr" => read_paragraph_level(paragraph.as_mut(), e)?,
                b"br" => push_line_break(paragraph.as_mut()),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(para) = paragraph.as_mut() {
                        para.text.push_str(&e.unescape()?);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if in_txbody => {
                    if let (Some(state), Some(para)) = (shape.as_mut(), paragraph.take()) {
                        state.paragraphs.push(para);
                    }
                }
                b"txBody" => in_txbody = false,
                b"sp" => {
                    if let Some(placeholder) = shape.take().and_then(ShapeState::into_placeholder) {
                        placeholders.push(placeholder);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(placeholders)
}

fn read_shape_identity(shape: Option<&mut ShapeState>, e: &BytesStart) -> Result<()> {
    if let Some(state) = shape {
        // The first cNvPr of a shape is its own.
        if state.shape_id == 0 {
            state.shape_id = attr_number(e, b"id")?.unwrap_or(0);
            state.name = attr_value(e, b"name")?.unwrap_or_default();
        }
    }
    Ok(())
}

fn read_paragraph_level(paragraph: Option<&mut Paragraph>, e: &BytesStart) -> Result<()> {
    if let Some(para) = paragraph {
        if let Some(level) = attr_number(e, b"lvl")? {
            para.set_level(level);
        }
    }
    Ok(())
}

fn push_line_break(paragraph: Option<&mut Paragraph>) {
    if let Some(para) = paragraph {
        para.text.push('\n');
    }
}

impl Presentation {
    /// Read a presentation from a PPTX file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        PptxParser::open(path)?.parse()
    }

    /// Read a presentation from PPTX bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        PptxParser::from_bytes(data)?.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{add_slide, SlideContent};
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn sample() -> Presentation {
        let mut pres = Presentation::new();
        pres.metadata.title = Some("Sample".to_string());
        add_slide(
            &mut pres,
            "Welcome",
            &SlideContent::Subtitle("Team A\nSpring term".to_string()),
        )
        .unwrap();
        add_slide(
            &mut pres,
            "Agenda",
            &SlideContent::bullets(["Intro", "Q&A <live>", "  padded  "]),
        )
        .unwrap();
        add_slide(&mut pres, "Only a title", &SlideContent::TitleOnly).unwrap();
        pres
    }

    #[test]
    fn test_roundtrip_slides() {
        let pres = sample();
        let parsed = Presentation::from_bytes(pres.to_bytes().unwrap()).unwrap();

        assert_eq!(parsed.slides(), pres.slides());
        assert_eq!(parsed.titles(), vec!["Welcome", "Agenda", "Only a title"]);
        assert_eq!(parsed.metadata.title.as_deref(), Some("Sample"));
        assert_eq!(parsed.slide_width, pres.slide_width);
    }

    #[test]
    fn test_roundtrip_text() {
        let parsed = Presentation::from_bytes(sample().to_bytes().unwrap()).unwrap();

        let first = parsed.slide(0).unwrap();
        assert_eq!(first.layout, LayoutKind::TitleSlide);
        assert_eq!(first.subtitle_text().as_deref(), Some("Team A\nSpring term"));

        let second = parsed.slide(1).unwrap();
        assert_eq!(second.layout, LayoutKind::TitleAndContent);
        assert_eq!(second.body_paragraphs(), vec!["Intro", "Q&A <live>", "  padded  "]);

        let third = parsed.slide(2).unwrap();
        assert!(third.subtitle_text().is_none());
        assert!(third.placeholder(1).unwrap().text_frame.is_empty());
    }

    #[test]
    fn test_slide_count() {
        let parser = PptxParser::from_bytes(sample().to_bytes().unwrap()).unwrap();
        assert_eq!(parser.slide_count(), 3);
    }

    #[test]
    fn test_parse_placeholders() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:txBody><a:p><a:r><a:t>Head</a:t></a:r><a:br/><a:r><a:t>line</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content 2"/><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:txBody><a:p><a:pPr lvl="1"/><a:r><a:t>nested</a:t></a:r></a:p><a:p/></p:txBody></p:sp>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="4" name="TextBox 3"/><p:nvPr/></p:nvSpPr>"#,
            r#"<p:txBody><a:p><a:r><a:t>free text</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        );

        let placeholders = parse_placeholders(xml).unwrap();
        assert_eq!(placeholders.len(), 2);

        assert_eq!(placeholders[0].kind, PlaceholderKind::Title);
        assert_eq!(placeholders[0].name, "Title 1");
        assert_eq!(placeholders[0].text(), "Head\nline");

        let body = &placeholders[1];
        assert_eq!(body.kind, PlaceholderKind::Object);
        assert_eq!(body.idx, 1);
        assert_eq!(body.shape_id, 3);
        assert_eq!(body.text_frame.len(), 2);
        assert_eq!(body.text_frame.paragraphs[0].level, 1);
        assert!(body.text_frame.paragraphs[1].is_empty());
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="R&amp;D &quot;Title&quot;"/>"#,
            r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:txBody><a:p><a:r><a:t>x</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        );
        let placeholders = parse_placeholders(xml).unwrap();
        assert_eq!(placeholders[0].name, "R&D \"Title\"");

        let layout = r#"<p:sldLayout xmlns:p="p" type="obj"><p:cSld name="Q&amp;A"/></p:sldLayout>"#;
        let (name, layout_type) = parse_layout_identity(layout).unwrap();
        assert_eq!(name.as_deref(), Some("Q&A"));
        assert_eq!(layout_type.as_deref(), Some("obj"));
    }

    #[test]
    fn test_single_empty_bullet_roundtrip() {
        let mut pres = Presentation::new();
        add_slide(&mut pres, "Blank point", &SlideContent::bullets([""])).unwrap();
        let parsed = Presentation::from_bytes(pres.to_bytes().unwrap()).unwrap();

        let slide = parsed.slide(0).unwrap();
        assert_eq!(slide.layout, LayoutKind::TitleAndContent);
        assert_eq!(slide.placeholder(1).unwrap().text_frame.len(), 1);
        assert_eq!(slide.body_paragraphs(), vec![""]);
        assert_eq!(parsed.slides(), pres.slides());
    }

    #[test]
    fn test_empty_subtitle_roundtrip() {
        let mut pres = Presentation::new();
        add_slide(&mut pres, "Cover", &SlideContent::Subtitle(String::new())).unwrap();
        assert_eq!(pres.slide(0).unwrap().subtitle_text().as_deref(), Some(""));

        let parsed = Presentation::from_bytes(pres.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed.slide(0).unwrap().subtitle_text().as_deref(), Some(""));
    }

    #[test]
    fn test_carriage_return_roundtrip() {
        let mut pres = Presentation::new();
        add_slide(
            &mut pres,
            "Line\rendings",
            &SlideContent::Subtitle("dos\r\nstyle".to_string()),
        )
        .unwrap();
        let parsed = Presentation::from_bytes(pres.to_bytes().unwrap()).unwrap();

        let slide = parsed.slide(0).unwrap();
        assert_eq!(slide.title_text().as_deref(), Some("Line\rendings"));
        assert_eq!(slide.subtitle_text().as_deref(), Some("dos\r\nstyle"));
    }

    #[test]
    fn test_vertical_tab_reads_back_as_newline() {
        let mut pres = Presentation::new();
        add_slide(&mut pres, "Tabs", &SlideContent::Subtitle("x\u{B}y".to_string())).unwrap();
        let parsed = Presentation::from_bytes(pres.to_bytes().unwrap()).unwrap();

        assert_eq!(parsed.slide(0).unwrap().subtitle_text().as_deref(), Some("x\ny"));
    }

    #[test]
    fn test_layout_number() {
        assert_eq!(layout_number("ppt/slideLayouts/slideLayout7.xml"), Some(7));
        assert_eq!(layout_number("ppt/slideLayouts/custom.xml"), None);
    }

    #[test]
    fn test_rejects_non_presentation() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(
            concat!(
                r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
                r#"<Override PartName="/ppt/presentation.xml" ContentType="application/xml"/>"#,
                r#"</Types>"#
            )
            .as_bytes(),
        )
        .unwrap();
        zip.start_file("ppt/presentation.xml", options).unwrap();
        zip.write_all(b"<p:presentation/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let err = PptxParser::from_bytes(bytes).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(PptxParser::from_bytes(b"not a zip".to_vec()).is_err());
    }
}
