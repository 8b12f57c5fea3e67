//! DrawingML/PresentationML shape markup shared by slides, layouts and the master.

use crate::model::{Paragraph, PlaceholderDef, PlaceholderKind, Placeholder, Rect, TextFrame};
use quick_xml::escape::escape;

/// Group shape properties that open every `p:spTree`.
pub(crate) const SP_TREE_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

/// Namespace declarations for PresentationML root elements.
pub(crate) const PML_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#
);

const RUN_PROPERTIES: &str = r#"<a:rPr lang="en-US" dirty="0"/>"#;
const END_PARAGRAPH_PROPERTIES: &str = r#"<a:endParaRPr lang="en-US" dirty="0"/>"#;

/// Build the `p:ph` element for a placeholder.
fn ph_element(kind: PlaceholderKind, idx: u32, vertical: bool) -> String {
    let mut ph = String::from("<p:ph");
    if let Some(ph_type) = kind.ph_type() {
        ph.push_str(&format!(r#" type="{}""#, ph_type));
    }
    if vertical {
        ph.push_str(r#" orient="vert""#);
    }
    if idx != 0 {
        ph.push_str(&format!(r#" idx="{}""#, idx));
    }
    ph.push_str("/>");
    ph
}

fn non_visual_props(shape_id: u32, name: &str, ph: &str) -> String {
    format!(
        concat!(
            r#"<p:nvSpPr><p:cNvPr id="{}" name="{}"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
            r#"<p:nvPr>{}</p:nvPr></p:nvSpPr>"#
        ),
        shape_id,
        escape(name),
        ph
    )
}

fn xfrm(frame: &Rect) -> String {
    format!(
        r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr>"#,
        frame.x, frame.y, frame.cx, frame.cy
    )
}

/// First character of `text` that XML 1.0 cannot represent.
pub(crate) fn invalid_xml_char(text: &str) -> Option<char> {
    text.chars().find(|c| {
        matches!(
            c,
            '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
        )
    })
}

/// Escape character data. A carriage return is written as a character
/// reference, since parsers normalize a literal one to `\n`.
pub(crate) fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#xD;")
}

/// Markup of one paragraph. Soft line breaks become `a:br`.
///
/// A paragraph without text ends in `a:endParaRPr`, which keeps it apart
/// from the bare `<a:p/>` of an empty text body.
pub(crate) fn paragraph_xml(paragraph: &Paragraph) -> String {
    let mut xml = String::from("<a:p>");
    if paragraph.level > 0 {
        xml.push_str(&format!(r#"<a:pPr lvl="{}"/>"#, paragraph.level));
    }
    for (i, line) in paragraph.lines().enumerate() {
        if i > 0 {
            xml.push_str(&format!("<a:br>{}</a:br>", RUN_PROPERTIES));
        }
        if !line.is_empty() {
            xml.push_str(&format!(
                "<a:r>{}<a:t>{}</a:t></a:r>",
                RUN_PROPERTIES,
                escape_text(line)
            ));
        }
    }
    if paragraph.is_empty() {
        xml.push_str(END_PARAGRAPH_PROPERTIES);
    }
    xml.push_str("</a:p>");
    xml
}

/// Markup of a text body. An empty frame is written as one bare `<a:p/>`,
/// since `p:txBody` requires at least one paragraph.
pub(crate) fn text_body_xml(frame: &TextFrame, vertical: bool) -> String {
    let mut xml = String::from("<p:txBody>");
    if vertical {
        xml.push_str(r#"<a:bodyPr vert="eaVert"/>"#);
    } else {
        xml.push_str("<a:bodyPr/>");
    }
    xml.push_str("<a:lstStyle/>");
    if frame.is_empty() {
        xml.push_str("<a:p/>");
    } else {
        for paragraph in &frame.paragraphs {
            xml.push_str(&paragraph_xml(paragraph));
        }
    }
    xml.push_str("</p:txBody>");
    xml
}

/// Slide-level placeholder: geometry is inherited from the layout.
pub(crate) fn slide_placeholder_xml(placeholder: &Placeholder) -> String {
    let mut xml = String::from("<p:sp>");
    xml.push_str(&non_visual_props(
        placeholder.shape_id,
        &placeholder.name,
        &ph_element(placeholder.kind, placeholder.idx, false),
    ));
    xml.push_str("<p:spPr/>");
    xml.push_str(&text_body_xml(&placeholder.text_frame, false));
    xml.push_str("</p:sp>");
    xml
}

/// Prompt text shown in master and layout views.
fn prompt_text(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::Title | PlaceholderKind::CenteredTitle => "Click to edit Master title style",
        PlaceholderKind::Subtitle => "Click to edit Master subtitle style",
        PlaceholderKind::Body | PlaceholderKind::Object => "Click to edit Master text styles",
        PlaceholderKind::Picture => "Click icon to add picture",
        PlaceholderKind::Date | PlaceholderKind::Footer | PlaceholderKind::SlideNumber => "",
    }
}

/// Layout- or master-level placeholder with explicit geometry and prompt text.
pub(crate) fn template_placeholder_xml(def: &PlaceholderDef, shape_id: u32) -> String {
    let name = format!("{} {}", def.kind.base_name(), shape_id.saturating_sub(1));
    let mut frame = TextFrame::new();
    let prompt = prompt_text(def.kind);
    if !prompt.is_empty() {
        frame.set_text(prompt);
    }

    let mut xml = String::from("<p:sp>");
    xml.push_str(&non_visual_props(
        shape_id,
        &name,
        &ph_element(def.kind, def.idx, def.vertical),
    ));
    xml.push_str(&xfrm(&def.frame));
    xml.push_str(&text_body_xml(&frame, def.vertical));
    xml.push_str("</p:sp>");
    xml
}

/// A complete `p:cSld` element holding the given shapes.
pub(crate) fn common_slide_data(name: Option<&str>, shapes: &[String]) -> String {
    let mut xml = match name {
        Some(name) => format!(r#"<p:cSld name="{}">"#, escape(name)),
        None => String::from("<p:cSld>"),
    };
    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_HEADER);
    for shape in shapes {
        xml.push_str(shape);
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml
}
