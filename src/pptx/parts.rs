//! Markup of the individual parts of a presentation package.

use super::options::ThemeOptions;
use super::shapes::{
    common_slide_data, escape_text, slide_placeholder_xml, template_placeholder_xml, PML_NAMESPACES,
};
use crate::container::XML_DECLARATION;
use crate::model::{Metadata, PlaceholderDef, Slide, SlideLayout};
use quick_xml::escape::escape;

/// Id of the single slide master in `p:sldMasterIdLst`.
const SLIDE_MASTER_ID: u64 = 2147483648;

/// Default table style GUID ("Medium Style 2 - Accent 1").
const DEFAULT_TABLE_STYLE: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

const CLR_MAP: &str = concat!(
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
    r#"hlink="hlink" folHlink="folHlink"/>"#
);

const MASTER_CLR_MAPPING: &str = "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>";

/// `ppt/presentation.xml`. `slide_rel_ids` pairs each slide id with its relationship id.
pub(crate) fn presentation_xml(
    master_rel_id: &str,
    slide_rel_ids: &[(u32, String)],
    slide_width: i64,
    slide_height: i64,
) -> String {
    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:presentation {} saveSubsetFonts="1">"#,
        PML_NAMESPACES
    ));
    xml.push_str(&format!(
        r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst>"#,
        SLIDE_MASTER_ID, master_rel_id
    ));
    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide_id, rel_id) in slide_rel_ids {
            xml.push_str(&format!(r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, rel_id));
        }
        xml.push_str("</p:sldIdLst>");
    }
    xml.push_str(&format!(
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        slide_width, slide_height
    ));
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

/// `ppt/slideMasters/slideMaster1.xml`. `layout_rel_ids` are in template order.
pub(crate) fn slide_master_xml(placeholders: &[PlaceholderDef], layout_rel_ids: &[String]) -> String {
    let shapes: Vec<String> = placeholders
        .iter()
        .enumerate()
        .map(|(i, def)| template_placeholder_xml(def, i as u32 + 2))
        .collect();

    let mut xml = String::with_capacity(8192);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!("<p:sldMaster {}>", PML_NAMESPACES));
    let mut cld = common_slide_data(None, &shapes);
    // Master background goes in front of the shape tree.
    cld = cld.replacen(
        "<p:cSld>",
        r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
        1,
    );
    xml.push_str(&cld);
    xml.push_str(CLR_MAP);
    xml.push_str("<p:sldLayoutIdLst>");
    for (i, rel_id) in layout_rel_ids.iter().enumerate() {
        xml.push_str(&format!(
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID + 1 + i as u64,
            rel_id
        ));
    }
    xml.push_str("</p:sldLayoutIdLst>");
    xml.push_str(&text_styles_xml());
    xml.push_str("</p:sldMaster>");
    xml
}

fn text_styles_xml() -> String {
    let mut xml = String::from("<p:txStyles>");

    xml.push_str(concat!(
        "<p:titleStyle>",
        r#"<a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
        r#"<a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
        r#"<a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr>"#,
        "</a:lvl1pPr></p:titleStyle>"
    ));

    // (left margin, hanging indent, font size, bullet character) per outline level
    const BODY_LEVELS: [(i64, i64, u32, &str); 5] = [
        (342900, -342900, 3200, "\u{2022}"),
        (742950, -285750, 2800, "\u{2013}"),
        (1143000, -228600, 2400, "\u{2022}"),
        (1600200, -228600, 2000, "\u{2013}"),
        (2057400, -228600, 2000, "\u{00BB}"),
    ];
    xml.push_str("<p:bodyStyle>");
    for (i, (mar_l, indent, size, bullet)) in BODY_LEVELS.iter().enumerate() {
        xml.push_str(&format!(
            concat!(
                r#"<a:lvl{lvl}pPr marL="{mar_l}" indent="{indent}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
                r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef>"#,
                r#"<a:buFont typeface="Arial" pitchFamily="34" charset="0"/><a:buChar char="{bullet}"/>"#,
                r#"<a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
                r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
                "</a:lvl{lvl}pPr>"
            ),
            lvl = i + 1,
            mar_l = mar_l,
            indent = indent,
            bullet = bullet,
            size = size
        ));
    }
    xml.push_str("</p:bodyStyle>");

    xml.push_str(concat!(
        r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#,
        r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
        r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
        "</a:lvl1pPr></p:otherStyle>"
    ));

    xml.push_str("</p:txStyles>");
    xml
}

/// `ppt/slideLayouts/slideLayoutN.xml`.
pub(crate) fn slide_layout_xml(layout: &SlideLayout) -> String {
    let shapes: Vec<String> = layout
        .placeholders
        .iter()
        .enumerate()
        .map(|(i, def)| template_placeholder_xml(def, i as u32 + 2))
        .collect();

    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:sldLayout {} type="{}" preserve="1">"#,
        PML_NAMESPACES,
        layout.kind.ooxml_type()
    ));
    xml.push_str(&common_slide_data(Some(layout.name()), &shapes));
    xml.push_str(MASTER_CLR_MAPPING);
    xml.push_str("</p:sldLayout>");
    xml
}

/// `ppt/slides/slideN.xml`.
pub(crate) fn slide_xml(slide: &Slide) -> String {
    let shapes: Vec<String> = slide.placeholders.iter().map(slide_placeholder_xml).collect();

    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!("<p:sld {}>", PML_NAMESPACES));
    xml.push_str(&common_slide_data(None, &shapes));
    xml.push_str(MASTER_CLR_MAPPING);
    xml.push_str("</p:sld>");
    xml
}

/// `ppt/theme/theme1.xml`.
pub(crate) fn theme_xml(theme: &ThemeOptions) -> String {
    const SOLID_PH: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;

    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{}">"#,
        escape(theme.name.as_str())
    ));
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (slot, rgb) in [
        ("dk2", "1F497D"),
        ("lt2", "EEECE1"),
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ] {
        xml.push_str(&format!(
            r#"<a:{slot}><a:srgbClr val="{rgb}"/></a:{slot}>"#,
            slot = slot,
            rgb = rgb
        ));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(&format!(
        concat!(
            r#"<a:fontScheme name="Office">"#,
            r#"<a:majorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>"
        ),
        escape(theme.major_font.as_str()),
        escape(theme.minor_font.as_str())
    ));

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    xml.push_str(&SOLID_PH.repeat(3));
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        xml.push_str(&format!(
            r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr">{}<a:prstDash val="solid"/></a:ln>"#,
            width, SOLID_PH
        ));
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    xml.push_str(&"<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3));
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    xml.push_str(&SOLID_PH.repeat(3));
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

/// `ppt/presProps.xml`.
pub(crate) fn pres_props_xml() -> String {
    format!("{}<p:presentationPr {}/>", XML_DECLARATION, PML_NAMESPACES)
}

/// `ppt/viewProps.xml`.
pub(crate) fn view_props_xml() -> String {
    format!(
        r#"{}<p:viewPr {}><p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#,
        XML_DECLARATION, PML_NAMESPACES
    )
}

/// `ppt/tableStyles.xml`.
pub(crate) fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{}"/>"#,
        XML_DECLARATION, DEFAULT_TABLE_STYLE
    )
}

/// `docProps/core.xml`. Only fields present in `meta` are written.
pub(crate) fn core_props_xml(meta: &Metadata) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties "#,
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));

    let mut element = |tag: &str, value: Option<&str>| {
        if let Some(value) = value {
            xml.push_str(&format!("<{tag}>{}</{tag}>", escape_text(value), tag = tag));
        }
    };
    element("dc:title", meta.title.as_deref());
    element("dc:subject", meta.subject.as_deref());
    element("dc:creator", meta.author.as_deref());
    let keywords = meta.keywords.join(", ");
    element(
        "cp:keywords",
        (!keywords.is_empty()).then_some(keywords.as_str()),
    );
    element("dc:description", meta.description.as_deref());
    element("cp:lastModifiedBy", meta.last_modified_by.as_deref());

    for (tag, value) in [
        ("dcterms:created", &meta.created),
        ("dcterms:modified", &meta.modified),
    ] {
        if let Some(value) = value {
            xml.push_str(&format!(
                r#"<{tag} xsi:type="dcterms:W3CDTF">{}</{tag}>"#,
                escape(value.as_str()),
                tag = tag
            ));
        }
    }

    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml`.
pub(crate) fn app_props_xml(application: &str, slide_count: usize) -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{}</Application><Slides>{}</Slides>",
            "</Properties>"
        ),
        XML_DECLARATION,
        escape(application),
        slide_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutKind, Template};

    #[test]
    fn test_presentation_xml() {
        let xml = presentation_xml(
            "rId1",
            &[(256, "rId2".to_string()), (257, "rId3".to_string())],
            9144000,
            6858000,
        );
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_empty_presentation_has_no_slide_list() {
        let xml = presentation_xml("rId1", &[], 9144000, 6858000);
        assert!(!xml.contains("sldIdLst"));
    }

    #[test]
    fn test_slide_master_lists_layouts() {
        let rel_ids: Vec<String> = (1..=11).map(|i| format!("rId{}", i)).collect();
        let xml = slide_master_xml(&Template::master_placeholders(), &rel_ids);
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483659" r:id="rId11"/>"#));
        assert!(xml.contains("<p:cSld><p:bg>"));
        assert!(xml.contains("<p:bodyStyle><a:lvl1pPr"));
        assert!(xml.contains("</a:lvl5pPr></p:bodyStyle>"));
    }

    #[test]
    fn test_slide_layout_xml() {
        let template = Template::office();
        let (_, layout) = template.find(LayoutKind::TitleAndContent).unwrap();
        let xml = slide_layout_xml(layout);
        assert!(xml.contains(r#"type="obj" preserve="1""#));
        assert!(xml.contains(r#"<p:cSld name="Title and Content">"#));
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
    }

    #[test]
    fn test_core_props_only_present_fields() {
        let mut meta = Metadata::default();
        meta.title = Some("Tracker & Co".to_string());
        meta.keywords = vec!["a".to_string(), "b".to_string()];
        let xml = core_props_xml(&meta);
        assert!(xml.contains("<dc:title>Tracker &amp; Co</dc:title>"));
        assert!(xml.contains("<cp:keywords>a, b</cp:keywords>"));
        assert!(!xml.contains("dc:creator"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_theme_fonts() {
        let theme = ThemeOptions {
            name: "Deck".to_string(),
            major_font: "Georgia".to_string(),
            minor_font: "Verdana".to_string(),
        };
        let xml = theme_xml(&theme);
        assert!(xml.contains(r#"name="Deck""#));
        assert!(xml.contains(r#"<a:majorFont><a:latin typeface="Georgia"/>"#));
        assert!(xml.contains(r#"<a:minorFont><a:latin typeface="Verdana"/>"#));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }
}
