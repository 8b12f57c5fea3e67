//! PPTX package writer.

use super::options::WriteOptions;
use super::parts;
use super::shapes::invalid_xml_char;
use super::{content_types as ct, PRESENTATION_PART};
use crate::container::{rel_types, ContentTypes, PackageWriter, Relationships};
use crate::error::{Error, Result};
use crate::model::{Presentation, Template};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

const SLIDE_MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
const THEME_PART: &str = "ppt/theme/theme1.xml";

fn layout_part(index: usize) -> String {
    format!("ppt/slideLayouts/slideLayout{}.xml", index + 1)
}

fn slide_part(index: usize) -> String {
    format!("ppt/slides/slide{}.xml", index + 1)
}

/// Serializes a [`Presentation`] into a PPTX package.
///
/// # Example
///
/// ```no_run
/// use mkdeck::{PptxWriter, Presentation, WriteOptions};
///
/// let presentation = Presentation::new();
/// PptxWriter::new(WriteOptions::default()).save(&presentation, "empty.pptx")?;
/// # Ok::<(), mkdeck::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    options: WriteOptions,
}

impl PptxWriter {
    /// Create a writer with the given options.
    pub fn new(options: WriteOptions) -> Self {
        Self { options }
    }

    /// The writer's options.
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Write the package to `writer` and return it.
    pub fn write<W: Write + Seek>(&self, presentation: &Presentation, writer: W) -> Result<W> {
        validate(presentation)?;
        let template = presentation.template();

        let mut package = PackageWriter::new(writer, self.options.compression.into());

        package.add_part("[Content_Types].xml", &self.content_types(presentation).to_xml())?;

        let mut package_rels = Relationships::new();
        package_rels.add_target(rel_types::OFFICE_DOCUMENT, PRESENTATION_PART);
        package_rels.add_target(rel_types::CORE_PROPERTIES, "docProps/core.xml");
        package_rels.add_target(rel_types::EXTENDED_PROPERTIES, "docProps/app.xml");
        package.add_relationships("", &package_rels)?;

        self.write_presentation_part(presentation, &mut package)?;
        write_master_and_layouts(template, &mut package)?;

        for (index, slide) in presentation.slides().iter().enumerate() {
            let path = slide_part(index);
            debug!("writing {} ({})", path, slide.layout);
            package.add_part(&path, &parts::slide_xml(slide))?;

            let mut rels = Relationships::new();
            rels.add_target(
                rel_types::SLIDE_LAYOUT,
                format!("../slideLayouts/slideLayout{}.xml", slide.layout_index + 1),
            );
            package.add_relationships(&path, &rels)?;
        }

        package.add_part(THEME_PART, &parts::theme_xml(&self.options.theme))?;
        package.add_part("ppt/presProps.xml", &parts::pres_props_xml())?;
        package.add_part("ppt/viewProps.xml", &parts::view_props_xml())?;
        package.add_part("ppt/tableStyles.xml", &parts::table_styles_xml())?;
        package.add_part("docProps/core.xml", &parts::core_props_xml(&presentation.metadata))?;

        let application = presentation
            .metadata
            .application
            .as_deref()
            .unwrap_or(&self.options.application);
        package.add_part(
            "docProps/app.xml",
            &parts::app_props_xml(application, presentation.slide_count()),
        )?;

        package.finish()
    }

    /// Write the package into a byte vector.
    pub fn to_bytes(&self, presentation: &Presentation) -> Result<Vec<u8>> {
        let cursor = self.write(presentation, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn save(&self, presentation: &Presentation, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        // An invalid presentation must not truncate an existing file.
        validate(presentation)?;
        let file = File::create(path)
            .map_err(|e| Error::SerializationFailed(format!("{}: {}", path.display(), e)))?;

        let mut writer = self.write(presentation, BufWriter::new(file))?;
        writer
            .flush()
            .map_err(|e| Error::SerializationFailed(format!("{}: {}", path.display(), e)))?;

        info!(
            "saved {} slides to {}",
            presentation.slide_count(),
            path.display()
        );
        Ok(())
    }

    fn content_types(&self, presentation: &Presentation) -> ContentTypes {
        let mut types = ContentTypes::new();
        types.add_override(&format!("/{}", PRESENTATION_PART), ct::PRESENTATION);
        types.add_override(&format!("/{}", SLIDE_MASTER_PART), ct::SLIDE_MASTER);
        for index in 0..presentation.template().len() {
            types.add_override(&format!("/{}", layout_part(index)), ct::SLIDE_LAYOUT);
        }
        for index in 0..presentation.slide_count() {
            types.add_override(&format!("/{}", slide_part(index)), ct::SLIDE);
        }
        types.add_override(&format!("/{}", THEME_PART), ct::THEME);
        types.add_override("/ppt/presProps.xml", ct::PRES_PROPS);
        types.add_override("/ppt/viewProps.xml", ct::VIEW_PROPS);
        types.add_override("/ppt/tableStyles.xml", ct::TABLE_STYLES);
        types.add_override("/docProps/core.xml", ct::CORE_PROPERTIES);
        types.add_override("/docProps/app.xml", ct::EXTENDED_PROPERTIES);
        types
    }

    fn write_presentation_part<W: Write + Seek>(
        &self,
        presentation: &Presentation,
        package: &mut PackageWriter<W>,
    ) -> Result<()> {
        let mut rels = Relationships::new();
        let master_rel_id = rels.add_target(rel_types::SLIDE_MASTER, "slideMasters/slideMaster1.xml");

        let slide_rel_ids: Vec<(u32, String)> = presentation
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let target = format!("slides/slide{}.xml", index + 1);
                (slide.id, rels.add_target(rel_types::SLIDE, target))
            })
            .collect();

        rels.add_target(rel_types::PRES_PROPS, "presProps.xml");
        rels.add_target(rel_types::VIEW_PROPS, "viewProps.xml");
        rels.add_target(rel_types::THEME, "theme/theme1.xml");
        rels.add_target(rel_types::TABLE_STYLES, "tableStyles.xml");

        package.add_part(
            PRESENTATION_PART,
            &parts::presentation_xml(
                &master_rel_id,
                &slide_rel_ids,
                presentation.slide_width,
                presentation.slide_height,
            ),
        )?;
        package.add_relationships(PRESENTATION_PART, &rels)
    }
}

/// Check that every slide uses a layout of the template and that all text
/// can be written as XML.
fn validate(presentation: &Presentation) -> Result<()> {
    let template = presentation.template();
    for slide in presentation.slides() {
        if template.get(slide.layout_index).map(|l| l.kind) != Some(slide.layout) {
            return Err(Error::LayoutUnavailable(slide.layout));
        }
    }
    check_text(presentation)
}

fn check_text(presentation: &Presentation) -> Result<()> {
    let unwritable = |location: String, c: char| {
        Error::SerializationFailed(format!(
            "{} contains U+{:04X}, which XML cannot represent",
            location, c as u32
        ))
    };

    for (index, slide) in presentation.slides().iter().enumerate() {
        for placeholder in &slide.placeholders {
            // Vertical tabs are soft breaks and never reach the XML.
            let found = placeholder
                .text_frame
                .paragraphs
                .iter()
                .flat_map(|paragraph| paragraph.lines())
                .find_map(invalid_xml_char);
            if let Some(c) = found {
                return Err(unwritable(
                    format!("slide {} ({})", index + 1, placeholder.name),
                    c,
                ));
            }
        }
    }

    let meta = &presentation.metadata;
    let fields = [
        &meta.title,
        &meta.author,
        &meta.subject,
        &meta.description,
        &meta.created,
        &meta.modified,
        &meta.last_modified_by,
        &meta.application,
    ];
    let found = fields
        .into_iter()
        .flatten()
        .chain(&meta.keywords)
        .find_map(|value| invalid_xml_char(value));
    match found {
        Some(c) => Err(unwritable("document properties".to_string(), c)),
        None => Ok(()),
    }
}

fn write_master_and_layouts<W: Write + Seek>(
    template: &Template,
    package: &mut PackageWriter<W>,
) -> Result<()> {
    let mut master_rels = Relationships::new();
    let layout_rel_ids: Vec<String> = (0..template.len())
        .map(|index| {
            master_rels.add_target(
                rel_types::SLIDE_LAYOUT,
                format!("../slideLayouts/slideLayout{}.xml", index + 1),
            )
        })
        .collect();
    master_rels.add_target(rel_types::THEME, "../theme/theme1.xml");

    package.add_part(
        SLIDE_MASTER_PART,
        &parts::slide_master_xml(&Template::master_placeholders(), &layout_rel_ids),
    )?;
    package.add_relationships(SLIDE_MASTER_PART, &master_rels)?;

    for (index, layout) in template.layouts().iter().enumerate() {
        let path = layout_part(index);
        package.add_part(&path, &parts::slide_layout_xml(layout))?;

        let mut rels = Relationships::new();
        rels.add_target(rel_types::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        package.add_relationships(&path, &rels)?;
    }

    Ok(())
}

impl Presentation {
    /// Save as a PPTX file with default options, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        PptxWriter::default().save(self, path)
    }

    /// Save as a PPTX file with the given options.
    pub fn save_with(&self, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
        PptxWriter::new(options.clone()).save(self, path)
    }

    /// Serialize to PPTX bytes with default options.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PptxWriter::default().to_bytes(self)
    }

    /// Save as a PPTX file asynchronously.
    ///
    /// The package is built in memory, then written with `tokio::fs`.
    #[cfg(feature = "async")]
    pub async fn save_async(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| Error::SerializationFailed(format!("{}: {}", path.display(), e)))
    }
}
