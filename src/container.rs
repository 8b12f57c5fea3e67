//! ZIP container abstraction for OOXML packages.
//!
//! [`OoxmlContainer`] reads parts and relationships from an existing package;
//! [`PackageWriter`] writes parts into a new one. [`Relationships`] and
//! [`ContentTypes`] are shared by both sides.

use crate::error::{Error, Result};
use crate::model::Metadata;
use log::trace;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// XML declaration written at the top of every part.
pub const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Relationship type URIs used by presentation packages.
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// A relationship entry from a .rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// Collection of relationships of one part, in document order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
    by_id: HashMap<String, usize>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Get relationships by type, in document order.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.entries
            .iter()
            .filter(|r| r.rel_type == rel_type)
            .collect()
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.by_id.insert(rel.id.clone(), self.entries.len());
        self.entries.push(rel);
    }

    /// Add an internal relationship under the next free `rIdN` and return its id.
    pub fn add_target(&mut self, rel_type: &str, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.add(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.into(),
            external: false,
        });
        id
    }

    /// All relationships in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a .rels part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.entries.len() * 160);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.entries {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape(rel.id.as_str()),
                escape(rel.rel_type.as_str()),
                escape(rel.target.as_str()),
                if rel.external {
                    r#" TargetMode="External""#
                } else {
                    ""
                }
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// The `[Content_Types].xml` part: default types by extension, overrides by part name.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: BTreeMap<String, String>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Create content types with the `rels` and `xml` defaults every package needs.
    pub fn new() -> Self {
        let mut types = Self::default();
        types.add_default(
            "rels",
            "application/vnd.openxmlformats-package.relationships+xml",
        );
        types.add_default("xml", "application/xml");
        types
    }

    /// Register a default content type for a file extension.
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    /// Register a content type for a single part (e.g., "/ppt/presentation.xml").
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        self.overrides
            .push((part_name.to_string(), content_type.to_string()));
    }

    /// Content type of a part, by override first and extension second.
    pub fn content_type_of(&self, part_name: &str) -> Option<&str> {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&normalized))
            .map(|(_, ct)| ct.as_str())
            .or_else(|| {
                let ext = normalized.rsplit('.').next()?.to_lowercase();
                self.defaults.get(&ext).map(String::as_str)
            })
    }

    /// Parse a `[Content_Types].xml` part.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut types = Self::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                    let name = e.name();
                    let local = name.local_name();
                    let mut key = String::new();
                    let mut content_type = String::new();
                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => key = attr.unescape_value()?.into_owned(),
                            b"ContentType" => content_type = attr.unescape_value()?.into_owned(),
                            _ => {}
                        }
                    }
                    match local.as_ref() {
                        b"Default" if !key.is_empty() => {
                            types.add_default(&key.to_lowercase(), &content_type)
                        }
                        b"Override" if !key.is_empty() => types.add_override(&key, &content_type),
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(types)
    }

    /// Serialize as the `[Content_Types].xml` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape(ext.as_str()),
                escape(ct.as_str())
            ));
        }
        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape(part.as_str()),
                escape(ct.as_str())
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Path of the .rels part belonging to `part_path`.
///
/// `ppt/slides/slide1.xml` becomes `ppt/slides/_rels/slide1.xml.rels`;
/// the package itself (empty path) uses `_rels/.rels`.
pub fn rels_path_for(part_path: &str) -> String {
    if part_path.is_empty() || part_path == "/" {
        return "_rels/.rels".to_string();
    }
    match part_path.rfind('/') {
        Some(slash) => format!(
            "{}/_rels/{}.rels",
            &part_path[..slash],
            &part_path[slash + 1..]
        ),
        None => format!("_rels/{}.rels", part_path),
    }
}

/// Fix XML encoding declaration from UTF-16 to UTF-8.
///
/// When we decode UTF-16 XML to a Rust String (UTF-8), the XML declaration
/// still says encoding="UTF-16", which quick-xml would then misread.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

/// Decode XML bytes handling UTF-8 (with or without BOM) and UTF-16 LE/BE with BOM.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(b"\xEF\xBB\xBF") {
        return String::from_utf8(rest.to_vec())
            .map_err(|e| Error::InvalidData(format!("invalid UTF-8: {}", e)));
    }

    if let Some(rest) = bytes.strip_prefix(b"\xFF\xFE") {
        let content = decode_utf16(rest, u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if let Some(rest) = bytes.strip_prefix(b"\xFE\xFF") {
        let content = decode_utf16(rest, u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::InvalidData(format!("invalid UTF-16: {}", e)))
}

/// OOXML container abstraction over a ZIP archive being read.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open an OOXML container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mkdeck::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("deck.pptx")?;
    /// # Ok::<(), mkdeck::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create an OOXML container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML part from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all part names in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// Read and parse `[Content_Types].xml`.
    pub fn read_content_types(&self) -> Result<ContentTypes> {
        ContentTypes::parse(&self.read_xml("[Content_Types].xml")?)
    }

    /// Read the relationships of a part. A missing .rels part yields an empty set.
    pub fn read_relationships(&self, part_path: &str) -> Result<Relationships> {
        self.parse_relationships(&rels_path_for(part_path))
    }

    /// Read package-level relationships (_rels/.rels).
    pub fn read_package_relationships(&self) -> Result<Relationships> {
        self.parse_relationships("_rels/.rels")
    }

    /// Parse core metadata from docProps/core.xml and the application name
    /// from docProps/app.xml.
    pub fn parse_metadata(&self) -> Result<Metadata> {
        let mut meta = Metadata::default();

        if let Ok(xml) = self.read_xml("docProps/core.xml") {
            for (element, text) in leaf_elements(&xml)? {
                match element.as_str() {
                    "title" => meta.title = Some(text),
                    "creator" => meta.author = Some(text),
                    "subject" => meta.subject = Some(text),
                    "description" => meta.description = Some(text),
                    "keywords" => {
                        meta.keywords = text
                            .split([',', ';'])
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect();
                    }
                    "created" => meta.created = Some(text),
                    "modified" => meta.modified = Some(text),
                    "lastModifiedBy" => meta.last_modified_by = Some(text),
                    _ => {}
                }
            }
        }

        if let Ok(xml) = self.read_xml("docProps/app.xml") {
            if let Some((_, text)) = leaf_elements(&xml)?
                .into_iter()
                .find(|(element, _)| element == "Application")
            {
                meta.application = Some(text);
            }
        }

        Ok(meta)
    }

    fn parse_relationships(&self, rels_path: &str) -> Result<Relationships> {
        let content = match self.read_xml(rels_path) {
            Ok(c) => c,
            Err(_) => return Ok(Relationships::new()),
        };

        if content.trim().is_empty() {
            return Ok(Relationships::new());
        }

        let mut rels = Relationships::new();
        let mut reader = quick_xml::Reader::from_str(&content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = String::new();
                    let mut rel_type = String::new();
                    let mut target = String::new();
                    let mut external = false;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => id = attr.unescape_value()?.into_owned(),
                            b"Type" => rel_type = attr.unescape_value()?.into_owned(),
                            b"Target" => target = attr.unescape_value()?.into_owned(),
                            b"TargetMode" => {
                                external = attr.unescape_value()?.eq_ignore_ascii_case("external")
                            }
                            _ => {}
                        }
                    }

                    if !id.is_empty() {
                        rels.add(Relationship {
                            id,
                            rel_type,
                            target,
                            external,
                        });
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Resolve a relationship target relative to the part that owns it.
    pub fn resolve_path(base: &str, relative: &str) -> String {
        if let Some(stripped) = relative.strip_prefix('/') {
            return stripped.to_string();
        }

        let base_path = Path::new(base);
        let base_dir = base_path.parent().unwrap_or(Path::new(""));

        let mut result = base_dir.to_path_buf();
        for component in Path::new(relative).components() {
            match component {
                std::path::Component::ParentDir => {
                    result.pop();
                }
                std::path::Component::Normal(c) => {
                    result.push(c);
                }
                _ => {}
            }
        }

        result.to_string_lossy().replace('\\', "/")
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}

/// Collect (local element name, text) pairs of simple text-only elements.
fn leaf_elements(xml: &str) -> Result<Vec<(String, String)>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pairs = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                current = Some(String::from_utf8_lossy(e.name().local_name().as_ref()).to_string());
            }
            Ok(Event::Text(e)) => {
                if let Some(ref element) = current {
                    pairs.push((element.clone(), e.unescape()?.into_owned()));
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(pairs)
}

/// Writes parts into a new OOXML package.
pub struct PackageWriter<W: Write + Seek> {
    zip: zip::ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Start a package on `writer`.
    ///
    /// Entry timestamps are pinned to the ZIP epoch so equal input yields
    /// byte-identical output.
    pub fn new(writer: W, compression: CompressionMethod) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(compression)
            .last_modified_time(zip::DateTime::default());
        Self {
            zip: zip::ZipWriter::new(writer),
            options,
        }
    }

    /// Write one part.
    pub fn add_part(&mut self, path: &str, content: &str) -> Result<()> {
        trace!("writing part {} ({} bytes)", path, content.len());
        self.zip
            .start_file(path, self.options)
            .map_err(|e| Error::SerializationFailed(format!("{}: {}", path, e)))?;
        self.zip
            .write_all(content.as_bytes())
            .map_err(|e| Error::SerializationFailed(format!("{}: {}", path, e)))
    }

    /// Write the relationships of `part_path`.
    pub fn add_relationships(&mut self, part_path: &str, rels: &Relationships) -> Result<()> {
        self.add_part(&rels_path_for(part_path), &rels.to_xml())
    }

    /// Finish the archive and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.zip
            .finish()
            .map_err(|e| Error::SerializationFailed(e.to_string()))
    }
}
