//! Package writing options.

/// ZIP compression used for package entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Deflate-compressed entries (what PowerPoint writes)
    #[default]
    Deflated,
    /// Uncompressed entries
    Stored,
}

impl From<Compression> for zip::CompressionMethod {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Fonts and name of the theme written into the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Theme name
    pub name: String,
    /// Heading font (`+mj-lt`)
    pub major_font: String,
    /// Body font (`+mn-lt`)
    pub minor_font: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            name: "Office Theme".to_string(),
            major_font: "Calibri".to_string(),
            minor_font: "Calibri".to_string(),
        }
    }
}

/// Options for writing a presentation package.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Entry compression
    pub compression: Compression,

    /// Application name recorded in docProps/app.xml when the
    /// presentation's metadata does not set one
    pub application: String,

    /// Theme settings
    pub theme: ThemeOptions,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            application: "mkdeck".to_string(),
            theme: ThemeOptions::default(),
        }
    }
}

impl WriteOptions {
    /// Create default write options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set entry compression.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set the application name.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// Set heading and body fonts.
    pub fn with_fonts(mut self, major: impl Into<String>, minor: impl Into<String>) -> Self {
        self.theme.major_font = major.into();
        self.theme.minor_font = minor.into();
        self
    }
}
