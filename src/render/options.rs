//! Rendering options configuration.

/// Options for rendering presentation outlines.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Show each slide's layout name
    pub include_layout: bool,

    /// Character for unordered list markers
    pub list_marker: char,

    /// Put a horizontal rule between slides (Markdown only)
    pub slide_separators: bool,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            include_layout: false,
            list_marker: '-',
            slide_separators: false,
            escape_special_chars: false,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable YAML frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Show layout names.
    pub fn with_layout(mut self, include: bool) -> Self {
        self.include_layout = include;
        self
    }

    /// Set the list marker.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Separate slides with horizontal rules.
    pub fn with_separators(mut self, separators: bool) -> Self {
        self.slide_separators = separators;
        self
    }

    /// Escape Markdown special characters in slide text.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RenderOptions::default();
        assert!(!opts.include_frontmatter);
        assert!(!opts.include_layout);
        assert_eq!(opts.list_marker, '-');
    }

    #[test]
    fn test_builder_pattern() {
        let opts = RenderOptions::new()
            .with_frontmatter(true)
            .with_layout(true)
            .with_list_marker('*')
            .with_separators(true);

        assert!(opts.include_frontmatter);
        assert!(opts.include_layout);
        assert_eq!(opts.list_marker, '*');
        assert!(opts.slide_separators);
    }
}
