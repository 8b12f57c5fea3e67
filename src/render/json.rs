//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Presentation;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a presentation to JSON.
pub fn to_json(presentation: &Presentation, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(presentation),
        JsonFormat::Pretty => serde_json::to_string_pretty(presentation),
    };
    json.map_err(|e| Error::SerializationFailed(format!("JSON serialization error: {}", e)))
}

/// Convert a presentation to JSON with default formatting.
pub fn to_json_default(presentation: &Presentation) -> Result<String> {
    to_json(presentation, JsonFormat::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{add_slide, SlideContent};

    fn sample() -> Presentation {
        let mut pres = Presentation::new();
        pres.metadata.title = Some("Test".to_string());
        add_slide(&mut pres, "Agenda", &SlideContent::bullets(["Hello"])).unwrap();
        pres
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Test\""));
        assert!(json.contains("\"text\": \"Hello\""));
        assert!(json.contains("\"layout\": \"TitleAndContent\""));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"title\":\"Test\""));
    }

    #[test]
    fn test_to_json_default() {
        let json = to_json_default(&Presentation::new()).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_presentation_roundtrip() {
        let pres = sample();
        let json = to_json(&pres, JsonFormat::Pretty).unwrap();
        let parsed: Presentation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pres);
    }
}
