//! The Student Assessment & Performance Tracker deck.

use crate::builder::SlideSpec;
use crate::error::Result;
use crate::model::Presentation;
use log::info;

/// File name the deck is written to, relative to the working directory.
pub const OUTPUT_FILENAME: &str = "Student_Assessment_Tracker_Presentation.pptx";

/// Document title stored in the package properties.
pub const DECK_TITLE: &str = "Student Assessment & Performance Tracker";

/// The eight slides of the deck, in presentation order.
pub fn student_tracker_deck() -> Vec<SlideSpec> {
    vec![
        SlideSpec::with_subtitle(
            DECK_TITLE,
            "Team Presentation - January 31, 2026\nModernizing academic performance tracking through automation and analytics.",
        ),
        SlideSpec::with_bullets(
            "Problem Statement",
            [
                "Manual Overhead: Faculty spend excessive time recording and calculating grades manually.",
                "Communication Gap: Parents often lack real-time updates on their child's progress.",
                "Data Fragmentation: Hard to track long-term performance trends across multiple assessments.",
                "Error Proneness: High risk of errors in manual mark entry and trend analysis.",
            ],
        ),
        SlideSpec::with_bullets(
            "Proposed Solution",
            [
                "Full-Stack Platform: A unified portal for Admins, Faculty, Students, and Parents.",
                "Automation First: Automated grading, trend analysis, and multi-channel notifications.",
                "Scalability: Bulk upload functionality for large classrooms.",
                "Modern UI: Clean, intuitive interface for all user roles.",
            ],
        ),
        SlideSpec::with_bullets(
            "Technical Architecture",
            [
                "Frontend: React (SPA) for high reactivity and modern UI.",
                "Backend: Spring Boot for robust business logic and secure API management.",
                "Database: MySQL for structured data storage.",
                "Integrations: Twilio (SMS) and SMTP (Email) for automated communication.",
            ],
        ),
        SlideSpec::with_bullets(
            "Key Modules",
            [
                "Admin: The management hub (Users, Subjects, Departments).",
                "Faculty: The data engine (Marks Entry, Bulk Upload, Grade Calc).",
                "Student Dashboard: The insights portal (Scorecards, Progress Trends).",
            ],
        ),
        SlideSpec::with_bullets(
            "Unique Selling Points (USP)",
            [
                "Automatic Trend Analysis: Comparing performance across time, not just individual scores.",
                "Hybrid Entry: Flexibility of manual entry or high-speed bulk CSV uploads.",
                "Multi-Stakeholder Alerts: Keeping both students and parents in the loop instantly.",
            ],
        ),
        SlideSpec::with_bullets(
            "Results & Impact",
            [
                "80% Reduction in manual processing time for faculty.",
                "Instant Transparency for parents and students.",
                "Data-Driven Insights to help identify students needing extra support.",
            ],
        ),
        SlideSpec::with_bullets(
            "Conclusion & Future Scope",
            [
                "Conclusion: A scalable, modern solution for academic data management.",
                "Future Scope: AI-driven performance predictions and integration with LMS systems.",
            ],
        ),
    ]
}

/// Apply `specs` in order to a new presentation on the default template.
pub fn build_presentation(specs: &[SlideSpec]) -> Result<Presentation> {
    let mut presentation = Presentation::new();
    for spec in specs {
        spec.apply(&mut presentation)?;
    }
    info!("built presentation with {} slides", presentation.slide_count());
    Ok(presentation)
}

/// Build the Student Assessment Tracker deck with its document title set.
pub fn build_student_tracker() -> Result<Presentation> {
    let mut presentation = build_presentation(&student_tracker_deck())?;
    presentation.metadata.title = Some(DECK_TITLE.to_string());
    Ok(presentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutKind;

    #[test]
    fn test_deck_has_eight_slides_in_order() {
        let pres = build_student_tracker().unwrap();
        assert_eq!(pres.slide_count(), 8);
        assert_eq!(
            pres.titles(),
            vec![
                "Student Assessment & Performance Tracker",
                "Problem Statement",
                "Proposed Solution",
                "Technical Architecture",
                "Key Modules",
                "Unique Selling Points (USP)",
                "Results & Impact",
                "Conclusion & Future Scope",
            ]
        );
    }

    #[test]
    fn test_deck_layouts() {
        let pres = build_student_tracker().unwrap();
        assert_eq!(pres.slide(0).unwrap().layout, LayoutKind::TitleSlide);
        assert!(pres.slides()[1..]
            .iter()
            .all(|s| s.layout == LayoutKind::TitleAndContent));
    }

    #[test]
    fn test_bullet_counts() {
        let pres = build_student_tracker().unwrap();
        let counts: Vec<usize> = pres
            .slides()
            .iter()
            .map(|s| s.body_paragraphs().len())
            .collect();
        assert_eq!(counts, vec![0, 4, 4, 4, 3, 3, 3, 2]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build_student_tracker().unwrap();
        let second = build_student_tracker().unwrap();
        assert_eq!(first, second);
    }
}
