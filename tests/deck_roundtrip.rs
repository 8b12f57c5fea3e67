//! End-to-end tests: build the Student Assessment Tracker deck, write it to
//! disk and read it back.
//!
//! Run with: cargo test --test deck_roundtrip

use mkdeck::{deck, Error, LayoutKind, Presentation, WriteOptions};
use std::fs;
use tempfile::TempDir;

fn generate_into(dir: &TempDir) -> (std::path::PathBuf, Presentation) {
    let path = dir.path().join(deck::OUTPUT_FILENAME);
    let built = mkdeck::generate(&path, &WriteOptions::default()).unwrap();
    (path, built)
}

#[test]
fn test_saved_deck_has_eight_slides_in_order() {
    let dir = TempDir::new().unwrap();
    let (path, _) = generate_into(&dir);

    let parsed = Presentation::open(&path).unwrap();
    assert_eq!(parsed.slide_count(), 8);

    let expected: Vec<String> = deck::student_tracker_deck()
        .into_iter()
        .map(|spec| spec.title)
        .collect();
    assert_eq!(parsed.titles(), expected);
}

#[test]
fn test_saved_text_is_verbatim() {
    let dir = TempDir::new().unwrap();
    let (path, built) = generate_into(&dir);
    let parsed = Presentation::open(&path).unwrap();

    for (read, written) in parsed.slides().iter().zip(built.slides()) {
        assert_eq!(read.title_text(), written.title_text());
        assert_eq!(read.subtitle_text(), written.subtitle_text());
        assert_eq!(read.body_paragraphs(), written.body_paragraphs());
        assert_eq!(read.layout, written.layout);
    }
}

#[test]
fn test_title_slide_subtitle_keeps_line_break() {
    let dir = TempDir::new().unwrap();
    let (path, _) = generate_into(&dir);
    let parsed = Presentation::open(&path).unwrap();

    let first = parsed.slide(0).unwrap();
    assert_eq!(first.layout, LayoutKind::TitleSlide);
    assert_eq!(
        first.title_text().as_deref(),
        Some("Student Assessment & Performance Tracker")
    );
    assert_eq!(
        first.subtitle_text().as_deref(),
        Some(
            "Team Presentation - January 31, 2026\n\
             Modernizing academic performance tracking through automation and analytics."
        )
    );
    assert!(first.body_paragraphs().is_empty());
}

#[test]
fn test_key_modules_slide() {
    let dir = TempDir::new().unwrap();
    let (path, _) = generate_into(&dir);
    let parsed = Presentation::open(&path).unwrap();

    let slide = parsed.slide(4).unwrap();
    assert_eq!(slide.title_text().as_deref(), Some("Key Modules"));
    assert_eq!(slide.layout, LayoutKind::TitleAndContent);
    assert_eq!(
        slide.body_paragraphs(),
        vec![
            "Admin: The management hub (Users, Subjects, Departments).",
            "Faculty: The data engine (Marks Entry, Bulk Upload, Grade Calc).",
            "Student Dashboard: The insights portal (Scorecards, Progress Trends).",
        ]
    );
    assert!(slide.subtitle_text().is_none());
}

#[test]
fn test_generation_is_idempotent() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let (path_a, _) = generate_into(&first);
    let (path_b, _) = generate_into(&second);

    assert_eq!(fs::read(&path_a).unwrap(), fs::read(&path_b).unwrap());
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(deck::OUTPUT_FILENAME);
    fs::write(&path, vec![0u8; 1 << 20]).unwrap();

    mkdeck::generate(&path, &WriteOptions::default()).unwrap();
    let parsed = Presentation::open(&path).unwrap();
    assert_eq!(parsed.slide_count(), 8);
}

#[test]
fn test_missing_directory_is_serialization_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("deck.pptx");

    let err = mkdeck::generate(&path, &WriteOptions::default()).unwrap_err();
    assert!(matches!(err, Error::SerializationFailed(_)));
    assert!(!path.exists());
}

#[test]
fn test_stored_and_deflated_read_the_same() {
    let dir = TempDir::new().unwrap();
    let deflated = dir.path().join("deflated.pptx");
    let stored = dir.path().join("stored.pptx");

    mkdeck::generate(&deflated, &WriteOptions::default()).unwrap();
    mkdeck::generate(
        &stored,
        &WriteOptions::new().with_compression(mkdeck::Compression::Stored),
    )
    .unwrap();

    let a = Presentation::open(&deflated).unwrap();
    let b = Presentation::open(&stored).unwrap();
    assert_eq!(a.slides(), b.slides());
    assert!(fs::metadata(&stored).unwrap().len() > fs::metadata(&deflated).unwrap().len());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_save_async() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("async.pptx");

    let pres = deck::build_student_tracker().unwrap();
    pres.save_async(&path).await.unwrap();

    assert_eq!(fs::read(&path).unwrap(), pres.to_bytes().unwrap());
}
