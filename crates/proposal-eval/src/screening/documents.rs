//! Heuristic review of uploaded supporting documents.
//!
//! The reviewer never touches gate or score logic: its only contract with
//! the evaluation flow is that an overall `ok` verdict lets the caller set
//! the supporting-documents flag to "yes" before re-evaluating.

use mime::Mime;
use serde::{Deserialize, Serialize};

/// Domain terms an official evidence file is expected to carry in its name.
pub const FILENAME_KEYWORDS: [&str; 8] = [
    "decision",
    "formation",
    "funding",
    "circular",
    "minutes",
    "approval",
    "letter",
    "memo",
];

/// Metadata for one uploaded file: name, declared media type, byte size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub size: u64,
}

/// Per-file assessment echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAssessment {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub keyword_hit: bool,
}

/// One pass/fail heuristic with a short operator-facing note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewCheck {
    pub rule: &'static str,
    pub pass: bool,
    pub info: String,
}

/// Aggregate review of an uploaded file set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReview {
    pub ok: bool,
    pub total_files: usize,
    pub pdf_count: usize,
    pub image_count: usize,
    pub keyword_hits: usize,
    pub items: Vec<FileAssessment>,
    pub checks: Vec<ReviewCheck>,
}

/// Classify a non-empty file set. Rejecting an empty upload is the HTTP
/// boundary's job; this function is total over whatever it is given.
pub fn review(files: &[FileDescriptor]) -> DocumentReview {
    let mut pdf_count = 0;
    let mut image_count = 0;
    let mut keyword_hits = 0;
    let mut items = Vec::with_capacity(files.len());

    for file in files {
        if is_pdf(&file.media_type) {
            pdf_count += 1;
        }
        if is_image(&file.media_type) {
            image_count += 1;
        }
        let keyword_hit = has_keyword(&file.name);
        if keyword_hit {
            keyword_hits += 1;
        }
        items.push(FileAssessment {
            name: file.name.clone(),
            media_type: file.media_type.clone(),
            size: file.size,
            keyword_hit,
        });
    }

    let checks = vec![
        ReviewCheck {
            rule: "accepted formats (PDF or images)",
            pass: pdf_count + image_count == files.len(),
            info: format!("pdf={pdf_count}, images={image_count}"),
        },
        ReviewCheck {
            rule: "official PDF present",
            pass: pdf_count >= 1,
            info: "at least one official PDF document expected".to_string(),
        },
        ReviewCheck {
            rule: "decision/funding/circular evidence",
            pass: keyword_hits >= 1,
            info: "recognized via file names".to_string(),
        },
    ];

    let ok = checks.iter().all(|check| check.pass);

    DocumentReview {
        ok,
        total_files: files.len(),
        pdf_count,
        image_count,
        keyword_hits,
        items,
        checks,
    }
}

fn is_pdf(media_type: &str) -> bool {
    media_type
        .parse::<Mime>()
        .map(|mime| mime.subtype() == mime::PDF)
        .unwrap_or(false)
}

fn is_image(media_type: &str) -> bool {
    media_type
        .parse::<Mime>()
        .map(|mime| mime.type_() == mime::IMAGE)
        .unwrap_or(false)
}

fn has_keyword(name: &str) -> bool {
    let lower = name.to_lowercase();
    FILENAME_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
