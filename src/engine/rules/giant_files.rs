use crate::engine::{Severity, Violation};
use serde_json::json;

pub fn detect_giant_files(file_path: &str, content: &str) -> Vec<Violation> {
    let line_count = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .count();

    if line_count < 200 {
        return vec![];
    }

    let (severity, message) = if line_count >= 500 {
        (
            Severity::Brutal,
            format!("Architectural war crime: {line_count} lines of JavaScript chaos"),
        )
    } else if line_count >= 300 {
        (
            Severity::Moderate,
            format!("JavaScript novel detected: {line_count} lines of callback spaghetti"),
        )
    } else {
        (
            Severity::Gentle,
            format!("File bloat detected: {line_count} lines need refactoring"),
        )
    };

    // The line field carries the count itself, not a source position.
    vec![Violation::new(
        "giant_file",
        file_path,
        line_count,
        severity,
        message,
        json!({ "line_count": line_count }),
    )]
}
