use super::line_at_offset;
use crate::engine::{Severity, Violation};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

static INLINE_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?R)\{\s*\{.*?\}\s*\}").expect("inline object pattern is valid")
});

static INLINE_ARROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?R)\{\s*\(.*?\)\s*=>\s*.*?\}").expect("inline arrow pattern is valid")
});

/// Flags objects and arrow functions created inline in markup expressions.
/// Only runs when the path mentions `tsx` or `jsx` anywhere.
pub fn detect_react_antipatterns(file_path: &str, content: &str) -> Vec<Violation> {
    if !file_path.contains("tsx") && !file_path.contains("jsx") {
        return vec![];
    }

    let objects = INLINE_OBJECT_RE
        .find_iter(content)
        .map(|m| inline_violation(file_path, content, m.start(), "object"));
    let functions = INLINE_ARROW_RE
        .find_iter(content)
        .map(|m| inline_violation(file_path, content, m.start(), "function"));

    objects.chain(functions).collect()
}

fn inline_violation(file_path: &str, content: &str, offset: usize, kind: &str) -> Violation {
    Violation::new(
        "react_inline_creation",
        file_path,
        line_at_offset(content, offset),
        Severity::Moderate,
        format!("Inline {kind} creation in JSX causes unnecessary re-renders"),
        json!({ "type": kind }),
    )
}
