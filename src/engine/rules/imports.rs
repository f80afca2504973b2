use crate::engine::{Severity, Violation};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?mR)^import\s+.*?from\s+['"].*?['"];?$"#).expect("import pattern is valid")
});

static REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?R)require\s*\(['"].*?['"]\)"#).expect("require pattern is valid")
});

pub fn detect_import_ceremony(file_path: &str, content: &str) -> Vec<Violation> {
    let imports: Vec<&str> = IMPORT_RE
        .find_iter(content)
        .chain(REQUIRE_RE.find_iter(content))
        .map(|m| m.as_str())
        .collect();
    let import_count = imports.len();

    if import_count < 15 {
        return vec![];
    }

    let (severity, message) = if import_count >= 25 {
        (
            Severity::Brutal,
            format!("Import addiction detected: {import_count} dependencies is npm dependency hell"),
        )
    } else {
        (
            Severity::Moderate,
            format!("Import ceremony: {import_count} imports suggests tight coupling"),
        )
    };

    vec![Violation::new(
        "import_ceremony",
        file_path,
        1,
        severity,
        message,
        json!({ "import_count": import_count, "imports": imports }),
    )]
}
