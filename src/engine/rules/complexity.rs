use super::line_at_offset;
use crate::engine::{Severity, Violation};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+((?-u:\w)+)\s*\(").expect("function pattern is valid")
});

const DECISION_POINTS: [&str; 8] = [
    "if", "else", "for", "while", "switch", "case", "try", "catch",
];

static DECISION_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DECISION_POINTS
        .iter()
        .map(|kw| {
            Regex::new(&format!(r"(?-u:\b){kw}(?-u:\b)")).expect("keyword pattern is valid")
        })
        .collect()
});

/// Line-based nesting estimate: a line mentioning `function` or `=>` opens a
/// level, surplus closing braces on a line close that many.
pub fn detect_callback_hell(file_path: &str, content: &str) -> Vec<Violation> {
    let mut max_nesting = 0usize;
    let mut current_nesting = 0usize;

    for line in content.split('\n') {
        if line.contains("function") || line.contains("=>") {
            current_nesting += 1;
            max_nesting = max_nesting.max(current_nesting);
        }

        let open = line.matches('{').count();
        let close = line.matches('}').count();
        if close > open {
            current_nesting = current_nesting.saturating_sub(close - open);
        }
    }

    let (severity, message) = if max_nesting > 7 {
        (
            Severity::Brutal,
            format!(
                "Callback hell detected: {max_nesting} levels of nesting is async nightmare fuel"
            ),
        )
    } else if max_nesting > 4 {
        (
            Severity::Moderate,
            format!("Nested callbacks: {max_nesting} levels suggests promise refactoring needed"),
        )
    } else {
        return vec![];
    };

    vec![Violation::new(
        "callback_hell",
        file_path,
        1,
        severity,
        message,
        json!({ "max_nesting": max_nesting }),
    )]
}

pub fn detect_complex_functions(file_path: &str, content: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for caps in FUNCTION_RE.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(body) = extract_function_body(content, whole.start()) else {
            continue;
        };

        let function_lines = body.split('\n').count();
        let complexity = calculate_complexity(body);

        if complexity > 10 || function_lines > 50 {
            violations.push(complexity_violation(
                file_path,
                line_at_offset(content, whole.start()),
                name.as_str(),
                complexity,
                function_lines,
            ));
        }
    }

    violations
}

/// Text from `start` up to (not including) the brace that brings the depth
/// back to zero. Braces inside strings and comments are counted too.
fn extract_function_body(content: &str, start: usize) -> Option<&str> {
    let mut depth = 0i64;
    let mut found_start = false;

    for (i, b) in content.bytes().enumerate().skip(start) {
        match b {
            b'{' => {
                depth += 1;
                found_start = true;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 && found_start {
                    return Some(&content[start..i]);
                }
            }
            _ => {}
        }
    }

    None
}

fn calculate_complexity(body: &str) -> usize {
    1 + DECISION_RES
        .iter()
        .map(|re| re.find_iter(body).count())
        .sum::<usize>()
}

fn complexity_violation(
    file_path: &str,
    line_number: usize,
    name: &str,
    complexity: usize,
    function_lines: usize,
) -> Violation {
    let (severity, message) = if complexity > 15 || function_lines > 80 {
        (
            Severity::Brutal,
            format!(
                "Function '{name}' is a complexity nightmare: {complexity} branches, {function_lines} lines"
            ),
        )
    } else {
        (
            Severity::Moderate,
            format!(
                "Function '{name}' is getting complex: {complexity} branches, {function_lines} lines"
            ),
        )
    };

    Violation::new(
        "complex_function",
        file_path,
        line_number,
        severity,
        message,
        json!({ "complexity": complexity, "lines": function_lines }),
    )
}
