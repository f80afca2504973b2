mod complexity;
mod giant_files;
mod imports;
mod react;

use super::Violation;

/// Shared shape of every rule: (file path, full content) -> violations.
pub type RuleFn = fn(&str, &str) -> Vec<Violation>;

/// The rule set, in the order results are reported.
pub const RULES: [RuleFn; 5] = [
    giant_files::detect_giant_files,
    imports::detect_import_ceremony,
    complexity::detect_callback_hell,
    complexity::detect_complex_functions,
    react::detect_react_antipatterns,
];

/// 1-based line number of a byte offset into `content`.
pub(crate) fn line_at_offset(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at_offset() {
        let content = "one\ntwo\nthree";
        assert_eq!(line_at_offset(content, 0), 1);
        assert_eq!(line_at_offset(content, 3), 1);
        assert_eq!(line_at_offset(content, 4), 2);
        assert_eq!(line_at_offset(content, content.len()), 3);
    }
}
