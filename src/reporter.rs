use crate::engine::{Analysis, Severity, Violation};
use colored::*;
use std::time::Instant;

/// Overall judgement of a run, picked from the worst severity present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Tolerable,
    NeedsWork,
    Earthquake,
}

impl Verdict {
    pub fn from_violations(violations: &[Violation], brutal: bool) -> Self {
        match violations.iter().map(|v| v.severity).max() {
            None => Verdict::Clean,
            Some(_) if brutal => Verdict::Earthquake,
            Some(Severity::Brutal) => Verdict::Earthquake,
            Some(Severity::Moderate) => Verdict::NeedsWork,
            Some(Severity::Gentle) => Verdict::Tolerable,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Clean => "No violations found. Suspiciously clean code... 🤔",
            Verdict::Tolerable => "Minor sins detected. Your code is mostly tolerable",
            Verdict::NeedsWork => "Your code needs work",
            Verdict::Earthquake => "Your code looks like it was written during an earthquake",
        }
    }
}

fn bucket_title(severity: Severity) -> ColoredString {
    match severity {
        Severity::Brutal => "💀 BRUTAL VIOLATIONS".bright_red().bold(),
        Severity::Moderate => "⚠️  MODERATE VIOLATIONS".yellow().bold(),
        Severity::Gentle => "👀 GENTLE VIOLATIONS".blue().bold(),
    }
}

fn paint(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Brutal => text.bright_red(),
        Severity::Moderate => text.yellow(),
        Severity::Gentle => text.blue(),
    }
}

/// Violations of one severity, in the order the engine produced them.
pub fn bucket(violations: &[Violation], severity: Severity) -> Vec<&Violation> {
    violations.iter().filter(|v| v.severity == severity).collect()
}

pub fn print_human_report(analysis: &Analysis, start_time: Instant, brutal: bool) {
    println!(
        "{} {} v{}",
        "🔍".bold(),
        "SHITLINT ANALYSIS".bright_red().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", "Your code is shit. Here's why.".italic());
    println!();

    let violations = &analysis.violations;

    for severity in [Severity::Brutal, Severity::Moderate, Severity::Gentle] {
        let entries = bucket(violations, severity);
        if entries.is_empty() {
            continue;
        }

        println!("{} ({})", bucket_title(severity), entries.len());
        for v in entries {
            println!(
                "  {} [{}] {}",
                format!("{}:{}", v.file_path, v.line_number).bold(),
                paint(severity, v.rule),
                paint(severity, &v.message)
            );
            if brutal {
                println!("    {} {}", "Metrics:".dimmed(), v.context.to_string().dimmed());
            }
        }
        println!();
    }

    let count = |severity| bucket(violations, severity).len();
    let elapsed = start_time.elapsed().as_secs_f64();

    let summary_parts = [
        format!("{} scanned", analysis.files_scanned),
        format!("{} brutal", count(Severity::Brutal))
            .bright_red()
            .to_string(),
        format!("{} moderate", count(Severity::Moderate))
            .yellow()
            .to_string(),
        format!("{} gentle", count(Severity::Gentle))
            .blue()
            .to_string(),
        format!("{:.2}s", elapsed),
    ];

    let separator = format!(" {} ", "·".dimmed());
    println!("Done: {}", summary_parts.join(separator.as_str()));

    let verdict = Verdict::from_violations(violations, brutal);
    let line = format!("VERDICT: {}", verdict.message());
    let line = match verdict {
        Verdict::Clean => line.green(),
        Verdict::Tolerable => line.blue(),
        Verdict::NeedsWork => line.yellow(),
        Verdict::Earthquake => line.bright_red().bold(),
    };
    println!("{}", line);
}

pub fn print_json_report(analysis: &Analysis) {
    match serde_json::to_string_pretty(&analysis.violations) {
        Ok(json_output) => println!("{}", json_output),
        Err(e) => print_json_error(&format!("Failed to serialize results to JSON: {}", e)),
    }
}

pub fn print_json_error(msg: &str) {
    let error_json = serde_json::json!({
        "error": msg
    });
    println!("{:#}", error_json);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violation(rule: &'static str, severity: Severity) -> Violation {
        Violation::new(rule, "a.js", 1, severity, format!("{rule} fired"), json!({}))
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_violations(&[], false), Verdict::Clean);
        assert_eq!(
            Verdict::from_violations(&[violation("giant_file", Severity::Gentle)], false),
            Verdict::Tolerable
        );
        assert_eq!(
            Verdict::from_violations(
                &[
                    violation("giant_file", Severity::Gentle),
                    violation("callback_hell", Severity::Moderate)
                ],
                false
            ),
            Verdict::NeedsWork
        );
        assert_eq!(
            Verdict::from_violations(
                &[
                    violation("callback_hell", Severity::Moderate),
                    violation("import_ceremony", Severity::Brutal)
                ],
                false
            ),
            Verdict::Earthquake
        );
    }

    #[test]
    fn test_brutal_mode_escalates_but_keeps_clean() {
        assert_eq!(Verdict::from_violations(&[], true), Verdict::Clean);
        assert_eq!(
            Verdict::from_violations(&[violation("giant_file", Severity::Gentle)], true),
            Verdict::Earthquake
        );
    }

    #[test]
    fn test_bucket_preserves_engine_order() {
        let violations = vec![
            violation("first", Severity::Moderate),
            violation("loud", Severity::Brutal),
            violation("second", Severity::Moderate),
            violation("third", Severity::Moderate),
        ];
        let rules: Vec<_> = bucket(&violations, Severity::Moderate)
            .iter()
            .map(|v| v.rule)
            .collect();
        assert_eq!(rules, vec!["first", "second", "third"]);
        assert!(bucket(&violations, Severity::Gentle).is_empty());
    }

    #[test]
    fn test_violation_json_shape() {
        let v = Violation::new(
            "giant_file",
            "src/app.js",
            612,
            Severity::Brutal,
            "big".to_string(),
            json!({ "line_count": 612 }),
        );
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({
                "rule": "giant_file",
                "file_path": "src/app.js",
                "line_number": 612,
                "severity": "brutal",
                "message": "big",
                "context": { "line_count": 612 }
            })
        );
    }
}
