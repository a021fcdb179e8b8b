//! Interactive read-evaluate-print loop used by the `pwd-analyzer` binary.
//!
//! Reads one password per line, evaluates it and writes either a text report
//! or one JSON object per line. The password itself is never echoed: text
//! reports mask it with one `*` per character.

use std::io::{self, BufRead, Write};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::evaluator::PasswordAnalyzer;
use crate::types::{PasswordEvaluation, StrengthLevel};

const QUIT_COMMAND: &str = "quit";

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Banner, prompts and a human-readable report.
    #[default]
    Text,
    /// One JSON object per evaluated password, nothing else.
    Json,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub skipped_empty: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    length: usize,
    score: u8,
    strength: StrengthLevel,
    message: &'static str,
    feedback: &'a [String],
}

pub struct Session<'a> {
    analyzer: &'a PasswordAnalyzer,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    pub fn new(analyzer: &'a PasswordAnalyzer, format: OutputFormat) -> Self {
        Self { analyzer, format }
    }

    /// Runs until `quit` (any case) or end of input.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let text = self.format == OutputFormat::Text;

        if text {
            write_banner(&mut output)?;
        }

        let mut line = String::new();
        loop {
            if text {
                write!(output, "\n{}\n\nEnter a password to analyze: ", "-".repeat(30))?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                #[cfg(feature = "tracing")]
                tracing::debug!("end of input");
                if text {
                    writeln!(output)?;
                    write_farewell(&mut output)?;
                }
                break;
            }
            strip_line_ending(&mut line);

            if line.to_lowercase() == QUIT_COMMAND {
                if text {
                    write_farewell(&mut output)?;
                }
                break;
            }

            if line.is_empty() {
                summary.skipped_empty += 1;
                if text {
                    writeln!(output, "Please enter a password")?;
                }
                continue;
            }

            let password = SecretString::new(std::mem::take(&mut line).into());
            let evaluation = self.analyzer.evaluate(&password);
            let length = password.expose_secret().chars().count();
            summary.evaluated += 1;

            match self.format {
                OutputFormat::Text => write_text_report(&mut output, &evaluation, length)?,
                OutputFormat::Json => write_json_report(&mut output, &evaluation, length)?,
            }
        }

        output.flush()?;
        Ok(summary)
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "PASSWORD STRENGTH ANALYZER")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nAnalyze the strength of your password (type 'quit' to exit)")
}

fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThank you for using the Password strength analyzer!")
}

/// Writes the human-readable report for one evaluation.
pub fn write_text_report<W: Write>(
    out: &mut W,
    evaluation: &PasswordEvaluation,
    length: usize,
) -> io::Result<()> {
    let level = evaluation.strength();
    writeln!(out, "\nAnalysis Results")?;
    writeln!(out, "Password: {}", "*".repeat(length))?;
    writeln!(out, "Score: {}", evaluation.score)?;
    writeln!(out, "Strength: {}", level)?;
    writeln!(out, "Message: {}", level.message())?;
    writeln!(out, "\nDETAILED FEEDBACK:")?;
    for item in &evaluation.feedback {
        writeln!(out, " {item}")?;
    }
    Ok(())
}

/// Writes one JSON line for one evaluation.
pub fn write_json_report<W: Write>(
    out: &mut W,
    evaluation: &PasswordEvaluation,
    length: usize,
) -> io::Result<()> {
    let level = evaluation.strength();
    let report = JsonReport {
        length,
        score: evaluation.score.value(),
        strength: level,
        message: level.message(),
        feedback: &evaluation.feedback,
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, format: OutputFormat) -> (String, SessionSummary) {
        let analyzer = PasswordAnalyzer::default();
        let mut out = Vec::new();
        let summary = Session::new(&analyzer, format)
            .run(Cursor::new(input), &mut out)
            .expect("in-memory io does not fail");
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        for quit in ["quit\n", "QUIT\n", "Quit\r\n"] {
            let (out, summary) = run(&format!("{quit}Passw0rd!\n"), OutputFormat::Text);
            assert_eq!(summary.evaluated, 0, "{quit:?}");
            assert!(out.contains("Thank you for using the Password strength analyzer!"));
        }
    }

    #[test]
    fn test_empty_line_reprompts() {
        let (out, summary) = run("\nPassw0rd!\nquit\n", OutputFormat::Text);
        assert_eq!(summary.skipped_empty, 1);
        assert_eq!(summary.evaluated, 1);
        assert!(out.contains("Please enter a password"));
        assert_eq!(out.matches("Enter a password to analyze: ").count(), 3);
    }

    #[test]
    fn test_text_report_masks_password() {
        let (out, _) = run("Passw0rd!\n", OutputFormat::Text);
        assert!(out.starts_with(&"=".repeat(50)));
        assert!(out.contains("Password: *********\n"));
        assert!(out.contains("Score: 95/100\n"));
        assert!(out.contains("Strength: STRONG\n"));
        assert!(out.contains("Message: Excellent! This is a secure password.\n"));
        assert!(out.contains("DETAILED FEEDBACK:\n Password Length: 8+ characters (Good)\n"));
        assert!(!out.contains("Passw0rd!"));
    }

    #[test]
    fn test_mask_counts_characters() {
        let (out, _) = run("pässwörd\n", OutputFormat::Text);
        assert!(out.contains("Password: ********\n"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (out, summary) = run("password", OutputFormat::Text);
        assert_eq!(summary.evaluated, 1);
        assert!(out.contains("Score: 35/100"));
        assert!(out.contains("Strength: WEAK"));
        assert!(out.trim_end().ends_with("Thank you for using the Password strength analyzer!"));
    }

    #[test]
    fn test_whitespace_is_part_of_password() {
        let (out, _) = run("  \n", OutputFormat::Text);
        assert!(out.contains("Password: **\n"));
    }

    #[test]
    fn test_json_output_one_object_per_password() {
        let input = "password\n\nTr0ub4dor&3xtra\nquit\nignored\n";
        let (out, summary) = run(input, OutputFormat::Json);
        assert_eq!(summary.evaluated, 2);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["score"], 35);
        assert_eq!(first["strength"], "WEAK");
        assert_eq!(first["length"], 8);
        assert_eq!(first["feedback"].as_array().unwrap().len(), 6);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["score"], 100);
        assert_eq!(second["strength"], "STRONG");
        assert_eq!(second["message"], "Excellent! This is a secure password.");
        assert!(!out.contains("Tr0ub4dor"));
    }
}
