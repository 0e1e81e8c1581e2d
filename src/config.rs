//! Command-line options shared by the interactive and one-shot binaries.

use crate::report::{ReportFormat, ReportOptions};
use std::io::{self, Write};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub show_help: bool,
    pub show_version: bool,
    pub sequence: Option<String>,
    pub json: bool,
    pub breakdown: bool,
    pub sequences: Vec<String>,
}

impl CliArgs {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: if self.json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            },
            breakdown: self.breakdown,
        }
    }
}

pub fn interactive_help_text() -> &'static str {
    "Usage:\n  \
abc_census [--help|-h] [--version|-V]\n  \
abc_census [--sequence SEQ] [--breakdown] [--json]\n\n  \
Prompts for sequences over ABCabc until 'no' is entered.\n  \
With --sequence the same sequence is analyzed on every round."
}

pub fn oneshot_help_text() -> &'static str {
    "Usage:\n  \
abc_census_cli [--help|-h] [--version|-V]\n  \
abc_census_cli [--breakdown] [--json] SEQUENCE...\n\n  \
Spaces and commas inside a SEQUENCE are ignored."
}

/// Usage errors go to stderr in both binaries: the message, then the help text.
pub fn write_usage_error<E: Write>(err: &mut E, message: &str, help: &str) -> io::Result<()> {
    writeln!(err, "{message}")?;
    writeln!(err, "{help}")
}

/// Parses arguments without the program name.
pub fn parse_cli_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--help" | "-h" => {
                parsed.show_help = true;
                idx += 1;
            }
            "--version" | "-V" => {
                parsed.show_version = true;
                idx += 1;
            }
            "--json" => {
                parsed.json = true;
                idx += 1;
            }
            "--breakdown" => {
                parsed.breakdown = true;
                idx += 1;
            }
            "--sequence" => {
                if idx + 1 >= args.len() {
                    return Err("Missing SEQ after --sequence".to_string());
                }
                parsed.sequence = Some(args[idx + 1].clone());
                idx += 2;
            }
            "--" => {
                parsed.sequences.extend(args[idx + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option '{arg}'"));
            }
            seq => {
                parsed.sequences.push(seq.to_string());
                idx += 1;
            }
        }
    }
    Ok(parsed)
}
