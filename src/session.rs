//! Interactive prompt loop: read a sequence, report on it, ask to continue.

use crate::error::CensusError;
use crate::report::{ReportOptions, write_report};
use crate::sequence::Sequence;
use crate::statistics::analyze;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

pub const SEQUENCE_PROMPT: &str = "Please enter the sequence: ";
pub const CONTINUE_PROMPT: &str =
    "Press the enter key if you want to enter another sequence, or type 'no' to exit: ";
pub const INVALID_MESSAGE: &str =
    "Invalid sequence. Please try again using only valid sequence characters (ex: ABCabc)";
pub const GOODBYE_MESSAGE: &str = "Exiting the program. Goodbye!";
pub const INTERRUPTED_MESSAGE: &str = "Program interrupted. Exiting gracefully.";

/// What a prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input, CensusError>;
}

/// Terminal line editor with history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, CensusError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input, CensusError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SequenceSource {
    #[default]
    Prompt,
    /// Same raw sequence every round.
    Fixed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub source: SequenceSource,
    pub report: ReportOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub analyzed: usize,
    pub rejected: usize,
}

/// Farewell line for a prompt that ended without input.
fn write_farewell<W: Write>(out: &mut W, input: &Input) -> Result<(), CensusError> {
    match input {
        Input::Interrupted => writeln!(out, "{INTERRUPTED_MESSAGE}")?,
        Input::Eof | Input::Line(_) => writeln!(out, "{GOODBYE_MESSAGE}")?,
    }
    Ok(())
}

pub fn run_session<R: LineReader, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &SessionConfig,
) -> Result<SessionSummary, CensusError> {
    let mut summary = SessionSummary::default();
    loop {
        let raw = match &config.source {
            SequenceSource::Fixed(raw) => raw.clone(),
            SequenceSource::Prompt => match reader.read_line(SEQUENCE_PROMPT)? {
                Input::Line(line) => line,
                other => {
                    write_farewell(out, &other)?;
                    break;
                }
            },
        };

        let sequence = match Sequence::parse(&raw) {
            Ok(sequence) => sequence,
            Err(err) => {
                log::warn!("{err}");
                summary.rejected += 1;
                writeln!(out, "{INVALID_MESSAGE}")?;
                match config.source {
                    SequenceSource::Prompt => continue,
                    SequenceSource::Fixed(_) => return Err(err),
                }
            }
        };

        write_report(out, &analyze(sequence), config.report)?;
        summary.analyzed += 1;

        match reader.read_line(CONTINUE_PROMPT)? {
            Input::Line(line) if line.trim().eq_ignore_ascii_case("no") => {
                writeln!(out, "{GOODBYE_MESSAGE}")?;
                break;
            }
            Input::Line(_) => {}
            other => {
                write_farewell(out, &other)?;
                break;
            }
        }
    }
    log::info!(
        "session ended: {} analyzed, {} rejected",
        summary.analyzed,
        summary.rejected
    );
    Ok(summary)
}
