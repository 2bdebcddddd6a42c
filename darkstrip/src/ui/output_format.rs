//! Rendering of the batch report.
//!
//! Every line starts with a bracketed tag. Tags are coloured only when the
//! caller says the writer supports it, so piped output stays plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use darkstrip_core::{BatchReport, FileOutcome};

/// The tag printed at the start of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Error,
    Done,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Ok => "[OK]",
            Tag::Error => "[ERROR]",
            Tag::Done => "[DONE]",
        }
    }
}

fn write_tag<W: Write>(writer: &mut W, tag: Tag, supports_color: bool) -> io::Result<()> {
    let label = tag.label();
    if !supports_color {
        return write!(writer, "{}", label);
    }
    match tag {
        Tag::Ok => write!(writer, "{}", label.green()),
        Tag::Error => write!(writer, "{}", label.red().bold()),
        Tag::Done => write!(writer, "{}", label.cyan().bold()),
    }
}

/// Writes the line for one file.
pub fn print_outcome<W: Write>(writer: &mut W, outcome: &FileOutcome, supports_color: bool) -> io::Result<()> {
    match outcome {
        FileOutcome::Stripped { removed, .. } => {
            write_tag(writer, Tag::Ok, supports_color)?;
            writeln!(writer, " {}: {} characters removed", outcome.display_name(), removed)
        }
        FileOutcome::Failed { path, error } => {
            write_tag(writer, Tag::Error, supports_color)?;
            writeln!(writer, " {}: {}", path.display(), error)
        }
    }
}

/// Writes the closing total, preceded by an empty line.
pub fn print_total<W: Write>(writer: &mut W, total: usize, supports_color: bool) -> io::Result<()> {
    writeln!(writer)?;
    write_tag(writer, Tag::Done, supports_color)?;
    writeln!(writer, " Total {} characters removed!", total)
}

/// Writes all per-file lines in order, then the total.
pub fn print_report<W: Write>(writer: &mut W, report: &BatchReport, supports_color: bool) -> io::Result<()> {
    for outcome in &report.outcomes {
        print_outcome(writer, outcome, supports_color)?;
    }
    print_total(writer, report.total_removed(), supports_color)
}
