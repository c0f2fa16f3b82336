//! Run Report Module
//! Per-file outcome of one viewer run.

use crate::data::LoaderError;
use std::fmt;
use std::path::PathBuf;

/// Broad class of a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// File could not be opened
    Io,
    /// File was read but its rows are not a numeric table
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Io => write!(f, "I/O"),
            FailureKind::Parse => write!(f, "parse"),
        }
    }
}

impl From<&LoaderError> for FailureKind {
    fn from(err: &LoaderError) -> Self {
        if err.is_io() {
            FailureKind::Io
        } else {
            FailureKind::Parse
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    Plotted { points: usize },
    Failed { kind: FailureKind, message: String },
}

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub file_name: String,
    /// Chart title, after duplicate titles were made unique
    pub title: String,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn plotted(file_name: &str, title: &str, points: usize) -> Self {
        Self {
            file_name: file_name.to_string(),
            title: title.to_string(),
            status: FileStatus::Plotted { points },
        }
    }

    pub fn failed(file_name: &str, title: &str, err: &LoaderError) -> Self {
        Self {
            file_name: file_name.to_string(),
            title: title.to_string(),
            status: FileStatus::Failed {
                kind: err.into(),
                message: err.to_string(),
            },
        }
    }

    pub fn is_plotted(&self) -> bool {
        matches!(self.status, FileStatus::Plotted { .. })
    }
}

/// Outcomes for every file attempted in one run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub input_dir: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn plotted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_plotted()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_plotted())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// One line per failed file, for the exit message.
    pub fn failure_summary(&self) -> String {
        self.failures()
            .map(|o| match &o.status {
                FileStatus::Failed { kind, message } => {
                    format!("{} ({} error): {}", o.file_name, kind, message)
                }
                FileStatus::Plotted { .. } => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
