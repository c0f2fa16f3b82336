//! CSV Series Loader Module
//! Reads a header line plus numeric rows into a `Series` using Polars.

use crate::data::Series;
use polars::prelude::*;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File has no header row")]
    MissingHeader,
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Line {line}, column {column}: '{value}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("Line {line} has no value in column {column}")]
    MissingField { line: usize, column: usize },
    #[error("Expected at least 2 columns, found {found}")]
    TooFewColumns { found: usize },
}

impl LoaderError {
    /// True when the file itself could not be opened.
    pub fn is_io(&self) -> bool {
        matches!(self, LoaderError::Io { .. })
    }
}

/// Line number of the first data row; line 1 is the header.
const FIRST_DATA_LINE: usize = 2;

/// Reads two-column numeric CSV files.
///
/// The first line is always treated as a header and never inspected, so the
/// table width comes from the data rows. Every field of the remaining rows
/// must parse as a float, even past column 1. Fields may carry surrounding
/// whitespace (`1.0, 2.5`).
pub struct SeriesReader;

impl SeriesReader {
    /// Read `path` and return columns 0 and 1 as x and y.
    pub fn read_csv(path: &Path) -> Result<Series, LoaderError> {
        let io_error = |source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(io_error)?;

        Self::parse_str(&contents)
    }

    /// Parse CSV text: a header line followed by numeric rows.
    pub fn parse_str(contents: &str) -> Result<Series, LoaderError> {
        if contents.is_empty() {
            return Err(LoaderError::MissingHeader);
        }
        let data = contents.split_once('\n').map_or("", |(_, rest)| rest);
        if data.trim().is_empty() {
            return Ok(Series::default());
        }

        // Read every column as text; numbers are parsed per field below.
        let df = CsvReadOptions::default()
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(data.as_bytes().to_vec()))
            .finish()?;

        Self::series_from_frame(&df)
    }

    /// Convert a frame of text columns into a numeric series.
    fn series_from_frame(df: &DataFrame) -> Result<Series, LoaderError> {
        if df.height() == 0 {
            return Ok(Series::default());
        }
        if df.width() < 2 {
            return Err(LoaderError::TooFewColumns { found: df.width() });
        }

        let text = df
            .get_columns()
            .iter()
            .map(|c| c.str())
            .collect::<PolarsResult<Vec<_>>>()?;

        // Row-major so the first bad field in the file is the one reported
        let mut pairs = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let line = row + FIRST_DATA_LINE;
            let mut values = [0.0; 2];

            for (column, raw) in text.iter().enumerate() {
                let field = raw
                    .get(row)
                    .ok_or(LoaderError::MissingField { line, column })?;
                let value = Self::parse_field(field).ok_or_else(|| LoaderError::Parse {
                    line,
                    column,
                    value: field.to_string(),
                })?;
                if column < 2 {
                    values[column] = value;
                }
            }

            pairs.push((values[0], values[1]));
        }

        Ok(Series::from_pairs(pairs))
    }

    /// Parse one field, ignoring surrounding whitespace.
    ///
    /// Accepts exponent and non-finite literals such as `1.0E-5`,
    /// `Infinity` and `NaN`.
    fn parse_field(field: &str) -> Option<f64> {
        field.trim().parse::<f64>().ok()
    }
}
