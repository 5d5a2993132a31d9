//! Stream Parser Module
//! Extracts fixed-point data rows from a log-interleaved text stream.

use crate::data::ChartVariant;
use log::{debug, info, warn};
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV header '{0}' not found in input")]
    HeaderNotFound(&'static str),
}

/// Column-wise view of every accepted data row, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSet {
    /// Input values, one per accepted row.
    pub x: Vec<u32>,
    /// Q1.16 approximation columns, one inner vector per series.
    pub approximations: Vec<Vec<u32>>,
}

impl SeriesSet {
    fn with_series_count(count: usize) -> Self {
        Self {
            x: Vec::new(),
            approximations: vec![Vec::new(); count],
        }
    }

    /// Number of accepted rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when no data row survived parsing.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Why a line after the header was rejected.
#[derive(Debug, PartialEq, Eq)]
enum RowError {
    /// Wrong field count, or the leading field is not a plain number.
    Structure,
    /// A field did not convert to `u32`.
    Conversion,
    /// `x` is outside the domain of the reference (`1/sqrt(x)` needs x >= 1).
    Domain,
}

/// Scans a text stream for the CSV block emitted by the rsqrt test program.
///
/// Everything before the header line is treated as foreign log output and
/// dropped without comment. After the header, lines that fail the row tests
/// are reported and skipped; only a missing header is fatal.
pub struct StreamParser {
    variant: ChartVariant,
}

impl StreamParser {
    pub fn new(variant: ChartVariant) -> Self {
        Self { variant }
    }

    /// Collect the data block for this parser's variant from `input`.
    pub fn parse<R: BufRead>(&self, input: R) -> Result<SeriesSet, ParseError> {
        let mut series = SeriesSet::with_series_count(self.variant.series_count());
        let mut found_header = false;
        let mut skipped = 0usize;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if !found_header {
                // The header must match exactly; substrings inside log lines
                // must not open the data phase.
                if line == self.variant.header() {
                    found_header = true;
                    info!("Found CSV header '{line}', starting data parsing...");
                } else {
                    debug!("Skipping pre-header line: {line}");
                }
                continue;
            }

            match self.parse_row(line) {
                Ok(fields) => {
                    series.x.push(fields[0]);
                    for (column, &value) in series.approximations.iter_mut().zip(&fields[1..]) {
                        column.push(value);
                    }
                }
                Err(RowError::Structure) => {
                    skipped += 1;
                    warn!("Skipping non-data line: {line}");
                }
                Err(RowError::Conversion) => {
                    skipped += 1;
                    warn!("Skipping malformed data line: {line}");
                }
                Err(RowError::Domain) => {
                    skipped += 1;
                    warn!("Skipping out-of-domain data line (x must be >= 1): {line}");
                }
            }
        }

        if !found_header {
            return Err(ParseError::HeaderNotFound(self.variant.header()));
        }

        debug!(
            "Accepted {} data rows, skipped {} lines after the header",
            series.len(),
            skipped
        );
        Ok(series)
    }

    /// Apply the structural test, value conversion, and domain check to one
    /// line of the data phase.
    fn parse_row(&self, line: &str) -> Result<Vec<u32>, RowError> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != self.variant.field_count() {
            return Err(RowError::Structure);
        }
        if parts[0].is_empty() || !parts[0].bytes().all(|b| b.is_ascii_digit()) {
            return Err(RowError::Structure);
        }

        let mut fields = Vec::with_capacity(parts.len());
        for part in &parts {
            let value = part.trim().parse::<u32>().map_err(|_| RowError::Conversion)?;
            fields.push(value);
        }

        if fields[0] == 0 {
            return Err(RowError::Domain);
        }
        Ok(fields)
    }
}
