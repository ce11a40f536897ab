//! Record file loader
//!
//! One record per line, whitespace separated:
//!
//! ```text
//! citizen_id first_name last_name country age virus YES|NO [date]
//! ```
//!
//! A malformed line is reported in the [`LoadReport`] and the load carries
//! on with the next line. Only I/O failures and registry failures (such as
//! running out of memory) abort a load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use shared_types::{Record, RecordError, VaccinationStatus};
use thiserror::Error;
use tracing::{info, warn};
use vr_03_category_index::{RecordOutcome, RegistryError, VaccinationRegistryApi};

const REQUIRED_FIELDS: usize = 7;
const MAX_FIELDS: usize = 8;

/// Why a single line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least 7 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("expected at most 8 fields, found {found}")]
    TooManyFields { found: usize },

    #[error("age must be a non-negative integer, got {value:?}")]
    InvalidAge { value: String },

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// A rejected input line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {error}")]
pub struct LineError {
    /// 1-based line number in the input
    pub line_number: usize,
    pub error: ParseError,
}

/// Failures that stop a load
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read records: {0}")]
    Io(#[from] io::Error),

    #[error("line {line_number}: {source}")]
    Registry {
        line_number: usize,
        #[source]
        source: RegistryError,
    },
}

/// Summary of one load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-blank lines seen
    pub lines_read: usize,
    pub indexed: usize,
    /// Valid records of citizens who are not vaccinated
    pub skipped: usize,
    /// Records whose id was already indexed for their virus
    pub duplicates: usize,
    pub errors: Vec<LineError>,
}

impl LoadReport {
    /// True when every non-blank line parsed
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse one input line into a record
pub fn parse_record_line(line: &str) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(ParseError::TooFewFields { found: fields.len() });
    }
    if fields.len() > MAX_FIELDS {
        return Err(ParseError::TooManyFields { found: fields.len() });
    }

    let age = fields[4].parse::<u32>().map_err(|_| ParseError::InvalidAge {
        value: fields[4].to_string(),
    })?;
    let status: VaccinationStatus = fields[6].parse()?;

    let record = Record::builder(fields[0])
        .first_name(fields[1])
        .last_name(fields[2])
        .country(fields[3])
        .age(age)
        .category(fields[5])
        .status(status)
        .maybe_date(fields.get(7).map(|date| date.to_string()))
        .build()?;
    Ok(record)
}

/// Feed every record in `reader` to `registry`
pub fn load_records<R, A>(reader: R, registry: &mut A) -> Result<LoadReport, LoadError>
where
    R: BufRead,
    A: VaccinationRegistryApi,
{
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        report.lines_read += 1;

        let record = match parse_record_line(&line) {
            Ok(record) => record,
            Err(error) => {
                warn!(line = line_number, %error, "Skipping malformed record");
                report.errors.push(LineError { line_number, error });
                continue;
            }
        };

        match registry.process_record(record) {
            Ok(RecordOutcome::Indexed) => report.indexed += 1,
            Ok(RecordOutcome::SkippedNotVaccinated) => report.skipped += 1,
            Ok(RecordOutcome::Duplicate { .. }) => report.duplicates += 1,
            Err(source) => return Err(LoadError::Registry { line_number, source }),
        }
    }

    info!(
        lines = report.lines_read,
        indexed = report.indexed,
        skipped = report.skipped,
        duplicates = report.duplicates,
        rejected = report.errors.len(),
        "Loaded records"
    );
    Ok(report)
}

/// Open `path` and load it into `registry`
pub fn load_file<A: VaccinationRegistryApi>(
    path: impl AsRef<Path>,
    registry: &mut A,
) -> Result<LoadReport, LoadError> {
    let file = File::open(path.as_ref())?;
    load_records(BufReader::new(file), registry)
}
