use std::io;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::normalize::normalize;
use crate::raw::RawRow;
use crate::schema::SourceFormat;
use crate::track::Track;
use crate::validate::{validate_with_report, ValidationReport};

/// Contents of one source file, already fetched
#[derive(Debug, Clone)]
pub struct SourceText {
    /// Where the text came from, used in errors and logs
    pub origin: String,
    pub text: String,
    /// `None` means detect from the header row
    pub format: Option<SourceFormat>,
}

impl SourceText {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn resolve_format(&self) -> Result<SourceFormat, LoadError> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let header = self.text.lines().next().unwrap_or_default();
        SourceFormat::detect(header).ok_or_else(|| LoadError::UnknownSchema {
            origin: self.origin.clone(),
            header: header.to_string(),
        })
    }

    /// Normalized, not yet validated, tracks of this source
    pub fn parse(&self) -> Result<Vec<Track>, LoadError> {
        let format = self.resolve_format()?;
        read_source(self.text.as_bytes(), format, &self.origin)
    }
}

/// Read delimited text in `format` and normalize every row
pub fn read_source<R: io::Read>(
    reader: R,
    format: SourceFormat,
    origin: &str,
) -> Result<Vec<Track>, LoadError> {
    let csv_error = |source: csv::Error| LoadError::Csv {
        origin: origin.to_string(),
        format,
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut tracks = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        tracks.push(normalize(&RawRow::from_record(&headers, &record), format));
    }

    debug!(origin, %format, rows = tracks.len(), "read source");
    Ok(tracks)
}

/// Parse every source and validate the union into one baseline.
///
/// All or nothing: the first failing source aborts the whole load.
pub fn build_dataset(sources: &[SourceText]) -> Result<(Dataset, ValidationReport), LoadError> {
    if sources.is_empty() {
        return Err(LoadError::NoSources);
    }

    let mut tracks = Vec::new();
    for source in sources {
        let parsed = source.parse()?;
        info!(origin = %source.origin, rows = parsed.len(), "normalized source");
        tracks.extend(parsed);
    }

    let (valid, report) = validate_with_report(tracks);
    Ok((Dataset::new(valid), report))
}
