use tracing::debug;
use track_records::{build_dataset, Dataset, LoadError, SourceText, ValidationReport};

use crate::config::SourceSpec;

/// Read every source, then normalize and validate them as one dataset.
///
/// The first unreadable or malformed file aborts the load.
pub async fn load_dataset(sources: &[SourceSpec]) -> Result<(Dataset, ValidationReport), LoadError> {
    let mut texts = Vec::with_capacity(sources.len());
    for source in sources {
        let text = tokio::fs::read_to_string(&source.path)
            .await
            .map_err(|error| LoadError::io(source.path.clone(), error))?;
        debug!(path = %source.path.display(), bytes = text.len(), "read source file");

        let mut text = SourceText::new(source.path.display().to_string(), text);
        if let Some(format) = source.format {
            text = text.with_format(format);
        }
        texts.push(text);
    }

    build_dataset(&texts)
}
