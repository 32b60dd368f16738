use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no data sources were given")]
    NoSources,

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin} as {format} data")]
    Csv {
        origin: String,
        format: crate::SourceFormat,
        #[source]
        source: csv::Error,
    },

    #[error("cannot tell the layout of {origin} from its header: {header:?}")]
    UnknownSchema { origin: String, header: String },

    #[error("unknown source format: {0}")]
    UnknownFormat(String),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
