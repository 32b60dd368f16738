mod dataset;
mod error;
mod loader;
mod normalize;
mod raw;
mod schema;
mod track;
mod validate;

pub use dataset::Dataset;
pub use error::LoadError;
pub use loader::{build_dataset, read_source, SourceText};
pub use normalize::{first_artist, normalize};
pub use raw::RawRow;
pub use schema::{ArtistSyntax, Feature, FeatureScale, FieldSpec, Measure, SourceFormat};
pub use track::{Track, TrackId, FALLBACK_GENRE, UNKNOWN_TEXT};
pub use validate::{is_valid, validate, validate_with_report, ValidationReport, YEAR_MAX, YEAR_MIN};
