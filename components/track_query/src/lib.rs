mod command;
mod filter;

pub use command::FilterCommand;
pub use filter::{apply_filters, FilterState, YearRange, POPULARITY_MAX};
