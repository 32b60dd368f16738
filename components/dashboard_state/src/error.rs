use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("at most {max} artists can be compared")]
    Full { max: usize },

    #[error("no tracks by artist {0}")]
    UnknownArtist(String),
}
