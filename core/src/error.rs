use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrosswordError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid rows do not all have the same length")]
    RaggedGrid,
    #[error("Grid exceeds {max}x{max} cells", max = crate::Coord::MAX)]
    GridTooLarge,
    #[error("Progress payload is not a two-dimensional sequence")]
    MalformedProgress,
    #[error("Data block `{0}` is missing from the page")]
    MissingDataBlock(&'static str),
    #[error("Data block `{0}` does not hold valid JSON for its type")]
    InvalidDataBlock(&'static str),
}

pub type Result<T> = core::result::Result<T, CrosswordError>;
