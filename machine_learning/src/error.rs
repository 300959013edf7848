use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MlErr {
    /// A dataset was built from zero observations.
    EmptyDataset,
    /// Two sizes that must agree don't, e.g. a row's feature count and the dataset's.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A row was requested past the end of a dataset.
    OutOfBounds { index: usize, len: usize },
}

impl MlErr {
    /// Whether this error comes from inputs with the wrong shape.
    pub fn is_shape(&self) -> bool {
        matches!(self, MlErr::EmptyDataset | MlErr::SizeMismatch { .. })
    }

    /// Whether this error comes from an out of range row access.
    pub fn is_index(&self) -> bool {
        matches!(self, MlErr::OutOfBounds { .. })
    }
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::EmptyDataset => write!(f, "a dataset needs at least one observation"),
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "size mismatch for {what}: got {got}, expected {expected}"
            ),
            MlErr::OutOfBounds { index, len } => write!(
                f,
                "row {index} is out of bounds for a dataset of {len} rows"
            ),
        }
    }
}

impl Error for MlErr {}
