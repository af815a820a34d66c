/// Error type for the feedforward evaluator
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Indicates a sequence's length disagrees with the dimension it must match.
    DimensionMismatch,
}

pub type Result<T> = std::result::Result<T, Error>;
