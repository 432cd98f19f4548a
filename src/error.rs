use thiserror::Error;

/// Errors reported by the board and its drivers.
///
/// Stepping itself never fails; every variant here is a caller contract
/// violation or a closed session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i64, y: i64, size: usize },

    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },

    #[error("unexpected character {ch:?} in grid text")]
    InvalidChar { ch: char },

    #[error("fill rate {0} is not within [0, 1]")]
    InvalidFillRate(f64),

    #[error("grid of size {actual} does not fit a board of size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("step delay must be positive")]
    ZeroDelay,

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("simulation session has shut down")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
