use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} out of range for a counter of size {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("line {line}: unexpected end of input")]
    MissingLine { line: usize },

    #[error("line {line}: {token:?} is not an integer")]
    BadToken { line: usize, token: String },

    #[error("line {line}: expected {expected} integers, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("hair count must be positive")]
    NoHairs,

    #[error("negative hair length {0}")]
    NegativeLength(i64),

    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: i64 },

    #[error("invalid interval [{start}, {end}]: start is after end")]
    InvalidInterval { start: i64, end: i64 },

    #[error("interval endpoint {value} outside 0..={max}")]
    EndpointOutOfRange { value: i64, max: usize },

    #[error("maximum magnitude {0} is too large")]
    MagnitudeTooLarge(usize),

    #[error("cannot allocate {len} counters")]
    Alloc { len: usize },
}
