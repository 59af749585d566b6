use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Range limit must be a finite positive number, got {0}")]
    InvalidLimit(f64),
    #[error("Zoom span must be finite and positive, got {0} x {1}")]
    InvalidSpan(f64, f64),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Line {line}: expected at most 2 fields, found {found} in: {text}")]
    TooManyFields {
        line: usize,
        found: usize,
        text: String,
    },
    #[error("Line {line}: failed to read input: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// One of the two coordinate components edited by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Latitude, Axis::Longitude];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
