use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything the algebra and the codecs can signal. Operations are pure,
/// so a failing operation produces no output region; nothing is recovered
/// internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid memory region: {0}")]
    InvalidRegion(String),

    #[error("range {start}..{stop} violates the bounds of a {bit_length}-bit region")]
    Bounds {
        start: usize,
        stop: usize,
        bit_length: usize,
    },

    #[error("{context}: bit position or length {value} is not byte-aligned")]
    ByteAlignment {
        context: &'static str,
        value: usize,
    },

    #[error("{value} is not representable in {bit_length} bits as {target}")]
    NumericRange {
        value: String,
        bit_length: usize,
        target: &'static str,
    },

    #[error("inconsistent orientation: {0}")]
    Orientation(String),
}

impl Error {
    /// The stable identity used by the shared conformance suite.
    pub fn symbol(&self) -> &'static str {
        match self {
            Error::InvalidRegion(_) => "InvalidMemoryRegion",
            Error::Bounds { .. } => "BoundsError",
            Error::ByteAlignment { .. } => "ByteAlignmentError",
            Error::NumericRange { .. } => "NumericRangeError",
            Error::Orientation(_) => "OrientationError",
        }
    }

    pub(crate) fn bounds(start: usize, stop: usize, bit_length: usize) -> Error {
        Error::Bounds {
            start,
            stop,
            bit_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_has_a_stable_symbol() {
        let errors = [
            Error::InvalidRegion("x".to_string()),
            Error::bounds(0, 9, 8),
            Error::ByteAlignment {
                context: "get_byte",
                value: 3,
            },
            Error::NumericRange {
                value: "256".to_string(),
                bit_length: 8,
                target: "u8",
            },
            Error::Orientation("x".to_string()),
        ];

        let symbols: Vec<&str> = errors.iter().map(Error::symbol).collect();

        assert_eq!(
            symbols,
            vec![
                "InvalidMemoryRegion",
                "BoundsError",
                "ByteAlignmentError",
                "NumericRangeError",
                "OrientationError",
            ]
        );
    }
}
