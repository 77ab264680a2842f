use std::error::Error;
use std::fmt;

/// Reasons a [`MandelbrotAlgorithm`](super::algorithm::MandelbrotAlgorithm)
/// cannot be built.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroIterationCap,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationCap => write!(f, "escape test needs an iteration cap of at least 1"),
        }
    }
}

impl Error for MandelbrotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        assert_eq!(
            MandelbrotError::ZeroIterationCap.to_string(),
            "escape test needs an iteration cap of at least 1"
        );
    }
}
