// error.rs - Error kinds raised by the consensus core

use std::fmt;

/// Errors raised by padding and conservation analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConservationError {
    /// `pad` received no sequences
    EmptyInput,
    /// `analyze` received an empty set or sequences of unequal length
    MisalignedInput(String),
    /// A tie strategy token did not match any known strategy
    UnknownTieStrategy(String),
}

impl fmt::Display for ConservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConservationError::EmptyInput => {
                write!(f, "Empty input: at least one sequence is required")
            }
            ConservationError::MisalignedInput(detail) => {
                write!(f, "Misaligned input: {}", detail)
            }
            ConservationError::UnknownTieStrategy(token) => write!(
                f,
                "Unknown tie strategy: {}. Use: mark-as-x, first-winner",
                token
            ),
        }
    }
}

impl std::error::Error for ConservationError {}

impl From<ConservationError> for String {
    fn from(err: ConservationError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(ConservationError::EmptyInput.to_string().contains("Empty input"));
        let misaligned = ConservationError::MisalignedInput("seq2 has length 3, expected 5".into());
        assert_eq!(
            misaligned.to_string(),
            "Misaligned input: seq2 has length 3, expected 5"
        );
        let unknown: String = ConservationError::UnknownTieStrategy("majority".into()).into();
        assert!(unknown.contains("majority"));
    }
}
