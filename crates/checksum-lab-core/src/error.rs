use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    /// The input contained something other than '0' or '1'
    #[error("invalid binary input: {found:?} at position {position} (only 0s and 1s are allowed)")]
    InvalidInput { position: usize, found: char },

    /// Bit errors were requested for a zero-length buffer
    #[error("cannot inject {requested} bit error(s) into an empty buffer")]
    EmptyBuffer { requested: usize },

    /// An explicit bit position lies outside the buffer
    #[error("bit {bit} of byte {byte} is outside a {len}-byte buffer")]
    BitOutOfRange { byte: usize, bit: u8, len: usize },
}

pub type Result<T> = std::result::Result<T, LabError>;
