use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{LabError, Result};

/// A string made only of '0' and '1', most significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BinaryString(String);

impl BinaryString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits (characters) in the string.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for BinaryString {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = s
            .chars()
            .enumerate()
            .find(|&(_, c)| !matches!(c, '0' | '1'));
        if let Some((position, found)) = invalid {
            return Err(LabError::InvalidInput { position, found });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for BinaryString {
    type Error = LabError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pack the bits into bytes, eight at a time from the left.
/// A short final group is right-padded with zeros.
pub fn encode(binary: &BinaryString) -> Vec<u8> {
    binary
        .as_str()
        .as_bytes()
        .chunks(8)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, digit)| byte | ((digit - b'0') << (7 - i)))
        })
        .collect()
}

/// Render each byte as eight binary digits.
pub fn byte_bits(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|byte| format!("{byte:08b}")).collect()
}
