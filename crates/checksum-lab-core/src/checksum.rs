//! 16-bit one's-complement Internet checksum (RFC 1071).
//!
//! The receiver sums every word of the frame, checksum included. An
//! undamaged frame sums to all ones.

/// Receiver sum of an undamaged frame.
pub const VALID_SUM: u16 = 0xFFFF;

/// Split a buffer into big-endian 16-bit words. An odd trailing byte is
/// paired with an implicit zero low byte.
pub fn words(buffer: &[u8]) -> impl Iterator<Item = u16> + '_ {
    buffer
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
}

/// One's-complement sum of all words in `buffer`.
///
/// The carry out of bit 15 is folded back in after every addition, so the
/// accumulator never exceeds 17 bits.
pub fn reduce(buffer: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    for word in words(buffer) {
        sum += u32::from(word);
        if sum > 0xFFFF {
            sum = (sum & 0xFFFF) + 1;
        }
    }
    (sum & 0xFFFF) as u16
}

/// Checksum the sender places in the frame.
pub fn compute(buffer: &[u8]) -> u16 {
    !reduce(buffer)
}

/// Receiver-side sum over payload plus checksum. Compare with [`VALID_SUM`].
pub fn verify(buffer: &[u8]) -> u16 {
    reduce(buffer)
}

pub fn is_intact(sum: u16) -> bool {
    sum == VALID_SUM
}
