use checksum_lab_abstract::RandomSource;
use serde::Serialize;
use tracing::debug;

use crate::error::{LabError, Result};

/// Position of a single flipped bit. `bit` 0 is the least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BitFlip {
    pub byte: usize,
    pub bit: u8,
}

impl BitFlip {
    pub fn new(byte: usize, bit: u8) -> Self {
        Self { byte, bit }
    }

    fn mask(&self) -> u8 {
        1 << self.bit
    }
}

/// Flip `count` randomly chosen bits of `buffer` in place.
///
/// Each flip draws a byte index in `[0, len)` then a bit index in `[0, 8)`.
/// Positions are drawn with replacement, so the same bit may be flipped
/// twice and cancel out. Returns every flip in draw order.
pub fn inject_errors(
    buffer: &mut [u8],
    count: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<BitFlip>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if buffer.is_empty() {
        return Err(LabError::EmptyBuffer { requested: count });
    }

    let mut flips = Vec::with_capacity(count);
    for _ in 0..count {
        let byte = rng.below(buffer.len());
        let bit = rng.below(8) as u8;
        let flip = BitFlip::new(byte, bit);
        buffer[byte] ^= flip.mask();
        debug!("Flipped bit {} of byte {}", bit, byte);
        flips.push(flip);
    }
    Ok(flips)
}

/// Flip one explicit bit, rejecting positions outside the buffer.
pub fn flip_bit(buffer: &mut [u8], flip: BitFlip) -> Result<()> {
    if flip.byte >= buffer.len() || flip.bit >= 8 {
        return Err(LabError::BitOutOfRange {
            byte: flip.byte,
            bit: flip.bit,
            len: buffer.len(),
        });
    }
    buffer[flip.byte] ^= flip.mask();
    Ok(())
}

/// Number of bit positions at which `a` and `b` differ.
pub fn net_bit_changes(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn flips_drawn_positions() {
        let mut buffer = vec![0u8; 4];
        let mut rng = ScriptedRandom::new(vec![2, 7, 0, 0]);

        let flips = inject_errors(&mut buffer, 2, &mut rng).unwrap();

        assert_eq!(flips, vec![BitFlip::new(2, 7), BitFlip::new(0, 0)]);
        assert_eq!(buffer, vec![0x01, 0x00, 0x80, 0x00]);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn repeated_position_cancels() {
        let original = vec![0x48, 0x65];
        let mut buffer = original.clone();
        let mut rng = ScriptedRandom::new(vec![1, 3, 1, 3]);

        let flips = inject_errors(&mut buffer, 2, &mut rng).unwrap();

        assert_eq!(flips.len(), 2);
        assert_eq!(buffer, original);
        assert_eq!(net_bit_changes(&original, &buffer), 0);
    }

    #[test]
    fn zero_count_is_a_no_op_even_when_empty() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut rng = ScriptedRandom::new(vec![5]);
        assert!(inject_errors(&mut buffer, 0, &mut rng).unwrap().is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn empty_buffer_is_rejected_without_drawing() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut rng = ScriptedRandom::new(vec![0]);
        let err = inject_errors(&mut buffer, 3, &mut rng).unwrap_err();
        assert_eq!(err, LabError::EmptyBuffer { requested: 3 });
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn explicit_flip_checks_bounds() {
        let mut buffer = vec![0x00, 0x00];
        flip_bit(&mut buffer, BitFlip::new(1, 4)).unwrap();
        assert_eq!(buffer, vec![0x00, 0x10]);

        assert_eq!(
            flip_bit(&mut buffer, BitFlip::new(2, 0)),
            Err(LabError::BitOutOfRange {
                byte: 2,
                bit: 0,
                len: 2
            })
        );
        assert!(flip_bit(&mut buffer, BitFlip::new(0, 8)).is_err());
    }

    #[test]
    fn counts_differing_bits() {
        assert_eq!(net_bit_changes(&[0xFF, 0x00], &[0x0F, 0x01]), 5);
    }
}
