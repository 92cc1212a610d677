use checksum_lab_core::BinaryString;
use checksum_lab_core::checksum::words;
use checksum_lab_core::injector::BitFlip;
use serde::Serialize;

/// What the channel did to a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoiseOutcome {
    /// Bit errors the channel chose to introduce; 0 on a clean pass.
    /// Reported as drawn, even if flips later cancel each other.
    pub requested_errors: usize,
    pub random_flips: Vec<BitFlip>,
    /// Deterministic flips queued with `Simulator::add_flip_once`.
    pub forced_flips: Vec<BitFlip>,
    /// Bits that actually differ between sent and received frames.
    pub net_bit_changes: u32,
}

impl NoiseOutcome {
    pub fn is_clean(&self) -> bool {
        self.requested_errors == 0 && self.forced_flips.is_empty()
    }

    /// Bits were flipped but every flip was undone by another.
    pub fn cancelled_out(&self) -> bool {
        !self.is_clean() && self.net_bit_changes == 0
    }
}

/// Everything observed during one sender-to-receiver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransmissionReport {
    pub input: BinaryString,
    pub payload: Vec<u8>,
    /// An alignment byte was placed between payload and checksum.
    pub padded: bool,
    pub checksum: u16,
    pub sent: Vec<u8>,
    pub received: Vec<u8>,
    pub noise: NoiseOutcome,
    pub receiver_sum: u16,
    pub valid: bool,
}

impl TransmissionReport {
    pub fn checksum_hex(&self) -> String {
        hex16(self.checksum)
    }

    pub fn checksum_bits(&self) -> String {
        bits16(self.checksum)
    }

    pub fn receiver_sum_hex(&self) -> String {
        hex16(self.receiver_sum)
    }

    pub fn receiver_sum_bits(&self) -> String {
        bits16(self.receiver_sum)
    }

    /// The sent frame as 16-bit words, checksum last.
    pub fn sent_words(&self) -> Vec<u16> {
        words(&self.sent).collect()
    }
}

pub fn hex16(value: u16) -> String {
    format!("0x{value:04X}")
}

pub fn bits16(value: u16) -> String {
    format!("{value:016b}")
}
