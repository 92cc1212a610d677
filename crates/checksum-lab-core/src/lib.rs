//! Internet checksum primitives for the checksum lab.
//! Bit/byte codec, one's-complement engine, frame sealing and bit-error injection.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod frame;
pub mod injector;
pub mod random;

pub use checksum::{VALID_SUM, compute, is_intact, reduce, verify};
pub use codec::{BinaryString, encode};
pub use error::{LabError, Result};
pub use frame::Frame;
pub use injector::{BitFlip, flip_bit, inject_errors, net_bit_changes};
pub use random::{ScriptedRandom, SeededRandom};

pub use checksum_lab_abstract::RandomSource;
