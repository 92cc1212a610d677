/// Payload with its checksum appended, as handed to the channel.
///
/// The checksum always starts on a 16-bit word boundary. An odd-length
/// payload gets one zero alignment byte first, which is the same zero byte
/// the checksum computation pads with implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    payload_len: usize,
    padded: bool,
    checksum: u16,
}

impl Frame {
    /// Take ownership of `payload` and append `checksum`, high byte first.
    pub fn seal(payload: Vec<u8>, checksum: u16) -> Self {
        let payload_len = payload.len();
        let padded = payload_len % 2 != 0;

        let mut bytes = payload;
        if padded {
            bytes.push(0);
        }
        bytes.extend_from_slice(&checksum.to_be_bytes());

        Self {
            bytes,
            payload_len,
            padded,
            checksum,
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.payload_len]
    }

    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// True when an alignment byte sits between payload and checksum.
    pub fn is_padded(&self) -> bool {
        self.padded
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
