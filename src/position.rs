use anyhow::Context;

/// Default file holding the persisted cursor.
pub const POSITION_FILE: &str = "page";

/// Minimal big-endian encoding of `value`, always at least one byte: zero
/// encodes as a single `0x00`, so a saved zero is distinguishable from an
/// empty or missing file.
pub fn encode(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = (value.leading_zeros() as usize / 8).min(bytes.len() - 1);
    bytes[skip..].to_vec()
}

/// Fold big-endian bytes back into a value. Empty input and anything longer
/// than eight bytes is treated as corrupt.
pub fn decode(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() || bytes.len() > std::mem::size_of::<u64>() {
        return None;
    }
    Some(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Load the saved cursor from `path`. Any failure (missing file, unreadable,
/// undecodable) silently yields 0; first runs have no position file.
pub fn load(path: &str) -> u64 {
    match std::fs::read(path) {
        Ok(bytes) => match decode(&bytes) {
            Some(value) => value,
            None => {
                tracing::debug!("position file '{path}' is not a valid encoding; starting at 0");
                0
            }
        },
        Err(e) => {
            tracing::debug!("no saved position at '{path}' ({e}); starting at 0");
            0
        }
    }
}

/// Write the cursor to `path`, replacing any prior content.
pub fn save(path: &str, value: u64) -> anyhow::Result<()> {
    std::fs::write(path, encode(value))
        .with_context(|| format!("failed to write position file '{path}'"))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};

    #[test]
    fn zero_encodes_as_one_byte() {
        assert_eq!(encode(0), vec![0]);
    }

    #[test]
    fn encoding_is_minimal() {
        assert_eq!(encode(5), vec![5]);
        assert_eq!(encode(255), vec![255]);
        assert_eq!(encode(256), vec![1, 0]);
        assert_eq!(encode(0x0102_0304), vec![1, 2, 3, 4]);
    }

    #[test]
    fn decode_rejects_empty_and_oversized_input() {
        assert_eq!(decode(&[]), None);
        assert_eq!(decode(&[0; 9]), None);
    }

    #[test]
    fn encode_decode_round_trip() {
        for value in [0u64, 1, 5, 255, 256, 65_535, 65_536, u64::MAX] {
            assert_eq!(decode(&encode(value)), Some(value), "value {value}");
        }
    }
}
