//! Slot name encoding for the engine's `-applayerhex` parameter.
//!
//! Slot names may hold spaces and non-ASCII characters that would not
//! survive the engine's argument splitting, so they travel as hex.

/// Encode a slot name as uppercase hex of its UTF-8 bytes.
///
/// `"Player1"` becomes `"506C6179657231"`. An empty name yields an empty string.
pub fn encode_slot_hex(slot_name: &str) -> String {
    slot_name
        .as_bytes()
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ascii_name() {
        assert_eq!(encode_slot_hex("Player1"), "506C6179657231");
    }

    #[test]
    fn encodes_spaces_and_utf8() {
        assert_eq!(encode_slot_hex("A b"), "412062");
        // 'é' is two bytes in UTF-8
        assert_eq!(encode_slot_hex("é"), "C3A9");
    }

    #[test]
    fn empty_name_is_empty() {
        assert_eq!(encode_slot_hex(""), "");
    }
}
