//! Encodes page UUIDs into the device's profile-folder id format.
//!
//! The device expects each page folder to carry a 26-character identifier
//! derived from the page UUID: the 32 hex digits are zero-padded to 35,
//! regrouped into seven 20-bit values, each rendered as four base-32 digits,
//! truncated to 26 characters, upper-cased with `V`→`W` then `U`→`V`
//! substituted, and terminated with a literal `Z`.

use uuid::Uuid;

const BASE32_DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Encodes a page UUID as a profile-folder id.
pub fn device_folder_id(id: Uuid) -> String {
    let hex = format!("{}000", id.simple());

    let mut encoded = String::with_capacity(28);
    for chunk in hex.as_bytes().chunks(5) {
        let mut value: u32 = 0;
        for &byte in chunk {
            value = value * 16 + u32::from(hex_digit(byte));
        }
        for shift in [15u32, 10, 5, 0] {
            encoded.push(BASE32_DIGITS[((value >> shift) & 31) as usize] as char);
        }
    }

    encoded.truncate(26);
    let mut out = encoded.to_uppercase().replace('V', "W").replace('U', "V");
    out.push('Z');
    out
}

fn hex_digit(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        // `Uuid::simple` only emits hex digits.
        _ => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
