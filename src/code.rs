/// Symbols used for serialized codes. Index 0 (`A`) doubles as the pad symbol.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Width every encoded code is left-padded to.
pub const WIDTH: usize = 8;

/// Largest code whose encoding still fits in `WIDTH` symbols (36^8 - 1).
pub const MAX_CODE: u64 = 2_821_109_907_455;

const BASE: u64 = ALPHABET.len() as u64;

/// Encode a numeric code as a base-36 string over `ALPHABET`, most significant
/// symbol first, left-padded with `A` to `WIDTH` characters.
///
/// Codes above `MAX_CODE` are still encoded but come out wider than `WIDTH`.
pub fn encode(code: u64) -> String {
    let digits: Vec<u8> = if code < BASE {
        // Single-symbol codes are looked up directly.
        vec![ALPHABET[code as usize]]
    } else {
        let mut num = code;
        let mut places = Vec::new();
        loop {
            places.push(ALPHABET[(num % BASE) as usize]);
            num /= BASE;
            if num == 0 {
                break;
            }
        }
        places.reverse();
        places
    };

    let mut out = String::with_capacity(WIDTH.max(digits.len()));
    for _ in digits.len()..WIDTH {
        out.push(ALPHABET[0] as char);
    }
    out.extend(digits.into_iter().map(char::from));
    out
}

/// Serialized identity of an error kind: its prefix followed by the encoded code.
pub fn serialize(prefix: &str, code: u64) -> String {
    let mut out = String::with_capacity(prefix.len() + WIDTH);
    out.push_str(prefix);
    out.push_str(&encode(code));
    out
}
