//! ASCII byte classification, in the spirit of C's `ctype.h`.
//!
//! Nothing here looks past a single byte: bytes above [`MAX_ASCII`] are never
//! letters, digits or whitespace.

mod table;

pub use table::{classify, to_lower, to_upper, ByteClass};

pub const MAX_ASCII: u8 = 0x7f;

pub const fn is_ascii(c: u8) -> bool {
    c <= MAX_ASCII
}

pub const fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

pub const fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

pub const fn is_alpha(c: u8) -> bool {
    is_lower(c) || is_upper(c)
}

pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub const fn is_alnum(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

pub const fn is_xdigit(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
}

/// Value of a hexadecimal digit, either case.
pub const fn parse_xdigit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

pub const fn is_control(c: u8) -> bool {
    c <= 0x1f || c == 0x7f
}

/// Space, `\t`, `\n`, `\v`, `\f` or `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
pub const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
