/// Class of a single byte as seen by the word splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteClass {
    /// `' '`, `'-'` or `'_'`. Never part of a word.
    Separator,
    Lower,
    Upper,
    Digit,
    /// Everything else, including every byte of a multi-byte UTF-8 sequence.
    Other,
}

impl ByteClass {
    /// True for `Lower` and `Upper`.
    pub const fn is_alpha(self) -> bool {
        matches!(self, ByteClass::Lower | ByteClass::Upper)
    }
}

static CLASSES: [ByteClass; 256] = build_classes();
static TO_UPPER: [u8; 256] = build_case_table(true);
static TO_LOWER: [u8; 256] = build_case_table(false);

const fn build_classes() -> [ByteClass; 256] {
    let mut table = [ByteClass::Other; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = match i as u8 {
            b' ' | b'-' | b'_' => ByteClass::Separator,
            b'a'..=b'z' => ByteClass::Lower,
            b'A'..=b'Z' => ByteClass::Upper,
            b'0'..=b'9' => ByteClass::Digit,
            _ => ByteClass::Other,
        };
        i += 1;
    }
    table
}

const fn build_case_table(upper: bool) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < table.len() {
        let b = i as u8;
        table[i] = match b {
            b'a'..=b'z' if upper => b - b'a' + b'A',
            b'A'..=b'Z' if !upper => b - b'A' + b'a',
            _ => b,
        };
        i += 1;
    }
    table
}

/// Returns the class of `b`.
#[inline]
pub fn classify(b: u8) -> ByteClass {
    CLASSES[b as usize]
}

/// Maps `a-z` to `A-Z`, every other byte to itself.
#[inline]
pub fn to_upper(b: u8) -> u8 {
    TO_UPPER[b as usize]
}

/// Maps `A-Z` to `a-z`, every other byte to itself.
#[inline]
pub fn to_lower(b: u8) -> u8 {
    TO_LOWER[b as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_every_byte() {
        for b in 0..=255u8 {
            let expected = if b" -_".contains(&b) {
                ByteClass::Separator
            } else if b.is_ascii_lowercase() {
                ByteClass::Lower
            } else if b.is_ascii_uppercase() {
                ByteClass::Upper
            } else if b.is_ascii_digit() {
                ByteClass::Digit
            } else {
                ByteClass::Other
            };
            assert_eq!(classify(b), expected, "byte {:#04x}", b);
        }
    }

    #[test]
    fn test_case_tables_match_std() {
        for b in 0..=255u8 {
            assert_eq!(to_upper(b), b.to_ascii_uppercase());
            assert_eq!(to_lower(b), b.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_non_ascii_is_other() {
        for &b in "用户の".as_bytes() {
            assert_eq!(classify(b), ByteClass::Other);
            assert_eq!(to_upper(b), b);
            assert_eq!(to_lower(b), b);
        }
    }
}
