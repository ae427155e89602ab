use crate::ascii::{classify, ByteClass};
use std::ops::Range;

/// Split `bytes` into word ranges.
///
/// A word is a run of bytes of one class. Separator bytes (`' '`, `'-'`,
/// `'_'`) end a word and are dropped. An upper-case run followed by a
/// lower-case byte gives up its last letter to the next word, so
/// `HTTPServer` splits as `HTTP` + `Server`.
pub fn word_ranges(bytes: &[u8]) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut state = ByteClass::Separator;
    let mut word_start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let next = classify(b);
        if next == state {
            continue;
        }

        if state == ByteClass::Upper && next == ByteClass::Lower {
            // The capital just before `i` starts the new word.
            if word_start < i - 1 {
                words.push(word_start..i - 1);
            }
            word_start = i - 1;
        } else {
            if state != ByteClass::Separator {
                words.push(word_start..i);
            }
            word_start = i;
        }
        state = next;
    }

    if state != ByteClass::Separator {
        words.push(word_start..bytes.len());
    }

    words
}

/// Split `s` into words, see [`word_ranges`].
///
/// Boundaries only ever fall next to an ASCII byte, so every slice is on a
/// char boundary.
pub fn split_words(s: &str) -> Vec<&str> {
    word_ranges(s.as_bytes())
        .into_iter()
        .map(|range| &s[range])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_separators() {
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
        assert!(split_words("--").is_empty());
        assert!(split_words("__").is_empty());
        assert!(split_words(" -_ ").is_empty());
    }

    #[test]
    fn test_separators() {
        assert_eq!(split_words(" word "), vec!["word"]);
        assert_eq!(split_words("word"), vec!["word"]);
        assert_eq!(split_words("Simple word"), vec!["Simple", "word"]);
        assert_eq!(split_words("Simple-word"), vec!["Simple", "word"]);
        assert_eq!(split_words("Simple_word"), vec!["Simple", "word"]);
        assert_eq!(split_words("snake__case--x"), vec!["snake", "case", "x"]);
    }

    #[test]
    fn test_class_transitions() {
        assert_eq!(split_words("with01number"), vec!["with", "01", "number"]);
        assert_eq!(split_words("camelCase"), vec!["camel", "Case"]);
        assert_eq!(split_words("v2"), vec!["v", "2"]);
        assert_eq!(split_words("a.b"), vec!["a", ".", "b"]);
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_words("parseHTTPResponse"), vec!["parse", "HTTP", "Response"]);
        assert_eq!(split_words("HTTP"), vec!["HTTP"]);
        assert_eq!(split_words("Word"), vec!["Word"]);
        assert_eq!(split_words("AId"), vec!["A", "Id"]);
        assert_eq!(split_words("IDs"), vec!["I", "Ds"]);
    }

    #[test]
    fn test_upper_lower_after_separator() {
        // A lone capital after a separator is a one-byte run, nothing to emit
        // before it.
        assert_eq!(split_words("x Ab"), vec!["x", "Ab"]);
        assert_eq!(word_ranges(b"Ab"), vec![0..2]);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(split_words("用户のId"), vec!["用户の", "Id"]);
        assert_eq!(split_words("用户の"), vec!["用户の"]);
        assert_eq!(split_words("id用户ID"), vec!["id", "用户", "ID"]);
    }

    #[test]
    fn test_raw_bytes_are_total() {
        // Not valid UTF-8; still one Other run.
        assert_eq!(word_ranges(&[0xff, 0xfe, 0x80]), vec![0..3]);
        assert_eq!(word_ranges(&[b'a', 0xff, b'B']), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_ranges_cover_non_separators() {
        let input = "  fooBar_BAZQux 12 用户 ";
        let ranges = word_ranges(input.as_bytes());
        let covered: usize = ranges.iter().map(|r| r.len()).sum();
        let non_sep = input.bytes().filter(|b| !b" -_".contains(b)).count();
        assert_eq!(covered, non_sep);
        for pair in ranges.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
