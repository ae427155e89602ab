use super::tokenizer::word_ranges;
use crate::ascii::{classify, to_lower, to_upper};

/// Join the words of `s` with `sep`, running `handler` over each word that
/// starts with an ASCII letter.
///
/// `handler` gets the word's index and its bytes in the output buffer and
/// rewrites them in place. Other words are copied as they are.
pub(crate) fn compose<F>(s: &str, sep: &str, mut handler: F) -> String
where
    F: FnMut(usize, &mut [u8]),
{
    let bytes = s.as_bytes();
    let words = word_ranges(bytes);
    if words.is_empty() {
        return String::new();
    }

    let size = words.iter().map(|w| w.len()).sum::<usize>() + (words.len() - 1) * sep.len();
    let mut buf = Vec::with_capacity(size);

    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            buf.extend_from_slice(sep.as_bytes());
        }

        let word = &bytes[word];
        if !classify(word[0]).is_alpha() {
            buf.extend_from_slice(word);
            continue;
        }

        let start = buf.len();
        buf.extend_from_slice(word);
        handler(i, &mut buf[start..]);
    }

    debug_assert_eq!(buf.len(), size);
    // Only ASCII letters were rewritten, so this cannot fail for `&str` input.
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn lower_all(word: &mut [u8]) {
    for b in word {
        *b = to_lower(*b);
    }
}

fn upper_all(word: &mut [u8]) {
    for b in word {
        *b = to_upper(*b);
    }
}

/// First letter upper-case, the rest lower-case.
fn title(word: &mut [u8]) {
    lower_all(word);
    word[0] = to_upper(word[0]);
}

/// `userName`
pub fn camel_case(s: &str) -> String {
    compose(s, "", |i, word| {
        if i == 0 {
            lower_all(word);
        } else {
            title(word);
        }
    })
}

/// `UserName`
pub fn pascal_case(s: &str) -> String {
    compose(s, "", |_, word| title(word))
}

/// `user_name`
pub fn snake_case(s: &str) -> String {
    compose(s, "_", |_, word| lower_all(word))
}

/// `USER_NAME`
pub fn screaming_snake_case(s: &str) -> String {
    compose(s, "_", |_, word| upper_all(word))
}

/// `user-name`
pub fn kebab_case(s: &str) -> String {
    compose(s, "-", |_, word| lower_all(word))
}

/// `USER-NAME`
pub fn screaming_kebab_case(s: &str) -> String {
    compose(s, "-", |_, word| upper_all(word))
}
