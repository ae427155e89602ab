//! Whole-string ASCII case helpers.
//!
//! Only `A-Z` and `a-z` are ever changed or folded. Functions returning
//! [`Cow`] borrow the input when nothing had to change.

use crate::ascii::{is_lower, is_upper, to_lower, to_upper};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Map every byte of `s` through `f`, copying `s` on the first change.
///
/// `f` must map ASCII letters to ASCII letters and leave every other byte as
/// it is.
fn map_bytes<F>(s: &str, mut f: F) -> Cow<'_, str>
where
    F: FnMut(usize, u8) -> u8,
{
    let mut buf: Option<Vec<u8>> = None;
    for (i, b) in s.bytes().enumerate() {
        let mapped = f(i, b);
        if mapped != b {
            buf.get_or_insert_with(|| s.as_bytes().to_vec())[i] = mapped;
        }
    }

    match buf {
        None => Cow::Borrowed(s),
        Some(buf) => Cow::Owned(
            String::from_utf8(buf)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        ),
    }
}

pub fn to_upper_str(s: &str) -> Cow<'_, str> {
    map_bytes(s, |_, b| to_upper(b))
}

pub fn to_lower_str(s: &str) -> Cow<'_, str> {
    map_bytes(s, |_, b| to_lower(b))
}

/// First byte upper-case, every other byte lower-case.
pub fn capitalize(s: &str) -> Cow<'_, str> {
    map_bytes(s, |i, b| if i == 0 { to_upper(b) } else { to_lower(b) })
}

/// Upper-case the first byte if it is a lower-case letter.
pub fn upper_first(s: &str) -> Cow<'_, str> {
    match s.as_bytes().first() {
        Some(&b) if is_lower(b) => {
            let mut owned = s.to_owned();
            owned[..1].make_ascii_uppercase();
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(s),
    }
}

/// Lower-case the first byte if it is an upper-case letter.
pub fn lower_first(s: &str) -> Cow<'_, str> {
    match s.as_bytes().first() {
        Some(&b) if is_upper(b) => {
            let mut owned = s.to_owned();
            owned[..1].make_ascii_lowercase();
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(s),
    }
}

fn cmp_bytes_fold(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(|&c| to_lower(c))
        .cmp(b.iter().map(|&c| to_lower(c)))
}

/// Compare ignoring ASCII case. A strict prefix orders first.
pub fn compare_fold(a: &str, b: &str) -> Ordering {
    cmp_bytes_fold(a.as_bytes(), b.as_bytes())
}

pub fn equal_fold(a: &str, b: &str) -> bool {
    a.len() == b.len() && compare_fold(a, b) == Ordering::Equal
}

pub fn has_prefix_fold(s: &str, prefix: &str) -> bool {
    let (s, prefix) = (s.as_bytes(), prefix.as_bytes());
    s.len() >= prefix.len() && cmp_bytes_fold(&s[..prefix.len()], prefix) == Ordering::Equal
}

pub fn has_suffix_fold(s: &str, suffix: &str) -> bool {
    let (s, suffix) = (s.as_bytes(), suffix.as_bytes());
    s.len() >= suffix.len()
        && cmp_bytes_fold(&s[s.len() - suffix.len()..], suffix) == Ordering::Equal
}
