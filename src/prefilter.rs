use memchr::{memchr, memrchr, memrchr2};

use crate::chars::Chars;

/// Earliest occurrence of `b` at or after `from`. Under case folding a
/// lowercase pattern byte also accepts its uppercase form, and within the
/// window up to the lowercase hit the uppercase hit wins if it comes first.
fn try_skip(bytes: &[u8], case_sensitive: bool, b: u8, from: usize) -> Option<usize> {
    let tail = &bytes[from..];
    let mut idx = memchr(b, tail);
    if !case_sensitive && b.is_ascii_lowercase() {
        let limit = idx.unwrap_or(tail.len());
        if let Some(uidx) = memchr(b - 32, &tail[..limit]) {
            idx = Some(uidx);
        }
    }
    idx.map(|idx| from + idx)
}

/// One byte-wise pass that proves whether `pattern` can possibly match and
/// narrows the window the scoring algorithms have to look at.
///
/// Returns `None` when the pattern provably cannot match. For text that is
/// not byte-backed the filter cannot run and the full range is returned.
/// On success the window starts one position before the first forced match
/// so the bonus computation still sees the preceding character, and extends
/// to the last occurrence of the final pattern byte so trailing alignments
/// stay reachable.
pub(crate) fn ascii_fuzzy_index(
    text: Chars,
    pattern: &[char],
    case_sensitive: bool,
) -> Option<(usize, usize)> {
    let Chars::Ascii(bytes) = text else {
        return Some((0, text.len()));
    };
    if !pattern.iter().all(|c| c.is_ascii()) {
        return None;
    }

    let mut first_idx = 0;
    let mut last_idx = 0;
    let mut idx = 0;
    let mut b = 0u8;
    for (pidx, &pchar) in pattern.iter().enumerate() {
        b = pchar as u8;
        idx = try_skip(bytes, case_sensitive, b, idx)?;
        if pidx == 0 && idx > 0 {
            first_idx = idx - 1;
        }
        last_idx = idx;
        idx += 1;
    }

    // Widen to the final occurrence of the last pattern byte so the scoring
    // pass may prefer a trailing alignment.
    let tail = &bytes[last_idx + 1..];
    let trailing = if !case_sensitive && b.is_ascii_lowercase() {
        memrchr2(b, b - 32, tail)
    } else {
        memrchr(b, tail)
    };
    match trailing {
        Some(off) => Some((first_idx, last_idx + off + 2)),
        None => Some((first_idx, last_idx + 1)),
    }
}
