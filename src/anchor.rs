//! Anchored variants: prefix, suffix and whole-string matches.
//!
//! All of them trim surrounding whitespace unless the pattern itself is
//! anchored into it, compare under the usual folding rules and score with
//! the shared rubric so results stay comparable with the fuzzy modes.

use crate::chars::{fold_char, Chars};
use crate::config::{config, MatcherConfig};
use crate::score::{
    calculate_score, BONUS_FIRST_CHAR_MULTIPLIER, SCORE_MATCH,
};
use crate::slab::Slab;
use crate::{MatchResult, Positions};

/// Does the text, ignoring leading whitespace, begin with the pattern?
pub fn prefix_match(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    prefix_match_impl(
        &config,
        case_sensitive,
        normalize,
        forward,
        text,
        pattern,
        with_pos,
        slab,
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn prefix_match_impl(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    _forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    _slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    if pattern.is_empty() {
        return (MatchResult::new(0, 0, 0), with_pos.then(Vec::new));
    }
    let trimmed_len = if pattern[0].is_whitespace() {
        0
    } else {
        text.leading_whitespaces()
    };
    if text.len() - trimmed_len < pattern.len() {
        return (MatchResult::NO_MATCH, None);
    }
    for (idx, &pchar) in pattern.iter().enumerate() {
        if fold_char(text.get(trimmed_len + idx), case_sensitive, normalize) != pchar {
            return (MatchResult::NO_MATCH, None);
        }
    }
    let eidx = trimmed_len + pattern.len();
    let (score, _) = calculate_score(
        config,
        case_sensitive,
        normalize,
        text,
        pattern,
        trimmed_len,
        eidx,
        false,
    );
    let pos = with_pos.then(|| (trimmed_len..eidx).collect());
    (MatchResult::new(trimmed_len as i32, eidx as i32, score), pos)
}

/// Does the text, ignoring trailing whitespace, end with the pattern?
pub fn suffix_match(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    suffix_match_impl(
        &config,
        case_sensitive,
        normalize,
        forward,
        text,
        pattern,
        with_pos,
        slab,
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn suffix_match_impl(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    _forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    _slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let mut trimmed_len = text.len();
    if pattern.last().map_or(true, |last| !last.is_whitespace()) {
        trimmed_len -= text.trailing_whitespaces();
    }
    if pattern.is_empty() {
        return (
            MatchResult::new(trimmed_len as i32, trimmed_len as i32, 0),
            with_pos.then(Vec::new),
        );
    }
    let Some(diff) = trimmed_len.checked_sub(pattern.len()) else {
        return (MatchResult::NO_MATCH, None);
    };
    for (idx, &pchar) in pattern.iter().enumerate() {
        if fold_char(text.get(idx + diff), case_sensitive, normalize) != pchar {
            return (MatchResult::NO_MATCH, None);
        }
    }
    let sidx = trimmed_len - pattern.len();
    let (score, _) = calculate_score(
        config,
        case_sensitive,
        normalize,
        text,
        pattern,
        sidx,
        trimmed_len,
        false,
    );
    let pos = with_pos.then(|| (sidx..trimmed_len).collect());
    (MatchResult::new(sidx as i32, trimmed_len as i32, score), pos)
}

/// Does the whitespace-trimmed text equal the pattern exactly?
pub fn equal_match(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    equal_match_impl(
        &config,
        case_sensitive,
        normalize,
        forward,
        text,
        pattern,
        with_pos,
        slab,
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn equal_match_impl(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    _forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    _slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let Some((&first, &last)) = pattern.first().zip(pattern.last()) else {
        return (MatchResult::NO_MATCH, None);
    };
    let trimmed_len = if first.is_whitespace() {
        0
    } else {
        text.leading_whitespaces()
    };
    let trimmed_end_len = if last.is_whitespace() {
        0
    } else {
        text.trailing_whitespaces()
    };
    if trimmed_len + trimmed_end_len > text.len()
        || text.len() - trimmed_len - trimmed_end_len != pattern.len()
    {
        return (MatchResult::NO_MATCH, None);
    }
    for (idx, &pchar) in pattern.iter().enumerate() {
        if fold_char(text.get(trimmed_len + idx), case_sensitive, normalize) != pchar {
            return (MatchResult::NO_MATCH, None);
        }
    }
    let m = pattern.len() as i32;
    let score = (SCORE_MATCH + config.bonus_boundary_white) as i32 * m
        + ((BONUS_FIRST_CHAR_MULTIPLIER - 1) * config.bonus_boundary_white) as i32;
    let eidx = trimmed_len + pattern.len();
    let pos = with_pos.then(|| (trimmed_len..eidx).collect());
    (MatchResult::new(trimmed_len as i32, eidx as i32, score), pos)
}
