use crate::chars::{fold_char, Chars};
use crate::config::{config, MatcherConfig};
use crate::prefilter::ascii_fuzzy_index;
use crate::score::calculate_score;
use crate::slab::Slab;
use crate::{MatchResult, Positions};

/// Walk index for the configured scan direction.
#[inline]
pub(crate) fn index_at(idx: usize, len: usize, forward: bool) -> usize {
    if forward {
        idx
    } else {
        len - idx - 1
    }
}

/// Greedy two-pass fuzzy match.
///
/// The forward pass finds the earliest completion of the pattern, the
/// backward pass slides the window start right to the latest position that
/// still admits the full pattern, then the window is scored with the shared
/// rubric. Linear time, but the chosen alignment (and therefore score) may
/// be worse than what [`fuzzy_match_v2`](crate::fuzzy_match_v2) finds.
pub fn fuzzy_match_v1(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    fuzzy_match_v1_impl(
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
pub(crate) fn fuzzy_match_v1_impl(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    _slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    if pattern.is_empty() {
        return (MatchResult::new(0, 0, 0), None);
    }
    if ascii_fuzzy_index(text, pattern, case_sensitive).is_none() {
        return (MatchResult::NO_MATCH, None);
    }

    let len_runes = text.len();
    let len_pattern = pattern.len();
    let mut pidx = 0;
    let mut sidx = None;
    let mut eidx = None;

    for index in 0..len_runes {
        let c = fold_char(
            text.get(index_at(index, len_runes, forward)),
            case_sensitive,
            normalize,
        );
        if c == pattern[index_at(pidx, len_pattern, forward)] {
            if sidx.is_none() {
                sidx = Some(index);
            }
            pidx += 1;
            if pidx == len_pattern {
                eidx = Some(index + 1);
                break;
            }
        }
    }

    let (Some(mut sidx), Some(eidx)) = (sidx, eidx) else {
        return (MatchResult::NO_MATCH, None);
    };

    // Minimize the window by greedy matching in reverse.
    let mut pidx = len_pattern - 1;
    for index in (sidx..eidx).rev() {
        let c = fold_char(
            text.get(index_at(index, len_runes, forward)),
            case_sensitive,
            normalize,
        );
        if c == pattern[index_at(pidx, len_pattern, forward)] {
            if pidx == 0 {
                sidx = index;
                break;
            }
            pidx -= 1;
        }
    }

    let (sidx, eidx) = if forward {
        (sidx, eidx)
    } else {
        (len_runes - eidx, len_runes - sidx)
    };
    let (score, pos) = calculate_score(
        config,
        case_sensitive,
        normalize,
        text,
        pattern,
        sidx,
        eidx,
        with_pos,
    );
    (MatchResult::new(sidx as i32, eidx as i32, score), pos)
}
