use crate::chars::{fold_char, CharClass, Chars};
use crate::config::{config, MatcherConfig};
use crate::fuzzy_greedy::index_at;
use crate::prefilter::ascii_fuzzy_index;
use crate::score::{calculate_score, BONUS_BOUNDARY, SCORE_MATCH};
use crate::slab::Slab;
use crate::{MatchResult, Positions};

/// Contiguous occurrence of the pattern anywhere in the text, scored with
/// the shared rubric. Among all occurrences the one whose first character
/// carries the highest bonus wins.
pub fn exact_match_naive(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    exact_match_impl(
        &config,
        case_sensitive,
        normalize,
        forward,
        false,
        text,
        pattern,
        with_pos,
        slab,
    )
}

/// Like [`exact_match_naive`], but an occurrence only counts when both of
/// its endpoints sit on word boundaries.
pub fn exact_match_boundary(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    exact_match_impl(
        &config,
        case_sensitive,
        normalize,
        forward,
        true,
        text,
        pattern,
        with_pos,
        slab,
    )
}

/// Quality of the boundary adjacent to an endpoint of a boundary match.
/// Underscore boundaries rank below the true delimiters.
fn endpoint_bonus(config: &MatcherConfig, adjacent: Option<char>) -> i32 {
    let Some(c) = adjacent else {
        return config.bonus_boundary_white as i32;
    };
    let bonus = match config.char_class_of(c) {
        CharClass::White => config.bonus_boundary_white,
        CharClass::Delimiter => config.bonus_boundary_delimiter,
        _ => BONUS_BOUNDARY,
    };
    if c == '_' {
        bonus as i32 - 1
    } else {
        bonus as i32
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn exact_match_impl(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    boundary_check: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    _slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    if pattern.is_empty() {
        return (MatchResult::new(0, 0, 0), None);
    }

    let len_runes = text.len();
    let len_pattern = pattern.len();
    if len_runes < len_pattern {
        return (MatchResult::NO_MATCH, None);
    }
    if ascii_fuzzy_index(text, pattern, case_sensitive).is_none() {
        return (MatchResult::NO_MATCH, None);
    }

    // For simplicity, only the bonus at the first character position is
    // compared between candidate occurrences.
    let mut pidx = 0;
    let mut best_pos: Option<usize> = None;
    let mut bonus: i16 = 0;
    let mut best_bonus: i16 = -1;
    let mut index = 0;
    while index < len_runes {
        let index_ = index_at(index, len_runes, forward);
        let c = fold_char(text.get(index_), case_sensitive, normalize);
        let pidx_ = index_at(pidx, len_pattern, forward);
        if pattern[pidx_] == c {
            if pidx_ == 0 {
                bonus = config.bonus_at(text, index_);
            }
            let mut ok = true;
            if boundary_check {
                if pidx_ == 0 {
                    ok = index_ == 0
                        || config.char_class_of(text.get(index_ - 1)) <= CharClass::Delimiter;
                }
                if ok && pidx_ == len_pattern - 1 {
                    ok = index_ == len_runes - 1
                        || config.char_class_of(text.get(index_ + 1)) <= CharClass::Delimiter;
                }
            }
            if ok {
                pidx += 1;
                if pidx == len_pattern {
                    if bonus > best_bonus {
                        best_pos = Some(index);
                        best_bonus = bonus;
                    }
                    if bonus >= BONUS_BOUNDARY {
                        break;
                    }
                    index -= pidx - 1;
                    pidx = 0;
                    bonus = 0;
                }
            } else {
                index -= pidx;
                pidx = 0;
                bonus = 0;
            }
        } else if pidx > 0 {
            index -= pidx;
            pidx = 0;
            bonus = 0;
        }
        index += 1;
    }

    let Some(best_pos) = best_pos else {
        return (MatchResult::NO_MATCH, None);
    };
    let (sidx, eidx) = if forward {
        (best_pos + 1 - len_pattern, best_pos + 1)
    } else {
        (len_runes - (best_pos + 1), len_runes - (best_pos + 1 - len_pattern))
    };

    let score = if boundary_check {
        // Scored straight from the two endpoint boundaries, on a base that
        // keeps boundary matches comparable with the other modes.
        let m = len_pattern as i32;
        let start = sidx.checked_sub(1).map(|i| text.get(i));
        let end = (eidx < len_runes).then(|| text.get(eidx));
        SCORE_MATCH as i32 * m
            + config.bonus_boundary_white as i32 * (m + 1)
            + endpoint_bonus(config, start)
            + endpoint_bonus(config, end)
    } else {
        let (score, _) = calculate_score(
            config,
            case_sensitive,
            normalize,
            text,
            pattern,
            sidx,
            eidx,
            false,
        );
        score
    };
    let pos = with_pos.then(|| (sidx..eidx).collect());
    (MatchResult::new(sidx as i32, eidx as i32, score), pos)
}
