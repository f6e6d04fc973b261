use std::cmp::max;

use crate::chars::{rune, CharClass, Chars};
use crate::config::{config, MatcherConfig};
use crate::debug;
use crate::fuzzy_greedy::fuzzy_match_v1_impl;
use crate::normalize::normalize_rune;
use crate::prefilter::ascii_fuzzy_index;
use crate::score::{
    BONUS_BOUNDARY, BONUS_CONSECUTIVE, BONUS_FIRST_CHAR_MULTIPLIER, SCORE_GAP_EXTENSION,
    SCORE_GAP_START, SCORE_MATCH,
};
use crate::slab::{carve, Slab};
use crate::{MatchResult, Positions};

/// Optimal fuzzy match: the highest-scoring alignment of the pattern as an
/// in-order subsequence of the text.
///
/// Runs a modified Smith-Waterman over the window the ASCII prefilter
/// leaves. `O(n*m)` time and scratch memory; when a slab is supplied and
/// cannot hold the score matrix the call transparently degrades to the
/// greedy linear-time pass. On ties `forward` picks the earlier end
/// position, `!forward` the later one.
pub fn fuzzy_match_v2(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let config = config();
    fuzzy_match_v2_impl(
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
pub(crate) fn fuzzy_match_v2_impl(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    with_pos: bool,
    slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    let m = pattern.len();
    if m == 0 {
        return (MatchResult::new(0, 0, 0), with_pos.then(Vec::new));
    }

    // Phase 1. Optimized search for ASCII string
    let Some((min_idx, max_idx)) = ascii_fuzzy_index(text, pattern, case_sensitive) else {
        return (MatchResult::NO_MATCH, None);
    };
    let n = max_idx - min_idx;

    // A slab that cannot hold the score matrix for the narrowed window
    // would force every row onto the heap; the greedy pass is the bounded
    // alternative.
    if slab.as_ref().map_or(false, |slab| n * m > slab.cells16.len()) {
        cov_mark::hit!(slab_overflow_fallback);
        return fuzzy_match_v1_impl(
            config,
            case_sensitive,
            normalize,
            forward,
            text,
            pattern,
            with_pos,
            slab,
        );
    }

    let (mut arena16, mut arena32): (&mut [i16], &mut [u32]) = match slab {
        Some(slab) => (&mut slab.cells16, &mut slab.cells32),
        None => (Default::default(), Default::default()),
    };

    // Score row and consecutive-run row for the first pattern character,
    // the bonus at every position, and the first occurrence of every
    // pattern character.
    let mut h0 = carve(&mut arena16, n);
    let mut c0 = carve(&mut arena16, n);
    let mut b = carve(&mut arena16, n);
    let mut f = carve(&mut arena32, m);
    let mut t = carve(&mut arena32, n);
    text.copy_runes(&mut t, min_idx);

    // Phase 2. Calculate bonus for each position
    let mut max_score: i16 = 0;
    let mut max_score_pos = 0usize;
    let mut pidx = 0usize;
    let mut last_idx = 0usize;
    let pchar0 = pattern[0] as u32;
    let mut pchar = pattern[0] as u32;
    let mut prev_h0: i16 = 0;
    let mut prev_class = config.initial_char_class;
    let mut in_gap = false;

    for off in 0..n {
        let class;
        if t[off] < 0x80 {
            class = config.class_cache[t[off] as usize];
            if !case_sensitive && class == CharClass::Upper {
                t[off] += 32;
            }
        } else {
            let mut c = rune(t[off]);
            class = config.char_class_non_ascii(c);
            if !case_sensitive && class == CharClass::Upper {
                c = c.to_lowercase().next().unwrap_or(c);
            }
            if normalize {
                c = normalize_rune(c);
            }
            t[off] = c as u32;
        }
        let c = t[off];

        let bonus = config.bonus_matrix[prev_class as usize][class as usize];
        b[off] = bonus;
        prev_class = class;

        if c == pchar {
            if pidx < m {
                f[pidx] = off as u32;
                pidx += 1;
                pchar = pattern[pidx.min(m - 1)] as u32;
            }
            last_idx = off;
        }

        if c == pchar0 {
            let score = SCORE_MATCH + bonus * BONUS_FIRST_CHAR_MULTIPLIER;
            h0[off] = score;
            c0[off] = 1;
            if m == 1 {
                let better = if forward {
                    score > max_score
                } else {
                    score >= max_score
                };
                if better {
                    max_score = score;
                    max_score_pos = off;
                    // A boundary hit cannot be beaten, stop scanning.
                    if forward && bonus >= BONUS_BOUNDARY {
                        cov_mark::hit!(single_char_boundary_exit);
                        break;
                    }
                }
            }
            in_gap = false;
        } else {
            h0[off] = if in_gap {
                max(prev_h0 + SCORE_GAP_EXTENSION, 0)
            } else {
                max(prev_h0 + SCORE_GAP_START, 0)
            };
            c0[off] = 0;
            in_gap = true;
        }
        prev_h0 = h0[off];
    }
    if pidx != m {
        return (MatchResult::NO_MATCH, None);
    }
    if m == 1 {
        let result = MatchResult::new(
            (min_idx + max_score_pos) as i32,
            (min_idx + max_score_pos + 1) as i32,
            max_score as i32,
        );
        let pos = with_pos.then(|| vec![min_idx + max_score_pos]);
        return (result, pos);
    }

    // Phase 3. Fill in score matrix (H) and consecutive matrix (C). Rows
    // span the columns between the first occurrence of the first pattern
    // character and the last plausible match position.
    let f0 = f[0] as usize;
    let width = last_idx - f0 + 1;
    let mut h = carve(&mut arena16, width * m);
    let mut c = carve(&mut arena16, width * m);
    h[..width].copy_from_slice(&h0[f0..=last_idx]);
    c[..width].copy_from_slice(&c0[f0..=last_idx]);

    for i in 1..m {
        let pchar = pattern[i] as u32;
        let fi = f[i] as usize;
        let mut in_gap = false;
        let (h_prev, h_cur) = h[(i - 1) * width..(i + 1) * width].split_at_mut(width);
        let (c_prev, c_cur) = c[(i - 1) * width..(i + 1) * width].split_at_mut(width);
        // The cell left of the row head counts as zero.
        let mut prev_score: i16 = 0;

        for col in fi..=last_idx {
            let j = col - f0;
            let gap_penalty = if in_gap {
                SCORE_GAP_EXTENSION
            } else {
                SCORE_GAP_START
            };
            let s2 = prev_score + gap_penalty;
            let mut s1: i16 = 0;
            let mut consecutive: i16 = 0;

            if t[col] == pchar {
                s1 = h_prev[j - 1] + SCORE_MATCH;
                let mut bonus = b[col];
                consecutive = c_prev[j - 1] + 1;
                if consecutive > 1 {
                    let first_bonus = b[col + 1 - consecutive as usize];
                    if bonus >= BONUS_BOUNDARY && bonus > first_bonus {
                        // A stronger boundary restarts the chunk.
                        cov_mark::hit!(consecutive_chunk_break);
                        consecutive = 1;
                    } else {
                        bonus = max(bonus, max(BONUS_CONSECUTIVE, first_bonus));
                    }
                }
                if s1 + bonus < s2 {
                    s1 += b[col];
                    consecutive = 0;
                } else {
                    s1 += bonus;
                }
            }
            c_cur[j] = consecutive;
            in_gap = s1 < s2;
            let score = max(max(s1, s2), 0);
            if i == m - 1 {
                let better = if forward {
                    score > max_score
                } else {
                    score >= max_score
                };
                if better {
                    max_score = score;
                    max_score_pos = col;
                }
            }
            h_cur[j] = score;
            prev_score = score;
        }
    }

    if debug::enabled() {
        debug::print_matrices(&t, pattern, &f, f0, last_idx, &h, &c);
    }

    // Phase 4. (Optional) Backtrace to find character positions
    let mut pos = with_pos.then(|| Vec::with_capacity(m));
    let mut j = f0;
    if let Some(pos) = pos.as_mut() {
        let mut i = m - 1;
        j = max_score_pos;
        let mut prefer_match = true;
        loop {
            let row = i * width;
            let j0 = j - f0;
            let s = h[row + j0];
            let mut s1 = 0;
            let mut s2 = 0;
            if i > 0 && j >= f[i] as usize {
                s1 = h[row - width + j0 - 1];
            }
            if j > f[i] as usize {
                s2 = h[row + j0 - 1];
            }
            // Prefer the diagonal move on a tie while inside a consecutive
            // chunk. The look-down peek stays within the region the row
            // below actually wrote, so stale arena cells cannot flip it.
            let in_chunk = c[row + j0] > 1
                || i + 1 < m
                    && j + 1 <= last_idx
                    && j + 1 >= f[i + 1] as usize
                    && c[row + width + j0 + 1] > 0;
            if s > s1 && (s > s2 || s == s2 && prefer_match) {
                pos.push(min_idx + j);
                if i == 0 {
                    break;
                }
                i -= 1;
            }
            prefer_match = in_chunk;
            j -= 1;
        }
        pos.reverse();
    }

    // The start offset reported here is exact only when positions were
    // requested; otherwise it is the first occurrence of the first pattern
    // character, which is all the begin tiebreak needs.
    let result = MatchResult::new(
        (min_idx + j) as i32,
        (min_idx + max_score_pos + 1) as i32,
        max_score as i32,
    );
    (result, pos)
}
