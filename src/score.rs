use std::cmp::max;

use crate::chars::{fold_char, CharClass, Chars};
use crate::config::MatcherConfig;

pub const SCORE_MATCH: i16 = 16;
pub const SCORE_GAP_START: i16 = -3;
pub const SCORE_GAP_EXTENSION: i16 = -1;

// We prefer matches at the beginning of a word, but the bonus should not be
// too great to prevent the longer acronym matches from always winning over
// shorter fuzzy matches. The bonus point here was specifically chosen that
// the bonus is cancelled when the gap between the acronyms grows over
// 8 characters, which is approximately the average length of the words found
// in web2 dictionary and my file system.
pub const BONUS_BOUNDARY: i16 = SCORE_MATCH / 2;

// Although bonus point for non-word characters is non-contextual, we need it
// for computing bonus points for consecutive chunks starting with a non-word
// character.
pub const BONUS_NON_WORD: i16 = SCORE_MATCH / 2;

// Edge-triggered bonus for matches in camelCase words.
// Compared to word-boundary case, they don't accompany single-character gaps
// (e.g. FooBar vs. foo-bar), so we deduct bonus point accordingly.
pub const BONUS_CAMEL123: i16 = BONUS_BOUNDARY + SCORE_GAP_EXTENSION;

// Minimum bonus point given to characters in consecutive chunks.
// Note that bonus points for consecutive matches shouldn't have needed if we
// used fixed match score as in the original algorithm.
pub const BONUS_CONSECUTIVE: i16 = -(SCORE_GAP_START + SCORE_GAP_EXTENSION);

// The first character in the typed pattern usually has more significance
// than the rest so it's important that it appears at special positions where
// bonus points are given, e.g. "to-go" vs. "ongoing" on "og" or on "ogo".
// The amount of the extra bonus should be limited so that the gap penalty is
// still respected.
pub const BONUS_FIRST_CHAR_MULTIPLIER: i16 = 2;

impl MatcherConfig {
    pub(crate) const fn bonus_for(&self, prev_class: CharClass, class: CharClass) -> i16 {
        if class as u8 > CharClass::NonWord as u8 {
            // transition from non word to word
            match prev_class {
                CharClass::White => return self.bonus_boundary_white,
                CharClass::Delimiter => return self.bonus_boundary_delimiter,
                CharClass::NonWord => return BONUS_BOUNDARY,
                _ => {}
            }
        }
        if matches!(prev_class, CharClass::Lower) && matches!(class, CharClass::Upper)
            || !matches!(prev_class, CharClass::Number) && matches!(class, CharClass::Number)
        {
            // camelCase letter123
            BONUS_CAMEL123
        } else if matches!(class, CharClass::NonWord | CharClass::Delimiter) {
            BONUS_NON_WORD
        } else if matches!(class, CharClass::White) {
            self.bonus_boundary_white
        } else {
            0
        }
    }

    /// Bonus of the character at `idx`, derived from its predecessor. The
    /// start of the text counts as a whitespace boundary.
    pub(crate) fn bonus_at(&self, text: Chars, idx: usize) -> i16 {
        if idx == 0 {
            return self.bonus_boundary_white;
        }
        self.bonus_matrix[self.char_class_of(text.get(idx - 1)) as usize]
            [self.char_class_of(text.get(idx)) as usize]
    }
}

/// Scores the window `text[sidx..eidx]` against the full pattern.
///
/// This is the single rubric shared by the greedy matcher and the
/// exact/prefix/suffix variants so every mode reports scores on the same
/// scale as the optimal matcher. The window must admit the pattern in order
/// with its last character matching at `eidx - 1`.
pub(crate) fn calculate_score(
    config: &MatcherConfig,
    case_sensitive: bool,
    normalize: bool,
    text: Chars,
    pattern: &[char],
    sidx: usize,
    eidx: usize,
    with_pos: bool,
) -> (i32, Option<Vec<usize>>) {
    let mut pidx = 0;
    let mut score = 0i32;
    let mut in_gap = false;
    let mut consecutive = 0;
    let mut first_bonus: i16 = 0;
    let mut pos = with_pos.then(|| Vec::with_capacity(pattern.len()));

    let mut prev_class = if sidx > 0 {
        config.char_class_of(text.get(sidx - 1))
    } else {
        config.initial_char_class
    };

    for idx in sidx..eidx {
        let c = text.get(idx);
        let class = config.char_class_of(c);
        let c = fold_char(c, case_sensitive, normalize);
        if pidx < pattern.len() && c == pattern[pidx] {
            if let Some(pos) = pos.as_mut() {
                pos.push(idx);
            }
            score += SCORE_MATCH as i32;
            let mut bonus = config.bonus_matrix[prev_class as usize][class as usize];
            if consecutive == 0 {
                first_bonus = bonus;
            } else {
                // Break consecutive chunk
                if bonus >= BONUS_BOUNDARY && bonus > first_bonus {
                    first_bonus = bonus;
                }
                bonus = max(max(bonus, first_bonus), BONUS_CONSECUTIVE);
            }
            if pidx == 0 {
                score += (bonus * BONUS_FIRST_CHAR_MULTIPLIER) as i32;
            } else {
                score += bonus as i32;
            }
            in_gap = false;
            consecutive += 1;
            pidx += 1;
        } else {
            if in_gap {
                score += SCORE_GAP_EXTENSION as i32;
            } else {
                score += SCORE_GAP_START as i32;
            }
            in_gap = true;
            consecutive = 0;
            first_bonus = 0;
        }
        prev_class = class;
    }
    (score, pos)
}
