/*!
`sieve_matcher` is the scoring and matching core of an interactive fuzzy
filter: given a query pattern and a candidate text it decides whether the
text matches, where, and how well.

All match modes agree on a single scoring rubric, so a fuzzy hit, an exact
substring hit and a prefix hit can be ranked against each other. The optimal
fuzzy matcher is a modified Smith-Waterman over the window an ASCII
prefilter leaves, with a greedy linear-time fallback for oversized inputs.
Scratch memory is carved per call from a caller-owned [`Slab`] so matching
millions of candidates does not allocate.

The crate deliberately ends at the match functions: reading candidates,
parsing the query into terms and operators, ranking the surviving
candidates and rendering them are the caller's business. Callers also
pre-fold the pattern: lowercased when matching case-insensitively,
normalized when matching with normalization.

Call [`init`] once with the desired scheme before matching; the derived
class and bonus tables are process-wide and read-only afterwards. Each
worker thread brings its own [`Slab`] and invokes any of the match
functions, all of which share one signature:

```
use sieve_matcher::{fuzzy_match_v2, Chars, Slab};

sieve_matcher::init("default");
let mut slab = Slab::default();
let mut buf = Vec::new();
let text = Chars::new("src/fuzzy_matcher.rs", &mut buf);
let pattern: Vec<char> = "fzm".chars().collect();
let (result, positions) =
    fuzzy_match_v2(false, false, true, text, &pattern, true, Some(&mut slab));
assert!(result.is_match());
assert_eq!(positions.unwrap().len(), pattern.len());
```
*/

mod anchor;
pub mod chars;
mod config;
mod debug;
mod exact;
mod fuzzy_greedy;
mod fuzzy_optimal;
mod normalize;
mod prefilter;
mod score;
mod slab;
mod translit;


pub use crate::anchor::{equal_match, prefix_match, suffix_match};
pub use crate::chars::{CharBuf, CharClass, Chars};
pub use crate::config::{init, MatcherConfig, Scheme, UnknownScheme};
pub use crate::debug::set_debug;
pub use crate::exact::{exact_match_boundary, exact_match_naive};
pub use crate::fuzzy_greedy::fuzzy_match_v1;
pub use crate::fuzzy_optimal::fuzzy_match_v2;
pub use crate::normalize::normalize_rune;
pub use crate::score::{
    BONUS_BOUNDARY, BONUS_CAMEL123, BONUS_CONSECUTIVE, BONUS_FIRST_CHAR_MULTIPLIER, BONUS_NON_WORD,
    SCORE_GAP_EXTENSION, SCORE_GAP_START, SCORE_MATCH,
};
pub use crate::slab::{Slab, SLAB_CELLS_16, SLAB_CELLS_32};
pub use crate::translit::{set_transliteration_index, translit_match, TransliterationIndex};

/// Positions of the matched pattern characters in the text, ascending.
/// `None` when the caller did not ask for positions, the match failed, or
/// the mode does not produce positions.
pub type Positions = Option<Vec<usize>>;

/// Outcome of a match: the position range and the score. `start == end ==
/// -1` (and score 0) means the pattern cannot be aligned in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub start: i32,
    pub end: i32,
    pub score: i32,
}

impl MatchResult {
    pub const NO_MATCH: MatchResult = MatchResult {
        start: -1,
        end: -1,
        score: 0,
    };

    #[inline]
    pub(crate) fn new(start: i32, end: i32, score: i32) -> Self {
        MatchResult { start, end, score }
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.start >= 0
    }
}

/// The common shape of every match function:
/// `(case_sensitive, normalize, forward, text, pattern, with_pos, slab)`.
pub type MatchFn = fn(
    bool,
    bool,
    bool,
    Chars<'_>,
    &[char],
    bool,
    Option<&mut Slab>,
) -> (MatchResult, Positions);

/// Tag for selecting a match function; the query parser picks one per term
/// based on its operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    FuzzyV2,
    FuzzyV1,
    ExactNaive,
    ExactBoundary,
    Prefix,
    Suffix,
    Equal,
    Translit,
}

/// The match function implementing `mode`.
pub fn match_fn(mode: MatchMode) -> MatchFn {
    match mode {
        MatchMode::FuzzyV2 => fuzzy_match_v2,
        MatchMode::FuzzyV1 => fuzzy_match_v1,
        MatchMode::ExactNaive => exact_match_naive,
        MatchMode::ExactBoundary => exact_match_boundary,
        MatchMode::Prefix => prefix_match,
        MatchMode::Suffix => suffix_match,
        MatchMode::Equal => equal_match,
        MatchMode::Translit => translit_match,
    }
}
