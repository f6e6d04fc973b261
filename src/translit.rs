use std::ops::Range;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::chars::Chars;
use crate::slab::Slab;
use crate::{MatchResult, Positions};

/// External index that compiles a romaji pattern into a matcher over
/// kana/kanji text. The dictionary and its compiler live outside this
/// crate; the matching core only consumes the byte range it reports.
pub trait TransliterationIndex: Send + Sync {
    /// Byte range of the first region of `text` reachable from the romaji
    /// `pattern`, if any.
    fn find(&self, pattern: &str, text: &str) -> Option<Range<usize>>;
}

static INDEX: RwLock<Option<Arc<dyn TransliterationIndex>>> = RwLock::new(None);

/// Install (or with `None`, remove) the process-wide transliteration index
/// consulted by [`translit_match`].
pub fn set_transliteration_index(index: Option<Arc<dyn TransliterationIndex>>) {
    *INDEX.write() = index;
}

/// Transliteration-aware match. Unlike every other mode the reported range
/// is in bytes, the score is the byte length of the range, and no positions
/// are produced. Without a registered index nothing matches.
pub fn translit_match(
    _case_sensitive: bool,
    _normalize: bool,
    _forward: bool,
    text: Chars<'_>,
    pattern: &[char],
    _with_pos: bool,
    _slab: Option<&mut Slab>,
) -> (MatchResult, Positions) {
    if pattern.is_empty() {
        return (MatchResult::new(0, 0, 0), None);
    }
    let index = INDEX.read().as_ref().map(Arc::clone);
    let Some(index) = index else {
        return (MatchResult::NO_MATCH, None);
    };
    let pattern: String = pattern.iter().collect();
    let text = text.to_string();
    let Some(range) = index.find(&pattern, &text) else {
        return (MatchResult::NO_MATCH, None);
    };
    let score = (range.end - range.start) as i32;
    (MatchResult::new(range.start as i32, range.end as i32, score), None)
}
