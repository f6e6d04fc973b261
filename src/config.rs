use std::str::FromStr;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::chars::{CharClass, CLASS_COUNT, WHITE_CHARS};
use crate::score::BONUS_BOUNDARY;

/// A preset bundle of delimiter characters and boundary magnitudes tailored
/// to a kind of input: general text, filesystem paths, or shell history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Default,
    Path,
    History,
}

/// Error returned when parsing an unknown scheme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownScheme;

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(name: &str) -> Result<Self, UnknownScheme> {
        match name {
            "default" => Ok(Scheme::Default),
            "path" => Ok(Scheme::Path),
            "history" => Ok(Scheme::History),
            _ => Err(UnknownScheme),
        }
    }
}

const DEFAULT_DELIMITERS: &[u8] = b"/,:;|";
const PATH_DELIMITERS: &[u8] = if cfg!(windows) { b"\\/" } else { b"/" };

/// Precomputed, read-only tables derived from a [`Scheme`].
///
/// One instance lives behind the process-wide lock (see [`init`]); tests and
/// embedders that need several schemes side by side can build their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    pub delimiter_chars: &'static [u8],
    /// Extra bonus for word boundary after whitespace character or beginning of the string
    pub(crate) bonus_boundary_white: i16,
    /// Extra bonus for word boundary after the scheme's delimiter characters
    pub(crate) bonus_boundary_delimiter: i16,
    /// Class assumed for the position before the start of the text
    pub initial_char_class: CharClass,
    pub(crate) class_cache: [CharClass; 128],
    pub(crate) bonus_matrix: [[i16; CLASS_COUNT]; CLASS_COUNT],
}

const fn byte_set_contains(set: &[u8], b: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == b {
            return true;
        }
        i += 1;
    }
    false
}

impl MatcherConfig {
    pub const fn new(scheme: Scheme) -> Self {
        let (bonus_boundary_white, bonus_boundary_delimiter, delimiter_chars, initial_char_class) =
            match scheme {
                Scheme::Default => (
                    BONUS_BOUNDARY + 2,
                    BONUS_BOUNDARY + 1,
                    DEFAULT_DELIMITERS,
                    CharClass::White,
                ),
                Scheme::Path => (
                    BONUS_BOUNDARY,
                    BONUS_BOUNDARY + 1,
                    PATH_DELIMITERS,
                    CharClass::Delimiter,
                ),
                Scheme::History => (
                    BONUS_BOUNDARY,
                    BONUS_BOUNDARY,
                    DEFAULT_DELIMITERS,
                    CharClass::White,
                ),
            };

        let mut config = MatcherConfig {
            delimiter_chars,
            bonus_boundary_white,
            bonus_boundary_delimiter,
            initial_char_class,
            class_cache: [CharClass::NonWord; 128],
            bonus_matrix: [[0; CLASS_COUNT]; CLASS_COUNT],
        };

        let mut i = 0;
        while i < 128 {
            let b = i as u8;
            config.class_cache[i] = if b >= b'a' && b <= b'z' {
                CharClass::Lower
            } else if b >= b'A' && b <= b'Z' {
                CharClass::Upper
            } else if b >= b'0' && b <= b'9' {
                CharClass::Number
            } else if byte_set_contains(WHITE_CHARS, b) {
                CharClass::White
            } else if byte_set_contains(delimiter_chars, b) {
                CharClass::Delimiter
            } else {
                CharClass::NonWord
            };
            i += 1;
        }

        let classes = [
            CharClass::White,
            CharClass::NonWord,
            CharClass::Delimiter,
            CharClass::Lower,
            CharClass::Upper,
            CharClass::Letter,
            CharClass::Number,
        ];
        let mut prev = 0;
        while prev < CLASS_COUNT {
            let mut cur = 0;
            while cur < CLASS_COUNT {
                config.bonus_matrix[prev][cur] = config.bonus_for(classes[prev], classes[cur]);
                cur += 1;
            }
            prev += 1;
        }

        config
    }

    pub(crate) fn char_class_non_ascii(&self, c: char) -> CharClass {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Number
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_whitespace() {
            CharClass::White
        } else if c.is_ascii() && byte_set_contains(self.delimiter_chars, c as u8) {
            CharClass::Delimiter
        } else {
            CharClass::NonWord
        }
    }

    #[inline]
    pub(crate) fn char_class_of(&self, c: char) -> CharClass {
        if c.is_ascii() {
            self.class_cache[c as usize]
        } else {
            self.char_class_non_ascii(c)
        }
    }
}

static CONFIG: RwLock<MatcherConfig> = RwLock::new(MatcherConfig::new(Scheme::Default));

/// Install the process-wide scheme before running any matcher.
///
/// Returns `false` for an unknown scheme name and leaves the previous
/// configuration untouched. The derived tables are strictly read-only
/// afterwards; re-initializing with a different scheme waits for in-flight
/// matchers to drain and must not race new ones.
pub fn init(scheme: &str) -> bool {
    let Ok(scheme) = scheme.parse() else {
        return false;
    };
    *CONFIG.write() = MatcherConfig::new(scheme);
    true
}

pub(crate) fn config() -> RwLockReadGuard<'static, MatcherConfig> {
    CONFIG.read()
}
