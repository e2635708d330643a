//! Character classes for sentence boundaries and reorderable punctuation.

use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default sentence-terminating characters.
pub const DEFAULT_STOP_CHARS: &str = ".;!?";

/// Default characters that may be swapped with a preceding stop character.
pub const DEFAULT_REORDER_CHARS: &str = "\"')]}";

/// Capability of deciding whether a character belongs to a class.
///
/// Implemented by [`CharClass`] and by any `Fn(char) -> bool`, so
/// locale-specific rules can be plugged in where a fixed set is too rigid.
pub trait CharMatcher {
    /// Returns true if `c` is a member of this class.
    fn matches(&self, c: char) -> bool;
}

impl<F> CharMatcher for F
where
    F: Fn(char) -> bool,
{
    fn matches(&self, c: char) -> bool {
        self(c)
    }
}

/// A non-empty, ordered set of characters.
///
/// Serialized as a plain string, e.g. `".;!?"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharClass {
    chars: Vec<char>,
}

impl CharClass {
    /// Builds a class from the characters of `members`, dropping duplicates.
    ///
    /// Whitespace is ignored so `". ; ! ?"` and `".;!?"` are the same class.
    pub fn new(members: &str) -> Result<Self> {
        let mut chars: Vec<char> = Vec::new();
        for c in members.chars().filter(|c| !c.is_whitespace()) {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }

        if chars.is_empty() {
            return Err(CorpusError::Config(format!(
                "character class {:?} contains no characters",
                members
            )));
        }

        Ok(Self { chars })
    }

    /// The default sentence stop characters (`. ; ! ?`).
    pub fn stop_chars() -> Self {
        Self {
            chars: DEFAULT_STOP_CHARS.chars().collect(),
        }
    }

    /// The default reorderable closing characters (`" ' ) ] }`).
    pub fn reorder_chars() -> Self {
        Self {
            chars: DEFAULT_REORDER_CHARS.chars().collect(),
        }
    }

    /// Returns true if `c` is in the class.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the characters in insertion order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the class.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a class cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Regex alternation matching any single member, e.g. `\.|;|!|\?`.
    ///
    /// Every member is escaped, so characters such as `|` or `)` are
    /// matched literally.
    pub fn regex_alternation(&self) -> String {
        self.chars
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl CharMatcher for CharClass {
    fn matches(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl TryFrom<String> for CharClass {
    type Error = CorpusError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<CharClass> for String {
    fn from(class: CharClass) -> Self {
        class.chars.into_iter().collect()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
