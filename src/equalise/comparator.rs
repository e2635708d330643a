//! Word-count based sentence length comparison.

/// Outcome of comparing two sentences by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthComparison {
    /// The first sentence dominates the second.
    ALonger,
    /// Neither sentence dominates the other.
    Equivalent,
    /// The second sentence dominates the first.
    BLonger,
}

impl LengthComparison {
    /// Swaps the roles of the two sentences.
    pub fn reversed(self) -> Self {
        match self {
            LengthComparison::ALonger => LengthComparison::BLonger,
            LengthComparison::Equivalent => LengthComparison::Equivalent,
            LengthComparison::BLonger => LengthComparison::ALonger,
        }
    }
}

/// Number of space-separated fields in a sentence.
///
/// Every single space is a separator, so a glued sentence that starts with a
/// space (the first half was only a stop character) counts an empty leading
/// field. Empty and whitespace-only sentences count as a single word.
#[inline]
pub fn word_count(sentence: &str) -> usize {
    if sentence.trim().is_empty() {
        return 1;
    }
    sentence.split(' ').count()
}

/// Compares two sentences by word count.
///
/// A sentence dominates when its word count scaled by `ratio` still exceeds
/// the other's. If both dominate, which needs `ratio > 1`, the first wins.
///
/// # Example
/// ```
/// use corpus_cleaner::equalise::{compare_sentences, LengthComparison};
///
/// let result = compare_sentences("this sentence is longer than the second one", "i am short", 0.6);
/// assert_eq!(result, LengthComparison::ALonger);
/// ```
pub fn compare_sentences(a: &str, b: &str, ratio: f64) -> LengthComparison {
    let a_words = word_count(a) as f64;
    let b_words = word_count(b) as f64;

    let a_dominant = a_words * ratio > b_words;
    let b_dominant = b_words * ratio > a_words;

    if a_dominant {
        LengthComparison::ALonger
    } else if b_dominant {
        LengthComparison::BLonger
    } else {
        LengthComparison::Equivalent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("two  spaces"), 3);
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("   "), 1);
    }

    #[test]
    fn test_word_count_of_glued_lone_stop() {
        // "." glued to "Hh bb hh Ccc?" leaves a leading space behind.
        assert_eq!(word_count(" hh bb hh Ccc?"), 5);
        assert_eq!(
            compare_sentences("bb G? bb dd. dd. dd. bb a.", " hh bb hh Ccc?", 0.6),
            LengthComparison::Equivalent
        );
    }

    #[test]
    fn test_equivalent() {
        assert_eq!(
            compare_sentences(
                "these sentences are pretty much equivalent",
                "these sentences are actually equivalent",
                0.6
            ),
            LengthComparison::Equivalent
        );
    }

    #[test]
    fn test_a_longer() {
        assert_eq!(
            compare_sentences("this sentence is longer than the second one", "i am short", 0.6),
            LengthComparison::ALonger
        );
    }

    #[test]
    fn test_b_longer() {
        assert_eq!(
            compare_sentences("now i am short", "i am long enough to beat you this time", 0.6),
            LengthComparison::BLonger
        );
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("a b c d e f g h", "a b c"),
            ("a b c", "a b c d"),
            ("one", "one two three four five"),
            ("", "x"),
        ];
        for ratio in [0.3, 0.6, 0.9, 1.0] {
            for (a, b) in pairs {
                assert_eq!(
                    compare_sentences(a, b, ratio),
                    compare_sentences(b, a, ratio).reversed(),
                    "{:?} vs {:?} at ratio {}",
                    a,
                    b,
                    ratio
                );
            }
        }
    }

    #[test]
    fn test_tie_break_favours_a() {
        // With ratio > 1 both sides can dominate at once.
        assert_eq!(compare_sentences("a b", "c d", 1.5), LengthComparison::ALonger);
        assert_eq!(compare_sentences("c d", "a b", 1.5), LengthComparison::ALonger);
    }

    #[test]
    fn test_ratio_one_requires_strictly_more_words() {
        assert_eq!(compare_sentences("a b", "c d", 1.0), LengthComparison::Equivalent);
        assert_eq!(compare_sentences("a b c", "c d", 1.0), LengthComparison::ALonger);
    }
}
