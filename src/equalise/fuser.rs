//! Gluing two adjacent sentences into one.

use crate::text::CharMatcher;

/// Glues `second` onto `first`.
///
/// A single stop character ending `first` is removed, and with
/// `lowercase_glued` the first character of `second` is lowercased so the
/// result reads as one sentence.
///
/// # Example
/// ```
/// use corpus_cleaner::equalise::fuse_sentences;
/// use corpus_cleaner::text::CharClass;
///
/// let glued = fuse_sentences("I like apples.", "I am lowercase.", true, &CharClass::stop_chars());
/// assert_eq!(glued, "I like apples i am lowercase.");
/// ```
pub fn fuse_sentences<S>(first: &str, second: &str, lowercase_glued: bool, stop_chars: &S) -> String
where
    S: CharMatcher + ?Sized,
{
    let first = match first.chars().next_back() {
        Some(last) if stop_chars.matches(last) => &first[..first.len() - last.len_utf8()],
        _ => first,
    };

    if lowercase_glued {
        let mut chars = second.chars();
        if let Some(initial) = chars.next() {
            let lowered: String = initial.to_lowercase().chain(chars).collect();
            return format!("{} {}", first, lowered);
        }
    }

    format!("{} {}", first, second)
}
