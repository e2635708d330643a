//! Paragraph and sentence segmentation of normalized text.
//!
//! Normalized text carries one sentence per line and separates paragraphs
//! with a single blank line. Splitting does no trimming or validation; empty
//! paragraphs only disappear when the text is merged back together.

/// Delimiter between paragraphs.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Delimiter between sentences inside a paragraph.
pub const SENTENCE_DELIMITER: &str = "\n";

/// An ordered sequence of sentences.
pub type Paragraph = Vec<String>;

/// Splits text into paragraphs, each a list of sentences.
///
/// # Example
/// ```
/// use corpus_cleaner::text::split_paragraphs;
///
/// let paragraphs = split_paragraphs("P1S1.\nP1S2.\n\nP2S1.");
/// assert_eq!(paragraphs, vec![vec!["P1S1.", "P1S2."], vec!["P2S1."]]);
/// ```
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    text.split(PARAGRAPH_DELIMITER)
        .map(|block| block.split(SENTENCE_DELIMITER).map(str::to_string).collect())
        .collect()
}

/// Joins paragraphs back into text, omitting paragraphs that join to nothing.
pub fn merge_paragraphs<P>(paragraphs: &[P]) -> String
where
    P: AsRef<[String]>,
{
    paragraphs
        .iter()
        .map(|sentences| sentences.as_ref().join(SENTENCE_DELIMITER))
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_DELIMITER)
}
