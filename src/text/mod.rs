//! Text processing: character classes, scrubbing and paragraph segmentation.

mod chars;
mod scrubber;
mod segmenter;

pub use chars::{CharClass, CharMatcher, DEFAULT_REORDER_CHARS, DEFAULT_STOP_CHARS};
pub use scrubber::{remove_columns, remove_excessive_whitespace, Scrubber};
pub use segmenter::{
    merge_paragraphs, split_paragraphs, Paragraph, PARAGRAPH_DELIMITER, SENTENCE_DELIMITER,
};
