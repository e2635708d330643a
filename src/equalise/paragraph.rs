//! Greedy two-cursor alignment of a pair of paragraphs.
//!
//! Both paragraphs are walked in lockstep. When the current sentence on one
//! side is much shorter than its counterpart, it is glued to the sentence
//! after it and the comparison is retried. A glue that would overshoot is
//! abandoned and the pair is emitted as-is. Running out of sentences to glue
//! ends the paragraph; whatever is left on either side is dropped.

use crate::config::EqualiserConfig;
use crate::equalise::comparator::{compare_sentences, LengthComparison};
use crate::equalise::fuser::fuse_sentences;

/// Counters describing how a paragraph pair was aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphStats {
    /// Sentences in the first paragraph.
    pub sentences_a: usize,
    /// Sentences in the second paragraph.
    pub sentences_b: usize,
    /// Sentence pairs emitted.
    pub aligned: usize,
    /// Glues accepted on the first side.
    pub fusions_a: usize,
    /// Glues accepted on the second side.
    pub fusions_b: usize,
    /// Pairs emitted despite a length mismatch because gluing overshot.
    pub forced_pushes: usize,
    /// Alignment stopped because a glue needed a sentence that doesn't exist.
    pub exhausted: bool,
}

/// Result of aligning one paragraph pair. Both sides have equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedParagraph {
    /// Aligned sentences of the first paragraph.
    pub a: Vec<String>,
    /// Aligned sentences of the second paragraph.
    pub b: Vec<String>,
    /// Alignment counters.
    pub stats: ParagraphStats,
}

impl AlignedParagraph {
    /// Number of aligned sentence pairs.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns true if nothing survived alignment.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Read position into one side's sentences.
///
/// A glued sentence replaces the sentence after the cursor, and the cursor
/// moves onto it, so `glued` only ever shadows the sentence at `index`.
struct Cursor<'a> {
    sentences: &'a [String],
    index: usize,
    glued: Option<String>,
}

impl<'a> Cursor<'a> {
    fn new(sentences: &'a [String]) -> Self {
        Self {
            sentences,
            index: 0,
            glued: None,
        }
    }

    fn current(&self) -> Option<&str> {
        if self.index >= self.sentences.len() {
            return None;
        }
        Some(match &self.glued {
            Some(glued) => glued.as_str(),
            None => self.sentences[self.index].as_str(),
        })
    }

    fn lookahead(&self) -> Option<&'a str> {
        self.sentences.get(self.index + 1).map(String::as_str)
    }

    fn absorb_next(&mut self, glued: String) {
        self.index += 1;
        self.glued = Some(glued);
    }

    fn take(&mut self) -> Option<String> {
        let sentence = match self.glued.take() {
            Some(glued) => glued,
            None => self.sentences.get(self.index)?.clone(),
        };
        self.index += 1;
        Some(sentence)
    }
}

/// Aligns two paragraphs so they end up with the same number of sentences.
///
/// The inputs are left untouched; the aligned sentences are returned as new
/// vectors of equal length, in their original relative order.
pub fn align_paragraphs(a: &[String], b: &[String], config: &EqualiserConfig) -> AlignedParagraph {
    let mut aligned = AlignedParagraph {
        stats: ParagraphStats {
            sentences_a: a.len(),
            sentences_b: b.len(),
            ..Default::default()
        },
        ..Default::default()
    };

    let mut a_cursor = Cursor::new(a);
    let mut b_cursor = Cursor::new(b);

    loop {
        let (Some(a_sentence), Some(b_sentence)) = (a_cursor.current(), b_cursor.current()) else {
            break;
        };

        match compare_sentences(a_sentence, b_sentence, config.ratio) {
            LengthComparison::BLonger => {
                let Some(next) = a_cursor.lookahead() else {
                    aligned.stats.exhausted = true;
                    break;
                };
                let glued =
                    fuse_sentences(a_sentence, next, config.lowercase_glued, &config.stop_chars);

                if compare_sentences(&glued, b_sentence, config.ratio) != LengthComparison::ALonger {
                    a_cursor.absorb_next(glued);
                    aligned.stats.fusions_a += 1;
                    continue;
                }
                aligned.stats.forced_pushes += 1;
            }
            LengthComparison::ALonger => {
                let Some(next) = b_cursor.lookahead() else {
                    aligned.stats.exhausted = true;
                    break;
                };
                let glued =
                    fuse_sentences(b_sentence, next, config.lowercase_glued, &config.stop_chars);

                if compare_sentences(a_sentence, &glued, config.ratio) != LengthComparison::BLonger {
                    b_cursor.absorb_next(glued);
                    aligned.stats.fusions_b += 1;
                    continue;
                }
                aligned.stats.forced_pushes += 1;
            }
            LengthComparison::Equivalent => {}
        }

        // Equivalent, or forced to be.
        if let (Some(a_sentence), Some(b_sentence)) = (a_cursor.take(), b_cursor.take()) {
            aligned.a.push(a_sentence);
            aligned.b.push(b_sentence);
        }
    }

    aligned.stats.aligned = aligned.a.len();
    aligned
}
