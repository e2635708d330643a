//! Sentence equalisation of parallel texts.
//!
//! Two normalized texts are split into paragraphs and the overlapping prefix
//! of paragraphs is aligned pairwise, so that both texts come out with the
//! same paragraph count and, per paragraph, the same sentence count.

mod comparator;
mod fuser;
mod paragraph;

pub use comparator::{compare_sentences, word_count, LengthComparison};
pub use fuser::fuse_sentences;
pub use paragraph::{align_paragraphs, AlignedParagraph, ParagraphStats};

use crate::config::EqualiserConfig;
use crate::error::Result;
use crate::text::{merge_paragraphs, split_paragraphs, Paragraph};
use log::{debug, warn};

/// Totals over every paragraph of an equalisation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualiseStats {
    /// Paragraphs in the first text.
    pub paragraphs_a: usize,
    /// Paragraphs in the second text.
    pub paragraphs_b: usize,
    /// Paragraph pairs that were aligned.
    pub paragraphs_aligned: usize,
    /// Sentences read from the aligned paragraphs of the first text.
    pub sentences_a: usize,
    /// Sentences read from the aligned paragraphs of the second text.
    pub sentences_b: usize,
    /// Sentence pairs emitted.
    pub sentences_aligned: usize,
    /// Glues performed on the first text.
    pub fusions_a: usize,
    /// Glues performed on the second text.
    pub fusions_b: usize,
    /// Mismatched pairs emitted because gluing overshot.
    pub forced_pushes: usize,
    /// Paragraphs cut short for lack of a sentence to glue.
    pub exhausted_paragraphs: usize,
}

impl EqualiseStats {
    fn record(&mut self, paragraph: &ParagraphStats) {
        self.paragraphs_aligned += 1;
        self.sentences_a += paragraph.sentences_a;
        self.sentences_b += paragraph.sentences_b;
        self.sentences_aligned += paragraph.aligned;
        self.fusions_a += paragraph.fusions_a;
        self.fusions_b += paragraph.fusions_b;
        self.forced_pushes += paragraph.forced_pushes;
        if paragraph.exhausted {
            self.exhausted_paragraphs += 1;
        }
    }

    /// Paragraphs of the longer text that had no counterpart.
    pub fn paragraphs_dropped(&self) -> usize {
        self.paragraphs_a.abs_diff(self.paragraphs_b)
    }
}

/// Two texts with equal paragraph and per-paragraph sentence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equalised {
    /// Paragraphs of the first text.
    pub a: Vec<Paragraph>,
    /// Paragraphs of the second text.
    pub b: Vec<Paragraph>,
    /// Run totals.
    pub stats: EqualiseStats,
}

impl Equalised {
    /// Reassembles both sides into text. Paragraphs left empty by
    /// alignment are omitted.
    pub fn merge(&self) -> (String, String) {
        (merge_paragraphs(&self.a), merge_paragraphs(&self.b))
    }
}

/// Equalises pairs of parallel texts with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Equaliser {
    config: EqualiserConfig,
}

impl Equaliser {
    /// Creates an equaliser, rejecting an invalid configuration.
    pub fn new(config: EqualiserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates an equaliser with default configuration.
    pub fn default_config() -> Self {
        Self {
            config: EqualiserConfig::default(),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &EqualiserConfig {
        &self.config
    }

    /// Aligns a single pair of paragraphs.
    pub fn align(&self, a: &[String], b: &[String]) -> AlignedParagraph {
        align_paragraphs(a, b, &self.config)
    }

    /// Equalises two texts.
    ///
    /// Paragraphs are paired by position; those beyond the shorter text's
    /// paragraph count are dropped. Each pair is aligned independently.
    ///
    /// # Example
    /// ```
    /// use corpus_cleaner::Equaliser;
    ///
    /// let equalised = Equaliser::default_config().equalise(
    ///     "One two three.\nFour five.\n\nExtra paragraph.",
    ///     "Uno dos tres.\nCuatro cinco.",
    /// );
    /// assert_eq!(equalised.a.len(), 1);
    /// assert_eq!(equalised.a[0].len(), equalised.b[0].len());
    /// ```
    pub fn equalise(&self, text_a: &str, text_b: &str) -> Equalised {
        let paragraphs_a = split_paragraphs(text_a);
        let paragraphs_b = split_paragraphs(text_b);

        let mut equalised = Equalised {
            stats: EqualiseStats {
                paragraphs_a: paragraphs_a.len(),
                paragraphs_b: paragraphs_b.len(),
                ..Default::default()
            },
            ..Default::default()
        };

        if paragraphs_a.len() != paragraphs_b.len() {
            warn!(
                "Paragraph counts differ ({} vs {}); dropping {} trailing paragraph(s)",
                paragraphs_a.len(),
                paragraphs_b.len(),
                equalised.stats.paragraphs_dropped()
            );
        }

        for (index, (para_a, para_b)) in paragraphs_a.iter().zip(&paragraphs_b).enumerate() {
            let aligned = self.align(para_a, para_b);
            debug!("Paragraph {}: {:?}", index, aligned.stats);

            equalised.stats.record(&aligned.stats);
            equalised.a.push(aligned.a);
            equalised.b.push(aligned.b);
        }

        equalised
    }
}

impl Default for Equaliser {
    fn default() -> Self {
        Self::default_config()
    }
}
