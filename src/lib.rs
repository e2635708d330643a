//! # corpus-cleaner - Parallel Corpus Preparation
//!
//! Tools for preparing parallel natural-language corpora (for example a
//! bilingual pair of documents) for alignment-sensitive processing such as
//! statistical machine translation training.
//!
//! ## Overview
//!
//! Preparation happens in two steps:
//!
//! 1. **Scrubbing** turns raw, possibly columnar text into one sentence per
//!    line with paragraphs separated by a single blank line.
//! 2. **Equalisation** takes two scrubbed texts and glues over-segmented
//!    sentences together until both texts have the same paragraph count and
//!    every paragraph pair has the same sentence count. Sentences that
//!    cannot be paired are dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use corpus_cleaner::{Equaliser, Scrubber};
//!
//! let scrubber = Scrubber::default_config()?;
//! let english = scrubber.scrub("I like apples. They are\ngreen and crunchy.");
//! let french = scrubber.scrub("J'aime les pommes, elles sont vertes et croquantes.");
//!
//! let equalised = Equaliser::default_config().equalise(&english, &french);
//! let (english, french) = equalised.merge();
//!
//! assert_eq!(english.lines().count(), french.lines().count());
//! # Ok::<(), corpus_cleaner::CorpusError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Character classes, scrubbing and paragraph segmentation
//! - [`equalise`] - Length comparison, sentence gluing and alignment
//! - [`corpus`] - File-level drivers and loss reporting
//! - [`config`] - Serializable configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod equalise;
pub mod error;
pub mod text;

// Re-export commonly used types
pub use config::{Config, EqualiserConfig, ScrubberConfig};
pub use corpus::{equalise_files, scrub_file, scrub_files, EqualiseReport, ScrubReport};
pub use equalise::{
    align_paragraphs, compare_sentences, fuse_sentences, AlignedParagraph, EqualiseStats,
    Equalised, Equaliser, LengthComparison, ParagraphStats,
};
pub use error::{CorpusError, Result};
pub use text::{merge_paragraphs, split_paragraphs, CharClass, CharMatcher, Paragraph, Scrubber};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
