//! Normalization of raw corpus text into one-sentence-per-line form.
//!
//! Raw scraped text is often split into columns, carries American-style
//! punctuation inside closing quotes and has irregular whitespace. The
//! scrubber fixes those up so the result can be fed to the equaliser:
//! paragraphs separated by exactly one blank line, one sentence per line.

use crate::config::ScrubberConfig;
use crate::error::{CorpusError, Result};
use crate::text::segmenter::{PARAGRAPH_DELIMITER, SENTENCE_DELIMITER};
use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());

static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\S)").unwrap());

static SPACES_AROUND_LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").unwrap());

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Runs the full scrubbing pipeline with a fixed configuration.
///
/// The patterns that depend on the configured character classes are
/// compiled once here and reused for every text.
#[derive(Debug, Clone)]
pub struct Scrubber {
    config: ScrubberConfig,
    /// A stop character directly followed by a reorderable one.
    reorder: Regex,
    /// A stop character and the spaces after it.
    sentence_end: Regex,
}

impl Scrubber {
    /// Creates a new scrubber, compiling the patterns for `config`.
    pub fn new(config: ScrubberConfig) -> Result<Self> {
        let stop = config.stop_chars.regex_alternation();
        let reorder = config.reorder_chars.regex_alternation();

        let reorder = compile(&format!("(?P<stop>{})(?P<close>{})", stop, reorder))?;
        let sentence_end = compile(&format!("(?P<stop>{}) *", stop))?;

        Ok(Self {
            config,
            reorder,
            sentence_end,
        })
    }

    /// Creates a scrubber with default configuration.
    pub fn default_config() -> Result<Self> {
        Self::new(ScrubberConfig::default())
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ScrubberConfig {
        &self.config
    }

    /// Scrubs text. The passes run in a fixed order; reordering must happen
    /// before sentences are split, and whitespace is tidied last.
    pub fn scrub(&self, text: &str) -> String {
        let text = self.reorder_stop_chars(text);
        let text = remove_columns(&text);
        let text = self.split_as_one_sentence_per_line(&text);
        remove_excessive_whitespace(&text)
    }

    /// Moves stop characters behind a directly following closing character.
    ///
    /// `'periods;'` becomes `'periods';`, `"marks!"` becomes `"marks"!`.
    pub fn reorder_stop_chars(&self, text: &str) -> String {
        self.reorder.replace_all(text, "${close}${stop}").into_owned()
    }

    /// Breaks the line after every stop character, eating the spaces that
    /// follow it.
    ///
    /// A line break at the very end is removed, and so is one directly
    /// before it: text ending in a blank line loses both breaks.
    pub fn split_as_one_sentence_per_line(&self, text: &str) -> String {
        let replaced = self.sentence_end.replace_all(text, "${stop}\n");
        let split: &str = &replaced;
        split
            .strip_suffix("\n\n")
            .or_else(|| split.strip_suffix('\n'))
            .unwrap_or(split)
            .to_string()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| CorpusError::Config(format!("invalid scrubber pattern {:?}: {}", pattern, e)))
}

/// Collapses blank-line runs, strips leading document whitespace, trims
/// spaces around line breaks, squeezes space runs and drops tabs.
pub fn remove_excessive_whitespace(text: &str) -> String {
    let text = EXCESS_LINE_BREAKS.replace_all(text, "\n\n");
    let text = LEADING_WHITESPACE.replace(&text, "$1");
    let text = SPACES_AROUND_LINE_BREAK.replace_all(&text, "\n");
    let text = SPACE_RUNS.replace_all(&text, " ");
    text.replace('\t', "")
}

/// Joins the lines of every paragraph into a single line.
///
/// Text laid out in columns breaks sentences at arbitrary points; this
/// undoes that before sentences are re-split on stop characters.
pub fn remove_columns(text: &str) -> String {
    text.split(PARAGRAPH_DELIMITER)
        .map(|paragraph| paragraph.split(SENTENCE_DELIMITER).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::chars::CharClass;

    fn scrubber() -> Scrubber {
        Scrubber::default_config().unwrap()
    }

    #[test]
    fn test_remove_excessive_whitespace() {
        let input = "\n\nThis line should not have any linebreaks above it, and only two below it.\n\n\n\n   \tThere should be no spaces or tabs in front or at the end of this line.\nThere  should   only be    one space     between   words.";
        let expected = "This line should not have any linebreaks above it, and only two below it.\n\nThere should be no spaces or tabs in front or at the end of this line.\nThere should only be one space between words.";
        assert_eq!(remove_excessive_whitespace(input), expected);
    }

    #[test]
    fn test_remove_columns() {
        let input = "This paragraph is\nsplit up into columns\nfor no good reason.";
        assert_eq!(
            remove_columns(input),
            "This paragraph is split up into columns for no good reason."
        );
    }

    #[test]
    fn test_remove_columns_keeps_paragraphs() {
        assert_eq!(remove_columns("a\nb\n\nc\nd"), "a b\n\nc d");
    }

    #[test]
    fn test_reorder_stop_chars() {
        let input = "American English calls full stops 'periods;' they also insert them before closing \"quotation marks!\"";
        let expected = "American English calls full stops 'periods'; they also insert them before closing \"quotation marks\"!";
        assert_eq!(scrubber().reorder_stop_chars(input), expected);
    }

    #[test]
    fn test_reorder_only_swaps_adjacent_pair() {
        let scrubber = scrubber();
        assert_eq!(scrubber.reorder_stop_chars("(so.)]"), "(so).]");
        assert_eq!(scrubber.reorder_stop_chars("no change."), "no change.");
    }

    #[test]
    fn test_split_as_one_sentence_per_line() {
        let input = "This is the first sentence in this paragraph. This is the second--should be on its own line.";
        let expected = "This is the first sentence in this paragraph.\nThis is the second--should be on its own line.";
        assert_eq!(scrubber().split_as_one_sentence_per_line(input), expected);
    }

    #[test]
    fn test_split_trims_trailing_blank_line() {
        let scrubber = scrubber();
        assert_eq!(scrubber.split_as_one_sentence_per_line("a\n\n"), "a");
        assert_eq!(scrubber.split_as_one_sentence_per_line("a\n\n\n"), "a\n");
        assert_eq!(scrubber.split_as_one_sentence_per_line("Done. "), "Done.");
        assert_eq!(scrubber.scrub("\n\na\n\n"), "a");
    }

    #[test]
    fn test_metacharacter_classes() {
        let scrubber = Scrubber::new(ScrubberConfig {
            stop_chars: CharClass::new("|。").unwrap(),
            reorder_chars: CharClass::new("]").unwrap(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            scrubber.split_as_one_sentence_per_line("今日は。明日も| end"),
            "今日は。\n明日も|\nend"
        );
        assert_eq!(scrubber.reorder_stop_chars("[a|]"), "[a]|");
    }

    #[test]
    fn test_scrub_pipeline() {
        let raw = "  He said \"stop.\" Then\nhe left!   Quietly.\n\n\n\nNew   paragraph\there? Yes.";
        assert_eq!(
            scrubber().scrub(raw),
            "He said \"stop\".\nThen he left!\nQuietly.\n\nNew paragraphhere?\nYes."
        );
    }
}
