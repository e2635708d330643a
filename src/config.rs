//! Configuration for scrubbing and equalising corpora.

use crate::error::{CorpusError, Result};
use crate::text::CharClass;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default word-count ratio under which two sentences count as equivalent.
pub const DEFAULT_SENTENCE_RATIO: f64 = 0.6;

/// Default for lowercasing the first letter of a glued-on sentence.
pub const DEFAULT_LOWERCASE_GLUED: bool = true;

/// Default encoding label for reading and writing scrubbed files.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sentence equalisation configuration.
    pub equaliser: EqualiserConfig,

    /// Text scrubbing configuration.
    pub scrubber: ScrubberConfig,
}

impl Config {
    /// Loads a configuration from a JSON file. Missing fields keep their
    /// defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::FileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.equaliser.validate()?;
        self.scrubber.validate()
    }
}

/// Sentence equalisation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualiserConfig {
    /// How close in word count two sentences must be to be equivalent,
    /// as a ratio in (0, 1]. Lower values tolerate larger differences.
    /// Default: 0.6.
    pub ratio: f64,

    /// Characters that terminate a sentence. A trailing one is stripped
    /// from the first sentence when two sentences are glued.
    /// Default: `. ; ! ?`.
    pub stop_chars: CharClass,

    /// Lowercase the first character of the second sentence when gluing.
    /// Default: true.
    pub lowercase_glued: bool,
}

impl Default for EqualiserConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_SENTENCE_RATIO,
            stop_chars: CharClass::stop_chars(),
            lowercase_glued: DEFAULT_LOWERCASE_GLUED,
        }
    }
}

impl EqualiserConfig {
    /// Checks that the ratio is a finite number in (0, 1].
    pub fn validate(&self) -> Result<()> {
        if !self.ratio.is_finite() || self.ratio <= 0.0 || self.ratio > 1.0 {
            return Err(CorpusError::Config(format!(
                "sentence ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }
        Ok(())
    }
}

/// Text scrubbing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberConfig {
    /// Characters defining sentence boundaries.
    /// Default: `. ; ! ?`.
    pub stop_chars: CharClass,

    /// Closing characters that may be swapped with a preceding stop
    /// character.
    /// Default: `" ' ) ] }`.
    pub reorder_chars: CharClass,

    /// Encoding label of the files being scrubbed, e.g. `"latin1"`.
    /// Default: `utf-8`.
    pub input_encoding: String,

    /// Encoding label for the scrubbed output.
    /// Default: `utf-8`.
    pub output_encoding: String,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            stop_chars: CharClass::stop_chars(),
            reorder_chars: CharClass::reorder_chars(),
            input_encoding: DEFAULT_ENCODING.to_string(),
            output_encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ScrubberConfig {
    /// Checks that both encoding labels are known and usable.
    pub fn validate(&self) -> Result<()> {
        self.input_encoding()?;
        self.output_encoding()?;
        Ok(())
    }

    /// Resolves the input encoding label.
    pub fn input_encoding(&self) -> Result<&'static Encoding> {
        resolve_encoding(&self.input_encoding)
    }

    /// Resolves the output encoding label.
    ///
    /// Encodings that can only be decoded (UTF-16, `replacement`) are
    /// rejected.
    pub fn output_encoding(&self) -> Result<&'static Encoding> {
        let encoding = resolve_encoding(&self.output_encoding)?;
        if encoding.output_encoding() != encoding {
            return Err(CorpusError::Config(format!(
                "cannot write text as {}",
                encoding.name()
            )));
        }
        Ok(encoding)
    }
}

fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CorpusError::Config(format!("unknown encoding {:?}", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.equaliser.ratio, 0.6);
        assert!(config.equaliser.lowercase_glued);
        assert_eq!(config.equaliser.stop_chars.to_string(), ".;!?");
        assert_eq!(config.scrubber.reorder_chars.to_string(), "\"')]}");
        assert_eq!(config.scrubber.input_encoding().unwrap(), encoding_rs::UTF_8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ratio_bounds() {
        let mut config = EqualiserConfig::default();
        config.ratio = 1.0;
        assert!(config.validate().is_ok());

        for bad in [0.0, -0.5, 1.01, f64::NAN, f64::INFINITY] {
            config.ratio = bad;
            assert!(config.validate().is_err(), "ratio {} should be rejected", bad);
        }
    }

    #[test]
    fn test_encoding_labels() {
        let mut config = ScrubberConfig {
            input_encoding: "latin1".to_string(),
            output_encoding: "UTF-8".to_string(),
            ..Default::default()
        };
        assert_eq!(config.input_encoding().unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(config.output_encoding().unwrap(), encoding_rs::UTF_8);

        config.input_encoding = "utf-16le".to_string();
        assert!(config.input_encoding().is_ok());

        config.output_encoding = "utf-16le".to_string();
        assert!(matches!(config.validate(), Err(CorpusError::Config(_))));

        config.output_encoding = "klingon".to_string();
        assert!(matches!(config.validate(), Err(CorpusError::Config(_))));
    }

    #[test]
    fn test_partial_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "equaliser": { "ratio": 0.75, "stop_chars": ".!" } }"#).unwrap();

        let config = Config::from_json_file(&path).unwrap();
        assert_eq!(config.equaliser.ratio, 0.75);
        assert_eq!(config.equaliser.stop_chars.chars(), &['.', '!']);
        assert!(config.equaliser.lowercase_glued);
        assert_eq!(config.scrubber, ScrubberConfig::default());
    }

    #[test]
    fn test_invalid_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{ "equaliser": { "ratio": 3.0 } }"#).unwrap();
        assert!(matches!(Config::from_json_file(&path), Err(CorpusError::Config(_))));

        fs::write(&path, r#"{ "scrubber": { "reorder_chars": "" } }"#).unwrap();
        assert!(matches!(
            Config::from_json_file(&path),
            Err(CorpusError::Serialization(_))
        ));

        assert!(matches!(
            Config::from_json_file(dir.path().join("missing.json")),
            Err(CorpusError::FileNotFound(_))
        ));
    }
}
