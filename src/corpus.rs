//! File-level drivers for scrubbing and equalising corpora.
//!
//! Files are read whole into memory and replaced atomically: the new
//! contents go to a temporary file next to the target which is then renamed
//! over it, so an interrupted run never leaves a truncated file behind.

use crate::config::{EqualiserConfig, ScrubberConfig};
use crate::equalise::{EqualiseStats, Equaliser};
use crate::error::{CorpusError, Result};
use crate::text::Scrubber;
use encoding_rs::{Encoding, UTF_8};
use log::info;
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of equalising a pair of files.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualiseReport {
    /// First file.
    pub file_a: PathBuf,
    /// Second file.
    pub file_b: PathBuf,
    /// Characters in the first file before equalisation.
    pub input_len_a: usize,
    /// Characters in the second file before equalisation.
    pub input_len_b: usize,
    /// Characters in the first file after equalisation.
    pub output_len_a: usize,
    /// Characters in the second file after equalisation.
    pub output_len_b: usize,
    /// Alignment totals.
    pub stats: EqualiseStats,
}

impl EqualiseReport {
    /// Fraction of the average corpus size lost, usually in [0, 1].
    ///
    /// Gluing adds no characters but drops a stop character, so the value
    /// is only negative for degenerate inputs. Two empty inputs lose nothing.
    pub fn corpus_lost(&self) -> f64 {
        corpus_lost(
            (self.input_len_a, self.input_len_b),
            (self.output_len_a, self.output_len_b),
        )
    }

    /// Loss as a whole percentage, truncated toward zero.
    pub fn corpus_lost_percent(&self) -> i64 {
        (self.corpus_lost() * 100.0) as i64
    }
}

impl fmt::Display for EqualiseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scrubbed {} & {}. Corpus lost: {}%",
            display_name(&self.file_a),
            display_name(&self.file_b),
            self.corpus_lost_percent()
        )
    }
}

/// Outcome of scrubbing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
}

impl fmt::Display for ScrubReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scrubbed {} to {}",
            self.input.display(),
            self.output.display()
        )
    }
}

/// `1 - avg(outputs) / avg(inputs)`, or 0 when there was no input.
pub fn corpus_lost(inputs: (usize, usize), outputs: (usize, usize)) -> f64 {
    let original = (inputs.0 + inputs.1) as f64 / 2.0;
    if original == 0.0 {
        return 0.0;
    }
    let equalised = (outputs.0 + outputs.1) as f64 / 2.0;
    1.0 - equalised / original
}

/// Equalises two files in place.
///
/// Both results are computed before either file is replaced.
pub fn equalise_files<P, Q>(file_a: P, file_b: Q, config: &EqualiserConfig) -> Result<EqualiseReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let file_a = file_a.as_ref();
    let file_b = file_b.as_ref();
    let equaliser = Equaliser::new(config.clone())?;

    let contents_a = read_text(file_a, UTF_8)?;
    let contents_b = read_text(file_b, UTF_8)?;

    let equalised = equaliser.equalise(&contents_a, &contents_b);
    let (output_a, output_b) = equalised.merge();

    write_atomic(file_a, output_a.as_bytes())?;
    write_atomic(file_b, output_b.as_bytes())?;

    let report = EqualiseReport {
        file_a: file_a.to_path_buf(),
        file_b: file_b.to_path_buf(),
        input_len_a: contents_a.chars().count(),
        input_len_b: contents_b.chars().count(),
        output_len_a: output_a.chars().count(),
        output_len_b: output_b.chars().count(),
        stats: equalised.stats,
    };

    info!(
        "Equalised {} & {}: {} sentence pairs from {}/{} sentences, {} glued, {} forced",
        file_a.display(),
        file_b.display(),
        report.stats.sentences_aligned,
        report.stats.sentences_a,
        report.stats.sentences_b,
        report.stats.fusions_a + report.stats.fusions_b,
        report.stats.forced_pushes
    );

    Ok(report)
}

/// Scrubs `input`, writing to `output` or back over `input` when no output
/// is given. The file is decoded and re-encoded with the configured
/// encodings.
pub fn scrub_file<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    config: &ScrubberConfig,
) -> Result<ScrubReport> {
    let job = ScrubJob::new(config)?;
    job.run(input.as_ref(), output)
}

/// Scrubs several files in place, in parallel.
///
/// Every file is attempted; results come back in input order. `on_done` is
/// called once per finished file, from worker threads. An invalid
/// configuration fails every file with the same error.
pub fn scrub_files<P, F>(inputs: &[P], config: &ScrubberConfig, on_done: F) -> Vec<Result<ScrubReport>>
where
    P: AsRef<Path> + Sync,
    F: Fn(&Path) + Sync,
{
    let job = match ScrubJob::new(config) {
        Ok(job) => job,
        Err(e) => {
            let message = match e {
                CorpusError::Config(message) => message,
                other => other.to_string(),
            };
            return inputs
                .iter()
                .map(|_| Err(CorpusError::Config(message.clone())))
                .collect();
        }
    };

    inputs
        .par_iter()
        .map(|input| {
            let result = job.run(input.as_ref(), None);
            on_done(input.as_ref());
            result
        })
        .collect()
}

/// A compiled scrubber plus the encodings its files use.
struct ScrubJob {
    scrubber: Scrubber,
    input_encoding: &'static Encoding,
    output_encoding: &'static Encoding,
}

impl ScrubJob {
    fn new(config: &ScrubberConfig) -> Result<Self> {
        Ok(Self {
            input_encoding: config.input_encoding()?,
            output_encoding: config.output_encoding()?,
            scrubber: Scrubber::new(config.clone())?,
        })
    }

    fn run(&self, input: &Path, output: Option<&Path>) -> Result<ScrubReport> {
        let output = output.unwrap_or(input);

        let contents = read_text(input, self.input_encoding)?;
        let scrubbed = self.scrubber.scrub(&contents);

        let (bytes, _, unmappable) = self.output_encoding.encode(&scrubbed);
        if unmappable {
            return Err(CorpusError::Encoding {
                path: output.to_path_buf(),
                encoding: self.output_encoding.name(),
            });
        }
        write_atomic(output, &bytes)?;

        info!(
            "Scrubbed {} ({} {} -> {} {} bytes)",
            input.display(),
            contents.len(),
            self.input_encoding.name(),
            bytes.len(),
            self.output_encoding.name()
        );

        Ok(ScrubReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        })
    }
}

fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    if !path.exists() {
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let (text, malformed) = encoding.decode_without_bom_handling(&bytes);
    if malformed {
        return Err(CorpusError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| CorpusError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_corpus_lost() {
        assert_eq!(corpus_lost((100, 100), (100, 100)), 0.0);
        assert!((corpus_lost((100, 300), (50, 150)) - 0.5).abs() < 1e-10);
        assert_eq!(corpus_lost((0, 0), (0, 0)), 0.0);
    }

    #[test]
    fn test_report_display() {
        let report = EqualiseReport {
            file_a: PathBuf::from("/data/corpus.en"),
            file_b: PathBuf::from("/data/corpus.fr"),
            input_len_a: 1000,
            input_len_b: 1000,
            output_len_a: 871,
            output_len_b: 880,
            stats: EqualiseStats::default(),
        };
        assert_eq!(report.corpus_lost_percent(), 12);
        assert_eq!(
            report.to_string(),
            "Scrubbed corpus.en & corpus.fr. Corpus lost: 12%"
        );
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_scrub_file_to_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("raw.txt");
        let output = dir.path().join("clean.txt");
        fs::write(&input, "First one. Second\none!").unwrap();

        let report = scrub_file(&input, Some(output.as_path()), &ScrubberConfig::default()).unwrap();
        assert_eq!(report.output, output);
        assert_eq!(fs::read_to_string(&output).unwrap(), "First one.\nSecond one!");
        assert_eq!(fs::read_to_string(&input).unwrap(), "First one. Second\none!");
    }

    #[test]
    fn test_scrub_file_transcodes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("latin1.txt");
        let output = dir.path().join("utf8.txt");
        fs::write(&input, b"Caf\xe9 cr\xe8me. D\xe9j\xe0 vu!").unwrap();

        let config = ScrubberConfig {
            input_encoding: "latin1".to_string(),
            ..Default::default()
        };
        scrub_file(&input, Some(output.as_path()), &config).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Café crème.\nDéjà vu!");

        let config = ScrubberConfig {
            output_encoding: "windows-1252".to_string(),
            ..Default::default()
        };
        scrub_file(&output, None, &config).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"Caf\xe9 cr\xe8me.\nD\xe9j\xe0 vu!");
    }

    #[test]
    fn test_encoding_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bytes.txt");
        fs::write(&path, b"Caf\xe9.").unwrap();

        // Latin-1 bytes are not valid UTF-8.
        let err = scrub_file(&path, None, &ScrubberConfig::default()).unwrap_err();
        assert!(matches!(err, CorpusError::Encoding { encoding: "UTF-8", .. }));
        assert_eq!(fs::read(&path).unwrap(), b"Caf\xe9.");

        fs::write(&path, "Kanji \u{6f22}.").unwrap();
        let config = ScrubberConfig {
            output_encoding: "latin1".to_string(),
            ..Default::default()
        };
        let err = scrub_file(&path, None, &config).unwrap_err();
        assert!(matches!(err, CorpusError::Encoding { .. }));

        let config = ScrubberConfig {
            input_encoding: "no-such-encoding".to_string(),
            ..Default::default()
        };
        let results = scrub_files(&[&path, &path], &config, |_| {});
        assert!(results.iter().all(|r| matches!(r, Err(CorpusError::Config(_)))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("present.txt");
        fs::write(&present, "Hello.").unwrap();

        let err = equalise_files(
            &present,
            dir.path().join("absent.txt"),
            &EqualiserConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CorpusError::FileNotFound(_)));
        assert_eq!(fs::read_to_string(&present).unwrap(), "Hello.");
    }
}
