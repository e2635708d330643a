//! corpus-cleaner CLI
//!
//! Command-line interface for scrubbing and equalising parallel corpora.

use clap::{CommandFactory, Parser, Subcommand};
use corpus_cleaner::{
    equalise_files, scrub_file, scrub_files, CharClass, Config, CorpusError, Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "corpus-cleaner")]
#[command(version)]
#[command(about = "Natural-language corpus cleaning tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Make two corpus files of equal sentence count by merging sentences
    /// where appropriate. Both files are overwritten.
    Equalise {
        /// Input file A. Order is irrelevant.
        file_a: PathBuf,

        /// Input file B. Order is irrelevant.
        file_b: PathBuf,

        /// How close in word count sentences have to be to be considered
        /// equivalent, as a 0 to 1 ratio (default: 0.6)
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Chars defining sentence boundaries (default: ".;!?")
        #[arg(short, long = "stop-chars", value_name = "STOP_CHARS")]
        stop_chars: Option<String>,

        /// Don't lowercase the first char of the second sentence in a merge
        #[arg(short, long)]
        keep_case: bool,

        /// JSON configuration file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Tidy up natural language files into one-sentence-per-line files
    Scrub {
        /// Input files to scrub
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path (single input only; inputs are overwritten otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Chars defining sentence boundaries (default: ".;!?")
        #[arg(short, long = "stop-chars", value_name = "STOP_CHARS")]
        stop_chars: Option<String>,

        /// Chars which can be swapped with stop chars (default: "\"')]}")
        #[arg(short, long, value_name = "REORDER_CHARS")]
        reorder: Option<String>,

        /// Encoding of the input files (default: utf-8)
        #[arg(long, value_name = "LABEL")]
        input_encoding: Option<String>,

        /// Encoding of the scrubbed output (default: utf-8)
        #[arg(long, value_name = "LABEL")]
        output_encoding: Option<String>,

        /// JSON configuration file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Equalise {
            file_a,
            file_b,
            ratio,
            stop_chars,
            keep_case,
            config,
        } => equalise(file_a, file_b, ratio, stop_chars, keep_case, config),

        Commands::Scrub {
            inputs,
            output,
            stop_chars,
            reorder,
            input_encoding,
            output_encoding,
            config,
        } => scrub(
            inputs,
            output,
            stop_chars,
            reorder,
            (input_encoding, output_encoding),
            config,
        ),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        if matches!(
            e,
            CorpusError::Config(_) | CorpusError::FileNotFound(_) | CorpusError::InvalidArgument(_)
        ) {
            eprintln!("{}", Cli::command().render_usage());
        }
        std::process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_json_file(path),
        None => Ok(Config::default()),
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CorpusError::FileNotFound(path.to_path_buf()))
    }
}

fn equalise(
    file_a: PathBuf,
    file_b: PathBuf,
    ratio: Option<f64>,
    stop_chars: Option<String>,
    keep_case: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path)?.equaliser;
    if let Some(ratio) = ratio {
        config.ratio = ratio;
    }
    if let Some(stop_chars) = stop_chars {
        config.stop_chars = CharClass::new(&stop_chars)?;
    }
    if keep_case {
        config.lowercase_glued = false;
    }
    config.validate()?;

    ensure_exists(&file_a)?;
    ensure_exists(&file_b)?;

    let report = equalise_files(&file_a, &file_b, &config)?;
    println!("{}", report);

    Ok(())
}

fn scrub(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    stop_chars: Option<String>,
    reorder: Option<String>,
    encodings: (Option<String>, Option<String>),
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path)?.scrubber;
    if let Some(stop_chars) = stop_chars {
        config.stop_chars = CharClass::new(&stop_chars)?;
    }
    if let Some(reorder) = reorder {
        config.reorder_chars = CharClass::new(&reorder)?;
    }
    let (input_encoding, output_encoding) = encodings;
    if let Some(label) = input_encoding {
        config.input_encoding = label;
    }
    if let Some(label) = output_encoding {
        config.output_encoding = label;
    }
    config.validate()?;

    for input in &inputs {
        ensure_exists(input)?;
    }

    if let [input] = inputs.as_slice() {
        let report = scrub_file(input, output.as_deref(), &config)?;
        println!("{}", report);
        return Ok(());
    }

    if output.is_some() {
        return Err(CorpusError::InvalidArgument(
            "--output can only be used with a single input".to_string(),
        ));
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  "),
    );

    let results = scrub_files(&inputs, &config, |path| {
        pb.set_message(path.display().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let mut first_error = None;
    for result in results {
        match result {
            Ok(report) => println!("{}", report),
            Err(e) => {
                error!("{}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
