//! Process command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use ruleseg_core::{EmptySegments, Segmenter, SegmenterConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::prefix_source::PrefixSource;
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob), `-` for standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in abbreviation table [default: english]
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// External abbreviation table, overrides --language
    #[arg(long, value_name = "FILE")]
    pub prefixes: Option<PathBuf>,

    /// Handling of empty sentences [default: keep]
    #[arg(long, value_enum, value_name = "POLICY")]
    pub empty: Option<EmptyPolicy>,

    /// Keep surrounding whitespace on each sentence
    #[arg(long)]
    pub no_trim: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of documents with indexed sentences
    Json,
    /// Markdown numbered list per document
    Markdown,
}

impl OutputFormat {
    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One sentence per line",
            OutputFormat::Json => "JSON documents with indexed sentences",
            OutputFormat::Markdown => "Numbered list per document",
        }
    }

    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

/// Built-in abbreviation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English abbreviations
    English,
    /// Spanish abbreviations
    Spanish,
    /// Basque abbreviations
    Basque,
}

/// Empty sentence handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptyPolicy {
    /// Keep every sentence, empty ones included
    Keep,
    /// Drop empty sentences at the end of a document
    DropTrailing,
    /// Drop every empty or whitespace-only sentence
    DropEmpty,
}

impl From<EmptyPolicy> for EmptySegments {
    fn from(policy: EmptyPolicy) -> Self {
        match policy {
            EmptyPolicy::Keep => EmptySegments::Keep,
            EmptyPolicy::DropTrailing => EmptySegments::DropTrailing,
            EmptyPolicy::DropEmpty => EmptySegments::DropEmpty,
        }
    }
}

/// Effective settings after merging flags over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PrefixSource,
    pub empty_segments: EmptySegments,
    pub format: OutputFormat,
    pub trim: bool,
    pub threads: usize,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        log::info!("Abbreviations: {}", settings.source.display_name());

        let segmenter = Segmenter::with_config(SegmenterConfig {
            empty_segments: settings.empty_segments,
            non_breaker: settings.source.to_config(),
        })
        .with_context(|| {
            format!(
                "Failed to load abbreviations ({})",
                settings.source.display_name()
            )
        })?;

        let sources = resolve_inputs(&self.input)?;
        log::info!("Found {} input(s) to process", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let documents = if self.parallel && sources.len() > 1 {
            segment_parallel(&segmenter, &sources, &progress, settings.threads)?
        } else {
            sources
                .iter()
                .map(|source| segment_source(&segmenter, source, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut formatter = create_formatter(settings.format, self.open_output()?);
        for (source, sentences) in sources.iter().zip(&documents) {
            formatter.begin_source(&source.to_string())?;
            for (index, sentence) in sentences.iter().enumerate() {
                let sentence = if settings.trim {
                    sentence.trim()
                } else {
                    sentence.as_str()
                };
                formatter.format_sentence(sentence, index)?;
            }
        }
        formatter.finish()?;

        log::info!(
            "Wrote {} sentence(s)",
            documents.iter().map(Vec::len).sum::<usize>()
        );
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let source = match (&self.prefixes, self.language, &config.processing.prefixes) {
            (Some(path), _, _) => PrefixSource::External(path.clone()),
            (None, Some(language), _) => PrefixSource::from(language),
            (None, None, Some(path)) => PrefixSource::External(path.clone()),
            (None, None, None) => PrefixSource::BuiltIn(config.processing.language.clone()),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.format)?,
        };

        let threads = match self.threads {
            Some(0) => {
                return Err(
                    CliError::InvalidOption("threads must be greater than 0".to_string()).into(),
                )
            }
            Some(threads) => threads,
            None => config.performance.worker_threads,
        };

        Ok(Settings {
            source,
            empty_segments: self
                .empty
                .map(EmptySegments::from)
                .unwrap_or(config.processing.empty_segments),
            format,
            trim: !self.no_trim && config.output.trim,
            threads,
        })
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn segment_source(
    segmenter: &Segmenter,
    source: &InputSource,
    progress: &ProgressReporter,
) -> Result<Vec<String>> {
    let text = source.read()?;
    let sentences = segmenter.segment(&text);
    log::debug!("{}: {} sentence(s)", source, sentences.len());

    progress.file_completed(&source.to_string());
    Ok(sentences)
}

fn segment_parallel(
    segmenter: &Segmenter,
    sources: &[InputSource],
    progress: &ProgressReporter,
    threads: usize,
) -> Result<Vec<Vec<String>>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to create thread pool")?;
    log::debug!("Processing in parallel on {} thread(s)", pool.current_num_threads());

    pool.install(|| {
        sources
            .par_iter()
            .map(|source| segment_source(segmenter, source, progress))
            .collect()
    })
}

fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProcessArgs {
        ProcessArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            language: None,
            prefixes: None,
            empty: None,
            no_trim: false,
            config: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = args().settings(&CliConfig::default()).unwrap();
        assert_eq!(settings.source, PrefixSource::BuiltIn("en".to_string()));
        assert_eq!(settings.empty_segments, EmptySegments::Keep);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.trim);
        assert_eq!(settings.threads, 0);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.processing.language = "es".to_string();
        config.processing.empty_segments = EmptySegments::DropTrailing;
        config.output.format = "markdown".to_string();
        config.performance.worker_threads = 2;

        let mut args = args();
        args.language = Some(Language::Basque);
        args.empty = Some(EmptyPolicy::DropEmpty);
        args.format = Some(OutputFormat::Json);
        args.threads = Some(8);
        args.no_trim = true;

        let settings = args.settings(&config).unwrap();
        assert_eq!(settings.source, PrefixSource::BuiltIn("eu".to_string()));
        assert_eq!(settings.empty_segments, EmptySegments::DropEmpty);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.threads, 8);
        assert!(!settings.trim);
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let mut config = CliConfig::default();
        config.processing.language = "spanish".to_string();
        config.output.format = "Markdown".to_string();

        let settings = args().settings(&config).unwrap();
        assert_eq!(settings.source, PrefixSource::BuiltIn("spanish".to_string()));
        assert_eq!(settings.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_prefix_file_precedence() {
        let mut config = CliConfig::default();
        config.processing.prefixes = Some(PathBuf::from("config.toml"));

        let mut args = args();
        let settings = args.settings(&config).unwrap();
        assert_eq!(
            settings.source,
            PrefixSource::External(PathBuf::from("config.toml"))
        );

        args.language = Some(Language::English);
        let settings = args.settings(&config).unwrap();
        assert_eq!(settings.source, PrefixSource::BuiltIn("en".to_string()));

        args.prefixes = Some(PathBuf::from("flag.toml"));
        let settings = args.settings(&config).unwrap();
        assert_eq!(
            settings.source,
            PrefixSource::External(PathBuf::from("flag.toml"))
        );
    }

    #[test]
    fn test_unknown_config_format() {
        let mut config = CliConfig::default();
        config.output.format = "xml".to_string();
        assert!(args().settings(&config).is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut args = args();
        args.threads = Some(0);
        let err = args.settings(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("threads must be greater than 0"));
    }

    #[test]
    fn test_format_names() {
        for format in OutputFormat::value_variants() {
            assert_eq!(OutputFormat::from_name(format.as_str()).unwrap(), *format);
        }
    }

    #[test]
    fn test_empty_policy_conversion() {
        assert_eq!(EmptySegments::from(EmptyPolicy::Keep), EmptySegments::Keep);
        assert_eq!(
            EmptySegments::from(EmptyPolicy::DropTrailing),
            EmptySegments::DropTrailing
        );
        assert_eq!(
            EmptySegments::from(EmptyPolicy::DropEmpty),
            EmptySegments::DropEmpty
        );
    }
}
