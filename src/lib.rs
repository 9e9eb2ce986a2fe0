pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod report;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::Cli;
pub use config::{Config, FileConfig, OutputConfig};
pub use error::{RdbSumError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extract::{ExtractionRecord, Extractor, ParameterQuery, SectionTable};
pub use report::{FileFormat, ReportWriter, SettingsTable, TableMode, FILE_DATE_SETTING};
pub use scanner::FileFinder;
pub use ui::{OutputFormatter, OutputMode};

use chrono::{DateTime, Utc};
use std::path::Path;

/// Main library interface: collects input files, runs the extraction engine
/// over each one, and routes the finished table to the selected sinks.
pub struct RdbSum {
    config: Config,
    extractor: Extractor,
    formatter: OutputFormatter,
}

/// What a run produced, for reporting back to the caller.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_processed: usize,
    pub records_extracted: usize,
    pub output_path: Option<std::path::PathBuf>,
}

impl RdbSum {
    pub fn new(config: Config, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            extractor: Extractor::new(),
            formatter: OutputFormatter::new(verbose, quiet),
        }
    }

    /// Create an instance from CLI arguments, loading and validating the
    /// configuration file when one applies.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load_with_defaults(cli.config.as_ref())?;
        config.validate()?;
        Ok(Self::new(config, cli.verbosity_level(), cli.quiet))
    }

    /// Full run: collect files, extract, build the table, write/print.
    pub fn run(&self, cli: &Cli) -> Result<RunSummary> {
        self.formatter.start_operation("Collecting input files");

        let finder = FileFinder::new(&self.config.files);
        let files = finder.collect(&cli.path)?;

        if files.is_empty() {
            return Err(RdbSumError::NoInputFiles {
                pattern: cli.path.join(" "),
            });
        }
        self.formatter
            .info(&format!("Found {} input files", files.len()));

        let queries: Vec<ParameterQuery> = cli
            .settings
            .iter()
            .map(|token| ParameterQuery::parse(token))
            .collect();

        let mut records = Vec::new();
        for file in &files {
            self.formatter.debug(&file.display().to_string());
            records.extend(self.extract_file(file, &queries)?);
        }

        let table = SettingsTable::build(&records, cli.table_mode());

        let mut output_path = None;
        if let Some(format) = cli.file_format() {
            let writer = ReportWriter::new(self.config.output.base_name.clone());
            let path = writer.write(&table, format, cli.output_file.as_deref())?;
            self.formatter
                .success(&format!("Writing {}", path.display()));
            output_path = Some(path);
        }

        if cli.console {
            self.formatter.print_table(&table);
        } else if output_path.is_none() {
            self.formatter
                .warning("No output selected; use -c for console output or -o for a file");
        }

        Ok(RunSummary {
            files_processed: files.len(),
            records_extracted: records.len(),
            output_path,
        })
    }

    /// Extracts all requested parameters from one file. A file that yields
    /// any records gets a synthetic "File date" record prepended, carrying
    /// its last-modified time.
    fn extract_file(&self, path: &Path, queries: &[ParameterQuery]) -> Result<Vec<ExtractionRecord>> {
        let bytes = std::fs::read(path)?;
        // Relay dumps occasionally carry stray high bytes; decode lossily
        // rather than failing the whole run on one of them.
        let document = String::from_utf8_lossy(&bytes);

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        let mut records = self
            .extractor
            .extract_document(&filename, &document, queries);

        if !records.is_empty() {
            let modified = file_date(path)?;
            records.insert(
                0,
                ExtractionRecord::new(filename, FILE_DATE_SETTING, modified),
            );
        }

        Ok(records)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(RdbSumError::Io)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formatter(&self) -> &OutputFormatter {
        &self.formatter
    }

    pub fn handle_error(&self, error: &RdbSumError) {
        self.formatter.print_user_friendly_error(error);
    }
}

fn file_date(path: &Path) -> Result<String> {
    let modified = std::fs::metadata(path)?.modified()?;
    let timestamp: DateTime<Utc> = modified.into();
    Ok(timestamp.format("%Y-%m-%d %H:%M").to_string())
}

pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
