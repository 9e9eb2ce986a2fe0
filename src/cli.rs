use crate::report::{FileFormat, TableMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rdbsum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract settings from SEL relay RDB text exports")]
#[command(
    long_about = "rdbsum searches plain-text exports of protective-relay configuration (RDB) \
                  files for named settings and reports them as a table, written to CSV or \
                  XLSX and/or printed to the console."
)]
#[command(after_help = "EXAMPLES:\n  \
    rdbsum -p RDBs -s RID G1:TID FID PARTNO -m rows -c\n  \
    rdbsum -p 'exports/*.TXT' -s G1:50P1P G2:50P1P -m columns -o csv\n  \
    rdbsum -p site.txt -s DEVID -o xlsx -f site-summary.xlsx\n\n\
    Settings take the form NAME or GROUP:NAME where GROUP is one of G1..G6, \
    P1..P5, or PF. Special identifier parameters (FID, PARTNO, DEVID) are \
    searched without a group.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Files, directories, or glob patterns to process
    #[arg(
        short,
        long,
        value_name = "PATH|FILE",
        num_args = 1..,
        required_unless_present = "generate_config",
        help = "Files, directories (searched recursively for the configured text \
                extension), or glob patterns with * and ?"
    )]
    pub path: Vec<String>,

    /// Settings to extract, each NAME or GROUP:NAME
    #[arg(
        short,
        long,
        value_name = "G:S",
        num_args = 1..,
        required_unless_present = "generate_config",
        help = "Settings in the form G:S where G is the group (G1..G6, P1..P5, PF) \
                and S is the setting name, e.g. G1:50P1P. Omit G: to search the \
                whole file."
    )]
    pub settings: Vec<String>,

    /// Output table layout
    #[arg(short, long, value_enum, default_value_t = ModeArg::Rows)]
    pub mode: ModeArg,

    /// Write the table to a file in this format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Produce output as comma separated values (csv) or an Excel \
                spreadsheet (xlsx)"
    )]
    pub output: Option<FormatArg>,

    /// Name of the output file (defaults to the configured base name)
    #[arg(short = 'f', long)]
    pub output_file: Option<PathBuf>,

    /// Show the table on the console
    #[arg(short, long)]
    pub console: bool,

    /// Configuration file path
    #[arg(long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One row per extracted setting (Filename, Setting Name, Val)
    Rows,
    /// One row per file, one column per setting
    Columns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Xlsx,
}

impl From<ModeArg> for TableMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Rows => TableMode::Rows,
            ModeArg::Columns => TableMode::Columns,
        }
    }
}

impl From<FormatArg> for FileFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => FileFormat::Csv,
            FormatArg::Xlsx => FileFormat::Xlsx,
        }
    }
}

impl Cli {
    pub fn table_mode(&self) -> TableMode {
        self.mode.into()
    }

    pub fn file_format(&self) -> Option<FileFormat> {
        self.output.map(Into::into)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::parse_from(["rdbsum", "-p", "RDBs", "-s", "RID", "G1:TID"]);
        assert_eq!(cli.path, vec!["RDBs"]);
        assert_eq!(cli.settings, vec!["RID", "G1:TID"]);
        assert_eq!(cli.mode, ModeArg::Rows);
        assert!(cli.output.is_none());
        assert!(!cli.console);
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::parse_from([
            "rdbsum", "-p", "a.txt", "b.txt", "-s", "FID", "-m", "columns", "-o", "xlsx", "-f",
            "out.xlsx", "-c", "-v",
        ]);
        assert_eq!(cli.path.len(), 2);
        assert_eq!(cli.table_mode(), TableMode::Columns);
        assert_eq!(cli.file_format(), Some(FileFormat::Xlsx));
        assert_eq!(cli.output_file, Some(PathBuf::from("out.xlsx")));
        assert!(cli.console);
        assert_eq!(cli.verbosity_level(), 1);
    }

    #[test]
    fn test_path_and_settings_required() {
        assert!(Cli::try_parse_from(["rdbsum", "-s", "RID"]).is_err());
        assert!(Cli::try_parse_from(["rdbsum", "-p", "RDBs"]).is_err());
    }

    #[test]
    fn test_generate_config_needs_no_path() {
        let cli = Cli::parse_from(["rdbsum", "--generate-config"]);
        assert!(cli.generate_config);
        assert!(cli.path.is_empty());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["rdbsum", "-p", "a", "-s", "b", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_quiet_zeroes_verbosity() {
        let cli = Cli::parse_from(["rdbsum", "-p", "a", "-s", "b", "-q"]);
        assert_eq!(cli.verbosity_level(), 0);
    }
}
