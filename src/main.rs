use clap::Parser;
use rdbsum::{Cli, OutputFormatter, RdbSum, RdbSumError, UserFriendlyError};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match RdbSum::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 2;
        }
    };

    match app.run(&cli) {
        Ok(summary) => {
            app.formatter().info(&format!(
                "Processed {} files, extracted {} records",
                summary.files_processed, summary.records_extracted
            ));
            0
        }
        Err(e) => {
            app.handle_error(&e);

            match e {
                RdbSumError::NoInputFiles { .. } => 3,
                RdbSumError::Config { .. } => 2,
                RdbSumError::InvalidPattern { .. } => 2,
                RdbSumError::Io(_) => 4,
                RdbSumError::Csv(_) | RdbSumError::Xlsx(_) => 5,
                _ => 1,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "rdbsum.toml".to_string());

    match RdbSum::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  rdbsum -p RDBs -s G1:TID --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!(
                "Failed to generate configuration file: {}",
                e.user_message()
            );
            1
        }
    }
}

fn print_startup_error(error: &RdbSumError) {
    let formatter = OutputFormatter::new(0, false);
    formatter.print_user_friendly_error(error);
}
