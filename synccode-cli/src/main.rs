use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use synccode_cli::{commands, load_validator, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "synccode")]
#[command(about = "Synccode - Validate and inspect HBX device sync codes", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON device registry replacing the built-in table
    #[arg(long, global = true)]
    registry: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sync codes and print their canonical form
    Validate {
        /// Codes to validate
        #[arg(required_unless_present = "input")]
        codes: Vec<String>,

        /// Also read codes from a file, one per line ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Insert a missing hyphen before validating (ZBTU0034 -> ZBTU-0034)
        #[arg(long)]
        hyphenate: bool,

        /// Print nothing; report through the exit status only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Build a sync code from its parts
    Make {
        /// Series letter
        #[arg(long, conflicts_with = "input")]
        series: Option<String>,

        /// Device token
        #[arg(long, conflicts_with = "input")]
        device: Option<String>,

        /// Four-digit identifier
        #[arg(long, conflicts_with = "input")]
        identifier: Option<String>,

        /// JSON file with {"series", "device", "identifier"} ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// List allowed device types
    Devices {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Locate sync codes in a text file
    Scan {
        /// Input file to scan ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output JSON file for located codes
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Report gaps and duplicates in identifier sequences
    Sequence {
        /// Input file to scan ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output JSON file for the sequence report
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let validator = load_validator(cli.registry.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Validate {
            codes,
            input,
            hyphenate,
            quiet,
        } => {
            let all_valid =
                commands::validate::execute(&validator, codes, input.as_deref(), hyphenate, quiet)?;
            return Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }

        Commands::Make {
            series,
            device,
            identifier,
            input,
        } => {
            commands::make::execute(&validator, series, device, identifier, input.as_deref())?;
        }

        Commands::Devices { format } => commands::devices::execute(&validator, format)?,

        Commands::Scan {
            input,
            output,
            stats_only,
        } => {
            commands::scan::execute(&validator, &input, output.as_deref(), stats_only)?;
        }

        Commands::Sequence { input, output } => {
            commands::sequence::execute(&validator, &input, output.as_deref())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
