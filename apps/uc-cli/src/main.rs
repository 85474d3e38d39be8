use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use uc_convert::{ConversionService, ConvertError};

#[derive(Parser)]
#[command(name = "uc-cli")]
#[command(about = "Universal unit converter over a flat rule file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between two unit expressions and print the report line
    Convert {
        /// Path to the rules CSV (one from,to,ratio record per line)
        rules_path: PathBuf,
        /// Source expression, e.g. "m/s"
        from: String,
        /// Target expression, e.g. "km/hour"
        to: String,
        /// Emit a JSON report instead of the plain line
        #[arg(long)]
        json: bool,
    },
    /// Print only the raw conversion ratio
    Ratio {
        /// Path to the rules CSV
        rules_path: PathBuf,
        /// Source expression
        from: String,
        /// Target expression
        to: String,
    },
    /// Load a rule file and report its size and component count
    Check {
        /// Path to the rules CSV
        rules_path: PathBuf,
    },
    /// List the connected components and their units
    Components {
        /// Path to the rules CSV
        rules_path: PathBuf,
    },
}

#[derive(serde::Serialize)]
struct ConvertReport<'a> {
    from: &'a str,
    to: &'a str,
    ratio: String,
    formatted: String,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            rules_path,
            from,
            to,
            json,
        } => cmd_convert(&rules_path, &from, &to, json),
        Commands::Ratio {
            rules_path,
            from,
            to,
        } => cmd_ratio(&rules_path, &from, &to),
        Commands::Check { rules_path } => cmd_check(&rules_path),
        Commands::Components { rules_path } => cmd_components(&rules_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            exit_code(&err)
        }
    }
}

/// Distinct exit codes for the two user-facing error kinds, mirroring how
/// a request layer would map them to 404 and 400.
fn exit_code(err: &ConvertError) -> ExitCode {
    match err {
        ConvertError::UnknownUnit { .. } => ExitCode::from(2),
        ConvertError::UnableToConvert => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}

fn load_service(rules_path: &Path) -> Result<ConversionService, ConvertError> {
    let service = ConversionService::from_csv_path(rules_path)?;
    tracing::info!(
        rules_path = %rules_path.display(),
        units = service.graph().vertices().len(),
        components = service.graph().components().len(),
        "rule file loaded"
    );
    Ok(service)
}

fn cmd_convert(rules_path: &Path, from: &str, to: &str, json: bool) -> Result<(), ConvertError> {
    let service = load_service(rules_path)?;
    let formatted = service.convert(from, to)?;
    if json {
        let ratio = service.convert_ratio(from, to)?;
        let report = ConvertReport {
            from,
            to,
            ratio: ratio.to_plain_string(),
            formatted,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else {
        println!("{formatted}");
    }
    Ok(())
}

fn cmd_ratio(rules_path: &Path, from: &str, to: &str) -> Result<(), ConvertError> {
    let service = load_service(rules_path)?;
    let ratio = service.convert_ratio(from, to)?;
    println!("{}", ratio.to_plain_string());
    Ok(())
}

fn cmd_check(rules_path: &Path) -> Result<(), ConvertError> {
    let service = load_service(rules_path)?;
    let graph = service.graph();
    println!(
        "{}: {} units, {} edges, {} components",
        rules_path.display(),
        graph.vertices().len(),
        graph.edges().len(),
        graph.components().len()
    );
    Ok(())
}

fn cmd_components(rules_path: &Path) -> Result<(), ConvertError> {
    let service = load_service(rules_path)?;
    let graph = service.graph();
    for component in graph.components() {
        let labels: Vec<&str> = component
            .members
            .iter()
            .filter_map(|&id| graph.vertex(id).map(|v| v.label.as_str()))
            .collect();
        println!("component {}: {}", component.id, labels.join(", "));
    }
    Ok(())
}
