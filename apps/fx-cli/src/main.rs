use clap::{Parser, Subcommand};
use fx_app::{AppResult, CancelToken, ExtractorConfig, extract_flowsheet};
use fx_units::{BaseValue, lookup, supported_units};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fx-cli")]
#[command(about = "Flowsheet exchange CLI - inspect simulation model archives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a model archive and print its flowsheet as JSON
    Inspect {
        /// Path to the model archive
        archive: PathBuf,
        /// Extractor config YAML file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the per-node property cap
        #[arg(long)]
        max_properties: Option<usize>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show the quantity kind of a unit and convert a value to base units
    Unit {
        /// Unit name as reported by the simulator (e.g. kPa, C, kg/h)
        name: String,
        /// Value to convert
        #[arg(long)]
        value: Option<f64>,
    },
    /// List supported units
    Units,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            archive,
            config,
            max_properties,
            pretty,
        } => cmd_inspect(&archive, config.as_deref(), max_properties, pretty),
        Commands::Unit { name, value } => cmd_unit(&name, value),
        Commands::Units => {
            cmd_units();
            Ok(())
        }
    }
}

fn cmd_inspect(
    archive: &Path,
    config_path: Option<&Path>,
    max_properties: Option<usize>,
    pretty: bool,
) -> AppResult<()> {
    let mut config = ExtractorConfig::load_or_default(config_path)?;
    if let Some(max) = max_properties {
        config.max_properties_per_node = max;
    }

    let model = extract_flowsheet(archive, &config, &CancelToken::new())?;
    println!("{}", model.to_json(pretty)?);
    Ok(())
}

fn cmd_unit(name: &str, value: Option<f64>) -> AppResult<()> {
    let def = lookup(name)?;
    println!("{} ({}), base unit {}", def.symbol, def.kind, def.kind.base_symbol());

    if let Some(value) = value {
        let base = BaseValue::from_unit(name, value)?;
        println!("  {} {} = {} {}", value, def.symbol, base.value, def.kind.base_symbol());
    }
    Ok(())
}

fn cmd_units() {
    for def in supported_units() {
        if def.aliases.is_empty() {
            println!("{:<12} {}", def.symbol, def.kind);
        } else {
            println!("{:<12} {} (also: {})", def.symbol, def.kind, def.aliases.join(", "));
        }
    }
}
