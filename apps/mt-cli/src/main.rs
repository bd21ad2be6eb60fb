use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use mt_cli::{CliResult, batch, demo, listing, resolve_unit};
use mt_core::Dimension;

#[derive(Parser)]
#[command(name = "mt-cli")]
#[command(about = "Metrum CLI - type-safe unit conversions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Unit family of both units
        #[arg(short, long, value_enum)]
        dimension: DimensionArg,
        /// Value expressed in FROM
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Source unit, by name (kilometers) or symbol (km)
        from: String,
        /// Target unit, by name or symbol
        to: String,
    },
    /// Run every conversion in a YAML batch file
    Batch {
        /// Path to the batch YAML file
        path: PathBuf,
        /// Print results as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// List units and their base-unit factors
    Units {
        /// Restrict to one unit family
        #[arg(short, long, value_enum)]
        dimension: Option<DimensionArg>,
    },
    /// Print the grouped constants tables
    Constants,
    /// Walk through the library with worked examples
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum DimensionArg {
    Length,
    Mass,
    Time,
    Temperature,
    Data,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Length => Dimension::Length,
            DimensionArg::Mass => Dimension::Mass,
            DimensionArg::Time => Dimension::Time,
            DimensionArg::Temperature => Dimension::Temperature,
            DimensionArg::Data => Dimension::Information,
        }
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            dimension,
            value,
            from,
            to,
        } => cmd_convert(dimension.into(), value, &from, &to),
        Commands::Batch { path, json } => cmd_batch(&path, json),
        Commands::Units { dimension } => cmd_units(dimension.map(Dimension::from)),
        Commands::Constants => Ok(listing::write_constants(&mut io::stdout().lock())?),
        Commands::Demo => Ok(demo::run(&mut io::stdout().lock())?),
    }
}

fn cmd_convert(dimension: Dimension, value: f64, from: &str, to: &str) -> CliResult<()> {
    let from = resolve_unit(dimension, from)?;
    let to = resolve_unit(dimension, to)?;
    let out = from.convert(value, to)?;
    println!("{} = {}", from.describe(value), to.describe(out));
    Ok(())
}

fn cmd_batch(path: &Path, json: bool) -> CliResult<()> {
    let file = batch::load_yaml(path)?;
    tracing::debug!(count = file.conversions.len(), strict = file.strict, "loaded batch");

    let outcomes = batch::run_batch(&file);
    let rendered = if json {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_yaml::to_string(&outcomes)?
    };
    println!("{}", rendered.trim_end());

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed == 0 {
        eprintln!("✓ {} conversions", outcomes.len());
    } else {
        eprintln!("✗ {failed} of {} conversions failed", outcomes.len());
    }
    Ok(())
}

fn cmd_units(dimension: Option<Dimension>) -> CliResult<()> {
    let mut out = io::stdout().lock();
    match dimension {
        Some(dim) => listing::write_units(&mut out, dim)?,
        None => listing::write_all_units(&mut out)?,
    }
    Ok(())
}
