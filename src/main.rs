use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_courier::generate::{generate_batch, GeneratorConfig};
use u_courier::input::{parse_batch, Batch};
use u_courier::report::{cost_report, render_text, time_report, EstimateRow};
use u_courier::PlanConfig;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate delivery cost for every package
    Cost {
        /// Batch file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Estimate delivery cost and time for every package
    Time {
        /// Batch file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// JSON fleet config, overrides the batch's fleet line
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a random batch
    #[command(visible_alias = "g")]
    Generate {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        #[arg(long, default_value_t = 100)]
        base_cost: u64,

        /// Number of vehicles
        #[arg(long, default_value_t = 2)]
        vehicles: u32,

        /// Vehicle speed in km/h
        #[arg(long, default_value_t = 70)]
        speed: u32,

        /// Vehicle capacity in kg
        #[arg(long, default_value_t = 200)]
        capacity: u32,

        #[arg(long, default_value_t = 1)]
        min_weight: u32,

        /// Clamped to the capacity
        #[arg(long, default_value_t = 200)]
        max_weight: u32,

        #[arg(long, default_value_t = 1)]
        min_distance: u32,

        #[arg(long, default_value_t = 250)]
        max_distance: u32,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "u_courier=debug" } else { "u_courier=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Cost { input, format } => {
            let batch = read_batch(input.as_deref())?;
            print_rows(&cost_report(&batch), format)?;
        }
        Commands::Time {
            input,
            format,
            config,
        } => {
            let batch = read_batch(input.as_deref())?;
            let fleet = match config {
                Some(path) => read_config(&path)?,
                None => batch.require_fleet()?,
            };
            fleet.validate()?;
            let rows = time_report(&batch, &fleet)?;
            print_rows(&rows, format)?;
        }
        Commands::Generate {
            count,
            seed,
            base_cost,
            vehicles,
            speed,
            capacity,
            min_weight,
            max_weight,
            min_distance,
            max_distance,
            output,
        } => {
            let config = GeneratorConfig::default()
                .with_count(count)
                .with_seed(seed)
                .with_base_cost(base_cost)
                .with_weights(min_weight, max_weight)
                .with_distances(min_distance, max_distance)
                .with_fleet(PlanConfig::new(capacity, speed, vehicles));
            let text = generate_batch(&config)?.to_text();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, text)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(packages = count, path = %path.display(), "batch written");
                }
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}

fn read_batch(path: Option<&Path>) -> Result<Batch, anyhow::Error> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(parse_batch(&text)?)
}

fn read_config(path: &Path) -> Result<PlanConfig, anyhow::Error> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn print_rows(rows: &[EstimateRow], format: Format) -> Result<(), anyhow::Error> {
    match format {
        Format::Text => print!("{}", render_text(rows)),
        Format::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}
