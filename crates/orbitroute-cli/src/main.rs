use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use orbitroute_lib::{
    load_network, run_survey, Network, SurveyRequest, SurveySummary, DEFAULT_MAX_DEPTH,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Orbital connection survey utilities")]
struct Cli {
    /// Path to the flat comma-separated connection records.
    #[arg(long)]
    network: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate, rank, and analyse every simple route between two stations.
    Survey {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
        /// Maximum number of stations permitted in any single route.
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Output rendering.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List every station with its outgoing connection count.
    Stations {
        /// Output rendering.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_network(&cli.network)
        .with_context(|| format!("failed to load network from {}", cli.network.display()))?;

    match cli.command {
        Command::Survey {
            from,
            to,
            max_depth,
            format,
        } => handle_survey(&network, &from, &to, max_depth, format),
        Command::Stations { format } => handle_stations(&network, format),
    }
}

fn handle_survey(
    network: &Network,
    from: &str,
    to: &str,
    max_depth: usize,
    format: OutputFormat,
) -> Result<()> {
    let request = SurveyRequest::new(from, to).with_max_depth(max_depth);
    let report = run_survey(network, &request);
    let summary = SurveySummary::from_report(&request, &report);

    match format {
        OutputFormat::Text => print!("{}", summary.render_plain()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary)
                .context("failed to serialise survey summary")?
        ),
    }
    Ok(())
}

fn handle_stations(network: &Network, format: OutputFormat) -> Result<()> {
    let inventory = network.station_inventory();

    match format {
        OutputFormat::Text => {
            for (station, outgoing) in &inventory {
                println!("- {} ({} outgoing)", station, outgoing);
            }
        }
        OutputFormat::Json => {
            let listing: Vec<serde_json::Value> = inventory
                .into_iter()
                .map(|(station, outgoing)| {
                    serde_json::json!({ "station": station, "outgoing": outgoing })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&listing)
                    .context("failed to serialise station listing")?
            );
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
