//! babysitter-calc - price a night of babysitting from the command line or over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use babysitter_calc::api::{AppState, create_router};
use babysitter_calc::calculation::{RateCalculator, format_currency};
use babysitter_calc::config::ConfigLoader;
use babysitter_calc::form::{FormOptions, JobForm, validate_selection};
use babysitter_calc::models::parse_time_of_day;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Babysitting job calculator
#[derive(Parser, Debug)]
#[command(name = "babysitter-calc", version, about)]
struct Cli {
    /// Path to a YAML configuration file (built-in rates are used if omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a single job
    Calculate {
        /// Start time, e.g. 17:00 or "05:00 PM"
        #[arg(long)]
        start: String,
        /// Bedtime, e.g. 21:00
        #[arg(long)]
        bedtime: String,
        /// End time, e.g. 02:00
        #[arg(long)]
        end: String,
        /// Print the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the times each selector accepts
    Options,
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_calculator(path: Option<&PathBuf>) -> anyhow::Result<RateCalculator> {
    let loader = match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };
    Ok(RateCalculator::new(loader.into_config()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let calculator = load_calculator(cli.config.as_ref())?;

    match cli.command {
        Commands::Calculate {
            start,
            bedtime,
            end,
            json,
        } => run_calculate(&calculator, &start, &bedtime, &end, json),
        Commands::Options => run_options(&calculator),
        Commands::Serve { addr } => run_serve(calculator, addr).await,
    }
}

fn run_calculate(
    calculator: &RateCalculator,
    start: &str,
    bedtime: &str,
    end: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut form = JobForm::new(calculator.reference_hour());
    form.select_start(Some(parse_time_of_day(start)?));
    form.select_bedtime(Some(parse_time_of_day(bedtime)?));
    if let Some(message) = form.select_end(Some(parse_time_of_day(end)?)) {
        bail!("{}", message.text);
    }

    if let Some(times) = form.selection() {
        validate_selection(&times, calculator.config().limits())?;
    }

    let charge = form.calculate(calculator)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&charge)?);
        return Ok(());
    }

    for line in &charge.tiers {
        println!(
            "{:<20} {:>2}h x {:>6} = {}",
            line.tier,
            line.hours,
            line.rate.normalize(),
            format_currency(line.amount, calculator.config().currency())
        );
    }
    println!("Total for job: {}", charge.formatted_total);
    Ok(())
}

fn run_options(calculator: &RateCalculator) -> anyhow::Result<()> {
    let options = FormOptions::for_limits(calculator.config().limits());
    let columns = [
        ("Start", &options.start_times),
        ("Bedtime", &options.bedtimes),
        ("End", &options.end_times),
    ];
    for (name, list) in columns {
        let labels: Vec<&str> = list.iter().map(|o| o.label.as_str()).collect();
        println!("{:<8} {}", name, labels.join(", "));
    }
    Ok(())
}

async fn run_serve(calculator: RateCalculator, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(AppState::new(calculator));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!(%addr, "Serving babysitting calculator API");
    axum::serve(listener, router).await?;
    Ok(())
}
