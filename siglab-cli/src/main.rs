//! SigLab CLI — evaluate signal files and inspect search configurations.
//!
//! Commands:
//! - `evaluate` — replay a precomputed signal column (classifier predictions
//!   or exported generator output) against a prices CSV and print metrics
//! - `strategies` — list the built-in strategy registry
//! - `grid` — validate a TOML search config against the registry and report
//!   its combination count

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use siglab_core::{PerformanceMetrics, Simulator, StrategyRegistry};
use siglab_runner::{load_close_prices, load_signal_column, SearchConfig, SIGNAL_COLUMN};

#[derive(Parser)]
#[command(
    name = "siglab",
    about = "SigLab CLI — signal-sequence backtesting and parameter-search tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a signal file against a prices CSV and print performance.
    Evaluate {
        /// Prices CSV with a `Close` column.
        #[arg(long)]
        prices: PathBuf,

        /// Signals CSV with a {-1, 0, 1} column.
        #[arg(long)]
        signals: PathBuf,

        /// Column holding the signal values.
        #[arg(long, default_value = SIGNAL_COLUMN)]
        column: String,

        /// Warm-up rows to drop from both files before the replay.
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Exit-horizon override.
        #[arg(long)]
        horizon: Option<usize>,

        /// Emit the full result (metrics + trades) as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the built-in strategy registry.
    Strategies,
    /// Validate a TOML search config and report its combination count.
    Grid {
        /// Path to the search config.
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            prices,
            signals,
            column,
            offset,
            horizon,
            json,
        } => run_evaluate(prices, signals, &column, offset, horizon, json),
        Commands::Strategies => run_strategies(),
        Commands::Grid { config } => run_grid(&config),
    }
}

fn run_evaluate(
    prices_path: PathBuf,
    signals_path: PathBuf,
    column: &str,
    offset: usize,
    horizon: Option<usize>,
    json: bool,
) -> Result<()> {
    let prices = load_close_prices(&prices_path)
        .with_context(|| format!("loading prices from {}", prices_path.display()))?;
    let signals = load_signal_column(&signals_path, column)
        .with_context(|| format!("loading signals from {}", signals_path.display()))?;

    let simulator = horizon.map_or_else(Simulator::default, Simulator::new);
    let trades = simulator.replay_from_offset(&prices, &signals, offset);
    let metrics = PerformanceMetrics::compute(&trades);

    if json {
        let evaluation = serde_json::json!({
            "metrics": metrics,
            "trades": trades,
        });
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("Total Trades:             {}", metrics.total_trades);
        println!("Success Rate:             {:.2}%", metrics.success_rate);
        println!("Average Return per Trade: {:.4}%", metrics.avg_return);
    }
    Ok(())
}

fn run_strategies() -> Result<()> {
    let registry = StrategyRegistry::builtin();
    for spec in registry.iter() {
        println!("{}", spec.id);
        for (name, value) in &spec.defaults {
            let marker = if spec.lookback_params.iter().any(|l| l == name) {
                "  (lookback)"
            } else {
                ""
            };
            println!("    {name} = {value}{marker}");
        }
    }
    Ok(())
}

fn run_grid(config_path: &std::path::Path) -> Result<()> {
    let config = SearchConfig::from_toml_file(config_path)?;
    let registry = StrategyRegistry::builtin();
    let spec = registry.require(&config.strategy)?;

    let grid = config.param_grid();
    grid.validate(spec)?;

    println!("strategy:     {}", config.strategy);
    println!("data:         {}", config.data.display());
    println!(
        "horizon:      {}",
        config
            .horizon
            .map_or_else(|| "default".to_string(), |h| h.to_string())
    );
    println!("combinations: {}", grid.size());
    for dim in grid.dimensions() {
        let values: Vec<String> = dim.values.iter().map(|v| v.to_string()).collect();
        println!("    {}: [{}]", dim.name, values.join(", "));
    }
    Ok(())
}
