use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use ynab_metrics::cli::{
    handle_collect_command, handle_inspect_command, parse_date, CollectArgs, InspectArgs,
};
use ynab_metrics::config::{paths::ExporterPaths, settings::Settings};
use ynab_metrics::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "ynab-metrics",
    version,
    about = "Prometheus gauges for budget category balances and goals",
    long_about = "ynab-metrics reads a snapshot of your budgets and publishes, for every \
                  category, what was budgeted, spent and is left, plus the monthly \
                  contribution each goal still needs."
)]
struct Cli {
    /// Evaluate goals as of this date (YYYY-MM-DD); defaults to today
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one collection cycle and print the metrics
    Collect(CollectArgs),

    /// Show the figures a collection would publish
    Inspect(InspectArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let paths = ExporterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Collect(args)) => {
            handle_collect_command(&paths, &settings, args, today, &mut out)?;
        }
        Some(Commands::Inspect(args)) => {
            handle_inspect_command(&paths, &settings, args, today, &mut out)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote settings to: {}", paths.settings_file().display());
            println!();
            println!(
                "Save a budget snapshot to {} or set snapshot_path,",
                paths.default_snapshot_file().display()
            );
            println!("then run 'ynab-metrics collect'.");
        }
        Some(Commands::Config) => {
            println!("ynab-metrics Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Metric prefix:  {}",
                settings.metric_prefix().unwrap_or("(none)")
            );
            println!("  Stale policy:   {:?}", settings.stale_policy);
            println!(
                "  Snapshot path:  {}",
                settings
                    .snapshot_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            );
        }
        None => {
            println!("ynab-metrics - Prometheus gauges for budget categories");
            println!();
            println!("Run 'ynab-metrics --help' for usage information.");
        }
    }

    Ok(())
}
