// Tue Jan 13 2026 - Alex

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use virtual_bistro::{
    config::KitchenConfig,
    dish::Dish,
    kitchen::Kitchen,
    utils::{logging, pluralize, LoggingUtils},
    RoundingPolicy,
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Virtual bistro kitchen tracker", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON array of dishes to load into the kitchen
    #[arg(short, long)]
    dishes: PathBuf,

    /// Kitchen config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured capacity (0 = unbounded)
    #[arg(long)]
    capacity: Option<usize>,

    /// Round the elaborate percentage up instead of to nearest
    #[arg(long)]
    round_up: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    log_level: Option<String>,

    /// Take the log filter from RUST_LOG
    #[arg(long, conflicts_with_all = ["verbose", "log_level"])]
    env_log: bool,

    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the kitchen report
    Report {
        #[arg(long)]
        json: bool,
    },
    /// Count dishes of one cuisine (exact uppercase label)
    Count { label: String },
    /// Remove dishes that take fewer than MINUTES to prepare
    RemoveBelow { minutes: u32 },
    /// Remove every dish of one cuisine
    RemoveCuisine { label: String },
    /// Serve (remove) the first dish with the given name
    Serve { name: String },
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.env_log {
        logging::init_from_env();
    } else {
        let level = match &args.log_level {
            Some(level) => LoggingUtils::level_from_str(level),
            None => LoggingUtils::level_from_verbosity(args.verbose),
        };
        LoggingUtils::init_logger(level, !args.no_color);
    }

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let dishes = load_dishes(&args.dishes)?;

    eprintln!(
        "{} Loading {} from {}",
        "[*]".blue(),
        pluralize(dishes.len(), "dish", "dishes"),
        args.dishes.display()
    );

    let (mut kitchen, rejected) = Kitchen::from_dishes(&config, dishes);
    if rejected > 0 {
        eprintln!(
            "{} {} rejected (duplicate or over capacity)",
            "[!]".yellow(),
            pluralize(rejected, "dish", "dishes")
        );
    }
    eprintln!("{} Kitchen holds {}", "[+]".green(), pluralize(kitchen.len(), "dish", "dishes"));

    match args.command.unwrap_or(Command::Report { json: false }) {
        Command::Report { json } => {
            if json {
                println!("{}", kitchen.report().to_json().context("Failed to serialize report")?);
            } else {
                kitchen.print_report().context("Failed to write report")?;
            }
        }
        Command::Count { label } => {
            println!("{}: {}", label, kitchen.count_by_category(&label));
        }
        Command::RemoveBelow { minutes } => {
            let removed = kitchen.remove_below_prep_time(minutes);
            eprintln!("{} Removed {}", "[+]".green(), pluralize(removed, "dish", "dishes"));
            kitchen.print_report().context("Failed to write report")?;
        }
        Command::RemoveCuisine { label } => {
            let removed = kitchen.remove_by_category(&label);
            eprintln!("{} Removed {}", "[+]".green(), pluralize(removed, "dish", "dishes"));
            kitchen.print_report().context("Failed to write report")?;
        }
        Command::Serve { name } => {
            let dish = kitchen.dishes().find(|d| d.name() == name).cloned();
            match dish {
                Some(dish) if kitchen.remove_dish(&dish) => {
                    eprintln!("{} Served {}", "[+]".green(), dish);
                }
                _ => anyhow::bail!("No dish named {:?} in the kitchen", name),
            }
            kitchen.print_report().context("Failed to write report")?;
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<KitchenConfig> {
    let mut config = match &args.config {
        Some(path) => KitchenConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => KitchenConfig::default(),
    };

    if let Some(capacity) = args.capacity {
        config = config.with_capacity(if capacity == 0 { None } else { Some(capacity) });
    }
    if args.round_up {
        config = config.with_rounding(RoundingPolicy::Up);
    }

    config.validate()?;
    Ok(config)
}

fn load_dishes(path: &Path) -> Result<Vec<Dish>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dishes from {}", path.display()))?;
    let dishes: Vec<Dish> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse dishes in {}", path.display()))?;
    Ok(dishes)
}
