//! `slots` CLI -- filter, merge, and export candidate meeting slots.
//!
//! Input is the availability service's response (`{"comon_availability": [...]}`)
//! or a bare JSON array of `[start, end]` pairs, read from a file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Merged slots as JSON pairs (form defaults: 09:00-18:00, Mon-Fri)
//! curl -s "$SERVICE/get_availability" -d @form.json | slots merge
//!
//! # Filtered but unmerged, any weekday, custom window
//! slots filter -i candidates.json --min-time 10:00 --max-time 17:00 --days all
//!
//! # Copy-ready text in Japanese, settings from a file
//! slots export -i candidates.json --config settings.json --locale ja
//!
//! # Why was each entry kept or dropped?
//! slots check -i candidates.json --days Mon,Tue
//! ```
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=slot_engine=trace`) or pass `-v` for
//! diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slot_engine::filter::check_raw;
use slot_engine::format::format_raw;
use slot_engine::{
    candidates_from_json, filter_and_sort, process, to_pairs, EngineConfig, Locale, RawInterval,
    TimeInterval,
};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Filter, merge and export candidate meeting slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine diagnostics to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print filtered candidates as JSON pairs, sorted but not merged
    Filter {
        #[command(flatten)]
        io: InputArgs,
        #[command(flatten)]
        constraint: ConstraintArgs,
    },
    /// Print merged candidates as JSON pairs
    Merge {
        #[command(flatten)]
        io: InputArgs,
        #[command(flatten)]
        constraint: ConstraintArgs,
        /// Print the full report (slots plus input/rejected/merged counts)
        #[arg(long)]
        report: bool,
    },
    /// Print copy-ready text, one slot per line
    Export {
        #[command(flatten)]
        io: InputArgs,
        #[command(flatten)]
        constraint: ConstraintArgs,
        /// Weekday label language: en or ja
        #[arg(long)]
        locale: Option<Locale>,
        /// Skip merging; export the filtered candidates as-is
        #[arg(long)]
        no_merge: bool,
    },
    /// Report, per entry, whether it passes the constraint and why not
    Check {
        #[command(flatten)]
        io: InputArgs,
        #[command(flatten)]
        constraint: ConstraintArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Args)]
struct ConstraintArgs {
    /// JSON settings file ({minTime, maxTime, weekdays, locale, merge})
    #[arg(long)]
    config: Option<String>,
    /// Earliest allowed start time (HH:MM)
    #[arg(long)]
    min_time: Option<String>,
    /// Latest allowed end time (HH:MM)
    #[arg(long)]
    max_time: Option<String>,
    /// Comma-separated weekday labels (Mon,Tue or 月,火), or "all"
    #[arg(long)]
    days: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Filter { io, constraint } => {
            let config = resolve_config(&constraint)?;
            let raw = read_candidates(io.input.as_deref())?;
            let shown = filter_and_sort(&raw, &config.constraint()?);
            write_output(io.output.as_deref(), &to_json(&to_pairs(&shown))?)?;
        }
        Commands::Merge {
            io,
            constraint,
            report,
        } => {
            let config = resolve_config(&constraint)?;
            let raw = read_candidates(io.input.as_deref())?;
            let result = process(&raw, &config.constraint()?);
            let json = if report {
                to_json(&result)?
            } else {
                to_json(&result.to_pairs())?
            };
            write_output(io.output.as_deref(), &json)?;
        }
        Commands::Export {
            io,
            constraint,
            locale,
            no_merge,
        } => {
            let mut config = resolve_config(&constraint)?;
            if let Some(locale) = locale {
                config.locale = locale;
            }
            if no_merge {
                config.merge = false;
            }
            let raw = read_candidates(io.input.as_deref())?;
            let slots = export_slots(&raw, &config)?;
            if slots.is_empty() {
                info!("no candidates satisfy the constraint; nothing to export");
            }
            let text = slot_engine::export_text(&slots, config.locale);
            write_output(io.output.as_deref(), &text)?;
        }
        Commands::Check { io, constraint } => {
            let config = resolve_config(&constraint)?;
            let constraint = config.constraint()?;
            let raw = read_candidates(io.input.as_deref())?;
            let lines: Vec<String> = raw
                .iter()
                .map(|entry| {
                    let verdict = match check_raw(entry, &constraint) {
                        Ok(_) => "ok".to_string(),
                        Err(reason) => reason.to_string(),
                    };
                    format!("{}\t{}", format_raw(entry, config.locale), verdict)
                })
                .collect();
            write_output(io.output.as_deref(), &lines.join("\n"))?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the settings file (if any) and apply command-line overrides on top.
///
/// - `--days all` clears the weekday restriction
/// - `--days Mon,Tue` replaces the configured weekdays
fn resolve_config(args: &ConstraintArgs) -> Result<EngineConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            EngineConfig::from_json(&text)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => EngineConfig::default(),
    };

    if let Some(min) = &args.min_time {
        config.min_time = min.clone();
    }
    if let Some(max) = &args.max_time {
        config.max_time = max.clone();
    }
    if let Some(days) = args.days.as_deref() {
        config.weekdays = if days.trim().eq_ignore_ascii_case("all") {
            Vec::new()
        } else {
            days.split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect()
        };
    }

    // Surface bad times/labels before any input is read.
    config.constraint().context("Invalid constraint")?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn export_slots(raw: &[RawInterval], config: &EngineConfig) -> Result<Vec<TimeInterval>> {
    let constraint = config.constraint()?;
    Ok(if config.merge {
        process(raw, &constraint).slots
    } else {
        filter_and_sort(raw, &constraint)
    })
}

fn read_candidates(path: Option<&str>) -> Result<Vec<RawInterval>> {
    let json = read_input(path)?;
    candidates_from_json(&json).context("Failed to read candidates")
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None if content.is_empty() => {}
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
