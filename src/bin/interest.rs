//! Command line front end: calculate interest, show or clear history
//!
//! History is kept in a JSON file (see `--history-file` / `historyFile`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use interest_calculator::{
    calc::format_rate,
    export::{write_history_csv, write_report_json, write_series_csv},
    AppConfig, CalcError, CalculationInput, Calculator, Compounding, InterestEngine, InterestType,
    HistoryLog, JsonFileStore, TimeSpan,
};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CompoundingArg {
    Annual,
    Monthly,
    PerUnit,
}

impl From<CompoundingArg> for Compounding {
    fn from(arg: CompoundingArg) -> Self {
        match arg {
            CompoundingArg::Annual => Compounding::Annual,
            CompoundingArg::Monthly => Compounding::Monthly,
            CompoundingArg::PerUnit => Compounding::PerUnit,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InterestTypeArg {
    Simple,
    Compound,
}

impl From<InterestTypeArg> for InterestType {
    fn from(arg: InterestTypeArg) -> Self {
        match arg {
            InterestTypeArg::Simple => InterestType::Simple,
            InterestTypeArg::Compound => InterestType::Compound,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "interest", version, about = "Simple and compound interest calculator")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History file (overrides the config value)
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute interest and record it in history
    Calc(CalcArgs),
    /// List recorded calculations
    History {
        /// Write history as CSV instead of listing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Remove all recorded calculations
    Clear,
}

#[derive(clap::Args, Debug)]
struct CalcArgs {
    /// Principal amount
    #[arg(short, long)]
    principal: f64,

    /// Interest rate in percent
    #[arg(short, long)]
    rate: f64,

    #[arg(short, long, default_value_t = 0.0)]
    years: f64,

    #[arg(short, long, default_value_t = 0.0)]
    months: f64,

    #[arg(short, long, default_value_t = 0.0)]
    days: f64,

    /// Defaults to the config value
    #[arg(short, long, value_enum)]
    compounding: Option<CompoundingArg>,

    /// Defaults to the config value
    #[arg(short = 't', long, value_enum)]
    interest_type: Option<InterestTypeArg>,

    /// Print the growth series
    #[arg(long)]
    series: bool,

    /// Write the growth series as CSV
    #[arg(long)]
    series_csv: Option<PathBuf>,

    /// Write a JSON report of the calculation
    #[arg(long)]
    report: Option<PathBuf>,

    /// Do not record the calculation in history
    #[arg(long)]
    no_history: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Validation problems are user errors: print the message only
            match e.downcast_ref::<CalcError>() {
                Some(CalcError::Validation(v)) => eprintln!("{v}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = cli.history_file {
        config.history_file = path;
    }
    debug!("Using config {:?}", config);

    let store = JsonFileStore::new(&config.history_file);
    let log = HistoryLog::open(store)
        .with_context(|| format!("failed to open history {}", config.history_file.display()))?;
    let engine = InterestEngine::new(config.rate_bounds).with_max_periods(config.max_periods);
    let calculator = Calculator::new(engine, log);

    match cli.command {
        Command::Calc(args) => {
            let mut calculator = if args.no_history {
                calculator.without_history()
            } else {
                calculator
            };
            calc(&mut calculator, &config, args)
        }
        Command::History { csv } => history(&calculator, csv),
        Command::Clear => {
            let mut calculator = calculator;
            calculator.clear_history().context("failed to clear history")?;
            println!("History cleared.");
            Ok(())
        }
    }
}

fn calc(
    calculator: &mut Calculator<JsonFileStore>,
    config: &AppConfig,
    args: CalcArgs,
) -> Result<()> {
    let compounding = args
        .compounding
        .map(Into::into)
        .unwrap_or(config.default_compounding);
    let interest_type = args
        .interest_type
        .map(Into::into)
        .unwrap_or(config.default_interest_type);
    let time = TimeSpan::new(args.years, args.months, args.days);
    let input = CalculationInput::new(args.principal, args.rate, time)
        .with_compounding(compounding)
        .with_interest_type(interest_type);

    let calculation = calculator.calculate(input)?;

    println!(
        "{} interest, {} compounding at {}",
        input.interest_type,
        input.compounding,
        format_rate(input.rate_percent)
    );
    println!("  Interest: ₹{}", calculation.result.interest);
    println!("  Total:    ₹{}", calculation.result.total);

    if args.series {
        println!("\n{:>6} | {:>14}", calculation.unit.axis_label(), "Total");
        for point in &calculation.series {
            println!("{:>6} | {:>14.2}", point.period, point.total);
        }
    }

    if let Some(path) = args.series_csv {
        let file = create_file(&path)?;
        write_series_csv(BufWriter::new(file), calculation.unit, &calculation.series)?;
        println!("Series written to {}", path.display());
    }

    if let Some(path) = args.report {
        let file = create_file(&path)?;
        let mut writer = BufWriter::new(file);
        write_report_json(&mut writer, &calculation)?;
        writer.flush()?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn history(calculator: &Calculator<JsonFileStore>, csv: Option<PathBuf>) -> Result<()> {
    let entries = calculator.history();

    if let Some(path) = csv {
        let file = create_file(&path)?;
        write_history_csv(BufWriter::new(file), entries)?;
        println!("{} entries written to {}", entries.len(), path.display());
        return Ok(());
    }

    if entries.is_empty() {
        println!("No calculations recorded.");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in entries {
        writeln!(out, "{}", entry.summary_line())?;
    }
    Ok(())
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
