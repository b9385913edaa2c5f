// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, consts::DEFAULT_CONFIG_FILE, Settings};
use crate::error::{Error, Result};
use crate::progress::ConsoleProgress;
use crate::runner;
use crate::scrape::ReportEndpoint;
use crate::specs::lists::ListFormat;

#[derive(Parser, Debug)]
#[command(
    name = "council_lists",
    version,
    about = "Parse council candidate lists, fetch disclosures and render a comparison report"
)]
pub struct Cli {
    /// key=value settings file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory with raw `<year>.txt` list files
    #[arg(long, global = true)]
    pub lists_dir: Option<PathBuf>,

    /// Directory for the JSON artifacts
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Election years to consider (comma separated)
    #[arg(long, global = true, value_delimiter = ',')]
    pub years: Option<Vec<u32>>,

    /// Write debug lines to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse `<year>.txt` into `<year>.json` (every configured year when --year is omitted)
    Transform {
        #[arg(long)]
        year: Option<u32>,
        /// Override the list format picked from the year
        #[arg(long)]
        format: Option<ListFormat>,
    },
    /// Fetch disclosure records for one year's members (latest year by default)
    Fetch {
        #[arg(long)]
        year: Option<u32>,
    },
    /// Render the HTML comparison report
    Report {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Transform all years, fetch the latest and render the report
    Run,
}

/// Config file first, then flags on top.
pub fn settings(cli: &Cli) -> Result<Settings> {
    let mut cfg = config::file::load(&cli.config)?;
    if let Some(dir) = &cli.lists_dir { cfg.lists_dir = dir.clone(); }
    if let Some(dir) = &cli.out_dir { cfg.out_dir = dir.clone(); }
    if let Some(years) = &cli.years { cfg.set_years(years.clone()); }
    if cli.verbose { cfg.verbose = true; }
    Ok(cfg)
}

pub fn run() -> Result<()> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<()> {
    let cfg = settings(&cli)?;
    crate::log::init(&cfg.log_file, cfg.verbose);
    if cli.config.exists() {
        logf!("Loaded config from {}", cli.config.display());
    }
    logd!("Settings: {cfg:?}");

    let mut progress = ConsoleProgress::default();

    match cli.command {
        Command::Transform { year, format } => {
            let bulk = year.is_none();
            let years = match year {
                Some(y) => vec![y],
                None => cfg.years.clone(),
            };
            for year in years {
                match runner::transform(&cfg, year, format) {
                    Ok(t) => println!(
                        "{}: {} lists, {} members → {}",
                        t.year, t.lists, t.members, t.path.display()
                    ),
                    // A single requested year must exist; in bulk, skip gaps
                    Err(Error::MissingInput(path)) if bulk => {
                        logw!("Skipping {year}: {} not found", path.display());
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Command::Fetch { year } => {
            let year = year.or_else(|| cfg.latest_year()).ok_or(Error::NoData)?;
            let f = runner::fetch(&cfg, year, &mut progress)?;
            println!("{}: {} found, {} missing → {}", f.year, f.found, f.missing, f.path.display());
        }
        Command::Report { output } => {
            let path = runner::report(&cfg, output.as_deref())?;
            println!("Wrote {}", path.display());
        }
        Command::Run => {
            let mut source = ReportEndpoint::new(&cfg)?;
            let summary = runner::run_all(&cfg, &mut source, &mut progress)?;
            for path in summary.files_written {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
