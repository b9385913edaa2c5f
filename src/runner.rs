// src/runner.rs
//
// Stage orchestration shared by the CLI subcommands.

use std::path::{Path, PathBuf};

use crate::{
    config::Settings,
    error::{Error, Result},
    progress::Progress,
    report,
    scrape::{self, ApplicationSource, FetchSummary, ReportEndpoint},
    specs::lists::ListFormat,
    transform::{self, TransformSummary},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

pub fn transform(cfg: &Settings, year: u32, format: Option<ListFormat>) -> Result<TransformSummary> {
    transform::transform_year(cfg, year, format)
}

/// Fetch against the live endpoint.
pub fn fetch(cfg: &Settings, year: u32, progress: &mut dyn Progress) -> Result<FetchSummary> {
    let mut source = ReportEndpoint::new(cfg)?;
    fetch_from(cfg, year, &mut source, progress)
}

pub fn fetch_from(
    cfg: &Settings,
    year: u32,
    source: &mut dyn ApplicationSource,
    progress: &mut dyn Progress,
) -> Result<FetchSummary> {
    scrape::fetch_year(cfg, year, source, progress)
}

pub fn report(cfg: &Settings, output: Option<&Path>) -> Result<PathBuf> {
    report::write_report(cfg, output)
}

/// Transform every configured year that has a list file, fetch the latest
/// year with lists on disk, then render the report.
pub fn run_all(
    cfg: &Settings,
    source: &mut dyn ApplicationSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for &year in &cfg.years {
        match transform::transform_year(cfg, year, None) {
            Ok(t) => {
                progress.log(&format!("{year}: {} lists, {} members", t.lists, t.members));
                summary.files_written.push(t.path);
            }
            Err(Error::MissingInput(path)) => {
                logw!("Skipping {year}: {} not found", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    // Earlier runs may have left `<year>.json` without its list file
    let latest = cfg
        .years
        .iter()
        .rev()
        .copied()
        .find(|&y| cfg.lists_json(y).exists())
        .ok_or(Error::NoData)?;
    if let Some(newest) = cfg.latest_year().filter(|&y| y != latest) {
        logw!("No lists for {newest}, fetching {latest} instead");
    }
    let fetched = scrape::fetch_year(cfg, latest, source, progress)?;
    summary.files_written.push(fetched.path);

    summary.files_written.push(report::write_report(cfg, None)?);
    Ok(summary)
}
