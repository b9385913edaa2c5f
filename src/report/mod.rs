// src/report/mod.rs
//
// Comparison report across election years. The most recent year drives the
// layout; earlier years only feed the "experience" column.

pub mod render;
pub mod summary;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::file::write_text;
use crate::model::{ListsDocument, MemberApplications};
use crate::store;

pub use render::render;
pub use summary::{ListSummary, Thresholds};

/// One election year's parsed lists.
#[derive(Clone, Debug)]
pub struct YearData {
    pub year: u32,
    pub data: ListsDocument,
}

#[derive(Clone, Debug)]
pub struct ReportInput {
    pub title: String,
    pub council_url: String,
    pub seats: usize,
    pub latest: YearData,
    /// Earlier years, most recent first.
    pub previous: Vec<YearData>,
    /// Disclosure records of the latest year.
    pub applications: MemberApplications,
    pub thresholds: Thresholds,
    pub today: NaiveDate,
}

impl ReportInput {
    /// Assemble from already loaded years; order of `years` does not matter.
    pub fn new(
        cfg: &Settings,
        mut years: Vec<YearData>,
        applications: MemberApplications,
        today: NaiveDate,
    ) -> Result<Self> {
        years.sort_by(|a, b| b.year.cmp(&a.year));
        let mut it = years.into_iter();
        let latest = it.next().ok_or(Error::NoData)?;
        let previous: Vec<YearData> = it.collect();

        Ok(Self {
            title: cfg.title.clone(),
            council_url: cfg.council_url.clone(),
            seats: cfg.seats,
            thresholds: Thresholds::for_election(cfg, latest.year),
            latest,
            previous,
            applications,
            today,
        })
    }
}

/// Load every configured year that has been transformed. Years without a
/// `<year>.json` are skipped with a warning.
pub fn load_input(cfg: &Settings, today: NaiveDate) -> Result<ReportInput> {
    let mut years = Vec::with_capacity(cfg.years.len());
    for &year in &cfg.years {
        match store::load_lists(cfg, year) {
            Ok(data) => years.push(YearData { year, data }),
            Err(Error::MissingInput(path)) => {
                logw!("Skipping {year}: {} not found", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    let latest = years.iter().map(|y| y.year).max().ok_or(Error::NoData)?;
    let applications = store::load_applications(cfg, latest)?;
    ReportInput::new(cfg, years, applications, today)
}

/// Render the report to `output` (or the configured path) and return where it went.
pub fn write_report(cfg: &Settings, output: Option<&Path>) -> Result<PathBuf> {
    let today = Local::now().date_naive();
    let input = load_input(cfg, today)?;
    logf!(
        "Rendering report: latest {}, {} earlier year(s), {} disclosure records",
        input.latest.year,
        input.previous.len(),
        input.applications.values().filter(|a| a.is_some()).count()
    );

    let html = render(&input);
    let path = output.map(Path::to_path_buf).unwrap_or_else(|| cfg.report_path.clone());
    write_text(&path, &html)?;
    logf!("Report written to {}", path.display());
    Ok(path)
}
