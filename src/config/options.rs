// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Everything a run needs to know; defaults come from `consts`, then the
/// config file, then CLI flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub lists_dir: PathBuf,
    pub out_dir: PathBuf,
    pub report_path: PathBuf,
    pub log_file: PathBuf,
    pub verbose: bool,

    pub years: Vec<u32>,
    pub election_id: u32,
    pub endpoint: String,
    pub request_pause_ms: u64,
    pub timeout_secs: u64,

    pub seats: usize,
    pub title: String,
    pub council_url: String,
    pub minimal_wage: Vec<(u32, f64)>,
    pub average_wage: Vec<(u32, f64)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lists_dir: PathBuf::from(DEFAULT_LISTS_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,

            years: YEARS.to_vec(),
            election_id: ELECTION_ID,
            endpoint: s!(ENDPOINT),
            request_pause_ms: REQUEST_PAUSE_MS,
            timeout_secs: TIMEOUT_SECS,

            seats: AVAILABLE_SEATS,
            title: s!(REPORT_TITLE),
            council_url: s!(COUNCIL_URL),
            minimal_wage: MINIMAL_MONTHLY_WAGE.to_vec(),
            average_wage: AVERAGE_MONTHLY_WAGE.to_vec(),
        }
    }
}

impl Settings {
    /// Raw candidate list for `year`: `<lists_dir>/<year>.txt`
    pub fn list_file(&self, year: u32) -> PathBuf {
        self.lists_dir.join(format!("{year}.txt"))
    }

    /// Parsed lists for `year`: `<out_dir>/<year>.json`
    pub fn lists_json(&self, year: u32) -> PathBuf {
        self.out_dir.join(format!("{year}.json"))
    }

    /// Disclosure map for `year`: `<out_dir>/members-applications-<year>.json`
    pub fn applications_json(&self, year: u32) -> PathBuf {
        self.out_dir.join(join!(APPLICATIONS_PREFIX, &year.to_string(), ".json"))
    }

    /// Most recent configured election year.
    pub fn latest_year(&self) -> Option<u32> {
        self.years.iter().copied().max()
    }

    /// Years are kept sorted and unique so "latest" and "previous" are stable.
    pub fn set_years(&mut self, mut years: Vec<u32>) {
        years.sort_unstable();
        years.dedup();
        self.years = years;
    }
}

/// Look up a per-year value in a `(year, value)` table.
pub fn wage_for(table: &[(u32, f64)], year: u32) -> Option<f64> {
    table.iter().find(|(y, _)| *y == year).map(|(_, v)| *v)
}
