// src/config/consts.rs

// Net config
pub const ENDPOINT: &str = "https://www.rinkejopuslapis.lt/ataskaitos87";
pub const ELECTION_ID: u32 = 1630;
pub const USER_AGENT: &str = concat!("council_lists/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// The endpoint throttles; requests go out one at a time
pub const REQUEST_PAUSE_MS: u64 = 250;

// Files
pub const DEFAULT_CONFIG_FILE: &str = "council_lists.conf";
pub const DEFAULT_LISTS_DIR: &str = "lists";
pub const DEFAULT_OUT_DIR: &str = "transformed-data";
pub const DEFAULT_REPORT_FILE: &str = "report.html";
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";
pub const APPLICATIONS_PREFIX: &str = "members-applications-";

// Report
pub const YEARS: [u32; 4] = [2011, 2015, 2019, 2023];
pub const AVAILABLE_SEATS: usize = 41;
pub const REPORT_TITLE: &str = "Kauno miesto savivaldybės tarybos kandidatų sąrašų palyginimas";
pub const COUNCIL_URL: &str = "https://lt.wikipedia.org/wiki/Kauno_miesto_savivaldyb%C4%97s_taryba";
pub const MILLIONAIRE_EUR: f64 = 1_000_000.0;

// Disclosures cover the year two years before the election
pub const DECLARATION_LAG_YEARS: u32 = 2;

// Gross monthly wages, EUR
pub const MINIMAL_MONTHLY_WAGE: &[(u32, f64)] = &[(2021, 642.0), (2022, 730.0), (2023, 840.0)];
pub const AVERAGE_MONTHLY_WAGE: &[(u32, f64)] = &[(2021, 1352.7), (2022, 1504.1), (2023, 1684.9)];
