// src/config/file.rs
//
// `key=value` settings file. Blank lines and `#` comments are skipped,
// unknown keys are ignored so older files keep working.

use std::{fs, path::{Path, PathBuf}};

use crate::error::{Error, Result};
use super::options::Settings;

/// Load settings from `path`. A missing file yields the defaults.
/// Runs before the logger knows its file, so it only logs at debug level.
pub fn load(path: &Path) -> Result<Settings> {
    let mut cfg = Settings::default();
    if !path.exists() {
        logd!("No config at {}, using defaults", path.display());
        return Ok(cfg);
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    apply(&mut cfg, &text, path)?;
    Ok(cfg)
}

/// Apply `key=value` lines from `text` on top of `cfg`.
pub fn apply(cfg: &mut Settings, text: &str, path: &Path) -> Result<()> {
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let Some((key, val)) = line.split_once('=') else {
            return Err(Error::Config {
                path: path.to_path_buf(),
                line: i + 1,
                msg: format!("expected key=value, got `{line}`"),
            });
        };
        let (key, val) = (key.trim(), val.trim());

        let bad = |msg: String| Error::Config { path: path.to_path_buf(), line: i + 1, msg };

        match key {
            "lists_dir" => cfg.lists_dir = PathBuf::from(val),
            "out_dir" => cfg.out_dir = PathBuf::from(val),
            "report_path" => cfg.report_path = PathBuf::from(val),
            "log_file" => cfg.log_file = PathBuf::from(val),
            "verbose" => cfg.verbose = parse_bool(val),
            "years" => cfg.set_years(parse_years(val).map_err(bad)?),
            "election_id" => cfg.election_id = parse_num(key, val).map_err(bad)?,
            "endpoint" => cfg.endpoint = s!(val),
            "request_pause_ms" => cfg.request_pause_ms = parse_num(key, val).map_err(bad)?,
            "timeout_secs" => cfg.timeout_secs = parse_num(key, val).map_err(bad)?,
            "seats" => cfg.seats = parse_num(key, val).map_err(bad)?,
            "title" => cfg.title = s!(val),
            "council_url" => cfg.council_url = s!(val),
            "minimal_wage" => cfg.minimal_wage = parse_wages(val).map_err(bad)?,
            "average_wage" => cfg.average_wage = parse_wages(val).map_err(bad)?,
            other => logd!("Ignoring unknown config key `{other}`"),
        }
    }
    Ok(())
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}

fn parse_num<T: std::str::FromStr>(key: &str, val: &str) -> std::result::Result<T, String> {
    val.parse::<T>().map_err(|_| format!("`{key}` is not a number: `{val}`"))
}

/// `2015, 2019,2023`
pub fn parse_years(val: &str) -> std::result::Result<Vec<u32>, String> {
    let mut out = Vec::new();
    for part in val.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        out.push(part.parse::<u32>().map_err(|_| format!("bad year `{part}`"))?);
    }
    if out.is_empty() {
        return Err(s!("`years` is empty"));
    }
    Ok(out)
}

/// `2021:642, 2022:730`
pub fn parse_wages(val: &str) -> std::result::Result<Vec<(u32, f64)>, String> {
    let mut out = Vec::new();
    for part in val.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let (year, amount) = part
            .split_once(':')
            .ok_or_else(|| format!("expected year:amount, got `{part}`"))?;
        let year = year.trim().parse::<u32>().map_err(|_| format!("bad year `{year}`"))?;
        let amount = amount.trim().parse::<f64>().map_err(|_| format!("bad amount `{amount}`"))?;
        out.push((year, amount));
    }
    Ok(out)
}
