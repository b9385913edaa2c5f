// src/store.rs
//
// JSON artifacts under `out_dir`: `<year>.json` and
// `members-applications-<year>.json`.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::file::{read_text, write_text};
use crate::model::{ListsDocument, MemberApplications};

pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    text.push('\n');
    write_text(path, &text)
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

pub fn save_lists(cfg: &Settings, year: u32, doc: &ListsDocument) -> Result<PathBuf> {
    let path = cfg.lists_json(year);
    save_json(&path, doc)?;
    Ok(path)
}

pub fn load_lists(cfg: &Settings, year: u32) -> Result<ListsDocument> {
    load_json(&cfg.lists_json(year))
}

pub fn save_applications(cfg: &Settings, year: u32, apps: &MemberApplications) -> Result<PathBuf> {
    let path = cfg.applications_json(year);
    save_json(&path, apps)?;
    Ok(path)
}

/// A year without a fetched disclosure map reports with empty records.
pub fn load_applications(cfg: &Settings, year: u32) -> Result<MemberApplications> {
    match load_json(&cfg.applications_json(year)) {
        Err(Error::MissingInput(path)) => {
            logw!("No disclosure data at {}, report will have empty records", path.display());
            Ok(MemberApplications::new())
        }
        other => other,
    }
}
