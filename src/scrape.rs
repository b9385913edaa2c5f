// src/scrape.rs
//
// Sequential fetch-and-join of disclosure records. The endpoint rate-limits,
// so there is exactly one request in flight and a pause after each.

use std::{path::PathBuf, thread, time::Duration};

use reqwest::blocking::Client;

use crate::{
    config::Settings,
    core::net,
    error::Result,
    model::{member_key, split_name, ListsDocument, MemberApplications},
    progress::Progress,
    specs::application::{parse_application, Lookup},
    store,
};

/// Where disclosure CSV comes from. The live endpoint in production,
/// canned responses in tests.
pub trait ApplicationSource {
    fn fetch_csv(&mut self, first_names: &str, last_name: &str) -> Result<String>;
}

/// The real report endpoint.
pub struct ReportEndpoint {
    client: Client,
    endpoint: String,
    election_id: u32,
}

impl ReportEndpoint {
    pub fn new(cfg: &Settings) -> Result<Self> {
        Ok(Self {
            client: net::client(cfg.timeout_secs)?,
            endpoint: cfg.endpoint.clone(),
            election_id: cfg.election_id,
        })
    }
}

impl ApplicationSource for ReportEndpoint {
    fn fetch_csv(&mut self, first_names: &str, last_name: &str) -> Result<String> {
        let url = net::application_url(&self.endpoint, self.election_id, first_names, last_name)?;
        logd!("GET {url}");
        net::http_get(&self.client, &url)
    }
}

#[derive(Debug)]
pub struct FetchSummary {
    pub year: u32,
    pub found: usize,
    pub missing: usize,
    pub path: PathBuf,
}

/// Walk every member in list order and look up their record.
/// Failures are logged and stored as `None`; nothing here aborts the run.
pub fn collect_applications(
    doc: &ListsDocument,
    source: &mut dyn ApplicationSource,
    pause: Duration,
    progress: &mut dyn Progress,
) -> MemberApplications {
    let mut out = MemberApplications::new();
    progress.begin(doc.member_count());

    let mut first = true;
    for list in &doc.lists {
        for member in &list.members {
            if !first && !pause.is_zero() {
                thread::sleep(pause);
            }
            first = false;

            let key = member_key(&list.name, &member.name, member.position);
            let (first_names, last_name) = split_name(&member.name);
            let who = format!("{first_names} {last_name}");

            let record = match source.fetch_csv(&first_names, &last_name) {
                Ok(csv) => match parse_application(&csv, &list.name) {
                    Lookup::Found(app) => Some(app),
                    Lookup::NoData => {
                        logf!("No report rows for \"{who}\", skipped");
                        None
                    }
                    Lookup::NotInList => {
                        loge!("No application for \"{who}\" in the \"{}\" list, needs manual attention", list.name);
                        None
                    }
                    Lookup::Ambiguous(n) => {
                        loge!("{n} members named \"{who}\" in the \"{}\" list, needs manual attention", list.name);
                        None
                    }
                },
                Err(e) => {
                    loge!("Failed to get application for \"{who}\": {e}");
                    None
                }
            };

            if record.is_some() { progress.item_done(&key) } else { progress.item_failed(&key) }

            if out.insert(key.clone(), record).is_some() {
                logw!("Duplicate member key `{key}`, later record kept");
            }
        }
    }

    progress.finish();
    out
}

/// Load `<year>.json`, fetch every member's record, write the disclosure map.
pub fn fetch_year(
    cfg: &Settings,
    year: u32,
    source: &mut dyn ApplicationSource,
    progress: &mut dyn Progress,
) -> Result<FetchSummary> {
    let doc = store::load_lists(cfg, year)?;
    logf!("Fetching disclosures for {} members of {}", doc.member_count(), year);

    let pause = Duration::from_millis(cfg.request_pause_ms);
    let apps = collect_applications(&doc, source, pause, progress);

    let found = apps.values().filter(|a| a.is_some()).count();
    let missing = apps.len() - found;
    let path = store::save_applications(cfg, year, &apps)?;
    logf!("{year}: {found} records, {missing} missing → {}", path.display());

    Ok(FetchSummary { year, found, missing, path })
}
