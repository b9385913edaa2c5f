// src/transform.rs

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::file::read_text;
use crate::model::ListsDocument;
use crate::specs::lists::{parse_lists, ListFormat};
use crate::store;

#[derive(Debug)]
pub struct TransformSummary {
    pub year: u32,
    pub lists: usize,
    pub members: usize,
    pub path: PathBuf,
}

/// `<lists_dir>/<year>.txt` → `<out_dir>/<year>.json`.
/// `format` overrides the per-year default.
pub fn transform_year(
    cfg: &Settings,
    year: u32,
    format: Option<ListFormat>,
) -> Result<TransformSummary> {
    let format = format.unwrap_or_else(|| ListFormat::for_year(year));
    let src = cfg.list_file(year);
    logf!("Transforming {} as {:?}", src.display(), format);

    let text = read_text(&src)?;
    let doc = ListsDocument::from_lists(parse_lists(&text, format));
    let path = store::save_lists(cfg, year, &doc)?;

    let summary = TransformSummary {
        year,
        lists: doc.lists.len(),
        members: doc.member_count(),
        path,
    };
    logf!(
        "{}: {} lists, {} members → {}",
        year, summary.lists, summary.members, summary.path.display()
    );
    Ok(summary)
}
