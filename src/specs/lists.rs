// src/specs/lists.rs
//
// Candidate list text files. One line per list header or member:
//
// Plain (2011, 2015):          Numbered (2019, 2023):
//   Lietuvos žaliųjų partija     Nr. 3. Lietuvos žaliųjų partija
//   1. Vardenis Pavardenis       1. Vardenis Pavardenis
//   2. Vardė Pavardė             2. Vardė Pavardė

use std::str::FromStr;

use crate::core::sanitize::normalize_ws;
use crate::model::{CandidateList, ListMember};

const NUMBERED_SINCE: u32 = 2019;
const HEADER_PREFIX: &str = "Nr.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    /// Any line without a `.` names a list.
    Plain,
    /// Lists are introduced by `Nr. <number> <name>`.
    Numbered,
}

impl ListFormat {
    pub fn for_year(year: u32) -> Self {
        if year < NUMBERED_SINCE { ListFormat::Plain } else { ListFormat::Numbered }
    }
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(ListFormat::Plain),
            "numbered" => Ok(ListFormat::Numbered),
            other => Err(format!("Unknown list format: {other}")),
        }
    }
}

enum Line<'a> {
    Blank,
    Header { name: String, number: Option<u32> },
    Member(&'a str, &'a str),
    Junk,
}

fn classify(line: &str, format: ListFormat) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    match format {
        ListFormat::Plain if !trimmed.contains('.') => Line::Header {
            name: normalize_ws(trimmed).to_uppercase(),
            number: None,
        },
        ListFormat::Numbered if trimmed.starts_with(HEADER_PREFIX) => {
            let mut tokens = trimmed.split(' ').skip(1);
            let number = tokens
                .next()
                .and_then(|t| t.replace('.', "").trim().parse::<u32>().ok());
            let name = normalize_ws(&tokens.collect::<Vec<_>>().join(" ")).to_uppercase();
            Line::Header { name, number }
        }
        _ => match trimmed.split_once('.') {
            Some((pos, name)) => Line::Member(pos.trim(), name),
            None => Line::Junk,
        },
    }
}

/// Parse one year's list file into lists, in file order.
pub fn parse_lists(text: &str, format: ListFormat) -> Vec<CandidateList> {
    let mut lists: Vec<CandidateList> = Vec::new();
    let mut current: Option<CandidateList> = None;

    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        match classify(line, format) {
            Line::Blank => {}
            Line::Header { name, number } => {
                match current.take() {
                    Some(open) if open.name == name => {
                        current = Some(open);
                    }
                    Some(open) => {
                        lists.push(open);
                        current = Some(CandidateList::new(name, number));
                    }
                    None => current = Some(CandidateList::new(name, number)),
                }
            }
            Line::Member(pos, name) => {
                let Some(list) = current.as_mut() else {
                    logw!("Line {lineno}: member before any list header, dropped: {}", line.trim());
                    continue;
                };
                let position = match pos.parse::<u32>() {
                    Ok(p) if p > 0 => p,
                    _ => {
                        logw!("Line {lineno}: bad position `{pos}`, skipped");
                        continue;
                    }
                };
                list.members.push(ListMember {
                    name: normalize_ws(name).to_uppercase(),
                    position,
                });
            }
            Line::Junk => logw!("Line {lineno}: not a header or member, skipped: {}", line.trim()),
        }
    }

    if let Some(open) = current {
        lists.push(open);
    }
    lists
}
