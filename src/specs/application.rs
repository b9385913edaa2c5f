// src/specs/application.rs
//
// Disclosure report CSV, one row per candidate matching the name query.
// A query by name can return namesakes from other lists, so rows are
// narrowed by the list column.

use crate::core::sanitize::normalize_amount;
use crate::model::MemberApplication;

// Column indexes in the report CSV
const COL_BIRTHDAY: usize = 3;
const COL_LIST: usize = 8;
const COL_OCCUPATION: usize = 14;
const COL_PARTY: usize = 15;
const COL_PENALTY_PENDING: usize = 16;
const COL_CITIZENSHIP: usize = 20;
const COL_CITIZENSHIP_DETAILS: usize = 21;
const COL_CONVICTED: usize = 23;
const COL_CONVICTED_DETAILS: usize = 24;
const COL_INCOME: usize = 28;
const COL_TAXES: usize = 33;
const COL_PROPERTY: usize = 34;
const COL_VALUES: usize = 35;
const COL_MONEY: usize = 36;
const COL_LOANS_PROVIDED: usize = 37;
const COL_LOANS_RECEIVED: usize = 38;

#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Found(MemberApplication),
    /// Response had no data rows.
    NoData,
    /// Rows came back, none for this list.
    NotInList,
    /// More than one row for this list; needs a human.
    Ambiguous(usize),
}

/// Pick the record for `list_name` out of a report CSV response.
pub fn parse_application(csv_text: &str, list_name: &str) -> Lookup {
    let lines: Vec<&str> = csv_text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Lookup::NoData;
    }

    let wanted = list_name.to_uppercase();
    let mut matches: Vec<Vec<String>> = Vec::new();
    for raw in &lines[1..] {
        let Some(fields) = parse_record(raw) else {
            logd!("Unparsable report row: {raw}");
            continue;
        };
        let list = fields.get(COL_LIST).map(|s| s.to_uppercase()).unwrap_or_default();
        if list == wanted {
            matches.push(fields);
        }
    }

    match matches.len() {
        0 => Lookup::NotInList,
        1 => Lookup::Found(to_application(&matches[0])),
        n => Lookup::Ambiguous(n),
    }
}

/// Each physical line is read as its own record.
fn parse_record(line: &str) -> Option<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = reader.records().next()?.ok()?;
    Some(record.iter().map(str::to_string).collect())
}

fn to_application(fields: &[String]) -> MemberApplication {
    let col = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
    let amount = |i: usize| normalize_amount(col(i));

    let citizenship = col(COL_CITIZENSHIP);
    let different_citizenship = if citizenship.is_empty() {
        s!()
    } else {
        let details = col(COL_CITIZENSHIP_DETAILS);
        format!("{citizenship}, {}", if details.is_empty() { "-" } else { details })
    };

    MemberApplication {
        birthday: s!(col(COL_BIRTHDAY)),
        occupation: s!(col(COL_OCCUPATION)),
        party_membership: s!(col(COL_PARTY)),
        is_penalty_pending: !col(COL_PENALTY_PENDING).is_empty(),
        different_citizenship,
        was_convicted_guilty: s!(col(COL_CONVICTED)),
        was_convicted_guilty_details: s!(col(COL_CONVICTED_DETAILS)),
        income_sum_eur: amount(COL_INCOME),
        taxes_sum_eur: amount(COL_TAXES),
        property_sum_eur: amount(COL_PROPERTY),
        values_sum_eur: amount(COL_VALUES),
        money_sum_eur: amount(COL_MONEY),
        loans_provided_eur: amount(COL_LOANS_PROVIDED),
        loans_received_eur: amount(COL_LOANS_RECEIVED),
    }
}
