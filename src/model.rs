// src/model.rs
//
// Shared shapes for every stage: parsed lists (`<year>.json`) and the
// disclosure map (`members-applications-<year>.json`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMember {
    pub name: String,
    /// 1-based ballot position within the list.
    pub position: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateList {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub members: Vec<ListMember>,
}

impl CandidateList {
    pub fn new(name: String, number: Option<u32>) -> Self {
        Self { name, number, members: Vec::new() }
    }

    pub fn find_member(&self, name: &str) -> Option<&ListMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListsDocument {
    pub lists: Vec<CandidateList>,
    pub list_names: Vec<String>,
}

impl ListsDocument {
    pub fn from_lists(lists: Vec<CandidateList>) -> Self {
        let mut list_names: Vec<String> = lists.iter().map(|l| l.name.clone()).collect();
        list_names.sort();
        Self { lists, list_names }
    }

    pub fn member_count(&self) -> usize {
        self.lists.iter().map(|l| l.members.len()).sum()
    }
}

/// One candidate's disclosure record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberApplication {
    pub birthday: String,
    pub occupation: String,
    pub party_membership: String,
    pub is_penalty_pending: bool,
    pub different_citizenship: String,
    pub was_convicted_guilty: String,
    pub was_convicted_guilty_details: String,
    pub income_sum_eur: f64,
    pub taxes_sum_eur: f64,
    pub property_sum_eur: f64,
    pub values_sum_eur: f64,
    pub money_sum_eur: f64,
    pub loans_provided_eur: f64,
    pub loans_received_eur: f64,
}

impl MemberApplication {
    /// Income + property + valuables + cash. Loans are not counted.
    pub fn wealth_eur(&self) -> f64 {
        self.income_sum_eur + self.property_sum_eur + self.values_sum_eur + self.money_sum_eur
    }
}

/// Join key → record; `None` marks a member whose record could not be obtained.
pub type MemberApplications = BTreeMap<String, Option<MemberApplication>>;

/// `"{list}-{member}-{position}"`
pub fn member_key(list_name: &str, member_name: &str, position: u32) -> String {
    format!("{list_name}-{member_name}-{position}")
}

/// Split a full name into (first names, last name). The last token is the last name.
pub fn split_name(full: &str) -> (String, String) {
    let mut parts: Vec<&str> = full.split_whitespace().collect();
    let last = parts.pop().unwrap_or_default();
    (parts.join(" "), s!(last))
}
