// src/report/summary.rs
//
// Numbers behind the report: per-list aggregates, ages, wage thresholds and
// where a candidate stood in earlier elections.

use chrono::{Datelike, NaiveDate};

use crate::config::consts::{DECLARATION_LAG_YEARS, MILLIONAIRE_EUR};
use crate::config::options::{wage_for, Settings};
use crate::model::{member_key, CandidateList, ListsDocument, MemberApplication, MemberApplications};

/// Yearly gross wage thresholds for the declaration year of an election.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Thresholds {
    pub minimal_monthly: Option<f64>,
    pub minimal_yearly: Option<f64>,
    pub average_yearly: Option<f64>,
}

impl Thresholds {
    pub fn for_election(cfg: &Settings, election_year: u32) -> Self {
        let year = election_year.saturating_sub(DECLARATION_LAG_YEARS);
        let minimal_monthly = wage_for(&cfg.minimal_wage, year);
        Self {
            minimal_monthly,
            minimal_yearly: minimal_monthly.map(|m| m * 12.0),
            average_yearly: wage_for(&cfg.average_wage, year).map(|m| m * 12.0),
        }
    }

    pub fn below_minimal(&self, app: &MemberApplication) -> bool {
        self.minimal_yearly.is_some_and(|t| app.income_sum_eur < t)
    }

    pub fn below_average(&self, app: &MemberApplication) -> bool {
        self.average_yearly.is_some_and(|t| app.income_sum_eur < t)
    }

    /// Less cash than one month of minimal wage.
    pub fn low_cash(&self, app: &MemberApplication) -> bool {
        self.minimal_monthly.is_some_and(|t| app.money_sum_eur < t)
    }
}

pub fn is_millionaire(app: &MemberApplication) -> bool {
    app.wealth_eur() > MILLIONAIRE_EUR
}

/// `YYYY-MM-DD` birthday → full years at `today`.
pub fn age_at(birthday: &str, today: NaiveDate) -> Option<u32> {
    let born = NaiveDate::parse_from_str(birthday.trim(), "%Y-%m-%d").ok()?;
    if born > today {
        return None;
    }
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListSummary {
    pub members: usize,
    pub with_data: usize,

    pub age_sum: u64,
    pub income_sum: f64,
    pub taxes_sum: f64,
    pub property_sum: f64,
    pub values_sum: f64,
    pub loans_received_sum: f64,
    pub loans_provided_sum: f64,

    pub other_citizenship: usize,
    pub penalty_pending: usize,
    pub convicted: usize,
    pub no_income: usize,
    pub no_money: usize,
    pub no_property: usize,
    pub millionaires: usize,
    pub below_minimal_wage: usize,
    pub below_average_wage: usize,
}

impl ListSummary {
    pub fn build(
        list: &CandidateList,
        apps: &MemberApplications,
        thresholds: &Thresholds,
        today: NaiveDate,
    ) -> Self {
        let mut s = ListSummary { members: list.members.len(), ..Default::default() };

        for member in &list.members {
            let key = member_key(&list.name, &member.name, member.position);
            let Some(Some(app)) = apps.get(&key) else { continue };

            s.with_data += 1;
            s.age_sum += u64::from(age_at(&app.birthday, today).unwrap_or(0));
            s.income_sum += app.income_sum_eur;
            s.taxes_sum += app.taxes_sum_eur;
            s.property_sum += app.property_sum_eur;
            s.values_sum += app.values_sum_eur;
            s.loans_received_sum += app.loans_received_eur;
            s.loans_provided_sum += app.loans_provided_eur;

            if !app.different_citizenship.trim().is_empty() { s.other_citizenship += 1; }
            if app.is_penalty_pending { s.penalty_pending += 1; }
            if !app.was_convicted_guilty.trim().is_empty() { s.convicted += 1; }
            if app.income_sum_eur == 0.0 { s.no_income += 1; }
            if app.money_sum_eur == 0.0 { s.no_money += 1; }
            if app.property_sum_eur == 0.0 { s.no_property += 1; }
            if is_millionaire(app) { s.millionaires += 1; }
            if thresholds.below_minimal(app) { s.below_minimal_wage += 1; }
            if thresholds.below_average(app) { s.below_average_wage += 1; }
        }
        s
    }

    /// `sum / with_data`, or `None` when nobody has data.
    pub fn average(&self, sum: f64) -> Option<f64> {
        (self.with_data > 0).then(|| sum / self.with_data as f64)
    }

    pub fn fills_council(&self, seats: usize) -> bool {
        self.members >= seats
    }
}

/// Where a candidate appeared in an earlier election.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PastRun {
    pub list: String,
    pub position: u32,
}

/// Find `name` among an earlier year's lists. When several lists carry the
/// name, the one appearing last wins.
pub fn find_past_run(doc: &ListsDocument, name: &str) -> Option<PastRun> {
    doc.lists
        .iter()
        .rev()
        .find_map(|l| l.find_member(name).map(|m| PastRun { list: l.name.clone(), position: m.position }))
}

/// `"LIST (+3)"` where the number is past position minus current position.
pub fn describe_past_run(past: Option<&PastRun>, current_position: u32) -> String {
    let Some(past) = past else { return s!("-") };
    let diff = i64::from(past.position) - i64::from(current_position);
    let sign = match diff {
        d if d > 0 => "+",
        0 => "",
        _ => "-",
    };
    format!("{} ({sign}{})", past.list, diff.abs())
}
