// src/report/render.rs
//
// Static HTML for the comparison report. Pure: everything comes in through
// `ReportInput`, including "today", so output is reproducible.

use std::fmt::Write;

use crate::core::format::{currency, fixed2, yes_no};
use crate::core::html::{escape, hint, span_status, td_flag, text_el};
use crate::core::sanitize::decode_entities;
use crate::model::{member_key, split_name, CandidateList, ListMember, MemberApplication};

use super::summary::{age_at, describe_past_run, find_past_run, is_millionaire, ListSummary, Thresholds};
use super::ReportInput;

const STYLE: &str = "
table { width: 100%; border-collapse: collapse; }
tr:nth-of-type(odd) { background: #eee; }
th { background: #333; color: white; font-weight: bold; }
td, th { padding: 6px; border: 1px solid #ccc; text-align: left; }
";

const WEALTH_NOTE: &str = "pajamos + turtas + vertybiniai popieriai, meno kūriniai, \
    juvelyriniai dirbiniai + piniginės lėšos, neskaičiuojant paskolų";

const Q_PENALTY: &str = "Anketos punktas: Ar neturite nebaigtos atlikti teismo nuosprendžiu paskirtos bausmės?";
const Q_CONVICTED: &str = "Anketos punktas: Ar po 1990-03-11 buvote pripažintas kaltu dėl nusikalstamos \
    veikos arba bet kada buvote pripažintas kaltu dėl sunkaus ar labai sunkaus nusikaltimo padarymo, \
    nepaisant to, ar teistumas išnykęs ar panaikintas (Įstatymo 36 straipsnio 12 dalis)?";
const Q_CONVICTED_DETAILS: &str = "Anketos punktas: Nuosprendis (sprendimas)";
const Q_INCOME: &str = "Anketos punktas: PD pajamų suma (eurais); PD - pajamų deklaracija";
const Q_TAXES: &str = "Anketos punktas: PD mokesčių suma (eurais); PD - pajamų deklaracija";
const Q_PROPERTY: &str = "Anketos punktas: TD turto suma (eurais); TD - turto deklaracija";
const Q_VALUES: &str = "Anketos punktas: TD vertybių suma (eurais); TD - turto deklaracija";
const Q_MONEY: &str = "Anketos punktas: TD piniginės lėšos (eurais); TD - turto deklaracija";
const Q_LOANS_PROVIDED: &str = "Anketos punktas: TD suteiktos paskolos (eurais); TD - turto deklaracija";
const Q_LOANS_RECEIVED: &str = "Anketos punktas: TD gautos paskolos (eurais); TD - turto deklaracija";

pub fn render(input: &ReportInput) -> String {
    let mut out = String::with_capacity(64 * 1024);
    let title = escape(&input.title);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>");
    let _ = writeln!(out, "<h1>{title}</h1>");

    out.push_str("<ul>\n<li>");
    text_el(&mut out, "strong", "Tarybos vietų skaičius:");
    let _ = write!(
        out,
        " <span>{}&nbsp;<a href=\"{}\" target=\"_blank\">(Wikipedia)</a></span>",
        input.seats,
        escape(&input.council_url)
    );
    out.push_str("</li>\n</ul>\n");

    for list in &input.latest.data.lists {
        render_list(&mut out, input, list);
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn summary_item(out: &mut String, label: &str, value: &str) {
    out.push_str("<li>");
    text_el(out, "strong", label);
    let _ = write!(out, " <span>{}</span>", escape(value));
    out.push_str("</li>\n");
}

fn summary_flag(out: &mut String, label: &str, count: usize) {
    out.push_str("<li>");
    text_el(out, "strong", label);
    out.push(' ');
    span_status(out, &count.to_string(), count > 0);
    out.push_str("</li>\n");
}

fn avg_currency(s: &ListSummary, sum: f64) -> String {
    s.average(sum).map(currency).unwrap_or_else(|| s!("-"))
}

fn render_list(out: &mut String, input: &ReportInput, list: &CandidateList) {
    let s = ListSummary::build(list, &input.applications, &input.thresholds, input.today);

    let _ = writeln!(
        out,
        "<details>\n<summary>{} ({} narys/nariai)</summary>\n<div>\n<ul>",
        escape(&list.name),
        list.members.len()
    );

    out.push_str("<li>");
    text_el(out, "strong", "Ar pasiruošę užpildyti visą tarybą?");
    out.push(' ');
    let fills = s.fills_council(input.seats);
    span_status(out, yes_no(fills), !fills);
    out.push_str("</li>\n");

    let age_avg = s.average(s.age_sum as f64).map(fixed2).unwrap_or_else(|| s!("-"));
    summary_item(out, "Amžiaus vidurkis", &age_avg);
    summary_item(out, "Turinčių kitą pilietybę skaičius", &s.other_citizenship.to_string());
    summary_flag(out, "Skaičius su galiojančiu baustumu", s.penalty_pending);
    summary_flag(out, "Baustų skaičius", s.convicted);
    summary_item(out, "Pajamų vidurkis", &avg_currency(&s, s.income_sum));
    summary_flag(
        out,
        "Skaičius turinčių mažesnes nei minimali alga per metus pajamas",
        s.below_minimal_wage,
    );
    summary_flag(
        out,
        "Skaičius turinčių mažesnes nei vidutinė alga per metus pajamas",
        s.below_average_wage,
    );
    summary_item(out, "Sumokėtų mokesčių vidurkis", &avg_currency(&s, s.taxes_sum));
    summary_item(
        out,
        "Vertybinių popierių, meno kūrinių, juvelyrinių dirbinių vidurkis",
        &avg_currency(&s, s.values_sum),
    );
    summary_item(out, "Turto vidurkis", &avg_currency(&s, s.property_sum));
    summary_item(out, "Gautų paskolų vidurkis", &avg_currency(&s, s.loans_received_sum));
    summary_item(out, "Suteiktų paskolų vidurkis", &avg_currency(&s, s.loans_provided_sum));
    summary_flag(out, "Neturinčių pajamų skaičius", s.no_income);
    summary_flag(out, "Neturinčių piniginių lėšų skaičius", s.no_money);
    summary_flag(out, "Neturinčių turto skaičius", s.no_property);
    summary_item(
        out,
        &format!("Milijonierių skaičius ({WEALTH_NOTE})"),
        &s.millionaires.to_string(),
    );
    out.push_str("</ul>\n");

    out.push_str("<table>\n<thead>\n<tr>");
    for h in [
        "Vardas",
        "Pavardė",
        "Pozicija",
        "Patirtis (kandidatavo su sąrašu, pokytis nuo esamos pozicijos)",
        "Gimimo data (amžius)",
        "Esamos pareigos",
        "Priklauso partijai/organizacijai",
        "Kita pilietybė",
        "Kriminalinė situacija",
        "Finansinė situacija",
    ] {
        text_el(out, "th", h);
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for member in &list.members {
        render_member(out, input, list, member);
    }
    out.push_str("</tbody>\n</table>\n</div>\n</details>\n");
}

fn render_member(out: &mut String, input: &ReportInput, list: &CandidateList, member: &ListMember) {
    let (first_names, last_name) = split_name(&member.name);
    let key = member_key(&list.name, &member.name, member.position);
    let app = input.applications.get(&key).and_then(Option::as_ref);

    out.push_str("<tr>");
    text_el(out, "td", &first_names);
    text_el(out, "td", &last_name);
    text_el(out, "td", &member.position.to_string());

    // Experience in earlier elections
    out.push_str("<td><table><thead><tr>");
    for set in &input.previous {
        text_el(out, "th", &set.year.to_string());
    }
    out.push_str("</tr></thead><tbody><tr>");
    for set in &input.previous {
        let past = find_past_run(&set.data, &member.name);
        text_el(out, "td", &describe_past_run(past.as_ref(), member.position));
    }
    out.push_str("</tr></tbody></table></td>");

    let birthday = app.map(|a| a.birthday.as_str()).filter(|b| !b.is_empty()).unwrap_or("-");
    let age = app
        .and_then(|a| age_at(&a.birthday, input.today))
        .map(|a| a.to_string())
        .unwrap_or_else(|| s!("-"));
    text_el(out, "td", &format!("{birthday} ({age})"));

    text_el(out, "td", app.map(|a| a.occupation.as_str()).unwrap_or(""));
    text_el(out, "td", &app.map(|a| decode_entities(&a.party_membership)).unwrap_or_default());
    text_el(out, "td", app.map(|a| a.different_citizenship.as_str()).unwrap_or(""));

    out.push_str("<td>");
    render_criminal(out, app);
    out.push_str("</td><td>");
    render_financial(out, app, &input.thresholds);
    out.push_str("</td></tr>\n");
}

fn th_hint(out: &mut String, label: &str, question: &str) {
    let _ = write!(out, "<th>{}", escape(label));
    hint(out, question);
    out.push_str("</th>");
}

fn render_criminal(out: &mut String, app: Option<&MemberApplication>) {
    out.push_str("<table><thead><tr>");
    th_hint(out, "Yra galiojanti bausmė", Q_PENALTY);
    th_hint(out, "Buvo/yra teismo baustas", Q_CONVICTED);
    th_hint(out, "Baustumo detalės", Q_CONVICTED_DETAILS);
    out.push_str("</tr></thead><tbody><tr>");
    match app {
        Some(a) => {
            text_el(out, "td", yes_no(a.is_penalty_pending));
            text_el(out, "td", &a.was_convicted_guilty);
            text_el(out, "td", &a.was_convicted_guilty_details);
        }
        None => {
            for _ in 0..3 {
                text_el(out, "td", "-");
            }
        }
    }
    out.push_str("</tr></tbody></table>");
}

fn render_financial(out: &mut String, app: Option<&MemberApplication>, thresholds: &Thresholds) {
    out.push_str("<table><thead><tr>");
    th_hint(out, "Gavo pajamų už EUR", Q_INCOME);
    text_el(out, "th", "Pajamos mažesnės už minimalų mėnesinį darbo užmokestį per metus");
    text_el(out, "th", "Pajamos mažesnės už vidutinį mėnesinį darbo užmokestį per metus");
    th_hint(out, "Sumokėjo mokesčių EUR", Q_TAXES);
    th_hint(out, "Turi turto už EUR", Q_PROPERTY);
    th_hint(out, "Turi vertybinių popierių, meno kūrinių, juvelyrinių dirbinių už EUR", Q_VALUES);
    th_hint(out, "Turi piniginių lėšų už EUR", Q_MONEY);
    th_hint(out, "Suteikė paskolų už EUR", Q_LOANS_PROVIDED);
    th_hint(out, "Skolinosi už EUR", Q_LOANS_RECEIVED);
    th_hint(out, "Yra milijonierius/milijonierė (suma EUR)", WEALTH_NOTE);
    out.push_str("</tr></thead><tbody><tr>");

    let Some(a) = app else {
        for _ in 0..10 {
            text_el(out, "td", "-");
        }
        out.push_str("</tr></tbody></table>");
        return;
    };

    let below_min = thresholds.below_minimal(a);
    let below_avg = thresholds.below_average(a);
    let known = |t: Option<f64>, v: bool| if t.is_some() { yes_no(v) } else { "-" };

    td_flag(out, &currency(a.income_sum_eur), a.income_sum_eur == 0.0);
    td_flag(out, known(thresholds.minimal_yearly, below_min), below_min);
    td_flag(out, known(thresholds.average_yearly, below_avg), below_avg);
    td_flag(out, &currency(a.taxes_sum_eur), a.taxes_sum_eur == 0.0);
    td_flag(out, &currency(a.property_sum_eur), a.property_sum_eur == 0.0);
    text_el(out, "td", &currency(a.values_sum_eur));
    td_flag(out, &currency(a.money_sum_eur), thresholds.low_cash(a));
    text_el(out, "td", &currency(a.loans_provided_eur));
    text_el(out, "td", &currency(a.loans_received_eur));

    let millionaire = is_millionaire(a);
    let wealth = format!("{} ({})", yes_no(millionaire), currency(a.wealth_eur()));
    text_el(out, "td", &wealth);
    out.push_str("</tr></tbody></table>");
}
