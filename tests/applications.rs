// tests/applications.rs
//
// Disclosure report CSV → one candidate's record.

use council_lists::core::net::application_url;
use council_lists::core::sanitize::{decode_entities, normalize_amount};
use council_lists::specs::application::{parse_application, Lookup};

const HEADER: &str = "Nr,Vardas,Pavardė,Gimimo data,...";

/// A 39-column report row with every field quoted.
fn row(list: &str, set: &[(usize, &str)]) -> String {
    let mut fields = vec![String::new(); 39];
    fields[3] = "1960-05-01".into();
    fields[8] = list.into();
    for (i, v) in set {
        fields[*i] = (*v).into();
    }
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

fn csv(rows: &[String]) -> String {
    let mut out = format!("{HEADER}\n");
    for r in rows {
        out.push_str(r);
        out.push('\n');
    }
    out
}

#[test]
fn maps_columns_and_amounts() {
    let text = csv(&[row(
        "Darbo partija",
        &[
            (14, "Meras"),
            (15, "Darbo partija"),
            (20, "Rusija"),
            (23, "Taip"),
            (24, "2001 m. nuosprendis"),
            (28, "12 345,67"),
            (33, "1 000,5"),
            (34, "200000"),
            (36, "5000"),
            (38, "1,5"),
        ],
    )]);

    let Lookup::Found(app) = parse_application(&text, "DARBO PARTIJA") else {
        panic!("expected a record");
    };
    assert_eq!(app.birthday, "1960-05-01");
    assert_eq!(app.occupation, "Meras");
    assert_eq!(app.party_membership, "Darbo partija");
    assert!(!app.is_penalty_pending);
    assert_eq!(app.different_citizenship, "Rusija, -");
    assert_eq!(app.was_convicted_guilty, "Taip");
    assert_eq!(app.was_convicted_guilty_details, "2001 m. nuosprendis");
    assert_eq!(app.income_sum_eur, 12345.67);
    assert_eq!(app.taxes_sum_eur, 1000.5);
    assert_eq!(app.property_sum_eur, 200000.0);
    assert_eq!(app.values_sum_eur, 0.0);
    assert_eq!(app.money_sum_eur, 5000.0);
    assert_eq!(app.loans_provided_eur, 0.0);
    assert_eq!(app.loans_received_eur, 1.5);
}

#[test]
fn citizenship_details_and_penalty_flag() {
    let text = csv(&[row("A", &[(16, "Taip"), (20, "Lenkija"), (21, "nuo 1995")])]);
    let Lookup::Found(app) = parse_application(&text, "a") else {
        panic!("expected a record");
    };
    assert!(app.is_penalty_pending);
    assert_eq!(app.different_citizenship, "Lenkija, nuo 1995");
}

#[test]
fn picks_the_row_for_the_list() {
    let text = csv(&[row("Kita partija", &[(14, "Mokytojas")]), row("Darbo partija", &[(14, "Meras")])]);
    match parse_application(&text, "Darbo partija") {
        Lookup::Found(app) => assert_eq!(app.occupation, "Meras"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn lookup_outcomes() {
    assert_eq!(parse_application("", "A"), Lookup::NoData);
    assert_eq!(parse_application(&format!("{HEADER}\n\n\n"), "A"), Lookup::NoData);
    assert_eq!(parse_application(&csv(&[row("B", &[])]), "A"), Lookup::NotInList);
    assert_eq!(parse_application(&csv(&[row("A", &[]), row("a", &[])]), "A"), Lookup::Ambiguous(2));
}

#[test]
fn short_rows_read_missing_columns_as_empty() {
    let text = format!("{HEADER}\n1,Jonas,Jonaitis,1970-01-01,,,,,Sąrašas\n");
    let Lookup::Found(app) = parse_application(&text, "SĄRAŠAS") else {
        panic!("expected a record");
    };
    assert_eq!(app.birthday, "1970-01-01");
    assert_eq!(app.occupation, "");
    assert_eq!(app.income_sum_eur, 0.0);
}

#[test]
fn amount_normalization() {
    assert_eq!(normalize_amount(""), 0.0);
    assert_eq!(normalize_amount("  "), 0.0);
    assert_eq!(normalize_amount("1 234,5"), 1234.5);
    assert_eq!(normalize_amount("1\u{a0}234"), 1234.0);
    assert_eq!(normalize_amount("n/a"), 0.0);
}

#[test]
fn entity_decoding() {
    assert_eq!(decode_entities("VšĮ &quot;Sveikata&quot;"), "VšĮ \"Sveikata\"");
    assert_eq!(decode_entities("A &amp; B &#34;C&#x22;"), "A & B \"C\"");
    assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
    assert_eq!(decode_entities("&unknown; ąčę"), "&unknown; ąčę");
}

#[test]
fn report_download_url() {
    let url = application_url("https://rinkimai.test/ataskaitos87", 1630, "ONA MARIJA", "ŠALTĖ").unwrap();
    assert_eq!(url.host_str(), Some("rinkimai.test"));
    assert_eq!(url.path(), "/ataskaitos87");

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let get = |suffix: &str| {
        pairs
            .iter()
            .find(|(k, _)| k.ends_with(suffix))
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(get("r42surname"), "ŠALTĖ");
    assert_eq!(get("r42name"), "ONA MARIJA");
    assert_eq!(get("r42electionId"), "1630");
    assert_eq!(get("type"), "CSV");
    assert!(!url.as_str().contains(' '));

    assert!(application_url("not a url", 1630, "A", "B").is_err());
}
