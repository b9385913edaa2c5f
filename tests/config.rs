// tests/config.rs
use std::path::{Path, PathBuf};

use council_lists::config::file::{apply, load, parse_wages, parse_years};
use council_lists::config::Settings;
use council_lists::Error;

#[test]
fn missing_file_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = load(&tmp.path().join("nope.conf")).unwrap();
    assert_eq!(cfg, Settings::default());
    assert_eq!(cfg.years, vec![2011, 2015, 2019, 2023]);
    assert_eq!(cfg.latest_year(), Some(2023));
    assert_eq!(cfg.seats, 41);
}

#[test]
fn file_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("council_lists.conf");
    std::fs::write(
        &path,
        "# local overrides\n\
         lists_dir = raw\n\
         out_dir=build/data\n\
         years = 2023, 2019,2019\n\
         request_pause_ms = 0\n\
         seats = 31\n\
         verbose = yes\n\
         minimal_wage = 2021:700\n\
         some_future_key = whatever\n",
    )
    .unwrap();

    let cfg = load(&path).unwrap();
    assert_eq!(cfg.lists_dir, PathBuf::from("raw"));
    assert_eq!(cfg.out_dir, PathBuf::from("build/data"));
    assert_eq!(cfg.years, vec![2019, 2023]);
    assert_eq!(cfg.request_pause_ms, 0);
    assert_eq!(cfg.seats, 31);
    assert!(cfg.verbose);
    assert_eq!(cfg.minimal_wage, vec![(2021, 700.0)]);
    // untouched keys keep their defaults
    assert_eq!(cfg.election_id, Settings::default().election_id);
    assert_eq!(cfg.lists_json(2023), PathBuf::from("build/data").join("2023.json"));
    assert_eq!(
        cfg.applications_json(2023),
        PathBuf::from("build/data").join("members-applications-2023.json")
    );
}

#[test]
fn bad_lines_report_line_number() {
    let mut cfg = Settings::default();
    let err = apply(&mut cfg, "seats = 41\n\nseats = many\n", Path::new("x.conf")).unwrap_err();
    match err {
        Error::Config { line, msg, .. } => {
            assert_eq!(line, 3);
            assert!(msg.contains("seats"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = apply(&mut cfg, "just words\n", Path::new("x.conf")).unwrap_err();
    assert!(matches!(err, Error::Config { line: 1, .. }));

    let err = apply(&mut cfg, "years = ,\n", Path::new("x.conf")).unwrap_err();
    assert!(matches!(err, Error::Config { line: 1, .. }));
}

#[test]
fn value_lists() {
    assert_eq!(parse_years("2015, 2019").unwrap(), vec![2015, 2019]);
    assert!(parse_years("2015, soon").is_err());

    assert_eq!(
        parse_wages("2021:642, 2022 : 730.5").unwrap(),
        vec![(2021, 642.0), (2022, 730.5)]
    );
    assert!(parse_wages("2021=642").is_err());
    assert!(parse_wages("").unwrap().is_empty());
}
