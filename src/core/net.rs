// src/core/net.rs
//
// Blocking HTTPS GET against the disclosure report endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

// Portlet instance the report download is routed through
const PORTLET: &str = "electionreportslistportlet_WAR_rpportlet_INSTANCE_qYVVN74fslyU";
const REPORT_CODE: &str = "ELECTED_MUNICIPALITY_CANDIDATES_ADDITIONAL_INFO";

pub fn client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx is an error carrying the status.
pub fn http_get(client: &Client, url: &Url) -> Result<String> {
    let resp = client.get(url.clone()).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Http { status: status.as_u16(), url: url.to_string() });
    }
    Ok(resp.text()?)
}

/// CSV download URL of the candidate disclosure report for one person.
pub fn application_url(
    endpoint: &str,
    election_id: u32,
    first_names: &str,
    last_name: &str,
) -> Result<Url> {
    let p = |name: &str| format!("_{PORTLET}_{name}");
    let election = election_id.to_string();

    let params: Vec<(String, &str)> = vec![
        (s!("p_p_id"), PORTLET),
        (s!("p_p_lifecycle"), "2"),
        (s!("p_p_state"), "normal"),
        (s!("p_p_mode"), "view"),
        (s!("p_p_resource_id"), "downloadElectionReport"),
        (s!("p_p_cacheability"), "cacheLevelPage"),
        (s!("p_p_col_id"), "column-2"),
        (s!("p_p_col_count"), "1"),
        (s!("type"), "CSV"),
        (p("reportCode"), REPORT_CODE),
        (p("r42reportCode"), REPORT_CODE),
        (p("r42ignoreType"), "STE"),
        (p("r42electionFilterTypeSAV"), "SAV"),
        (p("r42surname"), last_name),
        (p("r42name"), first_names),
        (p("r42electionId"), election.as_str()),
        (p("r42countyId"), ""),
        (p("r42organizationId"), ""),
        (s!("select-r42cadidateSuggestedBy"), ""),
        (p("r42cadidateSuggestedBy"), ""),
        (p("r42sorting"), ","),
    ];

    Url::parse_with_params(endpoint, &params).map_err(|e| Error::InvalidSetting {
        key: s!("endpoint"),
        value: format!("{endpoint} ({e})"),
    })
}
