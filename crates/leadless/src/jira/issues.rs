use futures::future::try_join_all;
use leadless_core::jira::{issues_jql, parse_issue_page, Issue, IssuePage};
use leadless_core::pagination::{plan, PageWindow};

use super::JiraConfig;
use crate::prelude::*;

/// Page size requested by the probe. The server treats it as a hint and
/// reports the page size it actually applied in the response.
const PROBE_PAGE_SIZE: u64 = 10_000;

/// Public data function - fetches every issue of the project tagged with
/// any of the given components
///
/// Only the first response reveals the server-confirmed page size and the
/// full result count, so the fetch runs in two phases: probe page 0, then
/// plan the remaining windows and fetch them concurrently. Issues are
/// concatenated in window order (startAt ascending), never in completion
/// order, and the first failing page fails the whole fetch with no partial
/// result.
///
/// Callers must not pass an empty `component_ids` slice; the report layer
/// skips the fetch entirely when every component has a lead.
pub async fn search_issues_by_components_data(
    client: &reqwest::Client,
    config: &JiraConfig,
    component_ids: &[String],
) -> Result<Vec<Issue>, Error> {
    let jql = issues_jql(&config.project, component_ids);

    let first = fetch_page(
        client,
        config,
        &jql,
        PageWindow {
            start_at: 0,
            page_size: PROBE_PAGE_SIZE,
        },
    )
    .await?;

    let windows = plan(first.max_results, first.total)?;
    let rest = try_join_all(
        windows
            .into_iter()
            .skip(1) // the probe already fetched window 0
            .map(|window| fetch_page(client, config, &jql, window)),
    )
    .await?;

    let mut issues = first.issues;
    for page in rest {
        issues.extend(page.issues);
    }

    Ok(issues)
}

/// Fetch a single page of the search endpoint
async fn fetch_page(
    client: &reqwest::Client,
    config: &JiraConfig,
    jql: &str,
    window: PageWindow,
) -> Result<IssuePage, Error> {
    let url = format!("{}/rest/api/3/search", config.base_url);

    let start_at = window.start_at.to_string();
    let max_results = window.page_size.to_string();
    let query_params = [
        ("startAt", start_at.as_str()),
        ("maxResults", max_results.as_str()),
        ("validateQuery", "strict"),
        ("fields", "id,components"),
        ("jql", jql),
    ];

    let response = client
        .get(&url)
        .query(&query_params)
        .send()
        .await
        .map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::TrackerResponse {
            url,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let body = response.text().await.map_err(|source| Error::Transport {
        url: url.clone(),
        source,
    })?;

    Ok(parse_issue_page(&body)?)
}
