use leadless_core::jira::{parse_component_list, Component};

use super::JiraConfig;
use crate::prelude::*;

/// Public data function - fetches the project's components, in server order
///
/// GET /rest/api/3/project/{project}/components returns a plain JSON array
/// of component objects.
pub async fn get_components_data(
    client: &reqwest::Client,
    config: &JiraConfig,
) -> Result<Vec<Component>, Error> {
    let url = format!(
        "{}/rest/api/3/project/{}/components",
        config.base_url, config.project
    );

    let response = client
        .get(&url)
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

    Ok(parse_component_list(&body)?)
}
