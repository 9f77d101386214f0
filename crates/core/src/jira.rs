//! Wire models and transformation functions for Jira component reporting
//!
//! Schema-checked parsing of the two response shapes the shell fetches
//! (project component list, issue search page), JQL construction, and the
//! pure aggregation that turns both into the unled-component report.

use serde::{Deserialize, Serialize};

/// Component lead as returned by the component list endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComponentLead {
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Project component from GET /rest/api/3/project/{project}/components
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lead: Option<ComponentLead>,
}

/// Component reference embedded in an issue's fields
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComponentRef {
    pub id: String,
    pub name: String,
}

/// The requested field subset of a search hit (fields=id,components)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IssueFields {
    #[serde(default)]
    pub components: Vec<ComponentRef>,
}

/// Search hit from GET /rest/api/3/search
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Issue {
    pub id: String,
    pub fields: IssueFields,
}

/// One page of the offset-paginated search response
///
/// `max_results` is the page size the server actually applied, which may be
/// smaller than the requested one; `total` spans all pages.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IssuePage {
    #[serde(rename = "startAt")]
    pub start_at: u64,
    #[serde(rename = "maxResults")]
    pub max_results: u64,
    pub total: u64,
    pub issues: Vec<Issue>,
}

/// Error type for response-shape validation
///
/// `detail` carries the structural diff reported by the deserializer:
/// offending field, expected vs actual type, and position in the body.
#[derive(thiserror::Error, Debug)]
#[error("{shape} response did not match the expected shape: {detail}")]
pub struct SchemaError {
    pub shape: &'static str,
    pub detail: String,
}

/// Parse the component list endpoint's body (a plain JSON array)
///
/// Unknown extra fields are ignored; missing or mistyped required fields
/// fail with a [`SchemaError`].
pub fn parse_component_list(body: &str) -> Result<Vec<Component>, SchemaError> {
    serde_json::from_str(body).map_err(|e| SchemaError {
        shape: "component list",
        detail: e.to_string(),
    })
}

/// Parse one page of the search endpoint's response
pub fn parse_issue_page(body: &str) -> Result<IssuePage, SchemaError> {
    serde_json::from_str(body).map_err(|e| SchemaError {
        shape: "issue page",
        detail: e.to_string(),
    })
}

/// Build the JQL expression selecting a project's issues tagged with any of
/// the given components
pub fn issues_jql(project: &str, component_ids: &[String]) -> String {
    format!(
        "project = {} AND component IN ({})",
        project,
        component_ids.join(", ")
    )
}

/// Report entry for a single component without a lead
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ComponentReport {
    pub id: String,
    pub name: String,
    pub issues: usize,
}

/// Output structure for the report command
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportOutput {
    pub components: Vec<ComponentReport>,
    /// Number of matching issues fetched from the tracker
    pub total_issues: usize,
}

/// Keep only the components that have nobody assigned as lead
///
/// Server order is preserved.
pub fn without_lead(components: Vec<Component>) -> Vec<Component> {
    components.into_iter().filter(|c| c.lead.is_none()).collect()
}

/// Count how many issues reference each unled component
///
/// An issue tagged with several unled components contributes to each of
/// their counts.
pub fn count_issues(unled: &[Component], issues: &[Issue]) -> ReportOutput {
    let components = unled
        .iter()
        .map(|component| ComponentReport {
            id: component.id.clone(),
            name: component.name.clone(),
            issues: issues
                .iter()
                .filter(|issue| {
                    issue
                        .fields
                        .components
                        .iter()
                        .any(|reference| reference.id == component.id)
                })
                .count(),
        })
        .collect();

    ReportOutput {
        components,
        total_issues: issues.len(),
    }
}
