use colored::Colorize;
use serde::{Deserialize, Serialize};

use leadless_core::jira::{count_issues, without_lead, ReportOutput};

use crate::jira::{self, JiraConfig};
use crate::prelude::{println, *};

/// Options for the component lead report
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Report unled components of project PROJ:
  leadless PROJ --base-url https://yourcompany.atlassian.net

  # Same, with the tracker taken from the environment:
  JIRA_BASE_URL=https://yourcompany.atlassian.net leadless PROJ

  # Machine-readable output:
  leadless PROJ --json

NOTES:
  - A component counts as unled when the tracker reports no lead for it
  - Issue counts include every issue tagged with the component
  - The search endpoint is paginated; all pages are fetched before anything
    is reported, and any failing page aborts the report")]
pub struct ReportOptions {
    /// Project key or id (e.g. "PROJ")
    #[clap(env = "JIRA_PROJECT")]
    pub project: String,

    /// Base URL of the tracker instance
    #[arg(long, env = "JIRA_BASE_URL")]
    pub base_url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - fetches components and issues and aggregates them
///
/// The issue search is skipped entirely when every component has a lead, so
/// a fully-led project costs a single request.
pub async fn report_data(options: &ReportOptions) -> Result<ReportOutput> {
    let config = JiraConfig::new(&options.base_url, &options.project);
    let client = jira::create_client()?;

    let components = jira::components::get_components_data(&client, &config).await?;
    let unled = without_lead(components);

    if unled.is_empty() {
        return Ok(count_issues(&unled, &[]));
    }

    let component_ids: Vec<String> = unled.iter().map(|c| c.id.clone()).collect();
    let issues =
        jira::issues::search_issues_by_components_data(&client, &config, &component_ids).await?;

    Ok(count_issues(&unled, &issues))
}

/// Handle the report command
pub async fn run(options: ReportOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching components for {}...", options.project);
    }

    let data = report_data(&options).await?;

    if options.json {
        println!("{}", format_report_json(&data)?);
    } else {
        println!("{}", format_report_text(&data, &options.project));
    }

    Ok(())
}

/// Convert report output to JSON string
fn format_report_json(output: &ReportOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert report output to formatted text with colors
fn format_report_text(output: &ReportOutput, project: &str) -> String {
    if output.components.is_empty() {
        return format!(
            "Every component in {} has a lead.",
            project.bright_white().bold()
        );
    }

    let mut result = String::new();
    result.push_str(&format!(
        "Found {} component(s) without a lead in {}:\n\n",
        output.components.len().to_string().bright_yellow(),
        project.bright_white().bold()
    ));

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Component".bold().cyan(),
        "Issues".bold().cyan()
    ]);

    for component in &output.components {
        let issues = if component.issues == 0 {
            component.issues.to_string().bright_black().to_string()
        } else {
            component.issues.to_string().bright_yellow().to_string()
        };
        table.add_row(prettytable::row![
            component.id.bright_black(),
            component.name.bright_white(),
            issues
        ]);
    }

    result.push_str(&table.to_string());
    result.push_str(&format!(
        "\n{} matching issue(s) inspected.",
        output.total_issues
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use leadless_core::jira::ComponentReport;

    fn create_test_output(components: Vec<ComponentReport>, total_issues: usize) -> ReportOutput {
        ReportOutput {
            components,
            total_issues,
        }
    }

    fn create_test_options(server: &MockServer, project: &str) -> ReportOptions {
        ReportOptions {
            project: project.to_string(),
            base_url: server.base_url(),
            json: false,
        }
    }

    #[test]
    fn test_format_report_json_basic() {
        let output = create_test_output(
            vec![ComponentReport {
                id: "C1".to_string(),
                name: "Billing".to_string(),
                issues: 2,
            }],
            3,
        );

        let json = format_report_json(&output).unwrap();

        assert!(json.contains("\"id\": \"C1\""));
        assert!(json.contains("\"name\": \"Billing\""));
        assert!(json.contains("\"issues\": 2"));
        assert!(json.contains("\"total_issues\": 3"));
    }

    #[test]
    fn test_format_report_text_empty() {
        let output = create_test_output(vec![], 0);
        let text = format_report_text(&output, "PROJ");
        assert!(text.contains("Every component"));
        assert!(text.contains("has a lead"));
    }

    #[test]
    fn test_format_report_text_basic() {
        let output = create_test_output(
            vec![
                ComponentReport {
                    id: "C1".to_string(),
                    name: "Billing".to_string(),
                    issues: 2,
                },
                ComponentReport {
                    id: "C2".to_string(),
                    name: "Web".to_string(),
                    issues: 0,
                },
            ],
            2,
        );

        let text = format_report_text(&output, "PROJ");

        assert!(text.contains("Billing"));
        assert!(text.contains("Web"));
        assert!(text.contains("2 matching issue(s)"));
    }

    #[tokio::test]
    async fn test_report_data_end_to_end() {
        let server = MockServer::start();
        let components_mock = server.mock(|when, then| {
            when.method(GET).path("/rest/api/3/project/PROJ/components");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": "C1", "name": "Billing"},
                    {
                        "id": "C2",
                        "name": "Web",
                        "lead": {"accountId": "a1", "displayName": "Mia Krystof"}
                    }
                ]));
        });
        // Only the unled component may appear in the search filter.
        let search_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/api/3/search")
                .query_param("startAt", "0")
                .query_param("jql", "project = PROJ AND component IN (C1)");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "startAt": 0,
                    "maxResults": 50,
                    "total": 2,
                    "issues": [
                        {"id": "I1", "fields": {"components": [{"id": "C1", "name": "Billing"}]}},
                        {"id": "I2", "fields": {"components": [
                            {"id": "C1", "name": "Billing"},
                            {"id": "C2", "name": "Web"}
                        ]}}
                    ]
                }));
        });

        let options = create_test_options(&server, "PROJ");
        let report = report_data(&options).await.unwrap();

        components_mock.assert();
        search_mock.assert();

        assert_eq!(
            report.components,
            vec![ComponentReport {
                id: "C1".to_string(),
                name: "Billing".to_string(),
                issues: 2,
            }]
        );
        assert_eq!(report.total_issues, 2);
    }

    #[tokio::test]
    async fn test_report_data_skips_search_when_all_led() {
        let server = MockServer::start();
        // No search mock registered: a search request would 404 and fail the
        // report, so success here proves the fetch was skipped.
        let components_mock = server.mock(|when, then| {
            when.method(GET).path("/rest/api/3/project/PROJ/components");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {
                        "id": "C2",
                        "name": "Web",
                        "lead": {"accountId": "a1", "displayName": "Mia Krystof"}
                    }
                ]));
        });

        let options = create_test_options(&server, "PROJ");
        let report = report_data(&options).await.unwrap();

        components_mock.assert();
        assert!(report.components.is_empty());
        assert_eq!(report.total_issues, 0);
    }

    #[tokio::test]
    async fn test_report_data_empty_component_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/api/3/project/PROJ/components");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let options = create_test_options(&server, "PROJ");
        let report = report_data(&options).await.unwrap();

        assert!(report.components.is_empty());
    }

    #[tokio::test]
    async fn test_report_data_propagates_tracker_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/api/3/project/PROJ/components");
            then.status(400);
        });

        let options = create_test_options(&server, "PROJ");
        let error = report_data(&options).await.unwrap_err();

        let tracker = error.downcast_ref::<Error>();
        assert!(
            matches!(
                tracker,
                Some(Error::TrackerResponse { status: 400, .. })
            ),
            "got {error:?}"
        );
    }
}
