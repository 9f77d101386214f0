use crate::prelude::*;
use clap::Parser;

mod error;
mod jira;
mod prelude;
mod report;

#[derive(Debug, clap::Parser)]
#[command(
    name = "leadless",
    version,
    about,
    long_about = "Report project components that have no lead, along with the number of issues affected by each"
)]
pub struct App {
    #[clap(flatten)]
    options: report::ReportOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "LEADLESS_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    report::run(app.options, app.global).await
}
