//! Report commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::api::ReportApi;
use crate::client::models::CreateReportRequest;
use crate::error::Result;
use crate::models::ReportDisplay;
use crate::nav::routes;
use crate::output::Formattable;

/// Run the report create command
pub async fn create(
    opts: &GlobalOptions,
    reported_user_id: u64,
    reason: &str,
    description: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::user(reported_user_id)).await?;
    ctx.require_user().await?;

    let request = CreateReportRequest {
        reported_user_id,
        reason: reason.to_string(),
        description: description.map(str::to_string),
    };

    let report = ctx.client.create_report(&request).await?;
    eprintln!("{} Report #{} filed. Thank you.", "✓".green(), report.id);

    vec![ReportDisplay::from(report)].print(ctx.format)
}
