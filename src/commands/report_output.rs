use chrono::Local;
use tracing::info;

use crate::commands::base_commands::{CommandError, PackagePriceArgs, ReportFormat};
use crate::services::inputs_yaml::load_inputs_or_default;
use crate::services::pricing_session::PricingSession;
use crate::services::pricing_types::PricingReport;

/// Loads the inputs and applies any package prices typed on the command line.
pub fn build_session(
    input: Option<&str>,
    prices: &PackagePriceArgs,
) -> Result<PricingSession, CommandError> {
    let inputs = load_inputs_or_default(input)?;
    let mut session = PricingSession::new(inputs);
    for (tier, price) in prices.overrides() {
        session.set_simulated_price(tier, price);
    }
    Ok(session)
}

pub fn build_report(
    session: &PricingSession,
    input: Option<&str>,
    include_simulation: bool,
) -> PricingReport {
    PricingReport {
        data_source: data_source_name(input),
        generated_on: Local::now().date_naive(),
        results: session.results().clone(),
        simulated_packages: *session.simulated_packages(),
        simulation: include_simulation.then(|| session.simulation()),
        competitor: session.competitor_comparison(),
    }
}

pub fn serialize_report(
    report: &PricingReport,
    format: ReportFormat,
) -> Result<String, CommandError> {
    Ok(match format {
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

pub fn write_report_file(
    path: &str,
    report: &PricingReport,
    format: ReportFormat,
) -> Result<(), CommandError> {
    let contents = serialize_report(report, format)?;
    std::fs::write(path, contents).map_err(|source| CommandError::WriteOutput {
        path: path.to_string(),
        source,
    })?;
    info!(path, ?format, "pricing report written");
    Ok(())
}

fn data_source_name(input: Option<&str>) -> String {
    match input {
        Some(path) => std::path::Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
            .to_string(),
        None => "defaults".to_string(),
    }
}
