use crate::commands::base_commands::{CommandError, PackagePriceArgs, ReportFormat};
use crate::commands::report_format::format_pricing_report;
use crate::commands::report_output::{build_report, build_session, write_report_file};

pub fn calculate_command(
    input: Option<&str>,
    output: Option<&str>,
    format: ReportFormat,
) -> Result<(), CommandError> {
    let session = build_session(input, &PackagePriceArgs::default())?;
    let results = session.results();
    if !results.is_valid {
        tracing::warn!("variable costs and profit margin consume all revenue");
    }

    println!(
        "{}",
        format_pricing_report(
            results,
            session.simulated_packages(),
            &session.simulation(),
            session.competitor_comparison().as_ref(),
        )
    );

    if let Some(output) = output {
        let report = build_report(&session, input, false);
        write_report_file(output, &report, format)?;
        println!("Pricing report written to {output}");
    }
    Ok(())
}
