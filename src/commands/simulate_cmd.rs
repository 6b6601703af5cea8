use tracing::{info, warn};

use crate::commands::base_commands::{CommandError, PackagePriceArgs, ReportFormat};
use crate::commands::report_format::format_pricing_report;
use crate::commands::report_output::{build_report, build_session, write_report_file};

pub fn simulate_command(
    input: Option<&str>,
    prices: &PackagePriceArgs,
    output: Option<&str>,
    format: ReportFormat,
) -> Result<(), CommandError> {
    let session = build_session(input, prices)?;
    let simulation = session.simulation();
    if !session.results().is_valid {
        warn!("variable costs and profit margin consume all revenue, nothing to simulate");
    } else {
        info!(
            new_revenue = simulation.new_revenue,
            new_profit_margin = simulation.new_profit_margin,
            is_simulating = simulation.is_simulating,
            "simulation computed"
        );
    }

    println!(
        "{}",
        format_pricing_report(
            session.results(),
            session.simulated_packages(),
            &simulation,
            session.competitor_comparison().as_ref(),
        )
    );
    if session.results().is_valid && !simulation.is_simulating {
        println!("Simulated prices match the ideal packages; no scenario to analyse.");
    }

    if let Some(output) = output {
        let report = build_report(&session, input, true);
        write_report_file(output, &report, format)?;
        println!("Simulation report written to {output}");
    }
    Ok(())
}
