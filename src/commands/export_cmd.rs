use crate::commands::base_commands::{CommandError, PackagePriceArgs};
use crate::commands::report_output::build_session;
use crate::services::pricing_chart::write_pricing_snapshot_png;

pub fn export_command(
    input: Option<&str>,
    prices: &PackagePriceArgs,
    output: &str,
) -> Result<(), CommandError> {
    let session = build_session(input, prices)?;
    write_pricing_snapshot_png(output, session.results(), session.simulated_packages())?;
    println!("Pricing snapshot written to {output}");
    Ok(())
}
