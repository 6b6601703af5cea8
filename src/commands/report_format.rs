use crate::domain::package::{PackageTier, Packages};
use crate::services::competitor_analysis::CompetitorComparison;
use crate::services::currency_format::{format_currency, format_percent};
use crate::services::pricing_types::{CalculatedResults, SimulationResults};
use crate::services::simulation::round_to_whole_unit;

pub fn format_pricing_report(
    results: &CalculatedResults,
    simulated: &Packages,
    simulation: &SimulationResults,
    competitor: Option<&CompetitorComparison>,
) -> String {
    if !results.is_valid {
        return format_guidance();
    }

    let mut lines = Vec::new();
    lines.push("Pricing Report".to_string());
    lines.push(format!(
        "Price per session (ideal): {}",
        format_currency(results.price_per_session)
    ));
    lines.push(String::new());

    lines.push("Monthly packages:".to_string());
    lines.push("Package | Sessions | Ideal | Simulated".to_string());
    lines.push("--------|----------|-------|----------".to_string());
    for tier in PackageTier::ALL {
        lines.push(format_package_row(tier, results, simulated));
    }
    if let Some(comparison) = competitor {
        lines.push(format!(
            "Competitor ({}): {}",
            PackageTier::TwicePerWeek.frequency_label(),
            comparison.describe()
        ));
    }

    if simulation.is_simulating {
        lines.push(String::new());
        lines.push("Scenario analysis:".to_string());
        lines.push(format!(
            "New total revenue: {}",
            format_currency(simulation.new_revenue)
        ));
        lines.push(format!(
            "New profit: {}",
            format_currency(simulation.new_profit_value)
        ));
        lines.push(format!(
            "New profit margin: {}",
            format_percent(simulation.new_profit_margin)
        ));
    }

    lines.push(String::new());
    lines.push("Break-even:".to_string());
    lines.push(format!(
        "Revenue to break even: {}",
        format_currency(results.break_even.monthly_revenue)
    ));
    lines.push(format!(
        "Sessions to break even: {}/month",
        results.break_even.sessions_per_month.ceil()
    ));

    let reserve = &results.emergency_reserve;
    lines.push(String::new());
    lines.push("Emergency reserve:".to_string());
    lines.push(format!(
        "Total for 6 months: {}",
        format_currency(reserve.total_needed)
    ));
    lines.push(format!(
        "Monthly saving (12-month goal): {}/month",
        format_currency(reserve.monthly_saving_12_months)
    ));
    lines.push(format!(
        "Monthly saving (24-month goal): {}/month",
        format_currency(reserve.monthly_saving_24_months)
    ));

    lines.push(String::new());
    lines.push("Targets and details:".to_string());
    lines.push(format!(
        "Minimum revenue needed: {}",
        format_currency(results.target_revenue)
    ));
    lines.push(format!(
        "Total fixed costs: {}",
        format_currency(results.total_fixed_costs)
    ));
    lines.push(format!(
        "Sessions (real occupancy): {}/month",
        results.real_sessions_per_month.round()
    ));
    lines.push(format!(
        "Active clients (2x/week equivalent): ~ {} clients",
        results.equivalent_clients_2x.round()
    ));

    let plan = &results.financial_planning;
    lines.push(String::new());
    lines.push("Financial pyramid:".to_string());
    lines.push(format!("Payroll (40%): {}", format_currency(plan.payroll)));
    lines.push(format!(
        "Operational (30%): {}",
        format_currency(plan.operational)
    ));
    lines.push(format!("Reserve (20%): {}", format_currency(plan.reserve)));
    lines.push(format!(
        "Working capital (10%): {}",
        format_currency(plan.working_capital)
    ));

    lines.join("\n")
}

fn format_package_row(
    tier: PackageTier,
    results: &CalculatedResults,
    simulated: &Packages,
) -> String {
    format!(
        "{label} | {sessions} | {ideal} | {simulated}",
        label = tier.frequency_label(),
        sessions = tier.sessions_label(),
        ideal = format_currency(results.packages.get(tier)),
        simulated = format_currency(round_to_whole_unit(simulated.get(tier)))
    )
}

fn format_guidance() -> String {
    [
        "Pricing Report",
        "Results unavailable: fill in the inputs to calculate your pricing.",
        "Tip: variable costs and profit margin cannot add up to 100% or more.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::competitor_analysis::compare_with_competitor;
    use crate::services::pricing_engine::compute_pricing;
    use crate::services::simulation::compute_simulation;
    use crate::test_support::default_inputs;

    #[test]
    fn format_pricing_report_includes_every_section() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let simulation = compute_simulation(&inputs, &results.packages, &results);

        let output = format_pricing_report(&results, &results.packages, &simulation, None);

        assert!(output.contains("Price per session (ideal): R$ 30,32"));
        assert!(output.contains("1x per week | ~5 sessions/month | R$ 151,62 | R$ 152,00"));
        assert!(output.contains("2x per week | ~9 sessions/month | R$ 272,92 | R$ 273,00"));
        assert!(output.contains("3x per week | ~13 sessions/month | R$ 394,21 | R$ 394,00"));
        assert!(output.contains("Revenue to break even: R$ 8.522,73"));
        assert!(output.contains("Sessions to break even: 282/month"));
        assert!(output.contains("Total for 6 months: R$ 45.000,00"));
        assert!(output.contains("Monthly saving (12-month goal): R$ 3.750,00/month"));
        assert!(output.contains("Monthly saving (24-month goal): R$ 1.875,00/month"));
        assert!(output.contains("Minimum revenue needed: R$ 11.029,41"));
        assert!(output.contains("Total fixed costs: R$ 7.500,00"));
        assert!(output.contains("Sessions (real occupancy): 364/month"));
        assert!(output.contains("Active clients (2x/week equivalent): ~ 40 clients"));
        assert!(output.contains("Payroll (40%): R$ 4.411,76"));
        assert!(output.contains("Operational (30%): R$ 3.308,82"));
        assert!(output.contains("Reserve (20%): R$ 2.205,88"));
        assert!(output.contains("Working capital (10%): R$ 1.102,94"));
        assert!(!output.contains("Scenario analysis"));
        assert!(!output.contains("Competitor"));
    }

    #[test]
    fn scenario_section_appears_while_simulating() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let mut simulated = results.packages;
        simulated.one_x = 200.0;
        let simulation = compute_simulation(&inputs, &simulated, &results);

        let output = format_pricing_report(&results, &simulated, &simulation, None);

        assert!(output.contains("Scenario analysis:"));
        assert!(output.contains("1x per week | ~5 sessions/month | R$ 151,62 | R$ 200,00"));
        assert!(output.contains("New profit margin: "));
    }

    #[test]
    fn simulated_column_shows_whole_currency_units() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let mut simulated = results.packages;
        simulated.one_x = 151.4;
        simulated.three_x = 394.5;
        let simulation = compute_simulation(&inputs, &simulated, &results);

        let output = format_pricing_report(&results, &simulated, &simulation, None);

        assert!(output.contains("1x per week | ~5 sessions/month | R$ 151,62 | R$ 151,00"));
        assert!(output.contains("3x per week | ~13 sessions/month | R$ 394,21 | R$ 395,00"));
    }

    #[test]
    fn competitor_label_is_shown_for_two_per_week() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let simulation = compute_simulation(&inputs, &results.packages, &results);
        let comparison = compare_with_competitor(results.packages.two_x, 300.0).unwrap();

        let output =
            format_pricing_report(&results, &results.packages, &simulation, Some(&comparison));

        assert!(output.contains("Competitor (2x per week): 9% below average"));
    }

    #[test]
    fn invalid_results_show_guidance_instead_of_numbers() {
        let output = format_pricing_report(
            &CalculatedResults::invalid(),
            &Packages::zero(),
            &SimulationResults::default(),
            None,
        );

        assert!(output.contains("Results unavailable"));
        assert!(output.contains("cannot add up to 100% or more"));
        assert!(!output.contains("R$"));
    }
}
