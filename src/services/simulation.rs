use crate::domain::package::{PackageTier, Packages};
use crate::domain::pricing_inputs::PricingInputs;
use crate::services::pricing_types::{CalculatedResults, SimulationResults};

/// Estimates revenue and profit if the studio charged `simulated_packages`
/// instead of the ideal package prices.
///
/// Capacity is taken from the ideal calculation; only the average price per
/// session changes. Tiers priced at zero are left out of that average.
pub fn compute_simulation(
    inputs: &PricingInputs,
    simulated_packages: &Packages,
    results: &CalculatedResults,
) -> SimulationResults {
    if !results.is_valid {
        return SimulationResults::default();
    }

    let valid_prices: Vec<f64> = PackageTier::ALL
        .iter()
        .map(|tier| implied_price_per_session(*tier, simulated_packages.get(*tier)))
        .filter(|price| *price > 0.0)
        .collect();
    let avg_simulated_price_per_session = if valid_prices.is_empty() {
        0.0
    } else {
        valid_prices.iter().sum::<f64>() / valid_prices.len() as f64
    };

    let new_revenue = avg_simulated_price_per_session * results.real_sessions_per_month;
    let total_variable_cost_value = new_revenue * inputs.variable_costs.fraction();
    let new_profit_value = new_revenue - results.total_fixed_costs - total_variable_cost_value;
    let new_profit_margin = if new_revenue > 0.0 {
        new_profit_value / new_revenue * 100.0
    } else {
        0.0
    };

    SimulationResults {
        new_revenue,
        new_profit_value,
        new_profit_margin,
        is_simulating: differs_from_ideal(simulated_packages, &results.packages),
    }
}

fn implied_price_per_session(tier: PackageTier, package_price: f64) -> f64 {
    if package_price > 0.0 {
        package_price / tier.sessions_per_month()
    } else {
        0.0
    }
}

/// True when any tier differs from its ideal price after rounding both to
/// whole currency units.
pub fn differs_from_ideal(simulated: &Packages, ideal: &Packages) -> bool {
    PackageTier::ALL.iter().any(|tier| {
        round_to_whole_unit(simulated.get(*tier)) != round_to_whole_unit(ideal.get(*tier))
    })
}

/// Rounds half-up, so 2.5 -> 3 and -2.5 -> -2.
pub fn round_to_whole_unit(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing_engine::compute_pricing;
    use crate::test_support::{assert_close, default_inputs};

    fn rounded(packages: &Packages) -> Packages {
        Packages {
            one_x: round_to_whole_unit(packages.one_x),
            two_x: round_to_whole_unit(packages.two_x),
            three_x: round_to_whole_unit(packages.three_x),
        }
    }

    #[test]
    fn invalid_results_short_circuit() {
        let mut inputs = default_inputs();
        inputs.profit_margin = 95.0;
        let results = compute_pricing(&inputs);
        let simulated = Packages::from_price_per_session(40.0);

        let simulation = compute_simulation(&inputs, &simulated, &results);

        assert_eq!(simulation, SimulationResults::default());
        assert!(!simulation.is_simulating);
    }

    #[test]
    fn rounded_ideal_prices_are_not_a_simulation() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let simulated = rounded(&results.packages);

        let simulation = compute_simulation(&inputs, &simulated, &results);

        assert!(!simulation.is_simulating);
        assert_close(simulation.new_revenue, 11037.8139, 1e-3);
        assert_close(simulation.new_profit_value, 2213.2763, 1e-3);
        assert_close(simulation.new_profit_margin, 20.0518, 1e-3);
    }

    #[test]
    fn ideal_prices_reproduce_target_margin() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);

        let simulation = compute_simulation(&inputs, &results.packages, &results);

        assert!(!simulation.is_simulating);
        assert_close(simulation.new_revenue, results.target_revenue, 1e-6);
        assert_close(simulation.new_profit_margin, inputs.profit_margin, 1e-9);
    }

    #[test]
    fn changed_tier_starts_a_simulation() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let mut simulated = rounded(&results.packages);
        simulated.one_x = 200.0;

        let simulation = compute_simulation(&inputs, &simulated, &results);

        assert!(simulation.is_simulating);
        assert_close(simulation.new_revenue, 12201.7179, 1e-3);
        assert_close(simulation.new_profit_value, 3237.5118, 1e-3);
        assert_close(simulation.new_profit_margin, 26.5332, 1e-3);
    }

    #[test]
    fn zero_priced_tiers_are_left_out_of_the_average() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);
        let simulated = Packages {
            one_x: 0.0,
            two_x: 270.0,
            three_x: 0.0,
        };

        let simulation = compute_simulation(&inputs, &simulated, &results);

        assert!(simulation.is_simulating);
        assert_close(simulation.new_revenue, 30.0 * results.real_sessions_per_month, 1e-9);
        assert_close(simulation.new_profit_value, 2102.208, 1e-3);
    }

    #[test]
    fn all_zero_prices_yield_zero_revenue_and_margin() {
        let inputs = default_inputs();
        let results = compute_pricing(&inputs);

        let simulation = compute_simulation(&inputs, &Packages::zero(), &results);

        assert!(simulation.is_simulating);
        assert_eq!(simulation.new_revenue, 0.0);
        assert_eq!(simulation.new_profit_value, -results.total_fixed_costs);
        assert_eq!(simulation.new_profit_margin, 0.0);
    }

    #[test]
    fn sub_unit_noise_does_not_flag_a_simulation() {
        let ideal = Packages {
            one_x: 151.62,
            two_x: 272.92,
            three_x: 394.21,
        };
        let noisy = Packages {
            one_x: 151.9,
            two_x: 273.4,
            three_x: 394.0,
        };
        assert!(!differs_from_ideal(&noisy, &ideal));
        assert!(differs_from_ideal(
            &Packages {
                one_x: 152.5,
                ..noisy
            },
            &ideal
        ));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_to_whole_unit(2.5), 3.0);
        assert_eq!(round_to_whole_unit(2.49), 2.0);
        assert_eq!(round_to_whole_unit(-2.5), -2.0);
    }
}
