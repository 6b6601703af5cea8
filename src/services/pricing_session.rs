use tracing::debug;

use crate::domain::package::{PackageTier, Packages};
use crate::domain::pricing_inputs::PricingInputs;
use crate::services::competitor_analysis::{CompetitorComparison, compare_with_competitor};
use crate::services::pricing_engine::compute_pricing;
use crate::services::pricing_types::{CalculatedResults, SimulationResults};
use crate::services::simulation::compute_simulation;

/// Interactive state around the pure engines: the current inputs, their
/// results, and the package prices the user is simulating.
///
/// Simulated packages start at the ideal prices of a valid computation;
/// prices the user types replace single tiers.
#[derive(Debug, Clone)]
pub struct PricingSession {
    inputs: PricingInputs,
    results: CalculatedResults,
    simulated_packages: Packages,
}

impl PricingSession {
    pub fn new(inputs: PricingInputs) -> Self {
        let results = compute_pricing(&inputs);
        let simulated_packages = if results.is_valid {
            results.packages
        } else {
            debug!("no ideal packages to mirror for an invalid configuration");
            Packages::zero()
        };
        Self {
            inputs,
            results,
            simulated_packages,
        }
    }

    pub fn results(&self) -> &CalculatedResults {
        &self.results
    }

    pub fn simulated_packages(&self) -> &Packages {
        &self.simulated_packages
    }

    pub fn set_simulated_price(&mut self, tier: PackageTier, price: f64) {
        self.simulated_packages.set(tier, price);
    }

    pub fn simulation(&self) -> SimulationResults {
        compute_simulation(&self.inputs, &self.simulated_packages, &self.results)
    }

    /// Compares the ideal 2x/week package with the competitor reference.
    /// Nothing is compared while the ideal price is zero.
    pub fn competitor_comparison(&self) -> Option<CompetitorComparison> {
        let ideal_price = self.results.packages.get(PackageTier::TwicePerWeek);
        if !self.results.is_valid || ideal_price <= 0.0 {
            return None;
        }
        compare_with_competitor(ideal_price, self.inputs.market_analysis.competitor_price)
    }
}
