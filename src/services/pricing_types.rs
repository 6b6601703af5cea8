use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::package::Packages;
use crate::services::competitor_analysis::CompetitorComparison;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialPlanning {
    pub payroll: f64,
    pub operational: f64,
    pub reserve: f64,
    pub working_capital: f64,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct BreakEven {
    pub sessions_per_month: f64,
    pub monthly_revenue: f64,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct EmergencyReserve {
    pub total_needed: f64,
    pub monthly_saving_12_months: f64,
    pub monthly_saving_24_months: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalculatedResults {
    pub total_fixed_costs: f64,
    pub target_revenue: f64,
    pub real_sessions_per_month: f64,
    pub equivalent_clients_2x: f64,
    pub price_per_session: f64,
    pub packages: Packages,
    pub financial_planning: FinancialPlanning,
    pub break_even: BreakEven,
    pub emergency_reserve: EmergencyReserve,
    pub is_valid: bool,
}

impl CalculatedResults {
    /// Zeroed result for configurations that leave no revenue for fixed costs.
    pub fn invalid() -> Self {
        Self {
            total_fixed_costs: 0.0,
            target_revenue: 0.0,
            real_sessions_per_month: 0.0,
            equivalent_clients_2x: 0.0,
            price_per_session: 0.0,
            packages: Packages::zero(),
            financial_planning: FinancialPlanning::default(),
            break_even: BreakEven::default(),
            emergency_reserve: EmergencyReserve::default(),
            is_valid: false,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationResults {
    pub new_revenue: f64,
    pub new_profit_value: f64,
    pub new_profit_margin: f64,
    pub is_simulating: bool,
}

/// Machine-readable document written by `calculate`/`simulate`.
#[derive(Serialize, Debug, Clone)]
pub struct PricingReport {
    pub data_source: String,
    pub generated_on: NaiveDate,
    pub results: CalculatedResults,
    pub simulated_packages: Packages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor: Option<CompetitorComparison>,
}
