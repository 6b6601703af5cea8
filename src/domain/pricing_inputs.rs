use super::capacity::{Capacity, WorkingDays};
use super::costs::{FixedCosts, VariableCosts};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketAnalysis {
    /// Average competitor price for a 2x/week plan. Zero means not provided.
    pub competitor_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingInputs {
    pub fixed_costs: FixedCosts,
    pub variable_costs: VariableCosts,
    /// Target profit as a percentage of revenue.
    pub profit_margin: f64,
    pub capacity: Capacity,
    pub market_analysis: MarketAnalysis,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            fixed_costs: FixedCosts {
                rent: 1500.0,
                utilities: 500.0,
                accounting: 300.0,
                owner_salary: 3000.0,
                staff_salary: 2000.0,
                consumables: 200.0,
                other: 0.0,
            },
            variable_costs: VariableCosts {
                credit_card_fee: 5.0,
                taxes: 6.0,
                depreciation: 1.0,
            },
            profit_margin: 20.0,
            capacity: Capacity {
                clients_per_hour: 3.0,
                hours_per_day: 8.0,
                working_days: WorkingDays::monday_to_friday(),
                occupancy_rate: 70.0,
            },
            market_analysis: MarketAnalysis {
                competitor_price: 0.0,
            },
        }
    }
}
