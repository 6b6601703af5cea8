use tracing::debug;

use crate::domain::package::{PackageTier, Packages};
use crate::domain::pricing_inputs::PricingInputs;
use crate::services::pricing_types::{
    BreakEven, CalculatedResults, EmergencyReserve, FinancialPlanning,
};

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;

const PAYROLL_SHARE: f64 = 0.40;
const OPERATIONAL_SHARE: f64 = 0.30;
const RESERVE_SHARE: f64 = 0.20;
const WORKING_CAPITAL_SHARE: f64 = 0.10;

const EMERGENCY_RESERVE_MONTHS: f64 = 6.0;

/// Derives the ideal pricing from the studio's costs, margin and capacity.
///
/// When variable costs plus the profit target take 100% or more of revenue
/// there is nothing left to recover fixed costs; the result is then fully
/// zeroed with `is_valid == false` and no division is attempted.
pub fn compute_pricing(inputs: &PricingInputs) -> CalculatedResults {
    let total_fixed_costs = inputs.fixed_costs.total();

    let variable_costs_percentage = inputs.variable_costs.fraction();
    let profit_percentage = inputs.profit_margin / 100.0;

    let denominator_profit = 1.0 - variable_costs_percentage - profit_percentage;
    let denominator_break_even = 1.0 - variable_costs_percentage;

    if denominator_profit <= 0.0 || denominator_break_even <= 0.0 {
        debug!(
            variable_costs_percentage,
            profit_percentage, "pricing configuration is infeasible"
        );
        return CalculatedResults::invalid();
    }

    let target_revenue = total_fixed_costs / denominator_profit;
    let break_even_revenue = total_fixed_costs / denominator_break_even;

    let capacity = &inputs.capacity;
    let working_days_per_month = capacity.working_days.count() as f64 * WEEKS_PER_MONTH;
    let theoretical_sessions =
        capacity.clients_per_hour * capacity.hours_per_day * working_days_per_month;
    let real_sessions_per_month = theoretical_sessions * (capacity.occupancy_rate / 100.0);

    let price_per_session = if real_sessions_per_month > 0.0 {
        target_revenue / real_sessions_per_month
    } else {
        0.0
    };

    let break_even_sessions = if price_per_session > 0.0 {
        break_even_revenue / price_per_session
    } else {
        0.0
    };

    let equivalent_clients_2x = if real_sessions_per_month > 0.0 {
        real_sessions_per_month / PackageTier::TwicePerWeek.sessions_per_month()
    } else {
        0.0
    };

    let emergency_total = total_fixed_costs * EMERGENCY_RESERVE_MONTHS;

    CalculatedResults {
        total_fixed_costs,
        target_revenue,
        real_sessions_per_month,
        equivalent_clients_2x,
        price_per_session,
        packages: Packages::from_price_per_session(price_per_session),
        financial_planning: FinancialPlanning {
            payroll: target_revenue * PAYROLL_SHARE,
            operational: target_revenue * OPERATIONAL_SHARE,
            reserve: target_revenue * RESERVE_SHARE,
            working_capital: target_revenue * WORKING_CAPITAL_SHARE,
        },
        break_even: BreakEven {
            sessions_per_month: break_even_sessions,
            monthly_revenue: break_even_revenue,
        },
        emergency_reserve: EmergencyReserve {
            total_needed: emergency_total,
            monthly_saving_12_months: emergency_total / 12.0,
            monthly_saving_24_months: emergency_total / 24.0,
        },
        is_valid: true,
    }
}
