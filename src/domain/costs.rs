#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedCosts {
    pub rent: f64,
    pub utilities: f64,
    pub accounting: f64,
    pub owner_salary: f64,
    pub staff_salary: f64,
    pub consumables: f64,
    pub other: f64,
}

impl FixedCosts {
    pub fn total(&self) -> f64 {
        self.rent
            + self.utilities
            + self.accounting
            + self.owner_salary
            + self.staff_salary
            + self.consumables
            + self.other
    }
}

/// Percentages of revenue consumed by every transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableCosts {
    pub credit_card_fee: f64,
    pub taxes: f64,
    pub depreciation: f64,
}

impl VariableCosts {
    /// Share of revenue (0.0..=1.0 for sane inputs) eaten by variable costs.
    pub fn fraction(&self) -> f64 {
        (self.credit_card_fee + self.taxes + self.depreciation) / 100.0
    }
}
