use crate::domain::pricing_inputs::PricingInputs;

/// The studio template used throughout the tests: 7500 fixed costs, 12%
/// variable costs, 20% margin, 3 clients x 8 hours, Mon-Fri at 70%.
pub fn default_inputs() -> PricingInputs {
    PricingInputs::default()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
