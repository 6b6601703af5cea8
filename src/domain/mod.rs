pub mod capacity;
pub mod costs;
pub mod package;
pub mod pricing_inputs;
