pub mod competitor_analysis;
pub mod currency_format;
pub mod inputs_yaml;
pub mod pricing_chart;
pub mod pricing_engine;
pub mod pricing_session;
pub mod pricing_types;
pub mod simulation;
