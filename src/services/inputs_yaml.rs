use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::capacity::{Capacity, WorkingDays};
use crate::domain::costs::{FixedCosts, VariableCosts};
use crate::domain::pricing_inputs::{MarketAnalysis, PricingInputs};

#[derive(Error, Debug)]
pub enum InputsYamlError {
    #[error("failed to read inputs yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse inputs yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to write inputs yaml: {0}")]
    Write(#[from] io::Error),
    #[error("invalid working day value: {0} (expected mon..sat)")]
    InvalidWeekday(String),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be between 0 and 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PricingInputsRecord {
    fixed_costs: FixedCostsRecord,
    variable_costs: VariableCostsRecord,
    #[serde(deserialize_with = "lenient_amount")]
    profit_margin: f64,
    capacity: CapacityRecord,
    market_analysis: MarketAnalysisRecord,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct FixedCostsRecord {
    #[serde(deserialize_with = "lenient_amount")]
    rent: f64,
    #[serde(deserialize_with = "lenient_amount")]
    utilities: f64,
    #[serde(deserialize_with = "lenient_amount")]
    accounting: f64,
    #[serde(deserialize_with = "lenient_amount")]
    owner_salary: f64,
    #[serde(deserialize_with = "lenient_amount")]
    staff_salary: f64,
    #[serde(deserialize_with = "lenient_amount")]
    consumables: f64,
    #[serde(deserialize_with = "lenient_amount")]
    other: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct VariableCostsRecord {
    #[serde(deserialize_with = "lenient_amount")]
    credit_card_fee: f64,
    #[serde(deserialize_with = "lenient_amount")]
    taxes: f64,
    #[serde(deserialize_with = "lenient_amount")]
    depreciation: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CapacityRecord {
    #[serde(deserialize_with = "lenient_amount")]
    clients_per_hour: f64,
    #[serde(deserialize_with = "lenient_amount")]
    hours_per_day: f64,
    working_days: Vec<String>,
    #[serde(deserialize_with = "lenient_amount")]
    occupancy_rate: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct MarketAnalysisRecord {
    #[serde(deserialize_with = "lenient_amount")]
    competitor_price: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountField {
    Number(f64),
    Text(String),
}

// Blank or non-numeric values count as zero, like an empty form field.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AmountField>::deserialize(deserializer)? {
        Some(AmountField::Number(value)) => value,
        Some(AmountField::Text(text)) => parse_amount(&text),
        None => 0.0,
    })
}

/// Parses user-typed numbers, treating anything non-numeric as zero.
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

pub fn load_inputs_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<PricingInputs, InputsYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| InputsYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = deserialize_inputs_from_yaml_str(&contents)?;
    info!(path = %path.display(), "loaded pricing inputs");
    Ok(inputs)
}

/// Loads the inputs file when given, otherwise the studio defaults.
pub fn load_inputs_or_default(path: Option<&str>) -> Result<PricingInputs, InputsYamlError> {
    match path {
        Some(path) => load_inputs_from_yaml_file(path),
        None => {
            debug!("no inputs file given, using default studio inputs");
            Ok(PricingInputs::default())
        }
    }
}

pub fn deserialize_inputs_from_yaml_str(input: &str) -> Result<PricingInputs, InputsYamlError> {
    let record: PricingInputsRecord = if input.trim().is_empty() {
        PricingInputsRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };
    inputs_from_record(record)
}

pub fn serialize_inputs_to_yaml<W: Write>(
    writer: &mut W,
    inputs: &PricingInputs,
) -> Result<(), InputsYamlError> {
    let yaml = serde_yaml::to_string(&record_from_inputs(inputs))?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

fn inputs_from_record(record: PricingInputsRecord) -> Result<PricingInputs, InputsYamlError> {
    let fixed = record.fixed_costs;
    let fixed_costs = FixedCosts {
        rent: non_negative("fixed_costs.rent", fixed.rent)?,
        utilities: non_negative("fixed_costs.utilities", fixed.utilities)?,
        accounting: non_negative("fixed_costs.accounting", fixed.accounting)?,
        owner_salary: non_negative("fixed_costs.owner_salary", fixed.owner_salary)?,
        staff_salary: non_negative("fixed_costs.staff_salary", fixed.staff_salary)?,
        consumables: non_negative("fixed_costs.consumables", fixed.consumables)?,
        other: non_negative("fixed_costs.other", fixed.other)?,
    };

    let variable = record.variable_costs;
    let variable_costs = VariableCosts {
        credit_card_fee: percentage("variable_costs.credit_card_fee", variable.credit_card_fee)?,
        taxes: percentage("variable_costs.taxes", variable.taxes)?,
        depreciation: percentage("variable_costs.depreciation", variable.depreciation)?,
    };

    let capacity_record = record.capacity;
    let mut working_days = WorkingDays::new();
    for value in capacity_record.working_days {
        let day = parse_working_day(&value).ok_or(InputsYamlError::InvalidWeekday(value))?;
        working_days.set(day, true);
    }
    let capacity = Capacity {
        clients_per_hour: non_negative(
            "capacity.clients_per_hour",
            capacity_record.clients_per_hour,
        )?,
        hours_per_day: non_negative("capacity.hours_per_day", capacity_record.hours_per_day)?,
        working_days,
        occupancy_rate: percentage("capacity.occupancy_rate", capacity_record.occupancy_rate)?,
    };

    Ok(PricingInputs {
        fixed_costs,
        variable_costs,
        profit_margin: percentage("profit_margin", record.profit_margin)?,
        capacity,
        market_analysis: MarketAnalysis {
            competitor_price: non_negative(
                "market_analysis.competitor_price",
                record.market_analysis.competitor_price,
            )?,
        },
    })
}

fn record_from_inputs(inputs: &PricingInputs) -> PricingInputsRecord {
    let fixed = &inputs.fixed_costs;
    let variable = &inputs.variable_costs;
    let capacity = &inputs.capacity;
    PricingInputsRecord {
        fixed_costs: FixedCostsRecord {
            rent: fixed.rent,
            utilities: fixed.utilities,
            accounting: fixed.accounting,
            owner_salary: fixed.owner_salary,
            staff_salary: fixed.staff_salary,
            consumables: fixed.consumables,
            other: fixed.other,
        },
        variable_costs: VariableCostsRecord {
            credit_card_fee: variable.credit_card_fee,
            taxes: variable.taxes,
            depreciation: variable.depreciation,
        },
        profit_margin: inputs.profit_margin,
        capacity: CapacityRecord {
            clients_per_hour: capacity.clients_per_hour,
            hours_per_day: capacity.hours_per_day,
            working_days: capacity
                .working_days
                .days()
                .iter()
                .map(|day| day.to_string().to_ascii_lowercase())
                .collect(),
            occupancy_rate: capacity.occupancy_rate,
        },
        market_analysis: MarketAnalysisRecord {
            competitor_price: inputs.market_analysis.competitor_price,
        },
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, InputsYamlError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputsYamlError::NonFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, InputsYamlError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(InputsYamlError::Negative { field, value });
    }
    Ok(value)
}

fn percentage(field: &'static str, value: f64) -> Result<f64, InputsYamlError> {
    let value = finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(InputsYamlError::PercentOutOfRange { field, value });
    }
    Ok(value)
}

fn parse_working_day(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}
