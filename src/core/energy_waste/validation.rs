use crate::core::common::ValidationResult;
use crate::core::constants::{MAX_OCCUPANTS, MIN_OCCUPANTS};
use crate::core::energy_waste::calculator::{PropertyType, WasteCalculatorInput};
use crate::errors::InvalidWasteInputError;
use serde::{Deserialize, Serialize};

const MAX_MONTHLY_BILL: f64 = 1000.; // £
const MAX_UNIT_RATE: f64 = 100.; // pence per kWh
const MAX_STANDING_CHARGE: f64 = 200.; // pence per day
const MIN_ANNUAL_USAGE: f64 = 100.; // kWh
const MAX_ANNUAL_USAGE: f64 = 20_000.; // kWh

/// Bill figures as entered by a user or read off a bill, any of which may be missing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialWasteCalculatorInput {
    pub monthly_bill: Option<f64>,
    pub unit_rate: Option<f64>,
    pub standing_charge: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub occupants: Option<u32>,
    pub region: Option<String>,
    pub annual_usage: Option<f64>,
}

impl PartialWasteCalculatorInput {
    /// Combines two partial inputs, taking each field from `self` where present and from
    /// `fallback` otherwise.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            monthly_bill: self.monthly_bill.or(fallback.monthly_bill),
            unit_rate: self.unit_rate.or(fallback.unit_rate),
            standing_charge: self.standing_charge.or(fallback.standing_charge),
            property_type: self.property_type.or(fallback.property_type),
            occupants: self.occupants.or(fallback.occupants),
            region: self.region.or(fallback.region),
            annual_usage: self.annual_usage.or(fallback.annual_usage),
        }
    }

    pub fn into_validated(self) -> Result<WasteCalculatorInput, InvalidWasteInputError> {
        let ValidationResult { errors, .. } = validate_input(&self);

        match self {
            Self {
                monthly_bill: Some(monthly_bill),
                unit_rate: Some(unit_rate),
                standing_charge: Some(standing_charge),
                property_type,
                occupants,
                region,
                annual_usage,
            } if errors.is_empty() => Ok(WasteCalculatorInput {
                monthly_bill,
                unit_rate,
                standing_charge,
                property_type,
                occupants,
                region,
                annual_usage,
            }),
            _ => Err(InvalidWasteInputError { errors }),
        }
    }
}

impl From<WasteCalculatorInput> for PartialWasteCalculatorInput {
    fn from(input: WasteCalculatorInput) -> Self {
        Self {
            monthly_bill: Some(input.monthly_bill),
            unit_rate: Some(input.unit_rate),
            standing_charge: Some(input.standing_charge),
            property_type: input.property_type,
            occupants: input.occupants,
            region: input.region,
            annual_usage: input.annual_usage,
        }
    }
}

/// Range checks on bill figures before they are used to calculate waste.
///
/// Every failed check adds a message, so a user can fix all problems in one go. NaN values fail
/// the "greater than" checks.
pub fn validate_input(input: &PartialWasteCalculatorInput) -> ValidationResult {
    let mut errors = vec![];

    match input.monthly_bill {
        Some(monthly_bill) if monthly_bill > 0. => {
            if monthly_bill > MAX_MONTHLY_BILL {
                errors.push("Monthly bill seems unusually high. Please check the amount.");
            }
        }
        _ => errors.push("Monthly bill must be greater than £0"),
    }

    match input.unit_rate {
        Some(unit_rate) if unit_rate > 0. => {
            if unit_rate > MAX_UNIT_RATE {
                errors.push("Unit rate seems unusually high. It should be in pence per kWh (typically 20-35p).");
            }
        }
        _ => errors.push("Unit rate must be greater than 0p"),
    }

    match input.standing_charge {
        None => errors.push("Standing charge is required"),
        Some(standing_charge) if standing_charge < 0. || standing_charge.is_nan() => {
            errors.push("Standing charge cannot be negative")
        }
        Some(standing_charge) if standing_charge > MAX_STANDING_CHARGE => {
            errors.push("Standing charge seems unusually high. It should be in pence per day (typically 30-80p).")
        }
        Some(_) => {}
    }

    if let Some(occupants) = input.occupants {
        if !(MIN_OCCUPANTS..=MAX_OCCUPANTS).contains(&occupants) {
            errors.push("Number of occupants should be between 1 and 15");
        }
    }

    if let Some(annual_usage) = input.annual_usage {
        if !(MIN_ANNUAL_USAGE..=MAX_ANNUAL_USAGE).contains(&annual_usage) {
            errors.push("Annual usage should be between 100 and 20,000 kWh");
        }
    }

    ValidationResult::from_errors(errors.into_iter().map(String::from).collect())
}
