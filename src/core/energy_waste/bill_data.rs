use crate::core::energy_waste::validation::PartialWasteCalculatorInput;
use crate::core::units::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// Figures read off an energy bill by the bill extractor. Any of them may be missing.
///
/// Extra fields the extractor attaches (extraction date, confidence, raw text) are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillData {
    pub supplier: Option<String>,
    pub account_number: Option<String>,
    pub tariff_name: Option<String>,
    pub electricity_usage: Option<FuelUsage>,
    pub gas_usage: Option<FuelUsage>,
    pub standing_charge: Option<StandingCharges>,
    /// in £
    pub total_cost: Option<f64>,
}

/// Usage of one fuel over the billing period.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelUsage {
    pub kwh: Option<f64>,
    /// in £
    pub cost: Option<f64>,
    /// in pence per kWh
    pub rate: Option<f64>,
}

/// in pence per day
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingCharges {
    pub electricity: Option<f64>,
    pub gas: Option<f64>,
}

/// Zero and NaN are what the extractor leaves when it could not read a figure.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|value| *value != 0. && !value.is_nan())
}

/// Map extracted bill figures onto waste calculator input, preferring electricity figures over
/// gas ones. The bill is assumed to cover a month, so annual usage is twelve times the
/// electricity used.
pub fn extract_inputs_from_bill_data(bill_data: &BillData) -> PartialWasteCalculatorInput {
    let electricity = bill_data.electricity_usage.unwrap_or_default();
    let gas = bill_data.gas_usage.unwrap_or_default();
    let standing_charge = bill_data.standing_charge.unwrap_or_default();

    PartialWasteCalculatorInput {
        monthly_bill: present(bill_data.total_cost),
        unit_rate: present(electricity.rate).or(present(gas.rate)),
        standing_charge: present(standing_charge.electricity).or(present(standing_charge.gas)),
        annual_usage: present(electricity.kwh).map(|kwh| kwh * MONTHS_PER_YEAR as f64),
        ..Default::default()
    }
}
