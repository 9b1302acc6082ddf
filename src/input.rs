use crate::core::appliances::Appliance;
use crate::core::energy_waste::bill_data::{extract_inputs_from_bill_data, BillData};
use crate::core::energy_waste::validation::PartialWasteCalculatorInput;
use crate::core::home::HomeProfile;
use crate::core::space_heat_demand::heating_load::EnvironmentalReading;
use crate::core::space_heat_demand::schedule::HeatingRates;
use serde::Deserialize;
use std::io::{BufReader, Read};

pub fn ingest_for_processing(json: impl Read) -> Result<Input, anyhow::Error> {
    let reader = BufReader::new(json);

    let input: Input = serde_json::from_reader(reader)?;

    Ok(input)
}

/// A cost calculation request. Every section is optional; calculations run for whichever
/// sections are present.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Input {
    pub home: Option<HomeProfile>,
    pub environment: Option<EnvironmentalReading>,
    /// outdoor temperatures (ºC) for each hour of the day, starting at midnight
    pub hourly_temperatures: Option<Vec<f64>>,
    pub appliances: Option<Vec<Appliance>>,
    pub bill: Option<PartialWasteCalculatorInput>,
    pub bill_data: Option<BillData>,
    #[serde(default)]
    pub rates: HeatingRates,
}

impl Input {
    /// Bill figures for the waste calculation, with figures given directly taking precedence over
    /// those extracted from bill data. `None` if neither section is present.
    pub fn waste_input(&self) -> Option<PartialWasteCalculatorInput> {
        let extracted = self.bill_data.as_ref().map(extract_inputs_from_bill_data);

        match (self.bill.clone(), extracted) {
            (Some(bill), Some(extracted)) => Some(bill.or(extracted)),
            (bill, extracted) => bill.or(extracted),
        }
    }
}
