mod compare_floats;
pub mod core;
pub mod errors;
pub mod input;
pub mod output;

#[cfg(test)]
mod tests;

use crate::core::appliances::{calculate_appliance_consumption, ApplianceConsumption};
use crate::core::common::ValidationResult;
use crate::core::daily_cost::{estimate_household_cost, HouseholdCostEstimate};
use crate::core::energy_waste::calculator::{calculate_energy_waste, WasteCalculatorResult};
use crate::core::home::validate_home_profile;
use crate::core::postcode::sanitize_postcode;
use crate::core::space_heat_demand::factors::current_month;
use crate::core::space_heat_demand::heat_loss::{calculate_heat_loss, HeatLossBreakdown};
use crate::core::space_heat_demand::heating_load::{
    calculate_advanced_heating_load, EnvironmentalReading,
};
use crate::core::space_heat_demand::schedule::{generate_heating_schedule, HourlyHeating};
use crate::errors::{CalculationError, CostSaverError, InvalidWasteInputError, OutputError};
use crate::input::{ingest_for_processing, Input};
use crate::output::Output;
use bitflags::bitflags;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, info, instrument, warn};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ProjectFlags: u8 {
        /// Only validate the home profile and bill figures, without calculating or writing output.
        const VALIDATE_ONLY = 0b1;
        /// Also write out the heat loss breakdown.
        const DETAILED_OUTPUT = 0b10;
    }
}

/// Everything calculated for a project. Sections are only present when the input had the data
/// needed to calculate them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    /// The home's postcode in canonical "OUTWARD INWARD" form, if it is a valid UK postcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_validation: Option<ValidationResult>,
    #[serde(rename = "heatingLoadKWh", skip_serializing_if = "Option::is_none")]
    pub heating_load_kwh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_loss: Option<HeatLossBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<HourlyHeating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appliances: Option<ApplianceConsumption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub household_cost: Option<HouseholdCostEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_validation: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste: Option<WasteCalculatorResult>,
}

#[instrument(skip_all)]
pub fn run_project(
    input: impl Read,
    output: impl Output,
    flags: &ProjectFlags,
) -> Result<CalculationResults, CostSaverError> {
    let input = ingest_for_processing(input)?;

    let results = calculate(&input, flags)?;

    if !flags.contains(ProjectFlags::VALIDATE_ONLY) && !output.is_noop() {
        write_outputs(&output, &results, flags).map_err(OutputError::new)?;
    }

    Ok(results)
}

fn calculate(input: &Input, flags: &ProjectFlags) -> Result<CalculationResults, CalculationError> {
    let validate_only = flags.contains(ProjectFlags::VALIDATE_ONLY);
    let mut results = CalculationResults::default();

    if let Some(home) = &input.home {
        let validation = validate_home_profile(home);
        if !validation.valid {
            warn!(errors = ?validation.errors, "Home profile failed validation");
        }
        results.postcode = sanitize_postcode(&home.postcode);
        results.home_validation = Some(validation);
    }

    if let Some(waste_input) = input.waste_input() {
        match waste_input.into_validated() {
            Ok(waste_input) => {
                results.waste_validation = Some(ValidationResult::from_errors(vec![]));
                if !validate_only {
                    results.waste = Some(calculate_energy_waste(&waste_input));
                }
            }
            Err(InvalidWasteInputError { errors }) => {
                warn!(?errors, "Bill figures failed validation, not calculating waste");
                results.waste_validation = Some(ValidationResult::from_errors(errors));
            }
        }
    }

    if validate_only {
        return Ok(results);
    }

    if let (Some(home), Some(environment)) = (&input.home, &input.environment) {
        let options = environment.heating_load_options(home)?;
        results.heating_load_kwh = Some(calculate_advanced_heating_load(
            environment.temperature,
            &home.home_type,
            &home.heating_type,
            &options,
        ));

        if let Some(construction_year) = home.construction_year {
            results.heat_loss = Some(calculate_heat_loss(
                &home.home_type,
                construction_year,
                environment.temperature,
            ));
        }
    }

    if let (Some(home), Some(temperatures)) = (&input.home, &input.hourly_temperatures) {
        let month = match input
            .environment
            .as_ref()
            .map(EnvironmentalReading::month)
            .transpose()?
            .flatten()
        {
            Some(month) => month,
            None => {
                let month = current_month();
                debug!("No month given for heating schedule, using current month {month:?}");
                month
            }
        };
        results.schedule = Some(generate_heating_schedule(
            temperatures,
            home,
            &input.rates,
            month,
        )?);
    }

    if let Some(appliances) = &input.appliances {
        results.appliances = Some(calculate_appliance_consumption(appliances));
    }

    if let Some(home) = &input.home {
        let heating_kwh = match (results.heating_load_kwh, &results.schedule) {
            (Some(heating_load_kwh), _) => heating_load_kwh,
            (None, Some(schedule)) => schedule.iter().map(|hour| hour.heating_kwh).sum(),
            (None, None) => {
                debug!("No temperatures given, costing the household without space heating");
                0.
            }
        };
        results.household_cost = Some(estimate_household_cost(home, heating_kwh, &input.rates));
    }

    Ok(results)
}

fn write_outputs(
    output: &impl Output,
    results: &CalculationResults,
    flags: &ProjectFlags,
) -> anyhow::Result<()> {
    write_results_file(output, "results", results)?;

    if let Some(schedule) = &results.schedule {
        write_schedule_file(output, "schedule", schedule)?;
    }

    if flags.contains(ProjectFlags::DETAILED_OUTPUT) {
        if let Some(heat_loss) = &results.heat_loss {
            write_heat_loss_file(output, "heat_loss", heat_loss)?;
        }
    }

    Ok(())
}

fn write_results_file(
    output: &impl Output,
    output_key: &str,
    results: &CalculationResults,
) -> anyhow::Result<()> {
    info!("writing out to {output_key}");
    let mut writer = output.writer_for_location_key(output_key, "json")?;

    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;

    Ok(())
}

fn write_schedule_file(
    output: &impl Output,
    output_key: &str,
    schedule: &[HourlyHeating],
) -> anyhow::Result<()> {
    info!("writing out to {output_key}");
    let writer = output.writer_for_location_key(output_key, "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record([
        "Hour",
        "Outdoor temperature",
        "Heating energy",
        "Cost",
        "Heating on",
    ])?;
    writer.write_record(["[hour]", "[deg C]", "[kWh]", "[GBP]", "[bool]"])?;

    for HourlyHeating {
        hour,
        temperature,
        heating_kwh,
        cost,
        should_heat,
    } in schedule
    {
        writer.write_record([
            hour.to_string(),
            temperature.to_string(),
            heating_kwh.to_string(),
            cost.to_string(),
            should_heat.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

fn write_heat_loss_file(
    output: &impl Output,
    output_key: &str,
    heat_loss: &HeatLossBreakdown,
) -> anyhow::Result<()> {
    info!("writing out to {output_key}");
    let writer = output.writer_for_location_key(output_key, "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(["Element", "Heat loss"])?;
    writer.write_record(["", "[kWh/day]"])?;

    for (element, loss) in heat_loss.components() {
        writer.write_record([element.to_string(), loss.to_string()])?;
    }

    writer.flush()?;

    Ok(())
}
