use crate::core::constants::{ELECTRICITY_STANDARD_RATE, GAS_STANDARD_RATE};
use crate::core::home::{HeatingType, HomeProfile};
use crate::core::space_heat_demand::heating_load::{
    calculate_advanced_heating_load, HeatingLoadOptions,
};
use crate::core::units::{round_to_fixed, HOURS_PER_DAY};
use crate::errors::CalculationError;
use chrono::Month;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Share of full heating demand expected for each hour of the day in a typical UK home:
/// asleep overnight, up in the morning, partly out during the day, home in the evening.
pub const OCCUPANCY_PATTERN: [f64; HOURS_PER_DAY as usize] = [
    0.6, 0.6, 0.6, 0.6, 0.6, 0.6, // 00:00-05:59
    1.0, 1.0, 1.0, // 06:00-08:59
    0.7, 0.7, 0.7, 0.7, 0.7, 0.7, 0.7, 0.7, // 09:00-16:59
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, // 17:00-22:59
    0.8, // 23:00-23:59
];

/// Hourly heating below this demand (kWh) is not worth switching on for.
const SHOULD_HEAT_THRESHOLD: f64 = 0.1;

/// Flat prices (£/kWh) used to cost heating energy.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeatingRates {
    #[serde(default = "default_gas_rate")]
    pub gas: f64,
    #[serde(default = "default_electricity_rate")]
    pub electricity: f64,
}

fn default_gas_rate() -> f64 {
    GAS_STANDARD_RATE
}

fn default_electricity_rate() -> f64 {
    ELECTRICITY_STANDARD_RATE
}

impl Default for HeatingRates {
    fn default() -> Self {
        Self {
            gas: GAS_STANDARD_RATE,
            electricity: ELECTRICITY_STANDARD_RATE,
        }
    }
}

impl HeatingRates {
    /// Gas heating is costed at the gas rate; every other system runs on electricity.
    pub fn for_heating_type(&self, heating_type: &HeatingType) -> f64 {
        match heating_type {
            HeatingType::Gas => self.gas,
            HeatingType::Electricity
            | HeatingType::HeatPump
            | HeatingType::Mixed
            | HeatingType::Unknown(_) => self.electricity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyHeating {
    pub hour: u32,
    pub temperature: f64,
    #[serde(rename = "heatingKWh")]
    pub heating_kwh: f64,
    pub cost: f64,
    pub should_heat: bool,
}

/// Generate a 24-hour heating plan from hourly outdoor temperatures.
///
/// Hours missing from `temperatures` take the first hour's temperature; any beyond the 24th are
/// ignored.
#[instrument(skip_all)]
pub fn generate_heating_schedule(
    temperatures: &[f64],
    home: &HomeProfile,
    rates: &HeatingRates,
    month: Month,
) -> Result<Vec<HourlyHeating>, CalculationError> {
    let first_temperature = *temperatures
        .first()
        .ok_or(CalculationError::EmptyTemperatureProfile)?;

    let options = HeatingLoadOptions {
        construction_year: home.construction_year,
        insulation_level: home.insulation_level,
        occupants: Some(home.occupants),
        month: Some(month),
        ..Default::default()
    };
    let cost_per_kwh = rates.for_heating_type(&home.heating_type);

    Ok((0..HOURS_PER_DAY)
        .map(|hour| {
            let temperature = temperatures
                .get(hour as usize)
                .copied()
                .unwrap_or(first_temperature);
            let base_heating = calculate_advanced_heating_load(
                temperature,
                &home.home_type,
                &home.heating_type,
                &options,
            );
            let heating_kwh = base_heating * OCCUPANCY_PATTERN[hour as usize];
            let cost = heating_kwh * cost_per_kwh;

            HourlyHeating {
                hour,
                temperature,
                heating_kwh: round_to_fixed(heating_kwh, 2),
                cost: round_to_fixed(cost, 2),
                should_heat: heating_kwh > SHOULD_HEAT_THRESHOLD,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::home::{HomeType, InsulationLevel};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn home() -> HomeProfile {
        HomeProfile {
            postcode: "B33 8TH".to_string(),
            home_type: HomeType::SemiDetached,
            heating_type: HeatingType::Gas,
            occupants: 2,
            construction_year: None,
            insulation_level: Some(InsulationLevel::Average),
        }
    }

    #[rstest]
    fn should_weight_load_by_occupancy_pattern(home: HomeProfile) {
        let temperatures = [5.; 24];
        let schedule =
            generate_heating_schedule(&temperatures, &home, &HeatingRates::default(), Month::January)
                .unwrap();
        let full_load = calculate_advanced_heating_load(
            5.,
            &home.home_type,
            &home.heating_type,
            &HeatingLoadOptions {
                insulation_level: Some(InsulationLevel::Average),
                occupants: Some(2),
                month: Some(Month::January),
                ..Default::default()
            },
        );

        assert_eq!(schedule.len(), 24);
        for (hour, entry) in schedule.iter().enumerate() {
            assert_eq!(entry.hour, hour as u32);
            assert_eq!(
                entry.heating_kwh,
                round_to_fixed(full_load * OCCUPANCY_PATTERN[hour], 2)
            );
            assert_eq!(
                entry.cost,
                round_to_fixed(full_load * OCCUPANCY_PATTERN[hour] * 0.07, 2)
            );
            assert!(entry.should_heat);
        }
        assert!(schedule[7].heating_kwh > schedule[3].heating_kwh);
        assert!(schedule[12].heating_kwh < schedule[18].heating_kwh);
    }

    #[rstest]
    fn should_use_first_temperature_for_missing_hours(home: HomeProfile) {
        let schedule = generate_heating_schedule(
            &[2., 3., 4.],
            &home,
            &HeatingRates::default(),
            Month::February,
        )
        .unwrap();

        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule[1].temperature, 3.);
        assert_eq!(schedule[2].temperature, 4.);
        assert!(schedule[3..].iter().all(|entry| entry.temperature == 2.));
    }

    #[rstest]
    fn should_ignore_temperatures_beyond_a_day(home: HomeProfile) {
        let schedule =
            generate_heating_schedule(&[1.; 30], &home, &HeatingRates::default(), Month::March)
                .unwrap();

        assert_eq!(schedule.len(), 24);
    }

    #[rstest]
    fn should_fail_without_temperatures(home: HomeProfile) {
        assert_eq!(
            generate_heating_schedule(&[], &home, &HeatingRates::default(), Month::March),
            Err(CalculationError::EmptyTemperatureProfile)
        );
    }

    #[rstest]
    fn should_not_heat_on_a_warm_day(home: HomeProfile) {
        let schedule =
            generate_heating_schedule(&[18.; 24], &home, &HeatingRates::default(), Month::July)
                .unwrap();

        assert!(schedule
            .iter()
            .all(|entry| !entry.should_heat && entry.heating_kwh == 0. && entry.cost == 0.));
    }

    #[rstest]
    fn should_cost_non_gas_heating_at_electricity_rate(home: HomeProfile) {
        let heat_pump_home = HomeProfile {
            heating_type: HeatingType::HeatPump,
            ..home
        };
        let rates = HeatingRates {
            gas: 0.05,
            electricity: 0.30,
        };
        let schedule =
            generate_heating_schedule(&[0.; 24], &heat_pump_home, &rates, Month::December)
                .unwrap();
        let load = calculate_advanced_heating_load(
            0.,
            &HomeType::SemiDetached,
            &HeatingType::HeatPump,
            &HeatingLoadOptions {
                insulation_level: Some(InsulationLevel::Average),
                occupants: Some(2),
                month: Some(Month::December),
                ..Default::default()
            },
        );

        assert_eq!(
            schedule[20].cost,
            round_to_fixed(load * 1.0 * 0.30, 2)
        );
    }

    #[rstest]
    fn should_deserialize_partial_rates_with_defaults() {
        let rates: HeatingRates = serde_json::from_str(r#"{"gas": 0.06}"#).unwrap();

        assert_eq!(
            rates,
            HeatingRates {
                gas: 0.06,
                electricity: 0.28
            }
        );
    }
}
