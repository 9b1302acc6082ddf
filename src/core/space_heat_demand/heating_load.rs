use crate::compare_floats::{clamp_between, max_of_2, min_of_2};
use crate::core::constants::{
    DEFAULT_HUMIDITY, DEFAULT_OCCUPANTS, DEFAULT_WIND_SPEED, DEMAND_DETACHED, DEMAND_FLAT,
    DEMAND_SEMI_DETACHED, DEMAND_TERRACED, EFFICIENCY_ELECTRIC_HEATER, EFFICIENCY_GAS_BOILER,
    EFFICIENCY_HEAT_PUMP, EFFICIENCY_MIXED, HEATING_BASE_TEMPERATURE,
};
use crate::core::home::{HeatingType, HomeProfile, HomeType, InsulationLevel};
use crate::core::space_heat_demand::factors::{
    current_month, insulation_factor, month_from_index, seasonal_factor,
};
use crate::errors::CalculationError;
use chrono::Month;
use serde::{Deserialize, Serialize};
use tracing::debug;

// each occupant beyond two reduces demand by this fraction through body heat
const OCCUPANCY_REDUCTION_PER_PERSON: f64 = 0.05;
const MIN_OCCUPANCY_ADJUSTMENT: f64 = 0.7;
// fractional increase in heat loss per m/s of wind
const WIND_CHILL_PER_METRE_PER_SECOND: f64 = 0.02;
const MAX_WIND_ADJUSTMENT: f64 = 1.3;
// fractional reduction in demand per % relative humidity above 50%
const HUMIDITY_EFFECT_PER_PERCENT: f64 = 0.001;
const MIN_HUMIDITY_ADJUSTMENT: f64 = 0.9;
const MAX_HUMIDITY_ADJUSTMENT: f64 = 1.1;

/// Weather conditions at the home, as supplied by a weather service.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentalReading {
    /// Outdoor air temperature in ºC
    pub temperature: f64,
    /// in m/s
    pub wind_speed: Option<f64>,
    /// relative humidity in %
    pub humidity: Option<f64>,
    /// zero-based month index (0 = January)
    pub month: Option<u32>,
}

impl EnvironmentalReading {
    pub fn month(&self) -> Result<Option<Month>, CalculationError> {
        self.month.map(month_from_index).transpose()
    }

    pub fn heating_load_options(
        &self,
        home: &HomeProfile,
    ) -> Result<HeatingLoadOptions, CalculationError> {
        Ok(HeatingLoadOptions {
            construction_year: home.construction_year,
            insulation_level: home.insulation_level,
            occupants: Some(home.occupants),
            month: self.month()?,
            wind_speed: self.wind_speed,
            humidity: self.humidity,
        })
    }
}

/// Optional adjustments to heating demand. Anything left as `None` takes its default: two
/// occupants, the current month, still air and 75% humidity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeatingLoadOptions {
    pub construction_year: Option<i32>,
    pub insulation_level: Option<InsulationLevel>,
    pub occupants: Option<u32>,
    pub month: Option<Month>,
    pub wind_speed: Option<f64>,
    pub humidity: Option<f64>,
}

/// Heat demand in kWh for each degree-day below the base temperature, before adjustments.
pub fn base_heating_demand(home_type: &HomeType) -> f64 {
    match home_type {
        HomeType::Flat => DEMAND_FLAT,
        HomeType::Terraced => DEMAND_TERRACED,
        HomeType::SemiDetached => DEMAND_SEMI_DETACHED,
        HomeType::Detached => DEMAND_DETACHED,
        HomeType::Unknown(other) => {
            debug!("Unrecognised home type '{other}', using terraced heating demand");
            DEMAND_TERRACED
        }
    }
}

pub fn heating_system_efficiency(heating_type: &HeatingType) -> f64 {
    match heating_type {
        HeatingType::Gas => EFFICIENCY_GAS_BOILER,
        HeatingType::Electricity => EFFICIENCY_ELECTRIC_HEATER,
        HeatingType::HeatPump => EFFICIENCY_HEAT_PUMP,
        HeatingType::Mixed => EFFICIENCY_MIXED,
        HeatingType::Unknown(other) => {
            debug!("Unrecognised heating type '{other}', using mixed system efficiency");
            EFFICIENCY_MIXED
        }
    }
}

/// Calculate the energy input (in kWh) the heating system needs for a degree-day based heating
/// demand, adjusted for insulation, season, occupancy, wind and humidity.
///
/// Arguments
/// * `temperature` - outdoor temperature in ºC
/// * `home_type` - built form of the home
/// * `heating_type` - main heating system, whose efficiency converts delivered heat to input energy
/// * `options` - further adjustments, see [`HeatingLoadOptions`]
pub fn calculate_advanced_heating_load(
    temperature: f64,
    home_type: &HomeType,
    heating_type: &HeatingType,
    options: &HeatingLoadOptions,
) -> f64 {
    let occupants = options.occupants.unwrap_or(DEFAULT_OCCUPANTS);
    let wind_speed = options.wind_speed.unwrap_or(DEFAULT_WIND_SPEED);
    let humidity = options.humidity.unwrap_or(DEFAULT_HUMIDITY);

    if temperature >= HEATING_BASE_TEMPERATURE {
        return 0.;
    }

    let degree_days = HEATING_BASE_TEMPERATURE - temperature;

    let month = options.month.unwrap_or_else(|| {
        let month = current_month();
        debug!("No month given for heating load, using current month {month:?}");
        month
    });

    let mut base_demand = base_heating_demand(home_type);
    base_demand *= insulation_factor(options.construction_year, options.insulation_level);
    base_demand *= seasonal_factor(month);

    let occupancy_adjustment = 1. - ((occupants as f64 - 2.) * OCCUPANCY_REDUCTION_PER_PERSON);
    base_demand *= max_of_2(MIN_OCCUPANCY_ADJUSTMENT, occupancy_adjustment);

    if wind_speed > 0. {
        let wind_factor = 1. + (wind_speed * WIND_CHILL_PER_METRE_PER_SECOND);
        base_demand *= min_of_2(MAX_WIND_ADJUSTMENT, wind_factor);
    }

    // higher humidity feels warmer
    if humidity > 0. {
        let humidity_factor = 1. - ((humidity - 50.) * HUMIDITY_EFFECT_PER_PERCENT);
        base_demand *= clamp_between(
            humidity_factor,
            MIN_HUMIDITY_ADJUSTMENT,
            MAX_HUMIDITY_ADJUSTMENT,
        );
    }

    let heating_kwh = degree_days * base_demand;
    let heating_kwh = heating_kwh / heating_system_efficiency(heating_type);

    max_of_2(0., heating_kwh)
}
