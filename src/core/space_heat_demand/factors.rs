//! This module resolves the multipliers applied to base heating demand for the time of year and
//! for how well a home is insulated.

use crate::core::constants::{
    INSULATION_AVERAGE, INSULATION_EXCELLENT, INSULATION_GOOD, INSULATION_POOR, SEASONAL_AUTUMN,
    SEASONAL_SPRING, SEASONAL_SUMMER, SEASONAL_WINTER,
};
use crate::core::home::InsulationLevel;
use crate::errors::CalculationError;
use chrono::{Datelike, Local, Month};
use strum::{Display, EnumIter};

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

// homes built within this many years are assumed to meet Part L (post-2010) standards
const GOOD_INSULATION_MAX_AGE: i32 = 15;
// homes built within this many years are assumed to date from 1990-2010
const AVERAGE_INSULATION_MAX_AGE: i32 = 35;

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn for_month(month: Month) -> Self {
        match month {
            Month::December | Month::January | Month::February => Season::Winter,
            Month::March | Month::April | Month::May => Season::Spring,
            Month::June | Month::July | Month::August => Season::Summer,
            Month::September | Month::October | Month::November => Season::Autumn,
        }
    }

    pub fn heating_factor(&self) -> f64 {
        match self {
            Season::Winter => SEASONAL_WINTER,
            Season::Spring => SEASONAL_SPRING,
            Season::Summer => SEASONAL_SUMMER,
            Season::Autumn => SEASONAL_AUTUMN,
        }
    }
}

/// Converts a zero-based month index (0 = January, 11 = December) into a month.
pub fn month_from_index(index: u32) -> Result<Month, CalculationError> {
    MONTHS
        .get(index as usize)
        .copied()
        .ok_or(CalculationError::InvalidMonth(index))
}

pub fn current_month() -> Month {
    month_from_index(Local::now().month0()).unwrap_or(Month::January)
}

pub fn seasonal_factor(month: Month) -> f64 {
    Season::for_month(month).heating_factor()
}

pub fn insulation_level_factor(level: InsulationLevel) -> f64 {
    match level {
        InsulationLevel::Poor => INSULATION_POOR,
        InsulationLevel::Average => INSULATION_AVERAGE,
        InsulationLevel::Good => INSULATION_GOOD,
        InsulationLevel::Excellent => INSULATION_EXCELLENT,
    }
}

/// Insulation multiplier for a home, estimated from its age relative to the current year.
///
/// Arguments
/// * `construction_year` - year the home was built, if known
/// * `known_insulation` - surveyed insulation level, which takes precedence over any estimate
pub fn insulation_factor(
    construction_year: Option<i32>,
    known_insulation: Option<InsulationLevel>,
) -> f64 {
    insulation_factor_in_year(construction_year, known_insulation, Local::now().year())
}

pub fn insulation_factor_in_year(
    construction_year: Option<i32>,
    known_insulation: Option<InsulationLevel>,
    current_year: i32,
) -> f64 {
    if let Some(level) = known_insulation {
        return insulation_level_factor(level);
    }

    let Some(construction_year) = construction_year else {
        return INSULATION_AVERAGE;
    };

    match current_year - construction_year {
        age if age <= GOOD_INSULATION_MAX_AGE => INSULATION_GOOD,
        age if age <= AVERAGE_INSULATION_MAX_AGE => INSULATION_AVERAGE,
        _ => INSULATION_POOR,
    }
}
