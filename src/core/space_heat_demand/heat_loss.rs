//! This module provides a simple steady-state estimate of fabric and ventilation heat loss for a
//! home, broken down by building element.

use crate::compare_floats::max_of_2;
use crate::core::constants::{AIR_HEAT_CAPACITY, CEILING_HEIGHT, INTERNAL_TEMPERATURE};
use crate::core::home::HomeType;
use crate::core::units::{round_to_fixed, watts_to_kwh_per_day};
use serde::Serialize;
use strum::{Display, EnumIter};

/// Building regulation era, which determines typical U-values of the building fabric.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum ConstructionEra {
    /// 2010 onwards (Part L 2010)
    Modern,
    /// 1990 to 2009
    Late20thCentury,
    /// 1970 to 1989
    Post1970,
    /// before 1970
    Pre1970,
}

impl ConstructionEra {
    pub fn from_year(construction_year: i32) -> Self {
        match construction_year {
            year if year >= 2010 => ConstructionEra::Modern,
            year if year >= 1990 => ConstructionEra::Late20thCentury,
            year if year >= 1970 => ConstructionEra::Post1970,
            _ => ConstructionEra::Pre1970,
        }
    }

    /// Typical U-values (W/m2.K) for each element
    pub fn u_values(&self) -> EnvelopeValues {
        match self {
            ConstructionEra::Modern => EnvelopeValues::new(0.18, 0.13, 0.15, 1.4),
            ConstructionEra::Late20thCentury => EnvelopeValues::new(0.35, 0.20, 0.25, 2.0),
            ConstructionEra::Post1970 => EnvelopeValues::new(1.0, 0.60, 0.70, 3.0),
            ConstructionEra::Pre1970 => EnvelopeValues::new(1.5, 1.20, 1.00, 4.8),
        }
    }
}

/// A value for each element of a building envelope, such as a U-value or an area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopeValues {
    pub walls: f64,
    pub roof: f64,
    pub floor: f64,
    pub windows: f64,
}

impl EnvelopeValues {
    const fn new(walls: f64, roof: f64, floor: f64, windows: f64) -> Self {
        Self {
            walls,
            roof,
            floor,
            windows,
        }
    }
}

/// Approximate envelope areas (m2) for a home type. Unknown home types are sized as terraced.
pub fn envelope_areas(home_type: &HomeType) -> EnvelopeValues {
    match home_type {
        HomeType::Flat => EnvelopeValues::new(40., 50., 50., 10.),
        HomeType::Terraced | HomeType::Unknown(_) => EnvelopeValues::new(80., 70., 70., 15.),
        HomeType::SemiDetached => EnvelopeValues::new(120., 90., 90., 20.),
        HomeType::Detached => EnvelopeValues::new(180., 120., 120., 30.),
    }
}

/// Heat loss in kWh/day for each element, rounded to 2 decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatLossBreakdown {
    pub walls: f64,
    pub roof: f64,
    pub floor: f64,
    pub windows: f64,
    pub ventilation: f64,
    pub total: f64,
}

impl HeatLossBreakdown {
    /// Element names and losses in output order, ending with the total.
    pub fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("walls", self.walls),
            ("roof", self.roof),
            ("floor", self.floor),
            ("windows", self.windows),
            ("ventilation", self.ventilation),
            ("total", self.total),
        ]
    }
}

/// Calculate daily heat loss through the building fabric and by ventilation.
///
/// Arguments
/// * `home_type` - built form, which sets the approximate envelope areas
/// * `construction_year` - year the home was built, which sets the U-values
/// * `temperature` - outdoor temperature in ºC; no loss is counted when it is at or above 19ºC
pub fn calculate_heat_loss(
    home_type: &HomeType,
    construction_year: i32,
    temperature: f64,
) -> HeatLossBreakdown {
    let u_values = ConstructionEra::from_year(construction_year).u_values();
    let areas = envelope_areas(home_type);
    let temp_diff = max_of_2(0., INTERNAL_TEMPERATURE - temperature);

    let walls = watts_to_kwh_per_day(u_values.walls * areas.walls * temp_diff);
    let roof = watts_to_kwh_per_day(u_values.roof * areas.roof * temp_diff);
    let floor = watts_to_kwh_per_day(u_values.floor * areas.floor * temp_diff);
    let windows = watts_to_kwh_per_day(u_values.windows * areas.windows * temp_diff);

    // one air change per hour
    let volume = areas.floor * CEILING_HEIGHT;
    let ventilation = watts_to_kwh_per_day(AIR_HEAT_CAPACITY * volume * temp_diff);

    let total = walls + roof + floor + windows + ventilation;

    HeatLossBreakdown {
        walls: round_to_fixed(walls, 2),
        roof: round_to_fixed(roof, 2),
        floor: round_to_fixed(floor, 2),
        windows: round_to_fixed(windows, 2),
        ventilation: round_to_fixed(ventilation, 2),
        total: round_to_fixed(total, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(2024, ConstructionEra::Modern)]
    #[case(2010, ConstructionEra::Modern)]
    #[case(2009, ConstructionEra::Late20thCentury)]
    #[case(1990, ConstructionEra::Late20thCentury)]
    #[case(1989, ConstructionEra::Post1970)]
    #[case(1970, ConstructionEra::Post1970)]
    #[case(1969, ConstructionEra::Pre1970)]
    fn should_bracket_construction_year(#[case] year: i32, #[case] expected: ConstructionEra) {
        assert_eq!(ConstructionEra::from_year(year), expected);
    }

    #[rstest]
    fn should_calc_heat_loss_for_modern_flat() {
        // 14ºC difference; walls 0.18 * 40 * 14 = 100.8W => 2.4192 kWh/day
        let breakdown = calculate_heat_loss(&HomeType::Flat, 2015, 5.);

        assert_eq!(breakdown.walls, 2.42);
        assert_eq!(breakdown.roof, 2.18);
        assert_eq!(breakdown.floor, 2.52);
        assert_eq!(breakdown.windows, 4.7);
        assert_eq!(breakdown.ventilation, 13.31);
        assert_relative_eq!(breakdown.total, 25.13);
    }

    #[rstest]
    fn should_lose_less_heat_from_newer_smaller_home() {
        let modern_flat = calculate_heat_loss(&HomeType::Flat, 2015, 5.);
        let old_detached = calculate_heat_loss(&HomeType::Detached, 1960, 5.);

        assert!(modern_flat.total < old_detached.total);
        for ((element, newer), (_, older)) in modern_flat
            .components()
            .iter()
            .zip(old_detached.components().iter())
        {
            assert!(newer < older, "{element} loss should be lower for the flat");
        }
    }

    #[rstest]
    #[case(19.)]
    #[case(25.)]
    fn should_have_no_loss_when_outside_is_warmer(#[case] temperature: f64) {
        let breakdown = calculate_heat_loss(&HomeType::Detached, 1900, temperature);

        assert!(breakdown.components().iter().all(|(_, loss)| *loss == 0.));
    }

    #[rstest]
    fn should_size_unknown_home_as_terraced() {
        assert_eq!(
            calculate_heat_loss(&HomeType::Unknown("houseboat".to_string()), 1995, 0.),
            calculate_heat_loss(&HomeType::Terraced, 1995, 0.)
        );
    }

    #[rstest]
    fn should_total_components_within_rounding() {
        let breakdown = calculate_heat_loss(&HomeType::SemiDetached, 1980, -2.);
        let sum_of_parts = breakdown.walls
            + breakdown.roof
            + breakdown.floor
            + breakdown.windows
            + breakdown.ventilation;

        assert!((breakdown.total - sum_of_parts).abs() <= 0.03);
    }
}
