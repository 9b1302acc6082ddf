//! This module estimates what a household spends on energy in a day, projects that over a month
//! and checks whether a different tariff would be cheaper.

use crate::core::constants::{
    AVERAGE_MONTHLY_HOUSEHOLD_BILL, BASE_CONSUMPTION_DETACHED, BASE_CONSUMPTION_FLAT,
    BASE_CONSUMPTION_PER_EXTRA_OCCUPANT, BASE_CONSUMPTION_SEMI_DETACHED,
    BASE_CONSUMPTION_TERRACED, MIXED_HEATING_GAS_SHARE, STANDING_CHARGE_ELECTRICITY,
    STANDING_CHARGE_GAS, STANDING_CHARGE_MIXED,
};
use crate::core::home::{HeatingType, HomeProfile, HomeType};
use crate::core::space_heat_demand::schedule::HeatingRates;
use crate::core::units::round_to_fixed;
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

const DAYS_PER_PROJECTED_MONTH: f64 = 30.5;
const SAVING_OPPORTUNITY_SHARE: f64 = 0.15;
/// How far above the average monthly bill a household must be before a tariff switch is suggested.
const TARIFF_SWITCH_BILL_MARGIN: f64 = 1.1;

// switching is only recommended above these percentage savings
const SWITCH_THRESHOLD_PERCENTAGE: f64 = 10.;
const HIGH_CONFIDENCE_PERCENTAGE: f64 = 15.;

const SAVING_PLAN: [&str; 4] = [
    "Lower thermostat by 1°C to save £12/month",
    "Use timer controls to avoid heating empty rooms",
    "Switch to LED bulbs to save £5/month on electricity",
    "Wash clothes at 30°C instead of 40°C to save £8/month",
];

/// Everyday (non-heating) electricity use in kWh per day.
///
/// Homes of an unrecognised type use terraced-house figures.
pub fn calculate_base_consumption(home_type: &HomeType, occupants: u32) -> f64 {
    let base = match home_type {
        HomeType::Flat => BASE_CONSUMPTION_FLAT,
        HomeType::Terraced | HomeType::Unknown(_) => BASE_CONSUMPTION_TERRACED,
        HomeType::SemiDetached => BASE_CONSUMPTION_SEMI_DETACHED,
        HomeType::Detached => BASE_CONSUMPTION_DETACHED,
    };
    let occupant_factor = 1. + (occupants as f64 - 1.) * BASE_CONSUMPTION_PER_EXTRA_OCCUPANT;

    base * occupant_factor
}

/// A day's energy costs, all in £.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCost {
    pub heating_cost: f64,
    pub electricity_cost: f64,
    pub standing_charge: f64,
    pub total_cost: f64,
}

fn daily_standing_charge(heating_type: &HeatingType) -> f64 {
    match heating_type {
        HeatingType::Gas => STANDING_CHARGE_GAS,
        HeatingType::Electricity | HeatingType::HeatPump | HeatingType::Unknown(_) => {
            STANDING_CHARGE_ELECTRICITY
        }
        HeatingType::Mixed => STANDING_CHARGE_MIXED,
    }
}

fn heating_cost(heating_kwh: f64, heating_type: &HeatingType, rates: &HeatingRates) -> f64 {
    match heating_type {
        HeatingType::Gas => heating_kwh * rates.gas,
        HeatingType::Electricity | HeatingType::HeatPump | HeatingType::Unknown(_) => {
            heating_kwh * rates.electricity
        }
        HeatingType::Mixed => {
            heating_kwh * MIXED_HEATING_GAS_SHARE * rates.gas
                + heating_kwh * (1. - MIXED_HEATING_GAS_SHARE) * rates.electricity
        }
    }
}

/// Cost a day of everyday electricity use plus space heating.
///
/// Arguments
/// * `base_consumption_kwh` - non-heating electricity use, always costed at the electricity rate
/// * `heating_kwh` - energy delivered by the heating system
/// * `heating_type` - sets the rate heating is costed at and the standing charge
/// * `rates` - prices in £/kWh
pub fn calculate_daily_cost(
    base_consumption_kwh: f64,
    heating_kwh: f64,
    heating_type: &HeatingType,
    rates: &HeatingRates,
) -> DailyCost {
    let standing_charge = daily_standing_charge(heating_type);
    let electricity_cost = base_consumption_kwh * rates.electricity;
    let heating_cost = heating_cost(heating_kwh, heating_type, rates);
    let total_cost = heating_cost + electricity_cost + standing_charge;

    DailyCost {
        heating_cost: round_to_fixed(heating_cost, 2),
        electricity_cost: round_to_fixed(electricity_cost, 2),
        standing_charge: round_to_fixed(standing_charge, 2),
        total_cost: round_to_fixed(total_cost, 2),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    /// in £
    pub projected_monthly_bill: f64,
    /// in £
    pub saving_opportunity: f64,
    pub saving_plan: Vec<String>,
    /// Whether the projected bill is far enough above average to be worth shopping around.
    pub tariff_switch_opportunity: bool,
    pub upgrade_recommendations: Vec<String>,
}

pub fn calculate_monthly_projection(
    average_daily_cost: f64,
    home: &HomeProfile,
) -> MonthlyProjection {
    let projected_monthly_bill = average_daily_cost * DAYS_PER_PROJECTED_MONTH;
    let saving_opportunity = projected_monthly_bill * SAVING_OPPORTUNITY_SHARE;

    MonthlyProjection {
        projected_monthly_bill: round_to_fixed(projected_monthly_bill, 2),
        saving_opportunity: round_to_fixed(saving_opportunity, 2),
        saving_plan: SAVING_PLAN.iter().map(ToString::to_string).collect(),
        tariff_switch_opportunity: projected_monthly_bill
            > AVERAGE_MONTHLY_HOUSEHOLD_BILL * TARIFF_SWITCH_BILL_MARGIN,
        upgrade_recommendations: upgrade_recommendations(home),
    }
}

fn upgrade_recommendations(home: &HomeProfile) -> Vec<String> {
    let mut recommendations = vec![];

    if matches!(home.home_type, HomeType::Detached | HomeType::SemiDetached) {
        recommendations.push("Loft insulation upgrade (£400-600, saves £200/year)".to_string());
    }
    if matches!(home.heating_type, HeatingType::Gas | HeatingType::Electricity) {
        recommendations
            .push("Consider heat pump (£7,000 grant available, saves 30-50%)".to_string());
    }
    recommendations.push("Smart thermostat (£150-250, saves 10-15%)".to_string());

    recommendations
}

/// Tariffs a household could move to, in the order they are preferred when equally cheap.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq, Serialize)]
pub enum Tariff {
    #[serde(rename = "Standard Variable")]
    #[strum(serialize = "Standard Variable")]
    StandardVariable,
    #[serde(rename = "Fixed 1 Year")]
    #[strum(serialize = "Fixed 1 Year")]
    FixedOneYear,
    #[serde(rename = "Fixed 2 Year")]
    #[strum(serialize = "Fixed 2 Year")]
    FixedTwoYear,
    #[serde(rename = "Economy 7")]
    #[strum(serialize = "Economy 7")]
    EconomySeven,
}

impl Tariff {
    /// The monthly bill on this tariff for a household currently paying `current_monthly_bill`
    /// on a standard variable tariff. Economy 7 only helps homes heated by electricity.
    pub fn monthly_cost(&self, current_monthly_bill: f64, heating_type: &HeatingType) -> f64 {
        let multiplier = match (self, heating_type) {
            (Tariff::StandardVariable, _) => 1.,
            (Tariff::FixedOneYear, _) => 0.92,
            (Tariff::FixedTwoYear, _) => 0.88,
            (Tariff::EconomySeven, HeatingType::Electricity) => 0.85,
            (Tariff::EconomySeven, _) => 1.,
        };

        current_monthly_bill * multiplier
    }
}

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    fn from_saving_percentage(saving_percentage: f64) -> Self {
        if saving_percentage > HIGH_CONFIDENCE_PERCENTAGE {
            Confidence::High
        } else if saving_percentage > SWITCH_THRESHOLD_PERCENTAGE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSwitchCheck {
    pub should_switch: bool,
    pub current_estimated_tariff: Tariff,
    pub recommended_tariff: Tariff,
    /// in £
    pub potential_monthly_saving: f64,
    pub confidence: Confidence,
}

/// Compare the current monthly bill against the cheapest alternative tariff.
///
/// A bill of zero or less has nothing to save, so never recommends a switch.
pub fn check_tariff_switch_opportunity(
    current_monthly_bill: f64,
    heating_type: &HeatingType,
) -> TariffSwitchCheck {
    let (recommended_tariff, cheapest_bill) = Tariff::iter().fold(
        (Tariff::StandardVariable, current_monthly_bill),
        |(cheapest, cheapest_bill), tariff| {
            let bill = tariff.monthly_cost(current_monthly_bill, heating_type);
            if bill < cheapest_bill {
                (tariff, bill)
            } else {
                (cheapest, cheapest_bill)
            }
        },
    );

    let potential_saving = current_monthly_bill - cheapest_bill;
    let saving_percentage = if current_monthly_bill > 0. {
        potential_saving / current_monthly_bill * 100.
    } else {
        0.
    };

    TariffSwitchCheck {
        should_switch: saving_percentage > SWITCH_THRESHOLD_PERCENTAGE,
        current_estimated_tariff: Tariff::StandardVariable,
        recommended_tariff,
        potential_monthly_saving: round_to_fixed(potential_saving, 2),
        confidence: Confidence::from_saving_percentage(saving_percentage),
    }
}

/// Running costs for a household: a day's costs, the month they add up to and whether a cheaper
/// tariff is available.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdCostEstimate {
    #[serde(rename = "baseConsumptionKWh")]
    pub base_consumption_kwh: f64,
    pub daily_cost: DailyCost,
    pub monthly_projection: MonthlyProjection,
    pub tariff_switch: TariffSwitchCheck,
}

#[instrument(skip_all)]
pub fn estimate_household_cost(
    home: &HomeProfile,
    heating_kwh: f64,
    rates: &HeatingRates,
) -> HouseholdCostEstimate {
    let base_consumption_kwh = calculate_base_consumption(&home.home_type, home.occupants);
    let daily_cost =
        calculate_daily_cost(base_consumption_kwh, heating_kwh, &home.heating_type, rates);
    debug!(?daily_cost, "Costed a day of energy use");

    let monthly_projection = calculate_monthly_projection(daily_cost.total_cost, home);
    let tariff_switch = check_tariff_switch_opportunity(
        monthly_projection.projected_monthly_bill,
        &home.heating_type,
    );

    HouseholdCostEstimate {
        base_consumption_kwh,
        daily_cost,
        monthly_projection,
        tariff_switch,
    }
}
