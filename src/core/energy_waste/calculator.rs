use crate::compare_floats::{clamp_between, max_of_2, min_of_2};
use crate::core::constants::{
    TYPICAL_ANNUAL_USAGE, TYPICAL_MONTHLY_BILL, TYPICAL_STANDING_CHARGE, TYPICAL_UNIT_RATE,
};
use crate::core::units::{
    pence_to_pounds, round_half_up, round_to_decimal_places, AVERAGE_DAYS_PER_MONTH,
    MONTHS_PER_YEAR,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::instrument;

// maximum points each factor can contribute to the waste score
const STANDING_CHARGE_SCORE_CAP: f64 = 30.;
const UNIT_RATE_SCORE_CAP: f64 = 40.;
const OVERPAYMENT_SCORE_CAP: f64 = 30.;
const MAX_WASTE_SCORE: f64 = 100.;

// thresholds above the typical figures at which recommendations are made
const UNIT_RATE_RECOMMENDATION_MARGIN: f64 = 5.; // pence per kWh
const STANDING_CHARGE_RECOMMENDATION_MARGIN: f64 = 20.; // pence per day
const HIGH_USAGE_RATIO: f64 = 1.3;
const DETACHED_HIGH_USAGE: f64 = 250.; // kWh per month

const BEST_CASE_SAVINGS_MULTIPLIER: f64 = 1.2;
const REALISTIC_SAVINGS_MULTIPLIER: f64 = 0.7;

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyType {
    Flat,
    Terraced,
    Semi,
    Detached,
}

/// Bill figures for a household, already checked by
/// [`validate_input`](crate::core::energy_waste::validation::validate_input).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WasteCalculatorInput {
    /// in £
    pub monthly_bill: f64,
    /// in pence per kWh
    pub unit_rate: f64,
    /// in pence per day
    pub standing_charge: f64,
    pub property_type: Option<PropertyType>,
    pub occupants: Option<u32>,
    pub region: Option<String>,
    /// in kWh
    pub annual_usage: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn from_score(waste_score: u32) -> Self {
        match waste_score {
            0..30 => Severity::Low,
            30..60 => Severity::Medium,
            _ => Severity::High,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingChargeWaste {
    /// in £
    pub your_daily_cost: f64,
    /// in £
    pub typical_daily_cost: f64,
    /// in £
    pub monthly_cost: f64,
    pub percentage_of_bill: f64,
    pub is_higher_than_average: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRateWaste {
    /// in pence per kWh
    pub your_rate: f64,
    /// in pence per kWh
    pub typical_rate: f64,
    /// in kWh per month
    pub estimated_usage: f64,
    /// in £
    pub monthly_cost_difference: f64,
    pub is_higher_than_average: bool,
}

/// Yearly savings (£) from acting on the recommendations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialSavings {
    pub best_case: f64,
    pub realistic: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteCalculatorResult {
    pub monthly_waste: f64,
    pub annual_waste: f64,
    pub waste_score: u32,
    pub standing_charge_waste: StandingChargeWaste,
    pub unit_rate_waste: UnitRateWaste,
    pub recommendations: Vec<String>,
    pub severity: Severity,
    pub potential_savings: PotentialSavings,
}

/// Compare a household's bill against UK averages to find how much is being overpaid.
///
/// Overpayment comes from two places: a standing charge above the typical daily charge, and a
/// unit rate above the typical rate applied to the household's estimated monthly usage. The
/// waste score (0-100) weighs the standing charge's share of the bill, how far the unit rate is
/// above average and how far the whole bill is above average.
///
/// The input should be validated first; zero bills or rates give meaningless figures.
#[instrument(skip_all)]
pub fn calculate_energy_waste(input: &WasteCalculatorInput) -> WasteCalculatorResult {
    let WasteCalculatorInput {
        monthly_bill,
        unit_rate,
        standing_charge,
        property_type,
        annual_usage,
        ..
    } = *input;
    let months_per_year = MONTHS_PER_YEAR as f64;

    // standing charge
    let your_daily_cost = pence_to_pounds(standing_charge);
    let typical_daily_cost = pence_to_pounds(TYPICAL_STANDING_CHARGE);
    let monthly_standing_charge = your_daily_cost * AVERAGE_DAYS_PER_MONTH;
    let percentage_of_bill = monthly_standing_charge / monthly_bill * 100.;
    let monthly_standing_charge_waste = max_of_2(
        0.,
        (your_daily_cost - typical_daily_cost) * AVERAGE_DAYS_PER_MONTH,
    );

    // unit rate, applied to usage taken from the bill when annual usage is not known
    let estimated_usage = match annual_usage {
        Some(annual_usage) if annual_usage > 0. => annual_usage / months_per_year,
        _ => (monthly_bill - monthly_standing_charge) / pence_to_pounds(unit_rate),
    };
    let monthly_unit_rate_waste = max_of_2(
        0.,
        pence_to_pounds(unit_rate - TYPICAL_UNIT_RATE) * estimated_usage,
    );

    let monthly_waste = monthly_standing_charge_waste + monthly_unit_rate_waste;
    let annual_waste = monthly_waste * months_per_year;

    let waste_score = waste_score(percentage_of_bill, unit_rate, monthly_bill);

    let mut recommendations = vec![];
    if unit_rate > TYPICAL_UNIT_RATE + UNIT_RATE_RECOMMENDATION_MARGIN {
        recommendations.push(format!(
            "Your unit rate is significantly above UK average. Switch to a cheaper tariff to save £{}/year.",
            round_half_up(monthly_unit_rate_waste * months_per_year)
        ));
    }
    if standing_charge > TYPICAL_STANDING_CHARGE + STANDING_CHARGE_RECOMMENDATION_MARGIN {
        recommendations.push(format!(
            "Your standing charge is {}% of your bill. Look for tariffs with lower daily charges.",
            round_half_up(percentage_of_bill)
        ));
    }
    if estimated_usage > TYPICAL_ANNUAL_USAGE / months_per_year * HIGH_USAGE_RATIO {
        recommendations.push("Your usage is higher than average. Focus on energy efficiency improvements like LED bulbs and better insulation.".to_string());
    }
    if property_type == Some(PropertyType::Detached) && estimated_usage > DETACHED_HIGH_USAGE {
        recommendations.push("For detached homes, improved insulation can save £200-400/year. Consider a free government energy assessment.".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Your rates are fairly competitive. Focus on reducing usage through energy-efficient appliances and smart heating controls.".to_string());
    }

    WasteCalculatorResult {
        monthly_waste: round_to_decimal_places(monthly_waste, 2),
        annual_waste: round_to_decimal_places(annual_waste, 2),
        waste_score,
        standing_charge_waste: StandingChargeWaste {
            your_daily_cost: round_to_decimal_places(your_daily_cost, 2),
            typical_daily_cost: round_to_decimal_places(typical_daily_cost, 2),
            monthly_cost: round_to_decimal_places(monthly_standing_charge, 2),
            percentage_of_bill: round_to_decimal_places(percentage_of_bill, 1),
            is_higher_than_average: standing_charge > TYPICAL_STANDING_CHARGE,
        },
        unit_rate_waste: UnitRateWaste {
            your_rate: round_to_decimal_places(unit_rate, 1),
            typical_rate: TYPICAL_UNIT_RATE,
            estimated_usage: round_half_up(estimated_usage),
            monthly_cost_difference: round_to_decimal_places(monthly_unit_rate_waste, 2),
            is_higher_than_average: unit_rate > TYPICAL_UNIT_RATE,
        },
        recommendations,
        severity: Severity::from_score(waste_score),
        potential_savings: PotentialSavings {
            best_case: round_half_up(annual_waste * BEST_CASE_SAVINGS_MULTIPLIER),
            realistic: round_half_up(annual_waste * REALISTIC_SAVINGS_MULTIPLIER),
        },
    }
}

fn waste_score(percentage_of_bill: f64, unit_rate: f64, monthly_bill: f64) -> u32 {
    let standing_charge_score = min_of_2(percentage_of_bill * 2., STANDING_CHARGE_SCORE_CAP);

    let unit_rate_percentage_above = (unit_rate / TYPICAL_UNIT_RATE - 1.) * 100.;
    let unit_rate_score = clamp_between(unit_rate_percentage_above * 2., 0., UNIT_RATE_SCORE_CAP);

    let overpayment_percentage = (monthly_bill / TYPICAL_MONTHLY_BILL - 1.) * 100.;
    let overpayment_score =
        clamp_between(overpayment_percentage * 0.6, 0., OVERPAYMENT_SCORE_CAP);

    let score = round_half_up(standing_charge_score + unit_rate_score + overpayment_score);

    clamp_between(score, 0., MAX_WASTE_SCORE) as u32
}
