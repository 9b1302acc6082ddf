use crate::core::constants::{
    COMPUTER, COOKING, DISHWASHER, FREEZER, FRIDGE, HOT_WATER, LIGHTING, TV, UNKNOWN_APPLIANCE,
    WASHING_MACHINE,
};
use crate::core::units::round_to_fixed;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Appliance {
    pub name: String,
    pub quantity: u32,
    pub hours_per_day: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceConsumption {
    /// in kWh
    pub total_daily: f64,
    /// daily kWh per appliance name, in the order the appliances were given
    pub breakdown: IndexMap<String, f64>,
}

/// Typical consumption (kWh) for each hour an appliance is in use, looked up by name.
///
/// Names are matched case-insensitively with spaces treated as underscores, so "Washing machine"
/// and "WASHING_MACHINE" are the same appliance.
pub fn consumption_per_hour(name: &str) -> f64 {
    match name.to_uppercase().replace(' ', "_").as_str() {
        "FRIDGE" => FRIDGE,
        "FREEZER" => FREEZER,
        "WASHING_MACHINE" => WASHING_MACHINE,
        "DISHWASHER" => DISHWASHER,
        "TV" => TV,
        "COMPUTER" => COMPUTER,
        "LIGHTING" => LIGHTING,
        "COOKING" => COOKING,
        "HOT_WATER" => HOT_WATER,
        _ => UNKNOWN_APPLIANCE,
    }
}

pub fn calculate_appliance_consumption(appliances: &[Appliance]) -> ApplianceConsumption {
    let mut breakdown = IndexMap::new();
    let mut total_daily = 0.;

    for Appliance {
        name,
        quantity,
        hours_per_day,
    } in appliances
    {
        let daily_consumption = consumption_per_hour(name) * hours_per_day * *quantity as f64;

        breakdown.insert(name.clone(), round_to_fixed(daily_consumption, 2));
        total_daily += daily_consumption;
    }

    ApplianceConsumption {
        total_daily: round_to_fixed(total_daily, 2),
        breakdown,
    }
}
