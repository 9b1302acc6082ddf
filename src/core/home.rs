use crate::core::common::ValidationResult;
use crate::core::constants::{DEFAULT_OCCUPANTS, MAX_OCCUPANTS, MIN_OCCUPANTS};
use crate::core::postcode::is_valid_postcode;
use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum::{Display, EnumIter};

/// The built form of a home.
///
/// Any value outside the four recognised forms is kept as `Unknown` so that calculations can
/// fall back to terraced-house figures instead of rejecting the whole request.
#[derive(Clone, Debug, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
pub enum HomeType {
    #[serde(rename = "flat")]
    Flat,
    #[serde(rename = "terraced")]
    Terraced,
    #[serde(rename = "semi-detached")]
    SemiDetached,
    #[serde(rename = "detached")]
    Detached,
    #[serde(other)]
    Unknown(String),
}

impl HomeType {
    pub fn is_known(&self) -> bool {
        !matches!(self, HomeType::Unknown(_))
    }
}

/// The main space heating system of a home. Unrecognised systems are treated as mixed.
#[derive(Clone, Debug, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
pub enum HeatingType {
    #[serde(rename = "gas")]
    Gas,
    #[serde(rename = "electricity")]
    Electricity,
    #[serde(rename = "heat-pump")]
    HeatPump,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(other)]
    Unknown(String),
}

impl HeatingType {
    pub fn is_known(&self) -> bool {
        !matches!(self, HeatingType::Unknown(_))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InsulationLevel {
    Poor,
    Average,
    Good,
    Excellent,
}

/// The attributes of a household gathered during onboarding.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HomeProfile {
    #[serde(default)]
    pub postcode: String,
    pub home_type: HomeType,
    pub heating_type: HeatingType,
    #[serde(default = "default_occupants")]
    pub occupants: u32,
    pub construction_year: Option<i32>,
    pub insulation_level: Option<InsulationLevel>,
}

fn default_occupants() -> u32 {
    DEFAULT_OCCUPANTS
}

/// Checks a home profile for the problems that onboarding would reject.
///
/// This is advisory only: the calculations accept unknown home and heating types.
pub fn validate_home_profile(profile: &HomeProfile) -> ValidationResult {
    let mut errors = vec![];

    if !is_valid_postcode(&profile.postcode) {
        errors.push("Invalid UK postcode".to_string());
    }
    if !profile.home_type.is_known() {
        errors.push(
            "Invalid home type. Must be: flat, terraced, semi-detached, or detached".to_string(),
        );
    }
    if !(MIN_OCCUPANTS..=MAX_OCCUPANTS).contains(&profile.occupants) {
        errors.push("Invalid number of occupants. Must be between 1 and 15".to_string());
    }
    if !profile.heating_type.is_known() {
        errors.push(
            "Invalid heating type. Must be: gas, electricity, heat-pump, or mixed".to_string(),
        );
    }

    ValidationResult::from_errors(errors)
}
