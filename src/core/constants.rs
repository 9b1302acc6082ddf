//! Product-defined constants and lookup values for UK household energy estimates.
//!
//! These figures are heuristics agreed with the product team rather than measured values, and
//! results are expected to be reproducible against them exactly.

// Heating demand

/// Outdoor temperature (ºC) at or above which no space heating is needed.
pub const HEATING_BASE_TEMPERATURE: f64 = 15.5;

// kWh per degree-day
pub const DEMAND_FLAT: f64 = 0.8;
pub const DEMAND_TERRACED: f64 = 1.1;
pub const DEMAND_SEMI_DETACHED: f64 = 1.4;
pub const DEMAND_DETACHED: f64 = 1.8;

pub const INSULATION_POOR: f64 = 1.4;
pub const INSULATION_AVERAGE: f64 = 1.0;
pub const INSULATION_GOOD: f64 = 0.7;
pub const INSULATION_EXCELLENT: f64 = 0.5;

// heating system efficiency (heat pump figure is a coefficient of performance)
pub const EFFICIENCY_GAS_BOILER: f64 = 0.90;
pub const EFFICIENCY_ELECTRIC_HEATER: f64 = 1.0;
pub const EFFICIENCY_HEAT_PUMP: f64 = 3.0;
pub const EFFICIENCY_MIXED: f64 = 0.95;

pub const SEASONAL_WINTER: f64 = 1.3;
pub const SEASONAL_SPRING: f64 = 0.8;
pub const SEASONAL_SUMMER: f64 = 0.3;
pub const SEASONAL_AUTUMN: f64 = 0.9;

pub const DEFAULT_OCCUPANTS: u32 = 2;
pub const DEFAULT_WIND_SPEED: f64 = 0.;
pub const DEFAULT_HUMIDITY: f64 = 75.;

// Energy rates (£/kWh)
pub const ELECTRICITY_STANDARD_RATE: f64 = 0.28;
pub const GAS_STANDARD_RATE: f64 = 0.07;

// Appliance consumption (kWh for each hour of use)
pub const FRIDGE: f64 = 0.4;
pub const FREEZER: f64 = 0.5;
pub const WASHING_MACHINE: f64 = 0.6;
pub const DISHWASHER: f64 = 0.5;
pub const TV: f64 = 0.3;
pub const COMPUTER: f64 = 0.4;
pub const LIGHTING: f64 = 1.2;
pub const COOKING: f64 = 1.5;
pub const HOT_WATER: f64 = 2.5;
pub const UNKNOWN_APPLIANCE: f64 = 0.5;

// UK market averages (Ofgem price cap, Q4 2024)
pub const TYPICAL_UNIT_RATE: f64 = 24.5; // pence per kWh
pub const TYPICAL_STANDING_CHARGE: f64 = 60.1; // pence per day
pub const TYPICAL_MONTHLY_BILL: f64 = 135.; // £
pub const TYPICAL_ANNUAL_USAGE: f64 = 2700.; // kWh electricity

// Household running costs

// everyday non-heating electricity use (kWh per day) for a single occupant
pub const BASE_CONSUMPTION_FLAT: f64 = 8.5;
pub const BASE_CONSUMPTION_TERRACED: f64 = 11.0;
pub const BASE_CONSUMPTION_SEMI_DETACHED: f64 = 13.5;
pub const BASE_CONSUMPTION_DETACHED: f64 = 16.0;
/// Extra share of base consumption for each occupant after the first.
pub const BASE_CONSUMPTION_PER_EXTRA_OCCUPANT: f64 = 0.12;

// standing charges (£ per day)
pub const STANDING_CHARGE_GAS: f64 = 0.53;
pub const STANDING_CHARGE_ELECTRICITY: f64 = 0.60;
pub const STANDING_CHARGE_MIXED: f64 = 0.80;

/// Share of a mixed system's heat that comes from gas; the rest is electric.
pub const MIXED_HEATING_GAS_SHARE: f64 = 0.7;

pub const AVERAGE_MONTHLY_HOUSEHOLD_BILL: f64 = 140.; // £

// Building envelope

/// Internal temperature (ºC) assumed when estimating fabric heat loss.
pub const INTERNAL_TEMPERATURE: f64 = 19.;
pub const CEILING_HEIGHT: f64 = 2.4; // m
/// Volumetric heat capacity of air in Wh/(m3.K), for one air change per hour.
pub const AIR_HEAT_CAPACITY: f64 = 0.33;

// Validation limits
pub const MIN_OCCUPANTS: u32 = 1;
pub const MAX_OCCUPANTS: u32 = 15;
