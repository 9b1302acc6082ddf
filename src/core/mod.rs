pub mod appliances;
pub mod common;
pub mod constants;
pub mod daily_cost;
pub mod energy_waste;
pub mod home;
pub mod postcode;
pub mod space_heat_demand;
pub mod units;
