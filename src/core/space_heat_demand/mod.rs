pub mod factors;
pub mod heat_loss;
pub mod heating_load;
pub mod schedule;
