pub mod bill_data;
pub mod calculator;
pub mod validation;
