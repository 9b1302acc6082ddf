pub const HOURS_PER_DAY: u32 = 24;
pub const WATTS_PER_KILOWATT: u32 = 1_000;
pub const PENCE_PER_POUND: u32 = 100;
pub const MONTHS_PER_YEAR: u32 = 12;
/// Average month length used for turning daily charges into monthly ones.
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.4;

pub fn pence_to_pounds(pence: f64) -> f64 {
    pence / PENCE_PER_POUND as f64
}

/// Converts a constant power draw in watts into kWh over a whole day.
pub fn watts_to_kwh_per_day(watts: f64) -> f64 {
    watts * HOURS_PER_DAY as f64 / WATTS_PER_KILOWATT as f64
}

/// Rounds to the nearest whole number, with halves going towards positive infinity.
///
/// This differs from `f64::round` (which rounds halves away from zero) only for negative halves,
/// e.g. -2.5 rounds to -2 here.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round_to_decimal_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}

/// Rounds the exact binary value of `value` to a number of decimal places, the way JavaScript's
/// `Number.prototype.toFixed` does.
///
/// Unlike [`round_to_decimal_places`], a figure such as 2.675 (stored as 2.67499999...) rounds
/// down to 2.67. Exact ties, such as 0.125, round away from zero.
pub fn round_to_fixed(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        // the product may have been rounded onto the half; the residual says which side it fell from
        let residual = value.mul_add(factor, -scaled);
        if residual > 0. {
            scaled.ceil()
        } else if residual < 0. {
            scaled.floor()
        } else {
            scaled.round()
        }
    } else {
        scaled.round()
    };

    rounded / factor
}
