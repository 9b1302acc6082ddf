pub fn min_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

pub fn max_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// Limits a value to the inclusive range between `lower` and `upper`.
///
/// Unlike `f64::clamp` this never panics, so it is safe to use with bounds read from lookup tables.
pub(crate) fn clamp_between<T: PartialOrd + Copy>(value: T, lower: T, upper: T) -> T {
    max_of_2(lower, min_of_2(value, upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_calc_2_as_min_of_2_and_4_ints() {
        assert_eq!(min_of_2(2, 4), 2);
    }

    #[rstest]
    pub fn should_calc_2_as_min_of_4_and_2_floats() {
        assert_eq!(min_of_2(4., 2.), 2.);
    }

    #[rstest]
    pub fn should_calc_4_as_max_of_4_and_2_ints() {
        assert_eq!(max_of_2(4, 2), 4);
    }

    #[rstest]
    pub fn should_calc_4_as_max_of_2_and_4_floats() {
        assert_eq!(max_of_2(2., 4.), 4.);
    }

    #[rstest]
    #[case(0.95, 0.95)]
    #[case(0.5, 0.9)]
    #[case(1.25, 1.1)]
    #[case(0.9, 0.9)]
    #[case(1.1, 1.1)]
    fn should_clamp_between_bounds(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(clamp_between(value, 0.9, 1.1), expected);
    }

    #[test]
    fn should_clamp_integers() {
        assert_eq!(clamp_between(120, 0, 100), 100);
        assert_eq!(clamp_between(-3, 0, 100), 0);
    }
}
