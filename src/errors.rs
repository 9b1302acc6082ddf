use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostSaverError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Error identified during cost calculation: {0}")]
    FailureInCalculation(#[from] CalculationError),
    #[error("Error while writing output: {0}")]
    ErrorWritingOutput(OutputError),
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("Month index {0} is out of range, expected a value from 0 (January) to 11 (December)")]
    InvalidMonth(u32),
    #[error("At least one hourly temperature is needed to generate a heating schedule")]
    EmptyTemperatureProfile,
}

/// Bill figures that failed validation, carrying every message from the failed checks.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Bill input is invalid: {}", .errors.join("; "))]
pub struct InvalidWasteInputError {
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct OutputError {
    error: anyhow::Error,
}

impl OutputError {
    pub fn new(error: anyhow::Error) -> Self {
        Self { error }
    }
}

impl From<OutputError> for CostSaverError {
    fn from(error: OutputError) -> Self {
        CostSaverError::ErrorWritingOutput(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_list_every_message_for_invalid_waste_input() {
        let error = InvalidWasteInputError {
            errors: vec![
                "Monthly bill must be greater than £0".to_string(),
                "Unit rate must be greater than 0p".to_string(),
            ],
        };

        assert_eq!(
            error.to_string(),
            "Bill input is invalid: Monthly bill must be greater than £0; Unit rate must be greater than 0p"
        );
    }

    #[rstest]
    fn should_wrap_calculation_error() {
        let error: CostSaverError = CalculationError::InvalidMonth(12).into();

        assert!(matches!(
            error,
            CostSaverError::FailureInCalculation(CalculationError::InvalidMonth(12))
        ));
        assert!(error.to_string().contains("Month index 12 is out of range"));
    }
}
