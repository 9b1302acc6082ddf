// location for defining common types shared across submodules

use serde::{Deserialize, Serialize};

/// Outcome of a set of range and format checks.
///
/// Validation never fails outright: every violated rule contributes a human-readable message,
/// and the result is valid only when there are none.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub(crate) fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_be_valid_without_errors() {
        assert_eq!(
            ValidationResult::from_errors(vec![]),
            ValidationResult {
                valid: true,
                errors: vec![]
            }
        );
    }

    #[rstest]
    fn should_be_invalid_with_errors() {
        let result = ValidationResult::from_errors(vec!["Invalid UK postcode".to_string()]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }
}
