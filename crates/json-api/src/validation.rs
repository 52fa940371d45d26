//! Field Validation
//!
//! Request DTOs collect every violated constraint before answering, so a
//! client sees all problems with a payload at once.

use rust_decimal::Decimal;

use crate::envelope::ApiError;

/// Maximum fractional digits a stored money column keeps.
const MONEY_SCALE: u32 = 2;

/// Integer digits that fit a `NUMERIC(18, 2)` column.
const MONEY_INTEGER_DIGITS: u32 = 16;

pub(crate) trait Validate {
    /// Check field constraints, returning every violation as a 400.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Accumulates `"<field>: <problem>"` messages.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, problem: &str) {
        self.0.push(format!("{field}: {problem}"));
    }

    pub(crate) fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, "is required");
        }

        self
    }

    pub(crate) fn max_chars(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, &format!("must be at most {max} characters"));
        }

        self
    }

    pub(crate) fn money(&mut self, field: &str, value: Decimal) -> &mut Self {
        if value.is_sign_negative() && !value.is_zero() {
            self.push(field, "must not be negative");
        }

        if value.normalize().scale() > MONEY_SCALE {
            self.push(field, "must have at most 2 decimal places");
        }

        if value.abs() >= Decimal::from(10_u64.pow(MONEY_INTEGER_DIGITS)) {
            self.push(field, "is too large");
        }

        self
    }

    pub(crate) fn finish(&mut self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            return Ok(());
        }

        Err(ApiError::BadRequest(std::mem::take(&mut self.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(result: Result<(), ApiError>) -> Vec<String> {
        match result {
            Err(ApiError::BadRequest(messages)) => messages,
            Ok(()) | Err(_) => Vec::new(),
        }
    }

    #[test]
    fn valid_values_pass() {
        let result = Violations::new()
            .required("name", "Widget")
            .max_chars("name", "Widget", 40)
            .money("price", Decimal::new(999, 2))
            .finish();

        assert!(result.is_ok(), "unexpected violations: {result:?}");
    }

    #[test]
    fn blank_name_is_required() {
        let result = Violations::new().required("name", "   ").finish();

        assert_eq!(messages(result), ["name: is required"]);
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let accented = "é".repeat(40);

        assert!(Violations::new().max_chars("name", &accented, 40).finish().is_ok());
        assert_eq!(
            messages(Violations::new().max_chars("name", &"x".repeat(41), 40).finish()),
            ["name: must be at most 40 characters"]
        );
    }

    #[test]
    fn money_rejects_negative_and_extra_precision() {
        let result = Violations::new()
            .money("price", Decimal::new(-1001, 3))
            .finish();

        assert_eq!(
            messages(result),
            [
                "price: must not be negative",
                "price: must have at most 2 decimal places"
            ]
        );
    }

    #[test]
    fn money_rejects_values_beyond_column_range() {
        let largest = Decimal::new(999_999_999_999_999_999, 2);

        assert!(Violations::new().money("price", largest).finish().is_ok());
        assert_eq!(
            messages(
                Violations::new()
                    .money("price", Decimal::from(10_u64.pow(16)))
                    .finish()
            ),
            ["price: is too large"]
        );
    }

    #[test]
    fn money_ignores_trailing_zeros() {
        assert!(
            Violations::new()
                .money("price", Decimal::new(9_990, 3))
                .finish()
                .is_ok()
        );
    }
}
