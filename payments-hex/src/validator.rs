//! Payment request validation.

use payments_types::DomainError;

/// Validates raw payment request strings.
///
/// Only emptiness is enforced. The format and amount stages are extension
/// points with no rules behind them yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentValidator;

impl PaymentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Rejects a missing or empty request, then runs the remaining stages.
    ///
    /// Whitespace counts as content: `"  "` passes.
    pub fn validate(&self, request: Option<&str>) -> Result<(), DomainError> {
        let request = match request {
            Some(r) if !r.is_empty() => r,
            _ => {
                return Err(DomainError::InvalidRequest(
                    "Request cannot be empty".into(),
                ));
            }
        };

        self.validate_format(request)?;
        self.validate_amount(request)?;
        Ok(())
    }

    /// Format stage. No rules yet.
    fn validate_format(&self, _request: &str) -> Result<(), DomainError> {
        Ok(())
    }

    /// Amount stage. No rules yet.
    fn validate_amount(&self, _request: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_request_rejected() {
        let result = PaymentValidator::new().validate(None);
        assert!(matches!(result, Err(DomainError::InvalidRequest(_))));
    }

    #[test]
    fn test_empty_request_rejected() {
        let err = PaymentValidator::new().validate(Some("")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid request: Request cannot be empty");
    }

    #[test]
    fn test_non_empty_request_accepted() {
        assert!(PaymentValidator::new().validate(Some("buy widget")).is_ok());
    }

    #[test]
    fn test_whitespace_request_accepted() {
        assert!(PaymentValidator::new().validate(Some("   ")).is_ok());
    }

    #[test]
    fn test_arbitrary_content_accepted() {
        // No format or amount rules exist, so anything non-empty passes.
        for request in ["{}", "-1", "not json at all", "amount=abc"] {
            assert!(PaymentValidator::new().validate(Some(request)).is_ok());
        }
    }
}
