use rust_decimal::Decimal;

use crate::api::format::number_to_decimal;
use crate::error::{ApiError, FieldErrors};

/// Implemented by every RPC input; runs after decoding, before the handler
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Collects per-field failures so a client sees all of them at once
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        // First failure per field wins
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "must not be empty");
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.fail(field, format!("must be at least {} characters", min));
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !is_valid_email(value) {
            self.fail(field, "must be a valid email address");
        }
        self
    }

    pub fn url(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(raw) = value {
            if url::Url::parse(raw).is_err() {
                self.fail(field, "must be a valid URL");
            }
        }
        self
    }

    pub fn positive_money(&mut self, field: &str, value: Option<f64>) -> &mut Self {
        if let Some(amount) = value {
            // Positivity is judged on the stored value, rounded to cents
            match number_to_decimal(amount) {
                _ if !(amount > 0.0) => self.fail(field, "must be a positive number"),
                None => self.fail(field, "is too large"),
                Some(stored) if stored <= Decimal::ZERO => self.fail(field, "must be at least 0.01"),
                Some(_) => {}
            }
        }
        self
    }

    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.fail(field, message);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let errors = std::mem::take(&mut self.errors);
        tracing::debug!("Input rejected: {:?}", errors);
        Err(ApiError::validation_error("Invalid input", Some(errors)))
    }
}

/// Structural check: one `@`, non-empty local part, dotted domain, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
