//! Client-side validation for the product form.
//!
//! All field checks run on every submit attempt so the user sees every
//! problem at once rather than one at a time; within the price field the
//! checks chain (presence, then numeric parse, then the positive bound).

use thiserror::Error;

/// Name field failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("🔺 Введите название товара")]
    Empty,
}

/// Price field failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("🔺 Введите стоимость товара")]
    Empty,
    #[error("Стоимость должна быть числом")]
    NotANumber,
    #[error("Стоимость должна быть больше 0")]
    NotPositive,
}

/// Per-field outcome of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<NameError>,
    pub price: Option<PriceError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// Form input that passed validation: trimmed name, parsed price.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInput {
    pub name: String,
    pub price: f64,
}

/// Validate raw form input. Both fields are always checked so every
/// applicable error is reported together.
pub fn validate(name: &str, price: &str) -> Result<ValidInput, FormErrors> {
    let name = name.trim();
    let price = price.trim();

    let mut errors = FormErrors::default();
    if name.is_empty() {
        errors.name = Some(NameError::Empty);
    }

    match parse_price(price) {
        Ok(value) if errors.is_empty() => Ok(ValidInput {
            name: name.to_string(),
            price: value,
        }),
        Ok(_) => Err(errors),
        Err(e) => {
            errors.price = Some(e);
            Err(errors)
        }
    }
}

/// Parse a price string. Only finite values greater than zero are valid;
/// `inf` and `NaN` parse as floats but are not prices.
fn parse_price(raw: &str) -> Result<f64, PriceError> {
    if raw.is_empty() {
        return Err(PriceError::Empty);
    }
    let value: f64 = raw.parse().map_err(|_| PriceError::NotANumber)?;
    if !value.is_finite() {
        return Err(PriceError::NotANumber);
    }
    if value <= 0.0 {
        return Err(PriceError::NotPositive);
    }
    Ok(value)
}
