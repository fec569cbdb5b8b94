//! Parsing and validation shared by the create and update forms.
//!
//! Form fields are deserialized as optional strings so that a missing or
//! blank field becomes [Error::RequiredFieldMissing] instead of a rejected
//! request.

use time::Date;

use crate::{Error, store::iso_date};

/// The trimmed text of a field that must be filled in.
pub fn required_text(value: Option<&str>, field: &'static str) -> Result<String, Error> {
    optional_text(value).ok_or(Error::RequiredFieldMissing(field))
}

/// The trimmed text of a field, or `None` if it is blank.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Parse an amount of money that may be negative. Both "1234.56" and "1234,56" are accepted.
pub fn parse_signed_amount(text: &str, field: &'static str) -> Result<f64, Error> {
    let invalid = || Error::InvalidField {
        field,
        value: text.to_owned(),
    };

    let amount: f64 = text.trim().replace(',', ".").parse().map_err(|_| invalid())?;

    if !amount.is_finite() {
        return Err(invalid());
    }

    Ok(amount)
}

/// Parse a non-negative amount of money.
pub fn parse_amount(text: &str, field: &'static str) -> Result<f64, Error> {
    let amount = parse_signed_amount(text, field)?;

    if amount < 0.0 {
        return Err(Error::InvalidField {
            field,
            value: text.to_owned(),
        });
    }

    Ok(amount)
}

/// Parse a non-negative amount from a field that must be filled in.
pub fn required_amount(value: Option<&str>, field: &'static str) -> Result<f64, Error> {
    let text = required_text(value, field)?;
    parse_amount(&text, field)
}

/// Parse a date in the `YYYY-MM-DD` format used by date inputs.
pub fn parse_date(text: &str, field: &'static str) -> Result<Date, Error> {
    Date::parse(text.trim(), iso_date::FORMAT).map_err(|_| Error::InvalidField {
        field,
        value: text.to_owned(),
    })
}

/// Parse a date from a field that must be filled in.
pub fn required_date(value: Option<&str>, field: &'static str) -> Result<Date, Error> {
    let text = required_text(value, field)?;
    parse_date(&text, field)
}

/// Parse a date field, using `default` when it is blank.
pub fn date_or(value: Option<&str>, field: &'static str, default: Date) -> Result<Date, Error> {
    match optional_text(value) {
        Some(text) => parse_date(&text, field),
        None => Ok(default),
    }
}
