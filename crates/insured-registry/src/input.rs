//! Validation of raw console input.
//!
//! Every check returns [`Error::Validation`] carrying the message the
//! console shows to the user. Records are only built from values that
//! passed these checks.

use regex::Regex;

use crate::config::InputConfig;
use crate::error::{Error, Result};

/// Validates text, numbers, ages and phone numbers typed by the user.
#[derive(Debug, Clone)]
pub struct InputValidator {
    max_text_length: usize,
    min_age: u32,
    max_age: u32,
    phone_pattern: Regex,
}

impl InputValidator {
    /// Build a validator from the input section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the phone pattern is not a valid regex.
    pub fn new(config: &InputConfig) -> Result<Self> {
        let phone_pattern =
            Regex::new(&config.phone_pattern).map_err(|_| Error::ConfigValidation {
                message: format!("invalid regex pattern: {}", config.phone_pattern),
            })?;

        Ok(Self {
            max_text_length: config.max_text_length,
            min_age: config.min_age,
            max_age: config.max_age,
            phone_pattern,
        })
    }

    /// Trim `raw` and check it is non-empty and not too long.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the trimmed text is empty or too long.
    pub fn text(&self, field: &'static str, raw: &str) -> Result<String> {
        let text = raw.trim();

        if text.is_empty() {
            return Err(Error::validation(field, "Vstupní pole nesmí být prázdné."));
        }

        let limit = self.max_text_length;
        if text.chars().count() > limit {
            return Err(Error::validation(
                field,
                format!("Maximální délka vstupu je {limit} znaků."),
            ));
        }

        Ok(text.to_string())
    }

    /// Parse a non-negative whole number made of ASCII digits only.
    ///
    /// Numbers too large for `u64` saturate rather than fail, so they are
    /// rejected later by whatever range check follows.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input is empty or not all digits.
    pub fn number(&self, field: &'static str, raw: &str) -> Result<u64> {
        let digits = raw.trim();

        if !is_ascii_digits(digits) {
            return Err(Error::validation(field, "Zadejte prosím platné číslo."));
        }

        Ok(digits.parse().unwrap_or(u64::MAX))
    }

    /// Parse an age within the configured inclusive range.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input is not a number or is out of range.
    pub fn age(&self, raw: &str) -> Result<u32> {
        let number = self.number("age", raw)?;

        u32::try_from(number)
            .ok()
            .filter(|age| (self.min_age..=self.max_age).contains(age))
            .ok_or_else(|| {
                Error::validation(
                    "age",
                    format!(
                        "Zadejte prosím věk v rozmezí {} až {} let.",
                        self.min_age, self.max_age
                    ),
                )
            })
    }

    /// Check a phone number: valid text that matches the phone pattern.
    ///
    /// # Errors
    ///
    /// Returns the text error if the input is empty or too long, otherwise a
    /// phone error if the pattern does not match.
    pub fn phone(&self, raw: &str) -> Result<String> {
        let phone = self.text("phone", raw)?;

        if !self.phone_pattern.is_match(&phone) {
            return Err(Error::validation("phone", PHONE_HINT));
        }

        Ok(phone)
    }
}

/// Message shown whenever a phone number is rejected.
pub const PHONE_HINT: &str = "Zadejte platné telefonní číslo (pouze číslice).";

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
