//! Checkout form record and field validation.

use std::fmt;

use plainwear_core::{Email, EmailError};

/// The named fields of the checkout form.
///
/// An explicit enumeration instead of string keys, so a typo in a field
/// name is a compile error rather than a silently dropped write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    FullName,
    Address,
    City,
    Country,
    Zip,
    CardNumber,
    Expiry,
    Cvc,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [Self; 9] = [
        Self::Email,
        Self::FullName,
        Self::Address,
        Self::City,
        Self::Country,
        Self::Zip,
        Self::CardNumber,
        Self::Expiry,
        Self::Cvc,
    ];

    /// Fields the Details step requires. Country is captured but optional.
    pub const REQUIRED_SHIPPING: [Self; 5] = [
        Self::Email,
        Self::FullName,
        Self::Address,
        Self::City,
        Self::Zip,
    ];

    /// Fields the Payment step requires.
    pub const REQUIRED_PAYMENT: [Self; 3] = [Self::CardNumber, Self::Expiry, Self::Cvc];

    /// Stable snake_case name for logs and the rendering layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FullName => "full_name",
            Self::Address => "address",
            Self::City => "city",
            Self::Country => "country",
            Self::Zip => "zip",
            Self::CardNumber => "card_number",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// A required field is empty.
    Missing,
    /// The email field is present but not syntactically plausible.
    InvalidEmail(EmailError),
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "required"),
            Self::InvalidEmail(e) => write!(f, "{e}"),
        }
    }
}

/// A single field's validation failure, surfaced per field so the
/// rendering layer can mark the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Which field failed.
    pub field: FormField,
    /// Why it failed.
    pub issue: FieldIssue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.issue)
    }
}

/// Shipping and payment form state.
///
/// Each field is an independent, immediate write; no cross-field
/// validation happens until a step is submitted. Values persist across
/// step transitions and non-destructive closes, resetting only on the
/// full checkout reset.
///
/// Implements `Debug` manually to redact the card number and CVC.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    email: String,
    full_name: String,
    address: String,
    city: String,
    country: String,
    zip: String,
    card_number: String,
    expiry: String,
    cvc: String,
}

impl CheckoutForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Email => self.email = value,
            FormField::FullName => self.full_name = value,
            FormField::Address => self.address = value,
            FormField::City => self.city = value,
            FormField::Country => self.country = value,
            FormField::Zip => self.zip = value,
            FormField::CardNumber => self.card_number = value,
            FormField::Expiry => self.expiry = value,
            FormField::Cvc => self.cvc = value,
        }
    }

    /// Read one field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::FullName => &self.full_name,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::Country => &self.country,
            FormField::Zip => &self.zip,
            FormField::CardNumber => &self.card_number,
            FormField::Expiry => &self.expiry,
            FormField::Cvc => &self.cvc,
        }
    }

    /// Reset every field to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the fields the Details step requires.
    ///
    /// Required fields must be non-empty, and the email must parse as a
    /// plausible address. Returns one entry per failing field.
    #[must_use]
    pub fn validate_shipping(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in FormField::REQUIRED_SHIPPING {
            let value = self.get(field);
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    issue: FieldIssue::Missing,
                });
            } else if field == FormField::Email {
                if let Err(e) = Email::parse(value) {
                    errors.push(FieldError {
                        field,
                        issue: FieldIssue::InvalidEmail(e),
                    });
                }
            }
        }
        errors
    }

    /// Validate the fields the Payment step requires (non-empty only).
    #[must_use]
    pub fn validate_payment(&self) -> Vec<FieldError> {
        FormField::REQUIRED_PAYMENT
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .map(|field| FieldError {
                field,
                issue: FieldIssue::Missing,
            })
            .collect()
    }

    /// Last four digits of the card number, for receipts and logs.
    #[must_use]
    pub fn card_tail(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        digits
            .iter()
            .rev()
            .take(4)
            .rev()
            .collect()
    }
}

impl fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("country", &self.country)
            .field("zip", &self.zip)
            .field("card_number", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .field("cvc", &"[REDACTED]")
            .finish()
    }
}
