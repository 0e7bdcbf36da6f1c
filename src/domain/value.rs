use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone)]
/// GenderAPI key sent as a bearer token.
///
/// Invariant: non-empty after trimming. The value is redacted in `Debug` output.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Field name used in validation errors (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Borrow the raw key. Only the client should need this, to build the `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number exactly as the user typed it (`number`).
///
/// Invariant: non-empty after trimming. The format is not checked; that is the service's job.
/// If you already hold a parsed [`phonenumber::PhoneNumber`], convert it to send its E.164 form.
pub struct PhoneNumberInput(String);

impl PhoneNumberInput {
    /// JSON field name used by the API (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated (non-empty) phone number input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Trimmed value as sent to the API.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<phonenumber::PhoneNumber> for PhoneNumberInput {
    /// Send an already-parsed number in E.164 form.
    fn from(value: phonenumber::PhoneNumber) -> Self {
        Self(
            phonenumber::format(&value)
                .mode(phonenumber::Mode::E164)
                .to_string(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
/// Optional parsing hint (`address`): a country code such as `US`, a country name, or a city.
///
/// Whitespace-only input is the same as no hint.
pub struct AddressHint(Option<String>);

impl AddressHint {
    /// JSON field name used by the API (`address`).
    pub const FIELD: &'static str = "address";

    /// Create a hint; empty input yields [`AddressHint::none`].
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_owned()))
        }
    }

    pub fn none() -> Self {
        Self(None)
    }

    /// The hint, if any.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<String>> for AddressHint {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}
