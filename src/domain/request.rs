use crate::domain::validation::ValidationError;
use crate::domain::value::{AddressHint, PhoneNumberInput};

/// Path of the validation endpoint, relative to the base URL.
pub const VALIDATE_PHONE_PATH: &str = "/api/phone";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single phone validation request.
pub struct ValidatePhone {
    number: PhoneNumberInput,
    address: AddressHint,
}

impl ValidatePhone {
    pub fn new(number: PhoneNumberInput, address: AddressHint) -> Self {
        Self { number, address }
    }

    /// Validate `number` without an address hint.
    pub fn number(number: PhoneNumberInput) -> Self {
        Self::new(number, AddressHint::none())
    }

    /// Build a request from plain strings. An empty `address` means no hint.
    pub fn from_parts(
        number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            PhoneNumberInput::new(number)?,
            AddressHint::new(address),
        ))
    }

    /// Attach or replace the address hint.
    pub fn with_address(mut self, address: AddressHint) -> Self {
        self.address = address;
        self
    }

    pub fn phone_number(&self) -> &PhoneNumberInput {
        &self.number
    }

    pub fn address(&self) -> &AddressHint {
        &self.address
    }
}
