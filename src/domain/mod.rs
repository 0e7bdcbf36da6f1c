//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{VALIDATE_PHONE_PATH, ValidatePhone};
pub use response::ValidationResult;
pub use validation::ValidationError;
pub use value::{AddressHint, ApiKey, PhoneNumberInput};
