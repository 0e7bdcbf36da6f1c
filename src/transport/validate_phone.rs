use serde::Serialize;

use crate::domain::{ValidatePhone, ValidationResult};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("response is not a JSON object: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ValidatePhoneBody<'a> {
    number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
}

pub fn encode_validate_phone_body(request: &ValidatePhone) -> Result<String, TransportError> {
    let body = ValidatePhoneBody {
        number: request.phone_number().as_str(),
        address: request.address().as_deref(),
    };
    serde_json::to_string(&body).map_err(TransportError::Encode)
}

pub fn decode_validate_phone_response(json: &str) -> Result<ValidationResult, TransportError> {
    serde_json::from_str(json).map_err(TransportError::Decode)
}
