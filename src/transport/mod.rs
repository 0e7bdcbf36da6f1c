//! Transport layer: wire-format details (JSON encoding/decoding).

mod validate_phone;

pub use validate_phone::{
    TransportError, decode_validate_phone_response, encode_validate_phone_body,
};
