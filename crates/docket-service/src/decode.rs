//! Decoding of raw request parts into operation input.
//!
//! Failures here are always [`ServiceError::BadInput`], never `NotFound`.

use docket_types::{ItemId, ItemInput};

use crate::error::{ServiceError, ServiceResult};

/// Decode a JSON request body into an [`ItemInput`].
pub fn decode_item_input(body: &[u8]) -> ServiceResult<ItemInput> {
    serde_json::from_slice(body).map_err(|e| ServiceError::BadInput(e.to_string()))
}

/// Parse an item id taken from a request path.
pub fn parse_item_id(raw: &str) -> ServiceResult<ItemId> {
    raw.parse().map_err(|e: docket_types::TypeError| ServiceError::BadInput(e.to_string()))
}
