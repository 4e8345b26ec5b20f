//! Item operations for docket.
//!
//! Transport-agnostic: every operation takes decoded input (plus an id where
//! relevant) and returns a [`HydratedItem`](docket_types::HydratedItem) or a
//! [`ServiceError`] whose [`ErrorKind`] tells the caller how to report it.

pub mod decode;
pub mod error;
pub mod hydrate;
pub mod service;

pub use decode::{decode_item_input, parse_item_id};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use hydrate::{hydrate, hydrate_all};
pub use service::ItemService;
