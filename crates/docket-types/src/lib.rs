//! Foundation types for docket.
//!
//! This crate provides the record and identifier types shared by every other
//! docket crate. It has no knowledge of storage or transport.
//!
//! # Key Types
//!
//! - [`ItemId`] / [`ActorId`] — Integer identifiers, transparent on the wire
//! - [`Item`] — A stored item record with an optional actor reference
//! - [`Actor`] — A read-only reference record
//! - [`ItemInput`] — The decoded body of a create or update request
//! - [`HydratedItem`] — An item with its referenced actor embedded

pub mod actor;
pub mod error;
pub mod identity;
pub mod item;

pub use actor::{default_actors, Actor};
pub use error::TypeError;
pub use identity::{ActorId, ItemId};
pub use item::{HydratedItem, Item, ItemInput};
