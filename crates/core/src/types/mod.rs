//! Core types for Breadbox.
//!
//! Domain records mirror the JSON documents stored in the data repository,
//! with type-safe ID wrappers to prevent mixing IDs across entity types.

pub mod category;
pub mod contact;
pub mod id;
pub mod order;
pub mod product;
pub mod settings;
pub mod snapshot;

pub use category::{Category, CategoryPatch, NewCategory};
pub use contact::{Contact, ContactPatch, NewContact};
pub use id::*;
pub use order::{NewOrder, Order, OrderPatch};
pub use product::{NewProduct, Product, ProductPatch};
pub use settings::SiteSettings;
pub use snapshot::{ImportPayload, Snapshot};
