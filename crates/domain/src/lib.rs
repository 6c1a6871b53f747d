//! Domain core for the BrewFlow café point-of-sale.
//!
//! This crate provides the synchronous, invariant-bearing heart of the POS:
//! - [`Cart`], the shopping-cart aggregate with tax-inclusive totals
//! - [`Order`] and [`Stage`], the kitchen fulfillment state machine
//! - [`Catalog`], the immutable menu
//! - [`SessionAuthority`], the role-gated access predicate
//!
//! Everything here is pure in-process logic; the kitchen crate layers the
//! shared pipeline and order admission on top.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod session;

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, CatalogItem, Category};
pub use error::DomainError;
pub use money::{Money, TaxRate};
pub use order::{FulfillmentType, Order, PaymentMethod, Stage};
pub use session::{Access, Role, Session, SessionAuthority};
