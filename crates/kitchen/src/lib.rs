//! Order admission and the kitchen production pipeline.
//!
//! This crate is the service layer above the domain core:
//! - [`AdmissionService`] finalizes carts into confirmed orders with
//!   monotonic ticket numbers
//! - [`KitchenPipeline`] owns every admitted order and walks it through
//!   `Pending → Cooking → Ready → Served`
//! - [`Config`] loads the tax rate and ticket numbering from the environment
//!
//! The pipeline is a cheap `Clone` handle over shared state, so the kitchen
//! board, the billing view, and every staff terminal can read the same
//! orders concurrently while stage mutations stay atomic.

pub mod admission;
pub mod config;
pub mod pipeline;

pub use admission::AdmissionService;
pub use config::Config;
pub use pipeline::KitchenPipeline;
