//! Shared domain types and logic for the FarmNest Crop Advisory Platform
//!
//! This crate contains the pure, deterministic core of the advisory
//! pipeline: soil input validation, feature vector assembly, crop
//! suitability evaluation, and schedule generation. It performs no IO
//! and is shared between the backend and any future components.

pub mod features;
pub mod models;
pub mod schedule;
pub mod suitability;
pub mod types;

pub use features::*;
pub use models::*;
pub use schedule::*;
pub use suitability::*;
pub use types::*;
