//! Domain models for the FarmNest Crop Advisory Platform

mod crop;
mod environment;
mod prediction;
mod schedule;
mod soil;
mod user;

pub use crop::*;
pub use environment::*;
pub use prediction::*;
pub use schedule::*;
pub use soil::*;
pub use user::*;
