pub mod api;
pub mod batch;
pub mod config;
pub mod consts;
pub mod defaults;
pub mod error;
pub mod sampling;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).

pub use error::{DfResult, DiscForgeError};
pub use scorer::ScoringEngine;
