pub mod aggregate;
pub mod cli;
pub mod data;
pub mod error;
pub mod metrics;
pub mod snapshot;
pub mod views;
