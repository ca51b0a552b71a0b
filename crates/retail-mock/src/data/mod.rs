pub mod catalog;
pub mod datasets;
pub mod dates;
pub mod generator;
pub mod orders;
