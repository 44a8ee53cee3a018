// Library crate exposing modules for integration tests and benchmarks

pub mod cli;
pub mod error;
pub mod finder;
pub mod model;
pub mod report;
pub mod repository;
pub mod selector;
pub mod util;

pub use error::{Error, Result};
