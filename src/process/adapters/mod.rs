//! Adapter implementations for the tool runner port.

mod locator;
mod process_runner;


pub use locator::BinaryLocator;
pub use process_runner::{OUTPUT_TARGET, ProcessToolRunner};
