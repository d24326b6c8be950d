#![deny(unsafe_code)]

pub mod classify;
pub mod pipeline;
pub mod values;

pub use classify::{Classification, classify};
pub use pipeline::run_validation;
pub use values::validate_values;
