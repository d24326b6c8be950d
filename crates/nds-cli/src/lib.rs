#![deny(unsafe_code)]

pub mod logging;
pub mod schema;
