#![deny(unsafe_code)]

pub mod framing;
pub mod parser;

pub use framing::{Framing, detect_framing, ingest, validate_template_shortname};
pub use parser::{parse_line, parse_table};
