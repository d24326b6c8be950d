#![deny(unsafe_code)]

pub mod engine;
pub mod naming;

pub use engine::{normalized_similarity, suggest_candidates};
pub use naming::check_new_field_name;
