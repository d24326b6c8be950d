#![deny(unsafe_code)]

pub mod export;
pub mod summary;

pub use export::export_template;
pub use summary::render_summary;
