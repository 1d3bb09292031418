// src/extractors/mod.rs
pub mod text;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use text::{extract_text, DocumentFormat};
