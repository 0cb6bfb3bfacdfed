pub mod config;
pub mod document_mask;
