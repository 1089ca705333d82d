// src/file/mod.rs
pub mod settings;
pub mod upload;

pub use upload::{read_log_file, LogUpload};
