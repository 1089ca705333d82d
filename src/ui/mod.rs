// src/ui/mod.rs
pub mod analyze;
pub mod chat;
pub mod trend_chart;

pub use chat::ChatPanel;
