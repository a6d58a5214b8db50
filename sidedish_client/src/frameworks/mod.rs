// Frameworks layer: configuration loading and process bootstrap.

pub mod app;
pub mod config;
