pub mod config;
pub mod error;
pub mod synthesis;
pub mod telemetry;
