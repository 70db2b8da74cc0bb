pub mod analytics;
pub mod config;
pub mod directory;
pub mod error;
pub mod listings;
pub mod pages;
pub mod stats;
pub mod team;
pub mod telemetry;
