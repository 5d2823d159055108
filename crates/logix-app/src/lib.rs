//! Application layer for logixpress
//!
//! Configuration, the built-in sample dataset, report generation, analytics
//! sample metrics and the simulated order-intake service.

pub mod analytics;
pub mod config;
pub mod intake;
pub mod report;
pub mod sample;
