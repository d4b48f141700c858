//! Nbastat - batch analyzer for NBA player season statistics
//!
//! This library provides the building blocks behind the `nbastat` binary:
//! TSV loading into typed records, per-player season aggregation, a
//! least-squares trend fit with exact line integration, piecewise-linear
//! interpolation, and descriptive/inferential statistics over the field-goal
//! columns.

pub mod cli;
pub mod descriptive;
pub mod error;
pub mod hypothesis;
pub mod interpolate;
pub mod loader;
pub mod report;
pub mod seasons;
pub mod shooting;
pub mod trend;
