//! OD Recife - Origin-Destination Survey Analysis
//!
//! Library side of the analysis: survey loading and recoding, category
//! tallies, the four thematic reporters and static chart rendering.

pub mod charts;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod stats;
