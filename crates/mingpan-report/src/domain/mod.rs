//! Domain types for the Report context.

pub mod report;
pub mod requests;
