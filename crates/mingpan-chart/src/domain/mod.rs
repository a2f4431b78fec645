//! Domain types for the Chart context.

pub mod chart;
pub mod question;
pub mod requests;
