//! Mingpan — Chart bounded context.
//!
//! Responsible for the birth-chart payload (four pillars, five-element
//! balance), the verification questions issued with it, and the panels that
//! draw them.

pub mod application;
pub mod domain;
