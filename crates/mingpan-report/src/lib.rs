//! Mingpan — Report bounded context.
//!
//! Responsible for the result payload (past verification review and future
//! trend projection) and the composed panel that draws it.

pub mod application;
pub mod domain;
