//! Mingpan Core — shared abstractions.
//!
//! This crate defines the traits and types every other Mingpan crate depends
//! on: the error taxonomy, the JSON gateway seam, the view-binding seam, and
//! the text sanitizer. It contains no infrastructure code.

pub mod error;
pub mod gateway;
pub mod sanitize;
pub mod view;
