//! Panel renderers for the Chart context.

pub mod renderers;
