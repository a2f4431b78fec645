//! Panel renderer for the Report context.

pub mod renderer;
