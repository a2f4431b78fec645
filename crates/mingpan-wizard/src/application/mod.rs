//! Wizard application layer: answer collection and the step controller.

pub mod answers;
mod busy;
pub mod controller;
