//! Domain types for the wizard.

pub mod state;
