//! Mingpan — Wizard orchestration.
//!
//! Owns the transient wizard state, collects answers from the page, and
//! drives the input → questions → result step machine over a
//! [`JsonGateway`](mingpan_core::gateway::JsonGateway) and a
//! [`WizardView`](mingpan_core::view::WizardView).

pub mod application;
pub mod config;
pub mod domain;
