//! Shared test fakes and fixtures for the Mingpan wizard.

pub mod fixtures;
mod gateway;
mod view;

pub use gateway::{FailingGateway, GatedGateway, RecordingGateway};
pub use view::FakeView;
