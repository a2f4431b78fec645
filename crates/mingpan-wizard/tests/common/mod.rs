//! Shared helpers for wizard integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use mingpan_core::gateway::JsonGateway;
use mingpan_core::view::Field;
use mingpan_test_support::FakeView;
use mingpan_wizard::application::controller::WizardController;
use mingpan_wizard::config::WizardConfig;

/// Build a controller over a fresh `FakeView` and the given gateway.
pub fn build_controller(gateway: Arc<dyn JsonGateway>) -> (WizardController, Arc<FakeView>) {
    let view = Arc::new(FakeView::new());
    let controller = WizardController::new(view.clone(), gateway, WizardConfig::default());
    (controller, view)
}

/// Fill the birth-data form the way a user would, leaving the city empty.
pub fn fill_birth_form(view: &FakeView) {
    view.fill(Field::BirthDate, "1990-01-01");
    view.fill(Field::BirthTime, "08:00");
    view.fill(Field::Gender, "male");
}
