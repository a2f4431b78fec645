//! A `WizardView` backed by process memory, for terminal use.
//!
//! Regions hold the rendered markup; form fields and radio selections are
//! set by the host before triggering an action. Notifications go to stderr.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use mingpan_core::view::{Control, Field, RadioSelector, RadioValue, Region, Step, WizardView};

#[derive(Debug, Default)]
struct Page {
    regions: BTreeMap<Region, String>,
    step: Step,
    fields: HashMap<Field, String>,
    checked: HashMap<String, RadioValue>,
    labels: HashMap<Control, String>,
    disabled: BTreeSet<Control>,
}

/// The page a terminal session drives.
#[derive(Debug, Default)]
pub struct TerminalView {
    page: Mutex<Page>,
}

impl TerminalView {
    /// Creates an empty page on the input step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored.
    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets a form field.
    pub fn fill(&self, field: Field, value: &str) {
        self.page().fields.insert(field, value.to_owned());
    }

    /// Checks one option of a radio group.
    pub fn select(&self, group: &str, value: RadioValue) {
        self.page().checked.insert(group.to_owned(), value);
    }

    /// Contents of a region; empty when never set.
    #[must_use]
    pub fn region(&self, region: Region) -> String {
        self.page().regions.get(&region).cloned().unwrap_or_default()
    }

    /// The step last made visible.
    #[must_use]
    pub fn visible_step(&self) -> Step {
        self.page().step
    }
}

impl WizardView for TerminalView {
    fn set_region(&self, region: Region, markup: String) {
        let mut page = self.page();
        if region == Region::Questions {
            page.checked.clear();
        }
        page.regions.insert(region, markup);
    }

    fn set_step_visible(&self, step: Step, visible: bool) {
        if visible {
            self.page().step = step;
        }
    }

    fn field_value(&self, field: Field) -> Option<String> {
        self.page().fields.get(&field).cloned()
    }

    fn is_checked(&self, radio: &RadioSelector) -> bool {
        self.page().checked.get(&radio.group) == Some(&radio.value)
    }

    fn control_label(&self, control: Control) -> String {
        self.page()
            .labels
            .get(&control)
            .cloned()
            .unwrap_or_else(|| control.element_id().to_owned())
    }

    fn set_control_label(&self, control: Control, label: &str) {
        self.page().labels.insert(control, label.to_owned());
    }

    fn is_control_enabled(&self, control: Control) -> bool {
        !self.page().disabled.contains(&control)
    }

    fn set_control_enabled(&self, control: Control, enabled: bool) {
        let mut page = self.page();
        if enabled {
            page.disabled.remove(&control);
        } else {
            page.disabled.insert(control);
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
