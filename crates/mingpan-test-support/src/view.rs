//! Test view — an in-memory `WizardView` with inspection helpers.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

use mingpan_core::view::{Control, Field, RadioSelector, RadioValue, Region, Step, WizardView};

#[derive(Debug, Default)]
struct Page {
    regions: BTreeMap<Region, String>,
    visible: BTreeSet<Step>,
    fields: HashMap<Field, String>,
    checked: HashMap<String, RadioValue>,
    labels: HashMap<Control, String>,
    disabled: BTreeSet<Control>,
    notifications: Vec<String>,
}

/// A page held in memory. Starts on the input step with every region empty
/// and every control enabled.
#[derive(Debug)]
pub struct FakeView {
    page: Mutex<Page>,
}

impl Default for FakeView {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeView {
    /// Creates a fresh page showing the input step.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Page::default();
        page.visible.insert(Step::Input);
        for (control, label) in [
            (Control::SubmitChart, "開始排盤"),
            (Control::Back, "上一步"),
            (Control::RequestResult, "生成報告"),
            (Control::Restart, "重新開始"),
        ] {
            page.labels.insert(control, label.to_owned());
        }
        Self {
            page: Mutex::new(page),
        }
    }

    /// Types `value` into a form field.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fill(&self, field: Field, value: &str) {
        self.page
            .lock()
            .unwrap()
            .fields
            .insert(field, value.to_owned());
    }

    /// Selects one option of a radio group, deselecting the other.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn select(&self, group: &str, value: RadioValue) {
        self.page
            .lock()
            .unwrap()
            .checked
            .insert(group.to_owned(), value);
    }

    /// Contents of a region; empty when never set.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn region(&self, region: Region) -> String {
        self.page
            .lock()
            .unwrap()
            .regions
            .get(&region)
            .cloned()
            .unwrap_or_default()
    }

    /// Steps currently visible, in wizard order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn visible_steps(&self) -> Vec<Step> {
        self.page.lock().unwrap().visible.iter().copied().collect()
    }

    /// All messages surfaced so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn notifications(&self) -> Vec<String> {
        self.page.lock().unwrap().notifications.clone()
    }
}

impl WizardView for FakeView {
    fn set_region(&self, region: Region, markup: String) {
        let mut page = self.page.lock().unwrap();
        if region == Region::Questions {
            page.checked.clear();
        }
        page.regions.insert(region, markup);
    }

    fn set_step_visible(&self, step: Step, visible: bool) {
        let mut page = self.page.lock().unwrap();
        if visible {
            page.visible.insert(step);
        } else {
            page.visible.remove(&step);
        }
    }

    fn field_value(&self, field: Field) -> Option<String> {
        self.page.lock().unwrap().fields.get(&field).cloned()
    }

    fn is_checked(&self, radio: &RadioSelector) -> bool {
        self.page.lock().unwrap().checked.get(&radio.group) == Some(&radio.value)
    }

    fn control_label(&self, control: Control) -> String {
        self.page
            .lock()
            .unwrap()
            .labels
            .get(&control)
            .cloned()
            .unwrap_or_default()
    }

    fn set_control_label(&self, control: Control, label: &str) {
        self.page
            .lock()
            .unwrap()
            .labels
            .insert(control, label.to_owned());
    }

    fn is_control_enabled(&self, control: Control) -> bool {
        !self.page.lock().unwrap().disabled.contains(&control)
    }

    fn set_control_enabled(&self, control: Control, enabled: bool) {
        let mut page = self.page.lock().unwrap();
        if enabled {
            page.disabled.remove(&control);
        } else {
            page.disabled.insert(control);
        }
    }

    fn notify(&self, message: &str) {
        self.page
            .lock()
            .unwrap()
            .notifications
            .push(message.to_owned());
    }
}
