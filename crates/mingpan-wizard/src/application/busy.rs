//! Busy affordance for action controls.

use mingpan_core::view::{Control, WizardView};

use crate::config::DEFAULT_BUSY_LABEL;

/// Disables a control and swaps in a busy label until dropped.
///
/// Dropping restores the previous label and re-enables the control, so the
/// release runs on success, failure, and early return alike.
pub(crate) struct BusyGuard<'a> {
    view: &'a dyn WizardView,
    control: Control,
    previous_label: String,
}

impl<'a> BusyGuard<'a> {
    pub(crate) fn engage(view: &'a dyn WizardView, control: Control, busy_label: &str) -> Self {
        let previous_label = view.control_label(control);
        let busy_label = if busy_label.is_empty() {
            DEFAULT_BUSY_LABEL
        } else {
            busy_label
        };
        view.set_control_enabled(control, false);
        view.set_control_label(control, busy_label);
        Self {
            view,
            control,
            previous_label,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.view.set_control_enabled(self.control, true);
        if !self.previous_label.is_empty() {
            self.view.set_control_label(self.control, &self.previous_label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingpan_test_support::FakeView;

    #[test]
    fn test_engage_disables_and_relabels_control() {
        let view = FakeView::new();

        let _guard = BusyGuard::engage(&view, Control::SubmitChart, "排盤中…");

        assert!(!view.is_control_enabled(Control::SubmitChart));
        assert_eq!(view.control_label(Control::SubmitChart), "排盤中…");
    }

    #[test]
    fn test_drop_restores_label_and_enables_control() {
        let view = FakeView::new();
        let original = view.control_label(Control::RequestResult);

        {
            let _guard = BusyGuard::engage(&view, Control::RequestResult, "生成中…");
        }

        assert!(view.is_control_enabled(Control::RequestResult));
        assert_eq!(view.control_label(Control::RequestResult), original);
    }

    #[test]
    fn test_empty_busy_label_falls_back_to_default() {
        let view = FakeView::new();

        let _guard = BusyGuard::engage(&view, Control::SubmitChart, "");

        assert_eq!(view.control_label(Control::SubmitChart), DEFAULT_BUSY_LABEL);
    }
}
