//! View-binding abstraction.
//!
//! The wizard never touches a rendering surface directly. Hosts implement
//! [`WizardView`] over whatever surface they own (a browser document, a
//! terminal page, an in-memory fake in tests) and address it through the
//! fixed logical identifiers below.

use crate::sanitize::escape_css_identifier;

/// A screen region whose contents a renderer fully replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// The four pillar cards.
    Pillars,
    /// The five-element bars.
    Elements,
    /// The verification question rows.
    Questions,
    /// The composed result report.
    Result,
}

impl Region {
    /// All regions, in page order.
    pub const ALL: [Region; 4] = [
        Region::Pillars,
        Region::Elements,
        Region::Questions,
        Region::Result,
    ];

    /// The element id the page shell uses for this region.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Pillars => "pillars",
            Region::Elements => "elements",
            Region::Questions => "questions",
            Region::Result => "result",
        }
    }
}

/// A wizard step container. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    /// Birth-data form.
    #[default]
    Input,
    /// Chart plus verification questions.
    Questions,
    /// Generated report.
    Result,
}

impl Step {
    /// All steps, in wizard order.
    pub const ALL: [Step; 3] = [Step::Input, Step::Questions, Step::Result];

    /// The element id the page shell uses for this step container.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Step::Input => "step1",
            Step::Questions => "step2",
            Step::Result => "step3",
        }
    }
}

/// An action control the wizard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    /// Submits the birth-data form.
    SubmitChart,
    /// Returns from the questions step to the form.
    Back,
    /// Requests the report for the current answers.
    RequestResult,
    /// Clears everything and returns to the form.
    Restart,
}

impl Control {
    /// The element id the page shell uses for this control.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Control::SubmitChart => "btnChart",
            Control::Back => "btnBack",
            Control::RequestResult => "btnResult",
            Control::Restart => "btnRestart",
        }
    }
}

/// A birth-data form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `YYYY-MM-DD`.
    BirthDate,
    /// `HH` or `HH:MM`, 24h.
    BirthTime,
    /// `male`, `female` or `other`.
    Gender,
    /// Optional birth city, display only.
    City,
}

impl Field {
    /// The element id the page shell uses for this field.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Field::BirthDate => "birthDate",
            Field::BirthTime => "birthTime",
            Field::Gender => "gender",
            Field::City => "city",
        }
    }
}

/// One of the two radio options rendered for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadioValue {
    /// 是
    Yes,
    /// 否
    No,
}

impl RadioValue {
    /// The `value` attribute of the radio input.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RadioValue::Yes => "yes",
            RadioValue::No => "no",
        }
    }
}

/// Exact-match address of one radio input: group name plus option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadioSelector {
    /// The input-group name, i.e. the question id, unescaped.
    pub group: String,
    /// The option within the group.
    pub value: RadioValue,
}

impl RadioSelector {
    /// Creates a selector for `value` within the group named `group`.
    #[must_use]
    pub fn new(group: impl Into<String>, value: RadioValue) -> Self {
        Self {
            group: group.into(),
            value,
        }
    }

    /// Renders the selector as a CSS query matching the checked input.
    ///
    /// The group name is escaped as a CSS identifier, so ids containing
    /// selector syntax still match exactly.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "input[name=\"{}\"][value=\"{}\"]:checked",
            escape_css_identifier(&self.group),
            self.value.as_str()
        )
    }
}

/// Capability interface over the page the wizard drives.
///
/// Implementations use interior mutability: the wizard runs on a single UI
/// thread and only ever holds a shared reference.
pub trait WizardView {
    /// Replaces the full contents of `region` with `markup`.
    ///
    /// Replacing [`Region::Questions`] discards the old radio inputs, so
    /// every radio selection is dropped with them.
    fn set_region(&self, region: Region, markup: String);

    /// Shows or hides one step container.
    fn set_step_visible(&self, step: Step, visible: bool);

    /// Current value of a form field, `None` when the field is absent.
    fn field_value(&self, field: Field) -> Option<String>;

    /// Whether the radio input addressed by `radio` is checked.
    ///
    /// Hosts that look inputs up through a selector engine must resolve
    /// `radio` with [`RadioSelector::to_css`], never by splicing the raw group
    /// name into a query.
    fn is_checked(&self, radio: &RadioSelector) -> bool;

    /// Current label of a control.
    fn control_label(&self, control: Control) -> String;

    /// Replaces the label of a control.
    fn set_control_label(&self, control: Control, label: &str);

    /// Whether a control currently accepts activation.
    fn is_control_enabled(&self, control: Control) -> bool;

    /// Enables or disables a control.
    fn set_control_enabled(&self, control: Control, enabled: bool);

    /// Surfaces a message to the user.
    fn notify(&self, message: &str);
}
