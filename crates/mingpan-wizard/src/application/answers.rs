//! Answer collection from the live page.

use mingpan_chart::domain::question::Question;
use mingpan_core::view::{RadioSelector, RadioValue, WizardView};
use mingpan_report::domain::requests::AnswerMap;

/// Reads the current radio selections for `questions` into a fresh map.
///
/// A checked "yes" records `true`, a checked "no" records `false`, and a
/// question with neither checked is left out of the map entirely. Inputs are
/// addressed by exact group name, never by markup-escaped text.
pub fn collect_answers(view: &dyn WizardView, questions: &[Question]) -> AnswerMap {
    let mut answers = AnswerMap::new();
    for question in questions {
        if view.is_checked(&RadioSelector::new(&question.id, RadioValue::Yes)) {
            answers.insert(question.id.clone(), true);
        }
        if view.is_checked(&RadioSelector::new(&question.id, RadioValue::No)) {
            answers.insert(question.id.clone(), false);
        }
    }
    answers
}
