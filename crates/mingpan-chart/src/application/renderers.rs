//! Renderers for the pillars, elements, and questions regions.
//!
//! Each renderer is a pure function from payload to a markup fragment that
//! fully replaces its region. Every server-supplied string passes through
//! [`escape_html`] exactly once.

use std::fmt::Write;

use mingpan_core::sanitize::escape_html;

use crate::domain::chart::{Element, FiveElements, Pillars};
use crate::domain::question::Question;

/// Draws the four pillar cards in year, month, day, time order.
#[must_use]
pub fn render_pillars(pillars: &Pillars) -> String {
    let mut out = String::new();
    for (label, pillar) in pillars.labelled() {
        // `write!` into a `String` cannot fail.
        let _ = write!(
            out,
            "<div class=\"pillar\">\
             <div class=\"name\">{label}</div>\
             <div class=\"gz\">{text}</div>\
             <div class=\"detail\">天干：{gan}（{gan_element}）<br/>地支：{zhi}（{zhi_element}）</div>\
             </div>",
            text = escape_html(&pillar.text),
            gan = escape_html(&pillar.gan),
            gan_element = escape_html(&pillar.gan_element),
            zhi = escape_html(&pillar.zhi),
            zhi_element = escape_html(&pillar.zhi_element),
        );
    }
    out
}

/// Draws one bar per element in 木火土金水 order.
///
/// The fill width is the raw percent value; out-of-range values are not
/// clamped.
#[must_use]
pub fn render_elements(elements: &FiveElements) -> String {
    let mut out = String::new();
    for element in Element::CANONICAL {
        let count = elements.count(element);
        let percent = elements.percent(element);
        let _ = write!(
            out,
            "<div class=\"bar\">\
             <div class=\"row\"><span>{glyph}</span><span>{count}（{percent}%）</span></div>\
             <div class=\"track\"><div class=\"fill\" style=\"width:{percent}%\"></div></div>\
             </div>",
            glyph = escape_html(element.glyph()),
        );
    }
    out
}

/// Draws one row per question, numbered from 1, each with an unselected
/// yes/no radio pair named by the question id.
#[must_use]
pub fn render_questions(questions: &[Question]) -> String {
    let mut out = String::new();
    for (index, question) in questions.iter().enumerate() {
        let id = escape_html(&question.id);
        let _ = write!(
            out,
            "<div class=\"q\" data-qid=\"{id}\">\
             <div class=\"text\">{number}. {text}</div>\
             <div class=\"opts\">\
             <label class=\"pill\"><input type=\"radio\" name=\"{id}\" value=\"yes\" />是</label>\
             <label class=\"pill\"><input type=\"radio\" name=\"{id}\" value=\"no\" />否</label>\
             </div>\
             </div>",
            number = index + 1,
            text = escape_html(&question.text),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Chart;
    use mingpan_test_support::fixtures;

    fn fixture_chart() -> Chart {
        serde_json::from_value(fixtures::chart_json()).unwrap()
    }

    // --- render_pillars ---

    #[test]
    fn test_render_pillars_emits_four_cards_in_slot_order() {
        // Arrange
        let chart = fixture_chart();

        // Act
        let markup = render_pillars(&chart.pillars);

        // Assert
        assert_eq!(markup.matches("<div class=\"pillar\">").count(), 4);
        let positions: Vec<usize> = ["年柱", "月柱", "日柱", "時柱"]
            .iter()
            .map(|label| markup.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_pillars_ignores_source_key_order() {
        // Arrange
        let original = fixtures::chart_json();
        let pillars = &original["pillars"];
        let reversed = serde_json::json!({
            "time": pillars["time"],
            "day": pillars["day"],
            "month": pillars["month"],
            "year": pillars["year"],
        });
        let chart: Pillars = serde_json::from_value(reversed).unwrap();

        // Act
        let markup = render_pillars(&chart);

        // Assert
        let year = markup.find("庚午").unwrap();
        let month = markup.find("丙子").unwrap();
        let day = markup.find("甲寅").unwrap();
        let time = markup.find("戊辰").unwrap();
        assert!(year < month && month < day && day < time);
    }

    #[test]
    fn test_render_pillars_shows_stem_and_branch_with_elements() {
        let markup = render_pillars(&fixture_chart().pillars);

        assert!(markup.contains("天干：甲（木）"));
        assert!(markup.contains("地支：辰（土）"));
    }

    #[test]
    fn test_render_pillars_escapes_pillar_text() {
        let mut json = fixtures::chart_json();
        json["pillars"]["year"]["text"] = serde_json::json!("<img onerror=x>");
        let chart: Chart = serde_json::from_value(json).unwrap();

        let markup = render_pillars(&chart.pillars);

        assert!(markup.contains("&lt;img onerror=x&gt;"));
        assert!(!markup.contains("<img"));
    }

    // --- render_elements ---

    #[test]
    fn test_render_elements_emits_five_bars_in_canonical_order() {
        let markup = render_elements(&fixture_chart().five_elements);

        assert_eq!(markup.matches("<div class=\"bar\">").count(), 5);
        let positions: Vec<usize> = [
            "<span>木</span>",
            "<span>火</span>",
            "<span>土</span>",
            "<span>金</span>",
            "<span>水</span>",
        ]
        .iter()
        .map(|glyph| markup.find(glyph).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_elements_prints_count_percent_and_fill_width() {
        let markup = render_elements(&fixture_chart().five_elements);

        assert!(markup.contains("<span>2（25%）</span>"));
        assert!(markup.contains("<span>1（12.5%）</span>"));
        assert!(markup.contains("style=\"width:25%\""));
        assert!(markup.contains("style=\"width:12.5%\""));
    }

    #[test]
    fn test_render_elements_defaults_absent_elements_to_zero() {
        let elements: FiveElements = serde_json::from_value(serde_json::json!({
            "counts": { "火": 4 },
            "percent": { "火": 100 },
        }))
        .unwrap();

        let markup = render_elements(&elements);

        assert!(markup.contains("<span>4（100%）</span>"));
        assert_eq!(markup.matches("<span>0（0%）</span>").count(), 4);
        assert_eq!(markup.matches("style=\"width:0%\"").count(), 4);
    }

    #[test]
    fn test_render_elements_does_not_clamp_out_of_range_percent() {
        let elements: FiveElements = serde_json::from_value(serde_json::json!({
            "counts": { "水": 1 },
            "percent": { "水": 140 },
        }))
        .unwrap();

        let markup = render_elements(&elements);

        assert!(markup.contains("style=\"width:140%\""));
    }

    // --- render_questions ---

    #[test]
    fn test_render_questions_numbers_rows_from_one() {
        let questions = vec![
            Question {
                id: "q1".to_owned(),
                text: "2022 年是否換工作？".to_owned(),
            },
            Question {
                id: "q2".to_owned(),
                text: "2023 年是否搬家？".to_owned(),
            },
        ];

        let markup = render_questions(&questions);

        assert_eq!(markup.matches("<div class=\"q\"").count(), 2);
        assert!(markup.contains("1. 2022 年是否換工作？"));
        assert!(markup.contains("2. 2023 年是否搬家？"));
    }

    #[test]
    fn test_render_questions_names_radio_pair_by_question_id() {
        let questions = vec![Question {
            id: "miss_金".to_owned(),
            text: "?".to_owned(),
        }];

        let markup = render_questions(&questions);

        assert!(markup.contains("data-qid=\"miss_金\""));
        assert!(markup.contains("name=\"miss_金\" value=\"yes\""));
        assert!(markup.contains("name=\"miss_金\" value=\"no\""));
        assert!(!markup.contains("checked"));
    }

    #[test]
    fn test_render_questions_escapes_ids_and_text() {
        let questions = vec![Question {
            id: "a\"b".to_owned(),
            text: "<b>bold</b>".to_owned(),
        }];

        let markup = render_questions(&questions);

        assert!(markup.contains("name=\"a&quot;b\""));
        assert!(markup.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_render_questions_with_no_questions_is_empty() {
        assert_eq!(render_questions(&[]), "");
    }
}
