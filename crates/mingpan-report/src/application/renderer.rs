//! Renderer for the result region.
//!
//! Composes four independent panels from one payload: the KPI strip, the
//! interpretation lists, the future timeline table, and the past review
//! table.

use std::fmt::Write;

use mingpan_core::sanitize::escape_html;

use crate::domain::report::{Future, PastReview, ResultPayload, ReviewItem, YearProjection};

/// Draws the full result region.
#[must_use]
pub fn render_result(payload: &ResultPayload) -> String {
    let mut out = String::new();
    out.push_str(&kpi_panel(&payload.past_review, &payload.future));
    out.push_str(&interpretation_panel(&payload.future));
    out.push_str(&timeline_panel(&payload.future.timeline));
    out.push_str(&review_panel(&payload.past_review.items));
    out
}

fn kpi_panel(past: &PastReview, future: &Future) -> String {
    let summary = &future.summary;
    format!(
        "<div class=\"panel\"><div class=\"kpi\">\
         <span class=\"tag\">作答：{answered}/{total}</span>\
         <span class=\"tag\">符合：{matched}/{total}</span>\
         <span class=\"tag\">匹配分數：{score}</span>\
         <span class=\"tag\">可信度：{confidence}</span>\
         <span class=\"tag\">日主：{element}（{strength}）</span>\
         </div></div>",
        answered = past.answered,
        total = past.total,
        matched = past.matched,
        score = past.match_score,
        confidence = escape_html(&future.confidence),
        element = escape_html(&summary.day_master_element),
        strength = escape_html(&summary.day_master_strength),
    )
}

fn interpretation_panel(future: &Future) -> String {
    format!(
        "<div class=\"panel\">\
         <h3>核心解讀</h3><ul>{focus}</ul>\
         <h3>行動建議</h3><ul>{tips}</ul>\
         <p class=\"hint\">{note}</p>\
         </div>",
        focus = bullet_items(&future.summary.focus),
        tips = bullet_items(&future.summary.tips),
        note = escape_html(future.note.as_deref().unwrap_or_default()),
    )
}

fn bullet_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

fn timeline_panel(timeline: &[YearProjection]) -> String {
    let mut rows = String::new();
    for year in timeline {
        // `write!` into a `String` cannot fail.
        let _ = write!(
            rows,
            "<tr><td>{year}</td><td>{element}</td><td><span class=\"{class}\">{badge}</span></td><td>{advice}</td></tr>",
            year = escape_html(&year.year),
            element = escape_html(&year.year_element),
            class = year.level.badge_class(),
            badge = year.level.label(),
            advice = escape_html(&year.advice),
        );
    }
    format!(
        "<div class=\"panel\"><h3>未來 5 年趨勢</h3>\
         <table class=\"table\"><thead><tr>\
         <th style=\"width:86px\">年份</th>\
         <th style=\"width:72px\">年五行</th>\
         <th style=\"width:86px\">強弱</th>\
         <th>建議</th>\
         </tr></thead><tbody>{rows}</tbody></table></div>"
    )
}

fn yes_no(value: bool) -> &'static str {
    if value { "是" } else { "否" }
}

fn review_row(index: usize, item: &ReviewItem) -> String {
    let badge = if item.matched {
        "<span class=\"badge ok\">符合</span>"
    } else {
        "<span class=\"badge no\">不符</span>"
    };
    format!(
        "<tr><td>{number}</td><td>{question}</td><td>{expected} / {answer} {badge}</td><td>{rationale}</td></tr>",
        number = index + 1,
        question = escape_html(&item.question),
        expected = escape_html(yes_no(item.expected_yes)),
        answer = escape_html(yes_no(item.your_answer)),
        rationale = escape_html(&item.rationale),
    )
}

fn review_panel(items: &[ReviewItem]) -> String {
    let rows: String = items
        .iter()
        .enumerate()
        .map(|(index, item)| review_row(index, item))
        .collect();
    format!(
        "<div class=\"panel\"><h3>過去 5 年驗證回顧</h3>\
         <table class=\"table\"><thead><tr>\
         <th style=\"width:56px\">題</th>\
         <th>問題</th>\
         <th style=\"width:180px\">預期 / 你的回答</th>\
         <th>推演理由</th>\
         </tr></thead><tbody>{rows}</tbody></table></div>"
    )
}
