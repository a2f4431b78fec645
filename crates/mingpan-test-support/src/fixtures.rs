//! JSON payloads shaped like the chart engine's responses.

use serde_json::{Value, json};

fn pillar(gan: &str, gan_element: &str, zhi: &str, zhi_element: &str) -> Value {
    json!({
        "text": format!("{gan}{zhi}"),
        "gan": gan,
        "ganElement": gan_element,
        "zhi": zhi,
        "zhiElement": zhi_element,
    })
}

/// A chart for 庚午 / 丙子 / 甲寅 / 戊辰.
#[must_use]
pub fn chart_json() -> Value {
    json!({
        "key": "庚午丙子甲寅戊辰",
        "pillars": {
            "year": pillar("庚", "金", "午", "火"),
            "month": pillar("丙", "火", "子", "水"),
            "day": pillar("甲", "木", "寅", "木"),
            "time": pillar("戊", "土", "辰", "土"),
        },
        "dayMaster": { "gan": "甲", "element": "木" },
        "fiveElements": {
            "counts": { "木": 2, "火": 2, "土": 2, "金": 1, "水": 1 },
            "percent": { "木": 25.0, "火": 25.0, "土": 25.0, "金": 12.5, "水": 12.5 },
        },
    })
}

/// A `/api/chart` response with `questions` numbered questions `q1..qN`.
#[must_use]
pub fn chart_response_json(session_id: &str, questions: usize) -> Value {
    let questions: Vec<Value> = (1..=questions)
        .map(|n| json!({ "id": format!("q{n}"), "text": format!("第 {n} 題：那一年是否有重大變動？") }))
        .collect();
    json!({
        "sessionId": session_id,
        "chart": chart_json(),
        "verificationQuestions": questions,
    })
}

/// A `/api/result` response where every question was answered "yes" and the
/// first `matched` of `total` matched the expectation.
#[must_use]
pub fn result_json(total: u32, matched: u32) -> Value {
    let items: Vec<Value> = (0..total)
        .map(|i| {
            json!({
                "id": format!("q{}", i + 1),
                "question": format!("第 {} 題：那一年是否有重大變動？", i + 1),
                "expectedYes": i < matched,
                "yourAnswer": true,
                "matched": i < matched,
                "rationale": "流年五行與日主相生",
            })
        })
        .collect();
    json!({
        "pastReview": {
            "answered": total,
            "total": total,
            "matched": matched,
            "matchScore": f64::from(matched) / f64::from(total.max(1)),
            "items": items,
        },
        "future": {
            "confidence": "低",
            "summary": {
                "dayMasterElement": "木",
                "dayMasterStrength": "偏弱",
                "focus": ["五行偏缺：金"],
                "tips": ["把目標拆成季度里程碑"],
            },
            "timeline": [
                { "year": 2026, "yearElement": "火", "level": "順勢", "advice": "主動爭取" },
                { "year": 2027, "yearElement": "火", "level": "保守", "advice": "守成為主" },
                { "year": 2028, "yearElement": "土", "level": "平穩", "advice": "按部就班" },
            ],
            "note": "僅供自我反思",
        },
    })
}
