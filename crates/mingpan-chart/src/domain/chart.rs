//! The birth chart as returned by the chart engine.
//!
//! Server-authoritative and read-only: the client never recomputes or
//! validates it, only renders it.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One pillar: a stem glyph over a branch glyph, each with its element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    /// Combined two-glyph label, e.g. `甲子`.
    pub text: String,
    /// Heavenly stem glyph.
    pub gan: String,
    /// Element of the stem.
    pub gan_element: String,
    /// Earthly branch glyph.
    pub zhi: String,
    /// Element of the branch.
    pub zhi_element: String,
}

/// The four pillars. All four slots are required by decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pillars {
    /// 年柱
    pub year: Pillar,
    /// 月柱
    pub month: Pillar,
    /// 日柱
    pub day: Pillar,
    /// 時柱
    pub time: Pillar,
}

impl Pillars {
    /// The pillars with their display labels, in fixed slot order.
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, &Pillar); 4] {
        [
            ("年柱", &self.year),
            ("月柱", &self.month),
            ("日柱", &self.day),
            ("時柱", &self.time),
        ]
    }
}

/// The five elements in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// 木火土金水.
    pub const CANONICAL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// The glyph the engine uses as the map key for this element.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

/// Elemental balance of the chart.
///
/// Percentages are supplied independently by the engine and are not required
/// to sum to 100.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FiveElements {
    /// Occurrences per element glyph.
    #[serde(default)]
    pub counts: BTreeMap<String, u32>,
    /// Share per element glyph, nominally 0–100.
    #[serde(default)]
    pub percent: BTreeMap<String, f64>,
}

impl FiveElements {
    /// Count for `element`, 0 when absent.
    #[must_use]
    pub fn count(&self, element: Element) -> u32 {
        self.counts.get(element.glyph()).copied().unwrap_or(0)
    }

    /// Percent for `element`, 0 when absent.
    #[must_use]
    pub fn percent(&self, element: Element) -> f64 {
        self.percent.get(element.glyph()).copied().unwrap_or(0.0)
    }
}

/// Day-master summary the engine attaches to the chart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayMaster {
    /// Stem glyph of the day pillar.
    pub gan: String,
    /// Element of that stem.
    pub element: String,
}

/// A computed birth chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// The four pillars.
    pub pillars: Pillars,
    /// Elemental balance.
    pub five_elements: FiveElements,
    /// Day master, when the engine includes it.
    #[serde(default)]
    pub day_master: Option<DayMaster>,
}
