use std::fmt;

use serde::Serialize;

/// Letter grade produced by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NutriLabel {
    A,
    B,
    C,
    D,
    E,
}

/// Ordered category produced by the outranking classifier. Same ordinal
/// scale as [`NutriLabel`], marked with a trailing apostrophe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "A'")]
    APrime,
    #[serde(rename = "B'")]
    BPrime,
    #[serde(rename = "C'")]
    CPrime,
    #[serde(rename = "D'")]
    DPrime,
    #[serde(rename = "E'")]
    EPrime,
}

impl NutriLabel {
    pub const ALL: [NutriLabel; 5] = [
        NutriLabel::A,
        NutriLabel::B,
        NutriLabel::C,
        NutriLabel::D,
        NutriLabel::E,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NutriLabel::A => "A",
            NutriLabel::B => "B",
            NutriLabel::C => "C",
            NutriLabel::D => "D",
            NutriLabel::E => "E",
        }
    }

    /// 4 for the best grade, 0 for the worst.
    pub fn rank(self) -> u8 {
        4 - self as u8
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_end_matches('\'');
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(raw))
    }
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::APrime,
        Category::BPrime,
        Category::CPrime,
        Category::DPrime,
        Category::EPrime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::APrime => "A'",
            Category::BPrime => "B'",
            Category::CPrime => "C'",
            Category::DPrime => "D'",
            Category::EPrime => "E'",
        }
    }

    /// 4 for the best category, 0 for the worst.
    pub fn rank(self) -> u8 {
        4 - self as u8
    }
}

impl fmt::Display for NutriLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
