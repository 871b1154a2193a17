use crate::tokens::NewTypographyToken;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRatio {
    pub name: &'static str,
    pub value: f64,
}

pub const TYPE_SCALE_RATIOS: [ScaleRatio; 6] = [
    ScaleRatio {
        name: "Minor Second",
        value: 1.067,
    },
    ScaleRatio {
        name: "Major Second",
        value: 1.125,
    },
    ScaleRatio {
        name: "Minor Third",
        value: 1.2,
    },
    ScaleRatio {
        name: "Major Third",
        value: 1.25,
    },
    ScaleRatio {
        name: "Perfect Fourth",
        value: 1.333,
    },
    ScaleRatio {
        name: "Golden Ratio",
        value: 1.618,
    },
];

pub const DEFAULT_BASE_SIZE: f64 = 16.0;
pub const DEFAULT_RATIO: f64 = 1.25;

// (name, exponent, weight, line height)
const SCALE_STEPS: [(&str, i32, &str, &str); 8] = [
    ("text-xs", -2, "400", "1.5"),
    ("text-sm", -1, "400", "1.5"),
    ("text-base", 0, "400", "1.5"),
    ("text-lg", 1, "400", "1.5"),
    ("text-xl", 2, "600", "1.4"),
    ("text-2xl", 3, "600", "1.3"),
    ("text-3xl", 4, "700", "1.2"),
    ("text-4xl", 5, "700", "1.1"),
];

pub fn ratio_by_name(name: &str) -> Option<ScaleRatio> {
    TYPE_SCALE_RATIOS
        .iter()
        .copied()
        .find(|ratio| ratio.name.eq_ignore_ascii_case(name))
}

pub fn format_px(size: f64) -> String {
    format!("{size:.2}px")
}

/// Modular type scale around `base`: two steps down, five steps up.
pub fn type_scale(base: f64, ratio: f64) -> Vec<NewTypographyToken> {
    SCALE_STEPS
        .iter()
        .map(|(name, exponent, weight, line_height)| {
            NewTypographyToken::new(
                *name,
                format_px(base * ratio.powi(*exponent)),
                *line_height,
                *weight,
            )
        })
        .collect()
}
