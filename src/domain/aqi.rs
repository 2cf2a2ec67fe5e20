use std::fmt;

/// Upper bound (inclusive) of the `Good` band.
pub const GOOD_MAX: f64 = 80.0;
/// Upper bound (inclusive) of the `Moderate` band.
pub const MODERATE_MAX: f64 = 150.0;

/// Qualitative banding of a predicted AQI value.
///
/// Variants are declared in severity order so the derived `Ord` matches
/// [`AqiCategory::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 3] = [Self::Good, Self::Moderate, Self::Unhealthy];

    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Good => 0,
            Self::Moderate => 1,
            Self::Unhealthy => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which of the two fixed palettes a color token is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderVariant {
    Text,
    Background,
}

/// A named color the display layer resolves against its own color capability.
///
/// `rgb` is `None` only for [`ColorToken::TRANSPARENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub name: &'static str,
    pub rgb: Option<(u8, u8, u8)>,
}

impl ColorToken {
    pub const TRANSPARENT: ColorToken = ColorToken {
        name: "transparent",
        rgb: None,
    };

    const fn solid(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: Some((r, g, b)),
        }
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.rgb.is_none()
    }
}

/// Maps a numeric AQI value to its category.
///
/// Each band is closed at its upper bound: exactly 80 is `Good`, exactly 150 is
/// `Moderate`. NaN has no meaningful ordering and is reported as `Good` so a
/// malformed upstream value still renders; callers that need to tell "missing"
/// apart must check before classifying.
#[must_use]
pub fn classify(aqi: f64) -> AqiCategory {
    if aqi.is_nan() {
        return AqiCategory::Good;
    }
    if aqi > MODERATE_MAX {
        AqiCategory::Unhealthy
    } else if aqi > GOOD_MAX {
        AqiCategory::Moderate
    } else {
        AqiCategory::Good
    }
}

#[must_use]
pub fn render(category: AqiCategory, variant: RenderVariant) -> ColorToken {
    match (variant, category) {
        (RenderVariant::Text, AqiCategory::Good) => ColorToken::solid("green-600", 22, 163, 74),
        (RenderVariant::Text, AqiCategory::Moderate) => {
            ColorToken::solid("yellow-600", 202, 138, 4)
        }
        (RenderVariant::Text, AqiCategory::Unhealthy) => {
            ColorToken::solid("red-600", 220, 38, 38)
        }
        (RenderVariant::Background, AqiCategory::Good) => {
            ColorToken::solid("green-200", 187, 247, 208)
        }
        (RenderVariant::Background, AqiCategory::Moderate) => {
            ColorToken::solid("yellow-200", 254, 240, 138)
        }
        (RenderVariant::Background, AqiCategory::Unhealthy) => {
            ColorToken::solid("red-200", 254, 202, 202)
        }
    }
}

/// Formats an AQI value for display, `--` when it is not a finite number.
#[must_use]
pub fn format_aqi(aqi: f64) -> String {
    if aqi.is_finite() {
        format!("{aqi:.1}")
    } else {
        "--".to_string()
    }
}
