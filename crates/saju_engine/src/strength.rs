//! Self-strength classification.

use serde::Serialize;

/// Absolute self-strength beyond which a chart is classed as extreme.
pub const EXTREME_THRESHOLD: i32 = 20;

/// Four-way class of the Day Element's self-strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthBand {
    ExtremelyDominant,
    Dominant,
    Recessive,
    ExtremelyRecessive,
}

impl StrengthBand {
    /// s > 20, 0 < s ≤ 20, −20 < s ≤ 0, s ≤ −20.
    pub const fn classify(strength: i32) -> Self {
        if strength > EXTREME_THRESHOLD {
            Self::ExtremelyDominant
        } else if strength > 0 {
            Self::Dominant
        } else if strength > -EXTREME_THRESHOLD {
            Self::Recessive
        } else {
            Self::ExtremelyRecessive
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtremelyDominant => "Extremely Dominant",
            Self::Dominant => "Dominant",
            Self::Recessive => "Recessive",
            Self::ExtremelyRecessive => "Extremely Recessive",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::ExtremelyDominant => "극신강",
            Self::Dominant => "신강",
            Self::Recessive => "신약",
            Self::ExtremelyRecessive => "극신약",
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
