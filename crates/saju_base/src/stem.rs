//! The 10 heavenly stems (cheongan).
//!
//! Stems run in a fixed 10-cycle starting at 甲 (Gap). Element and polarity
//! live in [`crate::ElementMap`]; this module only names and indexes them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = Gap).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Hangul reading.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// 0-based index into ALL_STEMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem from any integer, reduced mod 10.
    pub const fn from_cycle(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Stem {
    type Err = SymbolError;

    /// Accepts the romanized name (case-insensitive), hanja or hangul.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .into_iter()
            .find(|stem| {
                stem.name().eq_ignore_ascii_case(s) || stem.hanja() == s || stem.hangul() == s
            })
            .ok_or_else(|| SymbolError::UnknownStem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn from_cycle_wraps_both_ways() {
        assert_eq!(Stem::from_cycle(10), Stem::Gap);
        assert_eq!(Stem::from_cycle(17), Stem::Sin);
        assert_eq!(Stem::from_cycle(-1), Stem::Gye);
    }

    #[test]
    fn parse_any_script() {
        assert_eq!("gyeong".parse::<Stem>().unwrap(), Stem::Gyeong);
        assert_eq!("庚".parse::<Stem>().unwrap(), Stem::Gyeong);
        assert_eq!("경".parse::<Stem>().unwrap(), Stem::Gyeong);
        assert!("Rat".parse::<Stem>().is_err());
    }

    #[test]
    fn display_is_hanja() {
        assert_eq!(Stem::Im.to_string(), "壬");
    }
}
