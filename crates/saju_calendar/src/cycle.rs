//! Sexagenary (60-pair) cycle indexing.
//!
//! The 10 stems and 12 branches advance together but reduce independently
//! (mod 10 and mod 12). They realign every 60 steps, so only the 60 pairs
//! of matching parity ever occur.
//!
//! Epochs:
//! - CE 1984 is a 甲子 (Gap-Ja, Wood Rat) year.
//! - 1900-01-01 sits at cycle offset 10 (甲戌).

use saju_base::{Branch, Stem};

use crate::pillar::Pillar;

/// Length of the combined stem/branch cycle.
pub const CYCLE_LENGTH: i64 = 60;

/// Reference 甲子 year.
pub const YEAR_EPOCH: i32 = 1984;

/// 1900-01-01 expressed as `chrono::Datelike::num_days_from_ce`.
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 693_596;

/// Cycle offset of the 1900-01-01 day pillar. Changing it would shift every
/// day pillar ever computed.
pub const DAY_EPOCH_OFFSET: i64 = 10;

/// Pair up a stem index and a branch index, each reduced independently.
pub const fn sexagenary_index(stem_index: i64, branch_index: i64) -> Pillar {
    Pillar::new(Stem::from_cycle(stem_index), Branch::from_cycle(branch_index))
}

/// Pillar at a single cycle offset (0 = 甲子).
pub const fn pillar_at(offset: i64) -> Pillar {
    sexagenary_index(offset, offset)
}

/// 0-based position of a pillar in the 60-cycle.
///
/// Returns None for stem/branch pairs of mismatched parity, which the cycle
/// never produces.
pub fn cycle_position(pillar: Pillar) -> Option<u8> {
    let s = pillar.stem.index();
    let b = pillar.branch.index();
    (0..CYCLE_LENGTH as u8).find(|p| p % 10 == s && p % 12 == b)
}

/// The 60 pillars in cycle order.
pub const ALL_SEXAGENARY: [Pillar; 60] = {
    let mut out = [pillar_at(0); 60];
    let mut i = 0;
    while i < 60 {
        out[i] = pillar_at(i as i64);
        i += 1;
    }
    out
};

/// Iterate the 60 pillars in cycle order.
pub fn sexagenary_cycle() -> impl Iterator<Item = Pillar> {
    ALL_SEXAGENARY.into_iter()
}
