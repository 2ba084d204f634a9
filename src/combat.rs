//! Expected-outcome combat model.
//!
//! An attacking army is assumed to destroy `COMBAT_RATIO` defenders per
//! attacker, so holding or taking a region comes down to two ceilings.
//! The ratio is applied as the exact fraction 3/5 to keep the rounding
//! mathematically exact for every troop count.

/// Expected defenders destroyed per attacking army.
pub const COMBAT_RATIO: f64 = 0.6;

const RATIO_NUM: u64 = 3;
const RATIO_DEN: u64 = 5;

/// Armies needed to take a region held by `defending` troops:
/// `ceil(defending / 0.6)`.
pub fn troops_needed_to_overcome(defending: u32) -> u32 {
    ceil_div(u64::from(defending) * RATIO_DEN, RATIO_NUM)
}

/// Armies needed to hold a region against `attacking` troops:
/// `ceil(attacking * 0.6)`.
pub fn troops_needed_to_defend(attacking: u32) -> u32 {
    ceil_div(u64::from(attacking) * RATIO_NUM, RATIO_DEN)
}

fn ceil_div(n: u64, d: u64) -> u32 {
    u32::try_from(n.div_ceil(d)).unwrap_or(u32::MAX)
}
