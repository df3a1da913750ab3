//! Base stat derivation and tiering.
//!
//! Fills in the level, clan and job derived base of every tracked stat,
//! layers food, medicine and the party bonus on top, and finds the tier
//! breakpoints around the result.

use crate::attribute::StatMap;
use crate::consumable::Food;
use crate::data::{ClassJobRow, TribeRow};
use crate::derived::calculate_gcd;
use crate::stat_id::StatId;
use crate::tables::{self, GCD_SEARCH_RANGE};
use serde::{Deserialize, Serialize};

/// Attributes the party bonus applies to.
pub const PARTY_BONUS_STATS: [StatId; 4] = [StatId::STR, StatId::DEX, StatId::INT, StatId::MND];

/// Reset every stat's base for `level`, then apply clan offsets and job
/// modifiers to the primary attributes.
///
/// A primary attribute whose base is not positive is left alone. Results
/// never drop below zero.
pub fn apply_base(
    attributes: &mut StatMap,
    level: u8,
    tribe: Option<&TribeRow>,
    job: Option<&ClassJobRow>,
) {
    for stat in attributes.values_mut() {
        stat.base = tables::base_stat_at_level(stat.id, level);
    }

    for id in StatId::PRIMARY {
        let Some(stat) = attributes.get_mut(&id) else {
            continue;
        };
        if stat.base <= 0 {
            continue;
        }

        if let Some(offset) = tribe.and_then(|tribe| tribe.offset(id)) {
            stat.base = (stat.base + offset).max(0);
        }

        if let Some(modifier) = job.and_then(|job| job.modifier(id)) {
            let scaled = (i64::from(stat.base) * i64::from(modifier)).div_euclid(100);
            stat.base = scaled.max(0) as i32;
        }
    }
}

/// Apply food, then medicine on top of it.
///
/// Both are computed from the stat's value before any consumable, and the
/// food field is overwritten rather than accumulated across runs.
pub fn apply_consumables(attributes: &mut StatMap, food: Option<&Food>, medicine: Option<&Food>) {
    for stat in attributes.values_mut() {
        let base = stat.value_no_food();
        let mut bonus = 0;

        for consumable in [food, medicine].into_iter().flatten() {
            if let Some(effect) = consumable.stats.get(&stat.id) {
                bonus += effect.bonus(base);
            }
        }

        stat.food = bonus;
    }
}

/// Apply a party bonus of `percent` to the offensive primary attributes.
pub fn apply_party_bonus(attributes: &mut StatMap, percent: u8) {
    for stat in attributes.values_mut() {
        stat.party_bonus = if percent > 0 && PARTY_BONUS_STATS.contains(&stat.id) {
            (i64::from(stat.value_no_food()) * i64::from(percent)).div_euclid(100) as i32
        } else {
            0
        };
    }
}

/// Recompute the tier distances of every stat.
pub fn update_tiers(attributes: &mut StatMap, level_modifier: i32) {
    for stat in attributes.values_mut() {
        stat.update_tiers(level_modifier);
    }
}

/// Breakpoints of the global cooldown around the current speed value.
///
/// Distances are relative to the stat's points above base: adding
/// `previous_tier` lands on the first point of the current cooldown, adding
/// `next_tier` on the first point of the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdTiers {
    /// Skill speed or spell speed.
    pub stat: StatId,

    /// At most zero. Equals `-GCD_SEARCH_RANGE` when no breakpoint was
    /// found in the window.
    pub previous_tier: i32,

    /// Positive, or `None` when no breakpoint was found in the window.
    pub next_tier: Option<i32>,
}

/// Search `±GCD_SEARCH_RANGE` around `extra` for cooldown breakpoints.
///
/// A breakpoint is a candidate whose cooldown differs from the candidate
/// one point below it.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::base_stats::gcd_tiers;
/// use gearset_calc::StatId;
///
/// let tiers = gcd_tiers(StatId::SKS, 130, 15, 1900);
/// assert_eq!(tiers.previous_tier, 0);
/// assert_eq!(tiers.next_tier, Some(59));
/// ```
pub fn gcd_tiers(stat: StatId, coefficient: i32, extra: i32, level_modifier: i32) -> GcdTiers {
    let start = extra - GCD_SEARCH_RANGE;
    let end = extra + GCD_SEARCH_RANGE;
    let gcd = |points: i32| calculate_gcd(coefficient, points, level_modifier, 0, 0);

    let mut previous = start;
    let mut next = None;
    let mut last = gcd(start);

    for candidate in (start + 1)..=end {
        let value = gcd(candidate);
        if value != last {
            if candidate <= extra {
                previous = candidate;
            } else {
                next = Some(candidate);
                break;
            }
        }
        last = value;
    }

    GcdTiers {
        stat,
        previous_tier: previous - extra,
        next_tier: next.map(|tier| tier - extra),
    }
}

/// The speed stat that drives the GCD for a job.
pub fn speed_stat(job: Option<&ClassJobRow>) -> StatId {
    if job.is_some_and(ClassJobRow::is_magical) {
        StatId::SPS
    } else {
        StatId::SKS
    }
}
