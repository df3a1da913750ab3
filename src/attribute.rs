//! Per-stat results.
//!
//! A [`StatAttribute`] holds the breakdown of one stat: where its points
//! came from, how many were wasted over the cap, the consumable and party
//! bonuses on top, and the distance to the neighboring tiers.

use crate::numeric::tier_bounds;
use crate::stat_id::StatId;
use crate::tables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stats keyed by id, in id order.
pub type StatMap = BTreeMap<StatId, StatAttribute>;

/// The full breakdown of one stat.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::{StatAttribute, StatId};
///
/// // One item's crit: 120 from the item and 40 from materia, capped at 140.
/// let mut stat = StatAttribute::new(StatId::CRT);
/// stat.gear = 120;
/// stat.delta = 40;
/// stat.limit = Some(140);
/// stat.update_waste();
///
/// assert_eq!(stat.full(), 160);
/// assert_eq!(stat.waste, 20);
/// assert_eq!(stat.value(), 140);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAttribute {
    pub id: StatId,

    /// Level, clan and job derived value.
    pub base: i32,

    /// Points from the items themselves.
    pub gear: i32,

    /// Points from melded materia.
    pub delta: i32,

    /// Points over the cap that have no effect.
    pub waste: i32,

    /// Food and medicine bonus.
    pub food: i32,

    pub party_bonus: i32,

    /// Cap on `full()`. `None` means uncapped.
    pub limit: Option<i32>,

    pub previous_tier: i32,
    pub next_tier: i32,
}

impl StatAttribute {
    /// Create an empty, uncapped attribute.
    pub fn new(id: StatId) -> Self {
        Self {
            id,
            base: 0,
            gear: 0,
            delta: 0,
            waste: 0,
            food: 0,
            party_bonus: 0,
            limit: None,
            previous_tier: 0,
            next_tier: 0,
        }
    }

    /// Base, gear and materia points, before waste.
    pub fn full(&self) -> i32 {
        self.base + self.gear + self.delta
    }

    /// Effective gear and materia points.
    pub fn extra(&self) -> i32 {
        self.gear + self.delta - self.waste
    }

    /// The value consumable and party bonuses are computed from.
    pub fn value_no_food(&self) -> i32 {
        self.base + self.gear + self.delta - self.waste
    }

    /// The final value.
    pub fn value(&self) -> i32 {
        self.value_no_food() + self.food + self.party_bonus
    }

    /// Every point above the base, bonuses included. Derived percentages
    /// are computed from this.
    pub fn bonus_points(&self) -> i32 {
        self.value() - self.base
    }

    /// Points that could still be added before reaching the cap.
    pub fn remaining(&self) -> Option<i32> {
        self.limit
            .map(|limit| (limit - self.value_no_food()).max(0))
    }

    /// Recompute waste from the limit.
    pub fn update_waste(&mut self) {
        self.waste = match self.limit {
            Some(limit) if limit >= 0 => (self.full() - limit).max(0),
            _ => 0,
        };
    }

    /// Recompute tier distances for the given level modifier. Stats
    /// without a coefficient keep zero distances.
    pub fn update_tiers(&mut self, level_modifier: i32) {
        let bounds = tables::coefficient(self.id)
            .and_then(|coefficient| tier_bounds(coefficient, level_modifier, self.bonus_points()));

        let (previous, next) = bounds.unwrap_or((0, 0));
        self.previous_tier = previous;
        self.next_tier = next;
    }
}
