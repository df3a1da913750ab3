//! Derived and display calculations.
//!
//! Turns final attributes into the multipliers and rates shown to the
//! player, the global cooldown, and an estimated damage table over a set
//! of reference potencies.

use crate::attribute::{StatAttribute, StatMap};
use crate::class::Effective;
use crate::data::{ClassJobRow, GrowRow, RaceRow, TribeRow};
use crate::numeric::{floor_eps, tier_points, truncate};
use crate::stat_id::StatId;
use crate::tables::{self, GameClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base global cooldown, in milliseconds.
pub const BASE_GCD_MS: i64 = 2500;

/// Damage multiplier of a direct hit.
pub const DIRECT_HIT_MULTIPLIER: f64 = 1.25;

/// One labeled display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedStat {
    /// Stable identifier, e.g. `calc.crit-rate`.
    pub key: String,
    pub label: String,
    pub value: String,
}

impl CalculatedStat {
    pub fn new(key: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Estimated damage of one potency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageValues {
    pub base: f64,
    /// Expected value over critical and direct hit chances.
    pub average: f64,
    pub critical: f64,
    pub direct_hit: f64,
    pub critical_direct_hit: f64,
}

/// The global cooldown in seconds, to two decimals.
///
/// `modifier` and `haste` are percentage reductions from job traits and
/// buffs. The floor after every step matches the game's integer math;
/// changing the order moves breakpoints.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::derived::calculate_gcd;
///
/// assert_eq!(calculate_gcd(130, 0, 1900, 0, 0), 2.50);
/// assert_eq!(calculate_gcd(130, 15, 1900, 0, 0), 2.49);
/// assert_eq!(calculate_gcd(130, 0, 1900, 15, 0), 2.12);
/// ```
pub fn calculate_gcd(
    coefficient: i32,
    extra: i32,
    level_modifier: i32,
    modifier: i32,
    haste: i32,
) -> f64 {
    let speed = 1000 - tier_points(coefficient, extra, level_modifier);
    let base = (speed * BASE_GCD_MS).div_euclid(1000);

    let modifier = i64::from(modifier);
    let haste = i64::from(haste);
    let reduced = (100 * (100 - modifier)).div_euclid(100);
    let hasted = (reduced * (100 - haste)).div_euclid(100);
    let buffs = (hasted * -100).div_euclid(100);

    let scaled = (-(base * buffs)).div_euclid(100);
    let centiseconds = (scaled * 100).div_euclid(1000);

    centiseconds as f64 / 100.0
}

/// Everything the display and damage calculations read.
#[derive(Debug, Clone, Copy)]
pub struct DerivedInput<'a> {
    pub name: Option<&'a str>,
    /// 0 masculine, anything else feminine.
    pub gender: u8,
    pub race: Option<&'a RaceRow>,
    pub tribe: Option<&'a TribeRow>,
    /// The effective class/job row.
    pub job: Option<&'a ClassJobRow>,
    pub has_crystal: bool,
    pub level: Effective<u8>,
    pub item_level: u16,
    /// Grow row of the effective level.
    pub grow: Option<&'a GrowRow>,
    pub attributes: &'a StatMap,
    pub weapon_damage: Option<&'a StatAttribute>,
}

impl DerivedInput<'_> {
    fn class(&self) -> Option<GameClass> {
        self.job.and_then(|job| GameClass::from_id(job.id))
    }

    fn level_modifier(&self) -> Option<i32> {
        self.grow
            .map(|grow| grow.level_modifier)
            .filter(|&modifier| modifier > 0)
    }

    /// Tier points of a stat's bonus over base.
    fn points(&self, stat: StatId) -> i64 {
        let (Some(coefficient), Some(level_modifier)) =
            (tables::coefficient(stat), self.level_modifier())
        else {
            return 0;
        };
        let extra = self
            .attributes
            .get(&stat)
            .map(StatAttribute::bonus_points)
            .unwrap_or(0);
        tier_points(coefficient, extra, level_modifier)
    }

    /// Tier points of a stat's whole value, for defense.
    fn total_points(&self, stat: StatId) -> i64 {
        let (Some(coefficient), Some(level_modifier)) =
            (tables::coefficient(stat), self.level_modifier())
        else {
            return 0;
        };
        let total = self
            .attributes
            .get(&stat)
            .map(StatAttribute::value)
            .unwrap_or_else(|| tables::base_stat_at_level(stat, self.level.effective));
        tier_points(coefficient, total, level_modifier)
    }

    fn speed_extra(&self, stat: StatId) -> i32 {
        self.attributes
            .get(&stat)
            .map(StatAttribute::bonus_points)
            .unwrap_or(0)
    }
}

/// Per-mille value as a one decimal percentage.
fn per_mille(value: i64) -> String {
    format!("{:.1}%", value as f64 / 10.0)
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Build the display rows.
///
/// Identity rows come first. Combat rows need a grow row and a combat job;
/// crafters and gatherers get identity rows only.
pub fn display_rows(input: &DerivedInput<'_>) -> Vec<CalculatedStat> {
    let mut rows = Vec::new();

    if let Some(name) = input.name.filter(|name| !name.is_empty()) {
        rows.push(CalculatedStat::new("calc.name", "Player Name", name));
    }

    if let (Some(race), Some(tribe)) = (input.race, input.tribe) {
        let value = if input.gender == 0 {
            format!("{} / {}", race.masculine, tribe.masculine)
        } else {
            format!("{} / {}", race.feminine, tribe.feminine)
        };
        rows.push(CalculatedStat::new("calc.tribe", "Race / Clan", value));
    }

    if let Some(job) = input.job {
        let specialist = if job.is_crafter_or_gatherer() && input.has_crystal {
            " (Specialist)"
        } else {
            ""
        };
        rows.push(CalculatedStat::new(
            "calc.class",
            "Class",
            format!("{}{}", title_case(&job.name), specialist),
        ));
    }

    if input.level.nominal != 0 {
        rows.push(CalculatedStat::new(
            "calc.level",
            "Level",
            input.level.effective.to_string(),
        ));
    }

    if input.item_level != 0 {
        rows.push(CalculatedStat::new(
            "calc.item-level",
            "Average Item Level",
            input.item_level.to_string(),
        ));
    }

    let Some(job) = input.job else {
        return rows;
    };
    if input.level_modifier().is_none() || job.is_crafter_or_gatherer() {
        return rows;
    }

    let crit = input.points(StatId::CRT);
    rows.push(CalculatedStat::new(
        "calc.crit-strength",
        "Critical Hit Multiplier",
        per_mille(crit + 1400),
    ));
    rows.push(CalculatedStat::new(
        "calc.crit-rate",
        "Critical Hit Rate",
        per_mille(crit + 50),
    ));
    rows.push(CalculatedStat::new(
        "calc.dh-rate",
        "Direct Hit Rate",
        per_mille(input.points(StatId::DH)),
    ));
    rows.push(CalculatedStat::new(
        "calc.det-multi",
        "Determination Multiplier",
        per_mille(input.points(StatId::DET) + 1000),
    ));
    rows.push(CalculatedStat::new(
        "calc.def-mitigation",
        "Damage Mitigation",
        per_mille(input.total_points(StatId::DEF) * 10),
    ));
    rows.push(CalculatedStat::new(
        "calc.mdef-mitigation",
        "Magic Damage Mitigation",
        per_mille(input.total_points(StatId::MDF) * 10),
    ));

    if job.is_tank() {
        let tenacity = input.points(StatId::TEN);
        rows.push(CalculatedStat::new(
            "calc.ten-mitigation",
            "Tenacity Mitigation",
            per_mille(tenacity),
        ));
        rows.push(CalculatedStat::new(
            "calc.ten-multi",
            "Tenacity Multiplier",
            per_mille(tenacity + 1000),
        ));
    }

    if job.is_healer() {
        rows.push(CalculatedStat::new(
            "calc.pie-tick",
            "MP per Tick",
            (input.points(StatId::PIE) + 200).to_string(),
        ));
    }

    speed_rows(input, job, &mut rows);
    rows
}

fn speed_rows(input: &DerivedInput<'_>, job: &ClassJobRow, rows: &mut Vec<CalculatedStat>) {
    let magical = job.is_magical();
    let stat = if magical { StatId::SPS } else { StatId::SKS };
    let (Some(coefficient), Some(level_modifier)) =
        (tables::coefficient(stat), input.level_modifier())
    else {
        return;
    };

    let (key, label) = if magical {
        ("calc.sps-multi", "Spell Speed Multiplier")
    } else {
        ("calc.sks-multi", "Skill Speed Multiplier")
    };
    rows.push(CalculatedStat::new(
        key,
        label,
        per_mille(input.points(stat) + 1000),
    ));

    let extra = input.speed_extra(stat);
    let gcd = calculate_gcd(coefficient, extra, level_modifier, 0, 0);
    rows.push(CalculatedStat::new(
        "calc.gcd",
        "Global Cooldown",
        format!("{:.2}", gcd),
    ));

    for variant in tables::haste_variants(input.class(), input.level.effective) {
        let gcd = calculate_gcd(coefficient, extra, level_modifier, variant.modifier, 0);
        rows.push(CalculatedStat::new(
            variant.key,
            variant.label,
            format!("{:.2}", gcd),
        ));
    }
}

/// Multipliers combined into a damage estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Multipliers {
    damage: f64,
    main: f64,
    crit: f64,
    crit_rate: f64,
    det: f64,
    direct_hit_rate: f64,
    tenacity: f64,
    traits: f64,
    magical: bool,
}

impl Multipliers {
    fn from_input(input: &DerivedInput<'_>) -> Option<Self> {
        let job = input.job?;
        let weapon = input.weapon_damage?;
        input.level_modifier()?;

        let level = input.level.effective;
        let primary = job.primary_stat;
        let modifier = i64::from(job.modifier(primary)?);
        let base = tables::base_stat_at_level(primary, level);
        if base <= 0 {
            return None;
        }

        let damage = (i64::from(weapon.value()) + (i64::from(base) * modifier).div_euclid(1000))
            as f64
            / 100.0;

        let scalar = if job.is_tank() {
            tables::tank_attack_scalar(level)
        } else {
            tables::attack_scalar(level)
        };
        let value = input
            .attributes
            .get(&primary)
            .map(StatAttribute::value)
            .unwrap_or(base);
        let main = (100.0 + truncate(f64::from(value - base) * scalar / f64::from(base))) / 100.0;

        let crit = input.points(StatId::CRT);
        let magical = job.is_magical();

        Some(Self {
            damage,
            main,
            crit: (crit + 1400) as f64 / 1000.0,
            crit_rate: (crit + 50) as f64 / 1000.0,
            det: (input.points(StatId::DET) + 1000) as f64 / 1000.0,
            direct_hit_rate: input.points(StatId::DH) as f64 / 1000.0,
            tenacity: (input.points(StatId::TEN) + 1000) as f64 / 1000.0,
            traits: tables::trait_multiplier(input.class(), level, magical),
            magical,
        })
    }

    /// Damage of a normal hit.
    ///
    /// Casters apply weapon damage alongside the main stat; everyone else
    /// applies it after determination and tenacity.
    fn normal(&self, potency: u32) -> f64 {
        let potency = f64::from(potency);
        let damage = if self.magical {
            let damage = floor_eps(potency * self.damage * self.main);
            let damage = floor_eps(damage * self.det);
            floor_eps(damage * self.tenacity)
        } else {
            let damage = floor_eps(potency * self.main * self.det);
            let damage = floor_eps(damage * self.tenacity);
            floor_eps(damage * self.damage)
        };
        floor_eps(damage * self.traits)
    }

    fn values(&self, potency: u32) -> DamageValues {
        let base = self.normal(potency);
        let critical = floor_eps(base * self.crit);
        let average_crit = 1.0 + self.crit_rate * (self.crit - 1.0);
        let average_direct_hit = 1.0 + self.direct_hit_rate * (DIRECT_HIT_MULTIPLIER - 1.0);

        DamageValues {
            base,
            average: truncate(base * average_crit * average_direct_hit),
            critical,
            direct_hit: floor_eps(base * DIRECT_HIT_MULTIPLIER),
            critical_direct_hit: floor_eps(critical * DIRECT_HIT_MULTIPLIER),
        }
    }
}

/// Estimated damage for each of the job's reference potencies.
///
/// Empty without a combat job, a main hand weapon or a grow row.
pub fn damage_table(input: &DerivedInput<'_>) -> BTreeMap<u32, DamageValues> {
    let Some(multipliers) = Multipliers::from_input(input) else {
        return BTreeMap::new();
    };

    tables::example_potencies(input.class())
        .into_iter()
        .map(|potency| (potency, multipliers.values(potency)))
        .collect()
}
