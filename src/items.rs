//! Item and materia aggregation.
//!
//! Walks the equipped items in order, summing every stat an item carries
//! into its own map and into the totals, then caps each item's stats
//! against what its slot may carry at its item level. Under an item level
//! sync gear stats are clamped to the cap; otherwise the excess is only
//! recorded as waste.

use crate::attribute::{StatAttribute, StatMap};
use crate::data::{GameData, ItemLevelRow, ItemRow, SUB_STAT_LEVEL_SYNCED};
use crate::melded::MeldedItem;
use crate::numeric::per_mille_round;
use crate::stat_id::StatId;
use crate::tables::ITEM_LEVEL_SLOTS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An equipped item paired with the stats it contributed in the last
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub item: MeldedItem,
    pub stats: StatMap,
}

impl EquippedItem {
    pub fn new(item: MeldedItem) -> Self {
        Self {
            item,
            stats: StatMap::new(),
        }
    }
}

impl From<MeldedItem> for EquippedItem {
    fn from(item: MeldedItem) -> Self {
        Self::new(item)
    }
}

/// Inputs of the item phase besides the items themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemPhase {
    /// Item level sync, zero when unsynced.
    pub item_level_sync: u32,
    pub effective_level: u8,
    /// Read magical rather than physical weapon damage off the main hand.
    pub magical: bool,
}

/// Everything the item phase produces besides the per-item maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTotals {
    pub attributes: StatMap,
    pub weapon_damage: Option<StatAttribute>,
    /// Melded materia, keyed by materia item id.
    pub materia_count: BTreeMap<u32, u32>,
    pub empty_meld_slots: u32,
    /// Sum of item levels over every slot filled or blocked.
    pub total_item_level: u32,
}

impl ItemTotals {
    /// The averaged item level, rounded down.
    pub fn item_level(&self) -> u16 {
        (self.total_item_level / ITEM_LEVEL_SLOTS) as u16
    }
}

/// Sum and cap the stats of every item.
///
/// Each item's `stats` map is rebuilt. Items or materia that cannot be
/// resolved are skipped.
pub fn aggregate(data: &dyn GameData, items: &mut [EquippedItem], phase: ItemPhase) -> ItemTotals {
    let mut totals = ItemTotals::default();

    for equipped in items.iter_mut() {
        equipped.stats.clear();

        let Some(row) = data.item(equipped.item.id) else {
            tracing::debug!(item = equipped.item.id, "skipping unknown item");
            continue;
        };

        let synced = phase.item_level_sync > 0
            && phase.item_level_sync < row.level_item
            && data.item_level(phase.item_level_sync).is_some();
        let level_id = if synced {
            phase.item_level_sync
        } else {
            row.level_item
        };

        let Some(level) = data.item_level(level_id) else {
            tracing::warn!(item = row.id, level = level_id, "item level row missing");
            continue;
        };

        totals.total_item_level += item_level_share(data, row, level.id, phase.effective_level);

        let mut scratch = Collector {
            data,
            totals: &mut totals.attributes,
            stats: &mut equipped.stats,
        };
        collect_item(&mut scratch, row, &equipped.item);
        let melds = collect_materia(&mut scratch, &equipped.item, &mut totals.materia_count);

        totals.empty_meld_slots += u32::from(row.materia_slot_count.saturating_sub(melds));

        if is_main_hand(data, row) {
            totals.weapon_damage = weapon_damage(data, row, &equipped.item, level, synced, phase.magical);
        }

        apply_caps(data, row, level, synced, &mut equipped.stats, &mut totals.attributes);
    }

    tracing::debug!(
        items = items.len(),
        total_item_level = totals.total_item_level,
        item_level = totals.item_level(),
        empty_meld_slots = totals.empty_meld_slots,
        "aggregated item stats"
    );

    totals
}

/// How much an item adds to the item level total.
///
/// Soul crystals add nothing. Items that fill more than one slot count once
/// per slot. Level synced items never count above the level's sync.
fn item_level_share(data: &dyn GameData, row: &ItemRow, level_id: u32, effective_level: u8) -> u32 {
    let Some(slot) = data.equip_slot_category(row.equip_slot_category) else {
        return 0;
    };
    if slot.soul_crystal != 0 {
        return 0;
    }

    let mut amount = level_id;
    if row.sub_stat_category == SUB_STAT_LEVEL_SYNCED {
        if let Some(grow) = data.grow(effective_level) {
            amount = amount.min(grow.item_level_sync);
        }
    }

    amount * (1 + slot.blocked_slots())
}

fn is_main_hand(data: &dyn GameData, row: &ItemRow) -> bool {
    data.equip_slot_category(row.equip_slot_category)
        .is_some_and(|slot| slot.main_hand == 1)
}

/// Adds item points to both the item's map and the totals.
struct Collector<'a> {
    data: &'a dyn GameData,
    totals: &'a mut StatMap,
    stats: &'a mut StatMap,
}

impl Collector<'_> {
    fn add(&mut self, stat: StatId, gear: i32, delta: i32) {
        if stat.is_none() || stat.is_placeholder() || (gear <= 0 && delta <= 0) {
            return;
        }

        if self.data.base_param(stat).is_none() {
            tracing::warn!(%stat, "no stat definition, ignoring points");
            return;
        }

        for map in [&mut *self.totals, &mut *self.stats] {
            let entry = map
                .entry(stat)
                .or_insert_with(|| StatAttribute::new(stat));
            entry.gear += gear.max(0);
            entry.delta += delta.max(0);
        }
    }
}

fn collect_item(collector: &mut Collector<'_>, row: &ItemRow, item: &MeldedItem) {
    collector.add(StatId::PHYS_DMG, i32::from(row.damage_phys), 0);
    collector.add(StatId::MAG_DMG, i32::from(row.damage_mag), 0);
    collector.add(StatId::DEF, i32::from(row.defense_phys), 0);
    collector.add(StatId::MDF, i32::from(row.defense_mag), 0);

    for param in &row.params {
        collector.add(param.stat, i32::from(param.value), 0);
    }

    if item.high_quality {
        for param in &row.special_params {
            collector.add(param.stat, i32::from(param.value), 0);
        }
    }
}

/// Sum melded materia. Returns the number of slots holding real materia.
fn collect_materia(
    collector: &mut Collector<'_>,
    item: &MeldedItem,
    materia_count: &mut BTreeMap<u32, u32>,
) -> u8 {
    let mut melds = 0u8;

    for meld in item.melded() {
        let Some(materia) = collector.data.materia(u32::from(meld.id)) else {
            tracing::warn!(materia = meld.id, "unknown materia");
            continue;
        };

        let grade = usize::from(meld.grade);
        let Some(&value) = materia.values.get(grade) else {
            tracing::warn!(
                materia = meld.id,
                grade = meld.grade,
                grades = materia.values.len(),
                "materia grade out of range"
            );
            continue;
        };

        let materia_item = materia.items.get(grade).copied().unwrap_or(0);
        if materia_item == 0 {
            // Relic stat slot.
            collector.add(materia.stat, i32::from(value), 0);
            continue;
        }

        collector.add(materia.stat, 0, i32::from(value));
        melds += 1;
        *materia_count.entry(materia_item).or_insert(0) += 1;
    }

    melds
}

/// The cap a slot category may carry for a stat at an item level.
fn slot_cap(data: &dyn GameData, stat: StatId, slot_category: u32, level: &ItemLevelRow) -> Option<i32> {
    let param = data.base_param(stat)?;
    Some(per_mille_round(
        u32::from(level.stat(stat)),
        u32::from(param.slot_percentage(slot_category)),
    ))
}

/// Set an item stat's limit and waste.
///
/// Returns the number of gear points removed by a sync clamp.
fn cap_stat(stat: &mut StatAttribute, cap: i32, synced: bool) -> i32 {
    let mut clamped = 0;

    if synced {
        if stat.gear == 0 {
            stat.limit = Some(0);
        } else if stat.gear > cap {
            clamped = stat.gear - cap;
            stat.gear = cap;
            stat.limit = Some(cap);
        } else {
            stat.limit = Some(stat.gear);
        }
    } else {
        stat.limit = Some(cap);
    }

    stat.update_waste();
    clamped
}

fn apply_caps(
    data: &dyn GameData,
    row: &ItemRow,
    level: &ItemLevelRow,
    synced: bool,
    stats: &mut StatMap,
    totals: &mut StatMap,
) {
    for stat in stats.values_mut() {
        let Some(cap) = slot_cap(data, stat.id, row.equip_slot_category, level) else {
            continue;
        };

        let clamped = cap_stat(stat, cap, synced);
        if let Some(total) = totals.get_mut(&stat.id) {
            total.gear -= clamped;
            total.waste += stat.waste;
        }
    }
}

/// Main hand weapon damage, capped the same way as item stats.
fn weapon_damage(
    data: &dyn GameData,
    row: &ItemRow,
    item: &MeldedItem,
    level: &ItemLevelRow,
    synced: bool,
    magical: bool,
) -> Option<StatAttribute> {
    let (id, damage) = if magical {
        (StatId::MAG_DMG, row.damage_mag)
    } else {
        (StatId::PHYS_DMG, row.damage_phys)
    };

    let mut weapon = StatAttribute::new(id);
    weapon.gear = i32::from(damage);

    if item.high_quality {
        weapon.gear += row
            .special_params
            .iter()
            .filter(|param| param.stat == id)
            .map(|param| i32::from(param.value))
            .sum::<i32>();
    }

    if let Some(cap) = slot_cap(data, id, row.equip_slot_category, level) {
        if synced {
            cap_stat(&mut weapon, cap, true);
        } else {
            // The level row only covers normal quality damage.
            weapon.limit = Some(cap.max(weapon.full()));
            weapon.update_waste();
        }
    }

    Some(weapon)
}
