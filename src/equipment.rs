//! Equipment set module.
//!
//! Provides the `EquipmentSet` type, the main entry point for gear set
//! calculation. It holds one character snapshot's inputs and the results
//! of the last `recalculate`.

use crate::attribute::{StatAttribute, StatMap};
use crate::base_stats::{self, GcdTiers};
use crate::class::{self, Effective};
use crate::consumable::{ConsumableCatalog, Food};
use crate::context::CalcContext;
use crate::derived::{self, CalculatedStat, DamageValues, DerivedInput};
use crate::error::CalcError;
use crate::items::{self, EquippedItem, ItemPhase};
use crate::melded::MeldedItem;
use crate::ranking::{self, RankFilter};
use crate::tables;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Highest party bonus, in percent.
pub const MAX_GROUP_BONUS: u8 = 5;

/// Level at and above which an implicit item level sync uses the
/// configured maximum instead of a grow row.
pub const LEVEL_CAP: u8 = 100;

/// Who is wearing the gear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: Option<String>,
    pub gender: u8,
    pub race: u8,
    pub tribe: u8,
    pub level: u8,
}

/// Level and item level sync. Zero means unsynced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSettings {
    pub level_sync: u8,
    pub item_level_sync: u32,
}

/// One character's gear and everything calculated from it.
///
/// Inputs are changed through the `update_*`, `set_*` and `select_*`
/// methods. Outputs are only valid after [`EquipmentSet::recalculate`];
/// nothing is recomputed implicitly.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::{CalcContext, CalcError, EngineConfig, EquipmentSet, GameTables, MeldedItem};
///
/// let tables = GameTables::new();
/// let config = EngineConfig::default();
/// let ctx = CalcContext::new(&tables, &config);
///
/// let mut set = EquipmentSet::new(vec![MeldedItem::new(1, false)]);
/// // Empty tables are not ready.
/// assert_eq!(set.recalculate(&ctx), Err(CalcError::DataNotReady));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentSet {
    pub player: PlayerInfo,
    pub sync: SyncSettings,

    /// Party bonus, in percent.
    pub group_bonus: u8,

    pub food: Option<Arc<Food>>,
    pub medicine: Option<Arc<Food>>,

    pub has_crystal: bool,
    pub has_offhand: bool,

    /// Class/job row ids: as displayed, and as used for stat math.
    pub class: Effective<u32>,

    pub items: Vec<EquippedItem>,

    /// Totals over every item.
    pub attributes: StatMap,
    pub weapon_damage: Option<StatAttribute>,
    pub gcd_tiers: Option<GcdTiers>,

    /// Melded materia, keyed by materia item id.
    pub materia_count: BTreeMap<u32, u32>,
    pub empty_meld_slots: u32,

    pub relevant_food: Vec<Arc<Food>>,
    pub relevant_medicine: Vec<Arc<Food>>,

    pub calculated: Vec<CalculatedStat>,

    /// Estimated damage keyed by potency.
    pub damage: BTreeMap<u32, DamageValues>,

    pub item_level: u16,
}

impl EquipmentSet {
    /// Create a set wearing `items`.
    pub fn new(items: Vec<MeldedItem>) -> Self {
        Self {
            items: items.into_iter().map(EquippedItem::new).collect(),
            ..Self::default()
        }
    }

    /// Replace the equipped items. Per-item results are cleared.
    pub fn set_items(&mut self, items: Vec<MeldedItem>) {
        self.items = items.into_iter().map(EquippedItem::new).collect();
    }

    /// The character level, and the level used for stat math.
    pub fn level(&self) -> Effective<u8> {
        let level = self.player.level;
        let sync = self.sync.level_sync;
        Effective {
            nominal: level,
            effective: if sync != 0 && sync < level { sync } else { level },
        }
    }

    pub fn effective_level(&self) -> u8 {
        self.level().effective
    }

    /// Update the player data.
    ///
    /// The level is raised to the highest equip level of any known equipped
    /// item.
    ///
    /// # Returns
    ///
    /// Whether the tribe or level changed.
    pub fn update_player(
        &mut self,
        ctx: &CalcContext<'_>,
        name: Option<String>,
        gender: u8,
        race: u8,
        tribe: u8,
        level: u8,
    ) -> bool {
        let level = self
            .items
            .iter()
            .filter_map(|equipped| ctx.data.item(equipped.item.id))
            .map(|row| row.level_equip)
            .fold(level, u8::max);

        let changed = self.player.tribe != tribe || self.player.level != level;

        self.player = PlayerInfo {
            name,
            gender,
            race,
            tribe,
            level,
        };

        changed
    }

    /// Update the sync settings.
    ///
    /// With a level sync and no explicit item level sync, the item level
    /// sync is taken from the synced level's grow row, or from the
    /// configured maximum at the level cap.
    ///
    /// # Returns
    ///
    /// Whether either value changed.
    pub fn update_sync(&mut self, ctx: &CalcContext<'_>, level_sync: u8, item_level_sync: u32) -> bool {
        let mut item_level_sync = item_level_sync;

        if item_level_sync == 0 && level_sync != 0 {
            let level = level_sync.min(self.player.level);
            item_level_sync = if level >= LEVEL_CAP {
                ctx.config.max_level_item_level_sync
            } else {
                ctx.data
                    .grow(level_sync)
                    .map(|grow| grow.item_level_sync)
                    .unwrap_or(0)
            };
        }

        let sync = SyncSettings {
            level_sync,
            item_level_sync,
        };
        let changed = self.sync != sync;
        self.sync = sync;
        changed
    }

    /// Set the party bonus, clamped to [`MAX_GROUP_BONUS`].
    ///
    /// # Returns
    ///
    /// Whether the value changed.
    pub fn update_group_bonus(&mut self, percent: u8) -> bool {
        let percent = percent.min(MAX_GROUP_BONUS);
        let changed = self.group_bonus != percent;
        self.group_bonus = percent;
        changed
    }

    /// Select a food by value. Returns whether the selection changed.
    pub fn set_food(&mut self, food: Option<Arc<Food>>) -> bool {
        if self.food == food {
            return false;
        }
        self.food = food;
        true
    }

    /// Select a medicine by value. Returns whether the selection changed.
    pub fn set_medicine(&mut self, medicine: Option<Arc<Food>>) -> bool {
        if self.medicine == medicine {
            return false;
        }
        self.medicine = medicine;
        true
    }

    /// Select a food from the catalog by food row and quality.
    pub fn select_food(
        &mut self,
        catalog: &ConsumableCatalog,
        food_id: u32,
        hq: bool,
    ) -> Result<bool, CalcError> {
        let food = catalog
            .find_food(food_id, hq)
            .ok_or(CalcError::UnknownFood { food_id, hq })?;
        Ok(self.set_food(Some(Arc::clone(food))))
    }

    /// Select a medicine from the catalog by food row.
    pub fn select_medicine(
        &mut self,
        catalog: &ConsumableCatalog,
        food_id: u32,
    ) -> Result<bool, CalcError> {
        let medicine = catalog
            .find_medicine(food_id)
            .ok_or(CalcError::UnknownMedicine { food_id })?;
        Ok(self.set_medicine(Some(Arc::clone(medicine))))
    }

    /// Run every calculation phase in order.
    ///
    /// Class resolution, item aggregation, base stats, derived values, then
    /// consumable ranking. Every output is rebuilt from the inputs, so
    /// calling this twice yields the same result.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DataNotReady` without touching any output when
    /// the core game tables are missing.
    pub fn recalculate(&mut self, ctx: &CalcContext<'_>) -> Result<(), CalcError> {
        if !ctx.data.is_ready() {
            tracing::warn!("game data not ready, skipping recalculation");
            return Err(CalcError::DataNotReady);
        }

        self.calculate_class(ctx);
        self.calculate_items(ctx);
        self.calculate_base_stats(ctx);
        self.calculate_derived(ctx);
        self.calculate_relevant_consumables(ctx);

        Ok(())
    }

    /// Resolve the class from the gear. Returns whether the crystal,
    /// off-hand or either class id changed.
    pub fn calculate_class(&mut self, ctx: &CalcContext<'_>) -> bool {
        let resolution = class::resolve_class(ctx.data, self.items.iter().map(|equipped| &equipped.item));

        let changed = resolution.has_crystal != self.has_crystal
            || resolution.has_offhand != self.has_offhand
            || resolution.class != self.class;

        self.has_crystal = resolution.has_crystal;
        self.has_offhand = resolution.has_offhand;
        self.class = resolution.class;

        tracing::debug!(
            class = self.class.nominal,
            effective_class = self.class.effective,
            has_crystal = self.has_crystal,
            "resolved class"
        );

        changed
    }

    fn calculate_items(&mut self, ctx: &CalcContext<'_>) {
        let magical = ctx
            .data
            .class_job(self.class.effective)
            .is_some_and(|job| job.is_magical());

        let phase = ItemPhase {
            item_level_sync: self.sync.item_level_sync,
            effective_level: self.effective_level(),
            magical,
        };

        let totals = items::aggregate(ctx.data, &mut self.items, phase);

        self.item_level = totals.item_level();
        self.attributes = totals.attributes;
        self.weapon_damage = totals.weapon_damage;
        self.materia_count = totals.materia_count;
        self.empty_meld_slots = totals.empty_meld_slots;
    }

    fn calculate_base_stats(&mut self, ctx: &CalcContext<'_>) {
        let level = self.effective_level();
        let tribe = (self.player.tribe != 0)
            .then(|| ctx.data.tribe(u32::from(self.player.tribe)))
            .flatten();
        let job = ctx.data.class_job(self.class.effective);

        base_stats::apply_base(&mut self.attributes, level, tribe, job);
        base_stats::apply_consumables(
            &mut self.attributes,
            self.food.as_deref(),
            self.medicine.as_deref(),
        );
        base_stats::apply_party_bonus(&mut self.attributes, self.group_bonus);

        self.gcd_tiers = None;
        let Some(grow) = ctx.data.grow(level) else {
            tracing::debug!(level, "no grow row, skipping tiers");
            return;
        };

        base_stats::update_tiers(&mut self.attributes, grow.level_modifier);

        let speed = base_stats::speed_stat(job);
        if let Some(coefficient) = tables::coefficient(speed) {
            let extra = self
                .attributes
                .get(&speed)
                .map(StatAttribute::bonus_points)
                .unwrap_or(0);
            self.gcd_tiers = Some(base_stats::gcd_tiers(
                speed,
                coefficient,
                extra,
                grow.level_modifier,
            ));
        }
    }

    fn calculate_derived(&mut self, ctx: &CalcContext<'_>) {
        let level = self.level();
        let input = DerivedInput {
            name: self.player.name.as_deref(),
            gender: self.player.gender,
            race: ctx.data.race(u32::from(self.player.race)),
            tribe: (self.player.tribe != 0)
                .then(|| ctx.data.tribe(u32::from(self.player.tribe)))
                .flatten(),
            job: ctx.data.class_job(self.class.effective),
            has_crystal: self.has_crystal,
            level,
            item_level: self.item_level,
            grow: (level.nominal != 0)
                .then(|| ctx.data.grow(level.effective))
                .flatten(),
            attributes: &self.attributes,
            weapon_damage: self.weapon_damage.as_ref(),
        };

        self.calculated = derived::display_rows(&input);
        self.damage = derived::damage_table(&input);
    }

    fn calculate_relevant_consumables(&mut self, ctx: &CalcContext<'_>) {
        self.relevant_food.clear();
        self.relevant_medicine.clear();

        let Some(catalog) = ctx.catalog else {
            tracing::debug!("consumable catalog not loaded, skipping ranking");
            return;
        };

        let crafting = ctx
            .data
            .class_job(self.class.nominal)
            .is_some_and(|job| job.role == 0);
        let filter = RankFilter {
            min_item_level: ctx.config.food_min_item_level_for(crafting),
            hq_only: ctx.config.food_hq_only,
        };

        self.relevant_food = ranking::rank(&catalog.food, &self.attributes, filter);
        self.relevant_medicine = ranking::rank(&catalog.medicine, &self.attributes, filter);
    }
}
