//! Game data provider.
//!
//! The engine reads game data through the [`GameData`] trait: read-only
//! lookups by numeric row id. Every lookup may come back empty, in which
//! case the caller skips that contribution. [`GameTables`] is the
//! in-memory implementation, loadable from JSON or built in code.

use crate::error::CalcError;
use crate::stat_id::StatId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item action kind for food.
pub const ACTION_FOOD: u16 = 48;

/// Item action kind for medicine.
pub const ACTION_MEDICINE: u16 = 49;

/// Item UI category of medicine.
pub const UI_CATEGORY_MEDICINE: u32 = 44;

/// Item UI category of meals.
pub const UI_CATEGORY_MEAL: u32 = 46;

/// Class/job category of physical combat jobs.
pub const CATEGORY_PHYSICAL: u32 = 30;

/// Class/job category of magical combat jobs.
pub const CATEGORY_MAGICAL: u32 = 31;

/// Item sub-stat category of items whose level follows level sync.
pub const SUB_STAT_LEVEL_SYNCED: u8 = 2;

/// A stat/value pair on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemParam {
    pub stat: StatId,
    pub value: i16,
}

/// An item definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRow {
    pub id: u32,
    pub name: String,
    /// Item level (row id of the item level table).
    pub level_item: u32,
    pub level_equip: u8,
    pub equip_slot_category: u32,
    pub class_job_category: u32,
    pub damage_phys: u16,
    pub damage_mag: u16,
    pub defense_phys: u16,
    pub defense_mag: u16,
    pub params: Vec<ItemParam>,
    /// Extra params applied only to high-quality copies.
    pub special_params: Vec<ItemParam>,
    pub materia_slot_count: u8,
    pub sub_stat_category: u8,
    pub ui_category: u32,
    pub item_action: u32,
}

/// Per-stat values of one item level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemLevelRow {
    pub id: u32,
    pub stats: BTreeMap<StatId, u16>,
}

impl ItemLevelRow {
    /// Base value of a stat at this item level, zero if absent.
    pub fn stat(&self, stat: StatId) -> u16 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }
}

/// A stat definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseParamRow {
    pub id: u32,
    pub name: String,
    /// Per-mille share of the item level value an equip slot category may
    /// carry, indexed by equip slot category id.
    pub slot_pct: Vec<u16>,
}

impl BaseParamRow {
    /// Per-mille slot percentage, zero for unknown slots.
    pub fn slot_percentage(&self, slot_category: u32) -> u16 {
        usize::try_from(slot_category)
            .ok()
            .and_then(|idx| self.slot_pct.get(idx))
            .copied()
            .unwrap_or(0)
    }
}

/// A materia definition, with one value per grade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MateriaRow {
    pub id: u32,
    pub stat: StatId,
    pub values: Vec<i16>,
    /// Item id of the materia at each grade. Zero marks a relic stat slot.
    pub items: Vec<u32>,
}

/// A class or job definition.
///
/// Missing fields take their [`Default`]; a row that leaves out
/// `doh_dol_job_index` is a combat job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassJobRow {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    /// Non-zero for jobs, zero for base classes.
    pub job_index: u8,
    /// Non-negative for crafters and gatherers, -1 for everyone else.
    pub doh_dol_job_index: i8,
    /// Base class of a job, zero if none.
    pub parent: u32,
    /// 0 crafter/gatherer, 1 tank, 2 melee, 3 ranged, 4 healer.
    pub role: u8,
    pub category: u32,
    pub primary_stat: StatId,
    pub modifier_strength: u16,
    pub modifier_dexterity: u16,
    pub modifier_vitality: u16,
    pub modifier_intelligence: u16,
    pub modifier_mind: u16,
    pub modifier_piety: u16,
    pub modifier_hit_points: u16,
}

impl Default for ClassJobRow {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            abbreviation: String::new(),
            job_index: 0,
            doh_dol_job_index: -1,
            parent: 0,
            role: 0,
            category: 0,
            primary_stat: StatId::default(),
            modifier_strength: 0,
            modifier_dexterity: 0,
            modifier_vitality: 0,
            modifier_intelligence: 0,
            modifier_mind: 0,
            modifier_piety: 0,
            modifier_hit_points: 0,
        }
    }
}

impl ClassJobRow {
    pub fn is_tank(&self) -> bool {
        self.role == 1
    }

    pub fn is_healer(&self) -> bool {
        self.role == 4
    }

    pub fn is_crafter_or_gatherer(&self) -> bool {
        self.doh_dol_job_index >= 0
    }

    pub fn is_magical(&self) -> bool {
        self.category == CATEGORY_MAGICAL
    }

    /// Job percentage modifier for one of the six primary attributes.
    pub fn modifier(&self, stat: StatId) -> Option<u16> {
        let value = match stat {
            StatId::STR => self.modifier_strength,
            StatId::DEX => self.modifier_dexterity,
            StatId::VIT => self.modifier_vitality,
            StatId::INT => self.modifier_intelligence,
            StatId::MND => self.modifier_mind,
            StatId::PIE => self.modifier_piety,
            _ => return None,
        };
        Some(value)
    }
}

/// The set of classes an item can be used by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassJobCategoryRow {
    pub id: u32,
    /// Bit `n` set means class/job id `n` may use the item.
    pub classes: u64,
}

impl ClassJobCategoryRow {
    pub fn contains(&self, class_id: u32) -> bool {
        class_id < 64 && self.classes & (1u64 << class_id) != 0
    }
}

/// Which gear slots an equip slot category occupies.
///
/// `1` means the item goes in that slot, `-1` means it also blocks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipSlotCategoryRow {
    pub id: u32,
    pub main_hand: i8,
    pub off_hand: i8,
    pub head: i8,
    pub body: i8,
    pub gloves: i8,
    pub legs: i8,
    pub feet: i8,
    pub soul_crystal: i8,
}

impl EquipSlotCategoryRow {
    /// Number of extra slots this item also fills for item level averaging.
    pub fn blocked_slots(&self) -> u32 {
        [self.off_hand, self.head, self.gloves, self.legs, self.feet]
            .iter()
            .filter(|&&slot| slot == -1)
            .count() as u32
    }
}

/// A clan, with flat offsets to the six primary attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TribeRow {
    pub id: u32,
    pub masculine: String,
    pub feminine: String,
    pub strength: i8,
    pub dexterity: i8,
    pub vitality: i8,
    pub intelligence: i8,
    pub mind: i8,
    pub piety: i8,
}

impl TribeRow {
    /// Flat offset for one of the six primary attributes.
    pub fn offset(&self, stat: StatId) -> Option<i32> {
        let value = match stat {
            StatId::STR => self.strength,
            StatId::DEX => self.dexterity,
            StatId::VIT => self.vitality,
            StatId::INT => self.intelligence,
            StatId::MND => self.mind,
            StatId::PIE => self.piety,
            _ => return None,
        };
        Some(i32::from(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceRow {
    pub id: u32,
    pub masculine: String,
    pub feminine: String,
}

/// Per-level scaling row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowRow {
    pub level: u8,
    pub level_modifier: i32,
    /// Item level items are synced down to at this level.
    pub item_level_sync: u32,
}

/// What using an item does. For consumables, `data[0]` is the action kind
/// and `data[1]` the food row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemActionRow {
    pub id: u32,
    pub data: [u16; 2],
    pub data_hq: [u16; 2],
}

/// One stat effect of a food or medicine row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFoodParam {
    pub stat: StatId,
    pub is_relative: bool,
    pub value: i16,
    pub max: i16,
    pub value_hq: i16,
    pub max_hq: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFoodRow {
    pub id: u32,
    pub params: Vec<ItemFoodParam>,
}

/// Read-only access to game data tables.
///
/// Implementations must be safe to share across threads; the engine only
/// ever reads through this trait.
pub trait GameData: Send + Sync {
    /// Whether the core tables are present. When this is false the engine
    /// refuses to calculate rather than produce partial results.
    fn is_ready(&self) -> bool {
        true
    }

    fn item(&self, id: u32) -> Option<&ItemRow>;

    /// All items, for the consumable scan.
    fn items(&self) -> Box<dyn Iterator<Item = &ItemRow> + '_>;

    fn item_level(&self, id: u32) -> Option<&ItemLevelRow>;

    fn base_param(&self, stat: StatId) -> Option<&BaseParamRow>;

    fn materia(&self, id: u32) -> Option<&MateriaRow>;

    fn class_job(&self, id: u32) -> Option<&ClassJobRow>;

    /// All classes and jobs in ascending id order.
    fn class_jobs(&self) -> Box<dyn Iterator<Item = &ClassJobRow> + '_>;

    fn class_job_category(&self, id: u32) -> Option<&ClassJobCategoryRow>;

    fn equip_slot_category(&self, id: u32) -> Option<&EquipSlotCategoryRow>;

    fn tribe(&self, id: u32) -> Option<&TribeRow>;

    fn race(&self, id: u32) -> Option<&RaceRow>;

    fn grow(&self, level: u8) -> Option<&GrowRow>;

    fn item_action(&self, id: u32) -> Option<&ItemActionRow>;

    fn item_food(&self, id: u32) -> Option<&ItemFoodRow>;
}

/// In-memory game tables.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::data::{GameData, GameTables, GrowRow};
///
/// let mut tables = GameTables::default();
/// assert!(!tables.is_ready());
///
/// tables.insert_grow(GrowRow { level: 90, level_modifier: 1900, item_level_sync: 0 });
/// assert_eq!(tables.grow(90).map(|row| row.level_modifier), Some(1900));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTables {
    pub items: BTreeMap<u32, ItemRow>,
    pub item_levels: BTreeMap<u32, ItemLevelRow>,
    pub base_params: BTreeMap<StatId, BaseParamRow>,
    pub materia: BTreeMap<u32, MateriaRow>,
    pub class_jobs: BTreeMap<u32, ClassJobRow>,
    pub class_job_categories: BTreeMap<u32, ClassJobCategoryRow>,
    pub equip_slot_categories: BTreeMap<u32, EquipSlotCategoryRow>,
    pub tribes: BTreeMap<u32, TribeRow>,
    pub races: BTreeMap<u32, RaceRow>,
    pub grow: BTreeMap<u8, GrowRow>,
    pub item_actions: BTreeMap<u32, ItemActionRow>,
    pub item_foods: BTreeMap<u32, ItemFoodRow>,
}

impl GameTables {
    /// Create empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse tables from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CalcError> {
        serde_json::from_str(json).map_err(|err| CalcError::InvalidTables(err.to_string()))
    }

    pub fn insert_item(&mut self, row: ItemRow) {
        self.items.insert(row.id, row);
    }

    pub fn insert_item_level(&mut self, row: ItemLevelRow) {
        self.item_levels.insert(row.id, row);
    }

    pub fn insert_base_param(&mut self, row: BaseParamRow) {
        self.base_params.insert(StatId::new(row.id), row);
    }

    pub fn insert_materia(&mut self, row: MateriaRow) {
        self.materia.insert(row.id, row);
    }

    pub fn insert_class_job(&mut self, row: ClassJobRow) {
        self.class_jobs.insert(row.id, row);
    }

    pub fn insert_class_job_category(&mut self, row: ClassJobCategoryRow) {
        self.class_job_categories.insert(row.id, row);
    }

    pub fn insert_equip_slot_category(&mut self, row: EquipSlotCategoryRow) {
        self.equip_slot_categories.insert(row.id, row);
    }

    pub fn insert_tribe(&mut self, row: TribeRow) {
        self.tribes.insert(row.id, row);
    }

    pub fn insert_race(&mut self, row: RaceRow) {
        self.races.insert(row.id, row);
    }

    pub fn insert_grow(&mut self, row: GrowRow) {
        self.grow.insert(row.level, row);
    }

    pub fn insert_item_action(&mut self, row: ItemActionRow) {
        self.item_actions.insert(row.id, row);
    }

    pub fn insert_item_food(&mut self, row: ItemFoodRow) {
        self.item_foods.insert(row.id, row);
    }
}

impl GameData for GameTables {
    fn is_ready(&self) -> bool {
        !self.items.is_empty()
            && !self.item_levels.is_empty()
            && !self.base_params.is_empty()
            && !self.class_jobs.is_empty()
            && !self.grow.is_empty()
    }

    fn item(&self, id: u32) -> Option<&ItemRow> {
        self.items.get(&id)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &ItemRow> + '_> {
        Box::new(self.items.values())
    }

    fn item_level(&self, id: u32) -> Option<&ItemLevelRow> {
        self.item_levels.get(&id)
    }

    fn base_param(&self, stat: StatId) -> Option<&BaseParamRow> {
        self.base_params.get(&stat)
    }

    fn materia(&self, id: u32) -> Option<&MateriaRow> {
        self.materia.get(&id)
    }

    fn class_job(&self, id: u32) -> Option<&ClassJobRow> {
        self.class_jobs.get(&id)
    }

    fn class_jobs(&self) -> Box<dyn Iterator<Item = &ClassJobRow> + '_> {
        Box::new(self.class_jobs.values())
    }

    fn class_job_category(&self, id: u32) -> Option<&ClassJobCategoryRow> {
        self.class_job_categories.get(&id)
    }

    fn equip_slot_category(&self, id: u32) -> Option<&EquipSlotCategoryRow> {
        self.equip_slot_categories.get(&id)
    }

    fn tribe(&self, id: u32) -> Option<&TribeRow> {
        self.tribes.get(&id)
    }

    fn race(&self, id: u32) -> Option<&RaceRow> {
        self.races.get(&id)
    }

    fn grow(&self, level: u8) -> Option<&GrowRow> {
        self.grow.get(&level)
    }

    fn item_action(&self, id: u32) -> Option<&ItemActionRow> {
        self.item_actions.get(&id)
    }

    fn item_food(&self, id: u32) -> Option<&ItemFoodRow> {
        self.item_foods.get(&id)
    }
}
