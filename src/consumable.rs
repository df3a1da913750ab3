//! Food and medicine.
//!
//! Consumables are scanned out of the item table once and normalized into
//! [`Food`] records: one per item and quality, each holding the bonus it
//! grants per stat. The catalog is read-only after it is built and can be
//! shared between threads; [`SharedCatalog`] adds a one-time background
//! load behind a loaded gate.

use crate::data::{
    GameData, ItemFoodRow, ItemRow, ACTION_FOOD, ACTION_MEDICINE, UI_CATEGORY_MEAL,
    UI_CATEGORY_MEDICINE,
};
use crate::stat_id::StatId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::JoinHandle;
use std::time::Instant;

/// The bonus a consumable grants to one stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodStat {
    pub stat: StatId,

    /// Display text, e.g. `"Critical Hit +10% (Max 103)"`.
    pub line: String,

    pub is_relative: bool,

    /// Percentage of the stat granted by a relative bonus. Zero for flat
    /// bonuses.
    pub percent: i32,

    /// Upper bound of a relative bonus, or the whole of a flat one.
    pub cap: i32,
}

impl FoodStat {
    /// The relative bonus as a fraction.
    pub fn multiplier(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    /// The bonus granted on top of `value_no_food`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gearset_calc::{FoodStat, StatId};
    ///
    /// let relative = FoodStat {
    ///     stat: StatId::CRT,
    ///     line: String::new(),
    ///     is_relative: true,
    ///     percent: 10,
    ///     cap: 103,
    /// };
    /// assert_eq!(relative.bonus(815), 81);
    /// assert_eq!(relative.bonus(5000), 103);
    ///
    /// let flat = FoodStat { is_relative: false, percent: 0, cap: 25, ..relative };
    /// assert_eq!(flat.bonus(5000), 25);
    /// ```
    pub fn bonus(&self, value_no_food: i32) -> i32 {
        if !self.is_relative {
            return self.cap;
        }
        let scaled = (i64::from(value_no_food) * i64::from(self.percent)).div_euclid(100);
        scaled.min(i64::from(self.cap)) as i32
    }
}

/// A food or medicine item at one quality.
///
/// Two records are equal when they name the same item, food row and
/// quality; the stat map is derived from those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub item_id: u32,
    pub food_id: u32,
    pub item_level: u32,
    pub hq: bool,
    pub stats: BTreeMap<StatId, FoodStat>,
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id && self.food_id == other.food_id && self.hq == other.hq
    }
}

impl Eq for Food {}

impl Food {
    /// Build a record from its item and food rows. Params with an empty
    /// stat are dropped.
    pub fn from_rows(data: &dyn GameData, item: &ItemRow, food: &ItemFoodRow, hq: bool) -> Self {
        let mut stats = BTreeMap::new();

        for param in &food.params {
            if param.stat.is_none() {
                continue;
            }

            let (value, max) = if hq {
                (param.value_hq, param.max_hq)
            } else {
                (param.value, param.max)
            };

            let name = data
                .base_param(param.stat)
                .map(|row| row.name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| param.stat.to_string());

            let stat = if param.is_relative {
                FoodStat {
                    stat: param.stat,
                    line: format!("{} +{}% (Max {})", name, value, max),
                    is_relative: true,
                    percent: i32::from(value),
                    cap: i32::from(max),
                }
            } else {
                FoodStat {
                    stat: param.stat,
                    line: format!("{} +{}", name, value),
                    is_relative: false,
                    percent: 0,
                    cap: i32::from(value),
                }
            };

            stats.insert(param.stat, stat);
        }

        Self {
            item_id: item.id,
            food_id: food.id,
            item_level: item.level_item,
            hq,
            stats,
        }
    }

    /// Every stat line, comma separated, in stat id order.
    pub fn stat_line(&self) -> String {
        self.stats
            .values()
            .map(|stat| stat.line.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Every food and medicine in the game data.
#[derive(Debug, Clone, Default)]
pub struct ConsumableCatalog {
    pub food: Vec<Arc<Food>>,
    pub medicine: Vec<Arc<Food>>,
}

impl ConsumableCatalog {
    /// Scan the item table for consumables.
    ///
    /// An item qualifies when it is in the meal or medicine UI category and
    /// its action is a food or medicine action in either quality column.
    /// High quality entries are listed before normal quality ones.
    pub fn build(data: &dyn GameData) -> Self {
        let started = Instant::now();
        let mut catalog = Self::default();

        for item in data.items() {
            if item.ui_category != UI_CATEGORY_MEAL && item.ui_category != UI_CATEGORY_MEDICINE {
                continue;
            }

            let Some(action) = data.item_action(item.item_action) else {
                continue;
            };

            for (columns, hq) in [(action.data_hq, true), (action.data, false)] {
                let [kind, food_id] = columns;
                let list = match kind {
                    ACTION_FOOD => &mut catalog.food,
                    ACTION_MEDICINE => &mut catalog.medicine,
                    _ => continue,
                };

                if let Some(food) = data.item_food(u32::from(food_id)) {
                    list.push(Arc::new(Food::from_rows(data, item, food, hq)));
                }
            }
        }

        tracing::info!(
            food = catalog.food.len(),
            medicine = catalog.medicine.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded consumable catalog"
        );

        catalog
    }

    pub fn find_food(&self, food_id: u32, hq: bool) -> Option<&Arc<Food>> {
        self.food
            .iter()
            .find(|food| food.food_id == food_id && food.hq == hq)
    }

    /// Medicine matched by food row only; the first quality found wins.
    pub fn find_medicine(&self, food_id: u32) -> Option<&Arc<Food>> {
        self.medicine.iter().find(|food| food.food_id == food_id)
    }
}

/// A catalog loaded at most once, possibly on a worker thread.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::{GameTables, SharedCatalog};
/// use std::sync::Arc;
///
/// let shared = Arc::new(SharedCatalog::new());
/// assert!(!shared.is_loaded());
///
/// let tables: Arc<GameTables> = Arc::new(GameTables::new());
/// if let Some(handle) = shared.spawn_load(tables) {
///     handle.join().unwrap();
/// }
/// assert!(shared.is_loaded());
/// ```
#[derive(Debug, Default)]
pub struct SharedCatalog {
    catalog: OnceLock<ConsumableCatalog>,
    loading: AtomicBool,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog has been published.
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// The catalog, once loaded.
    pub fn get(&self) -> Option<&ConsumableCatalog> {
        self.catalog.get()
    }

    /// Load on the calling thread, or return the already loaded catalog.
    pub fn load(&self, data: &dyn GameData) -> &ConsumableCatalog {
        self.catalog.get_or_init(|| ConsumableCatalog::build(data))
    }

    /// Start loading on a worker thread.
    ///
    /// Returns `None` when the catalog is already loaded or a load is
    /// already running.
    pub fn spawn_load<D>(self: &Arc<Self>, data: Arc<D>) -> Option<JoinHandle<()>>
    where
        D: GameData + 'static,
    {
        if self.is_loaded() || self.loading.swap(true, Ordering::AcqRel) {
            tracing::debug!("consumable catalog load already started");
            return None;
        }

        let shared = Arc::clone(self);
        Some(std::thread::spawn(move || {
            shared.load(data.as_ref());
            shared.loading.store(false, Ordering::Release);
        }))
    }
}
