//! # gearset-calc - Gear Set Stat Calculation Engine
//!
//! Recomputes a character's derived combat and crafting stats from a
//! snapshot of equipped items, melded materia, consumables and character
//! metadata, reproducing the game's integer stat formulas:
//! - **Exact** fixed-point rounding, truncation and per-slot caps
//! - **Injected** read-only game data (no global tables)
//! - **Full** recalculation on every change (no stale cross-phase state)
//!
//! ## Core Concepts
//!
//! ### Calculation Pipeline
//!
//! `EquipmentSet::recalculate` runs five phases in order, each feeding the
//! next:
//!
//! ```text
//! [class] → [items] → [base stats] → [derived] → [consumable ranking]
//! ```
//!
//! 1. **Class** is read off the main hand and soul crystal
//! 2. **Items** sum gear and materia stats and apply slot caps
//! 3. **Base stats** add level, clan, job, food and party bonus, then tiers
//! 4. **Derived** values become display rows and a damage table
//! 5. **Ranking** lists the food and medicine relevant to the gear
//!
//! ## Example
//!
//! ```rust
//! use gearset_calc::*;
//! use gearset_calc::data::{BaseParamRow, ClassJobRow, GrowRow, ItemLevelRow, ItemParam, ItemRow};
//!
//! let mut tables = GameTables::new();
//! tables.insert_base_param(BaseParamRow {
//!     id: StatId::CRT.get(),
//!     name: "Critical Hit".into(),
//!     slot_pct: vec![0, 0, 0, 1000],
//! });
//! tables.insert_item_level(ItemLevelRow {
//!     id: 600,
//!     stats: [(StatId::CRT, 300)].into_iter().collect(),
//! });
//! tables.insert_item(ItemRow {
//!     id: 1,
//!     level_item: 600,
//!     level_equip: 90,
//!     equip_slot_category: 3,
//!     params: vec![ItemParam { stat: StatId::CRT, value: 120 }],
//!     ..Default::default()
//! });
//! tables.insert_class_job(ClassJobRow { id: 1, ..Default::default() });
//! tables.insert_grow(GrowRow { level: 90, level_modifier: 1900, item_level_sync: 0 });
//!
//! let config = EngineConfig::default();
//! let ctx = CalcContext::new(&tables, &config);
//!
//! let mut set = EquipmentSet::new(vec![MeldedItem::new(1, false)]);
//! set.update_player(&ctx, None, 0, 0, 0, 90);
//! set.recalculate(&ctx).unwrap();
//!
//! let crit = &set.attributes[&StatId::CRT];
//! assert_eq!(crit.base, 400);
//! assert_eq!(crit.gear, 120);
//! assert_eq!(crit.value(), 520);
//! ```
//!
//! ## Modules
//!
//! - [`stat_id`] - Stat identifier type
//! - [`numeric`] - Floor, truncate and tier helpers
//! - [`tables`] - Static game tables
//! - [`data`] - Game data provider trait and in-memory tables
//! - [`config`] - Engine configuration
//! - [`context`] - Read-only calculation context
//! - [`melded`] - Equipped item inputs
//! - [`attribute`] - Per-stat results
//! - [`consumable`] - Food, medicine and the consumable catalog
//! - [`class`] - Class and job resolution
//! - [`items`] - Item and materia aggregation
//! - [`base_stats`] - Base stats, consumables, party bonus and tiers
//! - [`derived`] - Display rows, GCD and damage estimates
//! - [`ranking`] - Consumable relevance ranking
//! - [`equipment`] - The equipment set and its recalculation
//! - [`error`] - Error types

pub mod attribute;
pub mod base_stats;
pub mod class;
pub mod config;
pub mod consumable;
pub mod context;
pub mod data;
pub mod derived;
pub mod equipment;
pub mod error;
pub mod items;
pub mod melded;
pub mod numeric;
pub mod ranking;
pub mod stat_id;
pub mod tables;

// Re-export main types for convenience
pub use attribute::{StatAttribute, StatMap};
pub use config::EngineConfig;
pub use context::CalcContext;
pub use equipment::{EquipmentSet, PlayerInfo, SyncSettings};
pub use error::CalcError;
pub use melded::{MeldedItem, MeldedMateria};
pub use stat_id::StatId;

// Re-export data and consumable types
pub use consumable::{ConsumableCatalog, Food, FoodStat, SharedCatalog};
pub use data::{GameData, GameTables};

// Re-export results
pub use base_stats::GcdTiers;
pub use class::Effective;
pub use derived::{CalculatedStat, DamageValues};
pub use items::EquippedItem;
pub use tables::GameClass;
