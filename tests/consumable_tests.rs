//! Consumable catalog, bonus and ranking tests.

mod common;

use common::*;
use gearset_calc::*;
use std::sync::Arc;

fn ids(list: &[Arc<Food>]) -> Vec<(u32, bool)> {
    list.iter().map(|food| (food.item_id, food.hq)).collect()
}

/// Test that the catalog finds every meal and medicine in both qualities
#[test]
fn test_catalog_build() {
    let tables = tables();
    let catalog = ConsumableCatalog::build(&tables);

    assert_eq!(catalog.food.len(), 10);
    assert_eq!(catalog.medicine.len(), 2);

    let stew = catalog.find_food(STEW_FOOD, true).unwrap();
    assert_eq!(stew.item_id, STEW);
    assert_eq!(stew.item_level, 610);
    assert_eq!(
        stew.stat_line(),
        "Vitality +8% (Max 110), Critical Hit +10% (Max 100), Determination +10% (Max 60)"
    );

    let normal = catalog.find_food(STEW_FOOD, false).unwrap();
    assert_eq!(normal.stats[&StatId::CRT].cap, 90);

    let tincture = catalog.find_medicine(TINCTURE_FOOD).unwrap();
    assert_eq!(tincture.item_id, TINCTURE);
    assert!(tincture.hq);
}

/// Test food and medicine bonuses under their caps
#[test]
fn test_food_and_medicine_applied() {
    let tables = tables();
    let config = config();
    let catalog = ConsumableCatalog::build(&tables);
    let ctx = CalcContext::new(&tables, &config).with_catalog(&catalog);

    let mut set = monk_set(&ctx);
    assert!(set.select_food(&catalog, STEW_FOOD, true).unwrap());
    assert!(!set.select_food(&catalog, STEW_FOOD, true).unwrap());
    assert!(set.select_medicine(&catalog, TINCTURE_FOOD).unwrap());
    set.recalculate(&ctx).unwrap();

    // 10% of 600, 520 and 741; 8% of 540.
    assert_eq!(set.attributes[&StatId::CRT].food, 60);
    assert_eq!(set.attributes[&StatId::DET].food, 52);
    assert_eq!(set.attributes[&StatId::VIT].food, 43);
    assert_eq!(set.attributes[&StatId::STR].food, 74);
    assert_eq!(set.attributes[&StatId::STR].value(), 815);

    // Bonuses feed the tiers: 260 crit points above base.
    assert_eq!(set.attributes[&StatId::CRT].bonus_points(), 260);
}

/// Test that a relative bonus stops at its cap
#[test]
fn test_relative_bonus_capped() {
    let tables = tables();
    let config = config();
    let catalog = ConsumableCatalog::build(&tables);
    let ctx = CalcContext::new(&tables, &config);

    let mut set = monk_set(&ctx);
    set.select_food(&catalog, 12, false).unwrap();
    set.recalculate(&ctx).unwrap();

    assert_eq!(set.attributes[&StatId::CRT].food, 50);
    assert_eq!(set.attributes[&StatId::DET].food, 30);
}

/// Test that a flat bonus adds its value regardless of the stat
#[test]
fn test_flat_bonus() {
    let tables = tables();
    let config = config();
    let catalog = ConsumableCatalog::build(&tables);
    let ctx = CalcContext::new(&tables, &config);

    let cake = catalog.find_food(13, true).cloned();
    assert_eq!(cake.as_ref().map(|food| food.stat_line()), Some("Vitality +25".to_string()));

    let mut set = monk_set(&ctx);
    assert!(set.set_food(cake));
    set.recalculate(&ctx).unwrap();
    assert_eq!(set.attributes[&StatId::VIT].food, 25);

    assert!(set.set_food(None));
    set.recalculate(&ctx).unwrap();
    assert_eq!(set.attributes[&StatId::VIT].food, 0);
}

/// Test relevance ranking for a monk
#[test]
fn test_monk_ranking() {
    let tables = tables();
    let config = config();
    let catalog = ConsumableCatalog::build(&tables);
    let ctx = CalcContext::new(&tables, &config).with_catalog(&catalog);

    let mut set = monk_set(&ctx);
    set.recalculate(&ctx).unwrap();

    // Tea only adds skill speed and vitality, cake only vitality.
    assert_eq!(
        ids(&set.relevant_food),
        vec![(STEW, true), (STEW, false), (OLD_STEW, true), (OLD_STEW, false)]
    );
    assert_eq!(
        ids(&set.relevant_medicine),
        vec![(TINCTURE, true), (TINCTURE, false)]
    );
}

/// Test the high quality only filter
#[test]
fn test_ranking_hq_only() {
    let tables = tables();
    let config = EngineConfig {
        food_hq_only: true,
        ..config()
    };
    let catalog = ConsumableCatalog::build(&tables);
    let ctx = CalcContext::new(&tables, &config).with_catalog(&catalog);

    let mut set = monk_set(&ctx);
    set.recalculate(&ctx).unwrap();

    assert_eq!(ids(&set.relevant_food), vec![(STEW, true), (OLD_STEW, true)]);
    assert_eq!(ids(&set.relevant_medicine), vec![(TINCTURE, true)]);
}

/// Test that the minimum item level depends on the job's role
#[test]
fn test_ranking_min_item_level_by_role() {
    let tables = tables();
    let config = EngineConfig {
        food_min_item_level: 600,
        food_min_item_level_crafting: 570,
        ..config()
    };
    let catalog = ConsumableCatalog::build(&tables);
    let ctx = CalcContext::new(&tables, &config).with_catalog(&catalog);

    let mut monk = monk_set(&ctx);
    monk.recalculate(&ctx).unwrap();
    assert_eq!(ids(&monk.relevant_food), vec![(STEW, true), (STEW, false)]);

    let mut carpenter = EquipmentSet::new(vec![MeldedItem::new(CARPENTER_TOOL, false)]);
    carpenter.update_player(&ctx, None, 0, 0, 0, 90);
    carpenter.recalculate(&ctx).unwrap();
    assert_eq!(
        ids(&carpenter.relevant_food),
        vec![(CRAFTER_TEA, true), (CRAFTER_TEA, false)]
    );
    assert!(carpenter.relevant_medicine.is_empty());
}

/// Test that ranking is skipped until the catalog loads
#[test]
fn test_ranking_without_catalog() {
    let tables = tables();
    let config = config();
    let catalog = ConsumableCatalog::build(&tables);

    let loaded = CalcContext::new(&tables, &config).with_catalog(&catalog);
    let mut set = monk_set(&loaded);
    set.recalculate(&loaded).unwrap();
    assert!(!set.relevant_food.is_empty());

    let unloaded = CalcContext::new(&tables, &config);
    set.recalculate(&unloaded).unwrap();
    assert!(set.relevant_food.is_empty());
    assert!(set.relevant_medicine.is_empty());
    // Everything else is still calculated.
    assert_eq!(set.attributes[&StatId::STR].value(), 741);
}

/// Test loading the shared catalog on a worker thread
#[test]
fn test_shared_catalog_background_load() {
    let tables = Arc::new(tables());
    let config = config();
    let shared = Arc::new(SharedCatalog::new());

    let ctx = CalcContext::new(tables.as_ref(), &config).with_shared_catalog(&shared);
    assert!(ctx.catalog.is_none());

    let handle = shared.spawn_load(Arc::clone(&tables)).unwrap();
    handle.join().unwrap();
    assert!(shared.is_loaded());
    assert!(shared.spawn_load(Arc::clone(&tables)).is_none());

    let ctx = CalcContext::new(tables.as_ref(), &config).with_shared_catalog(&shared);
    let mut set = monk_set(&ctx);
    set.recalculate(&ctx).unwrap();
    assert_eq!(set.relevant_food.len(), 4);
}

/// Test that unknown consumables are rejected
#[test]
fn test_select_unknown_consumable() {
    let tables = tables();
    let catalog = ConsumableCatalog::build(&tables);
    let mut set = EquipmentSet::default();

    assert_eq!(
        set.select_food(&catalog, TINCTURE_FOOD, true),
        Err(CalcError::UnknownFood {
            food_id: TINCTURE_FOOD,
            hq: true
        })
    );
    assert_eq!(
        set.select_medicine(&catalog, STEW_FOOD),
        Err(CalcError::UnknownMedicine { food_id: STEW_FOOD })
    );
    assert!(set.food.is_none());
}
