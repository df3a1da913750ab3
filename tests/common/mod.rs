//! Synthetic game tables shared by the integration tests.

#![allow(dead_code)]

use gearset_calc::data::{
    BaseParamRow, ClassJobCategoryRow, ClassJobRow, EquipSlotCategoryRow, GrowRow, ItemActionRow,
    ItemFoodParam, ItemFoodRow, ItemLevelRow, ItemParam, ItemRow, MateriaRow, RaceRow, TribeRow,
    ACTION_FOOD, ACTION_MEDICINE, CATEGORY_MAGICAL, CATEGORY_PHYSICAL, UI_CATEGORY_MEAL,
    UI_CATEGORY_MEDICINE,
};
use gearset_calc::{CalcContext, EngineConfig, EquipmentSet, GameTables, MeldedItem, StatId};

pub const PUGILIST: u32 = 2;
pub const THAUMATURGE: u32 = 7;
pub const CARPENTER: u32 = 8;
pub const MONK: u32 = 20;
pub const BLACK_MAGE: u32 = 25;

pub const MIDLANDER: u8 = 1;
pub const HYUR: u8 = 1;

pub const MONK_WEAPON: u32 = 100;
pub const HEAD_600: u32 = 101;
pub const HEAD_550: u32 = 102;
pub const MONK_CRYSTAL: u32 = 103;
pub const BLM_WEAPON: u32 = 104;
pub const BLM_CRYSTAL: u32 = 105;
pub const CARPENTER_TOOL: u32 = 107;

pub const STEW: u32 = 200;
pub const TEA: u32 = 201;
pub const OLD_STEW: u32 = 202;
pub const TINCTURE: u32 = 203;
pub const VIT_CAKE: u32 = 204;
pub const CRAFTER_TEA: u32 = 205;

pub const STEW_FOOD: u32 = 10;
pub const TINCTURE_FOOD: u32 = 20;

pub const CRIT_MATERIA: u16 = 1;
pub const RELIC_MATERIA: u16 = 2;

/// Item level without a synced grow row, used for sync tests.
pub const SYNC_ITEM_LEVEL: u32 = 500;

const MAIN_HAND: u32 = 1;
const HEAD: u32 = 3;
const TWO_HANDED: u32 = 13;
const SOUL_CRYSTAL: u32 = 17;

fn slot_pct() -> Vec<u16> {
    let mut pct = vec![0u16; 18];
    pct[MAIN_HAND as usize] = 1000;
    pct[2] = 500;
    pct[HEAD as usize] = 500;
    pct[4] = 800;
    pct[TWO_HANDED as usize] = 1000;
    pct
}

fn item_level(id: u32, primary: u16, sub: u16, damage: u16, defense: u16) -> ItemLevelRow {
    let mut stats = std::collections::BTreeMap::new();
    for stat in StatId::PRIMARY {
        stats.insert(stat, primary);
    }
    for stat in [StatId::CRT, StatId::DET, StatId::DH, StatId::SKS, StatId::SPS, StatId::TEN] {
        stats.insert(stat, sub);
    }
    stats.insert(StatId::PHYS_DMG, damage);
    stats.insert(StatId::MAG_DMG, damage);
    stats.insert(StatId::DEF, defense);
    stats.insert(StatId::MDF, defense);
    stats.insert(StatId::CRAFTSMANSHIP, 500);
    stats.insert(StatId::CONTROL, 500);
    ItemLevelRow { id, stats }
}

fn param(stat: StatId, value: i16) -> ItemParam {
    ItemParam { stat, value }
}

fn relative(stat: StatId, value: i16, max: i16, max_hq: i16) -> ItemFoodParam {
    ItemFoodParam {
        stat,
        is_relative: true,
        value,
        max,
        value_hq: value,
        max_hq,
    }
}

fn combat_job(id: u32, name: &str, job_index: u8, parent: u32, role: u8, category: u32) -> ClassJobRow {
    ClassJobRow {
        id,
        name: name.into(),
        job_index,
        doh_dol_job_index: -1,
        parent,
        role,
        category,
        modifier_strength: 100,
        modifier_dexterity: 100,
        modifier_vitality: 100,
        modifier_intelligence: 100,
        modifier_mind: 100,
        modifier_piety: 100,
        modifier_hit_points: 100,
        ..Default::default()
    }
}

fn consumable(tables: &mut GameTables, id: u32, name: &str, level: u32, ui: u32, action: u32) {
    tables.insert_item(ItemRow {
        id,
        name: name.into(),
        level_item: level,
        ui_category: ui,
        item_action: action,
        ..Default::default()
    });
}

/// A small but complete set of game tables.
pub fn tables() -> GameTables {
    let mut tables = GameTables::new();

    let names = [
        (StatId::STR, "Strength"),
        (StatId::DEX, "Dexterity"),
        (StatId::VIT, "Vitality"),
        (StatId::INT, "Intelligence"),
        (StatId::MND, "Mind"),
        (StatId::PIE, "Piety"),
        (StatId::CP, "CP"),
        (StatId::PHYS_DMG, "Physical Damage"),
        (StatId::MAG_DMG, "Magic Damage"),
        (StatId::TEN, "Tenacity"),
        (StatId::DEF, "Defense"),
        (StatId::DH, "Direct Hit Rate"),
        (StatId::MDF, "Magic Defense"),
        (StatId::CRT, "Critical Hit"),
        (StatId::DET, "Determination"),
        (StatId::SKS, "Skill Speed"),
        (StatId::SPS, "Spell Speed"),
        (StatId::CRAFTSMANSHIP, "Craftsmanship"),
        (StatId::CONTROL, "Control"),
    ];
    for (stat, name) in names {
        tables.insert_base_param(BaseParamRow {
            id: stat.get(),
            name: name.into(),
            slot_pct: slot_pct(),
        });
    }

    tables.insert_item_level(item_level(600, 400, 240, 140, 600));
    tables.insert_item_level(item_level(550, 360, 180, 120, 550));
    tables.insert_item_level(item_level(SYNC_ITEM_LEVEL, 320, 160, 110, 500));

    tables.insert_grow(GrowRow {
        level: 80,
        level_modifier: 1300,
        item_level_sync: 530,
    });
    tables.insert_grow(GrowRow {
        level: 90,
        level_modifier: 1900,
        item_level_sync: 665,
    });
    tables.insert_grow(GrowRow {
        level: 100,
        level_modifier: 2780,
        item_level_sync: 795,
    });

    let mut pugilist = combat_job(PUGILIST, "pugilist", 0, 0, 2, CATEGORY_PHYSICAL);
    pugilist.primary_stat = StatId::STR;
    pugilist.modifier_strength = 105;
    tables.insert_class_job(pugilist);

    let mut thaumaturge = combat_job(THAUMATURGE, "thaumaturge", 0, 0, 3, CATEGORY_MAGICAL);
    thaumaturge.primary_stat = StatId::INT;
    thaumaturge.modifier_intelligence = 110;
    tables.insert_class_job(thaumaturge);

    tables.insert_class_job(ClassJobRow {
        id: CARPENTER,
        name: "carpenter".into(),
        doh_dol_job_index: 0,
        role: 0,
        ..Default::default()
    });

    let mut monk = combat_job(MONK, "monk", 4, PUGILIST, 2, CATEGORY_PHYSICAL);
    monk.primary_stat = StatId::STR;
    monk.modifier_strength = 110;
    tables.insert_class_job(monk);

    let mut black_mage = combat_job(BLACK_MAGE, "black mage", 7, THAUMATURGE, 3, CATEGORY_MAGICAL);
    black_mage.primary_stat = StatId::INT;
    black_mage.modifier_intelligence = 115;
    tables.insert_class_job(black_mage);

    tables.insert_class_job_category(ClassJobCategoryRow {
        id: 84,
        classes: (1 << PUGILIST) | (1 << MONK),
    });
    tables.insert_class_job_category(ClassJobCategoryRow {
        id: 89,
        classes: (1 << THAUMATURGE) | (1 << BLACK_MAGE),
    });
    tables.insert_class_job_category(ClassJobCategoryRow {
        id: 9,
        classes: 1 << CARPENTER,
    });

    tables.insert_equip_slot_category(EquipSlotCategoryRow {
        id: MAIN_HAND,
        main_hand: 1,
        ..Default::default()
    });
    tables.insert_equip_slot_category(EquipSlotCategoryRow {
        id: HEAD,
        head: 1,
        ..Default::default()
    });
    tables.insert_equip_slot_category(EquipSlotCategoryRow {
        id: TWO_HANDED,
        main_hand: 1,
        off_hand: -1,
        ..Default::default()
    });
    tables.insert_equip_slot_category(EquipSlotCategoryRow {
        id: SOUL_CRYSTAL,
        soul_crystal: 1,
        ..Default::default()
    });

    tables.insert_tribe(TribeRow {
        id: u32::from(MIDLANDER),
        masculine: "Midlander".into(),
        feminine: "Midlander".into(),
        strength: 2,
        dexterity: -1,
        vitality: 0,
        intelligence: 3,
        mind: -1,
        piety: 0,
    });
    tables.insert_race(RaceRow {
        id: u32::from(HYUR),
        masculine: "Hyur".into(),
        feminine: "Hyur".into(),
    });

    tables.insert_item(ItemRow {
        id: MONK_WEAPON,
        name: "Monk Weapon".into(),
        level_item: 600,
        level_equip: 90,
        equip_slot_category: MAIN_HAND,
        class_job_category: 84,
        damage_phys: 130,
        damage_mag: 80,
        params: vec![
            param(StatId::STR, 300),
            param(StatId::CRT, 100),
            param(StatId::DET, 50),
        ],
        special_params: vec![param(StatId::STR, 10), param(StatId::PHYS_DMG, 2)],
        materia_slot_count: 2,
        ..Default::default()
    });
    tables.insert_item(ItemRow {
        id: HEAD_600,
        name: "Head 600".into(),
        level_item: 600,
        level_equip: 90,
        equip_slot_category: HEAD,
        defense_phys: 300,
        defense_mag: 300,
        params: vec![
            param(StatId::VIT, 150),
            param(StatId::CRT, 100),
            param(StatId::DET, 80),
        ],
        materia_slot_count: 2,
        ..Default::default()
    });
    tables.insert_item(ItemRow {
        id: HEAD_550,
        name: "Head 550".into(),
        level_item: 550,
        level_equip: 90,
        equip_slot_category: HEAD,
        params: vec![param(StatId::CRT, 100)],
        ..Default::default()
    });
    tables.insert_item(ItemRow {
        id: MONK_CRYSTAL,
        name: "Soul of the Monk".into(),
        level_item: 600,
        level_equip: 30,
        equip_slot_category: SOUL_CRYSTAL,
        ..Default::default()
    });
    tables.insert_item(ItemRow {
        id: BLM_WEAPON,
        name: "Black Mage Weapon".into(),
        level_item: 600,
        level_equip: 90,
        equip_slot_category: TWO_HANDED,
        class_job_category: 89,
        damage_phys: 80,
        damage_mag: 130,
        params: vec![
            param(StatId::INT, 300),
            param(StatId::SPS, 100),
            param(StatId::DET, 50),
        ],
        ..Default::default()
    });
    tables.insert_item(ItemRow {
        id: BLM_CRYSTAL,
        name: "Soul of the Black Mage".into(),
        level_item: 600,
        level_equip: 30,
        equip_slot_category: SOUL_CRYSTAL,
        ..Default::default()
    });
    tables.insert_item(ItemRow {
        id: CARPENTER_TOOL,
        name: "Saw".into(),
        level_item: 600,
        level_equip: 90,
        equip_slot_category: MAIN_HAND,
        class_job_category: 9,
        params: vec![
            param(StatId::CRAFTSMANSHIP, 100),
            param(StatId::CONTROL, 100),
        ],
        ..Default::default()
    });

    tables.insert_materia(MateriaRow {
        id: u32::from(CRIT_MATERIA),
        stat: StatId::CRT,
        values: vec![3, 6, 9, 12, 36],
        items: vec![5600, 5601, 5602, 5603, 5604],
    });
    tables.insert_materia(MateriaRow {
        id: u32::from(RELIC_MATERIA),
        stat: StatId::DET,
        values: vec![20],
        items: vec![0],
    });

    consumable(&mut tables, STEW, "Stew", 610, UI_CATEGORY_MEAL, 1);
    consumable(&mut tables, TEA, "Tea", 610, UI_CATEGORY_MEAL, 2);
    consumable(&mut tables, OLD_STEW, "Old Stew", 560, UI_CATEGORY_MEAL, 4);
    consumable(&mut tables, TINCTURE, "Tincture", 600, UI_CATEGORY_MEDICINE, 3);
    consumable(&mut tables, VIT_CAKE, "Cake", 620, UI_CATEGORY_MEAL, 5);
    consumable(&mut tables, CRAFTER_TEA, "Crafter Tea", 580, UI_CATEGORY_MEAL, 6);

    for (id, kind, food) in [
        (1, ACTION_FOOD, STEW_FOOD),
        (2, ACTION_FOOD, 11),
        (3, ACTION_MEDICINE, TINCTURE_FOOD),
        (4, ACTION_FOOD, 12),
        (5, ACTION_FOOD, 13),
        (6, ACTION_FOOD, 14),
    ] {
        let columns = [kind, food as u16];
        tables.insert_item_action(ItemActionRow {
            id,
            data: columns,
            data_hq: columns,
        });
    }

    tables.insert_item_food(ItemFoodRow {
        id: STEW_FOOD,
        params: vec![
            relative(StatId::CRT, 10, 90, 100),
            relative(StatId::DET, 10, 50, 60),
            relative(StatId::VIT, 8, 100, 110),
        ],
    });
    tables.insert_item_food(ItemFoodRow {
        id: 11,
        params: vec![
            relative(StatId::SKS, 10, 80, 90),
            relative(StatId::VIT, 8, 100, 110),
        ],
    });
    tables.insert_item_food(ItemFoodRow {
        id: 12,
        params: vec![
            relative(StatId::CRT, 10, 50, 60),
            relative(StatId::DET, 10, 30, 40),
        ],
    });
    tables.insert_item_food(ItemFoodRow {
        id: 13,
        params: vec![ItemFoodParam {
            stat: StatId::VIT,
            is_relative: false,
            value: 20,
            max: 0,
            value_hq: 25,
            max_hq: 0,
        }],
    });
    tables.insert_item_food(ItemFoodRow {
        id: 14,
        params: vec![
            relative(StatId::CRAFTSMANSHIP, 5, 60, 70),
            relative(StatId::CONTROL, 5, 50, 60),
        ],
    });
    tables.insert_item_food(ItemFoodRow {
        id: TINCTURE_FOOD,
        params: vec![relative(StatId::STR, 10, 150, 180)],
    });

    tables
}

/// A level 90 Midlander monk in an HQ weapon, the 600 head and a crystal.
pub fn monk_set(ctx: &CalcContext<'_>) -> EquipmentSet {
    let mut set = EquipmentSet::new(vec![
        MeldedItem::new(MONK_WEAPON, true),
        MeldedItem::new(HEAD_600, false),
        MeldedItem::new(MONK_CRYSTAL, false),
    ]);
    set.update_player(ctx, Some("Test Monk".into()), 0, HYUR, MIDLANDER, 90);
    set
}

pub fn config() -> EngineConfig {
    EngineConfig::default()
}
