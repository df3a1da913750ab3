//! Basic example: recalculating a one-item gear set
//!
//! This example demonstrates:
//! - Loading game tables and configuration from JSON
//! - Building an equipment set with a melded item
//! - Reading totals, caps and display rows

use gearset_calc::*;

const TABLES: &str = r#"{
    "items": {
        "1": {
            "id": 1,
            "name": "Example Circlet",
            "level_item": 600,
            "level_equip": 90,
            "equip_slot_category": 3,
            "params": [{ "stat": 27, "value": 100 }, { "stat": 44, "value": 70 }],
            "materia_slot_count": 2
        }
    },
    "item_levels": {
        "600": { "id": 600, "stats": { "27": 240, "44": 240 } }
    },
    "base_params": {
        "27": { "id": 27, "name": "Critical Hit", "slot_pct": [0, 1000, 500, 500] },
        "44": { "id": 44, "name": "Determination", "slot_pct": [0, 1000, 500, 500] }
    },
    "materia": {
        "1": { "id": 1, "stat": 27, "values": [3, 6, 9, 12, 36], "items": [5600, 5601, 5602, 5603, 5604] }
    },
    "class_jobs": {
        "1": { "id": 1, "name": "gladiator", "doh_dol_job_index": -1, "role": 1 }
    },
    "equip_slot_categories": {
        "3": { "id": 3, "head": 1 }
    },
    "grow": {
        "90": { "level": 90, "level_modifier": 1900, "item_level_sync": 665 }
    }
}"#;

fn main() -> Result<(), CalcError> {
    let tables = GameTables::from_json_str(TABLES)?;
    let config = EngineConfig::from_json_str(r#"{ "food_hq_only": true }"#)?;
    let ctx = CalcContext::new(&tables, &config);

    println!("Equipping a circlet with two crit materia:");
    let circlet = MeldedItem::new(1, false)
        .with_meld(0, MeldedMateria::new(1, 4))
        .with_meld(1, MeldedMateria::new(1, 4));
    let mut set = EquipmentSet::new(vec![circlet]);
    set.update_player(&ctx, Some("Example".into()), 0, 0, 0, 90);

    set.recalculate(&ctx)?;

    println!("\n=== Attributes ===");
    for stat in set.attributes.values() {
        println!(
            "{}: {} (base {}, gear {}, materia {}, wasted {}, next tier in {})",
            stat.id,
            stat.value(),
            stat.base,
            stat.gear,
            stat.delta,
            stat.waste,
            stat.next_tier
        );
    }

    println!("\n=== Calculated ===");
    for row in &set.calculated {
        println!("{}: {}", row.label, row.value);
    }

    println!("\nEmpty meld slots: {}", set.empty_meld_slots);

    Ok(())
}
