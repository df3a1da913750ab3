//! Class and job resolution.
//!
//! The class is read off the gear: the main hand's class/job category
//! names the candidates, and a soul crystal decides whether the job or
//! its base class is used for stat math.

use crate::data::GameData;
use crate::melded::MeldedItem;
use serde::{Deserialize, Serialize};

/// A value as displayed and the value used for calculation.
///
/// The two differ for a job without its soul crystal (computed as its base
/// class), and for a level under a level sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effective<T> {
    pub nominal: T,
    pub effective: T,
}

impl<T: Copy + PartialEq> Effective<T> {
    /// A pair where both sides are `value`.
    pub fn same(value: T) -> Self {
        Self {
            nominal: value,
            effective: value,
        }
    }

    pub fn differs(&self) -> bool {
        self.nominal != self.effective
    }
}

/// What the gear says about the character's class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassResolution {
    pub has_crystal: bool,
    pub has_offhand: bool,
    /// Class/job row ids, zero when unresolved.
    pub class: Effective<u32>,
}

/// Resolve the class from the equipped items.
///
/// Jobs are preferred over base classes; when the category names no job
/// (crafters and gatherers) any class it names is accepted. Rows are
/// searched in ascending id order and the first match wins.
pub fn resolve_class<'a, I>(data: &dyn GameData, items: I) -> ClassResolution
where
    I: IntoIterator<Item = &'a MeldedItem>,
{
    let mut resolution = ClassResolution::default();
    let mut category = None;

    for item in items {
        let Some(row) = data.item(item.id) else {
            continue;
        };
        let Some(slot) = data.equip_slot_category(row.equip_slot_category) else {
            continue;
        };

        if slot.main_hand == 1 {
            category = data.class_job_category(row.class_job_category);
        }
        if slot.off_hand == 1 {
            resolution.has_offhand = true;
        }
        if slot.soul_crystal == 1 {
            resolution.has_crystal = true;
        }
    }

    let Some(category) = category else {
        return resolution;
    };

    let job = data
        .class_jobs()
        .find(|row| row.job_index != 0 && category.contains(row.id))
        .or_else(|| data.class_jobs().find(|row| category.contains(row.id)));

    if let Some(job) = job {
        resolution.class = Effective::same(job.id);
        if !resolution.has_crystal && job.parent != 0 {
            resolution.class.effective = job.parent;
        }
    }

    resolution
}
