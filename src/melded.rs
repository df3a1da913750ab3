//! Equipped item inputs.
//!
//! A [`MeldedItem`] is one equipped item as read from a gear snapshot: its
//! item id, quality, and the materia melded into its five slots. These are
//! plain values; the engine never changes them.

use serde::{Deserialize, Serialize};

/// Number of materia slots on every item record.
pub const MELD_SLOTS: usize = 5;

/// Materia melded into one slot. An id of zero means the slot is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeldedMateria {
    pub id: u16,
    pub grade: u8,
}

impl MeldedMateria {
    pub const EMPTY: MeldedMateria = MeldedMateria { id: 0, grade: 0 };

    pub const fn new(id: u16, grade: u8) -> Self {
        Self { id, grade }
    }

    pub const fn is_empty(&self) -> bool {
        self.id == 0
    }
}

/// An equipped item with its melds.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::{MeldedItem, MeldedMateria};
///
/// let item = MeldedItem::new(35000, true)
///     .with_meld(0, MeldedMateria::new(18, 11))
///     .with_meld(1, MeldedMateria::new(20, 11));
///
/// assert_eq!(item.melded().count(), 2);
/// assert!(item.melds[4].is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeldedItem {
    pub id: u32,
    pub high_quality: bool,
    pub melds: [MeldedMateria; MELD_SLOTS],
}

impl MeldedItem {
    /// An item with every materia slot empty.
    pub const fn new(id: u32, high_quality: bool) -> Self {
        Self {
            id,
            high_quality,
            melds: [MeldedMateria::EMPTY; MELD_SLOTS],
        }
    }

    /// Return a copy with `slot` set to `materia`. Out of range slots are
    /// ignored.
    pub fn with_meld(mut self, slot: usize, materia: MeldedMateria) -> Self {
        if let Some(entry) = self.melds.get_mut(slot) {
            *entry = materia;
        }
        self
    }

    /// The non-empty meld slots.
    pub fn melded(&self) -> impl Iterator<Item = &MeldedMateria> {
        self.melds.iter().filter(|meld| !meld.is_empty())
    }
}
