//! Stat identifier module.
//!
//! Provides the `StatId` type, a thin newtype over the numeric stat id
//! used by the game data, along with named constants for the stats the
//! engine has formulas for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of a stat (a row of the stat definition table).
///
/// # Examples
///
/// ```rust
/// use gearset_calc::StatId;
///
/// let crit = StatId::new(27);
/// assert_eq!(crit, StatId::CRT);
/// assert_eq!(crit.abbreviation(), Some("CRT"));
/// assert!(StatId::DET.is_main());
/// assert!(StatId::SKS.is_sub());
/// ```
#[derive(
    Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StatId(u32);

impl StatId {
    pub const STR: StatId = StatId(1);
    pub const DEX: StatId = StatId(2);
    pub const VIT: StatId = StatId(3);
    pub const INT: StatId = StatId(4);
    pub const MND: StatId = StatId(5);
    pub const PIE: StatId = StatId(6);

    pub const HP: StatId = StatId(7);
    pub const MP: StatId = StatId(8);
    pub const TP: StatId = StatId(9);
    pub const GP: StatId = StatId(10);
    pub const CP: StatId = StatId(11);

    pub const PHYS_DMG: StatId = StatId(12);
    pub const MAG_DMG: StatId = StatId(13);

    pub const TEN: StatId = StatId(19);
    pub const DEF: StatId = StatId(21);
    pub const DH: StatId = StatId(22);
    pub const MDF: StatId = StatId(24);
    pub const CRT: StatId = StatId(27);
    pub const DET: StatId = StatId(44);
    pub const SKS: StatId = StatId(45);
    pub const SPS: StatId = StatId(46);

    /// Placeholder attribute some items carry; never summed.
    pub const MAIN_ATTRIBUTE: StatId = StatId(55);
    /// Placeholder attribute some items carry; never summed.
    pub const SECONDARY_ATTRIBUTE: StatId = StatId(56);

    pub const CRAFTSMANSHIP: StatId = StatId(70);
    pub const CONTROL: StatId = StatId(71);
    pub const GATHERING: StatId = StatId(72);
    pub const PERCEPTION: StatId = StatId(73);

    /// Attributes that scale with the level's main value.
    pub const MAIN_STATS: [StatId; 7] = [
        Self::STR,
        Self::DEX,
        Self::VIT,
        Self::INT,
        Self::MND,
        Self::PIE,
        Self::DET,
    ];

    /// Attributes that scale with the level's sub value.
    pub const SUB_STATS: [StatId; 5] = [Self::TEN, Self::DH, Self::CRT, Self::SKS, Self::SPS];

    /// The six attributes affected by tribe offsets and job modifiers.
    pub const PRIMARY: [StatId; 6] = [
        Self::STR,
        Self::DEX,
        Self::VIT,
        Self::INT,
        Self::MND,
        Self::PIE,
    ];

    /// Create a `StatId` from its raw numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this id is the empty (zero) stat.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Whether this stat uses the main column of the level table.
    pub fn is_main(self) -> bool {
        Self::MAIN_STATS.contains(&self)
    }

    /// Whether this stat uses the sub column of the level table.
    pub fn is_sub(self) -> bool {
        Self::SUB_STATS.contains(&self)
    }

    /// Whether this is one of the two placeholder attributes.
    pub fn is_placeholder(self) -> bool {
        self == Self::MAIN_ATTRIBUTE || self == Self::SECONDARY_ATTRIBUTE
    }

    /// Short display name, if the stat has one.
    pub fn abbreviation(self) -> Option<&'static str> {
        let name = match self {
            Self::STR => "STR",
            Self::DEX => "DEX",
            Self::VIT => "VIT",
            Self::INT => "INT",
            Self::MND => "MND",
            Self::PIE => "PIE",
            Self::HP => "HP",
            Self::MP => "MP",
            Self::TP => "TP",
            Self::GP => "GP",
            Self::CP => "CP",
            Self::TEN => "TEN",
            Self::DH => "DH",
            Self::CRT => "CRT",
            Self::DET => "DET",
            Self::SKS => "SKS",
            Self::SPS => "SPS",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u32> for StatId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.abbreviation() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{}", self.0),
        }
    }
}
