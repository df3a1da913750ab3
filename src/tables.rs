//! Static game tables.
//!
//! Constants the game data files do not carry: the level base values,
//! per-stat tier coefficients, attack scalar curves, per-job reference
//! potencies and trait multipliers, and the job haste variants shown
//! alongside the global cooldown.

use crate::stat_id::StatId;
use serde::{Deserialize, Serialize};

/// Number of gear slots averaged into the displayed item level.
///
/// Includes the off-hand and both rings.
pub const ITEM_LEVEL_SLOTS: u32 = 12;

/// Fixed base value of gathering points, independent of level.
pub const BASE_GP: i32 = 400;

/// Fixed base value of crafting points, independent of level.
pub const BASE_CP: i32 = 180;

/// Width of the candidate window searched around the current speed value
/// when looking for GCD breakpoints.
pub const GCD_SEARCH_RANGE: i32 = 100;

/// Base values of main and sub attributes for a character level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAtLevel {
    pub main: i32,
    pub sub: i32,
}

const fn at(main: i32, sub: i32) -> StatAtLevel {
    StatAtLevel { main, sub }
}

/// Indexed by character level.
const LEVEL_STATS: [StatAtLevel; 101] = [
    at(0, 0),
    at(20, 56),
    at(21, 57),
    at(22, 60),
    at(24, 62),
    at(26, 65),
    at(27, 68),
    at(29, 70),
    at(31, 73),
    at(33, 76),
    at(35, 78),
    at(36, 82),
    at(38, 85),
    at(41, 89),
    at(44, 93),
    at(46, 96),
    at(49, 100),
    at(52, 104),
    at(54, 109),
    at(57, 113),
    at(60, 116),
    at(63, 122),
    at(67, 127),
    at(71, 133),
    at(74, 138),
    at(78, 144),
    at(81, 150),
    at(85, 155),
    at(89, 162),
    at(92, 168),
    at(97, 173),
    at(101, 181),
    at(106, 188),
    at(110, 194),
    at(115, 202),
    at(119, 209),
    at(124, 215),
    at(128, 223),
    at(134, 229),
    at(139, 236),
    at(144, 244),
    at(150, 253),
    at(155, 263),
    at(161, 272),
    at(166, 283),
    at(171, 292),
    at(177, 302),
    at(183, 311),
    at(189, 322),
    at(196, 331),
    at(202, 341),
    at(204, 342),
    at(205, 344),
    at(207, 345),
    at(209, 346),
    at(210, 347),
    at(212, 349),
    at(214, 350),
    at(215, 351),
    at(217, 352),
    at(218, 354),
    at(224, 355),
    at(228, 356),
    at(236, 357),
    at(244, 358),
    at(252, 359),
    at(260, 360),
    at(268, 361),
    at(276, 362),
    at(284, 363),
    at(292, 364),
    at(296, 365),
    at(300, 366),
    at(305, 367),
    at(310, 368),
    at(315, 370),
    at(320, 372),
    at(325, 374),
    at(330, 376),
    at(335, 378),
    at(340, 380),
    at(345, 382),
    at(350, 384),
    at(355, 386),
    at(360, 388),
    at(365, 390),
    at(370, 392),
    at(375, 394),
    at(380, 396),
    at(385, 398),
    at(390, 400),
    at(395, 402),
    at(400, 404),
    at(405, 406),
    at(410, 408),
    at(415, 410),
    at(420, 412),
    at(425, 414),
    at(430, 416),
    at(435, 418),
    at(440, 420),
];

/// Base main/sub values for a level, if the level is in the table.
pub fn stats_at_level(level: u8) -> Option<StatAtLevel> {
    LEVEL_STATS.get(usize::from(level)).copied()
}

/// The level-derived base value of a stat.
///
/// Gathering and crafting points are fixed; main and sub attributes come
/// from the level table; everything else starts at zero.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::tables::base_stat_at_level;
/// use gearset_calc::StatId;
///
/// assert_eq!(base_stat_at_level(StatId::STR, 90), 390);
/// assert_eq!(base_stat_at_level(StatId::CRT, 90), 400);
/// assert_eq!(base_stat_at_level(StatId::GP, 1), 400);
/// assert_eq!(base_stat_at_level(StatId::DEF, 90), 0);
/// ```
pub fn base_stat_at_level(stat: StatId, level: u8) -> i32 {
    if stat == StatId::GP {
        return BASE_GP;
    }
    if stat == StatId::CP {
        return BASE_CP;
    }

    match stats_at_level(level) {
        Some(stats) if stat.is_main() => stats.main,
        Some(stats) if stat.is_sub() => stats.sub,
        _ => 0,
    }
}

/// Tier coefficient of a stat, for stats with a derived percentage.
pub fn coefficient(stat: StatId) -> Option<i32> {
    let value = match stat {
        StatId::CRT => 200,
        StatId::DET => 140,
        StatId::DH => 550,
        StatId::SKS => 130,
        StatId::SPS => 130,
        StatId::TEN => 100,
        StatId::PIE => 150,
        StatId::DEF => 15,
        StatId::MDF => 15,
        _ => return None,
    };
    Some(value)
}

/// Class and job ids, matching the class/job table row ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameClass {
    Adventurer = 0,
    Gladiator = 1,
    Pugilist = 2,
    Marauder = 3,
    Lancer = 4,
    Archer = 5,
    Conjurer = 6,
    Thaumaturge = 7,
    Carpenter = 8,
    Blacksmith = 9,
    Armorer = 10,
    Goldsmith = 11,
    Leatherworker = 12,
    Weaver = 13,
    Alchemist = 14,
    Culinarian = 15,
    Miner = 16,
    Botanist = 17,
    Fisher = 18,
    Paladin = 19,
    Monk = 20,
    Warrior = 21,
    Dragoon = 22,
    Bard = 23,
    WhiteMage = 24,
    BlackMage = 25,
    Arcanist = 26,
    Summoner = 27,
    Scholar = 28,
    Rogue = 29,
    Ninja = 30,
    Machinist = 31,
    DarkKnight = 32,
    Astrologian = 33,
    Samurai = 34,
    RedMage = 35,
    BlueMage = 36,
    Gunbreaker = 37,
    Dancer = 38,
    Reaper = 39,
    Sage = 40,
    Viper = 41,
    Pictomancer = 42,
}

impl GameClass {
    const ALL: [GameClass; 43] = [
        GameClass::Adventurer,
        GameClass::Gladiator,
        GameClass::Pugilist,
        GameClass::Marauder,
        GameClass::Lancer,
        GameClass::Archer,
        GameClass::Conjurer,
        GameClass::Thaumaturge,
        GameClass::Carpenter,
        GameClass::Blacksmith,
        GameClass::Armorer,
        GameClass::Goldsmith,
        GameClass::Leatherworker,
        GameClass::Weaver,
        GameClass::Alchemist,
        GameClass::Culinarian,
        GameClass::Miner,
        GameClass::Botanist,
        GameClass::Fisher,
        GameClass::Paladin,
        GameClass::Monk,
        GameClass::Warrior,
        GameClass::Dragoon,
        GameClass::Bard,
        GameClass::WhiteMage,
        GameClass::BlackMage,
        GameClass::Arcanist,
        GameClass::Summoner,
        GameClass::Scholar,
        GameClass::Rogue,
        GameClass::Ninja,
        GameClass::Machinist,
        GameClass::DarkKnight,
        GameClass::Astrologian,
        GameClass::Samurai,
        GameClass::RedMage,
        GameClass::BlueMage,
        GameClass::Gunbreaker,
        GameClass::Dancer,
        GameClass::Reaper,
        GameClass::Sage,
        GameClass::Viper,
        GameClass::Pictomancer,
    ];

    /// Look up a class by its row id.
    pub fn from_id(id: u32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Reference potencies used to fill the damage table for a job.
///
/// Jobs without a curated list get every 50 potency from 100 to 1000.
pub fn example_potencies(class: Option<GameClass>) -> Vec<u32> {
    use GameClass::*;

    let list: &[u32] = match class {
        Some(Gladiator | Paladin) => &[100, 200, 270, 300, 330, 400, 650, 700, 820, 920],
        Some(Marauder | Warrior) => &[100, 200, 300, 330, 440, 520, 660, 700],
        Some(DarkKnight) => &[100, 170, 240, 260, 300, 340, 460, 500, 600],
        Some(Gunbreaker) => &[100, 200, 250, 300, 380, 460, 540, 720, 1200],
        Some(Conjurer | WhiteMage) => &[50, 100, 140, 190, 220, 260, 400, 290, 310, 1240],
        Some(Scholar) => &[20, 40, 70, 100, 150, 165, 180, 220, 240, 295],
        Some(Astrologian) => &[40, 50, 100, 120, 130, 150, 160, 190, 250, 310],
        Some(Sage) => &[40, 60, 100, 160, 300, 320, 330, 400, 490, 600],
        Some(Pugilist | Monk) => &[100, 180, 300, 340, 450, 550, 600, 700, 850, 1150],
        Some(Lancer | Dragoon) => &[100, 150, 200, 260, 280, 300, 360, 400, 480, 620],
        Some(Rogue | Ninja) => &[100, 150, 200, 350, 400, 450, 500, 560, 600, 650, 1300],
        Some(Samurai) => &[100, 200, 250, 280, 300, 380, 500, 560, 640, 860],
        Some(Reaper) => &[100, 200, 240, 300, 400, 460, 500, 600, 1000, 1100],
        Some(Archer | Bard) => &[100, 150, 180, 200, 220, 240, 280, 320, 500, 600],
        Some(Machinist) => &[100, 150, 200, 240, 320, 390, 480, 600, 680, 780],
        Some(Dancer) => &[100, 200, 300, 350, 480, 540, 600, 720, 900, 1200],
        Some(Thaumaturge | BlackMage) => &[100, 140, 180, 220, 280, 310, 340, 500, 600, 880],
        Some(Arcanist | Summoner) => &[100, 150, 200, 240, 300, 400, 500, 600, 750, 1300],
        Some(RedMage) => &[100, 150, 210, 260, 320, 380, 500, 600, 680, 750],
        _ => return (100..=1000).step_by(50).collect(),
    };

    list.to_vec()
}

/// Job trait damage multiplier at a level.
///
/// `is_magical` selects the generic caster trait for jobs without a
/// dedicated entry.
pub fn trait_multiplier(class: Option<GameClass>, level: u8, is_magical: bool) -> f64 {
    use GameClass::*;

    match class {
        Some(Archer | Bard | Machinist) => match level {
            40.. => 1.2,
            20.. => 1.1,
            _ => 1.0,
        },
        Some(Dancer) => match level {
            60.. => 1.2,
            50.. => 1.1,
            _ => 1.0,
        },
        Some(BlueMage) => match level {
            50.. => 1.5,
            40.. => 1.4,
            30.. => 1.3,
            20.. => 1.2,
            10.. => 1.1,
            _ => 1.0,
        },
        _ if is_magical => match level {
            40.. => 1.3,
            20.. => 1.1,
            _ => 1.0,
        },
        _ => 1.0,
    }
}

/// Main attribute scalar for tanks, piecewise-linear in level.
pub fn tank_attack_scalar(level: u8) -> f64 {
    let level = f64::from(level);
    if level <= 80.0 {
        return level + 35.0;
    }
    (level - 80.0) * 4.1 + 115.0
}

/// Main attribute scalar for every non-tank job, piecewise-linear in level.
pub fn attack_scalar(level: u8) -> f64 {
    let level = f64::from(level);
    if level <= 50.0 {
        75.0
    } else if level <= 70.0 {
        (level - 50.0) * 2.5 + 75.0
    } else if level <= 80.0 {
        (level - 70.0) * 4.0 + 125.0
    } else {
        (level - 80.0) * 3.0 + 165.0
    }
}

/// A named haste effect that shortens the GCD for a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasteVariant {
    pub key: &'static str,
    pub label: &'static str,
    /// Percentage reduction fed to the GCD formula.
    pub modifier: i32,
}

/// Haste variants available to a job at a level.
pub fn haste_variants(class: Option<GameClass>, level: u8) -> Vec<HasteVariant> {
    use GameClass::*;

    let mut variants = Vec::new();
    match class {
        Some(BlackMage) if level >= 52 => variants.push(HasteVariant {
            key: "calc.gcd-ll",
            label: "Global Cooldown (Ley Lines)",
            modifier: 15,
        }),
        Some(Pugilist | Monk) => {
            let monk = class == Some(Monk);
            let modifier = if monk && level >= 76 {
                20
            } else if monk && level >= 40 {
                15
            } else if level >= 20 {
                10
            } else {
                5
            };
            variants.push(HasteVariant {
                key: "calc.gcd-gl",
                label: "Global Cooldown (GL)",
                modifier,
            });
        }
        Some(Ninja) if level >= 45 => variants.push(HasteVariant {
            key: "calc.gcd-hu",
            label: "Global Cooldown (Huton)",
            modifier: 15,
        }),
        Some(Viper) if level >= 65 => variants.push(HasteVariant {
            key: "calc.gcd-ssc",
            label: "Global Cooldown (Swiftscaled)",
            modifier: 15,
        }),
        Some(Pictomancer) if level >= 82 => variants.push(HasteVariant {
            key: "calc.gcd-hyp",
            label: "Global Cooldown (Hyperphantasia)",
            modifier: 25,
        }),
        _ => {}
    }
    variants
}
