//! Consumable relevance ranking.

use crate::attribute::StatMap;
use crate::consumable::Food;
use crate::stat_id::StatId;
use std::cmp::Reverse;
use std::sync::Arc;

/// Filters applied before ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankFilter {
    pub min_item_level: u32,
    pub hq_only: bool,
}

/// Number of tracked stats a consumable affects. Vitality never counts.
pub fn match_count(food: &Food, attributes: &StatMap) -> usize {
    food.stats
        .keys()
        .filter(|&&stat| stat != StatId::VIT && attributes.contains_key(&stat))
        .count()
}

/// Rank the consumables that affect at least one tracked stat.
///
/// Sorted best first by item level, match count, food id, quality and
/// finally item id, so no two distinct entries tie.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::ranking::{rank, RankFilter};
/// use gearset_calc::StatMap;
///
/// let ranked = rank(&[], &StatMap::new(), RankFilter::default());
/// assert!(ranked.is_empty());
/// ```
pub fn rank(list: &[Arc<Food>], attributes: &StatMap, filter: RankFilter) -> Vec<Arc<Food>> {
    let mut relevant: Vec<(usize, &Arc<Food>)> = list
        .iter()
        .filter(|food| food.item_level >= filter.min_item_level)
        .filter(|food| food.hq || !filter.hq_only)
        .map(|food| (match_count(food, attributes), food))
        .filter(|&(matches, _)| matches > 0)
        .collect();

    relevant.sort_by_key(|&(matches, food)| {
        Reverse((food.item_level, matches, food.food_id, food.hq, food.item_id))
    });

    relevant
        .into_iter()
        .map(|(_, food)| Arc::clone(food))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::StatAttribute;
    use crate::consumable::FoodStat;

    fn food(item_id: u32, food_id: u32, item_level: u32, hq: bool, stats: &[StatId]) -> Arc<Food> {
        Arc::new(Food {
            item_id,
            food_id,
            item_level,
            hq,
            stats: stats
                .iter()
                .map(|&stat| {
                    (
                        stat,
                        FoodStat {
                            stat,
                            line: String::new(),
                            is_relative: true,
                            percent: 10,
                            cap: 100,
                        },
                    )
                })
                .collect(),
        })
    }

    fn tracked(stats: &[StatId]) -> StatMap {
        stats
            .iter()
            .map(|&stat| (stat, StatAttribute::new(stat)))
            .collect()
    }

    #[test]
    fn test_vitality_not_counted() {
        let attributes = tracked(&[StatId::VIT, StatId::CRT]);
        let only_vit = food(1, 1, 10, true, &[StatId::VIT]);
        let both = food(2, 2, 10, true, &[StatId::VIT, StatId::CRT]);

        assert_eq!(match_count(&only_vit, &attributes), 0);
        assert_eq!(match_count(&both, &attributes), 1);

        let ranked = rank(&[only_vit, both.clone()], &attributes, RankFilter::default());
        assert_eq!(ranked, vec![both]);
    }

    #[test]
    fn test_sort_order() {
        let attributes = tracked(&[StatId::CRT, StatId::DET, StatId::SKS]);
        let list = vec![
            food(1, 10, 600, false, &[StatId::CRT]),
            food(2, 11, 610, false, &[StatId::CRT]),
            food(3, 12, 600, true, &[StatId::CRT, StatId::DET]),
            food(4, 10, 600, true, &[StatId::CRT]),
            food(5, 13, 600, false, &[StatId::CRT]),
        ];

        let ranked: Vec<u32> = rank(&list, &attributes, RankFilter::default())
            .iter()
            .map(|food| food.item_id)
            .collect();
        assert_eq!(ranked, vec![2, 3, 5, 4, 1]);
    }

    #[test]
    fn test_filters() {
        let attributes = tracked(&[StatId::CRT]);
        let list = vec![
            food(1, 1, 500, true, &[StatId::CRT]),
            food(2, 2, 640, false, &[StatId::CRT]),
            food(3, 3, 640, true, &[StatId::CRT]),
        ];

        let filter = RankFilter {
            min_item_level: 600,
            hq_only: true,
        };
        let ranked = rank(&list, &attributes, filter);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item_id, 3);
    }
}
