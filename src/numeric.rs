//! Numeric helpers for the game's fixed-point formulas.
//!
//! The game computes almost everything with integer truncation. These
//! helpers keep that behavior in one place so every phase floors,
//! truncates and rounds the same way.

/// Fractional part at or above which [`floor_eps`] rounds up instead.
pub const FLOOR_EPSILON_THRESHOLD: f64 = 0.999_999_95;

/// Floor a value, treating a fractional part of at least
/// [`FLOOR_EPSILON_THRESHOLD`] as representation error and rounding up.
///
/// Products such as `300 * 1.1` land a hair below the integer the game
/// computes with exact fixed-point math; a plain `floor` would lose a
/// whole point there.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::numeric::floor_eps;
///
/// assert_eq!(floor_eps(2.5), 2.0);
/// assert_eq!(floor_eps(2.999_999_99), 3.0);
/// assert_eq!(floor_eps(300.0 * 1.1), 330.0);
/// assert_eq!(floor_eps(-0.5), -1.0);
/// ```
pub fn floor_eps(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= FLOOR_EPSILON_THRESHOLD {
        floor + 1.0
    } else {
        floor
    }
}

/// Truncate toward zero, for values that may be negative.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::numeric::truncate;
///
/// assert_eq!(truncate(2.7), 2.0);
/// assert_eq!(truncate(-2.7), -2.0);
/// ```
pub fn truncate(value: f64) -> f64 {
    value.trunc()
}

/// Apply a per-mille factor to a value, rounding half away from zero.
///
/// This is how slot percentages turn an item level's stat value into a
/// per-item cap.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::numeric::per_mille_round;
///
/// assert_eq!(per_mille_round(300, 1000), 300);
/// assert_eq!(per_mille_round(25, 500), 13); // 12.5 rounds away from zero
/// assert_eq!(per_mille_round(24, 500), 12);
/// ```
pub fn per_mille_round(value: u32, per_mille: u32) -> i32 {
    let scaled = u64::from(value) * u64::from(per_mille);
    ((scaled + 500) / 1000) as i32
}

/// The game's tier function: `floor(coefficient * extra / level_modifier)`.
///
/// Returns 0 when the level modifier is not positive.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::numeric::tier_points;
///
/// // 200 coefficient, 1900 level modifier, 100 points above base.
/// assert_eq!(tier_points(200, 100, 1900), 10);
/// assert_eq!(tier_points(200, -100, 1900), -11);
/// ```
pub fn tier_points(coefficient: i32, extra: i32, level_modifier: i32) -> i64 {
    if level_modifier <= 0 {
        return 0;
    }
    (i64::from(coefficient) * i64::from(extra)).div_euclid(i64::from(level_modifier))
}

/// Distances from `extra` to the start of its current tier and to the
/// start of the next tier, as `(previous, next)`.
///
/// Computed with exact integer arithmetic so that `extra + previous` and
/// `extra + next` are always the first point of a tier.
pub fn tier_bounds(coefficient: i32, level_modifier: i32, extra: i32) -> Option<(i32, i32)> {
    if coefficient <= 0 || level_modifier <= 0 {
        return None;
    }

    let coefficient = i64::from(coefficient);
    let level_modifier = i64::from(level_modifier);
    let extra = i64::from(extra);

    let tiers = (extra * coefficient).div_euclid(level_modifier);
    let previous = ceil_div(tiers * level_modifier, coefficient) - extra;
    let next = ceil_div((tiers + 1) * level_modifier, coefficient) - extra;

    Some((previous as i32, next as i32))
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -((-numerator).div_euclid(denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_eps_counters_representation_error() {
        // 0.1 * 3 == 0.30000000000000004, 0.7 * 100 == 70.00000000000001
        assert_eq!(floor_eps(0.7 * 100.0), 70.0);
        assert_eq!(floor_eps(1.15 * 100.0), 115.0);
        assert_eq!(floor_eps(4.35 * 100.0), 435.0);
        assert_eq!(floor_eps(12.999_999_9), 12.0);
        assert_eq!(floor_eps(12.999_999_96), 13.0);
    }

    #[test]
    fn test_truncate_is_toward_zero() {
        assert_eq!(truncate(0.999), 0.0);
        assert_eq!(truncate(-0.999), 0.0);
        assert_eq!(truncate(-12.5), -12.0);
    }

    #[test]
    fn test_per_mille_round_half_away() {
        assert_eq!(per_mille_round(0, 700), 0);
        assert_eq!(per_mille_round(1000, 0), 0);
        assert_eq!(per_mille_round(3, 500), 2); // 1.5
        assert_eq!(per_mille_round(331, 1000), 331);
        assert_eq!(per_mille_round(331, 700), 232); // 231.7
    }

    #[test]
    fn test_tier_points_floor() {
        assert_eq!(tier_points(200, 0, 1900), 0);
        assert_eq!(tier_points(200, 9, 1900), 0);
        assert_eq!(tier_points(200, 10, 1900), 1);
        assert_eq!(tier_points(200, 10, 0), 0);
    }

    #[test]
    fn test_tier_bounds_land_on_breakpoints() {
        let (previous, next) = tier_bounds(200, 1900, 100).unwrap();
        assert_eq!((previous, next), (-5, 5));

        // Both bounds are the first point of their tier.
        assert_eq!(tier_points(200, 100 + previous, 1900), 10);
        assert_eq!(tier_points(200, 100 + previous - 1, 1900), 9);
        assert_eq!(tier_points(200, 100 + next, 1900), 11);
        assert_eq!(tier_points(200, 100 + next - 1, 1900), 10);
    }

    #[test]
    fn test_tier_bounds_at_breakpoint() {
        let (previous, next) = tier_bounds(200, 1900, 95).unwrap();
        assert_eq!(previous, 0);
        assert_eq!(next, 10);
    }

    #[test]
    fn test_tier_bounds_sign_over_range() {
        for extra in -50..400 {
            let (previous, next) = tier_bounds(140, 2780, extra).unwrap();
            assert!(previous <= 0, "extra {extra}: previous {previous}");
            assert!(next > 0, "extra {extra}: next {next}");
        }
    }

    #[test]
    fn test_tier_bounds_rejects_bad_inputs() {
        assert_eq!(tier_bounds(0, 1900, 10), None);
        assert_eq!(tier_bounds(200, 0, 10), None);
    }
}
