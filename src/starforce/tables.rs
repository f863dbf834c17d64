//! Static starforce rate, cost, and upgrade tables.

use crate::item::SlotClass;
use serde::{Deserialize, Serialize};

/// Success/fail/destroy partition for one upgrade attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarforceProbability {
    pub success: f64,
    pub fail: f64,
    pub destroy: f64,
}

/// Published per-star outcome rates. Destroy is possible from star 15 up.
const STARFORCE_PROBABILITIES: [(f64, f64, f64); 30] = [
    (0.95, 0.05, 0.0),
    (0.9, 0.1, 0.0),
    (0.85, 0.15, 0.0),
    (0.85, 0.15, 0.0),
    (0.8, 0.2, 0.0),
    (0.75, 0.25, 0.0),
    (0.7, 0.3, 0.0),
    (0.65, 0.35, 0.0),
    (0.6, 0.4, 0.0),
    (0.55, 0.45, 0.0),
    (0.5, 0.5, 0.0),
    (0.45, 0.55, 0.0),
    (0.4, 0.6, 0.0),
    (0.35, 0.65, 0.0),
    (0.3, 0.7, 0.0),
    (0.3, 0.679, 0.021),
    (0.3, 0.679, 0.021),
    (0.15, 0.782, 0.068),
    (0.15, 0.782, 0.068),
    (0.15, 0.765, 0.085),
    (0.3, 0.595, 0.105),
    (0.15, 0.7225, 0.1275),
    (0.15, 0.68, 0.17),
    (0.1, 0.72, 0.18),
    (0.1, 0.72, 0.18),
    (0.1, 0.72, 0.18),
    (0.07, 0.744, 0.186),
    (0.05, 0.76, 0.19),
    (0.03, 0.776, 0.194),
    (0.01, 0.792, 0.198),
];

/// Base outcome rates at a star. Past the tabulated range (an item already
/// at the absolute cap) nothing can succeed.
pub fn base_probability(star: u32) -> StarforceProbability {
    STARFORCE_PROBABILITIES
        .get(star as usize)
        .map(|&(success, fail, destroy)| StarforceProbability {
            success,
            fail,
            destroy,
        })
        .unwrap_or(StarforceProbability {
            success: 0.0,
            fail: 1.0,
            destroy: 0.0,
        })
}

/// Absolute star cap.
pub const MAX_STARFORCE: u32 = 30;

/// Maximum star by base item level. Fixed step function, not configurable.
pub fn max_starforce(base_item_level: u32) -> u32 {
    if base_item_level <= 94 {
        5
    } else if base_item_level <= 107 {
        8
    } else if base_item_level <= 117 {
        10
    } else if base_item_level <= 127 {
        15
    } else if base_item_level <= 137 {
        20
    } else {
        MAX_STARFORCE
    }
}

fn cost_divisor(star: u32) -> f64 {
    match star {
        0..=8 => 36.0,
        10 => 571.0,
        11 => 314.0,
        12 => 214.0,
        13 => 157.0,
        14 => 107.0,
        15 | 16 => 200.0,
        17 => 150.0,
        18 => 70.0,
        19 => 45.0,
        21 => 125.0,
        // Star 9, 20, and everything unlisted.
        _ => 200.0,
    }
}

/// Undiscounted meso cost of one attempt at `star` on an item of
/// `item_level`.
pub fn starforce_cost(star: u32, item_level: u32) -> f64 {
    let base_cost = 1000.0;
    let level_cubed = (item_level as f64).powi(3);
    let multiplier = if star < 9 {
        (star + 1) as f64
    } else {
        ((star + 1) as f64).powf(2.7)
    };
    base_cost + level_cubed * multiplier / cost_divisor(star)
}

/// Collapses a raw item level onto the upgrade-table bracket.
pub fn upgrade_bracket(item_level: u32) -> u32 {
    if item_level <= 139 {
        130
    } else if item_level <= 149 {
        140
    } else if item_level <= 159 {
        150
    } else if item_level <= 199 {
        160
    } else if item_level <= 249 {
        200
    } else {
        250
    }
}

/// Stat gain when upgrading from `star` to `star + 1`. Out-of-range stars
/// gain nothing.
pub fn stat_upgrade(item_level: u32, star: u32) -> u32 {
    stat_table(upgrade_bracket(item_level))
        .get(star as usize)
        .copied()
        .unwrap_or(0)
}

/// Attack/magic power gain when upgrading from `star` to `star + 1`.
pub fn power_upgrade(slot: SlotClass, item_level: u32, star: u32) -> u32 {
    power_table(slot, upgrade_bracket(item_level))
        .get(star as usize)
        .copied()
        .unwrap_or(0)
}

fn stat_table(bracket: u32) -> &'static [u32] {
    match bracket {
        130 => &[2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 7, 7, 7, 7, 7],
        140 => &[
            2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
            0, 0,
        ],
        150 => &[
            2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 11, 11, 11, 11, 11, 11, 11, 0, 0, 0, 0,
            0, 0, 0, 0,
        ],
        160 => &[
            2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 13, 13, 13, 13, 13, 13, 13, 0, 0, 0, 0,
            0, 0, 0, 0,
        ],
        200 => &[
            2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0,
            0, 0, 0, 0,
        ],
        250 => &[
            2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 17, 17, 17, 17, 17, 17, 17, 0, 0, 0, 0,
            0, 0, 0, 0,
        ],
        _ => &[],
    }
}

fn power_table(slot: SlotClass, bracket: u32) -> &'static [u32] {
    match slot {
        SlotClass::Glove => match bracket {
            130 => &[0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 7, 8, 9, 10, 11],
            140 => &[
                0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 8, 9, 10, 11, 12, 13, 15, 17, 19,
                21, 22, 23, 24, 25, 26,
            ],
            150 => &[
                0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 9, 10, 11, 12, 13, 14, 16, 18, 20,
                22, 23, 24, 25, 26, 27,
            ],
            160 => &[
                0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 10, 11, 12, 13, 14, 15, 17, 19, 21,
                23, 24, 25, 26, 27, 28,
            ],
            200 => &[
                0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 12, 13, 14, 15, 16, 17, 19, 21, 23,
                25, 26, 27, 28, 29, 30,
            ],
            250 => &[
                0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 14, 15, 16, 17, 18, 19, 21, 23, 25,
                27, 28, 29, 30, 31, 32,
            ],
            _ => &[],
        },
        SlotClass::Weapon => match bracket {
            130 => &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6, 7, 7, 8, 9],
            140 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 8, 8, 9, 10, 11, 12, 30, 31, 32,
            ],
            150 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 9, 9, 10, 11, 12, 13, 31, 32, 33,
            ],
            160 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 10, 11, 12, 13, 14, 32, 33, 34,
            ],
            200 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 13, 13, 14, 14, 15, 16, 17, 34, 35,
                36, 37, 38, 39, 40, 41,
            ],
            250 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                0, 0, 0,
            ],
            _ => &[],
        },
        SlotClass::Other => match bracket {
            130 => &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 8, 9, 10, 11],
            140 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 9, 10, 11, 12, 13, 15, 17, 19,
                21, 22, 23, 24, 25, 26,
            ],
            150 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 10, 11, 12, 13, 14, 16, 18, 20,
                22, 23, 24, 25, 26, 27,
            ],
            160 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 11, 12, 13, 14, 15, 17, 19, 21,
                23, 24, 25, 26, 27, 28,
            ],
            200 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 12, 13, 14, 15, 16, 17, 19, 21, 23,
                25, 26, 27, 28, 29, 30,
            ],
            250 => &[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 15, 16, 17, 18, 19, 21, 23, 25,
                27, 28, 29, 30, 31, 32,
            ],
            _ => &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities_partition_unity() {
        for star in 0..30 {
            let p = base_probability(star);
            assert!(
                (p.success + p.fail + p.destroy - 1.0).abs() < 1e-9,
                "star {star} does not partition to 1"
            );
        }
    }

    #[test]
    fn test_no_destroy_below_fifteen() {
        for star in 0..15 {
            assert_eq!(base_probability(star).destroy, 0.0);
        }
        assert!(base_probability(15).destroy > 0.0);
    }

    #[test]
    fn test_max_starforce_brackets() {
        assert_eq!(max_starforce(94), 5);
        assert_eq!(max_starforce(95), 8);
        assert_eq!(max_starforce(110), 10);
        assert_eq!(max_starforce(120), 15);
        assert_eq!(max_starforce(130), 20);
        assert_eq!(max_starforce(150), 30);
    }

    #[test]
    fn test_cost_formula_low_star() {
        // Below star 9 the multiplier is linear.
        let cost = starforce_cost(0, 120);
        let expected = 1000.0 + (120.0_f64.powi(3) * 1.0) / 36.0;
        assert!((cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cost_formula_high_star() {
        let cost = starforce_cost(17, 160);
        let expected = 1000.0 + (160.0_f64.powi(3) * 18.0_f64.powf(2.7)) / 150.0;
        assert!((cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_unlisted_divisor_defaults() {
        // Star 9 has no published divisor: the default 200 applies.
        let cost = starforce_cost(9, 150);
        let expected = 1000.0 + (150.0_f64.powi(3) * 10.0_f64.powf(2.7)) / 200.0;
        assert!((cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_upgrade_gains() {
        // Reaching star 16 on a 160-bracket weapon: +13 stat, +9 power.
        assert_eq!(stat_upgrade(160, 15), 13);
        assert_eq!(power_upgrade(SlotClass::Weapon, 160, 15), 9);
        // Gloves gain a visible +1 attack at star 5.
        assert_eq!(power_upgrade(SlotClass::Glove, 130, 4), 1);
        // Out-of-range star is a zero gain, not an error.
        assert_eq!(stat_upgrade(130, 25), 0);
    }
}
