//! Cube simulator tests: grade promotion, pity guarantees, option
//! exclusion rules, cost accounting, snapshot roundtrip.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use starcube::cube::{
    reset_accumulated_cost, roll_cube, set_current_attempt, set_miracle_time, set_prev_options,
    snapshot, CubeState, DECENT_SKILL_MARKER, INVINCIBILITY_MARKER,
};
use starcube::item::{CubeKind, EquipSnapshot, ItemGrade};

/// Plays back a fixed sequence of `gen::<f64>()` values, repeating the
/// last one once exhausted.
struct SeqRng {
    values: Vec<f64>,
    index: usize,
}

impl SeqRng {
    fn new(values: &[f64]) -> Self {
        SeqRng {
            values: values.to_vec(),
            index: 0,
        }
    }
}

impl RngCore for SeqRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = if self.index < self.values.len() {
            let v = self.values[self.index];
            self.index += 1;
            v
        } else {
            self.values.last().copied().unwrap_or(0.0)
        };
        // Inverse of the standard f64 sampling (53-bit fraction).
        ((value * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn equip(item_type: &str, grade: ItemGrade) -> EquipSnapshot {
    EquipSnapshot {
        item_type: item_type.to_string(),
        item_level: 150,
        starforce: 0,
        potential_grade: grade,
        additional_grade: grade,
        potential_options: Default::default(),
        additional_options: Default::default(),
    }
}

// =========================================================================
// Grade promotion and pity
// =========================================================================

#[test]
fn test_fail_increments_pity() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    let mut rng = SeqRng::new(&[0.9, 0.0]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Rare);
    assert_eq!(state.failed_attempts[0], 1);
    assert_eq!(state.current_attempt, 1);
    assert_eq!(state.current_guarantee, 10);
}

#[test]
fn test_natural_promotion_resets_vacated_counter() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    set_current_attempt(&mut state, 4);
    let mut rng = SeqRng::new(&[0.01, 0.0]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Epic);
    assert_eq!(state.failed_attempts[0], 0);
    // The pity display now tracks the epic -> unique step.
    assert_eq!(state.current_attempt, 0);
    assert_eq!(state.current_guarantee, 42);
}

#[test]
fn test_guarantee_promotion_at_pity_threshold() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    set_current_attempt(&mut state, 10);
    // The promotion roll itself misses; the guarantee fires anyway.
    let mut rng = SeqRng::new(&[0.9, 0.0]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Epic);
    assert_eq!(state.failed_attempts[0], 0);
}

#[test]
fn test_terminal_grade_tallies_attempts() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Legendary), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    roll_cube(&mut state, &mut rng);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Legendary);
    assert_eq!(state.failed_attempts[3], 2);
    assert_eq!(state.current_attempt, 2);
    assert_eq!(state.current_guarantee, 0);
}

#[test]
fn test_miracle_time_doubles_promotion_chance() {
    // 0.2 misses the base 15% but lands inside the doubled 30%.
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    let mut rng = SeqRng::new(&[0.2, 0.0]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Rare);

    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    set_miracle_time(&mut state, true);
    let mut rng = SeqRng::new(&[0.2, 0.0]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Epic);
}

#[test]
fn test_prev_options_refresh_after_promotion() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    let mut rng = SeqRng::new(&[0.01, 0.0, 0.0, 0.0, 0.9]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_grade, ItemGrade::Epic);
    let promoted_options = state.current_options.clone();
    // During the promoting roll the displayed baseline is still the old
    // pre-promotion triple.
    assert_ne!(state.prev_options, promoted_options);

    roll_cube(&mut state, &mut rng);
    // The next roll adopts the post-promotion triple as its baseline.
    assert_eq!(state.prev_options, promoted_options);
}

// =========================================================================
// Cost accounting
// =========================================================================

#[test]
fn test_cost_charged_at_pre_roll_grade() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    // First roll promotes to epic but is priced as a rare roll.
    let mut rng = SeqRng::new(&[0.01, 0.0, 0.0, 0.0, 0.9]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.accumulated_cost, 4_000_000);

    roll_cube(&mut state, &mut rng);
    assert_eq!(state.accumulated_cost, 4_000_000 + 16_000_000);

    reset_accumulated_cost(&mut state);
    assert_eq!(state.accumulated_cost, 0);
}

#[test]
fn test_additional_cube_prices() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::AdditionalPotential);
    let mut rng = SeqRng::new(&[0.9, 0.0]);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.accumulated_cost, 9_750_000);
}

// =========================================================================
// Option assignment
// =========================================================================

#[test]
fn test_reroll_differs_from_previous() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Legendary), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..50 {
        roll_cube(&mut state, &mut rng);
        let drawn = state.current_options.clone();
        assert_ne!(drawn, state.prev_options);
        set_prev_options(&mut state, drawn);
    }
}

#[test]
fn test_invincibility_exclusive_across_lines() {
    let mut state = CubeState::new(&equip("상의", ItemGrade::Legendary), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..1000 {
        roll_cube(&mut state, &mut rng);
        let hits = state
            .current_options
            .iter()
            .filter(|option| option.contains(INVINCIBILITY_MARKER))
            .count();
        assert!(hits <= 1, "invincibility drawn on {hits} lines");
        let drawn = state.current_options.clone();
        set_prev_options(&mut state, drawn);
    }
}

#[test]
fn test_decent_skill_exclusive_across_lines() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Legendary), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..1000 {
        roll_cube(&mut state, &mut rng);
        let hits = state
            .current_options
            .iter()
            .filter(|option| option.contains(DECENT_SKILL_MARKER))
            .count();
        assert!(hits <= 1, "decent skill drawn on {hits} lines");
        let drawn = state.current_options.clone();
        set_prev_options(&mut state, drawn);
    }
}

#[test]
fn test_third_line_exclusives() {
    let mut state = CubeState::new(&equip("상의", ItemGrade::Legendary), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..1000 {
        roll_cube(&mut state, &mut rng);
        for marker in ["확률로 데미지의", "초간 무적"] {
            let early = state.current_options[0].contains(marker)
                || state.current_options[1].contains(marker);
            if early {
                assert!(
                    !state.current_options[2].contains(marker),
                    "{marker} repeated on the third line"
                );
            }
        }
        let drawn = state.current_options.clone();
        set_prev_options(&mut state, drawn);
    }
}

#[test]
fn test_unknown_item_type_rolls_empty_options() {
    let mut state = CubeState::new(&equip("망토", ItemGrade::Rare), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    roll_cube(&mut state, &mut rng);
    assert_eq!(state.current_options, ["", "", ""]);
    // Cost is still charged; the session keeps running.
    assert_eq!(state.accumulated_cost, 4_000_000);
}

// =========================================================================
// Snapshot and persistence
// =========================================================================

#[test]
fn test_snapshot_reflects_session() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    let mut rng = SeqRng::new(&[0.9, 0.0]);
    roll_cube(&mut state, &mut rng);
    let view = snapshot(&state);
    assert_eq!(view.current_grade, ItemGrade::Rare);
    assert_eq!(view.current_attempt, 1);
    assert_eq!(view.current_guarantee, 10);
    assert_eq!(view.accumulated_cost, 4_000_000);
    assert_eq!(view.current_options, state.current_options);
}

#[test]
fn test_state_serde_round_trip() {
    let mut state = CubeState::new(&equip("무기", ItemGrade::Rare), CubeKind::Potential);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    roll_cube(&mut state, &mut rng);

    let json = serde_json::to_string(&state).unwrap();
    let restored: CubeState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}
