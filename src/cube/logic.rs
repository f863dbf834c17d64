//! Cube roll step functions.
//!
//! All randomness comes from the injected `rng`; given a fixed random
//! source every step is deterministic.

use super::types::{cube_cost, grade_up_table, CubeSnapshot, CubeState};
use crate::pool::{adjust_options, option_pool, OptionEntry};
use rand::Rng;

/// Defensive effects that cannot co-occur across lines once drawn on an
/// earlier line.
pub const INVINCIBILITY_MARKER: &str = "피격 후 무적시간";
pub const DECENT_SKILL_MARKER: &str = "쓸만한";

/// Effects excluded from the third line when either earlier line drew them.
const THIRD_LINE_EXCLUSIVE_MARKERS: [&str; 2] = ["확률로 데미지의", "초간 무적"];

/// Retry budget for "reroll until different from the previous triple".
/// Zero-entropy pools (e.g. the empty-pool fallback) would otherwise loop
/// forever; on exhaustion the final draw is accepted as-is.
const MAX_OPTION_REROLLS: usize = 64;

/// One cube roll: charge the cube price, attempt a grade promotion, then
/// reroll the three option lines under the (possibly new) grade's pools.
pub fn roll_cube<R: Rng>(state: &mut CubeState, rng: &mut R) {
    // A promotion happened last call: the displayed "before" state must be
    // the post-promotion baseline, not the stale pre-promotion options.
    if state.prev_grade != state.current_grade {
        state.prev_options = state.current_options.clone();
    }
    state.prev_grade = state.current_grade;

    state.accumulated_cost += cube_cost(state.cube_kind, state.item_level, state.current_grade);

    let table = grade_up_table(state.cube_kind, state.miracle_time);
    let index = state.current_grade.index();
    if let Some(next) = state.current_grade.next() {
        let info = table[index];
        let roll: f64 = rng.gen();
        if roll < info.chance || state.failed_attempts[index] >= info.guarantee {
            state.current_grade = next;
            // The vacated grade's pity counter resets on promotion,
            // guaranteed or natural.
            state.failed_attempts[index] = 0;
        } else {
            state.failed_attempts[index] += 1;
        }
    } else {
        // Terminal grade: the counter is a plain attempt tally.
        state.failed_attempts[index] += 1;
    }

    let index = state.current_grade.index();
    state.current_attempt = state.failed_attempts[index];
    state.current_guarantee = table
        .get(index)
        .map(|info| info.guarantee)
        .unwrap_or(0);

    assign_options(state, rng);
}

/// Doubles (or restores) every grade-up chance. Guarantees are unaffected.
pub fn set_miracle_time(state: &mut CubeState, enabled: bool) {
    state.miracle_time = enabled;
}

/// Host-driven acceptance of a triple as the new comparison baseline.
pub fn set_prev_options(state: &mut CubeState, options: [String; 3]) {
    state.prev_options = options;
}

/// Overrides the active grade's pity counter.
pub fn set_current_attempt(state: &mut CubeState, attempt: u32) {
    state.failed_attempts[state.current_grade.index()] = attempt;
    state.current_attempt = attempt;
}

pub fn reset_accumulated_cost(state: &mut CubeState) {
    state.accumulated_cost = 0;
}

/// Read-only projection of the session state.
pub fn snapshot(state: &CubeState) -> CubeSnapshot {
    CubeSnapshot {
        prev_grade: state.prev_grade,
        current_grade: state.current_grade,
        prev_options: state.prev_options.clone(),
        current_options: state.current_options.clone(),
        failed_attempts: state.failed_attempts,
        current_attempt: state.current_attempt,
        current_guarantee: state.current_guarantee,
        accumulated_cost: state.accumulated_cost,
    }
}

/// Rerolls the three lines under the current grade's pools, applying the
/// cross-line exclusion rules, and rejects draws identical to the previous
/// triple (up to the retry budget).
fn assign_options<R: Rng>(state: &mut CubeState, rng: &mut R) {
    let pools = option_pool(
        state.cube_kind,
        &state.item_type,
        state.current_grade,
        state.bracket,
    );

    let mut drawn = [String::new(), String::new(), String::new()];
    for _ in 0..MAX_OPTION_REROLLS {
        let first = sample_line(pools.first, rng);

        let second_pool: Vec<OptionEntry>;
        let mut third_pool: Vec<OptionEntry>;
        if first.contains(INVINCIBILITY_MARKER) {
            second_pool = adjust_options(pools.second, INVINCIBILITY_MARKER);
            third_pool = adjust_options(pools.third, INVINCIBILITY_MARKER);
        } else if first.contains(DECENT_SKILL_MARKER) {
            second_pool = adjust_options(pools.second, DECENT_SKILL_MARKER);
            third_pool = adjust_options(pools.third, DECENT_SKILL_MARKER);
        } else {
            second_pool = pools.second.to_vec();
            third_pool = pools.third.to_vec();
        }

        let second = sample_line(&second_pool, rng);
        if second.contains(INVINCIBILITY_MARKER) {
            third_pool = adjust_options(&third_pool, INVINCIBILITY_MARKER);
        } else if second.contains(DECENT_SKILL_MARKER) {
            third_pool = adjust_options(&third_pool, DECENT_SKILL_MARKER);
        }

        for marker in THIRD_LINE_EXCLUSIVE_MARKERS {
            if first.contains(marker) || second.contains(marker) {
                third_pool = adjust_options(&third_pool, marker);
            }
        }

        let third = sample_line(&third_pool, rng);
        drawn = [first.to_string(), second.to_string(), third.to_string()];
        if drawn != state.prev_options {
            break;
        }
    }

    state.current_options = drawn;
}

/// Weighted draw from one line. The residual probability mass past the
/// listed entries is the "no effect" outcome, reported as an empty label.
fn sample_line<R: Rng>(line: &[OptionEntry], rng: &mut R) -> &'static str {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(name, probability) in line {
        cumulative += probability;
        if roll < cumulative {
            return name;
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sample_line_empty_is_no_effect() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(sample_line(&[], &mut rng), "");
    }

    #[test]
    fn test_sample_line_full_mass_always_hits() {
        let line: &[OptionEntry] = &[("A", 0.5), ("B", 0.5)];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_ne!(sample_line(line, &mut rng), "");
        }
    }
}
