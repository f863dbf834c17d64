use crate::starforce::tables::{
    base_probability, power_upgrade, starforce_cost, stat_upgrade, StarforceProbability,
};
use crate::starforce::types::{
    DiscountInfo, StarforceOutcome, StarforceSnapshot, StarforceState,
};
use rand::Rng;

/// Stars where destroy-protection can be bought (17 to 18 and up cannot
/// be shielded).
const DESTROY_PROTECTION_STARS: std::ops::RangeInclusive<u32> = 15..=17;

/// Effective outcome rates at the current star, with every active
/// modifier folded in.
///
/// Applied in a fixed order: starcatch first (success grows, fail and
/// destroy shrink proportionally), then shining starforce (half the
/// remaining destroy mass becomes fail), then destroy-protection (all
/// remaining destroy mass becomes fail while the star is shieldable).
pub fn current_probability(state: &StarforceState) -> StarforceProbability {
    let mut prob = base_probability(state.star);

    if state.success_rate_increase > 0.0 {
        let gain = state.success_rate_increase.min(1.0 - prob.success);
        let removable = prob.fail + prob.destroy;
        if removable > 0.0 {
            let scale = (removable - gain) / removable;
            prob.fail *= scale;
            prob.destroy *= scale;
        }
        prob.success += gain;
    }

    if state.shining_starforce {
        let halved = prob.destroy * 0.5;
        prob.fail += prob.destroy - halved;
        prob.destroy = halved;
    }

    if state.destroy_protection && DESTROY_PROTECTION_STARS.contains(&state.star) {
        prob.fail += prob.destroy;
        prob.destroy = 0.0;
    }

    prob
}

/// Product of (1 - rate) across the active discounts.
pub fn discount_ratio(state: &StarforceState) -> f64 {
    (1.0 - state.discounts.sunday_discount)
        * (1.0 - state.discounts.pc_discount)
        * (1.0 - state.discounts.mvp_discount)
}

/// Discounted meso cost of the next attempt.
pub fn next_cost(state: &StarforceState) -> f64 {
    starforce_cost(state.star, state.item_level) * discount_ratio(state)
}

/// Runs one enhancement attempt, charging the discounted cost and
/// mutating the state in place.
///
/// Returns `None` without charging anything when the item already sits
/// at its level cap, otherwise the outcome that was rolled.
pub fn simulate<R: Rng>(state: &mut StarforceState, rng: &mut R) -> Option<StarforceOutcome> {
    if state.star >= state.max_star {
        return None;
    }

    state.accumulated_cost += next_cost(state);
    state.attempts += 1;

    let prob = current_probability(state);
    let roll = rng.gen::<f64>();
    let outcome = if roll < prob.success {
        StarforceOutcome::Success
    } else if roll < prob.success + prob.fail {
        StarforceOutcome::Fail
    } else {
        StarforceOutcome::Destroy
    };

    match outcome {
        StarforceOutcome::Success => {
            let reached_from = state.star;
            state.star += 1;
            state.bonus_stat += stat_upgrade(state.item_level, reached_from);
            state.bonus_power += power_upgrade(state.slot, state.item_level, reached_from);
        }
        StarforceOutcome::Fail => {}
        StarforceOutcome::Destroy => {
            state.star = 0;
            state.destroy_count += 1;
            state.bonus_stat = 0;
            state.bonus_power = 0;
        }
    }

    state.last_result = Some(outcome);
    Some(outcome)
}

/// Adds an absolute success-rate bonus, e.g. 0.05 for starcatch. Pass
/// 0.0 to turn it back off.
pub fn apply_success_rate_increase(state: &mut StarforceState, increase: f64) {
    state.success_rate_increase = increase;
}

pub fn set_destroy_protection(state: &mut StarforceState, enabled: bool) {
    state.destroy_protection = enabled;
}

pub fn set_shining_starforce(state: &mut StarforceState, enabled: bool) {
    state.shining_starforce = enabled;
}

pub fn apply_cost_discount(state: &mut StarforceState, discounts: DiscountInfo) {
    state.discounts = discounts;
}

/// Manually pins the item to a star, starting a fresh session. Rejected
/// when the star exceeds the item's level cap.
pub fn set_starforce(state: &mut StarforceState, star: u32) -> bool {
    if star > state.max_star {
        return false;
    }
    state.star = star;
    state.attempts = 0;
    state.accumulated_cost = 0.0;
    state.destroy_count = 0;
    state.bonus_stat = 0;
    state.bonus_power = 0;
    state.last_result = None;
    true
}

pub fn reset_attempts(state: &mut StarforceState) {
    state.attempts = 0;
}

pub fn reset_accumulated_cost(state: &mut StarforceState) {
    state.accumulated_cost = 0.0;
}

pub fn reset_destroy_count(state: &mut StarforceState) {
    state.destroy_count = 0;
}

/// Read-only view of the session for display and record keeping.
pub fn snapshot(state: &StarforceState) -> StarforceSnapshot {
    StarforceSnapshot {
        starforce: state.star,
        max_starforce: state.max_star,
        cost: next_cost(state),
        probability: current_probability(state),
        accumulated_cost: state.accumulated_cost,
        attempts: state.attempts,
        destroy_count: state.destroy_count,
        discount_ratio: discount_ratio(state),
        last_result: state.last_result,
        bonus_stat: state.bonus_stat,
        bonus_power: state.bonus_power,
    }
}
