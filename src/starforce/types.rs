use crate::item::{EquipSnapshot, SlotClass};
use crate::starforce::tables::{max_starforce, StarforceProbability};
use serde::{Deserialize, Serialize};

/// Outcome of a single enhancement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarforceOutcome {
    Success,
    Fail,
    Destroy,
}

/// Meso discounts active for the session. Each field is a fractional rate
/// (0.3 means 30% off); they stack multiplicatively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountInfo {
    pub sunday_discount: f64,
    pub pc_discount: f64,
    pub mvp_discount: f64,
}

/// Running state of one starforce session on a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarforceState {
    pub item_level: u32,
    pub slot: SlotClass,
    pub star: u32,
    /// Cap imposed by the item's base level.
    pub max_star: u32,
    pub accumulated_cost: f64,
    pub attempts: u32,
    pub destroy_count: u32,
    /// Absolute success-rate add, e.g. 0.05 for starcatch.
    pub success_rate_increase: f64,
    pub destroy_protection: bool,
    pub shining_starforce: bool,
    pub discounts: DiscountInfo,
    pub last_result: Option<StarforceOutcome>,
    /// Stat and attack gains earned this session. Wiped on destruction.
    pub bonus_stat: u32,
    pub bonus_power: u32,
}

impl StarforceState {
    pub fn new(item: &EquipSnapshot) -> Self {
        let max_star = max_starforce(item.item_level);
        StarforceState {
            item_level: item.item_level,
            slot: SlotClass::from_item_type(&item.item_type),
            star: item.starforce.min(max_star),
            max_star,
            accumulated_cost: 0.0,
            attempts: 0,
            destroy_count: 0,
            success_rate_increase: 0.0,
            destroy_protection: false,
            shining_starforce: false,
            discounts: DiscountInfo::default(),
            last_result: None,
            bonus_stat: 0,
            bonus_power: 0,
        }
    }
}

/// Read-only view handed to callers after each step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarforceSnapshot {
    pub starforce: u32,
    pub max_starforce: u32,
    /// Discounted cost of the next attempt.
    pub cost: f64,
    pub probability: StarforceProbability,
    pub accumulated_cost: f64,
    pub attempts: u32,
    pub destroy_count: u32,
    /// Product of (1 - rate) across active discounts.
    pub discount_ratio: f64,
    pub last_result: Option<StarforceOutcome>,
    pub bonus_stat: u32,
    pub bonus_power: u32,
}

/// One finished run from a starting star to a target star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarforceRecord {
    pub initial_starforce: u32,
    pub target_starforce: u32,
    pub attempts: u32,
    pub destroy_count: u32,
    pub accumulated_cost: f64,
}

impl StarforceRecord {
    /// Captures the session counters once `target` has been reached.
    pub fn of_session(state: &StarforceState, initial: u32, target: u32) -> Self {
        StarforceRecord {
            initial_starforce: initial,
            target_starforce: target,
            attempts: state.attempts,
            destroy_count: state.destroy_count,
            accumulated_cost: state.accumulated_cost,
        }
    }
}
