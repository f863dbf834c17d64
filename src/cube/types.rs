//! Cube simulator state, snapshot, and static rate/price tables.

use crate::item::{CubeKind, EquipSnapshot, ItemGrade, GRADE_COUNT};
use crate::pool::option_bracket;
use serde::{Deserialize, Serialize};

/// Promotion chance and pity guarantee for one grade-up step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeUpInfo {
    pub chance: f64,
    pub guarantee: u32,
}

/// Grade-up table for one cube kind, computed on demand so miracle time
/// never mutates stored state. Index i is the step from grade i to i+1.
pub fn grade_up_table(kind: CubeKind, miracle_time: bool) -> [GradeUpInfo; 3] {
    let base: [(f64, u32); 3] = match kind {
        // 레어 -> 에픽, 에픽 -> 유니크, 유니크 -> 레전드리
        CubeKind::Potential => [(0.15, 10), (0.035, 42), (0.014, 107)],
        CubeKind::AdditionalPotential => [(0.02381, 62), (0.009804, 152), (0.007, 214)],
    };
    let factor = if miracle_time { 2.0 } else { 1.0 };
    base.map(|(chance, guarantee)| GradeUpInfo {
        chance: chance * factor,
        guarantee,
    })
}

/// Item-level brackets the cube price tables are published for.
const CUBE_COST_BRACKETS: &[u32] = &[159, 199, 249, 300];

/// Meso price per roll, indexed by cost bracket then grade.
const POTENTIAL_CUBE_COST: [[u64; GRADE_COUNT]; 4] = [
    [4_000_000, 16_000_000, 34_000_000, 40_000_000],
    [4_250_000, 17_000_000, 36_125_000, 42_500_000],
    [4_500_000, 18_000_000, 38_250_000, 45_000_000],
    [5_000_000, 20_000_000, 42_500_000, 50_000_000],
];

const ADDITIONAL_CUBE_COST: [[u64; GRADE_COUNT]; 4] = [
    [9_750_000, 27_300_000, 66_300_000, 78_000_000],
    [10_375_000, 29_050_000, 70_550_000, 83_000_000],
    [11_000_000, 30_800_000, 74_800_000, 88_000_000],
    [12_250_000, 34_300_000, 83_300_000, 98_000_000],
];

/// Meso price of one cube roll on an item of the given level and grade.
pub fn cube_cost(kind: CubeKind, item_level: u32, grade: ItemGrade) -> u64 {
    let bracket_index = CUBE_COST_BRACKETS
        .iter()
        .position(|&bracket| item_level <= bracket)
        .unwrap_or(CUBE_COST_BRACKETS.len() - 1);
    match kind {
        CubeKind::Potential => POTENTIAL_CUBE_COST[bracket_index][grade.index()],
        CubeKind::AdditionalPotential => ADDITIONAL_CUBE_COST[bracket_index][grade.index()],
    }
}

/// Mutable state of one cube simulation session.
///
/// Owned exclusively by the host session; mutated only through the step
/// functions in [`crate::cube::logic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeState {
    pub cube_kind: CubeKind,
    pub item_type: String,
    pub item_level: u32,
    /// Option-pool bracket derived from `item_level`.
    pub bracket: u32,
    pub current_grade: ItemGrade,
    pub prev_grade: ItemGrade,
    /// Failed promotion attempts per grade; the terminal grade's slot is a
    /// plain attempt tally.
    pub failed_attempts: [u32; GRADE_COUNT],
    pub current_attempt: u32,
    pub current_guarantee: u32,
    pub prev_options: [String; 3],
    pub current_options: [String; 3],
    pub miracle_time: bool,
    pub accumulated_cost: u64,
}

impl CubeState {
    /// Seeds a session from the snapshot half matching `cube_kind`.
    pub fn new(item: &EquipSnapshot, cube_kind: CubeKind) -> Self {
        let (grade, options) = match cube_kind {
            CubeKind::Potential => (item.potential_grade, item.potential_options.clone()),
            CubeKind::AdditionalPotential => {
                (item.additional_grade, item.additional_options.clone())
            }
        };
        let table = grade_up_table(cube_kind, false);
        let current_guarantee = table
            .get(grade.index())
            .map(|info| info.guarantee)
            .unwrap_or(0);

        Self {
            cube_kind,
            item_type: item.item_type.clone(),
            item_level: item.item_level,
            bracket: option_bracket(item.item_level),
            current_grade: grade,
            prev_grade: grade,
            failed_attempts: [0; GRADE_COUNT],
            current_attempt: 0,
            current_guarantee,
            prev_options: options.clone(),
            current_options: options,
            miracle_time: false,
            accumulated_cost: 0,
        }
    }
}

/// Read-only projection of a [`CubeState`] for the host's display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub prev_grade: ItemGrade,
    pub current_grade: ItemGrade,
    pub prev_options: [String; 3],
    pub current_options: [String; 3],
    pub failed_attempts: [u32; GRADE_COUNT],
    pub current_attempt: u32,
    pub current_guarantee: u32,
    pub accumulated_cost: u64,
}
