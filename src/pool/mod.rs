//! Option pool registry: static weighted distributions for cube rerolls.
//!
//! Every (cube kind, item type, grade, level bracket) combination maps to
//! three independent option lines. Probabilities within a line need not
//! sum to 1; the residual mass is the "no effect" outcome and is handled
//! by the sampler, never normalized here. Unknown combinations fall back
//! to three empty lines so a simulator keeps running for item categories
//! that are not tabulated yet.

mod additional;
mod potential;

use crate::item::{CubeKind, ItemGrade};

/// One option label with its draw probability.
pub type OptionEntry = (&'static str, f64);

/// The three weighted lines of one option pool.
#[derive(Debug, Clone, Copy)]
pub struct LinePools {
    pub first: &'static [OptionEntry],
    pub second: &'static [OptionEntry],
    pub third: &'static [OptionEntry],
}

/// Defined fallback for combinations the registry does not know.
pub const EMPTY_POOLS: LinePools = LinePools {
    first: &[],
    second: &[],
    third: &[],
};

/// One registered pool, keyed by item type, grade, and level bracket.
#[derive(Debug, Clone, Copy)]
pub struct PoolEntry {
    pub item_type: &'static str,
    pub grade: ItemGrade,
    pub bracket: u32,
    pub pools: LinePools,
}

/// Item-level brackets the pools are tabulated for.
const OPTION_BRACKETS: &[u32] = &[120];

/// Collapses a raw item level onto the nearest tabulated pool bracket.
pub fn option_bracket(item_level: u32) -> u32 {
    OPTION_BRACKETS
        .iter()
        .copied()
        .find(|&bracket| item_level <= bracket)
        .unwrap_or(OPTION_BRACKETS[OPTION_BRACKETS.len() - 1])
}

/// All registered pools for a cube kind, for lookup and validation.
pub fn entries(kind: CubeKind) -> &'static [PoolEntry] {
    match kind {
        CubeKind::Potential => potential::POOLS,
        CubeKind::AdditionalPotential => additional::POOLS,
    }
}

/// Looks up the three-line pool for an item. Unknown combinations return
/// [`EMPTY_POOLS`] rather than an error.
pub fn option_pool(kind: CubeKind, item_type: &str, grade: ItemGrade, bracket: u32) -> LinePools {
    entries(kind)
        .iter()
        .find(|entry| {
            entry.item_type == item_type && entry.grade == grade && entry.bracket == bracket
        })
        .map(|entry| entry.pools)
        .unwrap_or(EMPTY_POOLS)
}

/// Removes every entry whose label contains `marker` and rescales the
/// remaining probabilities by `1 / (1 - excluded_mass)` so the line stays
/// a valid (sub-)distribution. Enforces the cross-line exclusion rules.
pub fn adjust_options(line: &[OptionEntry], marker: &str) -> Vec<OptionEntry> {
    let excluded_mass: f64 = line
        .iter()
        .filter(|(name, _)| name.contains(marker))
        .map(|(_, probability)| probability)
        .sum();

    line.iter()
        .filter(|(name, _)| !name.contains(marker))
        .map(|&(name, probability)| (name, probability / (1.0 - excluded_mass)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_bracket_collapses_to_tabulated() {
        assert_eq!(option_bracket(100), 120);
        assert_eq!(option_bracket(120), 120);
        assert_eq!(option_bracket(200), 120);
    }

    #[test]
    fn test_unknown_combination_is_empty() {
        let pools = option_pool(CubeKind::Potential, "망토", ItemGrade::Rare, 120);
        assert!(pools.first.is_empty());
        assert!(pools.second.is_empty());
        assert!(pools.third.is_empty());
    }

    #[test]
    fn test_weapon_rare_pool_present() {
        let pools = option_pool(CubeKind::Potential, "무기", ItemGrade::Rare, 120);
        assert!(!pools.first.is_empty());
        assert!(!pools.second.is_empty());
        assert!(!pools.third.is_empty());
    }

    #[test]
    fn test_adjust_options_rescales() {
        let line: &[OptionEntry] = &[("A", 0.25), ("B marker", 0.25), ("C", 0.5)];
        let adjusted = adjust_options(line, "marker");
        assert_eq!(adjusted.len(), 2);
        let total: f64 = adjusted.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((adjusted[0].1 - 0.25 / 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_options_no_match_is_identity() {
        let line: &[OptionEntry] = &[("A", 0.3), ("B", 0.3)];
        let adjusted = adjust_options(line, "zzz");
        assert_eq!(adjusted, line.to_vec());
    }
}
