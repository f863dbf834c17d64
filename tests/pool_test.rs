//! Option pool registry tests: mass bounds, lookup, exclusion math.

use starcube::item::{CubeKind, ItemGrade};
use starcube::pool::{adjust_options, entries, option_bracket, option_pool, OptionEntry};

const KINDS: [CubeKind; 2] = [CubeKind::Potential, CubeKind::AdditionalPotential];

// =========================================================================
// Registry-wide distribution sanity
// =========================================================================

#[test]
fn test_every_line_is_a_sub_distribution() {
    for kind in KINDS {
        for entry in entries(kind) {
            for line in [entry.pools.first, entry.pools.second, entry.pools.third] {
                let mass: f64 = line.iter().map(|(_, p)| p).sum();
                assert!(
                    mass <= 1.0 + 1e-6,
                    "{:?} {} {:?} line mass {mass} exceeds 1",
                    kind,
                    entry.item_type,
                    entry.grade
                );
            }
        }
    }
}

#[test]
fn test_every_entry_has_positive_probability() {
    for kind in KINDS {
        for entry in entries(kind) {
            for line in [entry.pools.first, entry.pools.second, entry.pools.third] {
                for (name, probability) in line {
                    assert!(!name.is_empty());
                    assert!(*probability > 0.0, "{name} has non-positive probability");
                }
            }
        }
    }
}

#[test]
fn test_registry_covers_all_grades_for_weapons() {
    for kind in KINDS {
        for grade in [
            ItemGrade::Rare,
            ItemGrade::Epic,
            ItemGrade::Unique,
            ItemGrade::Legendary,
        ] {
            let pools = option_pool(kind, "무기", grade, 120);
            assert!(
                !pools.first.is_empty(),
                "{kind:?} 무기 {grade:?} is not registered"
            );
        }
    }
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn test_option_bracket_collapse() {
    assert_eq!(option_bracket(1), 120);
    assert_eq!(option_bracket(120), 120);
    // Levels past the highest tabulated bracket reuse it.
    assert_eq!(option_bracket(250), 120);
}

#[test]
fn test_unknown_lookup_falls_back_to_empty() {
    let pools = option_pool(CubeKind::Potential, "반지", ItemGrade::Legendary, 120);
    assert!(pools.first.is_empty());
    assert!(pools.second.is_empty());
    assert!(pools.third.is_empty());

    let pools = option_pool(CubeKind::AdditionalPotential, "상의", ItemGrade::Unique, 120);
    assert!(pools.first.is_empty());
}

// =========================================================================
// Exclusion reweighting
// =========================================================================

#[test]
fn test_adjust_options_removes_and_rescales() {
    let line: &[OptionEntry] = &[("유지 A", 0.2), ("제외 B", 0.3), ("유지 C", 0.1)];
    let adjusted = adjust_options(line, "제외");
    assert_eq!(adjusted.len(), 2);
    // Remaining mass 0.3 is rescaled by 1 / (1 - 0.3).
    assert!((adjusted[0].1 - 0.2 / 0.7).abs() < 1e-12);
    assert!((adjusted[1].1 - 0.1 / 0.7).abs() < 1e-12);
}

#[test]
fn test_adjust_options_preserves_relative_weights() {
    let pools = option_pool(CubeKind::Potential, "상의", ItemGrade::Legendary, 120);
    let marker = "피격 후 무적시간";
    let adjusted = adjust_options(pools.third, marker);
    assert!(adjusted.len() < pools.third.len());
    assert!(adjusted.iter().all(|(name, _)| !name.contains(marker)));

    let kept_before: f64 = pools
        .third
        .iter()
        .filter(|(name, _)| !name.contains(marker))
        .map(|(_, p)| p)
        .sum();
    let kept_after: f64 = adjusted.iter().map(|(_, p)| p).sum();
    let excluded: f64 = pools
        .third
        .iter()
        .filter(|(name, _)| name.contains(marker))
        .map(|(_, p)| p)
        .sum();
    assert!((kept_after - kept_before / (1.0 - excluded)).abs() < 1e-9);
}

#[test]
fn test_adjust_options_without_match_is_identity() {
    let pools = option_pool(CubeKind::Potential, "무기", ItemGrade::Rare, 120);
    let adjusted = adjust_options(pools.first, "존재하지 않는 옵션");
    assert_eq!(adjusted, pools.first.to_vec());
}
