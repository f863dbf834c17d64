//! Item snapshot input shared by both simulators.
//!
//! The host (character fetcher, UI, CLI, ...) hands each simulator an
//! already-validated [`EquipSnapshot`]; the simulators never fetch or
//! re-validate item data themselves. Grade and cube-kind labels arriving
//! as strings from the game API are parsed at this seam, and an unknown
//! label is a fatal configuration error rather than a silent default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Potential rarity grade, ordered. Promotion only ever moves one step up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemGrade {
    Rare = 0,
    Epic = 1,
    Unique = 2,
    Legendary = 3,
}

/// Number of grades, i.e. the size of the pity-counter array.
pub const GRADE_COUNT: usize = 4;

impl ItemGrade {
    /// Korean display label, as the game API reports it.
    pub fn label(&self) -> &'static str {
        match self {
            ItemGrade::Rare => "레어",
            ItemGrade::Epic => "에픽",
            ItemGrade::Unique => "유니크",
            ItemGrade::Legendary => "레전드리",
        }
    }

    /// Parses the game API's Korean grade label.
    pub fn from_label(label: &str) -> Result<Self, ParseError> {
        match label {
            "레어" => Ok(ItemGrade::Rare),
            "에픽" => Ok(ItemGrade::Epic),
            "유니크" => Ok(ItemGrade::Unique),
            "레전드리" => Ok(ItemGrade::Legendary),
            _ => Err(ParseError::UnknownGrade(label.to_string())),
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ItemGrade::Rare),
            1 => Some(ItemGrade::Epic),
            2 => Some(ItemGrade::Unique),
            3 => Some(ItemGrade::Legendary),
            _ => None,
        }
    }

    /// The next grade up, or `None` at Legendary.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

/// Which of an item's two option sets a cube rerolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeKind {
    Potential,
    AdditionalPotential,
}

impl FromStr for CubeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "potential" | "POTENTIAL" => Ok(CubeKind::Potential),
            "additional" | "ADDITIONAL POTENTIAL" => Ok(CubeKind::AdditionalPotential),
            _ => Err(ParseError::UnknownCubeKind(s.to_string())),
        }
    }
}

/// Slot class for the starforce upgrade tables. Weapons and gloves have
/// their own attack-power progression; everything else shares one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotClass {
    Weapon,
    Glove,
    Other,
}

impl SlotClass {
    pub fn from_item_type(item_type: &str) -> Self {
        match item_type {
            "무기" => SlotClass::Weapon,
            "장갑" => SlotClass::Glove,
            _ => SlotClass::Other,
        }
    }
}

/// Snapshot of one equipped item as fetched from the game API.
///
/// `item_type` is the raw category string (무기, 상의, ...) keying the
/// option-pool registry and the upgrade tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipSnapshot {
    pub item_type: String,
    pub item_level: u32,
    pub starforce: u32,
    pub potential_grade: ItemGrade,
    pub additional_grade: ItemGrade,
    pub potential_options: [String; 3],
    pub additional_options: [String; 3],
}

/// Error parsing a grade or cube-kind label from the game API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownGrade(String),
    UnknownCubeKind(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownGrade(label) => write!(f, "unknown item grade: {label:?}"),
            ParseError::UnknownCubeKind(kind) => write!(f, "unknown cube kind: {kind:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_order() {
        assert!(ItemGrade::Rare < ItemGrade::Epic);
        assert!(ItemGrade::Unique < ItemGrade::Legendary);
        assert_eq!(ItemGrade::Epic.next(), Some(ItemGrade::Unique));
        assert_eq!(ItemGrade::Legendary.next(), None);
    }

    #[test]
    fn test_grade_label_round_trip() {
        for index in 0..GRADE_COUNT {
            let grade = ItemGrade::from_index(index).unwrap();
            assert_eq!(ItemGrade::from_label(grade.label()), Ok(grade));
        }
    }

    #[test]
    fn test_unknown_grade_rejected() {
        let err = ItemGrade::from_label("노멀").unwrap_err();
        assert_eq!(err, ParseError::UnknownGrade("노멀".to_string()));
    }

    #[test]
    fn test_cube_kind_parsing() {
        assert_eq!("potential".parse(), Ok(CubeKind::Potential));
        assert_eq!("additional".parse(), Ok(CubeKind::AdditionalPotential));
        assert!("occult".parse::<CubeKind>().is_err());
    }

    #[test]
    fn test_slot_class() {
        assert_eq!(SlotClass::from_item_type("무기"), SlotClass::Weapon);
        assert_eq!(SlotClass::from_item_type("장갑"), SlotClass::Glove);
        assert_eq!(SlotClass::from_item_type("상의"), SlotClass::Other);
    }
}
