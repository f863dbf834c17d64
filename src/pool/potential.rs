//! Potential option pools, tabulated per item type, grade, and bracket.
//!
//! Labels and probabilities mirror the published game data, including the
//! original label spacing (weapon labels use `STR: +12`, armor labels use
//! `STR : +12`).

use super::{LinePools, OptionEntry, PoolEntry};
use crate::item::ItemGrade;

pub(super) const POOLS: &[PoolEntry] = &[
    PoolEntry {
        item_type: "무기",
        grade: ItemGrade::Rare,
        bracket: 120,
        pools: LinePools {
            first: WEAPON_RARE_L1,
            second: WEAPON_RARE_L2,
            third: WEAPON_RARE_L3,
        },
    },
    PoolEntry {
        item_type: "무기",
        grade: ItemGrade::Epic,
        bracket: 120,
        pools: LinePools {
            first: WEAPON_EPIC_L1,
            second: WEAPON_EPIC_L2,
            third: WEAPON_EPIC_L3,
        },
    },
    PoolEntry {
        item_type: "무기",
        grade: ItemGrade::Unique,
        bracket: 120,
        pools: LinePools {
            first: WEAPON_UNIQUE_L1,
            second: WEAPON_UNIQUE_L2,
            third: WEAPON_UNIQUE_L3,
        },
    },
    PoolEntry {
        item_type: "무기",
        grade: ItemGrade::Legendary,
        bracket: 120,
        pools: LinePools {
            first: WEAPON_LEGENDARY_L1,
            second: WEAPON_LEGENDARY_L2,
            third: WEAPON_LEGENDARY_L3,
        },
    },
    PoolEntry {
        item_type: "상의",
        grade: ItemGrade::Rare,
        bracket: 120,
        pools: LinePools {
            first: TOP_RARE_L1,
            second: TOP_RARE_L2,
            third: TOP_RARE_L3,
        },
    },
    PoolEntry {
        item_type: "상의",
        grade: ItemGrade::Epic,
        bracket: 120,
        pools: LinePools {
            first: TOP_EPIC_L1,
            second: TOP_EPIC_L2,
            third: TOP_EPIC_L3,
        },
    },
    PoolEntry {
        item_type: "상의",
        grade: ItemGrade::Unique,
        bracket: 120,
        pools: LinePools {
            first: TOP_UNIQUE_L1,
            second: TOP_UNIQUE_L2,
            third: TOP_UNIQUE_L3,
        },
    },
    PoolEntry {
        item_type: "상의",
        grade: ItemGrade::Legendary,
        bracket: 120,
        pools: LinePools {
            first: TOP_LEGENDARY_L1,
            second: TOP_LEGENDARY_L2,
            third: TOP_LEGENDARY_L3,
        },
    },
];

const WEAPON_RARE_L1: &[OptionEntry] = &[
    ("STR: +12", 0.061224),
    ("DEX: +12", 0.061224),
    ("INT: +12", 0.061224),
    ("LUK: +12", 0.061224),
    ("최대 HP: +120", 0.061224),
    ("최대 MP: +120", 0.061224),
    ("공격력: +12", 0.040816),
    ("마력: +12", 0.040816),
    ("STR: +3%", 0.061224),
    ("DEX: +3%", 0.061224),
    ("INT: +3%", 0.061224),
    ("LUK: +3%", 0.061224),
    ("공격력: +3%", 0.020408),
    ("마력: +3%", 0.020408),
    ("크리티컬 확률: +4%", 0.020408),
    ("데미지: +3%", 0.020408),
    ("올스탯: +5", 0.040816),
    ("공격 시 20% 확률로 240의 HP 회복", 0.020408),
    ("공격 시 20% 확률로 120의 MP 회복", 0.020408),
    ("공격 시 20% 확률로 6레벨 중독효과 적용", 0.020408),
    ("공격 시 10% 확률로 2레벨 기절효과 적용", 0.020408),
    ("공격 시 20% 확률로 2레벨 슬로우효과 적용", 0.020408),
    ("공격 시 20% 확률로 3레벨 암흑효과 적용", 0.020408),
    ("공격 시 10% 확률로 2레벨 빙결효과 적용", 0.020408),
    ("공격 시 10% 확률로 2레벨 봉인효과 적용", 0.020408),
    ("몬스터 방어율 무시: +15%", 0.020408),
];

const WEAPON_RARE_L2: &[OptionEntry] = &[
    ("STR: +6", 0.109091),
    ("DEX: +6", 0.109091),
    ("INT: +6", 0.109091),
    ("LUK: +6", 0.109091),
    ("최대 HP: +60", 0.109091),
    ("최대 MP: +60", 0.109091),
    ("공격력: +6", 0.072727),
    ("마력: +6", 0.072727),
    ("STR: +12", 0.012245),
    ("DEX: +12", 0.012245),
    ("INT: +12", 0.012245),
    ("LUK: +12", 0.012245),
    ("최대 HP: +120", 0.012245),
    ("최대 MP: +120", 0.012245),
    ("공격력: +12", 0.008163),
    ("마력: +12", 0.008163),
    ("STR: +3%", 0.012245),
    ("DEX: +3%", 0.012245),
    ("INT: +3%", 0.012245),
    ("LUK: +3%", 0.012245),
    ("공격력: +3%", 0.004082),
    ("마력: +3%", 0.004082),
    ("크리티컬 확률: +4%", 0.004082),
    ("데미지: +3%", 0.004082),
    ("올스탯: +5", 0.008163),
    ("공격 시 20% 확률로 240의 HP 회복", 0.004082),
    ("공격 시 20% 확률로 120의 MP 회복", 0.004082),
    ("공격 시 20% 확률로 6레벨 중독효과 적용", 0.004082),
    ("공격 시 10% 확률로 2레벨 기절효과 적용", 0.004082),
    ("공격 시 20% 확률로 2레벨 슬로우효과 적용", 0.004082),
    ("공격 시 20% 확률로 3레벨 암흑효과 적용", 0.004082),
    ("공격 시 10% 확률로 2레벨 빙결효과 적용", 0.004082),
    ("공격 시 10% 확률로 2레벨 봉인효과 적용", 0.004082),
    ("몬스터 방어율 무시: +15%", 0.004082),
];

const WEAPON_RARE_L3: &[OptionEntry] = &[
    ("STR: +6", 0.129545),
    ("DEX: +6", 0.129545),
    ("INT: +6", 0.129545),
    ("LUK: +6", 0.129545),
    ("최대 HP: +60", 0.129545),
    ("최대 MP: +60", 0.129545),
    ("공격력: +6", 0.086364),
    ("마력: +6", 0.086364),
    ("STR: +12", 0.003061),
    ("DEX: +12", 0.003061),
    ("INT: +12", 0.003061),
    ("LUK: +12", 0.003061),
    ("최대 HP: +120", 0.003061),
    ("최대 MP: +120", 0.003061),
    ("공격력: +12", 0.002041),
    ("마력: +12", 0.002041),
    ("몬스터 방어율 무시: +15%", 0.00102),
];

const WEAPON_EPIC_L1: &[OptionEntry] = &[
    ("STR: +6%", 0.108696),
    ("DEX: +6%", 0.108696),
    ("INT: +6%", 0.108696),
    ("LUK: +6%", 0.108696),
    ("최대 HP: +6%", 0.108696),
    ("최대 MP: +6%", 0.108696),
    ("공격력: +6%", 0.043478),
    ("마력: +6%", 0.043478),
    ("크리티컬 확률: +8%", 0.043478),
    ("데미지: +6%", 0.043478),
    ("올스탯: +3%", 0.043478),
    ("공격 시 20% 확률로 360의 HP 회복", 0.043478),
    ("공격 시 20% 확률로 180의 MP 회복", 0.043478),
    ("몬스터 방어율 무시: +15%", 0.043478),
];

const WEAPON_EPIC_L2: &[OptionEntry] = &[
    ("STR: +12", 0.04898),
    ("DEX: +12", 0.04898),
    ("INT: +12", 0.04898),
    ("LUK: +12", 0.04898),
    ("최대 HP: +120", 0.04898),
    ("최대 MP: +120", 0.04898),
    ("공격력: +12", 0.032653),
    ("마력: +12", 0.032653),
    ("STR: +3%", 0.04898),
    ("DEX: +3%", 0.04898),
    ("INT: +3%", 0.04898),
    ("LUK: +3%", 0.04898),
    ("공격력: +3%", 0.016327),
    ("마력: +3%", 0.016327),
    ("크리티컬 확률: +4%", 0.016327),
    ("데미지: +3%", 0.016327),
    ("올스탯: +5", 0.032653),
    ("공격 시 20% 확률로 240의 HP 회복", 0.016327),
    ("공격 시 20% 확률로 120의 MP 회복", 0.016327),
    ("공격 시 20% 확률로 6레벨 중독효과 적용", 0.016327),
    ("공격 시 10% 확률로 2레벨 기절효과 적용", 0.016327),
    ("공격 시 20% 확률로 2레벨 슬로우효과 적용", 0.016327),
    ("공격 시 20% 확률로 3레벨 암흑효과 적용", 0.016327),
    ("공격 시 10% 확률로 2레벨 빙결효과 적용", 0.016327),
    ("공격 시 10% 확률로 2레벨 봉인효과 적용", 0.016327),
    ("몬스터 방어율 무시: +15%", 0.016327),
    ("STR: +6%", 0.021739),
    ("DEX: +6%", 0.021739),
    ("INT: +6%", 0.021739),
    ("LUK: +6%", 0.021739),
    ("최대 HP: +6%", 0.021739),
    ("최대 MP: +6%", 0.021739),
    ("공격력: +6%", 0.008696),
    ("마력: +6%", 0.008696),
    ("크리티컬 확률: +8%", 0.008696),
    ("데미지: +6%", 0.008696),
    ("올스탯: +3%", 0.008696),
    ("공격 시 20% 확률로 360의 HP 회복", 0.008696),
    ("공격 시 20% 확률로 180의 MP 회복", 0.008696),
    ("몬스터 방어율 무시: +15%", 0.008696),
];

const WEAPON_EPIC_L3: &[OptionEntry] = &[
    ("STR: +12", 0.058163),
    ("DEX: +12", 0.058163),
    ("INT: +12", 0.058163),
    ("LUK: +12", 0.058163),
    ("최대 HP: +120", 0.058163),
    ("최대 MP: +120", 0.058163),
    ("공격력: +12", 0.038776),
    ("마력: +12", 0.038776),
    ("STR: +3%", 0.058163),
    ("DEX: +3%", 0.058163),
    ("INT: +3%", 0.058163),
    ("LUK: +3%", 0.058163),
    ("공격력: +3%", 0.019388),
    ("마력: +3%", 0.019388),
    ("크리티컬 확률: +4%", 0.019388),
    ("데미지: +3%", 0.019388),
    ("올스탯: +5", 0.038776),
    ("공격 시 20% 확률로 240의 HP 회복", 0.019388),
    ("공격 시 20% 확률로 120의 MP 회복", 0.019388),
    ("공격 시 20% 확률로 6레벨 중독효과 적용", 0.019388),
    ("공격 시 10% 확률로 2레벨 기절효과 적용", 0.019388),
    ("공격 시 20% 확률로 2레벨 슬로우효과 적용", 0.019388),
    ("공격 시 20% 확률로 3레벨 암흑효과 적용", 0.019388),
    ("공격 시 10% 확률로 2레벨 빙결효과 적용", 0.019388),
    ("공격 시 10% 확률로 2레벨 봉인효과 적용", 0.019388),
    ("몬스터 방어율 무시: +15%", 0.019388),
    ("STR: +6%", 0.005435),
    ("DEX: +6%", 0.005435),
    ("INT: +6%", 0.005435),
    ("LUK: +6%", 0.005435),
    ("최대 HP: +6%", 0.005435),
    ("최대 MP: +6%", 0.005435),
    ("공격력: +6%", 0.002174),
    ("마력: +6%", 0.002174),
    ("크리티컬 확률: +8%", 0.002174),
    ("데미지: +6%", 0.002174),
    ("올스탯: +3%", 0.002174),
    ("공격 시 20% 확률로 360의 HP 회복", 0.002174),
    ("공격 시 20% 확률로 180의 MP 회복", 0.002174),
    ("몬스터 방어율 무시: +15%", 0.002174),
];

const WEAPON_UNIQUE_L1: &[OptionEntry] = &[
    ("STR: +9%", 0.116279),
    ("DEX: +9%", 0.116279),
    ("INT: +9%", 0.116279),
    ("LUK: +9%", 0.116279),
    ("공격력: +9%", 0.069767),
    ("마력: +9%", 0.069767),
    ("크리티컬 확률: +9%", 0.093023),
    ("데미지: +9%", 0.069767),
    ("올스탯: +6%", 0.093023),
    ("몬스터 방어율 무시: +30%", 0.069767),
    ("보스 몬스터 공격 시 데미지: +30%", 0.069767),
];

const WEAPON_UNIQUE_L2: &[OptionEntry] = &[
    ("STR: +6%", 0.086957),
    ("DEX: +6%", 0.086957),
    ("INT: +6%", 0.086957),
    ("LUK: +6%", 0.086957),
    ("최대 HP: +6%", 0.086957),
    ("최대 MP: +6%", 0.086957),
    ("공격력: +6%", 0.034783),
    ("마력: +6%", 0.034783),
    ("크리티컬 확률: +8%", 0.034783),
    ("데미지: +6%", 0.034783),
    ("올스탯: +3%", 0.034783),
    ("공격 시 20% 확률로 360의 HP 회복", 0.034783),
    ("공격 시 20% 확률로 180의 MP 회복", 0.034783),
    ("몬스터 방어율 무시: +15%", 0.034783),
    ("STR: +9%", 0.023256),
    ("DEX: +9%", 0.023256),
    ("INT: +9%", 0.023256),
    ("LUK: +9%", 0.023256),
    ("공격력: +9%", 0.013953),
    ("마력: +9%", 0.013953),
    ("크리티컬 확률: +9%", 0.018605),
    ("데미지: +9%", 0.013953),
    ("올스탯: +6%", 0.018605),
    ("몬스터 방어율 무시: +30%", 0.013953),
    ("보스 몬스터 공격 시 데미지: +30%", 0.013953),
];

const WEAPON_UNIQUE_L3: &[OptionEntry] = &[
    ("STR: +6%", 0.103261),
    ("DEX: +6%", 0.103261),
    ("INT: +6%", 0.103261),
    ("LUK: +6%", 0.103261),
    ("최대 HP: +6%", 0.103261),
    ("최대 MP: +6%", 0.103261),
    ("공격력: +6%", 0.041304),
    ("마력: +6%", 0.041304),
    ("크리티컬 확률: +8%", 0.041304),
    ("데미지: +6%", 0.041304),
    ("올스탯: +3%", 0.041304),
    ("공격 시 20% 확률로 360의 HP 회복", 0.041304),
    ("공격 시 20% 확률로 180의 MP 회복", 0.041304),
    ("몬스터 방어율 무시: +15%", 0.041304),
    ("STR: +9%", 0.005814),
    ("DEX: +9%", 0.005814),
    ("INT: +9%", 0.005814),
    ("LUK: +9%", 0.005814),
    ("공격력: +9%", 0.003488),
    ("마력: +9%", 0.003488),
    ("크리티컬 확률: +9%", 0.004651),
    ("데미지: +9%", 0.003488),
    ("올스탯: +6%", 0.004651),
    ("몬스터 방어율 무시: +30%", 0.003488),
    ("보스 몬스터 공격 시 데미지: +30%", 0.003488),
];

const WEAPON_LEGENDARY_L1: &[OptionEntry] = &[
    ("STR: +12%", 0.097561),
    ("DEX: +12%", 0.097561),
    ("INT: +12%", 0.097561),
    ("LUK: +12%", 0.097561),
    ("공격력: +12%", 0.04878),
    ("마력: +12%", 0.04878),
    ("크리티컬 확률: +12%", 0.04878),
    ("데미지: +12%", 0.04878),
    ("올스탯: +9%", 0.073171),
    ("공격력: +32", 0.04878),
    ("마력: +32", 0.04878),
    ("몬스터 방어율 무시: +35%", 0.04878),
    ("몬스터 방어율 무시: +40%", 0.04878),
    ("보스 몬스터 공격 시 데미지: +35%", 0.097561),
    ("보스 몬스터 공격 시 데미지: +40%", 0.04878),
];

const WEAPON_LEGENDARY_L2: &[OptionEntry] = &[
    ("STR: +9%", 0.093023),
    ("DEX: +9%", 0.093023),
    ("INT: +9%", 0.093023),
    ("LUK: +9%", 0.093023),
    ("공격력: +9%", 0.055814),
    ("마력: +9%", 0.055814),
    ("크리티컬 확률: +9%", 0.074419),
    ("데미지: +9%", 0.055814),
    ("올스탯: +6%", 0.074419),
    ("몬스터 방어율 무시: +30%", 0.055814),
    ("보스 몬스터 공격 시 데미지: +30%", 0.055814),
    ("STR: +12%", 0.019512),
    ("DEX: +12%", 0.019512),
    ("INT: +12%", 0.019512),
    ("LUK: +12%", 0.019512),
    ("공격력: +12%", 0.009756),
    ("마력: +12%", 0.009756),
    ("크리티컬 확률: +12%", 0.009756),
    ("데미지: +12%", 0.009756),
    ("올스탯: +9%", 0.014634),
    ("공격력: +32", 0.009756),
    ("마력: +32", 0.009756),
    ("몬스터 방어율 무시: +35%", 0.009756),
    ("몬스터 방어율 무시: +40%", 0.009756),
    ("보스 몬스터 공격 시 데미지: +35%", 0.019512),
    ("보스 몬스터 공격 시 데미지: +40%", 0.009756),
];

const WEAPON_LEGENDARY_L3: &[OptionEntry] = &[
    ("STR: +9%", 0.110465),
    ("DEX: +9%", 0.110465),
    ("INT: +9%", 0.110465),
    ("LUK: +9%", 0.110465),
    ("공격력: +9%", 0.066279),
    ("마력: +9%", 0.066279),
    ("크리티컬 확률: +9%", 0.088372),
    ("데미지: +9%", 0.066279),
    ("올스탯: +6%", 0.088372),
    ("몬스터 방어율 무시: +30%", 0.066279),
    ("보스 몬스터 공격 시 데미지: +30%", 0.066279),
    ("STR: +12%", 0.004878),
    ("DEX: +12%", 0.004878),
    ("INT: +12%", 0.004878),
    ("LUK: +12%", 0.004878),
    ("공격력: +12%", 0.002439),
    ("마력: +12%", 0.002439),
    ("크리티컬 확률: +12%", 0.002439),
    ("데미지: +12%", 0.002439),
    ("올스탯: +9%", 0.003659),
    ("공격력: +32", 0.002439),
    ("마력: +32", 0.002439),
    ("몬스터 방어율 무시: +35%", 0.002439),
    ("몬스터 방어율 무시: +40%", 0.002439),
    ("보스 몬스터 공격 시 데미지: +35%", 0.004878),
    ("보스 몬스터 공격 시 데미지: +40%", 0.002439),
];

const TOP_RARE_L1: &[OptionEntry] = &[
    ("STR : +12", 0.075),
    ("DEX : +12", 0.075),
    ("INT : +12", 0.075),
    ("LUK : +12", 0.075),
    ("최대 HP : +120", 0.075),
    ("최대 MP : +120", 0.075),
    ("방어력 : +120", 0.05),
    ("STR : +3%", 0.075),
    ("DEX : +3%", 0.075),
    ("INT : +3%", 0.075),
    ("LUK : +3%", 0.075),
    ("최대 HP : +3%", 0.05),
    ("최대 MP : +3%", 0.05),
    ("방어력 : +3%", 0.05),
    ("올스탯 : +5", 0.05),
];

const TOP_RARE_L2: &[OptionEntry] = &[
    ("STR : +6", 0.114286),
    ("DEX : +6", 0.114286),
    ("INT : +6", 0.114286),
    ("LUK : +6", 0.114286),
    ("최대 HP : +60", 0.114286),
    ("최대 MP : +60", 0.114286),
    ("방어력 : +60", 0.114286),
    ("STR : +12", 0.015),
    ("DEX : +12", 0.015),
    ("INT : +12", 0.015),
    ("LUK : +12", 0.015),
    ("최대 HP : +120", 0.015),
    ("최대 MP : +120", 0.015),
    ("방어력 : +120", 0.010000001192),
    ("STR : +3%", 0.015),
    ("DEX : +3%", 0.015),
    ("INT : +3%", 0.015),
    ("LUK : +3%", 0.015),
    ("최대 HP : +3%", 0.010000001192),
    ("최대 MP : +3%", 0.010000001192),
    ("방어력 : +3%", 0.010000001192),
    ("올스탯 : +5", 0.010000001192),
];

const TOP_RARE_L3: &[OptionEntry] = &[
    ("STR : +6", 0.135714),
    ("DEX : +6", 0.135714),
    ("INT : +6", 0.135714),
    ("LUK : +6", 0.135714),
    ("최대 HP : +60", 0.135714),
    ("최대 MP : +60", 0.135714),
    ("방어력 : +60", 0.135714),
    ("STR : +12", 0.00375),
    ("DEX : +12", 0.00375),
    ("INT : +12", 0.00375),
    ("LUK : +12", 0.00375),
    ("최대 HP : +120", 0.00375),
    ("최대 MP : +120", 0.00375),
    ("방어력 : +120", 0.0025),
    ("STR : +3%", 0.00375),
    ("DEX : +3%", 0.00375),
    ("INT : +3%", 0.00375),
    ("LUK : +3%", 0.00375),
    ("최대 HP : +3%", 0.0025),
    ("최대 MP : +3%", 0.0025),
    ("방어력 : +3%", 0.0025),
    ("올스탯 : +5", 0.0025),
];

const TOP_EPIC_L1: &[OptionEntry] = &[
    ("STR : +6%", 0.131579),
    ("DEX : +6%", 0.131579),
    ("INT : +6%", 0.131579),
    ("LUK : +6%", 0.131579),
    ("최대 HP : +6%", 0.131579),
    ("최대 MP : +6%", 0.131579),
    ("방어력 : +6%", 0.078947),
    ("올스탯 : +3%", 0.052632),
    ("피격 후 무적시간 : +1초", 0.078947),
];

const TOP_EPIC_L2: &[OptionEntry] = &[
    ("STR : +12", 0.06),
    ("DEX : +12", 0.06),
    ("INT : +12", 0.06),
    ("LUK : +12", 0.06),
    ("최대 HP : +120", 0.06),
    ("최대 MP : +120", 0.06),
    ("방어력 : +120", 0.040000004768),
    ("STR : +3%", 0.06),
    ("DEX : +3%", 0.06),
    ("INT : +3%", 0.06),
    ("LUK : +3%", 0.06),
    ("최대 HP : +3%", 0.040000004768),
    ("최대 MP : +3%", 0.040000004768),
    ("방어력 : +3%", 0.040000004768),
    ("올스탯 : +5", 0.040000004768),
    ("STR : +6%", 0.026316),
    ("DEX : +6%", 0.026316),
    ("INT : +6%", 0.026316),
    ("LUK : +6%", 0.026316),
    ("최대 HP : +6%", 0.026316),
    ("최대 MP : +6%", 0.026316),
    ("방어력 : +6%", 0.015789),
    ("올스탯 : +3%", 0.0105263),
    ("피격 후 무적시간 : +1초", 0.015789),
];

const TOP_EPIC_L3: &[OptionEntry] = &[
    ("STR : +12", 0.07125),
    ("DEX : +12", 0.07125),
    ("INT : +12", 0.07125),
    ("LUK : +12", 0.07125),
    ("최대 HP : +120", 0.07125),
    ("최대 MP : +120", 0.07125),
    ("방어력 : +120", 0.0475),
    ("STR : +3%", 0.07125),
    ("DEX : +3%", 0.07125),
    ("INT : +3%", 0.07125),
    ("LUK : +3%", 0.07125),
    ("최대 HP : +3%", 0.0475),
    ("최대 MP : +3%", 0.0475),
    ("방어력 : +3%", 0.0475),
    ("올스탯 : +5", 0.0475),
    ("STR : +6%", 0.006579),
    ("DEX : +6%", 0.006579),
    ("INT : +6%", 0.006579),
    ("LUK : +6%", 0.006579),
    ("최대 HP : +6%", 0.006579),
    ("최대 MP : +6%", 0.006579),
    ("방어력 : +6%", 0.003947),
    ("올스탯 : +3%", 0.002632),
    ("피격 후 무적시간 : +1초", 0.003947),
];

const TOP_UNIQUE_L1: &[OptionEntry] = &[
    ("STR : +9%", 0.0806452),
    ("DEX : +9%", 0.0806452),
    ("INT : +9%", 0.0806452),
    ("LUK : +9%", 0.0806452),
    ("최대 HP : +9%", 0.096774),
    ("최대 MP : +9%", 0.096774),
    ("올스탯 : +6%", 0.064516),
    ("피격 시 5% 확률로 데미지의 20% 무시", 0.064516),
    ("피격 시 5% 확률로 데미지의 40% 무시", 0.064516),
    ("피격 후 무적시간 : +2초", 0.064516),
    ("피격 시 2% 확률로 7초간 무적", 0.064516),
    ("30% 확률로 받은 피해의 50%를 반사", 0.064516),
    ("30% 확률로 받은 피해의 70%를 반사", 0.032258),
    ("HP 회복 아이템 및 회복 스킬 효율 : +30%", 0.064516),
];

const TOP_UNIQUE_L2: &[OptionEntry] = &[
    ("STR : +6%", 0.105263),
    ("DEX : +6%", 0.105263),
    ("INT : +6%", 0.105263),
    ("LUK : +6%", 0.105263),
    ("최대 HP : +6%", 0.105263),
    ("최대 MP : +6%", 0.105263),
    ("방어력 : +6%", 0.063158),
    ("올스탯 : +3%", 0.042105),
    ("피격 후 무적시간 : +1초", 0.063158),
    ("STR : +9%", 0.016129),
    ("DEX : +9%", 0.016129),
    ("INT : +9%", 0.016129),
    ("LUK : +9%", 0.016129),
    ("최대 HP : +9%", 0.019355),
    ("최대 MP : +9%", 0.019355),
    ("올스탯 : +6%", 0.012903),
    ("피격 시 5% 확률로 데미지의 20% 무시", 0.012903),
    ("피격 시 5% 확률로 데미지의 40% 무시", 0.012903),
    ("피격 후 무적시간 : +2초", 0.012903),
    ("피격 시 2% 확률로 7초간 무적", 0.012903),
    ("30% 확률로 받은 피해의 50%를 반사", 0.012903),
    ("30% 확률로 받은 피해의 70%를 반사", 0.006452),
    ("HP 회복 아이템 및 회복 스킬 효율 : +30%", 0.012903),
];

const TOP_UNIQUE_L3: &[OptionEntry] = &[
    ("STR : +6%", 0.125),
    ("DEX : +6%", 0.125),
    ("INT : +6%", 0.125),
    ("LUK : +6%", 0.125),
    ("최대 HP : +6%", 0.125),
    ("최대 MP : +6%", 0.125),
    ("방어력 : +6%", 0.075),
    ("올스탯 : +3%", 0.05),
    ("피격 후 무적시간 : +1초", 0.075),
    ("STR : +9%", 0.004032),
    ("DEX : +9%", 0.004032),
    ("INT : +9%", 0.004032),
    ("LUK : +9%", 0.004032),
    ("최대 HP : +9%", 0.004839),
    ("최대 MP : +9%", 0.004839),
    ("올스탯 : +6%", 0.003226),
    ("피격 시 5% 확률로 데미지의 20% 무시", 0.003226),
    ("피격 시 5% 확률로 데미지의 40% 무시", 0.003226),
    ("피격 후 무적시간 : +2초", 0.003226),
    ("피격 시 2% 확률로 7초간 무적", 0.003226),
    ("30% 확률로 받은 피해의 50%를 반사", 0.003226),
    ("30% 확률로 받은 피해의 70%를 반사", 0.001613),
    ("HP 회복 아이템 및 회복 스킬 효율 : +30%", 0.003226),
];

const TOP_LEGENDARY_L1: &[OptionEntry] = &[
    ("STR : +12%", 0.102564),
    ("DEX : +12%", 0.102564),
    ("INT : +12%", 0.102564),
    ("LUK : +12%", 0.102564),
    ("최대 HP : +12%", 0.102564),
    ("최대 MP : +12%", 0.102564),
    ("올스탯 : +9%", 0.076923),
    ("피격 시 10% 확률로 데미지의 20% 무시", 0.076923),
    ("피격 시 10% 확률로 데미지의 40% 무시", 0.076923),
    ("피격 후 무적시간 : +3초", 0.076923),
    ("피격 시 4% 확률로 7초간 무적", 0.076923),
];

const TOP_LEGENDARY_L2: &[OptionEntry] = &[
    ("STR : +9%", 0.064516),
    ("DEX : +9%", 0.064516),
    ("INT : +9%", 0.064516),
    ("LUK : +9%", 0.064516),
    ("최대 HP : +9%", 0.077419),
    ("최대 MP : +9%", 0.077419),
    ("올스탯 : +6%", 0.051613),
    ("피격 시 5% 확률로 데미지의 20% 무시", 0.051613),
    ("피격 시 5% 확률로 데미지의 40% 무시", 0.051613),
    ("피격 후 무적시간 : +2초", 0.051613),
    ("피격 시 2% 확률로 7초간 무적", 0.051613),
    ("30% 확률로 받은 피해의 50%를 반사", 0.051613),
    ("30% 확률로 받은 피해의 70%를 반사", 0.025806),
    ("HP 회복 아이템 및 회복 스킬 효율 : +30%", 0.051613),
    ("STR : +12%", 0.0205128),
    ("DEX : +12%", 0.0205128),
    ("INT : +12%", 0.0205128),
    ("LUK : +12%", 0.0205128),
    ("최대 HP : +12%", 0.0205128),
    ("최대 MP : +12%", 0.0205128),
    ("올스탯 : +9%", 0.015385),
    ("피격 시 10% 확률로 데미지의 20% 무시", 0.015385),
    ("피격 시 10% 확률로 데미지의 40% 무시", 0.015385),
    ("피격 후 무적시간 : +3초", 0.015385),
    ("피격 시 4% 확률로 7초간 무적", 0.015385),
];

const TOP_LEGENDARY_L3: &[OptionEntry] = &[
    ("STR : +9%", 0.076613),
    ("DEX : +9%", 0.076613),
    ("INT : +9%", 0.076613),
    ("LUK : +9%", 0.076613),
    ("최대 HP : +9%", 0.091935),
    ("최대 MP : +9%", 0.091935),
    ("올스탯 : +6%", 0.06129),
    ("피격 시 5% 확률로 데미지의 20% 무시", 0.06129),
    ("피격 시 5% 확률로 데미지의 40% 무시", 0.06129),
    ("피격 후 무적시간 : +2초", 0.06129),
    ("피격 시 2% 확률로 7초간 무적", 0.06129),
    ("30% 확률로 받은 피해의 50%를 반사", 0.06129),
    ("30% 확률로 받은 피해의 70%를 반사", 0.0306452),
    ("HP 회복 아이템 및 회복 스킬 효율 : +30%", 0.06129),
    ("STR : +12%", 0.005128),
    ("DEX : +12%", 0.005128),
    ("INT : +12%", 0.005128),
    ("LUK : +12%", 0.005128),
    ("최대 HP : +12%", 0.005128),
    ("최대 MP : +12%", 0.005128),
    ("올스탯 : +9%", 0.003846),
    ("피격 시 10% 확률로 데미지의 20% 무시", 0.003846),
    ("피격 시 10% 확률로 데미지의 40% 무시", 0.003846),
    ("피격 후 무적시간 : +3초", 0.003846),
    ("피격 시 4% 확률로 7초간 무적", 0.003846),
];
