//! Additional-potential option pools.
//!
//! Smaller than the potential tables: only weapons are tabulated for every
//! grade; armor data past Rare has not been published.

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
];

const WEAPON_RARE_L1: &[OptionEntry] = &[
    ("최대 HP : +100", 0.058824),
    ("최대 MP : +100", 0.058824),
    ("이동속도 : +6", 0.058824),
    ("점프력 : +6", 0.058824),
    ("방어력 : +100", 0.058824),
    ("STR : +12", 0.058824),
    ("DEX : +12", 0.058824),
    ("INT : +12", 0.058824),
    ("LUK : +12", 0.058824),
    ("공격력 : +12", 0.039216),
    ("마력 : +12", 0.039216),
    ("최대 HP : +2%", 0.039216),
    ("최대 MP : +2%", 0.039216),
    ("STR : +3%", 0.039216),
    ("DEX : +3%", 0.039216),
    ("INT : +3%", 0.039216),
    ("LUK : +3%", 0.039216),
    ("공격력 : +3%", 0.019608),
    ("마력 : +3%", 0.019608),
    ("크리티컬 확률 : +4%", 0.039216),
    ("데미지 : +3%", 0.019608),
    ("올스탯 : +5", 0.058824),
];

const WEAPON_RARE_L2: &[OptionEntry] = &[
    ("STR : +6", 0.072622),
    ("DEX : +6", 0.072622),
    ("INT : +6", 0.072622),
    ("LUK : +6", 0.072622),
    ("최대 HP : +60", 0.108932),
    ("최대 MP : +60", 0.108932),
    ("이동속도 : +4", 0.108932),
    ("점프력 : +4", 0.108932),
    ("방어력 : +60", 0.108932),
    ("공격력 : +6", 0.072622),
    ("마력 : +6", 0.072622),
    ("최대 HP : +100", 0.001153),
    ("최대 MP : +100", 0.001153),
    ("이동속도 : +6", 0.001153),
    ("점프력 : +6", 0.001153),
    ("방어력 : +100", 0.001153),
    ("STR : +12", 0.001153),
    ("DEX : +12", 0.001153),
    ("INT : +12", 0.001153),
    ("LUK : +12", 0.001153),
    ("공격력 : +12", 0.0007689),
    ("마력 : +12", 0.0007689),
    ("최대 HP : +2%", 0.0007689),
    ("최대 MP : +2%", 0.0007689),
    ("STR : +3%", 0.0007689),
    ("DEX : +3%", 0.0007689),
    ("INT : +3%", 0.0007689),
    ("LUK : +3%", 0.0007689),
    ("공격력 : +3%", 0.0003845),
    ("마력 : +3%", 0.0003845),
    ("크리티컬 확률 : +4%", 0.0007689),
    ("데미지 : +3%", 0.0003845),
    ("올스탯 : +5", 0.001153),
];

const WEAPON_RARE_L3: &[OptionEntry] = &[
    ("STR : +6", 0.072622),
    ("DEX : +6", 0.072622),
    ("INT : +6", 0.072622),
    ("LUK : +6", 0.072622),
    ("최대 HP : +60", 0.108932),
    ("최대 MP : +60", 0.108932),
    ("이동속도 : +4", 0.108932),
    ("점프력 : +4", 0.108932),
    ("방어력 : +60", 0.108932),
    ("공격력 : +6", 0.072622),
    ("마력 : +6", 0.072622),
    ("최대 HP : +100", 0.001153),
    ("최대 MP : +100", 0.001153),
    ("이동속도 : +6", 0.001153),
    ("점프력 : +6", 0.001153),
    ("방어력 : +100", 0.001153),
    ("STR : +12", 0.001153),
    ("DEX : +12", 0.001153),
    ("INT : +12", 0.001153),
    ("LUK : +12", 0.001153),
    ("공격력 : +12", 0.0007689),
    ("마력 : +12", 0.0007689),
    ("최대 HP : +2%", 0.0007689),
    ("최대 MP : +2%", 0.0007689),
    ("STR : +3%", 0.0007689),
    ("DEX : +3%", 0.0007689),
    ("INT : +3%", 0.0007689),
    ("LUK : +3%", 0.0007689),
    ("공격력 : +3%", 0.0003845),
    ("마력 : +3%", 0.0003845),
    ("크리티컬 확률 : +4%", 0.0007689),
    ("데미지 : +3%", 0.0003845),
    ("올스탯 : +5", 0.001153),
];

const WEAPON_EPIC_L1: &[OptionEntry] = &[
    ("최대 HP : +5%", 0.088235),
    ("최대 MP : +5%", 0.088235),
    ("공격력 : +6%", 0.058824),
    ("마력 : +6%", 0.058824),
    ("크리티컬 확률 : +6%", 0.029412),
    ("STR : +6%", 0.088235),
    ("DEX : +6%", 0.088235),
    ("INT : +6%", 0.088235),
    ("LUK : +6%", 0.088235),
    ("데미지 : +6%", 0.029412),
    ("올스탯 : +3%", 0.058824),
    ("공격 시 3% 확률로 53의 HP 회복", 0.088235),
    ("공격 시 3% 확률로 53의 MP 회복", 0.088235),
    ("몬스터 방어율 무시 : +3%", 0.058824),
];

const WEAPON_EPIC_L2: &[OptionEntry] = &[
    ("최대 HP : +100", 0.056022),
    ("최대 MP : +100", 0.056022),
    ("이동속도 : +6", 0.056022),
    ("점프력 : +6", 0.056022),
    ("방어력 : +100", 0.056022),
    ("STR : +12", 0.056022),
    ("DEX : +12", 0.056022),
    ("INT : +12", 0.056022),
    ("LUK : +12", 0.056022),
    ("공격력 : +12", 0.037348),
    ("마력 : +12", 0.037348),
    ("최대 HP : +2%", 0.037348),
    ("최대 MP : +2%", 0.037348),
    ("STR : +3%", 0.037348),
    ("DEX : +3%", 0.037348),
    ("INT : +3%", 0.037348),
    ("LUK : +3%", 0.037348),
    ("공격력 : +3%", 0.018674),
    ("마력 : +3%", 0.018674),
    ("크리티컬 확률 : +4%", 0.037348),
    ("데미지 : +3%", 0.018674),
    ("올스탯 : +5", 0.056022),
    ("최대 HP : +5%", 0.004202),
    ("최대 MP : +5%", 0.004202),
    ("공격력 : +6%", 0.002801),
    ("마력 : +6%", 0.002801),
    ("크리티컬 확률 : +6%", 0.001401),
    ("STR : +6%", 0.004202),
    ("DEX : +6%", 0.004202),
    ("INT : +6%", 0.004202),
    ("LUK : +6%", 0.004202),
    ("데미지 : +6%", 0.001401),
    ("올스탯 : +3%", 0.002801),
    ("공격 시 3% 확률로 53의 HP 회복", 0.004202),
    ("공격 시 3% 확률로 53의 MP 회복", 0.004202),
    ("몬스터 방어율 무시 : +3%", 0.002801),
];

const WEAPON_EPIC_L3: &[OptionEntry] = &[
    ("최대 HP : +100", 0.056022),
    ("최대 MP : +100", 0.056022),
    ("이동속도 : +6", 0.056022),
    ("점프력 : +6", 0.056022),
    ("방어력 : +100", 0.056022),
    ("STR : +12", 0.056022),
    ("DEX : +12", 0.056022),
    ("INT : +12", 0.056022),
    ("LUK : +12", 0.056022),
    ("공격력 : +12", 0.037348),
    ("마력 : +12", 0.037348),
    ("최대 HP : +2%", 0.037348),
    ("최대 MP : +2%", 0.037348),
    ("STR : +3%", 0.037348),
    ("DEX : +3%", 0.037348),
    ("INT : +3%", 0.037348),
    ("LUK : +3%", 0.037348),
    ("공격력 : +3%", 0.018674),
    ("마력 : +3%", 0.018674),
    ("크리티컬 확률 : +4%", 0.037348),
    ("데미지 : +3%", 0.018674),
    ("올스탯 : +5", 0.056022),
    ("최대 HP : +5%", 0.004202),
    ("최대 MP : +5%", 0.004202),
    ("공격력 : +6%", 0.002801),
    ("마력 : +6%", 0.002801),
    ("크리티컬 확률 : +6%", 0.001401),
    ("STR : +6%", 0.004202),
    ("DEX : +6%", 0.004202),
    ("INT : +6%", 0.004202),
    ("LUK : +6%", 0.004202),
    ("데미지 : +6%", 0.001401),
    ("올스탯 : +3%", 0.002801),
    ("공격 시 3% 확률로 53의 HP 회복", 0.004202),
    ("공격 시 3% 확률로 53의 MP 회복", 0.004202),
    ("몬스터 방어율 무시 : +3%", 0.002801),
];

const WEAPON_UNIQUE_L1: &[OptionEntry] = &[
    ("최대 HP : +8%", 0.069767),
    ("최대 MP : +8%", 0.069767),
    ("공격력 : +9%", 0.046512),
    ("마력 : +9%", 0.046512),
    ("크리티컬 확률 : +9%", 0.046512),
    ("STR : +9%", 0.069767),
    ("DEX : +9%", 0.069767),
    ("INT : +9%", 0.069767),
    ("LUK : +9%", 0.069767),
    ("데미지 : +9%", 0.023256),
    ("올스탯 : +6%", 0.046512),
    ("캐릭터 기준 9레벨 당 STR : +1", 0.046512),
    ("캐릭터 기준 9레벨 당 DEX : +1", 0.046512),
    ("캐릭터 기준 9레벨 당 INT : +1", 0.046512),
    ("캐릭터 기준 9레벨 당 LUK : +1", 0.046512),
    ("공격 시 15% 확률로 95의 HP 회복", 0.069767),
    ("공격 시 15% 확률로 95의 MP 회복", 0.069767),
    ("몬스터 방어율 무시 : +4%", 0.023256),
    ("보스 몬스터 공격 시 데미지 : +12%", 0.023256),
];

const WEAPON_UNIQUE_L2: &[OptionEntry] = &[
    ("최대 HP : +5%", 0.086505),
    ("최대 MP : +5%", 0.086505),
    ("공격력 : +6%", 0.05767),
    ("마력 : +6%", 0.05767),
    ("크리티컬 확률 : +6%", 0.028835),
    ("STR : +6%", 0.086505),
    ("DEX : +6%", 0.086505),
    ("INT : +6%", 0.086505),
    ("LUK : +6%", 0.086505),
    ("데미지 : +6%", 0.028835),
    ("올스탯 : +3%", 0.05767),
    ("공격 시 3% 확률로 53의 HP 회복", 0.086505),
    ("공격 시 3% 확률로 53의 MP 회복", 0.086505),
    ("몬스터 방어율 무시 : +3%", 0.05767),
    ("최대 HP : +8%", 0.001368),
    ("최대 MP : +8%", 0.001368),
    ("공격력 : +9%", 0.000912),
    ("마력 : +9%", 0.000912),
    ("크리티컬 확률 : +9%", 0.000912),
    ("STR : +9%", 0.001368),
    ("DEX : +9%", 0.001368),
    ("INT : +9%", 0.001368),
    ("LUK : +9%", 0.001368),
    ("데미지 : +9%", 0.000456),
    ("올스탯 : +6%", 0.000912),
    ("캐릭터 기준 9레벨 당 STR : +1", 0.000912),
    ("캐릭터 기준 9레벨 당 DEX : +1", 0.000912),
    ("캐릭터 기준 9레벨 당 INT : +1", 0.000912),
    ("캐릭터 기준 9레벨 당 LUK : +1", 0.000912),
    ("공격 시 15% 확률로 95의 HP 회복", 0.001368),
    ("공격 시 15% 확률로 95의 MP 회복", 0.001368),
    ("몬스터 방어율 무시 : +4%", 0.000456),
    ("보스 몬스터 공격 시 데미지 : +12%", 0.000456),
];

const WEAPON_UNIQUE_L3: &[OptionEntry] = &[
    ("최대 HP : +5%", 0.086505),
    ("최대 MP : +5%", 0.086505),
    ("공격력 : +6%", 0.05767),
    ("마력 : +6%", 0.05767),
    ("크리티컬 확률 : +6%", 0.028835),
    ("STR : +6%", 0.086505),
    ("DEX : +6%", 0.086505),
    ("INT : +6%", 0.086505),
    ("LUK : +6%", 0.086505),
    ("데미지 : +6%", 0.028835),
    ("올스탯 : +3%", 0.05767),
    ("공격 시 3% 확률로 53의 HP 회복", 0.086505),
    ("공격 시 3% 확률로 53의 MP 회복", 0.086505),
    ("몬스터 방어율 무시 : +3%", 0.05767),
    ("최대 HP : +8%", 0.001368),
    ("최대 MP : +8%", 0.001368),
    ("공격력 : +9%", 0.000912),
    ("마력 : +9%", 0.000912),
    ("크리티컬 확률 : +9%", 0.000912),
    ("STR : +9%", 0.001368),
    ("DEX : +9%", 0.001368),
    ("INT : +9%", 0.001368),
    ("LUK : +9%", 0.001368),
    ("데미지 : +9%", 0.000456),
    ("올스탯 : +6%", 0.000912),
    ("캐릭터 기준 9레벨 당 STR : +1", 0.000912),
    ("캐릭터 기준 9레벨 당 DEX : +1", 0.000912),
    ("캐릭터 기준 9레벨 당 INT : +1", 0.000912),
    ("캐릭터 기준 9레벨 당 LUK : +1", 0.000912),
    ("공격 시 15% 확률로 95의 HP 회복", 0.001368),
    ("공격 시 15% 확률로 95의 MP 회복", 0.001368),
    ("몬스터 방어율 무시 : +4%", 0.000456),
    ("보스 몬스터 공격 시 데미지 : +12%", 0.000456),
];

const WEAPON_LEGENDARY_L1: &[OptionEntry] = &[
    ("최대 HP : +11%", 0.076923),
    ("최대 MP : +11%", 0.076923),
    ("공격력 : +12%", 0.051282),
    ("마력 : +12%", 0.051282),
    ("크리티컬 확률 : +12%", 0.051282),
    ("STR : +12%", 0.076923),
    ("DEX : +12%", 0.076923),
    ("INT : +12%", 0.076923),
    ("LUK : +12%", 0.076923),
    ("데미지 : +12%", 0.025641),
    ("올스탯 : +9%", 0.051282),
    ("캐릭터 기준 9레벨 당 STR : +2", 0.051282),
    ("캐릭터 기준 9레벨 당 DEX : +2", 0.051282),
    ("캐릭터 기준 9레벨 당 INT : +2", 0.051282),
    ("캐릭터 기준 9레벨 당 LUK : +2", 0.051282),
    ("공격력 : +32", 0.025641),
    ("마력 : +32", 0.025641),
    ("몬스터 방어율 무시 : +5%", 0.025641),
    ("보스 몬스터 공격 시 데미지 : +18%", 0.025641),
];

const WEAPON_LEGENDARY_L2: &[OptionEntry] = &[
    ("최대 HP : +8%", 0.06942),
    ("최대 MP : +8%", 0.06942),
    ("공격력 : +9%", 0.04628),
    ("마력 : +9%", 0.04628),
    ("크리티컬 확률 : +9%", 0.04628),
    ("STR : +9%", 0.06942),
    ("DEX : +9%", 0.06942),
    ("INT : +9%", 0.06942),
    ("LUK : +9%", 0.06942),
    ("데미지 : +9%", 0.02314),
    ("올스탯 : +6%", 0.04628),
    ("캐릭터 기준 9레벨 당 STR : +1", 0.04628),
    ("캐릭터 기준 9레벨 당 DEX : +1", 0.04628),
    ("캐릭터 기준 9레벨 당 INT : +1", 0.04628),
    ("캐릭터 기준 9레벨 당 LUK : +1", 0.04628),
    ("공격 시 15% 확률로 95의 HP 회복", 0.06942),
    ("공격 시 15% 확률로 95의 MP 회복", 0.06942),
    ("몬스터 방어율 무시 : +4%", 0.02314),
    ("보스 몬스터 공격 시 데미지 : +12%", 0.02314),
    ("최대 HP : +11%", 0.0003827),
    ("최대 MP : +11%", 0.0003827),
    ("공격력 : +12%", 0.0002551),
    ("마력 : +12%", 0.0002551),
    ("크리티컬 확률 : +12%", 0.0002551),
    ("STR : +12%", 0.0003827),
    ("DEX : +12%", 0.0003827),
    ("INT : +12%", 0.0003827),
    ("LUK : +12%", 0.0003827),
    ("데미지 : +12%", 0.0001276),
    ("올스탯 : +9%", 0.0002551),
    ("캐릭터 기준 9레벨 당 STR : +2", 0.0002551),
    ("캐릭터 기준 9레벨 당 DEX : +2", 0.0002551),
    ("캐릭터 기준 9레벨 당 INT : +2", 0.0002551),
    ("캐릭터 기준 9레벨 당 LUK : +2", 0.0002551),
    ("공격력 : +32", 0.0001276),
    ("마력 : +32", 0.0001276),
    ("몬스터 방어율 무시 : +5%", 0.0001276),
    ("보스 몬스터 공격 시 데미지 : +18%", 0.0001276),
];

const WEAPON_LEGENDARY_L3: &[OptionEntry] = &[
    ("최대 HP : +8%", 0.06942),
    ("최대 MP : +8%", 0.06942),
    ("공격력 : +9%", 0.04628),
    ("마력 : +9%", 0.04628),
    ("크리티컬 확률 : +9%", 0.04628),
    ("STR : +9%", 0.06942),
    ("DEX : +9%", 0.06942),
    ("INT : +9%", 0.06942),
    ("LUK : +9%", 0.06942),
    ("데미지 : +9%", 0.02314),
    ("올스탯 : +6%", 0.04628),
    ("캐릭터 기준 9레벨 당 STR : +1", 0.04628),
    ("캐릭터 기준 9레벨 당 DEX : +1", 0.04628),
    ("캐릭터 기준 9레벨 당 INT : +1", 0.04628),
    ("캐릭터 기준 9레벨 당 LUK : +1", 0.04628),
    ("공격 시 15% 확률로 95의 HP 회복", 0.06942),
    ("공격 시 15% 확률로 95의 MP 회복", 0.06942),
    ("몬스터 방어율 무시 : +4%", 0.02314),
    ("보스 몬스터 공격 시 데미지 : +12%", 0.02314),
    ("최대 HP : +11%", 0.0003827),
    ("최대 MP : +11%", 0.0003827),
    ("공격력 : +12%", 0.0002551),
    ("마력 : +12%", 0.0002551),
    ("크리티컬 확률 : +12%", 0.0002551),
    ("STR : +12%", 0.0003827),
    ("DEX : +12%", 0.0003827),
    ("INT : +12%", 0.0003827),
    ("LUK : +12%", 0.0003827),
    ("데미지 : +12%", 0.0001276),
    ("올스탯 : +9%", 0.0002551),
    ("캐릭터 기준 9레벨 당 STR : +2", 0.0002551),
    ("캐릭터 기준 9레벨 당 DEX : +2", 0.0002551),
    ("캐릭터 기준 9레벨 당 INT : +2", 0.0002551),
    ("캐릭터 기준 9레벨 당 LUK : +2", 0.0002551),
    ("공격력 : +32", 0.0001276),
    ("마력 : +32", 0.0001276),
    ("몬스터 방어율 무시 : +5%", 0.0001276),
    ("보스 몬스터 공격 시 데미지 : +18%", 0.0001276),
];

const TOP_RARE_L1: &[OptionEntry] = &[
    ("STR : +10", 0.06383),
    ("DEX : +10", 0.06383),
    ("INT : +10", 0.06383),
    ("LUK : +10", 0.06383),
    ("최대 HP : +100", 0.06383),
    ("최대 MP : +100", 0.06383),
    ("이동속도 : +6", 0.06383),
    ("점프력 : +6", 0.06383),
    ("공격력 : +10", 0.042553),
    ("마력 : +10", 0.042553),
    ("방어력 : +100", 0.06383),
    ("STR : +2%", 0.042553),
    ("DEX : +2%", 0.042553),
    ("INT : +2%", 0.042553),
    ("LUK : +2%", 0.042553),
    ("최대 HP : +2%", 0.042553),
    ("최대 MP : +2%", 0.042553),
    ("방어력 : +2%", 0.042553),
    ("올스탯 : +3", 0.042553),
];

const TOP_RARE_L2: &[OptionEntry] = &[
    ("STR : +6", 0.072622),
    ("DEX : +6", 0.072622),
    ("INT : +6", 0.072622),
    ("LUK : +6", 0.072622),
    ("최대 HP : +60", 0.108932),
    ("최대 MP : +60", 0.108932),
    ("이동속도 : +4", 0.108932),
    ("점프력 : +4", 0.108932),
    ("공격력 : +3", 0.072622),
    ("마력 : +3", 0.072622),
    ("방어력 : +60", 0.108932),
    ("STR : +10", 0.001252),
    ("DEX : +10", 0.001252),
    ("INT : +10", 0.001252),
    ("LUK : +10", 0.001252),
    ("최대 HP : +100", 0.001252),
    ("최대 MP : +100", 0.001252),
    ("이동속도 : +6", 0.001252),
    ("점프력 : +6", 0.001252),
    ("공격력 : +10", 0.0008344),
    ("마력 : +10", 0.0008344),
    ("방어력 : +100", 0.001252),
    ("STR : +2%", 0.0008344),
    ("DEX : +2%", 0.0008344),
    ("INT : +2%", 0.0008344),
    ("LUK : +2%", 0.0008344),
    ("최대 HP : +2%", 0.0008344),
    ("최대 MP : +2%", 0.0008344),
    ("방어력 : +2%", 0.0008344),
    ("올스탯 : +3", 0.0008344),
];

const TOP_RARE_L3: &[OptionEntry] = &[
    ("STR : +6", 0.072622),
    ("DEX : +6", 0.072622),
    ("INT : +6", 0.072622),
    ("LUK : +6", 0.072622),
    ("최대 HP : +60", 0.108932),
    ("최대 MP : +60", 0.108932),
    ("이동속도 : +4", 0.108932),
    ("점프력 : +4", 0.108932),
    ("공격력 : +3", 0.072622),
    ("마력 : +3", 0.072622),
    ("방어력 : +60", 0.108932),
    ("STR : +10", 0.001252),
    ("DEX : +10", 0.001252),
    ("INT : +10", 0.001252),
    ("LUK : +10", 0.001252),
    ("최대 HP : +100", 0.001252),
    ("최대 MP : +100", 0.001252),
    ("이동속도 : +6", 0.001252),
    ("점프력 : +6", 0.001252),
    ("공격력 : +10", 0.0008344),
    ("마력 : +10", 0.0008344),
    ("방어력 : +100", 0.001252),
    ("STR : +2%", 0.0008344),
    ("DEX : +2%", 0.0008344),
    ("INT : +2%", 0.0008344),
    ("LUK : +2%", 0.0008344),
    ("최대 HP : +2%", 0.0008344),
    ("최대 MP : +2%", 0.0008344),
    ("방어력 : +2%", 0.0008344),
    ("올스탯 : +3", 0.0008344),
];
