use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::div_to_scale;

/// 건량(dry volume) 단위. 미국 단위 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicFeet,
    CubicInches,
    Cups,
    Gallons,
    Liters,
    Tablespoons,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 6] = [
        VolumeUnit::CubicFeet,
        VolumeUnit::CubicInches,
        VolumeUnit::Cups,
        VolumeUnit::Gallons,
        VolumeUnit::Liters,
        VolumeUnit::Tablespoons,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VolumeUnit::CubicFeet => "cubicfeet",
            VolumeUnit::CubicInches => "cubicinches",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Liters => "liters",
            VolumeUnit::Tablespoons => "tablespoons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VolumeUnit::CubicFeet => "cubic feet",
            VolumeUnit::CubicInches => "cubic inches",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Liters => "liters",
            VolumeUnit::Tablespoons => "tablespoons",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::CubicFeet => "CF",
            VolumeUnit::CubicInches => "CI",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Gallons => "gal",
            VolumeUnit::Liters => "l",
            VolumeUnit::Tablespoons => "tbl",
        }
    }
}

/// 단위 쌍에 적용할 환산 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeFactor {
    Identity,
    /// 정확한 곱셈
    Multiply(Decimal),
    /// 소수 넷째 자리(half-up)까지의 나눗셈
    Divide(Decimal),
}

/// 단위 쌍별 환산 계수표.
///
/// 계수는 서로 역수가 아닌 쌍이 있다(예: 컵→갤런 ×0.0537, 갤런→컵 ×18.6184).
/// 기준 출력값과 일치해야 하므로 다시 유도하지 않고 그대로 쓴다.
pub fn volume_factor(from: VolumeUnit, to: VolumeUnit) -> VolumeFactor {
    use VolumeFactor::{Divide, Identity, Multiply};
    use VolumeUnit::*;
    match (from, to) {
        (CubicFeet, CubicFeet)
        | (CubicInches, CubicInches)
        | (Cups, Cups)
        | (Gallons, Gallons)
        | (Liters, Liters)
        | (Tablespoons, Tablespoons) => Identity,

        (CubicFeet, CubicInches) => Multiply(dec!(1728)),
        (CubicFeet, Cups) => Multiply(dec!(119.6883)),
        (CubicFeet, Gallons) => Multiply(dec!(6.4285)),
        (CubicFeet, Liters) => Multiply(dec!(28.3169)),
        (CubicFeet, Tablespoons) => Multiply(dec!(1915.013)),

        (CubicInches, CubicFeet) => Divide(dec!(1728)),
        (CubicInches, Cups) => Divide(dec!(14.4375)),
        (CubicInches, Gallons) => Divide(dec!(268.8025)),
        (CubicInches, Liters) => Divide(dec!(61.0237)),
        (CubicInches, Tablespoons) => Multiply(dec!(1.1082)),

        (Cups, CubicFeet) => Divide(dec!(119.6883)),
        (Cups, CubicInches) => Multiply(dec!(14.4375)),
        (Cups, Gallons) => Multiply(dec!(0.0537)),
        (Cups, Liters) => Divide(dec!(4.2268)),
        (Cups, Tablespoons) => Multiply(dec!(16)),

        (Gallons, CubicFeet) => Divide(dec!(6.4285)),
        (Gallons, CubicInches) => Multiply(dec!(268.8025)),
        (Gallons, Cups) => Multiply(dec!(18.6184)),
        (Gallons, Liters) => Multiply(dec!(4.4049)),
        (Gallons, Tablespoons) => Multiply(dec!(297.8937)),

        (Liters, CubicFeet) => Divide(dec!(28.3169)),
        (Liters, CubicInches) => Multiply(dec!(61.0237)),
        (Liters, Cups) => Multiply(dec!(4.2268)),
        (Liters, Gallons) => Divide(dec!(4.4049)),
        (Liters, Tablespoons) => Multiply(dec!(67.628)),

        (Tablespoons, CubicFeet) => Divide(dec!(1915.013)),
        (Tablespoons, CubicInches) => Divide(dec!(1.1082)),
        (Tablespoons, Cups) => Divide(dec!(16)),
        (Tablespoons, Gallons) => Divide(dec!(297.8937)),
        (Tablespoons, Liters) => Divide(dec!(67.628)),
    }
}

/// 체적을 변환한다. 반올림 전 값을 돌려주며 범위를 넘으면 `None`.
pub fn convert_volume(value: Decimal, from: VolumeUnit, to: VolumeUnit) -> Option<Decimal> {
    match volume_factor(from, to) {
        VolumeFactor::Identity => Some(value),
        VolumeFactor::Multiply(factor) => value.checked_mul(factor),
        VolumeFactor::Divide(divisor) => div_to_scale(value, divisor),
    }
}
