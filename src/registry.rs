//! 변환 타입 레지스트리.
//!
//! 외부에서 들어오는 이름(`"celsius"`, `"cubic_feet"`, `"Cubic-Inches"` 등)을
//! 고정된 변환 타입 집합으로 해석한다. 테이블은 컴파일 시점에 정해지며 변경되지 않는다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;
use crate::units::{TemperatureUnit, VolumeUnit};

/// 변환 가능한 측정 단위 하나를 식별한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionType {
    Temperature(TemperatureUnit),
    Volume(VolumeUnit),
}

impl ConversionType {
    pub const CELSIUS: ConversionType = ConversionType::Temperature(TemperatureUnit::Celsius);
    pub const FAHRENHEIT: ConversionType = ConversionType::Temperature(TemperatureUnit::Fahrenheit);
    pub const KELVIN: ConversionType = ConversionType::Temperature(TemperatureUnit::Kelvin);
    pub const RANKINE: ConversionType = ConversionType::Temperature(TemperatureUnit::Rankine);
    pub const CUBIC_FEET: ConversionType = ConversionType::Volume(VolumeUnit::CubicFeet);
    pub const CUBIC_INCHES: ConversionType = ConversionType::Volume(VolumeUnit::CubicInches);
    pub const CUPS: ConversionType = ConversionType::Volume(VolumeUnit::Cups);
    pub const GALLONS: ConversionType = ConversionType::Volume(VolumeUnit::Gallons);
    pub const LITERS: ConversionType = ConversionType::Volume(VolumeUnit::Liters);
    pub const TABLESPOONS: ConversionType = ConversionType::Volume(VolumeUnit::Tablespoons);

    pub fn family(&self) -> QuantityKind {
        match self {
            ConversionType::Temperature(_) => QuantityKind::Temperature,
            ConversionType::Volume(_) => QuantityKind::Volume,
        }
    }

    /// 조회와 비교에 쓰는 정규화된 키(소문자, `_`/`-` 없음).
    pub fn canonical_key(&self) -> &'static str {
        match self {
            ConversionType::Temperature(u) => u.key(),
            ConversionType::Volume(u) => u.key(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConversionType::Temperature(u) => u.display_name(),
            ConversionType::Volume(u) => u.display_name(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ConversionType::Temperature(u) => u.symbol(),
            ConversionType::Volume(u) => u.symbol(),
        }
    }

    pub fn is_temperature(&self) -> bool {
        self.family() == QuantityKind::Temperature
    }

    pub fn is_volume(&self) -> bool {
        self.family() == QuantityKind::Volume
    }
}

/// 선언 순서대로 나열한 전체 변환 타입(온도 4종, 체적 6종).
pub static ALL_TYPES: [ConversionType; 10] = [
    ConversionType::CELSIUS,
    ConversionType::FAHRENHEIT,
    ConversionType::KELVIN,
    ConversionType::RANKINE,
    ConversionType::CUBIC_FEET,
    ConversionType::CUBIC_INCHES,
    ConversionType::CUPS,
    ConversionType::GALLONS,
    ConversionType::LITERS,
    ConversionType::TABLESPOONS,
];

pub fn all_types() -> &'static [ConversionType] {
    &ALL_TYPES
}

/// 외부 이름을 정규화한다. 밑줄과 하이픈을 지우고 소문자로 바꾼다.
pub fn canonicalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// 이름을 변환 타입으로 해석한다. 대소문자와 `_`/`-`는 구분하지 않는다.
pub fn resolve(name: &str) -> Result<ConversionType, ConversionError> {
    let key = canonicalize(name);
    match ALL_TYPES.iter().find(|t| t.canonical_key() == key) {
        Some(t) => Ok(*t),
        None => {
            debug!(name, key = %key, "no matching conversion type");
            Err(ConversionError::UnknownType(name.to_string()))
        }
    }
}

pub fn is_temperature(t: ConversionType) -> bool {
    t.is_temperature()
}

pub fn is_volume(t: ConversionType) -> bool {
    t.is_volume()
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ConversionType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl Serialize for ConversionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_key())
    }
}

impl<'de> Deserialize<'de> for ConversionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        resolve(&name).map_err(serde::de::Error::custom)
    }
}
