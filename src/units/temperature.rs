use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{times_five_ninths, times_nine_fifths};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

const FAHRENHEIT_OFFSET: Decimal = dec!(32);
const KELVIN_OFFSET: Decimal = dec!(273.15);
const RANKINE_OFFSET: Decimal = dec!(459.67);

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Rankine => "rankine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::Rankine => "Rankine",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "R",
        }
    }
}

fn celsius_to_fahrenheit(value: Decimal) -> Option<Decimal> {
    times_nine_fifths(value)?.checked_add(FAHRENHEIT_OFFSET)
}

fn fahrenheit_to_celsius(value: Decimal) -> Option<Decimal> {
    times_five_ninths(value.checked_sub(FAHRENHEIT_OFFSET)?)
}

/// 온도를 다른 단위로 변환한다. 반올림 전의 정확한 값을 돌려준다.
///
/// 기준 단위를 거치지 않고 단위 쌍마다 정해진 공식을 그대로 적용한다.
/// 계산 범위를 넘으면 `None`.
pub fn convert_temperature(
    value: Decimal,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Option<Decimal> {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) | (Rankine, Rankine) => {
            Some(value)
        }
        (Celsius, Fahrenheit) => celsius_to_fahrenheit(value),
        (Celsius, Kelvin) => value.checked_add(KELVIN_OFFSET),
        (Celsius, Rankine) => celsius_to_fahrenheit(value)?.checked_add(RANKINE_OFFSET),
        (Fahrenheit, Celsius) => fahrenheit_to_celsius(value),
        (Fahrenheit, Kelvin) => fahrenheit_to_celsius(value)?.checked_add(KELVIN_OFFSET),
        (Fahrenheit, Rankine) => value.checked_add(RANKINE_OFFSET),
        (Kelvin, Celsius) => value.checked_sub(KELVIN_OFFSET),
        (Kelvin, Fahrenheit) => celsius_to_fahrenheit(value.checked_sub(KELVIN_OFFSET)?),
        (Kelvin, Rankine) => times_nine_fifths(value),
        (Rankine, Celsius) => times_five_ninths(value.checked_sub(RANKINE_OFFSET)?),
        (Rankine, Fahrenheit) => value.checked_sub(RANKINE_OFFSET),
        (Rankine, Kelvin) => times_five_ninths(value),
    }
}
