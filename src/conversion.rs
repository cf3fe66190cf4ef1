use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::decimal::{parse_decimal, to_single_scale};
use crate::registry::ConversionType;
use crate::units::{convert_temperature, convert_volume};

/// 변환 요청에서 빠진 타입의 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRole {
    Source,
    Target,
}

impl fmt::Display for TypeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRole::Source => f.write_str("source"),
            TypeRole::Target => f.write_str("target"),
        }
    }
}

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 레지스트리에 없는 타입 이름
    #[error("No matching conversion type for '{0}'.")]
    UnknownType(String),
    /// 십진수로 해석할 수 없는 값
    #[error("'{0}' is not a valid decimal value.")]
    InvalidValue(String),
    #[error("Missing {0} conversion type.")]
    MissingType(TypeRole),
    /// 서로 다른 계열(온도/체적) 간 변환
    #[error("Cannot convert {from} to {to}: different unit families.")]
    FamilyMismatch {
        from: ConversionType,
        to: ConversionType,
    },
    #[error("Conversion from {from} to {to} is not supported.")]
    UnsupportedConversion {
        from: ConversionType,
        to: ConversionType,
    },
}

/// 호출마다 만들어지는 변환 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source: Option<ConversionType>,
    pub target: Option<ConversionType>,
    pub raw_value: String,
}

/// 변환 결과. `value`는 항상 소수 한 자리로 표기된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    pub source: ConversionType,
    pub target: ConversionType,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl ConversionRequest {
    pub fn new(
        source: Option<ConversionType>,
        target: Option<ConversionType>,
        raw_value: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            raw_value: raw_value.into(),
        }
    }

    pub fn execute(&self) -> Result<ConversionResult, ConversionError> {
        let source = self
            .source
            .ok_or(ConversionError::MissingType(TypeRole::Source))?;
        let target = self
            .target
            .ok_or(ConversionError::MissingType(TypeRole::Target))?;
        let value = convert(&self.raw_value, source, target)?;
        Ok(ConversionResult {
            value,
            source,
            target,
        })
    }
}

/// 문자열 값을 `source` 단위에서 `target` 단위로 환산한다.
///
/// 결과는 소수 첫째 자리로 반올림된다(0 이상은 half-up, 음수는 half-down).
/// 같은 단위로의 변환은 입력값을 반올림만 해서 돌려준다.
///
/// ```
/// use unit_conversion_toolbox::conversion::convert;
/// use unit_conversion_toolbox::registry::ConversionType;
///
/// let f = convert("100", ConversionType::CELSIUS, ConversionType::FAHRENHEIT).unwrap();
/// assert_eq!(f.to_string(), "212.0");
/// ```
pub fn convert(
    raw_value: &str,
    source: ConversionType,
    target: ConversionType,
) -> Result<Decimal, ConversionError> {
    if source.family() != target.family() {
        debug!(%source, %target, "family mismatch");
        return Err(ConversionError::FamilyMismatch {
            from: source,
            to: target,
        });
    }

    let value =
        parse_decimal(raw_value).ok_or_else(|| ConversionError::InvalidValue(raw_value.to_string()))?;

    let raw = match (source, target) {
        (ConversionType::Temperature(from), ConversionType::Temperature(to)) => {
            convert_temperature(value, from, to)
        }
        (ConversionType::Volume(from), ConversionType::Volume(to)) => convert_volume(value, from, to),
        _ => {
            return Err(ConversionError::UnsupportedConversion {
                from: source,
                to: target,
            })
        }
    };
    // 계산 범위를 벗어나면 입력값 오류로 취급한다.
    let raw = raw.ok_or_else(|| ConversionError::InvalidValue(raw_value.to_string()))?;

    let result = to_single_scale(raw)
        .ok_or_else(|| ConversionError::InvalidValue(raw_value.to_string()))?;
    debug!(%source, %target, input = %value, unrounded = %raw, %result, "converted");
    Ok(result)
}

/// 타입이 비어 있을 수 있는 호출자를 위한 진입점. 빈 타입은 `MissingType`이 된다.
pub fn convert_optional(
    raw_value: &str,
    source: Option<ConversionType>,
    target: Option<ConversionType>,
) -> Result<Decimal, ConversionError> {
    ConversionRequest::new(source, target, raw_value)
        .execute()
        .map(|r| r.value)
}
