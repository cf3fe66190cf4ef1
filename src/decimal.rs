//! 변환 공식이 공통으로 쓰는 십진 연산 도우미.
//!
//! 모든 중간 계산은 `Decimal`로 정확하게 수행하고, 최종 값만 소수 첫째 자리로 반올림한다.
//! 산술 오버플로는 `None`으로 전달한다.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// 최종 결과의 소수 자릿수.
pub const RESULT_SCALE: u32 = 1;

/// 나눗셈 중간값의 소수 자릿수.
pub const DIVISION_SCALE: u32 = 4;

const NINE: Decimal = dec!(9);
const FIVE: Decimal = dec!(5);

/// 문자열을 십진수로 해석한다.
///
/// 받는 표기: 선택적 부호, 숫자, 선택적 소수부, 선택적 지수부(`1e3`, `2.5E-1`).
/// 앞뒤 공백은 무시하고 `+5`, `.5`, `5.`도 받는다. `1_000` 같은 자릿수 구분자나
/// 그 밖의 문자가 섞이면 `None`.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let literal = raw.trim();
    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal.strip_prefix('+').unwrap_or(literal)),
    };
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };
    match exponent {
        None => Decimal::from_str(&normalized).ok(),
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            let exp: i64 = exp.parse().ok()?;
            Decimal::from_scientific(&format!("{normalized}e{exp}")).ok()
        }
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// 값을 소수 첫째 자리로 반올림한다.
///
/// 0 이상이면 중간값을 큰 쪽(half-up)으로, 음수이면 0 쪽(half-down)으로 보낸다.
/// 결과는 항상 소수 한 자리 표기를 갖는다(`212` → `212.0`). 정수부가 너무 커서
/// 소수 한 자리를 붙일 수 없으면 `None`.
pub fn to_single_scale(value: Decimal) -> Option<Decimal> {
    let strategy = if value < Decimal::ZERO {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(RESULT_SCALE, strategy);
    rounded.rescale(RESULT_SCALE);
    if rounded.scale() != RESULT_SCALE {
        return None;
    }
    if rounded.is_zero() {
        // -0.04 같은 값이 "-0.0"으로 표기되지 않도록 한다.
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

/// 4자리 정밀도(half-up)로 나눈다. 0으로 나누거나 범위를 넘으면 `None`.
pub fn div_to_scale(value: Decimal, divisor: Decimal) -> Option<Decimal> {
    value
        .checked_div(divisor)
        .map(|q| q.round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

/// `v * 9 / 5`
pub fn times_nine_fifths(value: Decimal) -> Option<Decimal> {
    value.checked_mul(NINE)?.checked_div(FIVE)
}

/// `v * 5 / 9`. 곱셈을 먼저 해 유효숫자를 보존한다.
pub fn times_five_ninths(value: Decimal) -> Option<Decimal> {
    value.checked_mul(FIVE)?.checked_div(NINE)
}
