//! 변환 명령 처리. CLI와 웹 서비스가 공통으로 사용한다.
//!
//! 입력 문자열 네 개(변환 전 단위, 변환 후 단위, 값, 검증값)를 받아 레지스트리와 변환 엔진을
//! 호출하고, 결과를 [`Outcome`]으로 분류한 [`ConversionReport`]를 만든다.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::ConfigError;
use crate::conversion::{self, ConversionError};
use crate::decimal::{parse_decimal, to_single_scale};
use crate::messages::{keys, Messages};
use crate::registry::{self, ConversionType};

/// 값이 없음을 나타내는 표기. 웹 폼에서 빈 값 대신 전달된다.
pub const NO_VALUE: &str = "NONE";

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 서버 주소 오류
    #[error("invalid server address '{0}'")]
    Address(String),
}

/// 한 번의 변환 명령 결과 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    Validated,
    Incorrect,
    NoFromType,
    NoToType,
    NoUnits,
    BadType,
    BadValue,
    Mismatch,
}

impl Outcome {
    pub fn message_key(&self) -> &'static str {
        match self {
            Outcome::Converted => keys::RESULT_CONVERTED,
            Outcome::Validated => keys::RESULT_VALIDATED,
            Outcome::Incorrect => keys::RESULT_INCORRECT,
            Outcome::NoFromType => keys::ERROR_NO_FROM_TYPE,
            Outcome::NoToType => keys::ERROR_NO_TO_TYPE,
            Outcome::NoUnits => keys::ERROR_NO_UNITS,
            Outcome::BadType => keys::ERROR_BAD_TYPE,
            Outcome::BadValue => keys::ERROR_BAD_VALUE,
            Outcome::Mismatch => keys::ERROR_TYPE_MISMATCH,
        }
    }

    /// 웹 응답의 `validation` 필드 값.
    pub fn validation_label(&self) -> &'static str {
        match self {
            Outcome::Converted => NO_VALUE,
            Outcome::Validated => "Correct",
            _ => "Incorrect",
        }
    }

    /// CLI 종료 코드. 성공 0, 검증 실패 1, 입력 오류 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Converted | Outcome::Validated => 0,
            Outcome::Incorrect => 1,
            _ => 2,
        }
    }
}

/// CLI 플래그나 쿼리 파라미터에서 모은 변환 명령.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionCommand {
    pub from: Option<String>,
    pub to: Option<String>,
    pub units: Option<String>,
    pub validate: Option<String>,
}

/// 빈 문자열과 `NONE`은 값이 없는 것으로 본다.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(NO_VALUE))
}

/// 변환 명령 실행 결과. 문자열 필드는 해석되지 않은 경우 원래 입력 또는 `NONE`을 담는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub outcome: Outcome,
    pub input_type: String,
    pub input_symbol: String,
    pub input_value: String,
    pub output_type: String,
    pub output_symbol: String,
    pub output_value: String,
    pub validation_value: String,
    /// 오류 메시지에 표시할 문제의 입력
    pub subject: Option<String>,
}

impl ConversionReport {
    fn seeded(cmd: &ConversionCommand) -> Self {
        let raw = |v: &Option<String>| present(v).unwrap_or(NO_VALUE).to_string();
        Self {
            outcome: Outcome::Converted,
            input_type: raw(&cmd.from),
            input_symbol: String::new(),
            input_value: raw(&cmd.units),
            output_type: raw(&cmd.to),
            output_symbol: String::new(),
            output_value: NO_VALUE.to_string(),
            validation_value: raw(&cmd.validate),
            subject: None,
        }
    }

    fn fail(mut self, outcome: Outcome, subject: Option<&str>) -> Self {
        self.outcome = outcome;
        self.subject = subject.map(str::to_string);
        self
    }

    fn describe_input(&mut self, t: ConversionType) {
        self.input_type = t.display_name().to_string();
        self.input_symbol = t.symbol().to_string();
    }

    fn describe_output(&mut self, t: ConversionType) {
        self.output_type = t.display_name().to_string();
        self.output_symbol = t.symbol().to_string();
    }

    /// 메시지 템플릿에 넘길 자리표시자 값.
    pub fn message_args(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("input_type", self.input_type.as_str()),
            ("input_symbol", self.input_symbol.as_str()),
            ("input_value", self.input_value.as_str()),
            ("output_type", self.output_type.as_str()),
            ("output_symbol", self.output_symbol.as_str()),
            ("output_value", self.output_value.as_str()),
            ("validation_value", self.validation_value.as_str()),
            ("subject", self.subject.as_deref().unwrap_or(NO_VALUE)),
        ]
    }

    /// 결과를 사람이 읽는 한 줄 메시지로 만든다.
    pub fn message(&self, messages: &Messages) -> String {
        messages.render(self.outcome.message_key(), &self.message_args())
    }

    pub fn to_response(&self, messages: &Messages, app_version: &str) -> ValidationResponse {
        ValidationResponse {
            app_version: app_version.to_string(),
            app_result: self.message(messages),
            input_type: self.input_type.clone(),
            input_value: self.input_value.clone(),
            output_type: self.output_type.clone(),
            output_value: self.output_value.clone(),
            validation_value: self.validation_value.clone(),
            validation: self.outcome.validation_label().to_string(),
        }
    }
}

/// JSON 응답 본문. CLI `--format json`과 웹 서비스가 같은 형식을 쓴다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub app_version: String,
    pub app_result: String,
    pub input_type: String,
    pub input_value: String,
    pub output_type: String,
    pub output_value: String,
    pub validation_value: String,
    pub validation: String,
}

impl ConversionCommand {
    pub fn new(
        from: Option<&str>,
        to: Option<&str>,
        units: Option<&str>,
        validate: Option<&str>,
    ) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            units: units.map(str::to_string),
            validate: validate.map(str::to_string),
        }
    }

    /// 명령을 실행한다. 입력 오류도 [`Outcome`]으로 보고되므로 실패하지 않는다.
    ///
    /// 검사 순서: 누락(변환 전, 변환 후, 값) → 단위 해석(변환 전, 변환 후) → 값 → 검증값 → 변환.
    pub fn execute(&self) -> ConversionReport {
        let report = ConversionReport::seeded(self);
        debug!(command = ?self, "executing conversion command");

        let Some(from) = present(&self.from) else {
            return report.fail(Outcome::NoFromType, None);
        };
        let Some(to) = present(&self.to) else {
            return report.fail(Outcome::NoToType, None);
        };
        let Some(units) = present(&self.units) else {
            return report.fail(Outcome::NoUnits, None);
        };

        let mut report = report;
        let source = match registry::resolve(from) {
            Ok(t) => t,
            Err(_) => return report.fail(Outcome::BadType, Some(from)),
        };
        report.describe_input(source);
        let target = match registry::resolve(to) {
            Ok(t) => t,
            Err(_) => return report.fail(Outcome::BadType, Some(to)),
        };
        report.describe_output(target);

        let Some(input) = parse_decimal(units).and_then(to_single_scale) else {
            return report.fail(Outcome::BadValue, Some(units));
        };
        report.input_value = input.to_string();

        let expected = match present(&self.validate) {
            Some(v) => {
                let Some(d) = parse_decimal(v).and_then(to_single_scale) else {
                    return report.fail(Outcome::BadValue, Some(v));
                };
                Some(d)
            }
            None => None,
        };
        if let Some(e) = expected {
            report.validation_value = e.to_string();
        }

        match conversion::convert(units, source, target) {
            Ok(output) => {
                report.output_value = output.to_string();
                report.outcome = classify(output, expected);
                report
            }
            Err(ConversionError::FamilyMismatch { .. })
            | Err(ConversionError::UnsupportedConversion { .. }) => {
                report.fail(Outcome::Mismatch, None)
            }
            Err(_) => report.fail(Outcome::BadValue, Some(units)),
        }
    }
}

/// 검증값이 있으면 정확한 십진 비교(허용 오차 없음)로 판정한다.
fn classify(output: Decimal, expected: Option<Decimal>) -> Outcome {
    match expected {
        None => Outcome::Converted,
        Some(e) if e == output => Outcome::Validated,
        Some(_) => Outcome::Incorrect,
    }
}
