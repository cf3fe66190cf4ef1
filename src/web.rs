//! 변환 검증 웹 서비스.
//!
//! `GET /validate?convertFrom=celsius&convertTo=fahrenheit&unitValue=100&validateValue=212`
//! 요청을 받아 JSON 결과를 돌려준다. 입력 오류도 HTTP 200과 함께 본문으로 보고한다.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};
use warp::Filter;

use crate::app::{AppError, ConversionCommand, ValidationResponse};
use crate::config::Config;
use crate::messages::Messages;

pub const FROM_TYPE_PARAM: &str = "convertFrom";
pub const TO_TYPE_PARAM: &str = "convertTo";
pub const UNIT_VALUE_PARAM: &str = "unitValue";
pub const VALIDATE_VALUE_PARAM: &str = "validateValue";

/// 요청 처리기가 공유하는 읽기 전용 상태.
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub messages: Arc<Messages>,
    pub app_version: Arc<str>,
}

impl ServiceState {
    pub fn new(messages: Messages, app_version: &str) -> Self {
        Self {
            messages: Arc::new(messages),
            app_version: Arc::from(app_version),
        }
    }
}

/// 쿼리 파라미터를 변환 명령으로 바꾼다. 키는 대소문자를 구분하지 않는다.
pub fn command_from_query(query: &HashMap<String, String>) -> ConversionCommand {
    let mut cmd = ConversionCommand::default();
    for (key, value) in query {
        let slot = if key.eq_ignore_ascii_case(FROM_TYPE_PARAM) {
            &mut cmd.from
        } else if key.eq_ignore_ascii_case(TO_TYPE_PARAM) {
            &mut cmd.to
        } else if key.eq_ignore_ascii_case(UNIT_VALUE_PARAM) {
            &mut cmd.units
        } else if key.eq_ignore_ascii_case(VALIDATE_VALUE_PARAM) {
            &mut cmd.validate
        } else {
            continue;
        };
        *slot = Some(value.clone());
    }
    cmd
}

/// `/validate` 요청 하나를 처리한다.
pub fn handle_validate(query: &HashMap<String, String>, state: &ServiceState) -> ValidationResponse {
    let cmd = command_from_query(query);
    debug!(?cmd, "executing web command");
    let report = cmd.execute();
    let response = report.to_response(&state.messages, &state.app_version);
    debug!(outcome = ?report.outcome, "generated response");
    response
}

/// 서비스 라우트를 구성한다.
pub fn routes(
    state: ServiceState,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"status": "ok"})));

    let validate = warp::path("validate")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(state_filter)
        .map(|query: HashMap<String, String>, state: ServiceState| {
            warp::reply::json(&handle_validate(&query, &state))
        });

    health.or(validate)
}

/// 설정의 주소로 서버를 띄운다.
pub async fn serve(cfg: &Config, messages: Messages) -> Result<(), AppError> {
    let address = cfg.server.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|_| AppError::Address(address.clone()))?;

    let state = ServiceState::new(messages, &cfg.app_version());
    info!(%addr, "unit conversion service listening");
    info!("validate endpoint: http://{addr}/validate");

    warp::serve(routes(state)).run(addr).await;
    Ok(())
}
