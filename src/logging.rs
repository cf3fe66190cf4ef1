//! tracing 구독자 초기화.

use std::str::FromStr;

use tracing::Level;

/// 설정 문자열을 로그 레벨로 바꾼다. 알 수 없는 값은 WARN.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::WARN)
}

/// stderr로 출력하는 fmt 구독자를 설치한다. stdout은 변환 결과 전용이다.
///
/// 이미 설치된 구독자가 있으면 아무 것도 하지 않는다.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
