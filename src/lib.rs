//! 온도/건량 단위 변환 라이브러리.
//!
//! 핵심은 변환 타입 레지스트리([`registry`])와 변환 엔진([`conversion`])이며,
//! CLI와 웹 서비스는 이 둘을 감싸는 얇은 계층이다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod decimal;
pub mod logging;
pub mod messages;
pub mod quantity;
pub mod registry;
pub mod ui_cli;
pub mod units;
pub mod web;
