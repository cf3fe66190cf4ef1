use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 웹 서비스 바인딩 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port` 형태의 주소 문자열.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 애플리케이션 설정을 표현한다. 모든 필드에 기본값이 있어 일부만 적은 파일도 읽힌다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 출력 헤더와 JSON `appVersion`에 쓰이는 이름
    pub app_name: String,
    /// 메시지 언어 코드(auto/en-us/ko-kr 등)
    pub language: String,
    /// 언어팩 디렉터리. `<dir>/<lang>.toml` 파일로 내장 메시지를 덮어쓴다.
    pub language_pack_dir: Option<String>,
    /// 로그 레벨(error/warn/info/debug/trace)
    pub log_level: String,
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Unit Conversion".to_string(),
            language: "auto".to_string(),
            language_pack_dir: None,
            log_level: "warn".to_string(),
            server: ServerConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Deserialize(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        warn!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 헤더에 표시되는 "이름 버전" 문자열.
    pub fn app_version(&self) -> String {
        format!("{} {}", self.app_name, env!("CARGO_PKG_VERSION"))
    }
}
