use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 메시지 키가 없을 때 쓰는 문구.
pub const DEFAULT_MESSAGE_TEXT: &str = "Message text not found.";

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_HEADER: &str = "app.header";
    pub const APP_EXIT: &str = "app.exit";

    pub const RESULT_CONVERTED: &str = "result.converted";
    pub const RESULT_VALIDATED: &str = "result.validated";
    pub const RESULT_INCORRECT: &str = "result.incorrect";

    pub const ERROR_NO_FROM_TYPE: &str = "error.no_from_type";
    pub const ERROR_NO_TO_TYPE: &str = "error.no_to_type";
    pub const ERROR_NO_UNITS: &str = "error.no_units";
    pub const ERROR_BAD_TYPE: &str = "error.bad_type";
    pub const ERROR_BAD_VALUE: &str = "error.bad_value";
    pub const ERROR_TYPE_MISMATCH: &str = "error.type_mismatch";

    pub const LIST_HEADING: &str = "list.heading";
    pub const LIST_TEMPERATURE: &str = "list.temperature";
    pub const LIST_VOLUME: &str = "list.volume";

    pub const PROMPT_FROM_TYPE: &str = "prompt.from_type";
    pub const PROMPT_TO_TYPE: &str = "prompt.to_type";
    pub const PROMPT_UNITS: &str = "prompt.units";
    pub const PROMPT_VALIDATE: &str = "prompt.validate";
    pub const INTERACTIVE_HEADING: &str = "interactive.heading";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en-us",
            Language::Ko => "ko-kr",
        }
    }
}

/// 런타임 메시지 번들. 프로세스 시작 시 한 번 만들고 호출자에게 명시적으로 넘긴다.
#[derive(Debug, Clone)]
pub struct Messages {
    lang: Language,
    entries: HashMap<String, String>,
}

impl Messages {
    /// 내장 언어팩만으로 번들을 만든다. 알 수 없는 코드는 en-us로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        let lang = Language::from_code(lang_code);
        Self {
            lang,
            entries: built_in_pack(lang),
        }
    }

    /// 내장 언어팩 위에 `<pack_dir>/<lang>.toml`의 항목을 덮어쓴다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let mut messages = Self::new(lang_code);
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang_code)) {
            debug!(count = overrides.len(), "applied language pack overrides");
            messages.entries.extend(overrides);
        }
        messages
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키에 해당하는 템플릿. 없으면 [`DEFAULT_MESSAGE_TEXT`].
    pub fn get(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_MESSAGE_TEXT)
    }

    /// 템플릿의 `{name}` 자리표시자를 값으로 치환한다. 모르는 자리표시자는 그대로 둔다.
    pub fn render(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 전체 코드(en-us) 다음 기본 코드(en) 순으로 찾는다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = read_pack(&content);
        if map.is_none() {
            warn!(path = %path.display(), "ignoring unreadable language pack");
        }
        map
    };

    let code = Language::from_code(lang).as_code();
    try_load(code).or_else(|| {
        code.split_once(['-', '_'])
            .and_then(|(base, _)| try_load(base))
    })
}

/// 언어팩 TOML을 읽는다. 메시지 키는 `[섹션]` 아래의 문자열 항목 하나당 `섹션.항목`이다.
/// 섹션 밖의 값, 문자열이 아닌 값, 더 깊은 테이블은 무시한다.
fn read_pack(src: &str) -> Option<HashMap<String, String>> {
    let sections: toml::Table = toml::from_str(src).ok()?;
    let entries: HashMap<String, String> = sections
        .iter()
        .filter_map(|(section, body)| body.as_table().map(|t| (section, t)))
        .flat_map(|(section, table)| {
            table.iter().filter_map(move |(name, text)| {
                text.as_str()
                    .map(|t| (format!("{section}.{name}"), t.to_string()))
            })
        })
        .collect();
    (!entries.is_empty()).then_some(entries)
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => include_str!("../locales/en-us.toml"),
        Language::Ko => include_str!("../locales/ko-kr.toml"),
    };
    read_pack(src).unwrap_or_default()
}
