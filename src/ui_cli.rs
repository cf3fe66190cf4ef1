use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::{AppError, ConversionCommand, ConversionReport};
use crate::config::Config;
use crate::messages::{keys, Messages};
use crate::quantity::QuantityKind;
use crate::registry;

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 온도/건량 단위 변환기.
#[derive(Debug, Clone, Parser)]
#[command(name = "unit_conversion_toolbox", version, about)]
pub struct Cli {
    /// 변환 전 단위 (예: celsius, cubic_feet)
    #[arg(short = 'f', long = "convertFrom", visible_alias = "convert-from")]
    pub convert_from: Option<String>,

    /// 변환 후 단위 (예: fahrenheit, liters)
    #[arg(short = 't', long = "convertTo", visible_alias = "convert-to")]
    pub convert_to: Option<String>,

    /// 변환할 값
    #[arg(short = 'u', long = "units", allow_hyphen_values = true)]
    pub units: Option<String>,

    /// 검증할 예상 답
    #[arg(long = "validate", allow_hyphen_values = true)]
    pub validate: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// 메시지 언어 (auto/en-us/ko-kr)
    #[arg(short = 'L', long)]
    pub lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 지원하는 단위 목록을 출력한다
    #[arg(long)]
    pub list: bool,

    /// 대화형 모드
    #[arg(short, long)]
    pub interactive: bool,

    /// 기본 설정 파일을 만든다
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    pub fn command(&self) -> ConversionCommand {
        ConversionCommand {
            from: self.convert_from.clone(),
            to: self.convert_to.clone(),
            units: self.units.clone(),
            validate: self.validate.clone(),
        }
    }
}

/// 헤더 한 줄과 들여쓴 결과 메시지 한 줄로 된 텍스트 출력을 만든다.
pub fn render_text(report: &ConversionReport, messages: &Messages, app_version: &str) -> String {
    let header = messages.render(keys::APP_HEADER, &[("app_version", app_version)]);
    format!("{header}\n  {}", report.message(messages))
}

/// `--format json` 출력. 웹 서비스 응답과 같은 형식이다.
pub fn render_json(report: &ConversionReport, messages: &Messages, app_version: &str) -> String {
    let response = report.to_response(messages, app_version);
    serde_json::to_string_pretty(&response).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

pub fn render(
    report: &ConversionReport,
    messages: &Messages,
    app_version: &str,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => render_text(report, messages, app_version),
        OutputFormat::Json => render_json(report, messages, app_version),
    }
}

/// 계열별로 묶은 지원 단위 목록.
pub fn list_types(messages: &Messages) -> String {
    let mut out = String::from(messages.get(keys::LIST_HEADING));
    for (kind, key) in [
        (QuantityKind::Temperature, keys::LIST_TEMPERATURE),
        (QuantityKind::Volume, keys::LIST_VOLUME),
    ] {
        out.push_str(&format!("\n  {}:", messages.get(key)));
        for t in registry::all_types().iter().filter(|t| t.family() == kind) {
            out.push_str(&format!(
                "\n    {:<12} {:<13} {}",
                t.canonical_key(),
                t.display_name(),
                t.symbol()
            ));
        }
    }
    out
}

/// CLI 한 번 실행을 처리하고 종료 코드를 돌려준다.
pub fn run(cli: &Cli, cfg: &Config, messages: &Messages) -> Result<i32, AppError> {
    if cli.init_config {
        cfg.save_to(&cli.config)?;
        println!("{}", cli.config.display());
        return Ok(0);
    }
    if cli.list {
        println!("{}", list_types(messages));
        return Ok(0);
    }
    if cli.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        interactive(&mut input, &mut output, cfg, messages, cli.format)?;
        return Ok(0);
    }

    let report = cli.command().execute();
    println!(
        "{}",
        render(&report, messages, &cfg.app_version(), cli.format)
    );
    Ok(report.outcome.exit_code())
}

/// 대화형 변환 루프. 변환 전 단위를 비워 두면 종료한다.
pub fn interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    cfg: &Config,
    messages: &Messages,
    format: OutputFormat,
) -> Result<(), AppError> {
    writeln!(output, "{}", messages.get(keys::INTERACTIVE_HEADING))?;
    writeln!(output, "{}", list_types(messages))?;
    loop {
        let Some(from) = read_line(input, output, messages.get(keys::PROMPT_FROM_TYPE))? else {
            break;
        };
        if from.is_empty() {
            break;
        }
        let to = read_line(input, output, messages.get(keys::PROMPT_TO_TYPE))?;
        let units = read_line(input, output, messages.get(keys::PROMPT_UNITS))?;
        let validate = read_line(input, output, messages.get(keys::PROMPT_VALIDATE))?;
        let cmd = ConversionCommand {
            from: Some(from),
            to,
            units,
            validate,
        };
        let report = cmd.execute();
        writeln!(
            output,
            "{}",
            render(&report, messages, &cfg.app_version(), format)
        )?;
    }
    writeln!(output, "{}", messages.get(keys::APP_EXIT))?;
    Ok(())
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
