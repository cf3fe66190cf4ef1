use std::process::ExitCode;

use clap::Parser;
use unit_conversion_toolbox::{config, logging, messages::{self, Messages}, ui_cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI를 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::from(2)
        }
    }
}

fn try_run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = ui_cli::Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log_level);

    let lang = messages::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let messages = Messages::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    Ok(ui_cli::run(&cli, &cfg, &messages)?)
}
