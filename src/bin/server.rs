//! 단위 변환 검증 웹 서비스 진입점.

use std::path::PathBuf;

use unit_conversion_toolbox::{config, logging, messages::{self, Messages}, web};

#[tokio::main]
async fn main() {
    if let Err(err) = try_run().await {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

async fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    // 설정 파일 경로: 첫 번째 인자 또는 config.toml
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let cfg = config::load_or_default(&path)?;
    logging::init(&cfg.log_level);

    let lang = messages::resolve_language(None, Some(cfg.language.as_str()));
    let messages = Messages::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    web::serve(&cfg, messages).await?;
    Ok(())
}
