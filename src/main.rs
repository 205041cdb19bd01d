use anyhow::Context;
use clap::Parser;
use course_planner::utils::logger;
use course_planner::{CliConfig, LocalStorage, MenuController};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting course-planner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!(
        "Course data: {}, hash buckets: {}",
        config.data_file,
        config.bucket_count
    );

    let controller = MenuController::new(LocalStorage::default(), config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    controller
        .run(stdin.lock(), stdout.lock())
        .context("console session failed")?;

    Ok(())
}
