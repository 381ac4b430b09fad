use clap::Parser;
use metrics_trigger::utils::logger;
use metrics_trigger::TriggerConfig;

#[tokio::main]
async fn main() {
    let config = TriggerConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting metrics-trigger");
    tracing::debug!("CLI config: {:?}", config);

    match metrics_trigger::run(&config).await {
        Ok(builds) => {
            if !builds.is_empty() {
                tracing::info!("✅ Triggered {} jobs", builds.len());
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Trigger failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
