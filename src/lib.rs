pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::circleci::CircleCiClient;
pub use config::TriggerConfig;
pub use core::{trigger::TriggerEngine, JobTrigger, TriggerPlan, TriggeredBuild};
pub use utils::error::{Result, TriggerError};

use utils::validation::Validate;

/// 驗證設定、載入 plan，並依序觸發目前分支的 job
///
/// `dry_run` 時只列出 job，不會呼叫 API，回傳空的結果。
pub async fn run(config: &TriggerConfig) -> Result<Vec<TriggeredBuild>> {
    config.validate()?;
    let plan = config.load_plan()?;

    let client = CircleCiClient::new(config.endpoint.clone(), config.token()?);
    let engine = TriggerEngine::with_plan(client, plan);

    if config.dry_run {
        for job in engine.plan(config.branch()) {
            println!(
                "Would start {} (run_benchmark: {})",
                job.job, job.run_benchmark
            );
        }
        tracing::info!("🧪 Dry run, no jobs were triggered");
        return Ok(Vec::new());
    }

    engine.run(config.branch(), config.commit()).await
}
