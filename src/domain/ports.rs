use crate::domain::model::{JobTrigger, TriggeredBuild};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 觸發遠端 CI job 的介面
#[async_trait]
pub trait CiClient: Send + Sync {
    async fn trigger(&self, job: &JobTrigger, commit: Option<&str>) -> Result<TriggeredBuild>;
}
