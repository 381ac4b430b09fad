use crate::core::{CiClient, JobTrigger, TriggerPlan, TriggeredBuild};
use crate::utils::error::Result;

pub struct TriggerEngine<C: CiClient> {
    client: C,
    plan: TriggerPlan,
}

impl<C: CiClient> TriggerEngine<C> {
    pub fn new(client: C) -> Self {
        Self::with_plan(client, TriggerPlan::default())
    }

    pub fn with_plan(client: C, plan: TriggerPlan) -> Self {
        Self { client, plan }
    }

    pub fn plan(&self, branch: Option<&str>) -> &[JobTrigger] {
        self.plan.jobs_for_branch(branch)
    }

    /// 依序觸發分支對應的 job，第一個失敗就中止
    pub async fn run(&self, branch: Option<&str>, commit: Option<&str>) -> Result<Vec<TriggeredBuild>> {
        let jobs = self.plan(branch);
        tracing::info!(
            "Triggering {} jobs for branch {} (publish results: {})",
            jobs.len(),
            branch.unwrap_or("<unset>"),
            self.plan.publishes(branch)
        );

        let mut builds = Vec::with_capacity(jobs.len());
        for job in jobs {
            let build = self.client.trigger(job, commit).await?;

            println!(
                "Started {}: {}",
                build.job,
                build.build_url.as_deref().unwrap_or("<no build url>")
            );
            tracing::debug!("{} accepted with status {} at {}", build.job, build.status, build.triggered_at);

            builds.push(build);
        }

        Ok(builds)
    }
}
