use crate::domain::model::JobTrigger;
use crate::utils::error::{Result, TriggerError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PUBLISH_BRANCH: &str = "master";

/// 依分支決定要觸發哪些 job
///
/// 只有 `publish_branch` 上的提交會發佈結果，其它分支（或沒有分支資訊時）
/// 觸發開發用的 job，結果只能在 CI 上手動查看。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerPlan {
    #[serde(default = "default_publish_branch")]
    pub publish_branch: String,
    pub publish: Vec<JobTrigger>,
    pub development: Vec<JobTrigger>,
}

fn default_publish_branch() -> String {
    DEFAULT_PUBLISH_BRANCH.to_string()
}

impl Default for TriggerPlan {
    fn default() -> Self {
        Self {
            publish_branch: default_publish_branch(),
            publish: vec![
                JobTrigger::new("android-navigation-benchmark", true),
                JobTrigger::new("android-navigation-code-coverage", false),
                JobTrigger::new("android-navigation-binary-size", false),
            ],
            development: vec![
                JobTrigger::new("android-navigation-benchmark", false),
                JobTrigger::new("android-navigation-code-coverage-ci", false),
                JobTrigger::new("android-navigation-binary-size-ci", false),
            ],
        }
    }
}

impl TriggerPlan {
    pub fn publishes(&self, branch: Option<&str>) -> bool {
        branch == Some(self.publish_branch.as_str())
    }

    pub fn jobs_for_branch(&self, branch: Option<&str>) -> &[JobTrigger] {
        if self.publishes(branch) {
            &self.publish
        } else {
            &self.development
        }
    }
}

impl Validate for TriggerPlan {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("publish_branch", &self.publish_branch)?;

        for (field, jobs) in [("publish", &self.publish), ("development", &self.development)] {
            if jobs.is_empty() {
                return Err(TriggerError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: "[]".to_string(),
                    reason: "At least one job is required".to_string(),
                });
            }
            for job in jobs {
                validate_non_empty_string(&format!("{}.job", field), &job.job)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(jobs: &[JobTrigger]) -> Vec<&str> {
        jobs.iter().map(|j| j.job.as_str()).collect()
    }

    #[test]
    fn test_master_publishes_results() {
        let plan = TriggerPlan::default();
        let jobs = plan.jobs_for_branch(Some("master"));

        assert!(plan.publishes(Some("master")));
        assert_eq!(
            names(jobs),
            vec![
                "android-navigation-benchmark",
                "android-navigation-code-coverage",
                "android-navigation-binary-size",
            ]
        );
        assert_eq!(
            jobs.iter().map(|j| j.run_benchmark).collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_feature_branch_uses_ci_jobs() {
        let plan = TriggerPlan::default();
        let jobs = plan.jobs_for_branch(Some("feature/route-refresh"));

        assert!(!plan.publishes(Some("feature/route-refresh")));
        assert_eq!(
            names(jobs),
            vec![
                "android-navigation-benchmark",
                "android-navigation-code-coverage-ci",
                "android-navigation-binary-size-ci",
            ]
        );
        assert!(jobs.iter().all(|j| !j.run_benchmark));
    }

    #[test]
    fn test_missing_branch_is_not_published() {
        let plan = TriggerPlan::default();
        assert!(!plan.publishes(None));
        assert_eq!(plan.jobs_for_branch(None), plan.development.as_slice());
    }

    #[test]
    fn test_branch_match_is_exact() {
        let plan = TriggerPlan::default();
        assert!(!plan.publishes(Some("Master")));
        assert!(!plan.publishes(Some("master ")));
        assert!(!plan.publishes(Some("")));
    }

    #[test]
    fn test_validate_rejects_empty_lists_and_names() {
        assert!(TriggerPlan::default().validate().is_ok());

        let mut plan = TriggerPlan::default();
        plan.publish.clear();
        assert!(plan.validate().is_err());

        let mut plan = TriggerPlan::default();
        plan.development.push(JobTrigger::new(" ", false));
        assert!(plan.validate().is_err());

        let mut plan = TriggerPlan::default();
        plan.publish_branch = String::new();
        assert!(plan.validate().is_err());
    }
}
