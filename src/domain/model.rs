use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 單一 CI job 觸發設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTrigger {
    pub job: String,
    #[serde(default)]
    pub run_benchmark: bool,
}

impl JobTrigger {
    pub fn new(job: impl Into<String>, run_benchmark: bool) -> Self {
        Self {
            job: job.into(),
            run_benchmark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineParameters {
    pub run_android_navigation_benchmark: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildParameters {
    #[serde(rename = "CIRCLE_JOB")]
    pub circle_job: String,
    #[serde(rename = "BENCHMARK_COMMIT")]
    pub benchmark_commit: Option<String>,
}

/// POST 到 CI 端點的 JSON body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRequest {
    pub parameters: PipelineParameters,
    pub build_parameters: BuildParameters,
}

impl TriggerRequest {
    pub fn new(job: &JobTrigger, commit: Option<&str>) -> Self {
        Self {
            parameters: PipelineParameters {
                run_android_navigation_benchmark: job.run_benchmark,
            },
            build_parameters: BuildParameters {
                circle_job: job.job.clone(),
                benchmark_commit: commit.map(str::to_string),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerResponse {
    #[serde(default)]
    pub build_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriggeredBuild {
    pub job: String,
    pub build_url: Option<String>,
    pub status: u16,
    pub triggered_at: DateTime<Utc>,
}
