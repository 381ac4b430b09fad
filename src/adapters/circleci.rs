use crate::domain::model::{JobTrigger, TriggerRequest, TriggerResponse, TriggeredBuild};
use crate::domain::ports::CiClient;
use crate::utils::error::{Result, TriggerError};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

pub const DEFAULT_ENDPOINT: &str =
    "https://circleci.com/api/v1.1/project/github/mapbox/mobile-metrics/tree/master";

/// CircleCI v1.1 job trigger API client
///
/// 以 token 作為 basic auth 的使用者名稱（密碼為空），沒有重試也沒有逾時設定。
pub struct CircleCiClient {
    endpoint: String,
    token: String,
    client: Client,
}

impl CircleCiClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    fn is_accepted(status: StatusCode) -> bool {
        status == StatusCode::OK || status == StatusCode::CREATED
    }

    fn failure_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<TriggerResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            })
    }
}

#[async_trait::async_trait]
impl CiClient for CircleCiClient {
    async fn trigger(&self, job: &JobTrigger, commit: Option<&str>) -> Result<TriggeredBuild> {
        let request = TriggerRequest::new(job, commit);

        tracing::debug!("POST {} for job {}", self.endpoint, job.job);
        tracing::debug!("Payload: {}", serde_json::to_string(&request)?);

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.token, Some(""))
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("API response status: {}", status);

        if !Self::is_accepted(status) {
            return Err(TriggerError::RemoteCallFailed {
                job: job.job.clone(),
                status: status.as_u16(),
                message: Self::failure_message(status, &body),
            });
        }

        let parsed = match serde_json::from_str::<TriggerResponse>(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("⚠️ Could not parse trigger response for {}: {}", job.job, e);
                TriggerResponse::default()
            }
        };

        Ok(TriggeredBuild {
            job: job.job.clone(),
            build_url: parsed.build_url,
            status: status.as_u16(),
            triggered_at: chrono::Utc::now(),
        })
    }
}
