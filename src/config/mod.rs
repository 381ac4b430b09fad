pub mod plan_file;

use crate::adapters::circleci::DEFAULT_ENDPOINT;
use crate::domain::plan::TriggerPlan;
use crate::utils::error::{Result, TriggerError};
use crate::utils::validation::{validate_required_field, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const TOKEN_ENV: &str = "MOBILE_METRICS_TOKEN";

#[derive(Clone, Serialize, Deserialize, Parser)]
#[command(name = "metrics-trigger")]
#[command(about = "Trigger mobile-metrics CI jobs for the current branch")]
pub struct TriggerConfig {
    #[arg(long, env = "MOBILE_METRICS_TOKEN", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub token: Option<String>,

    #[arg(long, env = "CIRCLE_SHA1")]
    pub commit: Option<String>,

    #[arg(long, env = "CIRCLE_BRANCH")]
    pub branch: Option<String>,

    #[arg(long, env = "METRICS_TRIGGER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, env = "METRICS_TRIGGER_PLAN", help = "TOML file overriding the built-in job plan")]
    pub plan: Option<PathBuf>,

    #[arg(long, help = "Print the jobs that would be triggered without calling the API")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl fmt::Debug for TriggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("commit", &self.commit)
            .field("branch", &self.branch)
            .field("endpoint", &self.endpoint)
            .field("plan", &self.plan)
            .field("dry_run", &self.dry_run)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl TriggerConfig {
    /// 空字串視同未設定
    pub fn token(&self) -> Result<&str> {
        let token = self.token.as_deref().filter(|t| !t.is_empty());
        validate_required_field(TOKEN_ENV, &token).copied()
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    pub fn load_plan(&self) -> Result<TriggerPlan> {
        let plan = match &self.plan {
            Some(path) => {
                tracing::info!("📋 Loading job plan from {}", path.display());
                plan_file::load_plan(path)?
            }
            None => TriggerPlan::default(),
        };
        plan.validate()?;
        Ok(plan)
    }
}

impl Validate for TriggerConfig {
    fn validate(&self) -> Result<()> {
        self.token()?;
        validate_url("endpoint", &self.endpoint)?;

        if let Some(path) = &self.plan {
            if path.as_os_str().is_empty() {
                return Err(TriggerError::InvalidConfigValueError {
                    field: "plan".to_string(),
                    value: String::new(),
                    reason: "Path cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>) -> TriggerConfig {
        TriggerConfig {
            token: token.map(str::to_string),
            commit: Some("abc123".to_string()),
            branch: Some("master".to_string()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            plan: None,
            dry_run: false,
            verbose: false,
        }
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let err = config(None).validate().unwrap_err();
        assert!(matches!(err, TriggerError::MissingConfigError { ref field } if field == TOKEN_ENV));
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        assert!(matches!(
            config(Some("")).validate(),
            Err(TriggerError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_valid_config() {
        let cfg = config(Some("secret"));
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.token().unwrap(), "secret");
        assert_eq!(cfg.branch(), Some("master"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut cfg = config(Some("secret"));
        cfg.endpoint = "not a url".to_string();
        assert!(matches!(
            cfg.validate(),
            Err(TriggerError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", config(Some("super-secret")));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_flags_override_environment() {
        let cfg = TriggerConfig::try_parse_from([
            "metrics-trigger",
            "--token",
            "t0k3n",
            "--branch",
            "release-2.0",
            "--commit",
            "cafebabe",
            "--endpoint",
            "http://127.0.0.1:9000/trigger",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cfg.token().unwrap(), "t0k3n");
        assert_eq!(cfg.branch(), Some("release-2.0"));
        assert_eq!(cfg.commit(), Some("cafebabe"));
        assert_eq!(cfg.endpoint, "http://127.0.0.1:9000/trigger");
        assert!(cfg.dry_run);
    }

    #[test]
    fn test_default_plan_without_file() {
        let plan = config(Some("secret")).load_plan().unwrap();
        assert_eq!(plan, TriggerPlan::default());
    }
}
