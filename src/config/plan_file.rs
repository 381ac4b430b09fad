use crate::domain::plan::TriggerPlan;
use crate::utils::error::{Result, TriggerError};
use regex::{Captures, Regex};
use std::path::Path;

/// 從 TOML 檔案載入 job plan
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<TriggerPlan> {
    let content = std::fs::read_to_string(&path).map_err(TriggerError::IoError)?;
    parse_plan(&content)
}

/// 從 TOML 字串解析 job plan
pub fn parse_plan(content: &str) -> Result<TriggerPlan> {
    let processed_content = substitute_env_vars(content)?;
    Ok(toml::from_str(&processed_content)?)
}

/// 替換環境變數 (例如 ${CIRCLE_PROJECT_REPONAME})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TriggerError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
