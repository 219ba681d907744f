//! Primary model lookup from the OpenClaw JSON configuration.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{DashboardError, Result};

/// Reported when the configured model cannot be determined.
pub const UNKNOWN_MODEL: &str = "unknown";

/// Extract `agents.defaults.model.primary` from a parsed config document.
pub fn primary_model(config: &Value) -> Option<&str> {
    config
        .get("agents")?
        .get("defaults")?
        .get("model")?
        .get("primary")?
        .as_str()
}

/// Read the config file and extract the primary model, if present.
pub fn load_primary_model(path: &Path) -> Result<Option<String>> {
    let raw = fs::read_to_string(path).map_err(|source| DashboardError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Value = serde_json::from_str(&raw)?;

    Ok(primary_model(&config).map(str::to_string))
}

/// Primary model name, or [`UNKNOWN_MODEL`] on any failure.
pub fn resolve_model(path: &Path) -> String {
    match load_primary_model(path) {
        Ok(Some(model)) => model,
        Ok(None) => {
            debug!(path = %path.display(), "No agents.defaults.model.primary in config");
            UNKNOWN_MODEL.to_string()
        }
        Err(e) => {
            debug!(error = %e, "Model lookup failed");
            UNKNOWN_MODEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn nested_lookup_finds_primary() {
        let config = json!({
            "agents": { "defaults": { "model": { "primary": "anthropic/claude-sonnet-4-5" } } }
        });
        assert_eq!(primary_model(&config), Some("anthropic/claude-sonnet-4-5"));
    }

    #[test]
    fn nested_lookup_tolerates_gaps() {
        assert_eq!(primary_model(&json!({})), None);
        assert_eq!(primary_model(&json!({ "agents": { "defaults": {} } })), None);
        assert_eq!(primary_model(&json!({ "agents": "flat" })), None);
        assert_eq!(
            primary_model(&json!({ "agents": { "defaults": { "model": { "primary": 7 } } } })),
            None
        );
    }

    #[test]
    fn resolve_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("openclaw.json");
        fs::write(
            &path,
            r#"{"agents":{"defaults":{"model":{"primary":"X"}}}}"#,
        )
        .unwrap();

        assert_eq!(resolve_model(&path), "X");
    }

    #[test]
    fn resolve_missing_file_is_unknown() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(resolve_model(&tmp.path().join("absent.json")), UNKNOWN_MODEL);
    }

    #[test]
    fn resolve_invalid_json_is_unknown() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("openclaw.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(resolve_model(&path), UNKNOWN_MODEL);
        assert!(matches!(
            load_primary_model(&path),
            Err(DashboardError::Json(_))
        ));
    }
}
