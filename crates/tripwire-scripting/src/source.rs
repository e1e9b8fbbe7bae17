//! Script source locations (inline or file-based)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a trigger script's code comes from.
///
/// File-based sources are the primary form; inline sources let hosts embed
/// short triggers directly in their own configuration. Either way the script
/// is loaded into a fresh evaluator on every invocation; nothing is shared
/// across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptSource {
    /// Inline script code
    Inline {
        /// Script code
        code: String,
        /// Optional name for logging
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// File-based script
    File {
        /// Path to script file
        path: PathBuf,
    },
}

impl ScriptSource {
    /// Create inline script source
    pub fn inline<S: Into<String>>(code: S) -> Self {
        Self::Inline {
            code: code.into(),
            name: None,
        }
    }

    /// Create inline script with name
    pub fn inline_named<S: Into<String>, N: Into<String>>(code: S, name: N) -> Self {
        Self::Inline {
            code: code.into(),
            name: Some(name.into()),
        }
    }

    /// Create file-based script source
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self::File { path: path.into() }
    }

    /// Get a descriptive name for this script
    pub fn name(&self) -> String {
        match self {
            Self::Inline { name, .. } => name.clone().unwrap_or_else(|| "inline".to_string()),
            Self::File { path } => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_names() {
        assert_eq!(ScriptSource::inline("1 + 1").name(), "inline");
        assert_eq!(ScriptSource::inline_named("1 + 1", "sum").name(), "sum");
        assert_eq!(
            ScriptSource::file("triggers/deploy.rhai").name(),
            "deploy.rhai"
        );
    }

    #[test]
    fn test_deserialize_untagged_forms() {
        let file: ScriptSource = serde_json::from_str(r#"{"path": "t.rhai"}"#).unwrap();
        assert!(matches!(file, ScriptSource::File { .. }));

        let inline: ScriptSource = serde_json::from_str(r#"{"code": "40 + 2"}"#).unwrap();
        assert!(matches!(inline, ScriptSource::Inline { .. }));
    }
}
