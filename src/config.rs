//! YAML configuration file support for transeval.
//!
//! Every section is optional and falls back to the same defaults as
//! [`EvalConfig::default`](crate::EvalConfig). Only `version` is required.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # transeval configuration
//! version: "1.0"
//! name: "nightly regression"
//!
//! lexical:
//!   clip_counts: false
//!
//! semantic:
//!   mode: "auto"          # auto | tfidf | jaccard
//!   smooth_idf: true
//!   sublinear_tf: false
//!
//! tokenizer:
//!   normalize_unicode: false
//!
//! evaluator:
//!   use_parallel: true
//!   detect_language: false
//! ```

use std::fs;
use std::path::Path;

use lexical::PrecisionConfig;
use semantic::{SimilarityConfig, SimilarityMode, TfIdfConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::EvalConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EvalFileConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub lexical: LexicalYamlConfig,

    #[serde(default)]
    pub semantic: SemanticYamlConfig,

    #[serde(default)]
    pub tokenizer: TokenizerYamlConfig,

    #[serde(default)]
    pub evaluator: EvaluatorYamlConfig,
}

impl EvalFileConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EvalFileConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.semantic.validate()?;
        Ok(())
    }

    /// Build the runtime configuration consumed by [`Evaluator`](crate::Evaluator).
    pub fn into_eval_config(self) -> Result<EvalConfig, ConfigLoadError> {
        Ok(EvalConfig {
            precision: PrecisionConfig::new().with_clip_counts(self.lexical.clip_counts),
            similarity: SimilarityConfig {
                mode: self.semantic.parsed_mode()?,
                tfidf: TfIdfConfig {
                    smooth_idf: self.semantic.smooth_idf,
                    sublinear_tf: self.semantic.sublinear_tf,
                },
            },
            normalize_unicode: self.tokenizer.normalize_unicode,
            use_parallel: self.evaluator.use_parallel,
            detect_language: self.evaluator.detect_language,
        })
    }
}

impl Default for EvalFileConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            lexical: LexicalYamlConfig::default(),
            semantic: SemanticYamlConfig::default(),
            tokenizer: TokenizerYamlConfig::default(),
            evaluator: EvaluatorYamlConfig::default(),
        }
    }
}

/// Precision-brevity scorer YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexicalYamlConfig {
    #[serde(default)]
    pub clip_counts: bool,
}

/// Similarity strategy YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticYamlConfig {
    #[serde(default = "default_mode")]
    pub mode: String,

    #[serde(default = "true_value")]
    pub smooth_idf: bool,

    #[serde(default)]
    pub sublinear_tf: bool,
}

impl SemanticYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.parsed_mode().map(|_| ())
    }

    fn parsed_mode(&self) -> Result<SimilarityMode, ConfigLoadError> {
        self.mode
            .parse::<SimilarityMode>()
            .map_err(|err| ConfigLoadError::Validation(format!("semantic.mode: {err}")))
    }
}

impl Default for SemanticYamlConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Tokenizer YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizerYamlConfig {
    #[serde(default)]
    pub normalize_unicode: bool,
}

/// Evaluator YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluatorYamlConfig {
    #[serde(default)]
    pub use_parallel: bool,

    #[serde(default)]
    pub detect_language: bool,
}

fn default_mode() -> String {
    SimilarityMode::default().as_str().to_string()
}
fn true_value() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
lexical:
  clip_counts: true
semantic:
  mode: "jaccard"
"#;

        let config = EvalFileConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert!(config.lexical.clip_counts);
        assert_eq!(config.semantic.mode, "jaccard");
        assert!(config.semantic.smooth_idf);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
evaluator:
  use_parallel: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = EvalFileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert!(config.evaluator.use_parallel);
    }

    #[test]
    fn test_missing_file() {
        let result = EvalFileConfig::from_file("/definitely/not/here/transeval.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = EvalFileConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.into_eval_config().unwrap(), EvalConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = EvalFileConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_missing_version_is_parse_error() {
        let result = EvalFileConfig::from_yaml("semantic:\n  mode: auto\n");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_semantic_validation() {
        let yaml = r#"
version: "1.0"
semantic:
  mode: "bert"
"#;

        let result = EvalFileConfig::from_yaml(yaml);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("semantic.mode"));
        assert!(message.contains("bert"));
    }

    #[test]
    fn test_full_yaml_into_eval_config() {
        let yaml = r#"
version: "1.0"
name: "production"
lexical:
  clip_counts: true

semantic:
  mode: "tfidf"
  smooth_idf: false
  sublinear_tf: true

tokenizer:
  normalize_unicode: true

evaluator:
  use_parallel: true
  detect_language: true
"#;

        let config = EvalFileConfig::from_yaml(yaml).unwrap().into_eval_config().unwrap();

        assert!(config.precision.clip_counts);
        assert_eq!(config.similarity.mode, SimilarityMode::Tfidf);
        assert!(!config.similarity.tfidf.smooth_idf);
        assert!(config.similarity.tfidf.sublinear_tf);
        assert!(config.normalize_unicode);
        assert!(config.use_parallel);
        assert!(config.detect_language);
    }
}
