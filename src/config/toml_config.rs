use crate::core::assets::AssetConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub asset: AssetConfig,
    pub server: ServerSection,
    pub content: ContentSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub output_path: String,
    /// Relative to `output_path`.
    pub static_dir: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            output_path: "./site".to_string(),
            static_dir: "static/img".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub addr: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// TOML file with portfolio records. Built-in content when unset.
    pub path: Option<String>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn content_path(&self) -> Option<&str> {
        self.content.path.as_deref()
    }
}

impl ConfigProvider for SiteConfig {
    fn output_path(&self) -> &str {
        &self.site.output_path
    }

    fn static_dir(&self) -> &str {
        &self.site.static_dir
    }

    fn server_addr(&self) -> &str {
        &self.server.addr
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_path("site.output_path", &self.site.output_path)?;
        validate_path("site.static_dir", &self.site.static_dir)?;
        validate_non_empty_string("server.addr", &self.server.addr)?;
        if let Some(path) = &self.content.path {
            validate_file_extensions("content.path", std::slice::from_ref(path), &["toml"])?;
        }
        self.asset.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[site]
output_path = "./public"

[asset]
base_url = "https://images.example.com"
delay_ms = 0
rotation = ["rust", "systems programming"]

[server]
addr = "0.0.0.0:3000"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.static_dir(), "static/img");
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.asset.rotation, vec!["rust", "systems programming"]);
        assert_eq!(config.asset.fallbacks.len(), 5);
        assert_eq!(config.asset.delay(), std::time::Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.asset.delay_ms, 100);
        assert!(config.content_path().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOLIO_TEST_IMAGE_HOST", "https://cdn.example.com");

        let toml_content = r#"
[asset]
base_url = "${FOLIO_TEST_IMAGE_HOST}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.asset.base_url, "https://cdn.example.com");

        std::env::remove_var("FOLIO_TEST_IMAGE_HOST");
    }

    #[test]
    fn test_unknown_env_var_is_left_alone() {
        let config = SiteConfig::from_toml_str(
            r#"
[server]
addr = "${FOLIO_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        assert_eq!(config.server.addr, "${FOLIO_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = SiteConfig::from_toml_str(
            r#"
[asset]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(invalid_url.validate().is_err());

        let empty_rotation = SiteConfig::from_toml_str(
            r#"
[asset]
rotation = []
"#,
        )
        .unwrap();
        assert!(matches!(
            empty_rotation.validate(),
            Err(SiteError::MissingConfigError { .. })
        ));

        let wrong_content = SiteConfig::from_toml_str(
            r#"
[content]
path = "portfolio.json"
"#,
        )
        .unwrap();
        assert!(wrong_content.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[site\noutput_path =").unwrap_err();
        assert!(matches!(err, SiteError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
output_path = "./from-file"

[server]
addr = "localhost:9000"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "./from-file");
        assert_eq!(config.server_addr(), "localhost:9000");
    }
}
