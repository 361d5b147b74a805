//! Generator configuration and the optional configuration file.

use crate::documentation::ResponseDocumentation;
use crate::openapi_builder::Info;
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Computes an automatic tag from the non-empty segments of a route path.
pub type AutomaticTagGenerator = Arc<dyn Fn(&[&str]) -> Option<String> + Send + Sync>;

/// Tag every operation with the first segment of its path.
pub fn first_segment_tag() -> AutomaticTagGenerator {
    Arc::new(|segments: &[&str]| segments.first().map(|s| s.to_string()))
}

/// Settings for one paths generation run.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// Base URL the documentation UI is served under
    pub swagger_url: String,
    /// Whether the UI forwards the root path `/` to itself
    pub forward_root: bool,
    /// Response added as "401" to protected operations that do not document one
    pub default_unauthorized_response: Option<ResponseDocumentation>,
    /// Security scheme protected operations reference unless they name their own
    pub default_security_scheme_name: Option<String>,
    pub automatic_tag_generator: Option<AutomaticTagGenerator>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            swagger_url: "swagger-ui".to_string(),
            forward_root: false,
            default_unauthorized_response: None,
            default_security_scheme_name: None,
            automatic_tag_generator: None,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("swagger_url", &self.swagger_url)
            .field("forward_root", &self.forward_root)
            .field("default_unauthorized_response", &self.default_unauthorized_response)
            .field("default_security_scheme_name", &self.default_security_scheme_name)
            .field("automatic_tag_generator", &self.automatic_tag_generator.is_some())
            .finish()
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swagger_url(mut self, swagger_url: impl Into<String>) -> Self {
        self.swagger_url = swagger_url.into();
        self
    }

    pub fn with_forward_root(mut self, forward_root: bool) -> Self {
        self.forward_root = forward_root;
        self
    }

    pub fn with_default_unauthorized_response(mut self, response: ResponseDocumentation) -> Self {
        self.default_unauthorized_response = Some(response);
        self
    }

    pub fn with_default_security_scheme_name(mut self, name: impl Into<String>) -> Self {
        self.default_security_scheme_name = Some(name.into());
        self
    }

    pub fn with_automatic_tag_generator(mut self, generator: AutomaticTagGenerator) -> Self {
        self.automatic_tag_generator = Some(generator);
        self
    }
}

/// Contents of a YAML or JSON configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    pub swagger_url: Option<String>,
    pub forward_root: Option<bool>,
    pub default_unauthorized_response: Option<ResponseDocumentation>,
    pub default_security_scheme_name: Option<String>,
    /// Tag operations with the first segment of their path
    pub automatic_tags: bool,
    pub info: Option<Info>,
}

impl ConfigFile {
    /// Apply the file's settings on top of the defaults
    pub fn into_generator_config(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new();
        if let Some(swagger_url) = self.swagger_url {
            config = config.with_swagger_url(swagger_url);
        }
        if let Some(forward_root) = self.forward_root {
            config = config.with_forward_root(forward_root);
        }
        config.default_unauthorized_response = self.default_unauthorized_response;
        config.default_security_scheme_name = self.default_security_scheme_name;
        if self.automatic_tags {
            config = config.with_automatic_tag_generator(first_segment_tag());
        }
        config
    }
}

/// Load a configuration file, parsed as JSON for `.json` files and YAML otherwise.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    debug!("Loading configuration file: {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = if crate::loader::is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
    };

    Ok(config)
}
