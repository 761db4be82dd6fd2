//! Extractor configuration.

use std::path::Path;

use fx_props::PropertyResolver;
use fx_xml::{DEFAULT_MAX_PROPERTIES, NodeOptions};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// One alias table entry: native key and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub key: String,
    pub label: String,
}

/// Extraction settings, usually loaded from a YAML file.
///
/// ```yaml
/// max_properties_per_node: 100
/// include_graphics: true
/// extract_properties: true
/// aliases:
///   - { key: PROP_MS_0, label: Temperature }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub max_properties_per_node: usize,
    pub include_graphics: bool,
    pub extract_properties: bool,
    pub aliases: Vec<AliasEntry>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_properties_per_node: DEFAULT_MAX_PROPERTIES,
            include_graphics: true,
            extract_properties: true,
            aliases: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    /// Load from `path` if given, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_properties_per_node == 0 && self.extract_properties {
            return Err(AppError::Config(
                "max_properties_per_node must be positive; set extract_properties: false to skip properties"
                    .to_string(),
            ));
        }
        if let Some(entry) = self
            .aliases
            .iter()
            .find(|a| a.key.trim().is_empty() || a.label.trim().is_empty())
        {
            return Err(AppError::Config(format!(
                "Alias entry has an empty key or label: {:?}",
                entry
            )));
        }
        Ok(())
    }

    /// Alias table as a resolver, in configured order.
    pub fn resolver(&self) -> PropertyResolver {
        self.aliases
            .iter()
            .map(|a| (a.key.clone(), a.label.clone()))
            .collect()
    }

    /// Node parsing options for this configuration.
    pub fn node_options<'a>(&self, labels: Option<&'a PropertyResolver>) -> NodeOptions<'a> {
        NodeOptions {
            max_properties_per_node: self.max_properties_per_node,
            include_graphics: self.include_graphics,
            extract_properties: self.extract_properties,
            labels: labels.filter(|l| !l.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = ExtractorConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert_eq!(config.max_properties_per_node, 100);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = ExtractorConfig::from_yaml(
            "max_properties_per_node: 10\naliases:\n  - { key: PROP_MS_0, label: Temperature }\n",
        )
        .unwrap();
        assert_eq!(config.max_properties_per_node, 10);
        assert!(config.include_graphics);
        assert_eq!(config.resolver().label_for("PROP_MS_0"), Some("Temperature"));
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            ExtractorConfig::from_yaml("max_properties_per_node: 0"),
            Err(AppError::Config(_))
        ));
        assert!(ExtractorConfig::from_yaml("max_properties_per_node: 0\nextract_properties: false").is_ok());
        assert!(matches!(
            ExtractorConfig::from_yaml("max_props: 5"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            ExtractorConfig::from_yaml("aliases: [{ key: '', label: T }]"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_config_read() {
        let err = ExtractorConfig::load(Path::new("/nonexistent/fx.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
        assert_eq!(
            ExtractorConfig::load_or_default(None).unwrap(),
            ExtractorConfig::default()
        );
    }

    #[test]
    fn empty_alias_table_is_not_used_for_labels() {
        let config = ExtractorConfig::default();
        let resolver = config.resolver();
        assert!(config.node_options(Some(&resolver)).labels.is_none());
    }
}
