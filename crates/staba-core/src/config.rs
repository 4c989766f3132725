//! Blog configuration.
//!
//! The frontend embeds a TOML file at compile time and parses it on startup.
//! Every key has a default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::{
    date::{DEFAULT_DATE_FORMAT, DateFormatter, is_valid_pattern},
    error::{CoreError, Result},
    placeholder::placeholder_image,
    source::DataSource,
};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Where post data comes from.
    #[serde(default)]
    pub data: DataConfig,

    /// Display strings and formats.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Site title, shown in the header and on the placeholder banner.
    #[serde(default = "default_title")]
    pub title: String,

    /// Tagline for the placeholder banner.
    #[serde(default)]
    pub tagline: String,

    /// Browser console log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Sources tried in order.
    #[serde(default = "DataSource::default_chain")]
    pub sources: Vec<DataSource>,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// strftime pattern for post dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Shown when no post matches.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// Shown when a post slug is unknown.
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,

    /// Label of the link back to the list.
    #[serde(default = "default_back_label")]
    pub back_label: String,

    /// Search input placeholder.
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    /// Label of the clear-search button.
    #[serde(default = "default_clear_label")]
    pub clear_label: String,

    /// Accessible label of the list section.
    #[serde(default = "default_list_label")]
    pub list_label: String,

    /// Accessible card link label; `{title}` is replaced by the post title.
    #[serde(default = "default_read_label")]
    pub read_label: String,
}

fn default_title() -> String {
    "STABA BLOG".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_empty_message() -> String {
    "No matching posts.".to_string()
}

fn default_not_found_message() -> String {
    "Post not found.".to_string()
}

fn default_back_label() -> String {
    "← Back to posts".to_string()
}

fn default_search_placeholder() -> String {
    "Search posts".to_string()
}

fn default_clear_label() -> String {
    "Clear".to_string()
}

fn default_list_label() -> String {
    "Posts".to_string()
}

fn default_read_label() -> String {
    "Read {title}".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sources: DataSource::default_chain(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            empty_message: default_empty_message(),
            not_found_message: default_not_found_message(),
            back_label: default_back_label(),
            search_placeholder: default_search_placeholder(),
            clear_label: default_clear_label(),
            list_label: default_list_label(),
            read_label: default_read_label(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.data.sources.is_empty() {
            return Err(CoreError::config("data.sources cannot be empty"));
        }

        if !is_valid_pattern(&self.display.date_format) {
            return Err(CoreError::config(format!(
                "display.date_format is not a valid pattern: {:?}",
                self.display.date_format
            )));
        }

        if !self.display.read_label.contains("{title}") {
            tracing::warn!("display.read_label has no {{title}} placeholder");
        }

        Ok(())
    }

    /// Date formatter for the configured pattern.
    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::new(&self.display.date_format)
    }

    /// Placeholder banner URL for this site.
    pub fn placeholder_image(&self) -> String {
        placeholder_image(&self.site.title, &self.site.tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Test Blog"
tagline = "Seasonal picks"
log_level = "debug"

[data]
sources = [
  { kind = "fetch", url = "data/all.json" },
  { kind = "inline", element_id = "seed" },
]

[display]
date_format = "%Y-%m-%d"
empty_message = "Nothing here."
"#,
        )
        .expect("load config");

        assert_eq!(config.site.title, "Test Blog");
        assert_eq!(config.site.log_level, "debug");
        assert_eq!(
            config.data.sources,
            vec![DataSource::fetch("data/all.json"), DataSource::inline("seed")]
        );
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert_eq!(config.display.empty_message, "Nothing here.");
        assert_eq!(config.display.back_label, "← Back to posts");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str("").expect("load config");
        assert_eq!(config, Config::default());
        assert_eq!(config.site.title, "STABA BLOG");
        assert_eq!(config.data.sources, DataSource::default_chain());
        assert_eq!(config.display.date_format, "%Y/%m/%d");
    }

    #[test]
    fn test_config_validation_empty_sources() {
        let result = Config::from_toml_str("[data]\nsources = []\n");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("sources cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_bad_date_format() {
        let result = Config::from_toml_str("[display]\ndate_format = \"%Q\"\n");
        assert!(result.unwrap_err().to_string().contains("date_format"));
    }

    #[test]
    fn test_config_parse_error() {
        let result = Config::from_toml_str("[site\ntitle = 1");
        assert!(result.unwrap_err().to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_date_formatter_uses_pattern() {
        let config = Config::from_toml_str("[display]\ndate_format = \"%d.%m.%Y\"\n").unwrap();
        assert_eq!(config.date_formatter().format("2024-03-01"), "01.03.2024");
    }
}
