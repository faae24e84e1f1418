//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Everything the page
//! templates need that is not localized content lives here: the public base
//! URL, organization and App Store identity, fixed asset paths, the Language
//! Registry, and build policy.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! base_url = "https://falsepeak.ch/cluso"  # No trailing slash
//! name = "Cluso"
//! theme_color = "#0078CC"
//!
//! [organization]
//! name = "False Peak"
//! url = "https://falsepeak.ch"
//!
//! [app]
//! app_store_id = "6747049428"
//! affiliate_data = "pt=127841352&ct=web"
//!
//! [build]
//! on_error = "isolate"    # or "fail-fast"
//! parallel = false
//!
//! [[languages]]
//! code = "en"
//! flag = "🇬🇧"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. User values are merged over the stock defaults
//! table by table, so overriding one key keeps every sibling:
//!
//! ```toml
//! [site]
//! base_url = "https://staging.example.com/cluso"
//! ```
//!
//! Arrays are replaced wholesale: a `[[languages]]` list in the user file is
//! the complete registry. Unknown keys are rejected to catch typos early.

use crate::languages::{Language, LanguageRegistry, default_languages};
use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults matching the production deployment. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Public identity of the site.
    pub site: SiteSection,
    /// Publisher shown in metadata and the footer links.
    pub organization: OrganizationConfig,
    /// App Store listing details used by app-install tags and structured data.
    pub app: AppConfig,
    /// Fixed paths of static assets the pages reference.
    pub assets: AssetsConfig,
    /// Build behavior.
    pub build: BuildConfig,
    /// The Language Registry, in output order.
    pub languages: Vec<Language>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            organization: OrganizationConfig::default(),
            app: AppConfig::default(),
            assets: AssetsConfig::default(),
            build: BuildConfig::default(),
            languages: default_languages(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable for URL and path construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.site.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if base.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".into(),
            ));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[languages]] entry is required".into(),
            ));
        }
        let mut seen = HashSet::new();
        for lang in &self.languages {
            if let Err(problem) = naming::check_slug(&lang.code) {
                return Err(ConfigError::Validation(format!(
                    "language code {:?} is not usable as a path: {problem}",
                    lang.code
                )));
            }
            if !seen.insert(lang.code.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "language code {:?} is listed twice",
                    lang.code
                )));
            }
            if lang.flag.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "language {:?} has an empty flag",
                    lang.code
                )));
            }
        }
        Ok(())
    }

    /// The Language Registry described by `[[languages]]`.
    pub fn registry(&self) -> LanguageRegistry {
        LanguageRegistry::new(self.languages.clone())
    }

    /// Absolute URL for a site-relative asset path (`/src/...` → `https://.../src/...`).
    pub fn absolute_asset_url(&self, path: &str) -> String {
        format!("{}{}", self.site.base_url, path)
    }
}

/// Public identity of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Absolute URL the language directories are published under.
    pub base_url: String,
    /// Product name used in titles, `og:site_name`, and structured data.
    pub name: String,
    /// Browser UI color.
    pub theme_color: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://falsepeak.ch/cluso".to_string(),
            name: "Cluso".to_string(),
            theme_color: "#0078CC".to_string(),
        }
    }
}

/// Publisher identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizationConfig {
    pub name: String,
    /// Homepage. Privacy and terms pages live at `{url}/privacy` and `{url}/terms`.
    pub url: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "False Peak".to_string(),
            url: "https://falsepeak.ch".to_string(),
        }
    }
}

/// App Store listing details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub app_store_id: String,
    pub affiliate_data: String,
    pub category: String,
    pub sub_category: String,
    pub operating_system: String,
    pub rating_value: String,
    pub rating_count: String,
    /// Leading entries of the structured-data feature list. The localized
    /// promotion title and rating text are appended per language.
    pub features: Vec<String>,
    /// Target of the `WebSite` search action.
    pub search_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_store_id: "6747049428".to_string(),
            affiliate_data: "pt=127841352&ct=web".to_string(),
            category: "GameApplication".to_string(),
            sub_category: "Party Game".to_string(),
            operating_system: "iOS".to_string(),
            rating_value: "4.9".to_string(),
            rating_count: "150".to_string(),
            features: vec![
                "Social deduction game for 3-20 players".to_string(),
                "Offline play - No internet required".to_string(),
            ],
            search_url: "https://apps.apple.com/search?term=cluso".to_string(),
        }
    }
}

/// Paths of static assets. These are referenced, never produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub icon: String,
    pub stylesheet: String,
    /// Analytics bootstrap, loaded as an opaque module script.
    pub analytics_script: String,
    pub manifest: String,
    /// Character art for the seasonal promotion banner.
    pub promo_image: String,
    /// Directory holding the home page screenshots.
    pub screenshot_dir: String,
    pub app_store_badge: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            icon: "/src/assets/images/Icon.png".to_string(),
            stylesheet: "/src/main.css".to_string(),
            analytics_script: "/src/firebase-init.js".to_string(),
            manifest: "/manifest.json".to_string(),
            promo_image: "/mummy-character.png".to_string(),
            screenshot_dir: "/src/assets/images/Screenshots".to_string(),
            app_store_badge:
                "https://developer.apple.com/assets/elements/badges/download-on-the-app-store.svg"
                    .to_string(),
        }
    }
}

/// What to do when one language fails to render or write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Record the failure, keep building the other languages, fail at the end.
    #[default]
    Isolate,
    /// Stop at the first failure.
    FailFast,
}

/// Build behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub on_error: FailurePolicy,
    /// Render languages concurrently. Each language writes a disjoint directory.
    pub parallel: bool,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Cluso Site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Absolute URL the language directories are published under (no trailing slash).
# Canonical and hreflang URLs are built as {base_url}/{lang}/{page}.
base_url = "https://falsepeak.ch/cluso"
name = "Cluso"
theme_color = "#0078CC"

# ---------------------------------------------------------------------------
# Publisher
# ---------------------------------------------------------------------------
[organization]
name = "False Peak"
# Footer links point at {url}/privacy and {url}/terms.
url = "https://falsepeak.ch"

# ---------------------------------------------------------------------------
# App Store listing (app-install tags and structured data)
# ---------------------------------------------------------------------------
[app]
app_store_id = "6747049428"
affiliate_data = "pt=127841352&ct=web"
category = "GameApplication"
sub_category = "Party Game"
operating_system = "iOS"
rating_value = "4.9"
rating_count = "150"
# The localized promotion title and rating text are appended per language.
features = ["Social deduction game for 3-20 players", "Offline play - No internet required"]
search_url = "https://apps.apple.com/search?term=cluso"

# ---------------------------------------------------------------------------
# Static assets (referenced by path, never generated)
# ---------------------------------------------------------------------------
[assets]
icon = "/src/assets/images/Icon.png"
stylesheet = "/src/main.css"
analytics_script = "/src/firebase-init.js"
manifest = "/manifest.json"
promo_image = "/mummy-character.png"
screenshot_dir = "/src/assets/images/Screenshots"
app_store_badge = "https://developer.apple.com/assets/elements/badges/download-on-the-app-store.svg"

# ---------------------------------------------------------------------------
# Build
# ---------------------------------------------------------------------------
[build]
# "isolate": a failing language is reported and the others still build.
# "fail-fast": stop at the first failure.
on_error = "isolate"
# Render languages concurrently.
parallel = false

# ---------------------------------------------------------------------------
# Languages (order drives the dropdown and hreflang order)
# ---------------------------------------------------------------------------
# A [[languages]] list replaces the whole default list.
# `locale` is optional and defaults to {code}_{CODE} for og:locale.
[[languages]]
code = "en"
flag = "🇬🇧"

[[languages]]
code = "de"
flag = "🇩🇪"

[[languages]]
code = "es"
flag = "🇪🇸"

[[languages]]
code = "ca"
flag = "🇨🇦"

[[languages]]
code = "pt"
flag = "🇵🇹"

[[languages]]
code = "fr"
flag = "🇫🇷"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_site_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.site.base_url, "https://falsepeak.ch/cluso");
        assert_eq!(config.site.name, "Cluso");
        assert_eq!(config.organization.name, "False Peak");
    }

    #[test]
    fn default_config_has_six_languages() {
        let config = SiteConfig::default();
        assert_eq!(config.languages.len(), 6);
        assert_eq!(config.registry().len(), 6);
    }

    #[test]
    fn default_failure_policy_is_isolate() {
        let config = SiteConfig::default();
        assert_eq!(config.build.on_error, FailurePolicy::Isolate);
        assert!(!config.build.parallel);
    }

    #[test]
    fn absolute_asset_url_joins_base() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_asset_url("/src/assets/images/Icon.png"),
            "https://falsepeak.ch/cluso/src/assets/images/Icon.png"
        );
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[site]
theme_color = "#ff0000"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.theme_color, "#ff0000");
        // Siblings keep their defaults
        assert_eq!(config.site.name, "Cluso");
        assert_eq!(config.languages.len(), 6);
    }

    #[test]
    fn parse_failure_policy_kebab_case() {
        let config: SiteConfig = toml::from_str("[build]\non_error = \"fail-fast\"\n").unwrap();
        assert_eq!(config.build.on_error, FailurePolicy::FailFast);
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.base_url, defaults.site.base_url);
        assert_eq!(config.app.features, defaults.app.features);
        assert_eq!(config.assets.app_store_badge, defaults.assets.app_store_badge);
        assert_eq!(config.languages, defaults.languages);
        assert_eq!(config.build.on_error, defaults.build.on_error);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("site.toml")).unwrap();
        assert_eq!(config.site.base_url, "https://falsepeak.ch/cluso");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[site]
base_url = "https://example.com/game"

[[languages]]
code = "xx"
flag = "X"
"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.site.base_url, "https://example.com/game");
        assert_eq!(config.site.name, "Cluso");
        // Arrays replace, they do not append
        assert_eq!(config.languages, vec![Language::new("xx", "X")]);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "[site\nname = ").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[site]
name = "Cluso"
base_url = "https://a.example"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
name = "Other"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let site = merged.get("site").unwrap();
        assert_eq!(site.get("name").unwrap().as_str(), Some("Other"));
        assert_eq!(site.get("base_url").unwrap().as_str(), Some("https://a.example"));
    }

    #[test]
    fn merge_toml_array_replaced() {
        let base: toml::Value = toml::from_str("list = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("list = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("list").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[site]\nbase_ulr = \"x\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[sitez]\nname = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "[build]\nparalel = true\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_base_url_scheme() {
        let mut config = SiteConfig::default();
        config.site.base_url = "falsepeak.ch/cluso".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_base_url_trailing_slash() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://falsepeak.ch/cluso/".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("must not end with '/'"));
    }

    #[test]
    fn validate_languages_not_empty() {
        let mut config = SiteConfig::default();
        config.languages.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_duplicate_language() {
        let mut config = SiteConfig::default();
        config.languages.push(Language::new("en", "E"));
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("listed twice"));
    }

    #[test]
    fn validate_language_code_is_path_safe() {
        let mut config = SiteConfig::default();
        config.languages = vec![Language::new("../en", "E")];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_flag() {
        let mut config = SiteConfig::default();
        config.languages = vec![Language::new("en", " ")];
        assert!(config.validate().is_err());
    }
}
