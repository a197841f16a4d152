use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints decoded queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key<TAB>value` line per pair.
    #[default]
    Plain,
    /// A JSON document with the raw query, pairs and any decode error.
    Json,
}

/// Global configuration loaded from `~/.config/urlquery/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlqueryConfig {
    /// Treat any undecodable segment as a hard error instead of a warning.
    #[serde(default)]
    pub strict: bool,
    /// Default output format for `decode`.
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlquery")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults when
/// no file exists.
pub fn load() -> Result<UrlqueryConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(UrlqueryConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<UrlqueryConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Write the default configuration to `path`. Refuses to overwrite an
/// existing file unless `force` is set.
pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let toml = toml::to_string_pretty(&UrlqueryConfig::default())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlqueryConfig::default();
        assert!(!cfg.strict);
        assert_eq!(cfg.output, OutputFormat::Plain);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlqueryConfig {
            strict: true,
            output: OutputFormat::Json,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlqueryConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: UrlqueryConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, UrlqueryConfig::default());

        let cfg: UrlqueryConfig = toml::from_str(r#"output = "json""#).unwrap();
        assert!(!cfg.strict);
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn config_toml_rejects_unknown_output() {
        assert!(toml::from_str::<UrlqueryConfig>(r#"output = "yaml""#).is_err());
    }

    #[test]
    fn write_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default(&path, false).unwrap();
        assert_eq!(load_from(&path).unwrap(), UrlqueryConfig::default());

        assert!(write_default(&path, false).is_err());
        write_default(&path, true).unwrap();
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "strict = \"maybe\"").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse"));
    }
}
