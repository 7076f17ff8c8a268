//! vista.toml handling

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use vista_app::PageConfig;

pub const CONFIG_FILE: &str = "vista.toml";

/// Load the configuration from an explicit file, or from `vista.toml` in the
/// current directory when none is given.
///
/// An explicit path must exist; a missing implicit file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    match path {
        Some(path) => load_from_dir(path),
        None => {
            let implicit = Path::new(CONFIG_FILE);
            if implicit.exists() {
                load_from_dir(implicit)
            } else {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(PageConfig::default())
            }
        }
    }
}

/// Load configuration from a file or a directory containing `vista.toml`
///
/// A relative `[theme] store` path is resolved against the directory of the
/// configuration file.
pub fn load_from_dir(path: &Path) -> Result<PageConfig> {
    let config_path = config_path(path);

    if !config_path.exists() {
        anyhow::bail!(
            "No {CONFIG_FILE} found at {}. Run `vista init` to create one.",
            path.display()
        );
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let mut config: PageConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    if let (Some(store), Some(base)) = (config.theme.store.as_mut(), config_path.parent()) {
        if store.is_relative() {
            *store = base.join(&*store);
        }
    }

    Ok(config)
}

fn config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Serialize to TOML string
pub fn to_toml(config: &PageConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

/// Write the default configuration into `dir`, refusing to overwrite
pub fn init(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, to_toml(&PageConfig::default())?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_app::config::CurveKind;
    use vista_app::LandingTab;
    use vista_theme::ColorScheme;

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[tabs]
default = "presentations"
curve = "spring"
spring = "gentle"

[theme]
default = "light"
store = "prefs.json"
"#,
        )
        .unwrap();

        let config = load_from_dir(dir.path()).unwrap();
        assert_eq!(config.tabs.default, LandingTab::Presentations);
        assert_eq!(config.tabs.curve, CurveKind::Spring);
        assert_eq!(config.theme.default, ColorScheme::Light);
        assert_eq!(config.theme.store, Some(dir.path().join("prefs.json")));
        assert_eq!(config.section, PageConfig::default().section);
    }

    #[test]
    fn test_store_path_is_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        let absolute = dir.path().join("elsewhere.json");
        fs::write(nested.join(CONFIG_FILE), "[theme]\nstore = \"state/prefs.json\"\n").unwrap();
        fs::write(
            dir.path().join("absolute.toml"),
            format!("[theme]\nstore = {:?}\n", absolute.display().to_string()),
        )
        .unwrap();

        let config = load_config(Some(&nested.join(CONFIG_FILE))).unwrap();
        assert_eq!(config.theme.store, Some(nested.join("state").join("prefs.json")));

        let config = load_from_dir(&dir.path().join("absolute.toml")).unwrap();
        assert_eq!(config.theme.store, Some(absolute));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("vista init"));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[section\noffset = 1").unwrap();

        let err = load_from_dir(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = init(dir.path()).unwrap();

        assert_eq!(load_from_dir(&path).unwrap(), PageConfig::default());
        assert!(init(dir.path()).is_err());
    }
}
