//! Configuration loader for the md2smf converter.
//!
//! Settings resolve through a small precedence stack:
//! built-in defaults → `.md2smf.toml` in the working directory → override path.
//! Later layers replace individual values from earlier ones; CLI flags are
//! applied by the caller on top of the resolved result.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".md2smf.toml";

/// Maximum number of address lines the head block keeps.
pub const MAX_HEAD_LINES: usize = 7;

/// Complete configuration resolved from defaults and on-disk overrides.
#[derive(Clone, Debug)]
pub struct Config {
    pub format: FormatSettings,
    pub head: HeadSettings,
    pub sources: ConfigSources,
}

/// Output formatting switches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FormatSettings {
    pub monospace: bool,
    pub chapter_names: bool,
    pub part_names: bool,
}

/// Where the sender's address block comes from, if configured.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum HeadSettings {
    #[default]
    Placeholder,
    /// Absolute path, resolved against the directory of the declaring file.
    File(PathBuf),
    Lines(Vec<String>),
}

/// Provenance information for resolved configuration.
#[derive(Clone, Debug)]
pub struct ConfigSources {
    pub working_directory: PathBuf,
    pub layers: Vec<ConfigSource>,
}

/// Specific layer of configuration (default/local/override).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigSource {
    pub kind: ConfigSourceKind,
    pub path: Option<PathBuf>,
    pub base_dir: PathBuf,
}

impl ConfigSource {
    fn defaults(base_dir: PathBuf) -> Self {
        ConfigSource {
            kind: ConfigSourceKind::Default,
            path: None,
            base_dir,
        }
    }

    fn for_file(kind: ConfigSourceKind, path: PathBuf) -> Self {
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        ConfigSource {
            kind,
            path: Some(path),
            base_dir,
        }
    }

    fn describe(&self) -> String {
        match (&self.kind, &self.path) {
            (ConfigSourceKind::Default, _) => "built-in defaults".to_owned(),
            (kind, Some(path)) => format!("{} at {}", kind, path.display()),
            (kind, None) => kind.to_string(),
        }
    }
}

/// Kinds of configuration sources, ordered from lowest to highest precedence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigSourceKind {
    Default,
    Local,
    Override,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigSourceKind::Default => "defaults",
            ConfigSourceKind::Local => "local config",
            ConfigSourceKind::Override => "override config",
        };
        f.write_str(label)
    }
}

/// Loader options, typically supplied by the CLI layer.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub override_path: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve working directory {attempted}: {source}")]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
    #[error("override config {path} not found")]
    OverrideNotFound { path: PathBuf },
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("configuration validation failed:\n{0}")]
    Validation(ConfigValidationErrors),
}

impl Config {
    /// Loads configuration using the precedence rules and returns typed settings.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = resolve_working_dir(options.working_dir)?;
        let override_path = options
            .override_path
            .map(|path| make_absolute(&path, &working_dir));

        if let Some(path) = &override_path {
            if !path.exists() {
                return Err(ConfigError::OverrideNotFound { path: path.clone() });
            }
        }

        let default_source = ConfigSource::defaults(working_dir.clone());
        let mut merged = PartialConfig::default();
        let mut source_layers = vec![default_source];

        let local_config_path = working_dir.join(CONFIG_FILE_NAME);
        if local_config_path.exists() && Some(&local_config_path) != override_path.as_ref() {
            let source = ConfigSource::for_file(ConfigSourceKind::Local, local_config_path.clone());
            merged.merge(load_layer(&local_config_path, source.clone())?);
            source_layers.push(source);
        }

        if let Some(path) = override_path {
            let source = ConfigSource::for_file(ConfigSourceKind::Override, path.clone());
            merged.merge(load_layer(&path, source.clone())?);
            source_layers.push(source);
        }

        let (format, head) = merged.finalize().map_err(ConfigError::Validation)?;
        Ok(Config {
            format,
            head,
            sources: ConfigSources {
                working_directory: working_dir,
                layers: source_layers,
            },
        })
    }
}

fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match override_dir {
        Some(path) => fs::canonicalize(&path).map_err(|source| ConfigError::WorkingDirectory {
            attempted: path,
            source,
        }),
        None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
            attempted: PathBuf::from("."),
            source,
        }),
    }
}

fn make_absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn load_layer(path: &Path, source: ConfigSource) -> Result<PartialConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.into(),
        source,
    })?;
    let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.into(),
        source,
    })?;
    Ok(raw.into_partial(source))
}

#[derive(Clone, Debug, Default)]
struct PartialConfig {
    monospace: Option<bool>,
    chapter_names: Option<bool>,
    part_names: Option<bool>,
    head: Option<Located<RawHead>>,
}

impl PartialConfig {
    fn merge(&mut self, other: PartialConfig) {
        if other.monospace.is_some() {
            self.monospace = other.monospace;
        }
        if other.chapter_names.is_some() {
            self.chapter_names = other.chapter_names;
        }
        if other.part_names.is_some() {
            self.part_names = other.part_names;
        }
        if other.head.is_some() {
            self.head = other.head;
        }
    }

    fn finalize(self) -> Result<(FormatSettings, HeadSettings), ConfigValidationErrors> {
        let format = FormatSettings {
            monospace: self.monospace.unwrap_or(false),
            chapter_names: self.chapter_names.unwrap_or(false),
            part_names: self.part_names.unwrap_or(false),
        };

        let mut errors = Vec::new();
        let head = match self.head {
            None => HeadSettings::Placeholder,
            Some(located) => finalize_head(located, &mut errors),
        };

        if !errors.is_empty() {
            return Err(ConfigValidationErrors(errors));
        }
        Ok((format, head))
    }
}

fn finalize_head(
    located: Located<RawHead>,
    errors: &mut Vec<ConfigValidationError>,
) -> HeadSettings {
    let Located { value, source } = located;

    if let Some(file) = value.file {
        if file.as_os_str().is_empty() {
            errors.push(ConfigValidationError::new(
                Some(source),
                "head.file cannot be empty".into(),
            ));
            return HeadSettings::Placeholder;
        }
        return HeadSettings::File(make_absolute(&file, &source.base_dir));
    }

    match value.lines {
        Some(lines) if lines.len() > MAX_HEAD_LINES => {
            errors.push(ConfigValidationError::new(
                Some(source),
                format!(
                    "head.lines allows at most {MAX_HEAD_LINES} entries (received {})",
                    lines.len()
                ),
            ));
            HeadSettings::Placeholder
        }
        Some(lines) => HeadSettings::Lines(lines),
        None => HeadSettings::Placeholder,
    }
}

#[derive(Clone, Debug)]
struct Located<T> {
    value: T,
    source: ConfigSource,
}

/// Container for validation failures, formatted as a bullet list.
#[derive(Debug)]
pub struct ConfigValidationErrors(pub Vec<ConfigValidationError>);

impl fmt::Display for ConfigValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "- {err}")?;
        }
        Ok(())
    }
}

impl ConfigValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigValidationError> {
        self.0.iter()
    }
}

/// Validation failure with optional provenance.
#[derive(Clone, Debug)]
pub struct ConfigValidationError {
    pub source: Option<ConfigSource>,
    pub message: String,
}

impl ConfigValidationError {
    fn new(source: Option<ConfigSource>, message: String) -> Self {
        ConfigValidationError { source, message }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " ({})", source.describe())?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    format: Option<RawFormat>,
    #[serde(default)]
    head: Option<RawHead>,
}

impl RawConfig {
    fn into_partial(self, source: ConfigSource) -> PartialConfig {
        let format = self.format.unwrap_or_default();
        PartialConfig {
            monospace: format.monospace,
            chapter_names: format.chapter_names,
            part_names: format.part_names,
            head: self.head.map(|value| Located { value, source }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFormat {
    #[serde(default)]
    monospace: Option<bool>,
    #[serde(default)]
    chapter_names: Option<bool>,
    #[serde(default)]
    part_names: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHead {
    #[serde(default)]
    file: Option<PathBuf>,
    #[serde(default)]
    lines: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> ConfigSource {
        ConfigSource::for_file(ConfigSourceKind::Local, PathBuf::from("/books/.md2smf.toml"))
    }

    fn partial(contents: &str) -> PartialConfig {
        let raw: RawConfig = toml::from_str(contents).unwrap();
        raw.into_partial(source())
    }

    #[test]
    fn later_layers_replace_individual_values() {
        let mut merged = partial("[format]\nmonospace = true\nchapter_names = true\n");
        merged.merge(partial("[format]\nchapter_names = false\n"));

        let (format, head) = merged.finalize().unwrap();
        assert!(format.monospace);
        assert!(!format.chapter_names);
        assert!(!format.part_names);
        assert_eq!(head, HeadSettings::Placeholder);
    }

    #[test]
    fn head_file_resolves_against_config_dir() {
        let (_, head) = partial("[head]\nfile = \"head.txt\"\nlines = [\"ignored\"]\n")
            .finalize()
            .unwrap();
        assert_eq!(head, HeadSettings::File(PathBuf::from("/books/head.txt")));
    }

    #[test]
    fn rejects_oversized_head_lines() {
        let err = partial("[head]\nlines = [\"1\",\"2\",\"3\",\"4\",\"5\",\"6\",\"7\",\"8\"]\n")
            .finalize()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("head.lines allows at most 7 entries (received 8)"));
        assert!(message.contains("local config at /books/.md2smf.toml"));
    }

    #[test]
    fn rejects_empty_head_file() {
        let err = partial("[head]\nfile = \"\"\n").finalize().unwrap_err();
        assert_eq!(err.iter().count(), 1);
    }
}
