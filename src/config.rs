//! Configuration for strictpy runs.
//!
//! Configuration is a YAML file. Every key is optional.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::violations::{parse_code, Category, ViolationCatalog};

/// File names looked up, in order, when no config path is given.
pub const CONFIG_FILE_NAMES: &[&str] = &["strictpy.yaml", ".strictpy.yaml", "setup.strictpy.yaml"];

pub const DEFAULT_MAX_COGNITIVE_SCORE: u32 = 12;
pub const DEFAULT_MAX_COGNITIVE_AVERAGE: u32 = 8;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Highest cognitive score a single function may have.
    #[serde(default = "default_max_cognitive_score")]
    pub max_cognitive_score: u32,
    /// Highest average cognitive score of the functions in a module.
    #[serde(default = "default_max_cognitive_average")]
    pub max_cognitive_average: u32,
    /// Codes (`SP513`, `513`) or category names whose violations are dropped.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Glob patterns for paths to skip (e.g. "**/migrations/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Whether to lint test files (default: true)
    #[serde(default)]
    pub include_test_files: Option<bool>,
}

fn default_max_cognitive_score() -> u32 {
    DEFAULT_MAX_COGNITIVE_SCORE
}

fn default_max_cognitive_average() -> u32 {
    DEFAULT_MAX_COGNITIVE_AVERAGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cognitive_score: DEFAULT_MAX_COGNITIVE_SCORE,
            max_cognitive_average: DEFAULT_MAX_COGNITIVE_AVERAGE,
            ignore: Vec::new(),
            excluded_paths: Vec::new(),
            include_test_files: None,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        // an empty file is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// First known config file present in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Load `explicit` if given, otherwise a discovered file in `dir`,
    /// otherwise defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::parse_file(path);
        }
        match Self::discover(dir) {
            Some(path) => {
                log::debug!("using config {}", path.display());
                Self::parse_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check limits, ignore entries and exclusion globs.
    pub fn validate(&self, catalog: &ViolationCatalog) -> anyhow::Result<()> {
        if self.max_cognitive_score == 0 {
            bail!("max_cognitive_score must be at least 1");
        }
        if self.max_cognitive_average == 0 {
            bail!("max_cognitive_average must be at least 1");
        }
        for entry in &self.ignore {
            if Category::parse(entry).is_some() {
                continue;
            }
            match parse_code(entry) {
                Some(code) if catalog.get(code).is_some() => {}
                Some(_) => bail!("unknown violation code in ignore: {}", entry),
                None => bail!("ignore entry is neither a code nor a category: {}", entry),
            }
        }
        self.exclusion_matcher()?;
        Ok(())
    }

    /// Returns whether to include test files (defaults to true).
    pub fn should_include_test_files(&self) -> bool {
        self.include_test_files.unwrap_or(true)
    }

    /// Codes dropped from reports, with categories expanded.
    pub fn ignored_codes(&self, catalog: &ViolationCatalog) -> HashSet<u16> {
        let mut codes = HashSet::new();
        for entry in &self.ignore {
            if let Some(category) = Category::parse(entry) {
                codes.extend(catalog.definitions(category).iter().map(|d| d.code));
            } else if let Some(code) = parse_code(entry) {
                codes.insert(code);
            }
        }
        codes
    }

    /// Compile `excluded_paths` into one matcher.
    pub fn exclusion_matcher(&self) -> anyhow::Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excluded_paths {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid excluded_paths pattern {:?}", pattern))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }
}

/// Whether `path` looks like a pytest-style test module.
pub fn is_test_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let stem = name.strip_suffix(".py").unwrap_or(name);
    if stem.starts_with("test_") || stem.ends_with("_test") || stem == "conftest" {
        return true;
    }
    path.components()
        .any(|c| matches!(c.as_os_str().to_str(), Some("tests") | Some("test")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
max_cognitive_score: 10
max_cognitive_average: 5
ignore:
  - SP513
  - naming
excluded_paths:
  - "**/migrations/**"
include_test_files: false
"#;
        let config = Config::parse_str(yaml).unwrap();
        assert_eq!(config.max_cognitive_score, 10);
        assert_eq!(config.max_cognitive_average, 5);
        assert_eq!(config.ignore, vec!["SP513", "naming"]);
        assert!(!config.should_include_test_files());

        let catalog = ViolationCatalog::standard().unwrap();
        config.validate(&catalog).unwrap();
        let ignored = config.ignored_codes(&catalog);
        assert!(ignored.contains(&513));
        assert!(ignored.contains(&100));
        assert!(!ignored.contains(&231));
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse_str("").unwrap();
        assert_eq!(config.max_cognitive_score, DEFAULT_MAX_COGNITIVE_SCORE);
        assert_eq!(config.max_cognitive_average, DEFAULT_MAX_COGNITIVE_AVERAGE);
        assert!(config.should_include_test_files());

        let partial = Config::parse_str("max_cognitive_score: 3").unwrap();
        assert_eq!(partial.max_cognitive_average, DEFAULT_MAX_COGNITIVE_AVERAGE);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse_str("max_score: 3").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let catalog = ViolationCatalog::standard().unwrap();

        let zero = Config {
            max_cognitive_score: 0,
            ..Default::default()
        };
        assert!(zero.validate(&catalog).is_err());

        let unknown = Config {
            ignore: vec!["SP999".to_string()],
            ..Default::default()
        };
        let err = unknown.validate(&catalog).unwrap_err();
        assert!(err.to_string().contains("SP999"));

        let garbage = Config {
            ignore: vec!["everything".to_string()],
            ..Default::default()
        };
        assert!(garbage.validate(&catalog).is_err());

        let bad_glob = Config {
            excluded_paths: vec!["a/[".to_string()],
            ..Default::default()
        };
        assert!(bad_glob.validate(&catalog).is_err());
    }

    #[test]
    fn test_discover_prefers_first_name() {
        let temp = TempDir::new().unwrap();
        assert!(Config::discover(temp.path()).is_none());

        std::fs::write(temp.path().join(".strictpy.yaml"), "max_cognitive_score: 4").unwrap();
        std::fs::write(temp.path().join("strictpy.yaml"), "max_cognitive_score: 7").unwrap();

        let found = Config::discover(temp.path()).unwrap();
        assert!(found.ends_with("strictpy.yaml"));
        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.max_cognitive_score, 7);
    }

    #[test]
    fn test_explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("strictpy.yaml"), "max_cognitive_score: 7").unwrap();
        let explicit = temp.path().join("custom.yaml");
        std::fs::write(&explicit, "max_cognitive_score: 2").unwrap();

        let config = Config::load(Some(explicit.as_path()), temp.path()).unwrap();
        assert_eq!(config.max_cognitive_score, 2);
    }

    #[test]
    fn test_exclusion_matcher() {
        let config = Config {
            excluded_paths: vec!["**/migrations/**".to_string(), "**/*_pb2.py".to_string()],
            ..Default::default()
        };
        let matcher = config.exclusion_matcher().unwrap();
        assert!(matcher.is_match("app/migrations/0001_initial.py"));
        assert!(matcher.is_match("proto/service_pb2.py"));
        assert!(!matcher.is_match("app/models.py"));
    }

    #[test]
    fn test_is_test_file() {
        assert!(is_test_file(Path::new("pkg/test_models.py")));
        assert!(is_test_file(Path::new("pkg/models_test.py")));
        assert!(is_test_file(Path::new("tests/helpers.py")));
        assert!(is_test_file(Path::new("conftest.py")));
        assert!(!is_test_file(Path::new("pkg/testing.py")));
    }
}
