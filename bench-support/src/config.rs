//! Run configuration.
//!
//! Loaded from `seqbench.toml` when present, then overridden by the
//! `BENCH_NAMES` and `BENCH_TYPES` environment variables. Both variables are
//! colon-separated lists.
//!
//! ```
//! use bench_support::config::RunConfig;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     names = ["sort", "erase_front"]
//!     repeat = 3
//! "#).unwrap();
//!
//! assert!(config.is_enabled("sort"));
//! assert!(!config.is_enabled("fill_back"));
//! assert!(config.type_enabled("TrivialSmall"));
//! assert_eq!(config.repeat, 3);
//! ```
//!
//! | Key          | Default             | Meaning                                         |
//! |--------------|---------------------|-------------------------------------------------|
//! | `names`      | `[]`                | benchmark families to run (empty = all)         |
//! | `types`      | `[]`                | element types to run (empty = all, `["full"]` = full suite) |
//! | `repeat`     | `7`                 | trials averaged per size                        |
//! | `output_dir` | `"target/seqbench"` | where reports are written                       |
//! | `formats`    | `["google"]`        | report formats (`google`, `json`)               |
//! | `size_divisor` | `1`               | divides every size of every ladder              |

use std::path::{Path, PathBuf};

use seqbench::error::ConfigError;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::report::OutputFormat;

/// Environment variable selecting benchmark families.
pub const NAMES_ENV: &str = "BENCH_NAMES";
/// Environment variable selecting element types.
pub const TYPES_ENV: &str = "BENCH_TYPES";
/// Default config file looked up by the runner.
pub const DEFAULT_CONFIG_FILE: &str = "seqbench.toml";

/// Trials averaged per size.
pub const DEFAULT_REPEAT: usize = 7;

const FULL_SUITE: &str = "full";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub names: Vec<String>,
    pub types: Vec<String>,
    pub repeat: usize,
    pub output_dir: PathBuf,
    pub formats: Vec<OutputFormat>,
    /// Smoke runs use a large divisor to shrink every ladder.
    pub size_divisor: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            types: Vec::new(),
            repeat: DEFAULT_REPEAT,
            output_dir: PathBuf::from("target/seqbench"),
            formats: vec![OutputFormat::GoogleCharts],
            size_divisor: 1,
        }
    }
}

impl RunConfig {
    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds an invalid value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, HarnessError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `BENCH_NAMES` / `BENCH_TYPES` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let names = std::env::var(NAMES_ENV).ok();
        let types = std::env::var(TYPES_ENV).ok();
        self.with_overrides(names.as_deref(), types.as_deref())
    }

    /// Replaces the family and type lists with colon-separated overrides.
    ///
    /// `None` keeps the current list; an empty string clears it.
    pub fn with_overrides(mut self, names: Option<&str>, types: Option<&str>) -> Self {
        if let Some(names) = names {
            self.names = split_options(names);
        }
        if let Some(types) = types {
            self.types = split_options(types);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat == 0 {
            return Err(ConfigError::invalid("repeat must be at least 1"));
        }
        if self.size_divisor == 0 {
            return Err(ConfigError::invalid("size_divisor must be at least 1"));
        }
        Ok(())
    }

    /// Returns `true` if the benchmark family `name` should run.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.names.is_empty() || self.names.iter().any(|n| n == name)
    }

    /// Returns `true` when the full suite, slow families included, was asked
    /// for.
    pub fn is_full(&self) -> bool {
        matches!(self.types.as_slice(), [only] if only == FULL_SUITE)
    }

    /// Returns `true` if element type `name` should run in the fast suite.
    pub fn type_enabled(&self, name: &str) -> bool {
        self.types.is_empty() || self.types.iter().any(|t| t == name)
    }
}

/// Splits a colon-separated option list, dropping empty segments.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(':')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // Parsing
    // ==============================================

    mod parsing {
        use super::*;

        #[test]
        fn empty_document_is_default() {
            let config = RunConfig::from_toml_str("").unwrap();
            assert_eq!(config, RunConfig::default());
            assert_eq!(config.repeat, DEFAULT_REPEAT);
        }

        #[test]
        fn full_document() {
            let config = RunConfig::from_toml_str(
                r#"
                names = ["fill_back"]
                types = ["TrivialLarge", "NonTrivialString"]
                repeat = 2
                output_dir = "out"
                formats = ["google", "json"]
                "#,
            )
            .unwrap();
            assert_eq!(config.names, vec!["fill_back"]);
            assert_eq!(config.types.len(), 2);
            assert_eq!(config.output_dir, PathBuf::from("out"));
            assert_eq!(
                config.formats,
                vec![OutputFormat::GoogleCharts, OutputFormat::Json]
            );
        }

        #[test]
        fn zero_repeat_is_rejected() {
            let err = RunConfig::from_toml_str("repeat = 0").unwrap_err();
            assert!(matches!(err, HarnessError::Config(ConfigError::Invalid(_))));
        }

        #[test]
        fn zero_divisor_is_rejected() {
            let err = RunConfig::from_toml_str("size_divisor = 0").unwrap_err();
            assert!(matches!(err, HarnessError::Config(ConfigError::Invalid(_))));
            assert_eq!(
                RunConfig::from_toml_str("size_divisor = 100").unwrap().size_divisor,
                100
            );
        }

        #[test]
        fn unknown_key_is_rejected() {
            let err = RunConfig::from_toml_str("repeats = 3").unwrap_err();
            assert!(matches!(err, HarnessError::Toml(_)));
        }

        #[test]
        fn missing_file_falls_back_to_default() {
            let dir = tempfile::tempdir().unwrap();
            let config = RunConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
            assert_eq!(config, RunConfig::default());
        }

        #[test]
        fn load_reads_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("seqbench.toml");
            std::fs::write(&path, "types = [\"full\"]\n").unwrap();
            let config = RunConfig::load(&path).unwrap();
            assert!(config.is_full());
        }
    }

    // ==============================================
    // Selection
    // ==============================================

    mod selection {
        use super::*;

        #[test]
        fn split_drops_empty_segments() {
            assert_eq!(split_options("a:b::c:"), vec!["a", "b", "c"]);
            assert!(split_options("").is_empty());
            assert_eq!(split_options("sort"), vec!["sort"]);
        }

        #[test]
        fn overrides_replace_lists() {
            let config = RunConfig::default()
                .with_overrides(Some("sort:find"), Some("TrivialSmall"));
            assert!(config.is_enabled("find"));
            assert!(!config.is_enabled("write"));
            assert!(config.type_enabled("TrivialSmall"));
            assert!(!config.type_enabled("TrivialHuge"));
        }

        #[test]
        fn none_keeps_and_empty_clears() {
            let config = RunConfig::from_toml_str("names = [\"sort\"]\ntypes = [\"TrivialSmall\"]")
                .unwrap()
                .with_overrides(None, Some(""));
            assert_eq!(config.names, vec!["sort"]);
            assert!(config.types.is_empty());
        }

        #[test]
        fn full_only_when_alone() {
            let full = RunConfig::default().with_overrides(None, Some("full"));
            let mixed = RunConfig::default().with_overrides(None, Some("full:TrivialSmall"));
            assert!(full.is_full());
            assert!(!mixed.is_full());
            assert!(!RunConfig::default().is_full());
        }
    }
}
