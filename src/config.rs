//! Run configuration: an optional TOML file merged with command-line flags.
//!
//! ```toml
//! package = "crate::errors"
//! sources = ["errors/debug.csv", "errors/mobile.csv"]
//! out = "src/errors/generated.rs"
//! test_out = "src/errors/generated_test.rs"
//! match_line_numbers = true
//! ```
//!
//! Relative paths in the file are taken relative to the file itself.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::generate::{Destination, GenerateOptions};

pub const DEFAULT_PACKAGE: &str = "errors";
pub const DEFAULT_OUT: &str = "generated.rs";
pub const DEFAULT_TEST_OUT: &str = "generated_test.rs";

static MODULE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").expect("module path pattern compiles")
});

/// Strict and reserved keywords of the 2024 edition. None of them can name a
/// module without `r#`, which is not supported.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self", "static",
    "struct", "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual",
    "where", "while", "yield",
];

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub package: Option<String>,
    pub sources: Vec<PathBuf>,
    pub out: Option<String>,
    /// An empty string disables the test artifact.
    pub test_out: Option<String>,
    pub skip_validate: bool,
    pub match_line_numbers: bool,
}

/// Values given on the command line. These win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub package: Option<String>,
    /// Replaces the file's list when non-empty.
    pub sources: Vec<PathBuf>,
    pub out: Option<String>,
    pub test_out: Option<String>,
    pub skip_validate: bool,
    pub match_line_numbers: bool,
    pub dump_context: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        let config = Config::parse(&text).map_err(|e| match e {
            Error::Config { message } => Error::config(format!("{}: {message}", path.display())),
            other => other,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    pub fn parse(text: &str) -> Result<Config, Error> {
        toml::from_str(text).map_err(|e| Error::config(e.message()))
    }

    fn relative_to(mut self, base: &Path) -> Config {
        self.sources = self.sources.into_iter().map(|s| base.join(s)).collect();
        self.out = self.out.map(|o| rebase(base, o));
        self.test_out = self.test_out.map(|o| rebase(base, o));
        self
    }

    /// Merge with command-line values and check the result.
    pub fn resolve(self, flags: Overrides, timestamp: DateTime<Utc>) -> Result<GenerateOptions, Error> {
        let package = flags.package.or(self.package).unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
        check_package(&package)?;

        let sources = if flags.sources.is_empty() { self.sources } else { flags.sources };

        let out = flags.out.or(self.out).unwrap_or_else(|| DEFAULT_OUT.to_string());
        let out = Destination::parse(&out).ok_or_else(|| Error::config("output path is empty"))?;
        let test_out = flags.test_out.or(self.test_out).unwrap_or_else(|| DEFAULT_TEST_OUT.to_string());
        let test_out = Destination::parse(&test_out);
        let context_out = flags.dump_context.as_deref().and_then(Destination::parse);
        check_distinct(&[
            ("source artifact", Some(&out)),
            ("test artifact", test_out.as_ref()),
            ("context dump", context_out.as_ref()),
        ])?;

        Ok(GenerateOptions {
            package,
            sources,
            out,
            test_out,
            validate: !(flags.skip_validate || self.skip_validate),
            match_line_numbers: flags.match_line_numbers || self.match_line_numbers,
            timestamp,
            context_out,
        })
    }
}

/// `package` must be a `::` separated path usable in a `use` item. `crate`
/// and `self` may only lead it, and `super` may only follow `self` or `super`.
fn check_package(package: &str) -> Result<(), Error> {
    let invalid = |why: String| Error::config(format!("package '{package}' is not a Rust module path{why}"));
    if !MODULE_PATH.is_match(package) {
        return Err(invalid(String::new()));
    }
    let segments: Vec<&str> = package.split("::").collect();
    for (i, segment) in segments.iter().enumerate() {
        let allowed = match *segment {
            "crate" | "self" => i == 0,
            "super" => segments[..i].iter().all(|s| matches!(*s, "super" | "self")),
            "_" => false,
            other => !KEYWORDS.contains(&other),
        };
        if !allowed {
            return Err(invalid(format!(": '{segment}' cannot be used here (r# paths are not supported)")));
        }
    }
    Ok(())
}

/// Fail if two outputs name the same file. Any number may go to stdout.
fn check_distinct(outputs: &[(&str, Option<&Destination>)]) -> Result<(), Error> {
    let files: Vec<(&str, PathBuf)> = outputs
        .iter()
        .filter_map(|(what, dest)| match dest {
            Some(Destination::File(path)) => Some((*what, normalize(path))),
            _ => None,
        })
        .collect();
    for (i, (first, a)) in files.iter().enumerate() {
        if let Some((second, _)) = files[i + 1..].iter().find(|(_, b)| a == b) {
            return Err(Error::config(format!(
                "{first} and {second} would both be written to {}",
                a.display()
            )));
        }
    }
    Ok(())
}

/// Absolute form of `path` with `.` components dropped. `..` is kept as is.
fn normalize(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

fn rebase(base: &Path, value: String) -> String {
    match Destination::parse(&value) {
        Some(Destination::File(path)) => base.join(path).display().to_string(),
        _ => value,
    }
}
