use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{Config, Overrides};
use crate::diagnostic::{ansi::AnsiRenderer, json, registry, Diagnostic};
use crate::emit::BuiltinTemplates;
use crate::error::Error;
use crate::generate::{self, Report};

/// Generate coded Rust error types from CSV error tables.
#[derive(Debug, Parser)]
#[command(name = "herr", version, about)]
pub struct Cli {
    /// Rust module path the generated code is mounted at [default: errors]
    #[arg(long, value_name = "PATH")]
    pub package: Option<String>,

    /// Error table to read; repeat for several tables
    #[arg(long = "source", value_name = "FILE")]
    pub sources: Vec<PathBuf>,

    /// Primary artifact, or `stdout` [default: generated.rs]
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,

    /// Test artifact, or `stdout`; empty to skip it [default: generated_test.rs]
    #[arg(long, value_name = "FILE")]
    pub test_out: Option<String>,

    /// Keep duplicate codes and labels instead of failing
    #[arg(long)]
    pub skip_validate: bool,

    /// Require each record's code to equal its position in the table
    #[arg(long)]
    pub match_line_numbers: bool,

    /// TOML file with defaults for the flags above
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write the template data context as JSON
    #[arg(long, value_name = "FILE")]
    pub dump_context: Option<String>,

    /// Explain a diagnostic code, e.g. HERR-V001
    #[arg(long, value_name = "CODE")]
    pub explain: Option<String>,

    /// List every diagnostic code
    #[arg(long)]
    pub list_errors: bool,

    /// How errors are reported on stderr
    #[arg(long, value_enum, default_value = "text")]
    pub error_format: ErrorFormat,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Fixed generation time, in seconds since the epoch
    #[arg(long, env = "SOURCE_DATE_EPOCH", hide = true)]
    pub source_date_epoch: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorFormat {
    Text,
    Json,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn init_logging(&self) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(self.log_level()))
            .format_timestamp(None)
            .init();
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            package: self.package.clone(),
            sources: self.sources.clone(),
            out: self.out.clone(),
            test_out: self.test_out.clone(),
            skip_validate: self.skip_validate,
            match_line_numbers: self.match_line_numbers,
            dump_context: self.dump_context.clone(),
        }
    }

    pub fn timestamp(&self) -> Result<DateTime<Utc>, Error> {
        match self.source_date_epoch {
            Some(secs) => Utc
                .timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| Error::config(format!("SOURCE_DATE_EPOCH {secs} is out of range"))),
            None => Ok(Utc::now()),
        }
    }

    /// Load config, merge flags and generate.
    pub fn generate(&self) -> Result<Report, Error> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let options = config.resolve(self.overrides(), self.timestamp()?)?;
        log::debug!("resolved options: {options:?}");
        generate::run(&options, &BuiltinTemplates)
    }

    pub fn render_error(&self, e: &Error, use_color: bool) -> String {
        let d = Diagnostic::from(e);
        match self.error_format {
            ErrorFormat::Text => AnsiRenderer { use_color }.render(&d),
            ErrorFormat::Json => json::render(&d) + "\n",
        }
    }
}

/// Long explanation of a diagnostic code, if it exists.
pub fn explain(code: &str) -> Option<&'static str> {
    registry::lookup(code).map(|e| e.long)
}

/// One `CODE  short description` line per diagnostic code.
pub fn list_errors() -> String {
    registry::REGISTRY.iter().map(|e| format!("{}  {}\n", e.code, e.short)).collect()
}
